//! Parsing of the backend's `{success, data}` response envelope.

use serde::{Deserialize, Deserializer};

use crate::domain::error::{NavError, Result};

#[derive(Debug, Deserialize)]
struct ApiEnvelope {
    success: bool,
    /// `None` only when the key is absent; `"data": null` is `Some(Null)`.
    #[serde(default, deserialize_with = "present")]
    data: Option<serde_json::Value>,
    #[serde(default)]
    message: Option<String>,
}

fn present<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Option<serde_json::Value>, D::Error> {
    serde_json::Value::deserialize(deserializer).map(Some)
}

/// Extracts `data` from a successful envelope.
///
/// # Errors
///
/// Returns [`NavError::Serialization`] for bodies that are not an envelope,
/// and [`NavError::Protocol`] when `success` is false or `data` is missing.
/// An explicit `"data": null` is returned as [`serde_json::Value::Null`].
///
/// ```
/// use campusnav::data::parse_envelope;
///
/// let data = parse_envelope(r#"{"success":true,"data":{"students":12}}"#)?;
/// assert_eq!(data["students"], 12);
/// assert!(parse_envelope(r#"{"success":false,"message":"forbidden"}"#).is_err());
/// # Ok::<(), campusnav::NavError>(())
/// ```
pub fn parse_envelope(body: &str) -> Result<serde_json::Value> {
    let envelope: ApiEnvelope = serde_json::from_str(body)?;

    if !envelope.success {
        return Err(NavError::Protocol(
            envelope.message.unwrap_or_else(|| "request unsuccessful".to_string()),
        ));
    }

    envelope
        .data
        .ok_or_else(|| NavError::Protocol("response has no data".to_string()))
}
