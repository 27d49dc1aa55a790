//! Newline-delimited JSON host protocol.
//!
//! The host writes one [`Event`] object per line and reads back one
//! [`Action`] object per line. When an event changes the chrome, a
//! `renderChrome` action carrying the full view model follows the event's
//! other actions.
//!
//! ```text
//! → {"type":"mount","width":390,"path":"/admin-dashboard.html","inventory":{...}}
//! ← {"action":"addListener","id":1,"target":"window","event":"resize","passive":true}
//! ← ...
//! ← {"action":"renderChrome","view":{...}}
//! → {"type":"hamburgerTap"}
//! ← {"action":"setAriaExpanded","expanded":true}
//! ```
//!
//! Malformed lines and events the controller rejects are logged and skipped;
//! the stream keeps going.

use std::io::{BufRead, Write};

use crate::app::{handle_event, Action, Event, NavigationController};
use crate::domain::error::{NavError, Result};

/// Counters for one bridge session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BridgeStats {
    pub events: usize,
    pub rejected: usize,
    pub actions: usize,
}

/// Pumps events from `reader` into `nav` until end of input.
///
/// # Errors
///
/// Returns [`NavError::Io`] if reading or writing fails, or
/// [`NavError::Serialization`] if an action cannot be encoded.
pub fn run<R: BufRead, W: Write>(
    nav: &mut NavigationController,
    reader: R,
    mut writer: W,
) -> Result<BridgeStats> {
    let mut stats = BridgeStats::default();

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let event = match parse_event(line) {
            Ok(event) => event,
            Err(e) => {
                tracing::warn!(error = %e, "skipping malformed event");
                stats.rejected += 1;
                continue;
            }
        };

        match handle_event(nav, &event) {
            Ok((should_render, mut actions)) => {
                stats.events += 1;
                if should_render {
                    actions.push(Action::RenderChrome {
                        view: Box::new(nav.compute_viewmodel()),
                    });
                }
                stats.actions += actions.len();
                write_actions(&mut writer, &actions)?;
            }
            Err(e) => {
                tracing::warn!(error = %e, event = event.name(), "event rejected");
                stats.rejected += 1;
            }
        }
    }

    tracing::debug!(?stats, "host stream closed");
    Ok(stats)
}

fn parse_event(line: &str) -> Result<Event> {
    serde_json::from_str(line).map_err(|e| NavError::Protocol(format!("bad event line: {e}")))
}

fn write_actions<W: Write>(writer: &mut W, actions: &[Action]) -> Result<()> {
    for action in actions {
        serde_json::to_writer(&mut *writer, action)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}
