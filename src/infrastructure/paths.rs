//! Filesystem locations for persisted state and traces.
//!
//! The durable store and trace files live in a per-user data directory; the
//! session store lives in the OS temporary directory, which the OS clears
//! between sessions.

use std::path::PathBuf;

/// File name of the durable store inside the data directory.
pub const DURABLE_FILE: &str = "local-storage.json";

/// File name of the OTLP trace export inside the data directory.
pub const TRACE_FILE: &str = "campusnav-otlp.json";

/// Environment variable that overrides the session identifier.
pub const SESSION_ENV: &str = "CAMPUSNAV_SESSION";

/// Returns the data directory for durable storage and traces.
///
/// Resolution order: `$XDG_DATA_HOME/campusnav`, then
/// `$HOME/.local/share/campusnav`, then `./.campusnav`.
///
/// # Examples
///
/// ```
/// use campusnav::infrastructure::get_data_dir;
///
/// assert!(get_data_dir().ends_with("campusnav") || get_data_dir().ends_with(".campusnav"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    data_dir_from(
        std::env::var_os("XDG_DATA_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    )
}

fn data_dir_from(xdg_data_home: Option<PathBuf>, home: Option<PathBuf>) -> PathBuf {
    if let Some(xdg) = xdg_data_home.filter(|p| p.is_absolute()) {
        return xdg.join("campusnav");
    }
    if let Some(home) = home {
        return home.join(".local").join("share").join("campusnav");
    }
    PathBuf::from(".campusnav")
}

/// Returns the session-scoped store file.
///
/// Keyed by `$CAMPUSNAV_SESSION` when the host sets it, otherwise by the
/// parent process id, so reloads launched from the same host share it.
#[must_use]
pub fn get_session_file() -> PathBuf {
    let session = std::env::var(SESSION_ENV)
        .ok()
        .map(|s| sanitize(&s))
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| host_process_id().to_string());

    std::env::temp_dir()
        .join("campusnav")
        .join(format!("session-{session}.json"))
}

#[cfg(unix)]
fn host_process_id() -> u32 {
    std::os::unix::process::parent_id()
}

#[cfg(not(unix))]
fn host_process_id() -> u32 {
    std::process::id()
}

/// Keeps only characters safe in a file name.
fn sanitize(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_absolute_xdg_dir() {
        let dir = data_dir_from(Some("/xdg".into()), Some("/home/u".into()));
        assert_eq!(dir, PathBuf::from("/xdg/campusnav"));
    }

    #[test]
    fn ignores_relative_xdg_dir() {
        let dir = data_dir_from(Some("rel".into()), Some("/home/u".into()));
        assert_eq!(dir, PathBuf::from("/home/u/.local/share/campusnav"));
    }

    #[test]
    fn falls_back_to_working_directory() {
        assert_eq!(data_dir_from(None, None), PathBuf::from(".campusnav"));
    }

    #[test]
    fn sanitizes_session_ids() {
        assert_eq!(sanitize("../../etc/passwd"), "etcpasswd");
        assert_eq!(sanitize("tab-1_a"), "tab-1_a");
    }
}
