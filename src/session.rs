//! Filesystem-backed session timing.
//!
//! Claude Code does not tell the status line when a session started, so the
//! first render of a session drops a marker file and later renders measure
//! elapsed time from its mtime. Markers are per-session and the touch is
//! idempotent; no locking is needed.

use std::fs;
use std::path::PathBuf;
use std::time::{Duration, UNIX_EPOCH};

use crate::utils::get_now;

/// Tracks elapsed time per session id via marker files in a scratch directory.
#[derive(Debug, Clone)]
pub struct SessionTimer {
    dir: PathBuf,
}

impl SessionTimer {
    /// Timer over the system temp directory (the normal case).
    pub fn new() -> Self {
        Self::at(std::env::temp_dir())
    }

    /// Timer over an explicit directory.
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Elapsed time since the session was first observed.
    ///
    /// Creates the marker on first sight. Any filesystem failure collapses to
    /// a zero duration; the status line must render regardless.
    pub fn elapsed(&self, session_id: &str) -> Duration {
        let marker = self.dir.join(marker_name(session_id));

        match fs::metadata(&marker) {
            Ok(meta) => {
                let started = meta
                    .modified()
                    .ok()
                    .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
                    .map(|d| d.as_secs());
                match started {
                    Some(start) => Duration::from_secs(get_now().saturating_sub(start)),
                    None => Duration::ZERO,
                }
            }
            Err(_) => {
                if let Err(e) = fs::File::create(&marker) {
                    log::debug!("could not create session marker {}: {e}", marker.display());
                }
                Duration::ZERO
            }
        }
    }
}

impl Default for SessionTimer {
    fn default() -> Self {
        Self::new()
    }
}

/// Session ids come from untrusted input; map anything path-hostile to '-'.
fn marker_name(session_id: &str) -> String {
    let safe: String = session_id
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '-'
            }
        })
        .collect();
    format!("claude-session-{safe}")
}

/// Compact human form of a session duration: `<1m`, `42m`, `2h 5m`.
pub fn format_duration(elapsed: Duration) -> String {
    let minutes = elapsed.as_secs() / 60;
    if minutes == 0 {
        "<1m".to_string()
    } else if minutes < 60 {
        format!("{minutes}m")
    } else {
        format!("{}h {}m", minutes / 60, minutes % 60)
    }
}
