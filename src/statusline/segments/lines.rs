//! Lines-changed segment: `+added -removed` delta for the session.

use crate::statusline::config::StatusLineConfig;
use crate::styling::{ADDITION, DELETION};

pub struct LinesSegment;

impl LinesSegment {
    /// Colored delta; empty when the feature is off or nothing changed.
    /// Zero halves are omitted rather than shown as `+0`/`-0`.
    pub fn render(&self, config: &StatusLineConfig, added: u64, removed: u64) -> String {
        if !config.display.show_lines_changed || (added == 0 && removed == 0) {
            return String::new();
        }

        let mut parts = Vec::new();
        if added > 0 {
            parts.push(format!("{ADDITION}+{added}{ADDITION:#}"));
        }
        if removed > 0 {
            parts.push(format!("{DELETION}-{removed}{DELETION:#}"));
        }
        parts.join(" ")
    }
}
