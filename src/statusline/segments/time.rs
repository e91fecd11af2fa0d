//! Time segment: wall-clock time and session duration.

use chrono::Local;

use crate::session::{SessionTimer, format_duration};
use crate::statusline::config::StatusLineConfig;
use crate::styling::{CLOCK, DIM, STOPWATCH_EMOJI, TIME_DIVIDER};

pub struct TimeSegment;

impl TimeSegment {
    pub fn render(&self, config: &StatusLineConfig, session_id: &str) -> String {
        self.render_with_timer(config, session_id, &SessionTimer::new())
    }

    /// Variant taking an explicit timer, so tests control the marker dir.
    pub fn render_with_timer(
        &self,
        config: &StatusLineConfig,
        session_id: &str,
        timer: &SessionTimer,
    ) -> String {
        let mut parts: Vec<String> = Vec::new();

        if config.display.show_current_time {
            let now = Local::now().format("%H:%M");
            parts.push(format!("{CLOCK}{now}{CLOCK:#}"));
        }

        if config.display.show_session_duration && !session_id.is_empty() {
            let elapsed = timer.elapsed(session_id);
            parts.push(format!("{STOPWATCH_EMOJI} {}", format_duration(elapsed)));
        }

        parts.join(&format!(" {DIM}{TIME_DIVIDER}{DIM:#} "))
    }
}
