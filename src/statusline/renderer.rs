//! Top-level status-line orchestration.
//!
//! Segment order is fixed: line 1 carries project + git, line 2 carries
//! model (+ output style + thinking) on the left and the lines delta + time
//! on the right. Right-hand groups are the first to go when the terminal is
//! narrow.

use crate::statusline::config::StatusLineConfig;
use crate::statusline::event::StatusEvent;
use crate::statusline::layout::LayoutEngine;
use crate::statusline::segments::{
    GitSegment, LinesSegment, ModelSegment, ProjectSegment, ThinkingSegment, TimeSegment,
};
use crate::styling::{BOTTOM_CORNER, DIM, TOP_CORNER, WARNING, WARNING_SIGN};
use crate::term;

pub struct StatusLineRenderer {
    config: StatusLineConfig,
    width: Option<usize>,
}

impl StatusLineRenderer {
    pub fn new(config: StatusLineConfig) -> Self {
        Self {
            config,
            width: None,
        }
    }

    /// Pin the layout width instead of querying the terminal.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    /// Render the two-line banner from the raw JSON event.
    ///
    /// Malformed input degrades to a one-line diagnostic; this never fails.
    pub fn render(&self, raw: &str) -> String {
        let event: StatusEvent = match serde_json::from_str(raw) {
            Ok(event) => event,
            Err(error) => {
                log::debug!("unparseable status event: {error}");
                return format!("{WARNING}{WARNING_SIGN} Invalid JSON input{WARNING:#}");
            }
        };

        let width = self.width.unwrap_or_else(term::width);
        let layout = LayoutEngine::new(&self.config);
        let current_dir = event.workspace.current_dir.as_deref().unwrap_or(".");

        // Line 1: project on the left, git on the right
        let left_1 = format!(
            "{TOP_CORNER} {}",
            ProjectSegment.render(
                &self.config,
                current_dir,
                event.workspace.project_dir.as_deref()
            )
        );
        let right_1 = GitSegment.render(current_dir);

        // Line 2: model, output style, thinking on the left; delta + time right
        let model = ModelSegment.render(event.model.display_name.as_deref().unwrap_or(""));
        let mut left_2 = format!("{BOTTOM_CORNER} {model}");
        if let Some(style_name) = event.output_style.name.as_deref() {
            if !style_name.is_empty() && style_name != "default" {
                left_2.push_str(&format!(" {DIM}[{style_name}]{DIM:#}"));
            }
        }
        let thinking = ThinkingSegment.render();
        if !thinking.is_empty() {
            left_2.push(' ');
            left_2.push_str(&thinking);
        }

        let lines = LinesSegment.render(
            &self.config,
            event.cost.total_lines_added,
            event.cost.total_lines_removed,
        );
        let time = TimeSegment.render(&self.config, &event.session_id);
        let right_2 = [lines, time]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("  ");

        format!(
            "{}\n{}",
            layout.align(&left_1, &right_1, width),
            layout.align(&left_2, &right_2, width)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statusline::config::ConfigValue;

    const EVENT: &str = r#"{
        "workspace": {
            "current_dir": "/work/projects/aiterm",
            "project_dir": "/work/projects/aiterm"
        },
        "model": {"display_name": "Claude Sonnet 4.5"},
        "output_style": {"name": "learning"},
        "session_id": "test-123",
        "cost": {
            "total_lines_added": 123,
            "total_lines_removed": 45,
            "total_duration_ms": 45000
        }
    }"#;

    fn renderer() -> StatusLineRenderer {
        let mut config = StatusLineConfig::default();
        config
            .set("display.show_lines_changed", ConfigValue::Bool(true))
            .unwrap();
        StatusLineRenderer::new(config).with_width(120)
    }

    #[test]
    fn renders_two_prefixed_lines() {
        let output = renderer().render(EVENT);
        let lines: Vec<&str> = output.split('\n').collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with(TOP_CORNER), "line 1: {:?}", lines[0]);
        assert!(lines[1].starts_with(BOTTOM_CORNER), "line 2: {:?}", lines[1]);
        assert!(!lines[0].is_empty() && !lines[1].is_empty());
    }

    #[test]
    fn carries_model_delta_and_output_style() {
        let output = renderer().render(EVENT);
        assert!(output.contains("Sonnet"));
        assert!(!output.contains("Claude Sonnet"));
        assert!(output.contains("+123"));
        assert!(output.contains("-45"));
        assert!(output.contains("[learning]"));
    }

    #[test]
    fn invalid_json_degrades_to_a_diagnostic_line() {
        let output = renderer().render("{ invalid json }");
        assert!(output.contains("Invalid JSON"));
        assert!(!output.contains('\n'));
    }

    #[test]
    fn empty_object_still_renders_two_lines() {
        let output = renderer().render("{}");
        let lines: Vec<&str> = output.split('\n').collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with(TOP_CORNER));
        assert!(lines[1].starts_with(BOTTOM_CORNER));
    }

    #[test]
    fn narrow_width_drops_the_right_side() {
        let mut config = StatusLineConfig::default();
        config
            .set("display.show_lines_changed", ConfigValue::Bool(true))
            .unwrap();
        let narrow = StatusLineRenderer::new(config).with_width(20);

        let output = narrow.render(EVENT);
        assert!(output.contains("Sonnet")); // left side survives
        assert!(!output.contains("+123")); // right side dropped
    }

    #[test]
    fn default_output_style_is_not_shown() {
        let raw = r#"{"output_style": {"name": "default"}}"#;
        let output = renderer().render(raw);
        assert!(!output.contains("[default]"));
    }
}
