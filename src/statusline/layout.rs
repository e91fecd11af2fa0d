//! Two-side line layout for the status banner.
//!
//! One logical line is a left fragment and a right fragment. The gap between
//! them scales with the terminal width (a preset fraction, clamped), and when
//! both sides plus the gap cannot fit, the right side is dropped whole —
//! left-side content is never sacrificed. Width accounting is ANSI-aware:
//! escape sequences contribute nothing, everything else counts at display
//! width.

use ansi_str::AnsiStr;
use unicode_width::UnicodeWidthStr;

use crate::statusline::config::StatusLineConfig;
use crate::styling::{DIM, GAP_SEPARATOR};

/// Smallest gap that can host the centered separator glyph.
const SEPARATOR_MIN_GAP: usize = 3;

/// Visible width of `text`: ANSI escapes stripped, the rest measured at
/// display width. Invariant under any nesting or adjacency of SGR sequences.
pub fn visible_width(text: &str) -> usize {
    text.ansi_strip().width()
}

/// Lays out `(left, right)` fragment pairs against a terminal width.
pub struct LayoutEngine<'a> {
    config: &'a StatusLineConfig,
}

impl<'a> LayoutEngine<'a> {
    pub fn new(config: &'a StatusLineConfig) -> Self {
        Self { config }
    }

    /// Gap width for a terminal of `width` columns: the preset fraction of
    /// the width, clamped to the configured bounds. Pure integer result.
    pub fn calculate_gap(&self, width: usize) -> usize {
        let preset = self.config.spacing.mode.preset();
        let proportional = (width as f64 * preset.fraction).round() as usize;

        let min = self.config.min_gap();
        // A preset switch can leave a stale override below the new minimum;
        // the minimum wins so clamp() stays well-formed.
        let max = self.config.max_gap().max(min);
        proportional.clamp(min, max)
    }

    /// A gap of exactly `width` visible columns. Wide gaps carry a centered
    /// dim separator glyph; narrow gaps (or separator off) are plain spaces.
    pub fn render_gap(&self, width: usize) -> String {
        if !self.config.spacing.show_separator || width < SEPARATOR_MIN_GAP {
            return " ".repeat(width);
        }
        let left = (width - 1) / 2;
        let right = width - 1 - left; // odd widths put the extra space on the right
        format!(
            "{}{DIM}{GAP_SEPARATOR}{DIM:#}{}",
            " ".repeat(left),
            " ".repeat(right)
        )
    }

    /// Lay out one physical line at `width` columns.
    pub fn align(&self, left: &str, right: &str, width: usize) -> String {
        if right.is_empty() {
            return left.to_string();
        }
        let gap = self.calculate_gap(width);
        if visible_width(left) + gap + visible_width(right) <= width {
            format!("{left}{}{right}", self.render_gap(gap))
        } else {
            left.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statusline::config::{ConfigValue, SpacingMode};
    use rstest::rstest;

    fn config() -> StatusLineConfig {
        StatusLineConfig::default()
    }

    fn config_with_mode(mode: SpacingMode) -> StatusLineConfig {
        let mut config = config();
        config.spacing.mode = mode;
        // Pin the clamps the classic tests assume
        config.spacing.min_gap = Some(10);
        config.spacing.max_gap = Some(40);
        config
    }

    #[rstest]
    #[case::standard(SpacingMode::Standard, 120, 24)]
    #[case::minimal(SpacingMode::Minimal, 120, 18)]
    #[case::spacious(SpacingMode::Spacious, 120, 36)]
    #[case::clamped_up(SpacingMode::Standard, 40, 10)]
    #[case::clamped_up_narrower(SpacingMode::Standard, 50, 10)]
    #[case::clamped_down(SpacingMode::Standard, 300, 40)]
    #[case::clamped_down_wider(SpacingMode::Standard, 400, 40)]
    fn proportional_gap(#[case] mode: SpacingMode, #[case] width: usize, #[case] expected: usize) {
        let config = config_with_mode(mode);
        assert_eq!(LayoutEngine::new(&config).calculate_gap(width), expected);
    }

    #[rstest]
    #[case::minimal(SpacingMode::Minimal, 5, 20)]
    #[case::standard(SpacingMode::Standard, 10, 40)]
    #[case::spacious(SpacingMode::Spacious, 15, 60)]
    fn preset_default_clamps(#[case] mode: SpacingMode, #[case] min: usize, #[case] max: usize) {
        let mut config = config();
        config.spacing.mode = mode;
        assert_eq!(config.min_gap(), min);
        assert_eq!(config.max_gap(), max);
    }

    #[test]
    fn explicit_overrides_beat_preset_clamps() {
        let mut config = config();
        config.set("spacing.min_gap", ConfigValue::Int(15)).unwrap();
        config.set("spacing.max_gap", ConfigValue::Int(30)).unwrap();
        let layout = LayoutEngine::new(&config);

        assert_eq!(layout.calculate_gap(60), 15); // 12 clamped up
        assert_eq!(layout.calculate_gap(200), 30); // 40 clamped down
    }

    #[test]
    fn gap_has_exact_visible_width_for_all_widths() {
        let config = config();
        let layout = LayoutEngine::new(&config);
        for width in 0..=50 {
            assert_eq!(
                visible_width(&layout.render_gap(width)),
                width,
                "width {width}"
            );
        }
    }

    #[test]
    fn gap_separator_is_dim_and_centered() {
        let config = config();
        let layout = LayoutEngine::new(&config);

        let gap = layout.render_gap(20);
        assert!(gap.contains('…'));
        assert!(gap.contains("\x1b[38;5;240m"));
        assert_eq!(visible_width(&gap), 20);

        // Exactly at the minimum hosting width
        assert!(layout.render_gap(3).contains('…'));

        // Odd and even widths both come out exact
        assert_eq!(visible_width(&layout.render_gap(7)), 7);
        assert_eq!(visible_width(&layout.render_gap(8)), 8);
    }

    #[test]
    fn narrow_gap_never_holds_the_separator() {
        let config = config();
        let layout = LayoutEngine::new(&config);
        assert_eq!(layout.render_gap(2), "  ");
        assert_eq!(layout.render_gap(0), "");
    }

    #[test]
    fn disabled_separator_yields_plain_spaces() {
        let mut config = config();
        config.spacing.show_separator = false;
        let layout = LayoutEngine::new(&config);
        assert_eq!(layout.render_gap(20), " ".repeat(20));
    }

    #[test]
    fn visible_width_ignores_ansi_sequences() {
        assert_eq!(visible_width("Plain text without codes"), 24);
        assert_eq!(
            visible_width("\x1b[38;5;240m\x1b[1mBold and colored\x1b[0m"),
            "Bold and colored".len()
        );
        assert_eq!(
            visible_width("\x1b[1m\x1b[31mRed bold\x1b[0m normal"),
            "Red bold normal".len()
        );
    }

    #[test]
    fn align_places_both_sides_when_they_fit() {
        let config = config();
        let layout = LayoutEngine::new(&config);

        let line = layout.align("Left side", "Right side", 120);
        assert!(line.contains("Left side"));
        assert!(line.contains("Right side"));
        assert!(line.contains('…'));
        assert_eq!(
            visible_width(&line),
            "Left side".len() + layout.calculate_gap(120) + "Right side".len()
        );
    }

    #[test]
    fn align_drops_the_right_side_when_too_narrow() {
        let config = config();
        let layout = LayoutEngine::new(&config);

        let left = "This is a very long left side segment that takes lots of space";
        let line = layout.align(left, "Right", 40);
        assert_eq!(line, left);
    }

    #[test]
    fn align_with_empty_right_is_just_the_left() {
        let config = config();
        let layout = LayoutEngine::new(&config);
        assert_eq!(layout.align("only left", "", 80), "only left");
    }

    #[test]
    fn styled_fragments_measure_by_visible_width() {
        let config = config();
        let layout = LayoutEngine::new(&config);

        // 20 visible columns of left, heavily escaped; right fits at 80
        let left = format!("\x1b[36m{}\x1b[0m", "x".repeat(20));
        let line = layout.align(&left, "ok", 80);
        assert!(line.contains("ok"));
    }
}
