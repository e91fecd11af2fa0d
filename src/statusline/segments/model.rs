//! Model segment: verbose model name to a color-coded tier word.

use anstyle::Style;

use crate::styling::{MODEL_HAIKU, MODEL_OPUS, MODEL_SONNET};

/// Tier words recognized in display names, with their colors.
const TIERS: &[(&str, Style)] = &[
    ("Opus", MODEL_OPUS),
    ("Sonnet", MODEL_SONNET),
    ("Haiku", MODEL_HAIKU),
];

pub struct ModelSegment;

impl ModelSegment {
    /// Shorten "Claude Sonnet 4.5" to a colored "Sonnet". Names with no
    /// recognized tier keep everything but the vendor prefix, unstyled.
    pub fn render(&self, display_name: &str) -> String {
        if display_name.is_empty() {
            return String::new();
        }
        for (tier, style) in TIERS {
            if display_name.contains(tier) {
                return format!("{style}{tier}{style:#}");
            }
        }
        display_name
            .strip_prefix("Claude ")
            .unwrap_or(display_name)
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sonnet_is_shortened_and_colored() {
        let fragment = ModelSegment.render("Claude Sonnet 4.5");
        assert!(fragment.contains("Sonnet"));
        assert!(!fragment.contains("Claude"));
        assert!(fragment.contains("\x1b["));
    }

    #[test]
    fn opus_and_haiku_tiers() {
        let opus = ModelSegment.render("Claude Opus 4");
        assert!(opus.contains("Opus"));
        assert!(!opus.contains("Claude"));
        assert!(opus.contains("\x1b[38;5;141m"));

        let haiku = ModelSegment.render("Claude Haiku 3.5");
        assert!(haiku.contains("Haiku"));
        assert!(haiku.contains("\x1b[38;5;114m"));
    }

    #[test]
    fn unrecognized_tier_drops_only_the_vendor_prefix() {
        assert_eq!(ModelSegment.render("Claude Next 2"), "Next 2");
        assert_eq!(ModelSegment.render("Mystery Model"), "Mystery Model");
    }

    #[test]
    fn empty_name_renders_nothing() {
        assert_eq!(ModelSegment.render(""), "");
    }
}
