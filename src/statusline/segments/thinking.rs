//! Thinking segment: extended-thinking indicator from Claude settings.

use std::fs;
use std::path::{Path, PathBuf};

use crate::styling::{THINKING, THINKING_EMOJI};

pub struct ThinkingSegment;

impl ThinkingSegment {
    /// Magenta brain when `alwaysThinkingEnabled` is set in
    /// `~/.claude/settings.json`; empty for a missing or unreadable file.
    pub fn render(&self) -> String {
        match settings_path().as_deref().and_then(thinking_enabled) {
            Some(true) => format!("{THINKING}{THINKING_EMOJI}{THINKING:#}"),
            _ => String::new(),
        }
    }
}

fn settings_path() -> Option<PathBuf> {
    etcetera::home_dir()
        .ok()
        .map(|home| home.join(".claude").join("settings.json"))
}

fn thinking_enabled(path: &Path) -> Option<bool> {
    let text = fs::read_to_string(path).ok()?;
    let settings: serde_json::Value = serde_json::from_str(&text).ok()?;
    settings.get("alwaysThinkingEnabled")?.as_bool()
}
