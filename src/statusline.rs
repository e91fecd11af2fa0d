//! Two-line status banner for Claude Code.
//!
//! A raw JSON status event goes in; the [`renderer::StatusLineRenderer`]
//! parses it, asks each segment plugin for a styled fragment, and hands the
//! left/right groups of each line to the [`layout::LayoutEngine`], which
//! spaces them proportionally to the terminal width and drops the right side
//! when it cannot fit.

pub mod config;
pub mod event;
pub mod layout;
pub mod renderer;
pub mod segments;

pub use config::{ConfigError, ConfigValue, StatusLineConfig};
pub use renderer::StatusLineRenderer;
