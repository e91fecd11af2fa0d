//! CLI command handlers.

pub mod config;
pub mod statusline;
