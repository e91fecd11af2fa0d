//! Style constants and glyphs for terminal output.
//!
//! Status-line fragments bake ANSI escapes directly into the strings they
//! return, because the banner is consumed through a pipe by the host terminal
//! application — anstream's tty detection would strip the colors we need.
//! Styles render inline via anstyle's `Display`:
//!
//! ```
//! use aiterm::styling::ADDITION;
//!
//! let fragment = format!("{ADDITION}+42{ADDITION:#}");
//! assert!(fragment.contains("\x1b["));
//! ```
//!
//! Command handlers that talk to a human (config listing, errors) still go
//! through the re-exported anstream macros so `NO_COLOR` is respected there.

use anstyle::{Ansi256Color, AnsiColor, Color, Style};

/// Auto-detecting print that respects NO_COLOR and terminal capabilities
pub use anstream::print;

/// Auto-detecting println that respects NO_COLOR and terminal capabilities
pub use anstream::println;

/// Auto-detecting eprintln that respects NO_COLOR and terminal capabilities
pub use anstream::eprintln;

// ============================================================================
// Style Constants
// ============================================================================

/// Addition half of the lines-changed delta (green)
pub const ADDITION: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green)));

/// Deletion half of the lines-changed delta (red)
pub const DELETION: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red)));

/// Dim gray for the gap separator and minor metadata (256-color 240)
pub const DIM: Style = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(240))));

/// Directory label in the project segment (cyan + bold)
pub const DIRECTORY: Style = Style::new()
    .bold()
    .fg_color(Some(Color::Ansi(AnsiColor::Cyan)));

/// Branch name in the git segment (green)
pub const GIT_BRANCH: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green)));

/// Dirty-worktree marker in the git segment (red)
pub const GIT_DIRTY: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red)));

/// Wall-clock time in the time segment (bright white)
pub const CLOCK: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::BrightWhite)));

/// Extended-thinking indicator (magenta)
pub const THINKING: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Magenta)));

/// Diagnostic fallback line (yellow)
pub const WARNING: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow)));

/// Opus tier (256-color 141, soft purple)
pub const MODEL_OPUS: Style = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(141))));

/// Sonnet tier (256-color 75, sky blue)
pub const MODEL_SONNET: Style = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(75))));

/// Haiku tier (256-color 114, leaf green)
pub const MODEL_HAIKU: Style = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(114))));

// ============================================================================
// Glyphs
// ============================================================================

/// Line-1 prefix (rounded top-left corner)
pub const TOP_CORNER: &str = "╭─";

/// Line-2 prefix (rounded bottom-left corner)
pub const BOTTOM_CORNER: &str = "╰─";

/// Centered glyph embedded in wide gaps
pub const GAP_SEPARATOR: &str = "…";

/// Divider between wall-clock time and session duration
pub const TIME_DIVIDER: &str = "│";

/// Python project marker icon
pub const PYTHON_EMOJI: &str = "🐍";

/// R package marker icon
pub const R_PACKAGE_EMOJI: &str = "📦";

/// Fallback project icon
pub const FOLDER_EMOJI: &str = "📁";

/// Git branch icon
pub const BRANCH_EMOJI: &str = "🌿";

/// Dirty-worktree marker glyph
pub const DIRTY_MARK: &str = "✗";

/// Session duration icon
pub const STOPWATCH_EMOJI: &str = "⏱";

/// Extended-thinking icon
pub const THINKING_EMOJI: &str = "🧠";

/// Diagnostic fallback glyph
pub const WARNING_SIGN: &str = "⚠";
