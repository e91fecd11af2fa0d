//! Terminal width detection.

/// Current terminal width in columns.
///
/// Checks the `COLUMNS` environment variable first (set by some shells, and
/// how the host terminal application communicates its width when stdout is a
/// pipe), then asks the controlling terminal, then falls back to 80.
pub fn width() -> usize {
    if let Some(columns) = std::env::var("COLUMNS")
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .filter(|&v| v > 0)
    {
        return columns;
    }

    terminal_size::terminal_size()
        .map(|(terminal_size::Width(w), _)| w as usize)
        .unwrap_or(80)
}
