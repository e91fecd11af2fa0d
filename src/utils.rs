//! General utilities.

use std::time::{SystemTime, UNIX_EPOCH};

/// Get current Unix timestamp in seconds, respecting `SOURCE_DATE_EPOCH`.
///
/// When the `SOURCE_DATE_EPOCH` environment variable is set, returns that
/// value instead of the actual current time, so session durations are
/// reproducible in tests. Anything that needs "now" for display or storage
/// should call this rather than `SystemTime::now()` directly.
pub fn get_now() -> u64 {
    std::env::var("SOURCE_DATE_EPOCH")
        .ok()
        .and_then(|val| val.parse::<u64>().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_now_returns_reasonable_timestamp() {
        // Should be after 2020-01-01 unless SOURCE_DATE_EPOCH pins it earlier
        if std::env::var("SOURCE_DATE_EPOCH").is_err() {
            assert!(get_now() > 1_577_836_800);
        }
    }
}
