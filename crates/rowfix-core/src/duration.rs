//! Duration parsing, per-row accumulation, and seconds formatting.

use chrono::TimeDelta;

use crate::error::TransformError;

/// Running duration total for the row currently being processed.
///
/// Created fresh per row; every duration column adds to it left to
/// right, and a `TotalDuration` column reads it without resetting.
#[derive(Debug, Default)]
pub struct DurationAccumulator {
    total: TimeDelta,
}

impl DurationAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parsed duration onto the running total.
    ///
    /// Saturates at the representable maximum instead of overflowing.
    pub fn add(&mut self, delta: TimeDelta) {
        self.total = self.total.checked_add(&delta).unwrap_or(TimeDelta::MAX);
    }

    /// Current total, read without resetting.
    pub fn snapshot(&self) -> TimeDelta {
        self.total
    }
}

/// Parses a duration field of the form `H:M:S.f`.
///
/// Hours, minutes, seconds, and the fractional part are each a
/// variable-length run of base-10 digits. The fractional part is a
/// literal milliseconds count (`.5` means five milliseconds, and a value
/// above `999` carries into the seconds), matching the upstream data
/// format rather than a decimal fraction.
///
/// # Errors
///
/// Any deviation from the pattern, including component overflow, yields
/// [`TransformError::DurationFormat`] naming the original text.
///
/// # Examples
///
/// ```
/// use rowfix_core::duration::parse_duration;
///
/// let delta = parse_duration("1:23:32.123").unwrap();
/// assert_eq!(delta.num_seconds(), 5012);
/// assert!(parse_duration("1:23:32").is_err());
/// ```
pub fn parse_duration(text: &str) -> Result<TimeDelta, TransformError> {
    let mismatch = || TransformError::DurationFormat(text.to_string());

    let (clock, frac) = text.rsplit_once('.').ok_or_else(mismatch)?;
    let parts: Vec<&str> = clock.split(':').collect();
    if parts.len() != 3 {
        return Err(mismatch());
    }

    let hours = parse_component(parts[0]).ok_or_else(mismatch)?;
    let minutes = parse_component(parts[1]).ok_or_else(mismatch)?;
    let seconds = parse_component(parts[2]).ok_or_else(mismatch)?;
    let millis = parse_component(frac).ok_or_else(mismatch)?;

    TimeDelta::try_hours(hours)
        .and_then(|total| total.checked_add(&TimeDelta::try_minutes(minutes)?))
        .and_then(|total| total.checked_add(&TimeDelta::try_seconds(seconds)?))
        .and_then(|total| total.checked_add(&TimeDelta::try_milliseconds(millis)?))
        .ok_or_else(mismatch)
}

/// One non-empty all-digit component, rejecting signs and whitespace.
fn parse_component(text: &str) -> Option<i64> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

/// Formats `<wholeSeconds>.<millis>` with the millis left as-is.
///
/// Trailing zeros lost to millisecond truncation stay lost: five
/// milliseconds prints as `.5`, not `.005`.
pub fn format_seconds_millis(delta: TimeDelta) -> String {
    let seconds = delta.num_seconds();
    let millis = delta.num_milliseconds() - seconds * 1000;
    format!("{seconds}.{millis}")
}

/// Formats `<wholeSeconds>.<millis>` with exactly three millis digits.
pub fn format_seconds_millis_padded(delta: TimeDelta) -> String {
    let seconds = delta.num_seconds();
    let millis = delta.num_milliseconds() - seconds * 1000;
    format!("{seconds}.{millis:03}")
}
