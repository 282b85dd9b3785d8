//! Column-to-transform dispatch driven by header names.
//!
//! Each header name is mapped once to a [`ColumnRule`]; rules are then
//! applied per field with the row's mutable state threaded through
//! explicitly, so nothing leaks between rows.

use chrono::{NaiveDateTime, TimeZone};
use chrono_tz::US::{Eastern, Pacific};

use crate::duration::{self, DurationAccumulator};
use crate::error::TransformError;
use crate::quote::{self, QuotedFieldStore};

/// Fixed timestamp pattern: month/day/two-digit year, 12-hour clock.
const TIMESTAMP_FORMAT: &str = "%-m/%-d/%y %-I:%M:%S %p";
/// Minimum width of a formatted zip code.
const ZIP_WIDTH: usize = 5;

/// Mutable state owned by exactly one in-flight row.
#[derive(Debug, Default)]
pub struct RowState {
    /// Quoted substrings lifted out of the raw line.
    pub quoted: QuotedFieldStore,
    /// Running total read by a `TotalDuration` column.
    pub durations: DurationAccumulator,
}

/// The transform assigned to one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRule {
    Timestamp,
    Zip,
    Name,
    TotalDuration,
    Duration,
    Passthrough,
}

impl ColumnRule {
    /// Picks the rule for a header name.
    ///
    /// Rules are tried in a fixed precedence and the first match wins:
    /// `Timestamp` > `ZIP` > `Name` > exact `TotalDuration` > `Duration`,
    /// falling back to passthrough. Matching is a case-sensitive
    /// substring test except for `TotalDuration`, which must match the
    /// whole name.
    pub fn for_header(header: &str) -> Self {
        if header.contains("Timestamp") {
            Self::Timestamp
        } else if header.contains("ZIP") {
            Self::Zip
        } else if header.contains("Name") {
            Self::Name
        } else if header == "TotalDuration" {
            Self::TotalDuration
        } else if header.contains("Duration") {
            Self::Duration
        } else {
            Self::Passthrough
        }
    }
}

/// Applies `rule` to one field.
///
/// A field that is exactly a placeholder token is unmasked first, for
/// every rule including passthrough; the unmasked text keeps its
/// surrounding quote characters. A `TotalDuration` column ignores its
/// own cell text and formats the accumulator instead.
///
/// # Errors
///
/// Returns the row-local [`TransformError`] of the first rule that
/// rejects its input; the caller drops the whole row in response.
pub fn apply(
    rule: ColumnRule,
    field: &str,
    state: &mut RowState,
) -> Result<String, TransformError> {
    let field = quote::unmask(field, &state.quoted);
    match rule {
        ColumnRule::Timestamp => shift_timestamp(field),
        ColumnRule::Zip => pad_zip(field),
        ColumnRule::Name => Ok(field.to_uppercase()),
        ColumnRule::TotalDuration => Ok(duration::format_seconds_millis_padded(
            state.durations.snapshot(),
        )),
        ColumnRule::Duration => {
            let delta = duration::parse_duration(field)?;
            state.durations.add(delta);
            Ok(duration::format_seconds_millis(delta))
        }
        ColumnRule::Passthrough => Ok(field.to_string()),
    }
}

/// Reinterprets a Pacific wall-clock timestamp as Eastern.
///
/// The text is parsed with [`TIMESTAMP_FORMAT`] as a local time in
/// `US/Pacific` and reformatted with the same pattern in `US/Eastern`.
/// A wall-clock time skipped by a DST transition has no Pacific
/// instant and is rejected; an ambiguous one resolves to the earlier
/// offset.
fn shift_timestamp(text: &str) -> Result<String, TransformError> {
    let wall = NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT)
        .map_err(|_| TransformError::Timestamp(text.to_string()))?;
    let pacific = Pacific
        .from_local_datetime(&wall)
        .earliest()
        .ok_or_else(|| TransformError::Timestamp(text.to_string()))?;
    Ok(pacific
        .with_timezone(&Eastern)
        .format(TIMESTAMP_FORMAT)
        .to_string())
}

/// Left-pads an all-digit zip code to at least [`ZIP_WIDTH`] digits.
///
/// Values wider than five digits are emitted as-is; this code does not
/// handle 9-digit zip codes and never truncates.
fn pad_zip(text: &str) -> Result<String, TransformError> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TransformError::Numeric(text.to_string()));
    }
    let code: u64 = text
        .parse()
        .map_err(|_| TransformError::Numeric(text.to_string()))?;
    Ok(format!("{code:0width$}", width = ZIP_WIDTH))
}
