//! Tests for duration parsing, accumulation, and formatting.

use rowfix_core::duration::{
    DurationAccumulator, format_seconds_millis, format_seconds_millis_padded, parse_duration,
};
use rowfix_core::error::TransformError;

#[test]
fn parses_hours_minutes_seconds_millis() {
    let delta = parse_duration("1:23:32.123").unwrap();
    assert_eq!(delta.num_seconds(), 5012);
    assert_eq!(format_seconds_millis(delta), "5012.123");
}

#[test]
fn fractional_part_is_a_literal_millisecond_count() {
    // ".5" is five milliseconds, not half a second.
    let delta = parse_duration("0:0:1.5").unwrap();
    assert_eq!(delta.num_milliseconds(), 1005);
    assert_eq!(format_seconds_millis(delta), "1.5");
}

#[test]
fn oversized_fractional_part_carries_into_seconds() {
    let delta = parse_duration("0:0:0.1234").unwrap();
    assert_eq!(format_seconds_millis(delta), "1.234");
}

#[test]
fn rejects_text_outside_the_pattern() {
    for text in [
        "notADuration",
        "1:23:32",
        "1:x:3.4",
        "1:2:3.4.5",
        "-1:2:3.4",
        "1:2:3.",
        ":2:3.4",
        "",
    ] {
        assert_eq!(
            parse_duration(text).unwrap_err(),
            TransformError::DurationFormat(text.to_string()),
            "expected {text:?} to be rejected",
        );
    }
}

#[test]
fn rejects_component_overflow() {
    assert!(parse_duration("99999999999999999999:0:0.0").is_err());
}

#[test]
fn accumulator_sums_and_snapshots_without_reset() {
    let mut acc = DurationAccumulator::new();
    acc.add(parse_duration("1:23:32.123").unwrap());
    acc.add(parse_duration("1:32:33.123").unwrap());
    assert_eq!(format_seconds_millis_padded(acc.snapshot()), "10565.246");
    // Snapshot reads do not reset the total.
    assert_eq!(format_seconds_millis_padded(acc.snapshot()), "10565.246");
}

#[test]
fn padded_formatting_keeps_three_millis_digits() {
    let delta = parse_duration("0:0:5.7").unwrap();
    assert_eq!(format_seconds_millis(delta), "5.7");
    assert_eq!(format_seconds_millis_padded(delta), "5.007");
}
