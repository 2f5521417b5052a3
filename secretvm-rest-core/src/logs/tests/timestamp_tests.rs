use crate::logs::{LogSource, UNDATED, normalize, parse_container_timestamp, parse_system_timestamp};
use chrono::{DateTime, TimeZone, Utc};
use pretty_assertions::assert_eq;

fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
}

#[test]
fn system_timestamp_takes_year_from_now() {
    // Arrange
    let now = utc(2026, 10, 18, 12, 0, 0);

    // Act
    let (ts, rest) =
        parse_system_timestamp("Oct 18 09:01:02.123456 vm systemd[1]: Started.", now).unwrap();

    // Assert
    assert_eq!(ts, utc(2026, 10, 18, 9, 1, 2) + chrono::TimeDelta::microseconds(123_456));
    assert_eq!(rest, "vm systemd[1]: Started.");
}

#[test]
fn padded_day_is_accepted() {
    let now = utc(2026, 10, 18, 12, 0, 0);

    let (ts, _) = parse_system_timestamp("Oct  8 00:00:00.000001 vm kernel: x", now).unwrap();

    assert_eq!(ts.format("%m-%d").to_string(), "10-08");
}

#[test]
fn december_line_read_in_january_is_last_year() {
    let now = utc(2026, 1, 1, 0, 30, 0);

    let (ts, _) = parse_system_timestamp("Dec 31 23:59:59.500000 vm app: bye", now).unwrap();

    assert_eq!(ts.format("%Y-%m-%d").to_string(), "2025-12-31");
}

#[test]
fn slightly_future_line_keeps_current_year() {
    // Clock skew up to a day is tolerated.
    let now = utc(2026, 10, 18, 12, 0, 0);

    let (ts, _) = parse_system_timestamp("Oct 19 10:00:00.000000 vm app: x", now).unwrap();

    assert_eq!(ts, utc(2026, 10, 19, 10, 0, 0));
}

#[test]
fn far_future_line_rolls_back_one_year() {
    let now = utc(2026, 10, 18, 12, 0, 0);

    let (ts, _) = parse_system_timestamp("Oct 19 12:00:01.000000 vm app: x", now).unwrap();

    assert_eq!(ts, utc(2025, 10, 19, 12, 0, 1));
}

#[test]
fn leap_day_walks_back_to_a_leap_year() {
    let now = utc(2027, 3, 1, 0, 0, 0);

    let (ts, _) = parse_system_timestamp("Feb 29 08:00:00.000000 vm app: x", now).unwrap();

    assert_eq!(ts, utc(2024, 2, 29, 8, 0, 0));
}

#[test]
fn malformed_system_prefixes_are_rejected() {
    let now = utc(2026, 10, 18, 12, 0, 0);

    for line in [
        "",
        "-- Boot 1234 --",
        "Foo 12 10:00:00.000000 vm app: x",
        "Feb 30 10:00:00.000000 vm app: x",
        "Oct 18 25:00:00 vm app: x",
        "Oct xx 10:00:00 vm app: x",
    ] {
        assert!(parse_system_timestamp(line, now).is_none(), "{line:?}");
    }
}

#[test]
fn container_timestamp_keeps_nanoseconds_and_converts_offsets() {
    let (ts, rest) =
        parse_container_timestamp("2024-05-01T12:00:00.123456789+02:00   indented").unwrap();

    assert_eq!(ts.to_rfc3339(), "2024-05-01T10:00:00.123456789+00:00");
    assert_eq!(rest, "  indented");
}

#[test]
fn container_line_without_timestamp_is_rejected() {
    assert!(parse_container_timestamp("panic: boom").is_none());
    assert!(parse_container_timestamp("").is_none());
}

#[test]
fn unparsable_lines_get_the_sentinel_and_keep_their_text() {
    let now = utc(2026, 10, 18, 12, 0, 0);

    let (ts, text) = normalize(LogSource::Container, "  stack frame 3", now);

    assert_eq!(ts, UNDATED);
    assert_eq!(text, "  stack frame 3");
}
