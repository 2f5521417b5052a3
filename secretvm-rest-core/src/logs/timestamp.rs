use crate::logs::{LogSource, UNDATED};
use chrono::{DateTime, Datelike, Month, NaiveDate, NaiveTime, TimeDelta, Utc};

/// How far past `now` a year-less timestamp may land before it is assumed to
/// belong to the previous year.
const FUTURE_TOLERANCE_HOURS: i64 = 24;

/// Parse the `Mon DD HH:MM:SS[.ffffff]` prefix written by
/// `journalctl -o short-precise --utc`.
///
/// The year comes from `now`; an instant more than a day ahead of `now` is
/// moved back one year. Feb 29 in a non-leap year resolves to the latest leap
/// year at or before the chosen one.
///
/// Returns the instant and the remainder of the line.
pub fn parse_system_timestamp(line: &str, now: DateTime<Utc>) -> Option<(DateTime<Utc>, &str)> {
    let (month, rest) = next_token(line)?;
    let (day, rest) = next_token(rest)?;
    let (time, rest) = next_token(rest)?;

    let month = month.parse::<Month>().ok()?.number_from_month();
    let day: u32 = day.parse().ok()?;
    let time = NaiveTime::parse_from_str(time, "%H:%M:%S%.f").ok()?;

    let at = |year: i32| {
        latest_valid_date(year, month, day).map(|date| date.and_time(time).and_utc())
    };

    let ts = match at(now.year()) {
        Some(ts) if ts - now > TimeDelta::hours(FUTURE_TOLERANCE_HOURS) => at(now.year() - 1)?,
        Some(ts) => ts,
        None => return None,
    };

    Some((ts, rest.trim_start()))
}

/// Parse the RFC 3339 prefix written by `docker logs --timestamps`.
pub fn parse_container_timestamp(line: &str) -> Option<(DateTime<Utc>, &str)> {
    let (token, rest) = next_token(line)?;
    let ts = DateTime::parse_from_rfc3339(token).ok()?.with_timezone(&Utc);
    // Keep the message's own leading whitespace; only the separator goes.
    Some((ts, rest.strip_prefix(' ').unwrap_or(rest)))
}

/// Timestamp for ordering plus the text that follows it.
///
/// Lines that do not parse keep their full text and get [`UNDATED`].
pub fn normalize(source: LogSource, line: &str, now: DateTime<Utc>) -> (DateTime<Utc>, &str) {
    let parsed = match source {
        LogSource::System => parse_system_timestamp(line, now),
        LogSource::Container => parse_container_timestamp(line),
    };

    match parsed {
        Some(found) => found,
        None => {
            tracing::debug!(?source, line, "unparsable log timestamp");
            (UNDATED, line)
        }
    }
}

fn next_token(s: &str) -> Option<(&str, &str)> {
    let s = s.trim_start();
    if s.is_empty() {
        return None;
    }
    match s.find(char::is_whitespace) {
        Some(end) => Some((&s[..end], &s[end..])),
        None => Some((s, "")),
    }
}

/// Leap years are at most eight years apart (1896 → 1904).
fn latest_valid_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    if month == 2 && day == 29 {
        return (0..=8)
            .map(|back| year - back)
            .find_map(|y| NaiveDate::from_ymd_opt(y, month, day));
    }
    NaiveDate::from_ymd_opt(year, month, day)
}
