use crate::logs::{LogLine, LogSource, UNDATED, normalize};
use chrono::{DateTime, Utc};

/// Origin used for journal lines without a recognizable syslog identifier.
pub const JOURNAL_ORIGIN: &str = "journal";

/// Split `journalctl -o short-precise` output into lines, in source order.
/// Blank lines are skipped.
pub fn parse_journal_output(raw: &str, now: DateTime<Utc>) -> Vec<LogLine> {
    raw.lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| {
            let (timestamp, text) = normalize(LogSource::System, l, now);
            let origin = if timestamp == UNDATED {
                JOURNAL_ORIGIN.to_owned()
            } else {
                syslog_identifier(text).unwrap_or(JOURNAL_ORIGIN).to_owned()
            };
            LogLine {
                source: LogSource::System,
                origin,
                timestamp,
                text: text.to_owned(),
            }
        })
        .collect()
}

/// Split `docker logs --timestamps` output for one container.
pub fn parse_container_output(name: &str, raw: &str, now: DateTime<Utc>) -> Vec<LogLine> {
    raw.lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| {
            let (timestamp, text) = normalize(LogSource::Container, l, now);
            LogLine {
                source: LogSource::Container,
                origin: name.to_owned(),
                timestamp,
                text: text.to_owned(),
            }
        })
        .collect()
}

/// `host ident[pid]: message` → `ident`
fn syslog_identifier(text: &str) -> Option<&str> {
    let mut parts = text.split_whitespace();
    let _host = parts.next()?;
    let tag = parts.next()?;
    let tag = tag.strip_suffix(':')?;
    let ident = match tag.find('[') {
        Some(i) => &tag[..i],
        None => tag,
    };
    (!ident.is_empty()).then_some(ident)
}
