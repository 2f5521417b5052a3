use chrono::{DateTime, Utc};
use serde::Serialize;

/// Ordering sentinel for lines whose timestamp could not be parsed.
///
/// Sorts before every real instant so such lines stay visible at the head of
/// the output instead of being dropped.
pub const UNDATED: DateTime<Utc> = DateTime::<Utc>::MIN_UTC;

/// Where a line came from. `System` orders before `Container`, which is the
/// tie-break for equal timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogSource {
    System,
    Container,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogLine {
    pub source: LogSource,
    /// Syslog identifier for system lines, container name otherwise.
    pub origin: String,
    pub timestamp: DateTime<Utc>,
    /// Everything after the timestamp, or the raw line when undated.
    pub text: String,
}

impl LogLine {
    pub fn is_undated(&self) -> bool {
        self.timestamp == UNDATED
    }
}
