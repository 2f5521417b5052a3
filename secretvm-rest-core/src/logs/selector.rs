use std::fmt;

/// Reserved source name for the system journal.
pub const SYSTEM_SOURCE: &str = "secretvm";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSelector {
    /// The journal plus every container.
    Unspecified,
    /// The journal when the name is [`SYSTEM_SOURCE`], otherwise one container.
    ByName(String),
    /// Position in the name-sorted container listing.
    ByIndex(usize),
}

impl LogSelector {
    /// Selector for a `service` value; empty means unspecified.
    pub fn from_service(service: &str) -> Self {
        let service = service.trim();
        if service.is_empty() {
            LogSelector::Unspecified
        } else {
            LogSelector::ByName(service.to_owned())
        }
    }

    pub fn is_system(&self) -> bool {
        matches!(self, LogSelector::ByName(name) if name == SYSTEM_SOURCE)
    }
}

impl fmt::Display for LogSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogSelector::Unspecified => f.write_str("all"),
            LogSelector::ByName(name) => write!(f, "name={name}"),
            LogSelector::ByIndex(i) => write!(f, "index={i}"),
        }
    }
}
