use serde::Serialize;
use std::fmt;

/// Coarse VM lifecycle status, recomputed on every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VmStatus {
    Initializing,
    InitFailed,
    PrepFailed,
    Preparing,
    Running,
    Exited,
    Crashed,
    Unknown,
    /// The status could not be determined; not a state the VM reported.
    ServerError,
}

impl VmStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VmStatus::Initializing => "initializing",
            VmStatus::InitFailed => "init_failed",
            VmStatus::PrepFailed => "prep_failed",
            VmStatus::Preparing => "preparing",
            VmStatus::Running => "running",
            VmStatus::Exited => "exited",
            VmStatus::Crashed => "crashed",
            VmStatus::Unknown => "unknown",
            VmStatus::ServerError => "server_error",
        }
    }
}

impl fmt::Display for VmStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
