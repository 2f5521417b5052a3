use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExecError {
    #[error("failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to collect output of {program}: {source}")]
    Io {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {status}: {output}")]
    NonZeroExit {
        program: String,
        status: String,
        /// Captured stdout + stderr. Not sanitized.
        output: String,
    },

    #[error("{program} timed out after {}ms", timeout.as_millis())]
    TimedOut { program: String, timeout: Duration },
}

impl ExecError {
    pub fn program(&self) -> &str {
        match self {
            ExecError::Spawn { program, .. }
            | ExecError::Io { program, .. }
            | ExecError::NonZeroExit { program, .. }
            | ExecError::TimedOut { program, .. } => program,
        }
    }
}
