use crate::exec::ExecError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LogQueryError {
    #[error("no log source named '{name}'")]
    NotFound { name: String },

    #[error("log source index {index} out of range ({count} containers)")]
    OutOfRange { index: usize, count: usize },

    #[error("container logs are unavailable until secure mode is enabled")]
    ContainersDisabled,

    #[error(transparent)]
    Upstream(#[from] ExecError),
}
