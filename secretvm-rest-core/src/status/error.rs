use crate::exec::ExecError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatusError {
    #[error("failed to read substate of {unit}: {source}")]
    Substate {
        unit: String,
        #[source]
        source: ExecError,
    },

    #[error("failed to list active containers: {0}")]
    Containers(#[source] ExecError),

    #[error("failed to read journal history of {unit}: {source}")]
    History {
        unit: String,
        #[source]
        source: ExecError,
    },
}
