use crate::access::MaskError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    // IO
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Parsing
    #[error("failed to parse HCL in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: hcl::Error,
    },

    #[error("invalid value '{value}' for {var}: {reason}")]
    InvalidEnv {
        var: String,
        value: String,
        reason: &'static str,
    },

    // Validation
    #[error("invalid listen address '{addr}'")]
    InvalidListen { addr: String },

    #[error("invalid endpoint mask: {0}")]
    InvalidMask(#[from] MaskError),

    #[error("private mode is enabled but no access token is configured")]
    MissingToken,

    #[error("{field} must be greater than zero")]
    NotPositive { field: &'static str },

    #[error("logs.default_lines ({default_lines}) exceeds logs.max_lines ({max_lines})")]
    DefaultAboveMax {
        default_lines: usize,
        max_lines: usize,
    },

    #[error("{field} must not be empty")]
    EmptyValue { field: &'static str },

    #[error("TLS {which} file not found at {path}")]
    MissingTlsFile { which: &'static str, path: PathBuf },
}

impl ConfigError {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: hcl::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }

    /// Operator-facing remediation for the common failures.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            ConfigError::InvalidMask(_) => Some(
                "The endpoint mask is one '0'/'1' character per endpoint group, in order:\n\
                 status, cpu, gpu, self, logs, services, docker-compose, resources, vm_updates.\n\
                 \n\
                 Example:\n\
                 \n\
                 access {\n\
                 \x20 private_mode  = true\n\
                 \x20 endpoint_mask = \"100000000\"\n\
                 }",
            ),

            ConfigError::MissingToken => Some(
                "Private mode closes endpoints to callers without the shared token.\n\
                 \n\
                 Set `access.token` or SECRETVM_ACCESS_TOKEN, or disable private mode.",
            ),

            ConfigError::MissingTlsFile { .. } => Some(
                "Generate the certificate and key before starting, or remove the\n\
                 `server.tls` block to serve plain HTTP.",
            ),

            _ => None,
        }
    }
}
