use crate::access::EndpointPolicy;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

//-----------------------------------------------------------------------------
// File schema (what operators write)
//-----------------------------------------------------------------------------

/// Top-level layout of `secretvm-rest.hcl`. Every block is optional.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub server: ServerSpec,
    pub access: AccessSpec,
    pub logs: LogsSpec,
    pub status: StatusSpec,
    pub exec: ExecSpec,
    pub files: FilesSpec,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerSpec {
    /// e.g. "0.0.0.0:29343"
    pub listen: String,

    /// Optional number of worker threads - default is decided by Pingora.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threads: Option<usize>,

    /// Workload runtime is configured; container log sources are attempted.
    pub secure_mode: bool,

    /// Deployment label echoed by /status.
    pub env: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls: Option<TlsConfig>,
}

impl Default for ServerSpec {
    fn default() -> Self {
        Self {
            listen: "0.0.0.0:29343".to_owned(),
            threads: None,
            secure_mode: true,
            env: String::new(),
            tls: None,
        }
    }
}

/// Paths are checked during validation.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TlsConfig {
    pub cert: PathBuf,
    pub key: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct AccessSpec {
    pub private_mode: bool,
    pub token: String,
    pub endpoint_mask: String,
}

impl Default for AccessSpec {
    fn default() -> Self {
        Self {
            private_mode: false,
            token: String::new(),
            endpoint_mask: "111111111".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogsSpec {
    pub default_lines: usize,
    pub max_lines: usize,
    pub journal_lines: usize,
    /// Empty means the whole journal.
    pub journal_units: Vec<String>,
}

impl Default for LogsSpec {
    fn default() -> Self {
        Self {
            default_lines: 1000,
            max_lines: 10_000,
            journal_lines: 1000,
            journal_units: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct StatusSpec {
    pub startup_unit: String,
    pub bootstrap_unit: String,
    pub exit_marker: String,
    pub history_lines: usize,
}

impl Default for StatusSpec {
    fn default() -> Self {
        Self {
            startup_unit: "secret-vm-startup.service".to_owned(),
            bootstrap_unit: "secret-vm-docker-start.service".to_owned(),
            exit_marker: "Deactivated successfully".to_owned(),
            history_lines: 50,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExecSpec {
    pub timeout_ms: u64,
}

impl Default for ExecSpec {
    fn default() -> Self {
        Self { timeout_ms: 10_000 }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilesSpec {
    pub report_dir: PathBuf,
    pub docker_compose_path: String,
    /// Identifier passed to `kms-query`; empty means not upgradeable.
    pub service_id: String,
}

impl Default for FilesSpec {
    fn default() -> Self {
        Self {
            report_dir: PathBuf::from("reports"),
            docker_compose_path: String::new(),
            service_id: String::new(),
        }
    }
}

//-----------------------------------------------------------------------------
// Runtime representation (validated, immutable)
//-----------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct RuntimeConfig {
    pub server: ServerConfig,
    pub access: AccessConfig,
    pub logs: LogsConfig,
    pub status: StatusConfig,
    pub exec: ExecConfig,
    pub files: FilesConfig,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServerConfig {
    pub listen: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threads: Option<usize>,
    pub secure_mode: bool,
    pub env: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls: Option<TlsConfig>,
}

impl ServerConfig {
    /// Label reported by /status.
    pub fn env_label(&self) -> &str {
        if self.env.is_empty() {
            "unknown"
        } else {
            &self.env
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AccessConfig {
    pub private_mode: bool,
    #[serde(serialize_with = "redact")]
    pub token: String,
    pub policy: EndpointPolicy,
}

#[derive(Debug, Clone, Serialize)]
pub struct LogsConfig {
    pub default_lines: usize,
    pub max_lines: usize,
    pub journal_lines: usize,
    pub journal_units: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusConfig {
    pub startup_unit: String,
    pub bootstrap_unit: String,
    pub exit_marker: String,
    pub history_lines: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExecConfig {
    #[serde(serialize_with = "as_millis")]
    pub timeout: Duration,
}

#[derive(Debug, Clone, Serialize)]
pub struct FilesConfig {
    pub report_dir: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docker_compose_path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,
}

fn redact<S: serde::Serializer>(token: &str, s: S) -> Result<S::Ok, S::Error> {
    if token.is_empty() {
        s.serialize_str("")
    } else {
        s.serialize_str("<redacted>")
    }
}

fn as_millis<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u64(d.as_millis() as u64)
}
