use crate::access::EndpointPolicy;
use crate::conf::ConfigError;
use crate::conf::types::{
    AccessConfig, ConfigFile, ExecConfig, FilesConfig, LogsConfig, RuntimeConfig, ServerConfig,
    StatusConfig,
};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Validate the file schema and lower it into the immutable runtime form.
///
/// Everything that could fail per request (mask syntax, limits) fails here
/// instead, at boot.
pub fn lower_config(cfg: ConfigFile) -> Result<RuntimeConfig, ConfigError> {
    let ConfigFile {
        server,
        access,
        logs,
        status,
        exec,
        files,
    } = cfg;

    //--------------------------------------------------------------------------
    // Server
    //--------------------------------------------------------------------------
    if server.listen.parse::<SocketAddr>().is_err() {
        return Err(ConfigError::InvalidListen {
            addr: server.listen,
        });
    }
    if server.threads == Some(0) {
        return Err(ConfigError::NotPositive {
            field: "server.threads",
        });
    }
    if let Some(tls) = &server.tls {
        if !tls.cert.exists() {
            return Err(ConfigError::MissingTlsFile {
                which: "certificate",
                path: tls.cert.clone(),
            });
        }
        if !tls.key.exists() {
            return Err(ConfigError::MissingTlsFile {
                which: "key",
                path: tls.key.clone(),
            });
        }
    }

    //--------------------------------------------------------------------------
    // Access
    //--------------------------------------------------------------------------
    let policy = EndpointPolicy::from_mask(&access.endpoint_mask)?;
    let token = access.token.trim().to_owned();
    if access.private_mode && token.is_empty() {
        return Err(ConfigError::MissingToken);
    }

    //--------------------------------------------------------------------------
    // Logs
    //--------------------------------------------------------------------------
    positive("logs.default_lines", logs.default_lines)?;
    positive("logs.max_lines", logs.max_lines)?;
    positive("logs.journal_lines", logs.journal_lines)?;
    if logs.default_lines > logs.max_lines {
        return Err(ConfigError::DefaultAboveMax {
            default_lines: logs.default_lines,
            max_lines: logs.max_lines,
        });
    }

    //--------------------------------------------------------------------------
    // Status / exec
    //--------------------------------------------------------------------------
    non_empty("status.startup_unit", &status.startup_unit)?;
    non_empty("status.bootstrap_unit", &status.bootstrap_unit)?;
    non_empty("status.exit_marker", &status.exit_marker)?;
    positive("status.history_lines", status.history_lines)?;
    if exec.timeout_ms == 0 {
        return Err(ConfigError::NotPositive {
            field: "exec.timeout_ms",
        });
    }

    let files = FilesConfig {
        report_dir: files.report_dir,
        docker_compose_path: optional(files.docker_compose_path).map(PathBuf::from),
        service_id: optional(files.service_id),
    };

    Ok(RuntimeConfig {
        server: ServerConfig {
            listen: server.listen,
            threads: server.threads,
            secure_mode: server.secure_mode,
            env: server.env,
            tls: server.tls,
        },
        access: AccessConfig {
            private_mode: access.private_mode,
            token,
            policy,
        },
        logs: LogsConfig {
            default_lines: logs.default_lines,
            max_lines: logs.max_lines,
            journal_lines: logs.journal_lines,
            journal_units: logs.journal_units,
        },
        status: StatusConfig {
            startup_unit: status.startup_unit,
            bootstrap_unit: status.bootstrap_unit,
            exit_marker: status.exit_marker,
            history_lines: status.history_lines,
        },
        exec: ExecConfig {
            timeout: Duration::from_millis(exec.timeout_ms),
        },
        files,
    })
}

fn positive(field: &'static str, value: usize) -> Result<(), ConfigError> {
    if value == 0 {
        return Err(ConfigError::NotPositive { field });
    }
    Ok(())
}

fn non_empty(field: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::EmptyValue { field });
    }
    Ok(())
}

fn optional(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
