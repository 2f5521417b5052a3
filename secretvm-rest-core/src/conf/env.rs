use crate::conf::ConfigError;
use crate::conf::types::ConfigFile;
use std::path::PathBuf;

pub const ENV_PREFIX: &str = "SECRETVM_";

/// Apply `SECRETVM_*` environment overrides on top of the parsed file.
///
/// `lookup` abstracts the environment so tests never touch process state.
pub fn apply_env_overrides(
    cfg: &mut ConfigFile,
    lookup: &dyn Fn(&str) -> Option<String>,
) -> Result<(), ConfigError> {
    let var = |name: &str| {
        let key = format!("{ENV_PREFIX}{name}");
        lookup(&key).map(|value| (key, value))
    };

    if let Some((_, v)) = var("LISTEN") {
        cfg.server.listen = v;
    }
    if let Some((k, v)) = var("SECURE") {
        cfg.server.secure_mode = parse_bool(&k, &v)?;
    }
    if let Some((_, v)) = var("ENV") {
        cfg.server.env = v;
    }
    if let Some((k, v)) = var("PRIVATE_MODE") {
        cfg.access.private_mode = parse_bool(&k, &v)?;
    }
    if let Some((_, v)) = var("ACCESS_TOKEN") {
        cfg.access.token = v;
    }
    if let Some((_, v)) = var("ENDPOINT_MASK") {
        cfg.access.endpoint_mask = v;
    }
    if let Some((_, v)) = var("REPORT_DIR") {
        cfg.files.report_dir = PathBuf::from(v);
    }
    if let Some((_, v)) = var("DOCKER_COMPOSE_PATH") {
        cfg.files.docker_compose_path = v;
    }
    if let Some((_, v)) = var("SERVICE_ID") {
        cfg.files.service_id = v;
    }
    if let Some((k, v)) = var("EXEC_TIMEOUT_MS") {
        cfg.exec.timeout_ms = v.trim().parse().map_err(|_| ConfigError::InvalidEnv {
            var: k,
            value: v.clone(),
            reason: "expected a whole number of milliseconds",
        })?;
    }

    Ok(())
}

fn parse_bool(var: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidEnv {
            var: var.to_owned(),
            value: value.to_owned(),
            reason: "expected true/false",
        }),
    }
}
