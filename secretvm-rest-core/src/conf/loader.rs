use crate::conf::ConfigError;
use crate::conf::env::apply_env_overrides;
use crate::conf::lower::lower_config;
use crate::conf::types::{ConfigFile, RuntimeConfig};
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "config/secretvm-rest.hcl";

/// Load the config file, apply environment overrides and validate.
pub fn load_config(path: &Path) -> Result<RuntimeConfig, ConfigError> {
    load_config_with_env(path, &|key| std::env::var(key).ok())
}

pub fn load_config_with_env(
    path: &Path,
    lookup: &dyn Fn(&str) -> Option<String>,
) -> Result<RuntimeConfig, ConfigError> {
    //--------------------------------------------------------------------------
    // Hard fail: IO and parsing
    //--------------------------------------------------------------------------
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    let mut cfg = parse_config(&contents).map_err(|e| ConfigError::parse(path, e))?;

    apply_env_overrides(&mut cfg, lookup)?;
    let runtime = lower_config(cfg)?;

    tracing::debug!(path = %path.display(), "configuration loaded");
    Ok(runtime)
}

/// Built-in defaults plus environment overrides, for deployments without a
/// config file.
pub fn load_from_env(lookup: &dyn Fn(&str) -> Option<String>) -> Result<RuntimeConfig, ConfigError> {
    let mut cfg = ConfigFile::default();
    apply_env_overrides(&mut cfg, lookup)?;
    lower_config(cfg)
}

pub fn parse_config(contents: &str) -> Result<ConfigFile, hcl::Error> {
    hcl::from_str(contents)
}
