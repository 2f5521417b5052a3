mod env;
pub mod error;
mod loader;
mod lower;
#[cfg(test)]
mod tests;
pub mod types;

pub use env::{ENV_PREFIX, apply_env_overrides};
pub use error::ConfigError;
pub use loader::{DEFAULT_CONFIG_PATH, load_config, load_config_with_env, load_from_env, parse_config};
pub use types::RuntimeConfig;
