use secretvm_rest_core::conf::{RuntimeConfig, load_config_with_env, load_from_env};
use std::path::Path;

/// Built-in defaults, ignoring the process environment.
pub fn test_config() -> RuntimeConfig {
    load_from_env(&|_| None).expect("default config must be valid")
}

/// Load an HCL fixture from `fixtures/config`, ignoring the process
/// environment.
pub fn fixture_config(name: &str) -> RuntimeConfig {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("config")
        .join(name);

    assert!(path.exists(), "fixture config does not exist: {path:?}");

    load_config_with_env(&path, &|_| None).expect("failed to load fixture config")
}

pub(crate) fn patch_listen(cfg: &mut RuntimeConfig, port: u16) {
    cfg.server.listen = format!("127.0.0.1:{port}");
    cfg.server.threads = Some(1);
}
