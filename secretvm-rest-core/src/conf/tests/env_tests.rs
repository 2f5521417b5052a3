use crate::conf::types::ConfigFile;
use crate::conf::{ConfigError, apply_env_overrides, load_from_env};
use pretty_assertions::assert_eq;
use std::collections::HashMap;
use std::path::PathBuf;

fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn overrides_replace_file_values() {
    // Arrange
    let vars = env(&[
        ("SECRETVM_LISTEN", "127.0.0.1:9000"),
        ("SECRETVM_SECURE", "false"),
        ("SECRETVM_ENV", "prod"),
        ("SECRETVM_PRIVATE_MODE", "YES"),
        ("SECRETVM_ACCESS_TOKEN", "tok"),
        ("SECRETVM_ENDPOINT_MASK", "000000000"),
        ("SECRETVM_REPORT_DIR", "/r"),
        ("SECRETVM_DOCKER_COMPOSE_PATH", "/c.yaml"),
        ("SECRETVM_SERVICE_ID", "svc"),
        ("SECRETVM_EXEC_TIMEOUT_MS", "750"),
    ]);
    let mut cfg = ConfigFile::default();

    // Act
    apply_env_overrides(&mut cfg, &|k| vars.get(k).cloned()).unwrap();

    // Assert
    assert_eq!(cfg.server.listen, "127.0.0.1:9000");
    assert!(!cfg.server.secure_mode);
    assert_eq!(cfg.server.env, "prod");
    assert!(cfg.access.private_mode);
    assert_eq!(cfg.access.token, "tok");
    assert_eq!(cfg.access.endpoint_mask, "000000000");
    assert_eq!(cfg.files.report_dir, PathBuf::from("/r"));
    assert_eq!(cfg.files.docker_compose_path, "/c.yaml");
    assert_eq!(cfg.files.service_id, "svc");
    assert_eq!(cfg.exec.timeout_ms, 750);
}

#[test]
fn unparsable_boolean_is_rejected() {
    let vars = env(&[("SECRETVM_PRIVATE_MODE", "maybe")]);
    let mut cfg = ConfigFile::default();

    let err = apply_env_overrides(&mut cfg, &|k| vars.get(k).cloned()).unwrap_err();

    match err {
        ConfigError::InvalidEnv { var, value, .. } => {
            assert_eq!(var, "SECRETVM_PRIVATE_MODE");
            assert_eq!(value, "maybe");
        }
        other => panic!("expected InvalidEnv, got {other:?}"),
    }
}

#[test]
fn unparsable_timeout_is_rejected() {
    let vars = env(&[("SECRETVM_EXEC_TIMEOUT_MS", "10s")]);
    let mut cfg = ConfigFile::default();

    let err = apply_env_overrides(&mut cfg, &|k| vars.get(k).cloned()).unwrap_err();

    assert!(matches!(err, ConfigError::InvalidEnv { .. }));
}

#[test]
fn env_mask_is_validated_like_file_mask() {
    let vars = env(&[("SECRETVM_ENDPOINT_MASK", "10")]);

    let err = load_from_env(&|k| vars.get(k).cloned()).unwrap_err();

    assert!(matches!(err, ConfigError::InvalidMask(_)));
}
