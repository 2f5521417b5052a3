use crate::conf::{ConfigError, RuntimeConfig, load_config};
use anyhow::Result;
use clap::Subcommand;
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    /// Validate configuration and exit
    Check {
        /// Path to the config file
        #[arg(default_value = crate::conf::DEFAULT_CONFIG_PATH)]
        path: PathBuf,
    },

    /// Print the validated configuration as JSON (token redacted)
    Dump {
        #[arg(default_value = crate::conf::DEFAULT_CONFIG_PATH)]
        path: PathBuf,
    },
}

pub fn check(path: &Path) -> Result<()> {
    match load_config(path) {
        Ok(cfg) => {
            for line in summary(&cfg) {
                println!("✔ {line}");
            }
            Ok(())
        }
        Err(err) => {
            print_config_error(&err);
            std::process::exit(1);
        }
    }
}

pub fn dump(path: &Path) -> Result<()> {
    let cfg = load_config(path)?;
    println!("{}", serde_json::to_string_pretty(&cfg)?);
    Ok(())
}

/// One line per notable setting, for `config check`.
pub fn summary(cfg: &RuntimeConfig) -> Vec<String> {
    let mut lines = vec![
        "Config loaded successfully".to_owned(),
        format!(
            "listening on {}{}",
            cfg.server.listen,
            if cfg.server.tls.is_some() { " (TLS)" } else { "" }
        ),
        format!(
            "secure mode {}",
            if cfg.server.secure_mode { "on" } else { "off" }
        ),
    ];

    if cfg.access.private_mode {
        lines.push(format!(
            "private mode on, endpoint mask {}",
            cfg.access.policy.to_mask()
        ));
    } else {
        lines.push("private mode off".to_owned());
    }

    lines.push(format!(
        "logs: {} lines by default, {} max",
        cfg.logs.default_lines, cfg.logs.max_lines
    ));
    lines.push(format!(
        "commands time out after {}ms",
        cfg.exec.timeout.as_millis()
    ));

    lines
}

fn print_config_error(err: &ConfigError) {
    eprintln!();
    eprintln!("{}: {}", "error".red().bold(), err);
    if let Some(hint) = err.hint() {
        eprintln!();
        eprintln!("{hint}");
    }
}
