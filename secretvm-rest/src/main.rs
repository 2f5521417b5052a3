use anyhow::Result;
use clap::{Parser, Subcommand};
use secretvm_rest_core::cli::{self, ConfigCmd};
use secretvm_rest_core::conf::{DEFAULT_CONFIG_PATH, RuntimeConfig, load_config, load_from_env};
use secretvm_rest_core::logging::init_logging;
use secretvm_rest_core::server;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "secretvm-rest",
    version,
    about = "Diagnostic REST service for SecretVM"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the server (default)
    Run {
        /// Path to the config file; defaults apply when it does not exist
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Configuration tooling
    Config {
        #[command(subcommand)]
        cmd: ConfigCmd,
    },
}

fn main() -> Result<()> {
    let args = Cli::parse();

    match args.command {
        Some(Command::Config { cmd }) => match cmd {
            ConfigCmd::Check { path } => cli::check(&path),
            ConfigCmd::Dump { path } => cli::dump(&path),
        },

        Some(Command::Run { config }) => {
            init_logging();
            server::run(resolve_config(config.as_deref())?)
        }

        None => {
            init_logging();
            server::run(resolve_config(None)?)
        }
    }
}

/// An explicit path must exist. The default path is optional: deployments
/// configured purely through `SECRETVM_*` variables have no file.
fn resolve_config(explicit: Option<&Path>) -> Result<RuntimeConfig> {
    let cfg = match explicit {
        Some(path) => load_config(path)?,
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
            load_config(Path::new(DEFAULT_CONFIG_PATH))?
        }
        None => {
            tracing::info!(
                path = DEFAULT_CONFIG_PATH,
                "no config file; using defaults and environment"
            );
            load_from_env(&|key| std::env::var(key).ok())?
        }
    };
    Ok(cfg)
}
