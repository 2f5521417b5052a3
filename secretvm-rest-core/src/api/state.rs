use crate::access::AccessGate;
use crate::conf::RuntimeConfig;
use crate::exec::CommandRunner;
use crate::logs::LogQueryEngine;
use crate::status::StatusProbe;
use std::sync::Arc;

/// Everything a request handler may read. Built once at startup.
pub struct AppState {
    pub config: Arc<RuntimeConfig>,
    pub runner: Arc<dyn CommandRunner>,
    pub gate: AccessGate,
    pub logs: LogQueryEngine,
    pub status: StatusProbe,
    /// Shown in rendered container log lines.
    pub hostname: String,
}

impl AppState {
    pub fn new(
        config: Arc<RuntimeConfig>,
        runner: Arc<dyn CommandRunner>,
        hostname: impl Into<String>,
    ) -> Self {
        let gate = AccessGate::new(
            config.access.private_mode,
            config.access.policy.clone(),
            config.access.token.clone(),
        );
        let logs = LogQueryEngine::new(runner.clone(), &config.logs);
        let status = StatusProbe::new(runner.clone(), config.status.clone());

        Self {
            config,
            runner,
            gate,
            logs,
            status,
            hostname: hostname.into(),
        }
    }
}
