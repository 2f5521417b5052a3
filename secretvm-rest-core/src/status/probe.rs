use crate::conf::types::StatusConfig;
use crate::exec::CommandRunner;
use crate::exec::commands::{active_containers, unit_history, unit_substate};
use crate::status::{StatusError, VmStatus};
use std::sync::Arc;

/// Derives [`VmStatus`] from service-manager and container-runtime signals.
///
/// Checks run in a fixed order and stop at the first decisive answer:
///
/// 1. startup unit substate: starting → `initializing`, failed → `init_failed`
/// 2. bootstrap unit substate:
///    - failed → `prep_failed`
///    - running → `running` with active containers, else `preparing`
///    - dead → `exited` if the unit's history shows the exit marker, else `crashed`
///    - anything else → `unknown`
pub struct StatusProbe {
    runner: Arc<dyn CommandRunner>,
    config: StatusConfig,
}

impl StatusProbe {
    pub fn new(runner: Arc<dyn CommandRunner>, config: StatusConfig) -> Self {
        Self { runner, config }
    }

    pub async fn probe(&self) -> Result<VmStatus, StatusError> {
        let startup = self.substate(&self.config.startup_unit).await?;
        match startup.as_str() {
            // systemd reports start-pre/start/start-post while ExecStart runs.
            "starting" | "start-pre" | "start" | "start-post" => {
                return Ok(VmStatus::Initializing);
            }
            "failed" => return Ok(VmStatus::InitFailed),
            _ => {}
        }

        let bootstrap = self.substate(&self.config.bootstrap_unit).await?;
        let status = match bootstrap.as_str() {
            "failed" => VmStatus::PrepFailed,
            "running" => {
                let active = active_containers(self.runner.as_ref())
                    .await
                    .map_err(StatusError::Containers)?;
                if active.is_empty() {
                    VmStatus::Preparing
                } else {
                    VmStatus::Running
                }
            }
            "dead" => {
                if self.exited_cleanly().await? {
                    VmStatus::Exited
                } else {
                    VmStatus::Crashed
                }
            }
            other => {
                tracing::debug!(
                    unit = %self.config.bootstrap_unit,
                    substate = other,
                    "unrecognized bootstrap substate"
                );
                VmStatus::Unknown
            }
        };

        Ok(status)
    }

    /// [`probe`](Self::probe), with any failure reported as
    /// [`VmStatus::ServerError`].
    pub async fn current(&self) -> VmStatus {
        match self.probe().await {
            Ok(status) => status,
            Err(e) => {
                tracing::warn!(error = %e, "status probe failed");
                VmStatus::ServerError
            }
        }
    }

    async fn substate(&self, unit: &str) -> Result<String, StatusError> {
        unit_substate(self.runner.as_ref(), unit)
            .await
            .map_err(|source| StatusError::Substate {
                unit: unit.to_owned(),
                source,
            })
    }

    async fn exited_cleanly(&self) -> Result<bool, StatusError> {
        let unit = &self.config.bootstrap_unit;
        let history = unit_history(self.runner.as_ref(), unit, self.config.history_lines)
            .await
            .map_err(|source| StatusError::History {
                unit: unit.clone(),
                source,
            })?;
        Ok(history.contains(&self.config.exit_marker))
    }
}
