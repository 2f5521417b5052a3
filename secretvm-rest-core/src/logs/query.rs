use crate::conf::types::LogsConfig;
use crate::exec::commands::{container_logs, journal_tail, list_containers};
use crate::exec::{CommandRunner, ExecError};
use crate::logs::{
    LogLine, LogQueryError, LogSelector, SYSTEM_SOURCE, merge, parse_container_output,
    parse_journal_output,
};
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Resolves a [`LogSelector`] into one chronologically ordered sequence.
///
/// Holds only immutable configuration and the command capability; every
/// query reads live sources.
pub struct LogQueryEngine {
    runner: Arc<dyn CommandRunner>,
    journal_lines: usize,
    journal_units: Vec<String>,
}

impl LogQueryEngine {
    pub fn new(runner: Arc<dyn CommandRunner>, config: &LogsConfig) -> Self {
        Self {
            runner,
            journal_lines: config.journal_lines,
            journal_units: config.journal_units.clone(),
        }
    }

    pub async fn get_logs(
        &self,
        selector: &LogSelector,
        line_limit: usize,
        secure_mode: bool,
    ) -> Result<Vec<LogLine>, LogQueryError> {
        self.get_logs_at(selector, line_limit, secure_mode, Utc::now())
            .await
    }

    /// [`get_logs`](Self::get_logs) with an explicit reference time for
    /// year inference.
    ///
    /// Only an explicitly named source that cannot be resolved or read is an
    /// error. With [`LogSelector::Unspecified`] every failing source is
    /// logged and contributes nothing.
    pub async fn get_logs_at(
        &self,
        selector: &LogSelector,
        line_limit: usize,
        secure_mode: bool,
        now: DateTime<Utc>,
    ) -> Result<Vec<LogLine>, LogQueryError> {
        let lines = match selector {
            LogSelector::Unspecified => self.all_sources(line_limit, secure_mode, now).await,

            LogSelector::ByName(_) if selector.is_system() => {
                merge(vec![self.journal(now).await?])
            }

            LogSelector::ByName(name) => {
                if !secure_mode {
                    return Err(LogQueryError::ContainersDisabled);
                }
                let names = list_containers(self.runner.as_ref()).await?;
                if !names.iter().any(|n| n == name) {
                    return Err(LogQueryError::NotFound { name: name.clone() });
                }
                self.container(name, line_limit, now).await?
            }

            LogSelector::ByIndex(index) => {
                if !secure_mode {
                    return Err(LogQueryError::ContainersDisabled);
                }
                let names = list_containers(self.runner.as_ref()).await?;
                let Some(name) = names.get(*index) else {
                    return Err(LogQueryError::OutOfRange {
                        index: *index,
                        count: names.len(),
                    });
                };
                self.container(name, line_limit, now).await?
            }
        };

        let undated = lines.iter().filter(|l| l.is_undated()).count();
        if undated > 0 {
            tracing::info!(
                %selector,
                undated,
                "log lines without a parsable timestamp placed first"
            );
        }

        Ok(lines)
    }

    /// Source names for `/services`: the system journal first, then every
    /// container. Container discovery failures fall back to the journal alone.
    pub async fn list_sources(&self, secure_mode: bool) -> Vec<String> {
        let mut sources = vec![SYSTEM_SOURCE.to_owned()];
        if !secure_mode {
            return sources;
        }

        match list_containers(self.runner.as_ref()).await {
            Ok(names) => sources.extend(names),
            Err(e) => tracing::warn!(error = %e, "container discovery failed"),
        }
        sources
    }

    async fn all_sources(
        &self,
        line_limit: usize,
        secure_mode: bool,
        now: DateTime<Utc>,
    ) -> Vec<LogLine> {
        let mut sequences = Vec::new();

        match self.journal(now).await {
            Ok(lines) => sequences.push(lines),
            Err(e) => tracing::warn!(
                program = e.program(),
                error = %e,
                "system journal unavailable; skipped"
            ),
        }

        if secure_mode {
            match list_containers(self.runner.as_ref()).await {
                Ok(names) => {
                    for name in &names {
                        match self.container(name, line_limit, now).await {
                            Ok(lines) => sequences.push(lines),
                            Err(e) => tracing::warn!(
                                container = %name,
                                program = e.program(),
                                error = %e,
                                "container logs unavailable; skipped"
                            ),
                        }
                    }
                }
                Err(e) => tracing::warn!(error = %e, "container discovery failed; skipped"),
            }
        }

        merge(sequences)
    }

    async fn journal(&self, now: DateTime<Utc>) -> Result<Vec<LogLine>, ExecError> {
        let raw = journal_tail(self.runner.as_ref(), self.journal_lines, &self.journal_units).await?;
        Ok(parse_journal_output(&raw, now))
    }

    /// Last `line_limit` lines of one container, ordered.
    async fn container(
        &self,
        name: &str,
        line_limit: usize,
        now: DateTime<Utc>,
    ) -> Result<Vec<LogLine>, ExecError> {
        let raw = container_logs(self.runner.as_ref(), name, line_limit).await?;
        let mut lines = parse_container_output(name, &raw, now);

        // stdout and stderr arrive as separate blocks.
        lines.sort_by_key(|l| l.timestamp);
        if lines.len() > line_limit {
            lines.drain(..lines.len() - line_limit);
        }
        Ok(lines)
    }
}
