use crate::exec::ExecError;
use async_trait::async_trait;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

pub const DEFAULT_EXEC_TIMEOUT: Duration = Duration::from_secs(10);

/// Captured output of a successful command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl CommandOutput {
    pub fn from_stdout(stdout: impl Into<Vec<u8>>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: Vec::new(),
        }
    }

    pub fn stdout_lossy(&self) -> String {
        String::from_utf8_lossy(&self.stdout).into_owned()
    }

    /// Stdout followed by stderr, for tools that split one stream across both.
    pub fn combined_lossy(&self) -> String {
        let mut out = String::from_utf8_lossy(&self.stdout).into_owned();
        if !self.stderr.is_empty() {
            if !out.is_empty() && !out.ends_with('\n') {
                out.push('\n');
            }
            out.push_str(&String::from_utf8_lossy(&self.stderr));
        }
        out
    }
}

/// Capability to run read-only system tools.
///
/// Arguments are passed as a vector straight to the program; nothing is ever
/// interpreted by a shell.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput, ExecError>;
}

/// Runs commands as child processes, bounded by a per-invocation timeout.
#[derive(Debug, Clone)]
pub struct SystemCommandRunner {
    timeout: Duration,
}

impl Default for SystemCommandRunner {
    fn default() -> Self {
        Self::new(DEFAULT_EXEC_TIMEOUT)
    }
}

impl SystemCommandRunner {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl CommandRunner for SystemCommandRunner {
    async fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput, ExecError> {
        let mut cmd = Command::new(program);
        cmd.args(args)
            // Month names in journal output must not depend on the host locale.
            .env("LC_ALL", "C")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            // Dropping the wait future on timeout kills the child.
            .kill_on_drop(true);

        let child = cmd.spawn().map_err(|source| ExecError::Spawn {
            program: program.to_owned(),
            source,
        })?;

        let output = match tokio::time::timeout(self.timeout, child.wait_with_output()).await {
            Ok(result) => result.map_err(|source| ExecError::Io {
                program: program.to_owned(),
                source,
            })?,
            Err(_) => {
                tracing::warn!(
                    program,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "command timed out; child killed"
                );
                return Err(ExecError::TimedOut {
                    program: program.to_owned(),
                    timeout: self.timeout,
                });
            }
        };

        let captured = CommandOutput {
            stdout: output.stdout,
            stderr: output.stderr,
        };

        if !output.status.success() {
            return Err(ExecError::NonZeroExit {
                program: program.to_owned(),
                status: output.status.to_string(),
                output: captured.combined_lossy().trim().to_owned(),
            });
        }

        tracing::trace!(program, bytes = captured.stdout.len(), "command finished");
        Ok(captured)
    }
}
