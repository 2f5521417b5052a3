use crate::exec::{CommandOutput, CommandRunner, ExecError};
use async_trait::async_trait;
use std::sync::Mutex;
use std::time::Duration;

#[derive(Debug, Clone)]
enum Reply {
    Output(CommandOutput),
    Fail { status: String, output: String },
    TimedOut,
}

#[derive(Debug, Clone)]
struct Rule {
    program: String,
    args_prefix: Vec<String>,
    reply: Reply,
}

impl Rule {
    fn matches(&self, program: &str, args: &[String]) -> bool {
        self.program == program && args.starts_with(&self.args_prefix)
    }
}

/// Deterministic `CommandRunner` answering from canned replies.
///
/// A rule matches when the program is equal and the invocation's arguments
/// start with the rule's prefix. The longest matching prefix wins, so a broad
/// rule can be refined by a narrower one. Unmatched invocations fail as if the
/// program did not exist.
#[derive(Debug, Default)]
pub struct ScriptedRunner {
    rules: Vec<Rule>,
    calls: Mutex<Vec<Vec<String>>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reply with `stdout` and a zero exit status.
    pub fn on(self, program: &str, args_prefix: &[&str], stdout: impl Into<String>) -> Self {
        let output = CommandOutput::from_stdout(stdout.into().into_bytes());
        self.rule(program, args_prefix, Reply::Output(output))
    }

    /// Reply with both output streams and a zero exit status.
    pub fn on_output(self, program: &str, args_prefix: &[&str], output: CommandOutput) -> Self {
        self.rule(program, args_prefix, Reply::Output(output))
    }

    /// Reply with a non-zero exit status carrying `output` as diagnostics.
    pub fn fail(self, program: &str, args_prefix: &[&str], output: impl Into<String>) -> Self {
        self.rule(
            program,
            args_prefix,
            Reply::Fail {
                status: "exit status: 1".to_owned(),
                output: output.into(),
            },
        )
    }

    /// Reply as if the invocation ran past its timeout.
    pub fn time_out(self, program: &str, args_prefix: &[&str]) -> Self {
        self.rule(program, args_prefix, Reply::TimedOut)
    }

    fn rule(mut self, program: &str, args_prefix: &[&str], reply: Reply) -> Self {
        self.rules.push(Rule {
            program: program.to_owned(),
            args_prefix: args_prefix.iter().map(|s| s.to_string()).collect(),
            reply,
        });
        self
    }

    /// Every invocation so far, as `[program, args...]`.
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn was_called(&self, program: &str, args_prefix: &[&str]) -> bool {
        self.calls().iter().any(|call| {
            call.first().map(String::as_str) == Some(program)
                && call.len() > args_prefix.len()
                && call[1..]
                    .iter()
                    .zip(args_prefix)
                    .all(|(have, want)| have == want)
        })
    }

    fn lookup(&self, program: &str, args: &[String]) -> Option<&Rule> {
        self.rules
            .iter()
            .filter(|r| r.matches(program, args))
            .max_by_key(|r| r.args_prefix.len())
    }
}

#[async_trait]
impl CommandRunner for ScriptedRunner {
    async fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput, ExecError> {
        if let Ok(mut calls) = self.calls.lock() {
            let mut call = vec![program.to_owned()];
            call.extend(args.iter().cloned());
            calls.push(call);
        }

        let Some(rule) = self.lookup(program, args) else {
            return Err(ExecError::Spawn {
                program: program.to_owned(),
                source: std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("no scripted reply for {program} {}", args.join(" ")),
                ),
            });
        };

        match &rule.reply {
            Reply::Output(output) => Ok(output.clone()),
            Reply::Fail { status, output } => Err(ExecError::NonZeroExit {
                program: program.to_owned(),
                status: status.clone(),
                output: output.clone(),
            }),
            Reply::TimedOut => Err(ExecError::TimedOut {
                program: program.to_owned(),
                timeout: Duration::from_secs(10),
            }),
        }
    }
}
