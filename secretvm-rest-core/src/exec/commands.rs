//! Argument vectors for every system tool the service invokes.
//!
//! Caller-supplied values (container names, service ids) are only ever
//! passed as discrete arguments.

use crate::exec::{CommandRunner, ExecError};

pub const JOURNALCTL: &str = "journalctl";
pub const DOCKER: &str = "docker";
pub const SYSTEMCTL: &str = "systemctl";
pub const KMS_QUERY: &str = "kms-query";

/// Recent journal entries in `short-precise` format, UTC.
pub async fn journal_tail(
    runner: &dyn CommandRunner,
    lines: usize,
    units: &[String],
) -> Result<String, ExecError> {
    let mut args = strings(&["--utc", "--no-pager", "-q", "-o", "short-precise", "-n"]);
    args.push(lines.to_string());
    for unit in units {
        args.push("-u".to_owned());
        args.push(unit.clone());
    }
    Ok(runner.run(JOURNALCTL, &args).await?.stdout_lossy())
}

/// Message bodies only, for scanning a unit's exit history.
pub async fn unit_history(
    runner: &dyn CommandRunner,
    unit: &str,
    lines: usize,
) -> Result<String, ExecError> {
    let mut args = strings(&["--utc", "--no-pager", "-q", "-o", "cat", "-n"]);
    args.push(lines.to_string());
    args.push("-u".to_owned());
    args.push(unit.to_owned());
    Ok(runner.run(JOURNALCTL, &args).await?.stdout_lossy())
}

/// Names of every container, running or stopped, sorted by name.
pub async fn list_containers(runner: &dyn CommandRunner) -> Result<Vec<String>, ExecError> {
    let args = strings(&["ps", "-a", "--format", "{{.Names}}"]);
    let out = runner.run(DOCKER, &args).await?.stdout_lossy();
    let mut names = non_empty_lines(&out);
    names.sort();
    names.dedup();
    Ok(names)
}

/// IDs of running containers.
pub async fn active_containers(runner: &dyn CommandRunner) -> Result<Vec<String>, ExecError> {
    let out = runner.run(DOCKER, &strings(&["ps", "-q"])).await?.stdout_lossy();
    Ok(non_empty_lines(&out))
}

/// Last `tail` lines of a container, both streams, RFC 3339 prefixed.
pub async fn container_logs(
    runner: &dyn CommandRunner,
    name: &str,
    tail: usize,
) -> Result<String, ExecError> {
    let mut args = strings(&["logs", "--timestamps", "--tail"]);
    args.push(tail.to_string());
    args.push(name.to_owned());
    Ok(runner.run(DOCKER, &args).await?.combined_lossy())
}

pub async fn unit_substate(runner: &dyn CommandRunner, unit: &str) -> Result<String, ExecError> {
    let mut args = strings(&["show", "-p", "SubState", "--value"]);
    args.push(unit.to_owned());
    let out = runner.run(SYSTEMCTL, &args).await?.stdout_lossy();
    Ok(out.trim().to_owned())
}

pub async fn image_filters(
    runner: &dyn CommandRunner,
    service_id: &str,
) -> Result<String, ExecError> {
    let args = vec!["list_image_filters".to_owned(), service_id.to_owned()];
    Ok(runner.run(KMS_QUERY, &args).await?.stdout_lossy())
}

fn strings(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}

fn non_empty_lines(out: &str) -> Vec<String> {
    out.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_owned)
        .collect()
}
