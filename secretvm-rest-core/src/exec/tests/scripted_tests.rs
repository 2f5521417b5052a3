use crate::exec::{CommandRunner, ExecError, ScriptedRunner};
use pretty_assertions::assert_eq;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn longest_prefix_wins() {
    let runner = ScriptedRunner::new()
        .on("docker", &["ps"], "broad\n")
        .on("docker", &["ps", "-q"], "narrow\n");

    let out = runner.run("docker", &args(&["ps", "-q"])).await.unwrap();

    assert_eq!(out.stdout_lossy(), "narrow\n");
}

#[tokio::test]
async fn unmatched_invocation_fails_and_is_recorded() {
    let runner = ScriptedRunner::new().on("docker", &["ps"], "");

    let err = runner
        .run("systemctl", &args(&["show", "x"]))
        .await
        .unwrap_err();

    assert!(matches!(err, ExecError::Spawn { .. }));
    assert!(runner.was_called("systemctl", &["show"]));
    assert!(!runner.was_called("docker", &[]));
}

#[tokio::test]
async fn failure_reply_surfaces_as_non_zero_exit() {
    let runner = ScriptedRunner::new().fail("docker", &["logs"], "No such container: web");

    let err = runner
        .run("docker", &args(&["logs", "web"]))
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "docker exited with exit status: 1: No such container: web"
    );
}
