use crate::exec::commands::{
    container_logs, journal_tail, list_containers, unit_history, unit_substate,
};
use crate::exec::{CommandOutput, ScriptedRunner};
use pretty_assertions::assert_eq;

#[tokio::test]
async fn journal_tail_passes_units_as_separate_arguments() {
    // Arrange
    let runner = ScriptedRunner::new().on("journalctl", &[], "");
    let units = vec!["docker.service".to_owned(), "a b.service".to_owned()];

    // Act
    journal_tail(&runner, 250, &units).await.unwrap();

    // Assert
    assert_eq!(
        runner.calls(),
        vec![vec![
            "journalctl",
            "--utc",
            "--no-pager",
            "-q",
            "-o",
            "short-precise",
            "-n",
            "250",
            "-u",
            "docker.service",
            "-u",
            "a b.service",
        ]]
    );
}

#[tokio::test]
async fn container_listing_is_sorted_and_trimmed() {
    let runner = ScriptedRunner::new().on("docker", &["ps", "-a"], "web\n\n  db \napi\nweb\n");

    let names = list_containers(&runner).await.unwrap();

    assert_eq!(names, vec!["api", "db", "web"]);
}

#[tokio::test]
async fn container_logs_include_stderr() {
    let runner = ScriptedRunner::new().on_output(
        "docker",
        &["logs"],
        CommandOutput {
            stdout: b"2024-05-01T10:00:00.000000001Z out".to_vec(),
            stderr: b"2024-05-01T10:00:01.000000001Z err\n".to_vec(),
        },
    );

    let out = container_logs(&runner, "web; rm -rf /", 10).await.unwrap();

    assert_eq!(
        out,
        "2024-05-01T10:00:00.000000001Z out\n2024-05-01T10:00:01.000000001Z err\n"
    );
    assert!(runner.was_called("docker", &["logs", "--timestamps", "--tail", "10", "web; rm -rf /"]));
}

#[tokio::test]
async fn substate_is_trimmed() {
    let runner = ScriptedRunner::new().on("systemctl", &["show"], "running\n");

    let state = unit_substate(&runner, "x.service").await.unwrap();

    assert_eq!(state, "running");
}

#[tokio::test]
async fn unit_history_uses_message_only_output() {
    let runner = ScriptedRunner::new().on("journalctl", &[], "Deactivated successfully.\n");

    unit_history(&runner, "boot.service", 50).await.unwrap();

    assert!(runner.was_called(
        "journalctl",
        &["--utc", "--no-pager", "-q", "-o", "cat", "-n", "50", "-u", "boot.service"]
    ));
}
