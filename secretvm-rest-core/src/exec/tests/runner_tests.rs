use crate::exec::{CommandRunner, ExecError, SystemCommandRunner};
use pretty_assertions::assert_eq;
use std::time::{Duration, Instant};

fn sh(script: &str) -> Vec<String> {
    vec!["-c".to_owned(), script.to_owned()]
}

#[tokio::test]
async fn captures_stdout_and_stderr_separately() {
    // Arrange
    let runner = SystemCommandRunner::default();

    // Act
    let out = runner
        .run("sh", &sh("echo out; echo err 1>&2"))
        .await
        .expect("command should succeed");

    // Assert
    assert_eq!(out.stdout_lossy(), "out\n");
    assert_eq!(String::from_utf8_lossy(&out.stderr), "err\n");
    assert_eq!(out.combined_lossy(), "out\nerr\n");
}

#[tokio::test]
async fn non_zero_exit_carries_captured_output() {
    let runner = SystemCommandRunner::default();

    let err = runner
        .run("sh", &sh("echo 'unit not found' 1>&2; exit 3"))
        .await
        .unwrap_err();

    match err {
        ExecError::NonZeroExit {
            program, output, ..
        } => {
            assert_eq!(program, "sh");
            assert_eq!(output, "unit not found");
        }
        other => panic!("expected NonZeroExit, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_program_is_a_spawn_error() {
    let runner = SystemCommandRunner::default();

    let err = runner
        .run("definitely-not-a-real-binary-4f1e", &[])
        .await
        .unwrap_err();

    assert!(matches!(err, ExecError::Spawn { .. }));
    assert_eq!(err.program(), "definitely-not-a-real-binary-4f1e");
}

#[tokio::test]
async fn hung_command_is_killed_at_timeout() {
    // Arrange
    let runner = SystemCommandRunner::new(Duration::from_millis(200));
    let started = Instant::now();

    // Act
    let err = runner.run("sleep", &["30".to_owned()]).await.unwrap_err();

    // Assert
    assert!(matches!(err, ExecError::TimedOut { .. }));
    assert!(
        started.elapsed() < Duration::from_secs(5),
        "timeout must not wait for the child to finish"
    );
}
