use integration_tests::harness::{TestServer, test_config};
use pretty_assertions::assert_eq;
use secretvm_rest_core::exec::ScriptedRunner;
use serde_json::Value;

mod common;

#[test]
fn status_reports_running_vm() {
    // Arrange
    let mut cfg = test_config();
    cfg.server.env = "integration".to_owned();
    let server = TestServer::start(cfg, common::running_vm());

    // Act
    let res = server.get("/status").send().expect("request failed");

    // Assert
    assert_eq!(res.status(), 200);
    assert_eq!(
        res.headers().get("content-type").unwrap(),
        "application/json"
    );
    let body: Value = res.json().unwrap();
    assert_eq!(body["status"], "running");
    assert_eq!(body["env"], "integration");
}

#[test]
fn status_without_service_manager_is_server_error() {
    let server = TestServer::start(test_config(), ScriptedRunner::new());

    let body: Value = server.get("/status").send().unwrap().json().unwrap();

    assert_eq!(body["status"], "server_error");
    assert_eq!(body["env"], "unknown");
}
