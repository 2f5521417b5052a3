use integration_tests::harness::{TestServer, fixture_config};
use pretty_assertions::assert_eq;
use serde_json::Value;

mod common;

const TOKEN: &str = "integration-token";

#[test]
fn open_bit_is_public_under_private_mode() {
    let server = TestServer::start(fixture_config("private.hcl"), common::running_vm());

    let res = server.get("/status").send().unwrap();

    assert_eq!(res.status(), 200);
}

#[test]
fn closed_bit_without_token_is_401() {
    // Arrange
    let server = TestServer::start(fixture_config("private.hcl"), common::running_vm());

    // Act
    let res = server.get("/logs").send().unwrap();

    // Assert
    assert_eq!(res.status(), 401);
    let body: Value = res.json().unwrap();
    assert_eq!(
        body,
        serde_json::json!({"error": "Unauthorized", "details": "invalid or missing token"})
    );
    assert!(!server.runner().was_called("journalctl", &[]));
}

#[test]
fn every_token_source_is_accepted() {
    let server = TestServer::start(fixture_config("private.hcl"), common::running_vm());

    let bearer = server.get("/services").bearer_auth(TOKEN).send().unwrap();
    let dev = server
        .get("/services")
        .header("X-Dev-Token", TOKEN)
        .send()
        .unwrap();
    let query = server
        .get(&format!("/services?token={TOKEN}"))
        .send()
        .unwrap();

    assert_eq!(bearer.status(), 200);
    assert_eq!(dev.status(), 200);
    assert_eq!(query.status(), 200);
}

#[test]
fn wrong_token_is_401() {
    let server = TestServer::start(fixture_config("private.hcl"), common::running_vm());

    let res = server.get("/logs").bearer_auth("nope").send().unwrap();

    assert_eq!(res.status(), 401);
}

#[test]
fn unregistered_path_is_rejected_even_with_token() {
    let server = TestServer::start(fixture_config("private.hcl"), common::running_vm());

    let res = server.get("/admin").bearer_auth(TOKEN).send().unwrap();

    assert_eq!(res.status(), 401);
    let body: Value = res.json().unwrap();
    assert_eq!(body["details"], "no policy registered");
}
