//! Integration tests for the privacy CLI.
//!
//! These tests verify end-to-end CLI behavior using assert_cmd, with wiremock
//! standing in for the Cards API.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn privacy_cmd() -> Command {
    let mut cmd = Command::cargo_bin("privacy").unwrap();
    cmd.env_remove("PRIVACY_ENVIRONMENT").env_remove("RUST_LOG");
    cmd
}

#[test]
fn cli_shows_help() {
    privacy_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Manage privacy.com virtual cards"))
        .stdout(predicate::str::contains("--sandbox"))
        .stdout(predicate::str::contains("cards"));
}

#[test]
fn cards_help_lists_operations() {
    privacy_cmd()
        .args(["cards", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("get"))
        .stdout(predicate::str::contains("create"))
        .stdout(predicate::str::contains("update"));
}

#[test]
fn missing_api_key_fails() {
    privacy_cmd()
        .env_remove("PRIVACY_API_KEY")
        .args(["cards", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("PRIVACY_API_KEY"));
}

#[test]
fn unknown_environment_fails() {
    privacy_cmd()
        .env("PRIVACY_API_KEY", "test-key")
        .env("PRIVACY_ENVIRONMENT", "staging")
        .args(["cards", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown environment"));
}

#[tokio::test(flavor = "multi_thread")]
async fn list_prints_page_as_json() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/cards"))
        .and(header("authorization", "api-key test-key"))
        .and(query_param("page_size", "50"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"token": "abc-123", "memo": "New Card", "type": "SINGLE_USE"}],
            "total_entries": 1,
            "total_pages": 1,
            "page": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let output = tokio::task::spawn_blocking(move || {
        privacy_cmd()
            .env("PRIVACY_API_KEY", "test-key")
            .args(["cards", "list", "--base-url", &uri])
            .output()
            .unwrap()
    })
    .await
    .unwrap();

    assert!(output.status.success());
    let page: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(page["data"][0]["token"], "abc-123");
    assert_eq!(page["total_entries"], 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn api_error_exits_non_zero() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/cards"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({"error": "invalid_request"})),
        )
        .mount(&server)
        .await;

    let uri = server.uri();
    let output = tokio::task::spawn_blocking(move || {
        privacy_cmd()
            .env("PRIVACY_API_KEY", "test-key")
            .args(["cards", "create", "--memo", "x", "--base-url", &uri])
            .output()
            .unwrap()
    })
    .await
    .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("HTTP 422"));
    assert!(stderr.contains("invalid_request"));
}
