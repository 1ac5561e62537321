//! Integration tests for exit codes and fatal diagnostic lines.
//!
//! Every fatal error kind must print exactly one stderr line and exit 1;
//! success exits 0.

mod common;

use common::{dataview_cmd, dataview_cmd_for, mock_healthy_ping, search_response};
use predicates::prelude::*;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_success_returns_exit_code_0() {
    let server = MockServer::start().await;
    mock_healthy_ping(&server).await;

    Mock::given(method("POST"))
        .and(path("/.kibana/_search"))
        .respond_with(search_response(serde_json::json!([])))
        .mount(&server)
        .await;

    dataview_cmd_for(&server).assert().code(0);
}

#[tokio::test]
async fn test_failed_probe_prints_connection_error_and_exits_1() {
    let server = MockServer::start().await;

    Mock::given(method("HEAD"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    dataview_cmd_for(&server)
        .assert()
        .code(1)
        .stderr("Connection error: Failed to connect to Elasticsearch cluster.\n");
}

#[test]
fn test_unreachable_cluster_prints_connection_error_and_exits_1() {
    let mut cmd = dataview_cmd();
    // Use a port that's unlikely to be open.
    cmd.env("ELASTICSEARCH_URL", "http://localhost:1");
    cmd.assert()
        .code(1)
        .stderr("Connection error: Failed to connect to Elasticsearch cluster.\n");
}

#[tokio::test]
async fn test_rejected_credentials_print_auth_failure_and_exit_1() {
    let server = MockServer::start().await;

    Mock::given(method("HEAD"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    dataview_cmd_for(&server)
        .args(["--username", "elastic", "--password", "wrong"])
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("Authentication failed:"));
}

#[tokio::test]
async fn test_missing_index_prints_not_found_and_exits_1() {
    let server = MockServer::start().await;
    mock_healthy_ping(&server).await;

    Mock::given(method("POST"))
        .and(path("/.kibana/_search"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "error": {
                "type": "index_not_found_exception",
                "reason": "no such index [.kibana]"
            },
            "status": 404
        })))
        .mount(&server)
        .await;

    dataview_cmd_for(&server)
        .assert()
        .code(1)
        .stderr("Index '.kibana' not found.\n");
}

#[tokio::test]
async fn test_search_error_prints_search_failure_and_exits_1() {
    let server = MockServer::start().await;
    mock_healthy_ping(&server).await;

    Mock::given(method("POST"))
        .and(path("/.kibana/_search"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "error": {
                "type": "search_phase_execution_exception",
                "reason": "all shards failed"
            },
            "status": 500
        })))
        .mount(&server)
        .await;

    dataview_cmd_for(&server)
        .assert()
        .code(1)
        .stderr("An error occurred while searching: all shards failed\n");
}

#[test]
fn test_invalid_base_url_is_an_unexpected_failure() {
    let mut cmd = dataview_cmd();
    cmd.env("ELASTICSEARCH_URL", "not a url");
    cmd.assert()
        .code(1)
        .stderr(predicate::str::starts_with("An unexpected error occurred:"));
}
