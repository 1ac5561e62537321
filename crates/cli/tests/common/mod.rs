//! Common test utilities for dataview-cli integration tests.
//!
//! Provides a command builder isolated from the host environment and small
//! wiremock helpers shared across test files.

// Allow dead code since not all tests use all utilities
#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Environment variables the binary reads; cleared so host settings cannot
/// leak into tests.
const CONNECTION_ENV_VARS: [&str; 5] = [
    "ELASTICSEARCH_URL",
    "ELASTICSEARCH_USERNAME",
    "ELASTICSEARCH_PASSWORD",
    "ELASTICSEARCH_TIMEOUT",
    "ELASTICSEARCH_SKIP_VERIFY",
];

/// Build a `dataview-cli` command isolated from the host environment.
pub fn dataview_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("dataview-cli");
    cmd.env("DOTENV_DISABLED", "1");
    cmd.env_remove("RUST_LOG");
    for var in CONNECTION_ENV_VARS {
        cmd.env_remove(var);
    }
    cmd
}

/// Build a command pointed at the given mock server.
pub fn dataview_cmd_for(server: &MockServer) -> assert_cmd::Command {
    let mut cmd = dataview_cmd();
    cmd.env("ELASTICSEARCH_URL", server.uri());
    cmd
}

/// Mount a healthy liveness probe on the mock server.
pub async fn mock_healthy_ping(server: &MockServer) {
    Mock::given(method("HEAD"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200))
        .mount(server)
        .await;
}

/// A search response wrapping the given hits array.
pub fn search_response(hits: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({ "hits": { "hits": hits } }))
}
