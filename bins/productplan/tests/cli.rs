//! Argument handling and failure paths of the `productplan` binary

use assert_cmd::Command;
use predicates::prelude::*;

fn productplan() -> Command {
    let mut cmd = Command::cargo_bin("productplan").unwrap();
    cmd.env_remove("PRODUCTPLAN_API_TOKEN")
        .env_remove("PRODUCTPLAN_API_URL")
        .env_remove("PRODUCTPLAN_USER_AGENT")
        .env_remove("PRODUCTPLAN_TIMEOUT_SECS");
    cmd
}

/// A port nothing is listening on
fn closed_port_url() -> String {
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    format!("http://127.0.0.1:{port}")
}

#[test]
fn help_lists_resources() {
    productplan()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("status"))
        .stdout(predicate::str::contains("roadmaps"))
        .stdout(predicate::str::contains("bars"))
        .stdout(predicate::str::contains("ideas"));
}

#[test]
fn missing_token_is_reported() {
    productplan()
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing OAuth token"));
}

#[test]
fn token_is_read_from_environment() {
    productplan()
        .env("PRODUCTPLAN_API_TOKEN", "env-token")
        .args(["--base-url", &closed_port_url(), "status"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing OAuth token").not())
        .stderr(predicate::str::contains("HTTP request failed"));
}

#[test]
fn invalid_base_url_is_rejected() {
    productplan()
        .args(["--token", "t", "--base-url", "ftp://example.com", "roadmaps", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("base_url must start with http:// or https://"));
}

#[test]
fn timeout_is_read_from_environment() {
    productplan()
        .env("PRODUCTPLAN_TIMEOUT_SECS", "0")
        .args(["--token", "t", "--base-url", &closed_port_url(), "status"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("timeout cannot be zero"));
}

#[test]
fn timeout_must_be_a_number() {
    productplan()
        .args(["--token", "t", "--timeout", "soon", "status"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn empty_bar_update_is_rejected_before_sending() {
    productplan()
        .args(["--token", "t", "--base-url", &closed_port_url(), "bars", "update", "205400"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nothing to update for bar 205400"));
}

#[test]
fn bad_date_is_a_usage_error() {
    productplan()
        .args(["--token", "t", "bars", "update", "1", "--start-date", "07/01/2018"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn percent_done_is_bounded() {
    productplan()
        .args(["--token", "t", "bars", "update", "1", "--percent-done", "150"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn import_requires_readable_file() {
    productplan()
        .args([
            "--token",
            "t",
            "--base-url",
            &closed_port_url(),
            "ideas",
            "import",
            "--roadmap",
            "4946",
            "--file",
            "does-not-exist.json",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read does-not-exist.json"));
}
