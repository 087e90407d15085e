//! Integration tests for CLI functionality

use assert_cmd::Command;
use predicates::prelude::*;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Binary with a clean, isolated environment
fn gistctl(config_dir: &std::path::Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("gistctl"));
    cmd.env("GH_CONFIG_DIR", config_dir)
        .env_remove("GH_HOST")
        .env_remove("GH_TOKEN")
        .env_remove("GITHUB_TOKEN")
        .env_remove("GH_ENTERPRISE_TOKEN")
        .env_remove("GITHUB_ENTERPRISE_TOKEN")
        .env_remove("GISTCTL_API_URL")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_flag() {
    let dir = tempfile::tempdir().unwrap();
    gistctl(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Manage GitHub gists"));
}

#[test]
fn test_version_flag() {
    let dir = tempfile::tempdir().unwrap();
    gistctl(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("gistctl"));
}

#[test]
fn test_delete_help_mentions_interactive_pick() {
    let dir = tempfile::tempdir().unwrap();
    gistctl(dir.path())
        .args(["delete", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("interactively"));
}

#[test]
fn test_delete_without_id_when_not_interactive() {
    let dir = tempfile::tempdir().unwrap();
    gistctl(dir.path())
        .env("GH_TOKEN", "test-token")
        .arg("delete")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "a gist ID is required when not running interactively",
        ));
}

#[test]
fn test_delete_without_token() {
    let dir = tempfile::tempdir().unwrap();
    gistctl(dir.path())
        .args(["delete", "1234"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("No API token found"))
        .stderr(predicate::str::contains("GH_TOKEN"));
}

#[test]
fn test_delete_with_unparseable_hosts_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("hosts.yml"), "github.com: [broken").unwrap();
    gistctl(dir.path())
        .args(["delete", "1234"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not parse hosts file"));
}

#[test]
fn test_delete_rejects_extra_arguments() {
    let dir = tempfile::tempdir().unwrap();
    gistctl(dir.path())
        .args(["delete", "1234", "5678"])
        .assert()
        .failure()
        .code(2);
}

#[tokio::test]
async fn test_delete_by_id_is_silent_on_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/gists/1234"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    gistctl(dir.path())
        .env("GH_TOKEN", "test-token")
        .env("GISTCTL_API_URL", mock_server.uri())
        .args(["delete", "1234"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
}

#[tokio::test]
async fn test_delete_not_found_reports_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/gists/1234"))
        .respond_with(ResponseTemplate::new(404).set_body_string("{}"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    gistctl(dir.path())
        .env("GH_TOKEN", "test-token")
        .env("GISTCTL_API_URL", mock_server.uri())
        .args(["rm", "1234"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with(
            "error: unable to delete gist 1234: either the gist is not found",
        ));
}

#[tokio::test]
async fn test_batch_without_id_makes_no_requests() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&mock_server)
        .await;

    let uri = mock_server.uri();
    let dir = tempfile::tempdir().unwrap();
    gistctl(dir.path())
        .env("GH_TOKEN", "test-token")
        .args(["delete", "--batch", "--api-url", uri.as_str()])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "a gist ID is required when not running interactively",
        ));
}
