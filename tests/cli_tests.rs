use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ENDPOINT: &str = "/api/user_api/homework_statuses/";

const SECRET_VARS: [&str; 4] = [
    "PRAKTIKUM_TOKEN",
    "TELEGRAM_TOKEN",
    "TELEGRAM_CHAT_ID",
    "PRAKTIKUM_API_URL",
];

/// A command isolated from the caller's environment and any `.env` file.
fn reviewbot(workdir: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("reviewbot").expect("binary built");
    cmd.current_dir(workdir.path());
    for var in SECRET_VARS {
        cmd.env_remove(var);
    }
    cmd.env_remove("RUST_LOG");
    cmd
}

fn with_secrets(cmd: &mut Command) -> &mut Command {
    cmd.env("PRAKTIKUM_TOKEN", "api-secret-token")
        .env("TELEGRAM_TOKEN", "123456:bot-secret-token")
        .env("TELEGRAM_CHAT_ID", "42")
}

#[test]
fn help_lists_commands() {
    let dir = tempfile::tempdir().expect("temp dir");
    reviewbot(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn missing_token_is_fatal_at_startup() {
    let dir = tempfile::tempdir().expect("temp dir");
    reviewbot(&dir)
        .args(["check", "config"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("PRAKTIKUM_TOKEN"));
}

#[test]
fn non_numeric_chat_id_is_fatal_at_startup() {
    let dir = tempfile::tempdir().expect("temp dir");
    let mut cmd = reviewbot(&dir);
    with_secrets(&mut cmd)
        .env("TELEGRAM_CHAT_ID", "not-a-number")
        .args(["check", "config"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("TELEGRAM_CHAT_ID"));
}

#[test]
fn check_config_masks_secrets() {
    let dir = tempfile::tempdir().expect("temp dir");
    let mut cmd = reviewbot(&dir);
    with_secrets(&mut cmd)
        .args(["check", "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration OK"))
        .stdout(predicate::str::contains("****oken"))
        .stdout(predicate::str::contains("api-secret-token").not());
}

#[test]
fn check_config_reads_config_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("reviewbot.toml");
    std::fs::write(&path, "[poll]\ninterval_secs = 42\n").expect("write config");

    let mut cmd = reviewbot(&dir);
    with_secrets(&mut cmd)
        .args(["check", "config", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("42s"));
}

#[test]
fn invalid_config_file_is_fatal() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("reviewbot.toml");
    std::fs::write(&path, "[poll]\ninterval_secs = 0\n").expect("write config");

    let mut cmd = reviewbot(&dir);
    with_secrets(&mut cmd)
        .args(["check", "config", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("poll.interval_secs"));
}

#[tokio::test]
async fn check_api_queries_the_configured_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(ENDPOINT))
        .and(header("Authorization", "OAuth api-secret-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "homeworks": [{"homework_name": "proj1", "status": "reviewing"}],
            "current_date": 1_700_000_000
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("temp dir");
    let mut cmd = reviewbot(&dir);
    with_secrets(&mut cmd)
        .env("PRAKTIKUM_API_URL", format!("{}{ENDPOINT}", server.uri()))
        .args(["check", "api"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Review API reachable"))
        .stdout(predicate::str::contains("1700000000"));
}

#[tokio::test]
async fn check_api_fails_on_server_error_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "code": "not_authenticated",
            "message": "Учетные данные не были предоставлены."
        })))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("temp dir");
    let mut cmd = reviewbot(&dir);
    with_secrets(&mut cmd)
        .env("PRAKTIKUM_API_URL", format!("{}{ENDPOINT}", server.uri()))
        .args(["check", "api"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("not_authenticated"));
}
