use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};
use std::path::Path;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn write_config(dir: &Path, origin: &str) -> String {
    let config = dir.join("plaready.toml");
    let session = dir.join("session.json");
    std::fs::write(
        &config,
        format!(
            "[client]\norigin = \"{origin}\"\n\n[storage]\npath = \"{}\"\n",
            session.display()
        ),
    )
    .unwrap();
    config.display().to_string()
}

fn plaready(config: &str) -> Command {
    let mut cmd = Command::cargo_bin("plaready").unwrap();
    cmd.env_remove("PLAREADY_ORIGIN")
        .env_remove("PLAREADY_TIMEOUT_SECS")
        .env_remove("RUST_LOG")
        .args(["--config", config]);
    cmd
}

#[test]
fn test_help_lists_command_groups() {
    Command::cargo_bin("plaready")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("orders"))
        .stdout(predicate::str::contains("partner"))
        .stdout(predicate::str::contains("admin"));
}

#[test]
fn test_missing_config_file() {
    Command::cargo_bin("plaready")
        .unwrap()
        .args(["--config", "/nonexistent/plaready.toml", "services", "list"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Error:"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_services_list_as_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/services"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "name": "Standard Stringing", "category": "badminton", "base_price": 299.0,
             "description": null, "image_url": null}
        ])))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path(), &server.uri());

    let output = plaready(&config)
        .args(["--format", "json", "services", "list"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let services: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(services[0]["name"], "Standard Stringing");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_unauthorized_exit_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/orders/my"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": "Please log in"})))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path(), &server.uri());

    plaready(&config)
        .args(["orders", "list"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Please log in"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_login_persists_until_logout() {
    let server = MockServer::start().await;
    let user = json!({"id": 7, "name": "Ravi", "phone": "9000000001", "role": "customer"});
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "session=s3cr3t; Path=/; HttpOnly")
                .set_body_json(json!({"message": "Login successful", "user": user})),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .and(header("cookie", "session=s3cr3t"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user.clone()))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/auth/logout"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "Logged out"})))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path(), &server.uri());

    plaready(&config)
        .args(["auth", "login", "--phone", "9000000001", "--password", "pw"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Login successful as Ravi"));

    plaready(&config)
        .args(["--format", "json", "auth", "whoami"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"phone\": \"9000000001\""));

    plaready(&config)
        .args(["auth", "logout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged out"));

    let stored: Value =
        serde_json::from_str(&std::fs::read_to_string(dir.path().join("session.json")).unwrap())
            .unwrap();
    assert_eq!(stored, json!({}));
}
