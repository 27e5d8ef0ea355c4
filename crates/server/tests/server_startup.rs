use std::io::Write;
use std::net::TcpListener;
use std::time::Duration;

use reqwest::Client;
use tempfile::NamedTempFile;
use tokio::time::sleep;

/// Find an available port
fn get_available_port() -> u16 {
    TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port()
}

/// Create a minimal valid config
fn minimal_config(port: u16) -> String {
    format!(
        r#"
[server]
host = "127.0.0.1"
port = {}

[search]
default_languages = ["en", "hu"]
"#,
        port
    )
}

/// Spawn the server and return a handle
async fn spawn_server(config_path: &std::path::Path) -> tokio::process::Child {
    tokio::process::Command::new(env!("CARGO_BIN_EXE_bookseek"))
        .env("BOOKSEEK_CONFIG", config_path)
        .env("RUST_LOG", "error") // Quiet logs during tests
        .kill_on_drop(true)
        .spawn()
        .expect("Failed to spawn server")
}

/// Wait for server to be ready
async fn wait_for_server(port: u16, max_attempts: u32) -> bool {
    let client = Client::new();
    for _ in 0..max_attempts {
        if client
            .get(format!("http://127.0.0.1:{}/api/v1/health", port))
            .send()
            .await
            .is_ok()
        {
            return true;
        }
        sleep(Duration::from_millis(50)).await;
    }
    false
}

fn write_config(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(content.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

#[tokio::test]
async fn test_health_endpoint() {
    let port = get_available_port();
    let config_file = write_config(&minimal_config(port));

    let mut server = spawn_server(config_file.path()).await;
    assert!(
        wait_for_server(port, 40).await,
        "Server did not start in time"
    );

    let client = Client::new();
    let response = client
        .get(format!("http://127.0.0.1:{}/api/v1/health", port))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let json: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(json["status"], "ok");

    server.kill().await.ok();
}

#[tokio::test]
async fn test_plan_endpoint_uses_configured_languages() {
    let port = get_available_port();
    let config_file = write_config(&minimal_config(port));

    let mut server = spawn_server(config_file.path()).await;
    assert!(
        wait_for_server(port, 40).await,
        "Server did not start in time"
    );

    let client = Client::new();
    let response = client
        .post(format!("http://127.0.0.1:{}/api/v1/plan", port))
        .json(&serde_json::json!({
            "book": {
                "title": "Dune",
                "authors": ["Frank Herbert"],
                "titles_by_language": { "hu": "A Dűne" }
            }
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let json: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(json["languages"], serde_json::json!(["en", "hu"]));
    assert_eq!(json["title_variants"][0]["query"], "Dune Frank Herbert");
    assert_eq!(json["title_variants"][1]["query"], "A Dűne Frank Herbert");

    server.kill().await.ok();
}

#[tokio::test]
async fn test_invalid_config_exits() {
    let config_file = write_config(
        r#"
[server]
port = 0
"#,
    );

    let status = tokio::process::Command::new(env!("CARGO_BIN_EXE_bookseek"))
        .env("BOOKSEEK_CONFIG", config_file.path())
        .env("RUST_LOG", "error")
        .status()
        .await
        .expect("Failed to run server");

    assert!(!status.success());
}

#[tokio::test]
async fn test_missing_config_exits() {
    let status = tokio::process::Command::new(env!("CARGO_BIN_EXE_bookseek"))
        .env("BOOKSEEK_CONFIG", "/nonexistent/bookseek.toml")
        .env("RUST_LOG", "error")
        .status()
        .await
        .expect("Failed to run server");

    assert!(!status.success());
}
