//! End-to-end runs of the `archive-cmd` binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::io::Read;
use std::net::TcpListener;
use std::sync::mpsc;
use std::thread;
use tempfile::TempDir;
use tiny_http::{Header, Response, Server};

fn archive_cmd() -> Command {
    let mut cmd = Command::cargo_bin("archive-cmd").unwrap();
    cmd.env_remove("ARCHIVE_SERVICE_URL")
        .env_remove("JUPYTER_TOKEN")
        .env_remove("RUST_LOG");
    cmd
}

fn closed_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

/// Answer one request with `(status, body)` and hand back what was posted
fn serve_once(status: u16, body: &'static str) -> (String, mpsc::Receiver<(String, String)>) {
    let server = Server::http("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}", server.server_addr());
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        if let Ok(mut req) = server.recv() {
            let mut content = String::new();
            let _ = req.as_reader().read_to_string(&mut content);
            let _ = tx.send((req.url().to_string(), content));
            let response = Response::from_string(body)
                .with_status_code(status)
                .with_header(Header::from_bytes("Content-Type", "application/json").unwrap());
            let _ = req.respond(response);
        }
    });

    (base_url, rx)
}

#[test]
fn test_commands_lists_both_ids() {
    archive_cmd()
        .arg("commands")
        .assert()
        .success()
        .stdout(predicate::str::contains("jupyterlab-zip-extension:plugin"))
        .stdout(predicate::str::contains("filebrowser:zip-file"))
        .stdout(predicate::str::contains("filebrowser:create-zip"));
}

#[test]
fn test_status_for_a_plain_file() {
    archive_cmd()
        .args(["status", "notes.txt"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"filebrowser:zip-file\s+Extract Archive\s+enabled: no\s+visible: no").unwrap())
        .stdout(predicate::str::is_match(r"filebrowser:create-zip\s+Create Archive\s+enabled: yes\s+visible: yes").unwrap());
}

#[test]
fn test_status_always_show_extract() {
    archive_cmd()
        .args(["status", "notes.txt", "--always-show-extract"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"filebrowser:zip-file\s+Extract Archive\s+enabled: no\s+visible: yes").unwrap());
}

#[test]
fn test_status_for_an_archive() {
    archive_cmd()
        .args(["status", "data/Bundle.ZIP"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"filebrowser:zip-file\s+Extract Archive\s+enabled: yes\s+visible: yes").unwrap());
}

#[test]
fn test_extract_of_non_archive_is_skipped() {
    archive_cmd()
        .args(["--base-url", &closed_base_url(), "extract", "notes.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing to do"));
}

#[test]
fn test_extract_without_service_fails() {
    archive_cmd()
        .args(["--base-url", &closed_base_url(), "extract", "data.zip"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not reach the archive service"));
}

#[test]
fn test_extract_posts_override_and_refreshes() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("data")).unwrap();
    fs::write(temp_dir.path().join("data/archive.zip"), b"PK").unwrap();
    let (base_url, requests) = serve_once(200, r#"{"success":true,"extract_path":"data/archive","message":"Extracted 3 files"}"#);

    archive_cmd()
        .arg("--root")
        .arg(temp_dir.path())
        .args(["--base-url", &base_url])
        .args(["extract", "data/archive.zip", "--extract-to-named-folder", "false"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Extract Archive: data/archive"))
        .stdout(predicate::str::contains("Extracted 3 files"))
        .stdout(predicate::str::contains("archive.zip"));

    let (url, body) = requests.recv().unwrap();
    assert_eq!(url, "/jupyterlab-zip/unzip");
    let body: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(
        body,
        serde_json::json!({"archive_path": "data/archive.zip", "extract_to_named_folder": false})
    );
}

#[test]
fn test_extract_reads_settings_file() {
    let temp_dir = TempDir::new().unwrap();
    let settings = temp_dir.path().join("settings.toml");
    fs::write(&settings, "extractToNamedFolder = false\n").unwrap();
    let (base_url, requests) = serve_once(200, r#"{"success":true}"#);

    archive_cmd()
        .arg("--settings")
        .arg(&settings)
        .args(["--base-url", &base_url, "extract", "archive.zip"])
        .assert()
        .success();

    let (_, body) = requests.recv().unwrap();
    assert!(body.contains(r#""extract_to_named_folder":false"#));
}

#[test]
fn test_extract_reports_service_failure() {
    let (base_url, _requests) = serve_once(200, r#"{"success":false,"error":"bad crc"}"#);

    archive_cmd()
        .args(["--base-url", &base_url, "extract", "archive.zip"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("bad crc"));
}

#[test]
fn test_create_with_name() {
    let (base_url, requests) = serve_once(200, r#"{"success":true,"archive_path":"bundle.zip"}"#);

    archive_cmd()
        .args(["--base-url", &base_url, "create", "a.txt", "b.txt", "--name", "bundle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Create Archive: bundle.zip"));

    let (url, body) = requests.recv().unwrap();
    assert_eq!(url, "/jupyterlab-zip/zip");
    let body: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(
        body,
        serde_json::json!({"archive_name": "bundle.zip", "paths": ["a.txt", "b.txt"]})
    );
}

#[test]
fn test_create_prompt_takes_default_on_enter() {
    let (base_url, requests) = serve_once(200, r#"{"success":true}"#);

    archive_cmd()
        .args(["--base-url", &base_url, "create", "notes"])
        .write_stdin("\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Archive name [notes.zip]:"));

    let (_, body) = requests.recv().unwrap();
    assert!(body.contains(r#""archive_name":"notes.zip""#));
}

#[test]
fn test_create_cancelled_at_end_of_input() {
    archive_cmd()
        .args(["--base-url", &closed_base_url(), "create", "notes.txt"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("cancelled"));
}

#[test]
fn test_create_blank_name_is_skipped() {
    archive_cmd()
        .args(["--base-url", &closed_base_url(), "create", "notes.txt", "--name", "   "])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing to do"));
}

#[test]
fn test_settings_defaults() {
    archive_cmd()
        .arg("settings")
        .assert()
        .success()
        .stdout(predicate::str::contains("extractToNamedFolder = true"));
}

#[test]
fn test_settings_from_json_file() {
    let temp_dir = TempDir::new().unwrap();
    let settings = temp_dir.path().join("settings.json");
    fs::write(&settings, r#"{"extractToNamedFolder": false}"#).unwrap();

    archive_cmd()
        .arg("settings")
        .arg("--settings")
        .arg(&settings)
        .assert()
        .success()
        .stdout(predicate::str::contains("extractToNamedFolder = false"));
}

#[test]
fn test_settings_file_missing_falls_back_to_default() {
    let temp_dir = TempDir::new().unwrap();

    archive_cmd()
        .arg("settings")
        .arg("--settings")
        .arg(temp_dir.path().join("absent.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Could not load"))
        .stdout(predicate::str::contains("extractToNamedFolder = true"));
}
