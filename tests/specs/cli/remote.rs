// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for the commands that talk to a backend: `new` online,
//! `list`, `queue flush`, and `ping`.
//!
//! A tiny scripted HTTP server stands in for the backend. Each scripted
//! response serves exactly one connection, so the recorded request lines
//! tell us precisely what the CLI asked for.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::thread::JoinHandle;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Serves the scripted responses one connection at a time and returns
/// the base url plus a handle yielding the request lines it saw.
fn serve(responses: Vec<(u16, String)>) -> (String, JoinHandle<Vec<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let handle = std::thread::spawn(move || {
        let mut request_lines = Vec::new();
        for (status, body) in responses {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream);

            let mut request_line = String::new();
            reader.read_line(&mut request_line).unwrap();
            request_lines.push(request_line.trim_end().to_string());

            // Drain headers, honouring Content-Length so the socket is
            // empty before we answer.
            let mut content_length = 0usize;
            loop {
                let mut header = String::new();
                reader.read_line(&mut header).unwrap();
                let header = header.trim_end();
                if header.is_empty() {
                    break;
                }
                let lowered = header.to_ascii_lowercase();
                if let Some(length) = lowered.strip_prefix("content-length:") {
                    content_length = length.trim().parse().unwrap();
                }
            }
            if content_length > 0 {
                let mut body_buf = vec![0u8; content_length];
                reader.read_exact(&mut body_buf).unwrap();
            }

            let reason = match status {
                200 => "OK",
                417 => "Expectation Failed",
                500 => "Internal Server Error",
                _ => "Unknown",
            };
            let response = format!(
                "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let mut stream = reader.into_inner();
            stream.write_all(response.as_bytes()).unwrap();
        }
        request_lines
    });

    (base_url, handle)
}

fn fieldline(home: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("fieldline");
    cmd.env("FIELDLINE_HOME", home.path());
    cmd
}

fn init_home(base_url: &str) -> TempDir {
    let home = TempDir::new().unwrap();
    fieldline(&home)
        .args(["init", "--url", base_url])
        .assert()
        .success();
    home
}

fn queue_task(home: &TempDir, subject: &str) {
    fieldline(home)
        .args([
            "new",
            "task",
            "-s",
            &format!("subject={subject}"),
            "--network",
            "offline",
        ])
        .assert()
        .success();
}

#[test]
fn online_create_posts_and_prints_the_name() {
    let (base_url, server) = serve(vec![(
        200,
        r#"{"data": {"name": "TASK-0001", "subject": "Follow up"}}"#.to_string(),
    )]);
    let home = init_home(&base_url);

    fieldline(&home)
        .args([
            "new",
            "task",
            "-s",
            "subject=Follow up",
            "--network",
            "online",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("created TASK-0001"));

    let requests = server.join().unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].starts_with("POST /api/resource/Task"));

    // Nothing queued for a record that went straight through.
    fieldline(&home)
        .args(["queue", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("queue is empty"));
}

#[test]
fn rejected_create_reports_the_backend_message() {
    let (base_url, server) = serve(vec![(
        417,
        r#"{"message": "Invalid status"}"#.to_string(),
    )]);
    let home = init_home(&base_url);

    fieldline(&home)
        .args([
            "new",
            "task",
            "-s",
            "subject=Follow up",
            "-s",
            "status=Bogus",
            "--network",
            "online",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("417"))
        .stderr(predicate::str::contains("Invalid status"));

    server.join().unwrap();

    // A rejected online create does not fall back to the queue.
    fieldline(&home)
        .args(["queue", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("queue is empty"));
}

#[test]
fn list_prints_records_and_sends_paging_defaults() {
    let body = r#"{"data": [
        {"name": "TASK-0001", "subject": "Follow up", "status": "Open"},
        {"name": "TASK-0002", "subject": "Call back", "status": "Working"}
    ]}"#;
    let (base_url, server) = serve(vec![(200, body.to_string())]);
    let home = init_home(&base_url);

    fieldline(&home)
        .args(["list", "task"])
        .assert()
        .success()
        .stdout(predicate::str::contains("TASK-0001"))
        .stdout(predicate::str::contains("TASK-0002"))
        .stdout(predicate::str::contains("subject=Follow up"));

    let requests = server.join().unwrap();
    assert!(requests[0].starts_with("GET /api/resource/Task?"));
    assert!(requests[0].contains("limit_page_length=20"));
    assert!(requests[0].contains("order_by=creation"));
}

#[test]
fn get_fetches_a_created_record_by_name() {
    let (base_url, server) = serve(vec![
        (
            200,
            r#"{"data": {"name": "TASK-0001", "subject": "Follow up", "status": "Open"}}"#
                .to_string(),
        ),
        (
            200,
            r#"{"data": {"name": "TASK-0001", "subject": "Follow up", "status": "Open"}}"#
                .to_string(),
        ),
    ]);
    let home = init_home(&base_url);

    fieldline(&home)
        .args([
            "new",
            "task",
            "-s",
            "subject=Follow up",
            "--network",
            "online",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("created TASK-0001"));

    fieldline(&home)
        .args(["get", "task", "TASK-0001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("name: TASK-0001"))
        .stdout(predicate::str::contains("subject: Follow up"))
        .stdout(predicate::str::contains("status: Open"));

    let requests = server.join().unwrap();
    assert!(requests[0].starts_with("POST /api/resource/Task"));
    assert!(requests[1].starts_with("GET /api/resource/Task/TASK-0001"));
}

#[test]
fn list_is_read_only_and_repeatable() {
    let body = r#"{"data": [{"name": "CUST-0001", "customer_name": "Acme"}]}"#;
    let (base_url, server) = serve(vec![(200, body.to_string()), (200, body.to_string())]);
    let home = init_home(&base_url);

    let first = fieldline(&home)
        .args(["list", "customer"])
        .output()
        .unwrap();
    let second = fieldline(&home)
        .args(["list", "customer"])
        .output()
        .unwrap();
    server.join().unwrap();

    assert!(first.status.success());
    assert!(second.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn flush_drains_the_queue_in_order() {
    let (base_url, server) = serve(vec![
        (200, r#"{"data": {"name": "TASK-0001"}}"#.to_string()),
        (200, r#"{"data": {"name": "TASK-0002"}}"#.to_string()),
    ]);
    let home = init_home(&base_url);
    queue_task(&home, "first");
    queue_task(&home, "second");

    fieldline(&home)
        .args(["queue", "flush"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sent 2 record(s), 0 remaining"));

    let requests = server.join().unwrap();
    assert_eq!(requests.len(), 2);
    assert!(requests
        .iter()
        .all(|line| line.starts_with("POST /api/resource/Task")));

    fieldline(&home)
        .args(["queue", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("queue is empty"));
}

#[test]
fn flush_stalls_on_the_first_failure() {
    let (base_url, server) = serve(vec![(
        500,
        r#"{"message": "server error"}"#.to_string(),
    )]);
    let home = init_home(&base_url);
    queue_task(&home, "first");
    queue_task(&home, "second");

    fieldline(&home)
        .args(["queue", "flush"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("sent 0 record(s), 2 remaining"))
        .stderr(predicate::str::contains("500"));

    server.join().unwrap();

    // Both records survive for the next attempt, oldest still first.
    fieldline(&home)
        .args(["queue", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("subject=first"))
        .stdout(predicate::str::contains("subject=second"));
}

#[test]
fn ping_reports_online_when_the_backend_answers() {
    let (base_url, server) = serve(vec![(200, r#"{"message": "pong"}"#.to_string())]);
    let home = init_home(&base_url);

    fieldline(&home)
        .arg("ping")
        .assert()
        .success()
        .stdout(predicate::str::contains("online"));

    let requests = server.join().unwrap();
    assert!(requests[0].starts_with("GET /api/method/ping"));
}

#[test]
fn ping_reports_offline_when_nothing_listens() {
    let home = init_home("http://127.0.0.1:1");

    fieldline(&home)
        .arg("ping")
        .assert()
        .success()
        .stdout(predicate::str::contains("offline"));
}
