//! Integration tests for the `careops-slots` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to exercise the slots, check
//! and days subcommands through the actual binary, including stdin input,
//! strict/lenient slot handling and error reporting.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: path to the slots.json fixture.
fn slots_json_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/slots.json")
}

fn slots_json() -> String {
    std::fs::read_to_string(slots_json_path()).expect("slots.json fixture must exist")
}

fn cli() -> Command {
    let mut cmd = Command::cargo_bin("careops-slots").unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("CAREOPS_API_URL")
        .env_remove("CAREOPS_HTTP_TIMEOUT_SECS");
    cmd
}

// 2026-03-16 Monday, 2026-03-18 Wednesday, 2026-03-20 Friday, 2026-03-15 Sunday.

// ─────────────────────────────────────────────────────────────────────────────
// slots
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn slots_from_file() {
    cli()
        .args(["slots", "-i", slots_json_path(), "--date", "2026-03-16"])
        .assert()
        .success()
        .stdout("09:00\n09:30\n10:00\n10:30\n11:00\n11:30\n13:00\n13:30\n");
}

#[test]
fn slots_from_stdin_as_json() {
    let output = cli()
        .args(["slots", "--date", "2026-03-16", "--json"])
        .write_stdin(slots_json())
        .output()
        .unwrap();
    assert!(output.status.success());

    let times: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(times.len(), 8);
    assert_eq!(times.first().map(String::as_str), Some("09:00"));
    assert_eq!(times.last().map(String::as_str), Some("13:30"));
}

#[test]
fn slots_on_day_without_availability() {
    cli()
        .args(["slots", "-i", slots_json_path(), "--date", "2026-03-15"])
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("No times available on 2026-03-15"));
}

#[test]
fn slots_outside_grid_are_hidden_and_reported() {
    // Wednesday 06:00-09:00: only 08:00 and 08:30 are on the default grid.
    cli()
        .args(["slots", "-i", slots_json_path(), "--date", "2026-03-18"])
        .assert()
        .success()
        .stdout("08:00\n08:30\n")
        .stderr(predicate::str::contains("does not offer"));
}

#[test]
fn cover_widens_the_grid() {
    cli()
        .args(["slots", "-i", slots_json_path(), "--date", "2026-03-18", "--cover"])
        .assert()
        .success()
        .stdout("06:00\n06:30\n07:00\n07:30\n08:00\n08:30\n");
}

#[test]
fn inverted_slot_is_skipped_by_default() {
    // Friday only has the inverted 17:00-09:00 record.
    cli()
        .args(["slots", "-i", slots_json_path(), "--date", "2026-03-20", "--json"])
        .assert()
        .success()
        .stdout("[]\n");
}

#[test]
fn strict_mode_rejects_inverted_slot() {
    cli()
        .args(["slots", "-i", slots_json_path(), "--date", "2026-03-20", "--strict"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Empty or inverted availability slot"));
}

#[test]
fn malformed_slot_time_fails_by_default() {
    cli()
        .args(["slots", "--date", "2026-03-16"])
        .write_stdin(r#"[{"day_of_week": 1, "start_time": "9am", "end_time": "17:00"}]"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid time format"));
}

#[test]
fn invalid_json_fails() {
    cli()
        .args(["slots", "--date", "2026-03-16"])
        .write_stdin("{ not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse slots JSON"));
}

#[test]
fn invalid_date_fails() {
    cli()
        .args(["slots", "-i", slots_json_path(), "--date", "16/03/2026"])
        .assert()
        .failure();
}

#[test]
fn missing_file_fails() {
    cli()
        .args(["slots", "-i", "/nonexistent/slots.json", "--date", "2026-03-16"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

// ─────────────────────────────────────────────────────────────────────────────
// check
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn check_half_open_bounds() {
    cli()
        .args(["check", "-i", slots_json_path(), "--date", "2026-03-16", "--time", "11:30"])
        .assert()
        .success()
        .stdout("available\n");

    cli()
        .args(["check", "-i", slots_json_path(), "--date", "2026-03-16", "--time", "12:00"])
        .assert()
        .success()
        .stdout("unavailable\n");
}

#[test]
fn check_off_grid_time() {
    cli()
        .args(["check", "-i", slots_json_path(), "--date", "2026-03-18", "--time", "06:15"])
        .assert()
        .success()
        .stdout("available\n");
}

#[test]
fn check_malformed_time_fails() {
    cli()
        .args(["check", "-i", slots_json_path(), "--date", "2026-03-16", "--time", "noon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid time format"));
}

// ─────────────────────────────────────────────────────────────────────────────
// days
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn days_lists_weekdays_with_valid_slots() {
    cli()
        .args(["days", "-i", slots_json_path()])
        .assert()
        .success()
        .stdout("Mon\nWed\n");
}

#[test]
fn days_with_no_slots() {
    cli()
        .arg("days")
        .write_stdin("[]")
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("No availability configured"));
}

// ─────────────────────────────────────────────────────────────────────────────
// fetch
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn fetch_against_unreachable_api_fails() {
    cli()
        .args([
            "fetch",
            "--workspace",
            "acme-clinic",
            "--service",
            "0b7e6a0e-2a8b-4c55-a1c9-5a3f1f4b8e22",
            "--api-url",
            "http://127.0.0.1:9",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load availability"));
}

#[test]
fn fetch_reads_base_url_from_env() {
    cli()
        .env("CAREOPS_API_URL", "not a url")
        .args([
            "fetch",
            "--workspace",
            "acme-clinic",
            "--service",
            "0b7e6a0e-2a8b-4c55-a1c9-5a3f1f4b8e22",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to create booking API client"));
}

#[test]
fn fetch_api_url_flag_overrides_env() {
    cli()
        .env("CAREOPS_API_URL", "not a url")
        .args([
            "fetch",
            "--workspace",
            "acme-clinic",
            "--service",
            "0b7e6a0e-2a8b-4c55-a1c9-5a3f1f4b8e22",
            "--api-url",
            "http://127.0.0.1:9",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load availability"));
}

#[test]
fn fetch_honours_timeout_from_env() {
    // Connections queue in the backlog but are never answered.
    let listener = std::net::TcpListener::bind(("127.0.0.1", 0)).unwrap();
    let api_url = format!("http://{}", listener.local_addr().unwrap());

    let started = std::time::Instant::now();
    cli()
        .env("CAREOPS_HTTP_TIMEOUT_SECS", "1")
        .args([
            "fetch",
            "--workspace",
            "acme-clinic",
            "--service",
            "0b7e6a0e-2a8b-4c55-a1c9-5a3f1f4b8e22",
            "--api-url",
            &api_url,
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load availability"));
    assert!(started.elapsed() < std::time::Duration::from_secs(8));
    drop(listener);
}

#[test]
fn fetch_requires_a_valid_service_id() {
    cli()
        .args(["fetch", "--workspace", "acme-clinic", "--service", "not-a-uuid"])
        .assert()
        .failure();
}
