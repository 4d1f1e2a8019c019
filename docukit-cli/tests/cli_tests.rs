use assert_cmd::Command;
use docukit::sample::{sample_delivery_schedule, sample_purchase_order};
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn docukit() -> Command {
    Command::cargo_bin("docukit").unwrap()
}

#[test]
fn sample_writes_a_pdf() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("sample.pdf");

    docukit()
        .arg("sample")
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    let bytes = fs::read(&output).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn sample_html_format_writes_markup() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("sample.html");

    docukit()
        .arg("sample")
        .arg("--output")
        .arg(&output)
        .arg("--format")
        .arg("html")
        .assert()
        .success();

    let html = fs::read_to_string(&output).unwrap();
    assert!(html.contains("<table"));
    assert!(html.contains("Delivery Schedule"));
}

#[test]
fn schedule_renders_a_json_document() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("schedule.json");
    let output = dir.path().join("schedule.pdf");

    let schedule = sample_delivery_schedule();
    fs::write(&input, serde_json::to_string(&schedule).unwrap()).unwrap();

    docukit()
        .arg("schedule")
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let bytes = fs::read(&output).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn invoice_renders_a_json_document() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("order.json");
    let output = dir.path().join("order.pdf");

    let order = sample_purchase_order();
    fs::write(&input, serde_json::to_string(&order).unwrap()).unwrap();

    docukit()
        .arg("invoice")
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let bytes = fs::read(&output).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn validate_passes_for_balanced_schedule() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("schedule.json");

    // The sample short-schedules article 1 (300 of 400); adding the last
    // 100-unit delivery balances every group.
    let mut schedule = sample_delivery_schedule();
    let mut final_delivery = schedule.items[1].clone();
    final_delivery.delivery_date = "20/3/25".to_string();
    final_delivery.quantity_to_delivery = "100".to_string();
    schedule.items.insert(2, final_delivery);
    fs::write(&input, serde_json::to_string(&schedule).unwrap()).unwrap();

    docukit()
        .arg("validate")
        .arg("--input")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("All delivery quantities reconcile"));
}

#[test]
fn validate_fails_for_unbalanced_schedule() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("schedule.json");

    let mut schedule = sample_delivery_schedule();
    schedule.items[0].quantity_to_delivery = "50".to_string();
    fs::write(&input, serde_json::to_string(&schedule).unwrap()).unwrap();

    docukit()
        .arg("validate")
        .arg("--input")
        .arg(&input)
        .assert()
        .failure()
        .stdout(predicate::str::contains("MISMATCH"))
        .stderr(predicate::str::contains("do not reconcile"));
}

#[test]
fn missing_input_file_is_an_error() {
    docukit()
        .arg("validate")
        .arg("--input")
        .arg("no-such-file.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}
