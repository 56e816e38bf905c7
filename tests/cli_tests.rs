use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{SAMPLE, nks, plain_config, temp_path, write_export};

#[test]
fn test_preview_shows_newest_rows() {
    let file = write_export("cli_preview", SAMPLE);
    let cfg = plain_config("cli_preview", "Europe/Zurich");

    nks()
        .args(["--config", &cfg, "preview", &file, "--rows", "2"])
        .assert()
        .success()
        .stdout(contains("Preview newest 2 log entries"))
        .stdout(contains("Total number of records: 4"))
        .stdout(contains("2025-01-31T18:10:00.000Z"))
        .stdout(contains("Keypad"))
        .stdout(contains("2025-01-30T12:00:00.000Z").not());
}

#[test]
fn test_report_single_day() {
    let file = write_export("cli_report_day", SAMPLE);
    let cfg = plain_config("cli_report_day", "Europe/Zurich");

    nks()
        .args([
            "--config", &cfg, "report", &file, "--from", "2025-01-31", "--to", "2025-01-31",
        ])
        .assert()
        .success()
        .stdout(contains("Records from 2025-01-31 to 2025-01-31"))
        .stdout(contains("Current number of records: 2"))
        .stdout(contains("Members + memberless triggers: 2"))
        .stdout(contains("Dates: 1"))
        .stdout(contains("Marco").not());
}

#[test]
fn test_report_names_chart_sorted_by_count() {
    let file = write_export("cli_report_names", SAMPLE);
    let cfg = plain_config("cli_report_names", "Europe/Zurich");

    let out = nks()
        .args(["--config", &cfg, "report", &file, "--names-only"])
        .output()
        .expect("run nukistats");
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    let anna = stdout.find("Anna").expect("Anna in chart");
    let keypad = stdout.find("Keypad").expect("Keypad in chart");
    assert!(anna < keypad);
    assert!(stdout.contains("Accesses: 4"));
    assert!(!stdout.contains("Dates:"));
}

#[test]
fn test_report_dates_follow_timezone() {
    let file = write_export("cli_report_tz", SAMPLE);
    let cfg = plain_config("cli_report_tz", "Europe/Zurich");

    nks()
        .args(["--config", &cfg, "report", &file, "--dates-only"])
        .assert()
        .success()
        .stdout(contains("Dates: 2"))
        .stdout(contains("█ 3"));

    nks()
        .args(["--config", &cfg, "--tz", "UTC", "report", &file, "--dates-only"])
        .assert()
        .success()
        .stdout(contains("(UTC)"))
        .stdout(contains("█ 3").not());
}

#[test]
fn test_report_with_column_filter() {
    let file = write_export("cli_report_col", SAMPLE);
    let cfg = plain_config("cli_report_col", "Europe/Zurich");

    nks()
        .args([
            "--config", &cfg, "report", &file, "--column", "state", "--value", "locked",
        ])
        .assert()
        .success()
        .stdout(contains("('state' == 'locked'): 1"))
        .stdout(contains("Marco"));
}

#[test]
fn test_report_inverted_range_is_empty() {
    let file = write_export("cli_report_inv", SAMPLE);
    let cfg = plain_config("cli_report_inv", "Europe/Zurich");

    nks()
        .args([
            "--config", &cfg, "report", &file, "--from", "2025-02-01", "--to", "2025-01-01",
        ])
        .assert()
        .success()
        .stdout(contains("Current number of records: 0"))
        .stdout(contains("No records in the selected range."));
}

#[test]
fn test_filter_lists_values_and_rows() {
    let file = write_export("cli_filter", SAMPLE);
    let cfg = plain_config("cli_filter", "Europe/Zurich");

    nks()
        .args(["--config", &cfg, "filter", &file, "--column", "trigger"])
        .assert()
        .success()
        .stdout(contains("Values of 'trigger' (3 distinct)"))
        .stdout(contains("- Manual"));

    nks()
        .args([
            "--config", &cfg, "filter", &file, "--column", "name", "--value", "Anna",
        ])
        .assert()
        .success()
        .stdout(contains("Current number of records: 2"));
}

#[test]
fn test_filter_unknown_column_fails() {
    let file = write_export("cli_filter_bad", SAMPLE);
    let cfg = plain_config("cli_filter_bad", "Europe/Zurich");

    nks()
        .args([
            "--config", &cfg, "filter", &file, "--column", "bogus_col", "--value", "x",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid filter column"));
}

#[test]
fn test_bad_input_fails() {
    let cfg = plain_config("cli_bad_input", "Europe/Zurich");

    let missing = write_export("cli_missing_col", "date\tname\taction\n2025-01-01T10:00:00Z\tA\tUnlock\n");
    nks()
        .args(["--config", &cfg, "report", &missing])
        .assert()
        .failure()
        .stderr(contains("missing required column"));

    let file = write_export("cli_bad_date", SAMPLE);
    nks()
        .args(["--config", &cfg, "report", &file, "--from", "31.01.2025"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));

    nks()
        .args(["--config", &cfg, "--tz", "Mars/Olympus", "report", &file])
        .assert()
        .failure()
        .stderr(contains("Unknown timezone"));

    nks()
        .args(["--config", &cfg, "preview", "/definitely/not/here.csv"])
        .assert()
        .failure()
        .stderr(contains("cannot read"));
}

#[test]
fn test_export_rows_csv() {
    let file = write_export("cli_export_rows", SAMPLE);
    let cfg = plain_config("cli_export_rows", "Europe/Zurich");
    let out = temp_path("cli_export_rows_out", "csv");

    nks()
        .args([
            "--config", &cfg, "export", &file, "--file", &out, "--from", "2025-01-31",
        ])
        .assert()
        .success()
        .stdout(contains("export completed (2 records)"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("date,name,action,trigger,state,autoUnlock")
    );
    assert_eq!(
        lines.next(),
        Some("2025-01-31T18:10:00.000Z,Anna,Unlock,App,unlocked,false")
    );
    assert_eq!(lines.count(), 1);
}

#[test]
fn test_export_names_json() {
    let file = write_export("cli_export_names", SAMPLE);
    let cfg = plain_config("cli_export_names", "Europe/Zurich");
    let out = temp_path("cli_export_names_out", "json");

    nks()
        .args([
            "--config", &cfg, "export", &file, "--file", &out, "--format", "json", "--what",
            "names",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let v: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(v[0]["key"], "Anna");
    assert_eq!(v[0]["count"], 2);
    assert_eq!(v.as_array().map(|a| a.len()), Some(3));
}

#[test]
fn test_export_dates_csv() {
    let file = write_export("cli_export_dates", SAMPLE);
    let cfg = plain_config("cli_export_dates", "Europe/Zurich");
    let out = temp_path("cli_export_dates_out", "csv");

    nks()
        .args(["--config", &cfg, "export", &file, "--file", &out, "--what", "dates"])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert_eq!(content, "key,count\n2025-01-31,3\n2025-01-30,1\n");
}

#[test]
fn test_export_refuses_to_overwrite() {
    let file = write_export("cli_export_exists", SAMPLE);
    let cfg = plain_config("cli_export_exists", "Europe/Zurich");
    let out = temp_path("cli_export_exists_out", "csv");
    fs::write(&out, "keep me").unwrap();

    nks()
        .args(["--config", &cfg, "export", &file, "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("not overwritten"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    nks()
        .args(["--config", &cfg, "export", &file, "--file", &out, "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().starts_with("date,"));
}

#[test]
fn test_config_init_and_print() {
    let cfg = temp_path("cli_config_init", "conf");

    nks()
        .args(["--config", &cfg, "config", "--init"])
        .assert()
        .success()
        .stdout(contains("Config file:"));

    let content = fs::read_to_string(&cfg).expect("config written");
    assert!(content.contains("timezone: Europe/Zurich"));
    assert!(content.contains("encoding: utf-16"));

    nks()
        .args(["--config", &cfg, "config", "--init"])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    nks()
        .args(["--config", &cfg, "--tz", "UTC", "config", "--print"])
        .assert()
        .success()
        .stdout(contains("timezone: UTC"))
        .stdout(contains("preview_rows: 10"));
}

#[test]
fn test_missing_config_uses_defaults() {
    let cfg = temp_path("cli_config_missing", "conf");

    nks()
        .args(["--config", &cfg, "config"])
        .assert()
        .success()
        .stdout(contains("timezone: Europe/Zurich"))
        .stdout(contains("bar_width: 40"));
}
