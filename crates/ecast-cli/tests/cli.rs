use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::tempdir;

fn ecast() -> Command {
    Command::cargo_bin("ecast").unwrap()
}

#[test]
fn predict_json_covers_default_horizon() {
    let output = ecast()
        .args(["predict", "tunisia", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let records: Value = serde_json::from_slice(&output.stdout).unwrap();
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 10);
    assert_eq!(records[0]["year"], 2026);
    assert_eq!(records[9]["year"], 2035);
    let renewables = records[0]["renewableShare"].as_f64().unwrap();
    assert!(renewables > 15.0 && renewables <= 65.0);
}

#[test]
fn predict_table_respects_years_flag() {
    ecast()
        .args(["predict", "morocco", "--years", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("renewable_share"))
        .stdout(predicate::str::is_match("(?m)^2028 ").unwrap())
        .stdout(predicate::str::is_match("(?m)^2029 ").unwrap().not());
}

#[test]
fn predict_writes_csv_file() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("forecast").join("libya.csv");
    ecast()
        .args([
            "predict",
            "libya",
            "--format",
            "csv",
            "-o",
            out.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("year,population"));

    let written = fs::read_to_string(&out).unwrap();
    assert_eq!(written.lines().count(), 11);
}

#[test]
fn predict_unknown_country_prints_nothing() {
    ecast()
        .args(["predict", "atlantis"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn show_labels_predicted_years() {
    ecast()
        .args(["show", "algeria", "--year", "2030"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Algeria 2030 (predicted)"))
        .stdout(predicate::str::contains("oilReserves"));

    ecast()
        .args(["show", "algeria", "--year", "2010"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(historical)"));
}

#[test]
fn show_out_of_range_year_fails() {
    ecast()
        .args(["show", "tunisia", "--year", "1990"])
        .assert()
        .failure();
}

#[test]
fn timeline_lists_history_and_forecast() {
    ecast()
        .args(["timeline", "tunisia", "--field", "renewableShare"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2000"))
        .stdout(predicate::str::contains("2035"))
        .stdout(predicate::str::contains("predicted"));
}

#[test]
fn compare_json_is_normalized() {
    let output = ecast()
        .args([
            "compare",
            "--field",
            "co2_emissions",
            "--year",
            "2030",
            "--countries",
            "tunisia,libya",
            "--format",
            "json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let entries: Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    for entry in entries {
        let normalized = entry["normalized"].as_f64().unwrap();
        assert!((0.0..=1.0).contains(&normalized));
        assert_eq!(entry["provenance"], "predicted");
    }
}

#[test]
fn datasets_list_shows_builtin_countries() {
    ecast()
        .args(["datasets", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tunisia"))
        .stdout(predicate::str::contains("2000-2025"));
}

#[test]
fn datasets_validate_reports_errors() {
    let dir = tempdir().unwrap();
    let good = dir.path().join("good.csv");
    fs::write(&good, "year,gdp\n2024,1.0\n2025,1.1\n").unwrap();
    ecast()
        .args(["datasets", "validate", good.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No issues"));

    let bad = dir.path().join("bad.csv");
    fs::write(&bad, "year,gdp\n2024,1.0\n2026,1.1\n").unwrap();
    ecast()
        .args(["datasets", "validate", bad.to_str().unwrap()])
        .assert()
        .failure()
        .stdout(predicate::str::contains("gap"));
}

#[test]
fn data_dir_replaces_builtin_datasets() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("egypt.csv"),
        "year,population,gdp\n2023,110.0,390.0\n2024,111.5,400.0\n2025,113.0,410.0\n",
    )
    .unwrap();

    ecast()
        .args(["--data-dir", dir.path().to_str().unwrap(), "datasets", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("egypt"))
        .stdout(predicate::str::contains("tunisia").not());

    ecast()
        .args([
            "predict",
            "egypt",
            "--years",
            "2",
            "--data-dir",
            dir.path().to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("2027"));
}

#[test]
fn config_file_sets_horizon() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, "[forecast]\nhorizon = 2\n").unwrap();

    let output = ecast()
        .args([
            "--config",
            config.to_str().unwrap(),
            "predict",
            "tunisia",
            "--format",
            "json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let records: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(records.as_array().unwrap().len(), 2);
}

#[test]
fn fields_lists_every_indicator() {
    ecast()
        .arg("fields")
        .assert()
        .success()
        .stdout(predicate::str::contains("renewableShare"))
        .stdout(predicate::str::contains("logistic-saturation"))
        .stdout(predicate::str::contains("investment"));
}

#[test]
fn completions_generate_for_bash() {
    ecast()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ecast"));
}
