//! Integration tests for the emt CLI
//!
//! These tests exercise the CLI commands end-to-end using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get an emt command with a clean environment
fn emt() -> Command {
    let mut cmd = Command::cargo_bin("emt").unwrap();
    cmd.env_remove("EMT_FORMAT");
    cmd.env_remove("EMT_EQUIPMENT_FILE");
    cmd.env_remove("EMT_MAINTENANCE_FILE");
    cmd
}

/// Helper to write the standard two-file fixture into a temp directory
fn setup_fixture() -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("equipment.csv"),
        "Equipment Code,Type\n\"43,397,068\",KONE KCE\n9001,KONE MX\n",
    )
    .unwrap();
    fs::write(
        tmp.path().join("maintenance.csv"),
        concat!(
            "Equipment Code,Module,Components,Preparation/Finalization (h:mm:ss),Activity (h:mm:ss),Total time,No of man power\n",
            "43397068,Door,Sensor,00:10:00,01:20:00,01:30:00,2\n",
            ",,Belt,00:05:00,00:25:00,00:30:00,1\n",
            "9001,Motor,Brake,00:02:00,00:08:00,00:10:00,3\n",
        ),
    )
    .unwrap();
    tmp
}

fn dataset_args(tmp: &TempDir) -> Vec<String> {
    vec![
        "-m".into(),
        tmp.path().join("maintenance.csv").display().to_string(),
        "-e".into(),
        tmp.path().join("equipment.csv").display().to_string(),
    ]
}

// ============================================================================
// CLI Basic Tests
// ============================================================================

#[test]
fn test_help_displays() {
    emt()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("maintenance records"));
}

#[test]
fn test_version_displays() {
    emt()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("emt"));
}

#[test]
fn test_unknown_command_fails() {
    emt()
        .arg("unknown-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_missing_maintenance_file_fails() {
    let tmp = TempDir::new().unwrap();
    emt()
        .current_dir(tmp.path())
        .arg("codes")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No maintenance file"));
}

// ============================================================================
// Codes / Modules / Components
// ============================================================================

#[test]
fn test_codes_lists_cleaned_codes_with_types() {
    let tmp = setup_fixture();
    emt()
        .args(["codes"])
        .args(dataset_args(&tmp))
        .assert()
        .success()
        .stdout(predicate::str::contains("43397068"))
        .stdout(predicate::str::contains("KONE KCE"))
        .stdout(predicate::str::contains("9001"))
        .stdout(predicate::str::contains("2 equipment code(s)"));
}

#[test]
fn test_codes_count() {
    let tmp = setup_fixture();
    emt()
        .args(["codes", "--count"])
        .args(dataset_args(&tmp))
        .assert()
        .success()
        .stdout(predicate::str::diff("2\n"));
}

#[test]
fn test_modules_are_scoped_to_code() {
    let tmp = setup_fixture();
    emt()
        .args(["modules", "43397068", "-q"])
        .args(dataset_args(&tmp))
        .assert()
        .success()
        .stdout(predicate::str::contains("Door"))
        .stdout(predicate::str::contains("Motor").not());
}

#[test]
fn test_components_sorted_for_scope() {
    let tmp = setup_fixture();
    emt()
        .args(["components", "43397068", "Door", "-q"])
        .args(dataset_args(&tmp))
        .assert()
        .success()
        .stdout(predicate::str::diff("Belt\nSensor\n"));
}

// ============================================================================
// Filter / Stats
// ============================================================================

#[test]
fn test_filter_csv_includes_forward_filled_row() {
    let tmp = setup_fixture();
    let output = emt()
        .args(["filter", "43397068", "Door", "-f", "csv"])
        .args(dataset_args(&tmp))
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    // Header plus both Door rows; the Belt row got its code and module
    // forward-filled from the merged-cell layout.
    assert_eq!(lines.len(), 3);
    assert!(lines[1].contains("Sensor"));
    assert!(lines[2].contains("Belt"));
    assert!(lines[2].starts_with("43397068,Door"));
}

#[test]
fn test_filter_by_component_subset() {
    let tmp = setup_fixture();
    emt()
        .args(["filter", "43397068", "Door", "-c", "Belt", "-f", "csv"])
        .args(dataset_args(&tmp))
        .assert()
        .success()
        .stdout(predicate::str::contains("Belt"))
        .stdout(predicate::str::contains("Sensor").not());
}

#[test]
fn test_filter_writes_output_file() {
    let tmp = setup_fixture();
    let out = tmp.path().join("subset.csv");
    emt()
        .args(["filter", "43397068", "Door", "-o"])
        .arg(&out)
        .args(dataset_args(&tmp))
        .assert()
        .success();
    let content = fs::read_to_string(&out).unwrap();
    assert!(content.starts_with("Equipment Code,"));
    assert_eq!(content.lines().count(), 3);
}

#[test]
fn test_filter_no_match_is_not_an_error() {
    let tmp = setup_fixture();
    emt()
        .args(["filter", "43397068", "Lift"])
        .args(dataset_args(&tmp))
        .assert()
        .success()
        .stderr(predicate::str::contains("No records match"));
}

#[test]
fn test_stats_json_values() {
    let tmp = setup_fixture();
    let output = emt()
        .args(["stats", "43397068", "Door", "-f", "json"])
        .args(dataset_args(&tmp))
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stats emits valid JSON");
    assert_eq!(value["record_count"], 2);
    assert_eq!(value["total_seconds"], 7200);
    assert_eq!(value["total_time"], "02:00:00");
    assert_eq!(value["average_manpower"], 1.5);
}

#[test]
fn test_stats_per_component_breakdown() {
    let tmp = setup_fixture();
    emt()
        .args(["stats", "43397068", "Door", "--per-component"])
        .args(dataset_args(&tmp))
        .assert()
        .success()
        .stdout(predicate::str::contains("Belt"))
        .stdout(predicate::str::contains("Sensor"))
        .stdout(predicate::str::contains("01:30:00"));
}

// ============================================================================
// Merge / Summary / Errors
// ============================================================================

#[test]
fn test_merge_reports_record_count() {
    let tmp = setup_fixture();
    emt()
        .args(["merge"])
        .args(dataset_args(&tmp))
        .assert()
        .success()
        .stdout(predicate::str::contains("Merged 3 records"));
}

#[test]
fn test_merge_writes_merged_csv() {
    let tmp = setup_fixture();
    let out = tmp.path().join("merged.csv");
    emt()
        .args(["merge", "-q", "-o"])
        .arg(&out)
        .args(dataset_args(&tmp))
        .assert()
        .success();
    let content = fs::read_to_string(&out).unwrap();
    assert_eq!(content.lines().count(), 4);
    assert!(content.contains("KONE KCE"));
}

#[test]
fn test_summary_report() {
    let tmp = setup_fixture();
    emt()
        .args(["summary"])
        .args(dataset_args(&tmp))
        .assert()
        .success()
        .stdout(predicate::str::contains("Equipment codes: 2"))
        .stdout(predicate::str::contains("Total records:   3"))
        .stdout(predicate::str::contains("KONE MX"));
}

#[test]
fn test_missing_join_key_is_reported() {
    let tmp = setup_fixture();
    fs::write(
        tmp.path().join("equipment.csv"),
        "Serial,Type\n1,KONE KCE\n",
    )
    .unwrap();
    emt()
        .args(["codes"])
        .args(dataset_args(&tmp))
        .assert()
        .failure()
        .stderr(predicate::str::contains("join key"));
}

#[test]
fn test_empty_sheet_is_reported() {
    let tmp = setup_fixture();
    fs::write(tmp.path().join("maintenance.csv"), "Equipment Code,Module\n").unwrap();
    emt()
        .args(["codes"])
        .args(dataset_args(&tmp))
        .assert()
        .failure()
        .stderr(predicate::str::contains("no data rows"));
}

#[test]
fn test_missing_required_column_is_reported() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("maintenance.csv"),
        "Equipment Code,Components\n1,Sensor\n",
    )
    .unwrap();
    emt()
        .args(["modules", "1"])
        .arg("-m")
        .arg(tmp.path().join("maintenance.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Module"));
}
