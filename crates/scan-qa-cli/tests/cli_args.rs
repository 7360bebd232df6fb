//! CLI argument validation tests.
//!
//! Tests command-line argument parsing, validation, and error handling.

#![allow(clippy::unwrap_used)]
#![allow(deprecated)] // cargo_bin deprecation

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use scan_qa_test_support::SyntheticImageBuilder;

/// Writes a passing checkerboard fixture and returns its path.
fn write_fixture(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("capture.png");
    SyntheticImageBuilder::checkerboard(100, 100)
        .image
        .save_with_format(&path, image::ImageFormat::Png)
        .unwrap();
    path
}

// === Missing/Invalid Path Tests ===

#[test]
fn test_missing_path_shows_error() {
    let mut cmd = Command::cargo_bin("scan-qa").unwrap();
    // No path argument at all - error goes to stderr
    cmd.assert().failure().stderr(
        predicate::str::contains("No paths specified")
            .or(predicate::str::contains("required"))
            .or(predicate::str::contains("PATHS")),
    );
}

#[test]
fn test_nonexistent_path_warns_but_continues() {
    // The CLI warns about nonexistent paths but continues (graceful degradation)
    let mut cmd = Command::cargo_bin("scan-qa").unwrap();
    cmd.arg("/nonexistent/path/to/capture.jpg");

    cmd.assert()
        .code(0) // No images processed = nothing invalid
        .stderr(
            predicate::str::contains("does not exist").or(predicate::str::contains("not found")),
        );
}

#[test]
fn test_empty_directory() {
    let temp_dir = tempfile::tempdir().unwrap();

    let mut cmd = Command::cargo_bin("scan-qa").unwrap();
    cmd.arg(temp_dir.path());

    cmd.assert().code(predicate::eq(0));
}

// === Format Validation Tests ===

#[test]
fn test_invalid_format_rejected() {
    let temp_dir = tempfile::tempdir().unwrap();
    let fixture = write_fixture(temp_dir.path());

    let mut cmd = Command::cargo_bin("scan-qa").unwrap();
    cmd.arg("--format").arg("xml").arg(&fixture);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("json").or(predicate::str::contains("jsonl")));
}

#[test]
fn test_valid_formats_accepted() {
    let temp_dir = tempfile::tempdir().unwrap();
    let fixture = write_fixture(temp_dir.path());

    for format in ["json", "jsonl"] {
        let mut cmd = Command::cargo_bin("scan-qa").unwrap();
        cmd.arg("--format").arg(format).arg(&fixture);
        cmd.assert().code(predicate::in_iter([0, 1]));
    }
}

// === Threshold Validation Tests ===

#[test]
fn test_blur_threshold_zero_rejected() {
    let temp_dir = tempfile::tempdir().unwrap();
    let fixture = write_fixture(temp_dir.path());

    let mut cmd = Command::cargo_bin("scan-qa").unwrap();
    cmd.arg("--blur-threshold").arg("0").arg(&fixture);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("positive").or(predicate::str::contains("invalid")));
}

#[test]
fn test_blur_threshold_negative_rejected() {
    let mut cmd = Command::cargo_bin("scan-qa").unwrap();
    cmd.arg("--blur-threshold").arg("-5").arg("capture.png");

    cmd.assert().failure();
}

#[test]
fn test_blur_threshold_non_numeric_rejected() {
    let mut cmd = Command::cargo_bin("scan-qa").unwrap();
    cmd.arg("--blur-threshold").arg("abc").arg("capture.png");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("not a valid number").or(predicate::str::contains("invalid")));
}

#[test]
fn test_brightness_bound_above_channel_range_rejected() {
    let mut cmd = Command::cargo_bin("scan-qa").unwrap();
    cmd.arg("--min-brightness").arg("300").arg("capture.png");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("0.0..=255.0").or(predicate::str::contains("invalid")));
}

#[test]
fn test_min_contrast_negative_rejected() {
    let mut cmd = Command::cargo_bin("scan-qa").unwrap();
    cmd.arg("--min-contrast").arg("-1").arg("capture.png");

    cmd.assert().failure();
}

#[test]
fn test_inverted_brightness_window_rejected_at_runtime() {
    let temp_dir = tempfile::tempdir().unwrap();
    let fixture = write_fixture(temp_dir.path());

    // Both bounds parse individually but invert the window together
    let mut cmd = Command::cargo_bin("scan-qa").unwrap();
    cmd.arg("--min-brightness")
        .arg("200")
        .arg("--max-brightness")
        .arg("100")
        .arg(&fixture);

    cmd.assert()
        .code(2)
        .stderr(predicate::str::contains("min").and(predicate::str::contains("max")));
}

// === Preset Flag ===

#[test]
fn test_preset_flag_accepted() {
    let temp_dir = tempfile::tempdir().unwrap();
    let fixture = write_fixture(temp_dir.path());

    for preset in [
        "default",
        "card-scanning",
        "document-scanning",
        "photo-capture",
        "relaxed",
        "strict",
    ] {
        let mut cmd = Command::cargo_bin("scan-qa").unwrap();
        cmd.arg("--preset").arg(preset).arg(&fixture);
        cmd.assert().code(predicate::in_iter([0, 1]));
    }
}

#[test]
fn test_unknown_preset_rejected() {
    let mut cmd = Command::cargo_bin("scan-qa").unwrap();
    cmd.arg("--preset").arg("speed-scanning").arg("capture.png");

    cmd.assert().failure();
}

// === Verbosity and Quiet ===

#[test]
fn test_verbosity_levels() {
    let temp_dir = tempfile::tempdir().unwrap();
    let fixture = write_fixture(temp_dir.path());

    for flag in ["-v", "-vv", "-vvv"] {
        let mut cmd = Command::cargo_bin("scan-qa").unwrap();
        cmd.arg(flag).arg(&fixture);
        cmd.assert().code(predicate::in_iter([0, 1]));
    }
}

#[test]
fn test_quiet_suppresses_progress() {
    let temp_dir = tempfile::tempdir().unwrap();
    let fixture = write_fixture(temp_dir.path());

    let mut cmd = Command::cargo_bin("scan-qa").unwrap();
    cmd.arg("--quiet").arg(&fixture);

    cmd.assert().code(predicate::in_iter([0, 1]));
}

// === Multiple Paths and Recursion ===

#[test]
fn test_multiple_paths() {
    let temp_dir = tempfile::tempdir().unwrap();
    let fixture = write_fixture(temp_dir.path());

    let mut cmd = Command::cargo_bin("scan-qa").unwrap();
    cmd.arg(&fixture).arg(&fixture); // Same file twice

    cmd.assert().code(predicate::in_iter([0, 1]));
}

#[test]
fn test_recursive_flag() {
    let temp_dir = tempfile::tempdir().unwrap();
    let sub_dir = temp_dir.path().join("subdir");
    std::fs::create_dir(&sub_dir).unwrap();
    write_fixture(&sub_dir);

    // Without -r, should not find the image in the subdir
    let mut cmd = Command::cargo_bin("scan-qa").unwrap();
    cmd.arg(temp_dir.path());
    cmd.assert().code(0);

    // With -r, should find and validate it
    let mut cmd2 = Command::cargo_bin("scan-qa").unwrap();
    cmd2.arg("-r").arg(temp_dir.path());
    cmd2.assert().code(predicate::in_iter([0, 1]));
}

// === Help and Version ===

#[test]
fn test_help_flag() {
    let mut cmd = Command::cargo_bin("scan-qa").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("--blur-threshold"))
        .stdout(predicate::str::contains("--preset"))
        .stdout(predicate::str::contains("--format"));
}

#[test]
fn test_version_flag() {
    let mut cmd = Command::cargo_bin("scan-qa").unwrap();
    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("scan-qa"));
}

// === Subcommands ===

#[test]
fn test_check_subcommand() {
    let temp_dir = tempfile::tempdir().unwrap();
    let fixture = write_fixture(temp_dir.path());

    let mut cmd = Command::cargo_bin("scan-qa").unwrap();
    cmd.arg("check").arg(&fixture);

    cmd.assert().code(predicate::in_iter([0, 1]));
}

#[test]
fn test_check_subcommand_with_options() {
    let temp_dir = tempfile::tempdir().unwrap();
    let fixture = write_fixture(temp_dir.path());

    let mut cmd = Command::cargo_bin("scan-qa").unwrap();
    cmd.arg("check")
        .arg("--preset")
        .arg("card-scanning")
        .arg("--blur-threshold")
        .arg("90")
        .arg(&fixture);

    cmd.assert().code(predicate::in_iter([0, 1]));
}

#[test]
fn test_presets_subcommand_lists_all() {
    let mut cmd = Command::cargo_bin("scan-qa").unwrap();
    cmd.arg("presets");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("default"))
        .stdout(predicate::str::contains("card_scanning"))
        .stdout(predicate::str::contains("document_scanning"))
        .stdout(predicate::str::contains("photo_capture"))
        .stdout(predicate::str::contains("relaxed"))
        .stdout(predicate::str::contains("strict"));
}

#[test]
fn test_presets_subcommand_json() {
    let mut cmd = Command::cargo_bin("scan-qa").unwrap();
    cmd.arg("presets").arg("--json");

    let output = cmd.output().unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("presets --json emits valid JSON");
    let entries = parsed.as_array().expect("array of presets");
    assert_eq!(entries.len(), 6);
    assert!(entries.iter().any(|e| e["name"] == "card_scanning"));
}
