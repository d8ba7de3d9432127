use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::str::contains;

const FIXTURE: &str = r#"{
    "quiz_metadata": {"topic": "Kernel debugging quiz", "date": "2025-11-02"},
    "ai_models": [
        {
            "name": "model-a",
            "weighted_score": 95.0,
            "scores": {
                "problem_recognition": 25,
                "technical_accuracy": 25,
                "solution_quality": 20,
                "completeness": 15,
                "no_hallucinations": 10,
                "documentation_usage": 5
            },
            "hallucinations": [],
            "assumptions_without_evidence": []
        },
        {
            "name": "model-b",
            "weighted_score": 72.0,
            "scores": {
                "problem_recognition": 20,
                "technical_accuracy": 18,
                "solution_quality": 15,
                "completeness": 10,
                "no_hallucinations": 5,
                "documentation_usage": 4
            },
            "hallucinations": ["X"],
            "assumptions_without_evidence": []
        },
        {
            "name": "model-c",
            "weighted_score": 95.0,
            "scores": {
                "problem_recognition": 25,
                "technical_accuracy": 25,
                "solution_quality": 20,
                "completeness": 15,
                "no_hallucinations": 10,
                "documentation_usage": 5
            },
            "hallucinations": [],
            "assumptions_without_evidence": []
        }
    ],
    "summary_statistics": {
        "total_models": 3,
        "average_score": 87.33,
        "highest_score": 95.0,
        "lowest_score": 72.0,
        "median_score": 95.0,
        "standard_deviation": 10.8,
        "models_perfect_hallucination_score": 2,
        "models_with_hallucinations": 1
    },
    "key_findings": ["two models tied for first", "one hallucination found"]
}"#;

fn cmd() -> Command {
    Command::cargo_bin("scorecard").unwrap()
}

fn write_fixture(dir: &tempfile::TempDir) -> PathBuf {
    let path = dir.path().join("comparison_result.json");
    fs::write(&path, FIXTURE).unwrap();
    path
}

#[test]
fn default_run_prints_all_reports() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_fixture(&dir);

    let assert = cmd()
        .args(["--data", data.to_str().unwrap()])
        .assert()
        .success()
        .stdout(contains("AI Model Performance Comparison"))
        .stdout(contains("Kernel debugging quiz"))
        .stdout(contains("Summary Statistics"))
        .stdout(contains("Score Breakdown by Category"))
        .stdout(contains("Hallucinations and Assumptions"))
        .stdout(contains("Key Findings"))
        .stdout(contains("1. two models tied for first"));

    // Tie on 95.0: model-a keeps its input position ahead of model-c.
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let a = stdout.find("model-a").unwrap();
    let c = stdout.find("model-c").unwrap();
    let b = stdout.find("model-b").unwrap();
    assert!(a < c && c < b);
}

#[test]
fn issues_report_lists_only_the_flawed_model() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_fixture(&dir);

    let assert = cmd()
        .args(["--data", data.to_str().unwrap()])
        .assert()
        .success()
        .stdout(contains("• X"));

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let issues = stdout.split("Hallucinations and Assumptions").nth(1).unwrap();
    let issues = issues.split("Key Findings").next().unwrap();
    assert!(issues.contains("model-b"));
    assert!(!issues.contains("model-a"));
    assert!(!issues.contains("No hallucinations"));
}

#[test]
fn score_chart_flag_adds_the_chart() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_fixture(&dir);

    cmd()
        .args(["--data", data.to_str().unwrap(), "--chart", "scores"])
        .assert()
        .success()
        .stdout(contains("Score Chart"))
        .stdout(contains("█"));
}

#[test]
fn radar_chart_is_a_placeholder_notice() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_fixture(&dir);

    cmd()
        .args(["--data", data.to_str().unwrap(), "--chart", "radar"])
        .assert()
        .success()
        .stdout(contains("import the CSV file"));
}

#[test]
fn csv_export_writes_next_to_the_input() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_fixture(&dir);

    cmd()
        .args(["--data", data.to_str().unwrap(), "--export", "csv"])
        .assert()
        .success()
        .stdout(contains("Data exported to"));

    let csv = fs::read_to_string(dir.path().join("comparison_export.csv")).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert!(lines[0].starts_with("Rank,Model Name,Total Score"));
    assert!(lines[1].starts_with("1,model-a,95.0,25,25,20,15,10,5"));
    assert!(lines[2].starts_with("2,model-c,95.0,"));
    assert!(lines[3].starts_with("3,model-b,72.0,"));
}

#[test]
fn excel_export_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_fixture(&dir);

    cmd()
        .args(["--data", data.to_str().unwrap(), "--export", "excel"])
        .assert()
        .failure()
        .stderr(contains("excel export is not supported"));
}

#[test]
fn top_caps_the_ranking_table() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_fixture(&dir);

    let assert = cmd()
        .args(["--data", data.to_str().unwrap(), "--top", "2"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let table = stdout.split("Summary Statistics").next().unwrap();
    assert!(table.contains("model-a"));
    assert!(table.contains("model-c"));
    assert!(!table.contains("model-b"));
}

#[test]
fn missing_input_fails_with_no_partial_output() {
    let assert = cmd()
        .args(["--data", "/nonexistent/comparison_result.json"])
        .assert()
        .failure()
        .stderr(contains("/nonexistent/comparison_result.json"));

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(stdout.is_empty());
}
