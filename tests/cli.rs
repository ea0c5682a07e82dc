use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn write_input(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut f = std::fs::File::create(&path).unwrap();
    f.write_all(contents.as_bytes()).unwrap();
    path
}

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("plays-chart").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("plays-chart"));
}

#[test]
fn cli_computes_facts_from_an_envelope_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(
        &dir,
        "chart.json",
        r#"{
            "config": {"todayYmd": "2022-07-06"},
            "dataSets": [
                {
                    "title": "Example",
                    "dataPoints": [["2022-05-06", 5], ["2022-05-07", 3]]
                }
            ]
        }"#,
    );

    let mut cmd = Command::cargo_bin("plays-chart").unwrap();
    cmd.arg("--input").arg(&input);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"dataSets\""))
        .stdout(predicate::str::contains("\"2022-05-06:5\""))
        .stdout(predicate::str::contains("\"startDate\""));
}

#[test]
fn cli_prints_null_when_there_is_nothing_to_render() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "empty.json", r#"{"dataSets": []}"#);

    let mut cmd = Command::cargo_bin("plays-chart").unwrap();
    cmd.arg("--input").arg(&input);
    cmd.assert().success().stdout(predicate::str::contains("null"));
}

#[test]
fn cli_rejects_malformed_dates() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(
        &dir,
        "bad.json",
        r#"{"dataSets": [{"title": "Bad", "dataPoints": [["06/05/2022", 5]]}]}"#,
    );

    let mut cmd = Command::cargo_bin("plays-chart").unwrap();
    cmd.arg("--input").arg(&input);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("parsing chart input"));
}

#[test]
fn cli_reads_stdin_when_no_input_flag_is_given() {
    let mut cmd = Command::cargo_bin("plays-chart").unwrap();
    cmd.write_stdin(
        r#"{
            "config": {"todayYmd": "2022-07-06"},
            "dataSets": [
                {"title": "Example", "dataPoints": [["2022-05-06", 5], ["2022-05-08", 2]]}
            ]
        }"#,
    );
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"totalDays\""));
}

#[test]
fn cli_fails_on_inconsistent_config() {
    let mut cmd = Command::cargo_bin("plays-chart").unwrap();
    cmd.write_stdin(
        r#"{
            "config": {"maxDays": 3, "minDays": 10},
            "dataSets": [
                {"title": "Example", "dataPoints": [["2022-05-06", 5], ["2022-05-08", 2]]}
            ]
        }"#,
    );
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("inconsistent chart configuration"));
}
