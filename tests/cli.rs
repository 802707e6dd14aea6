use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("regpop").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("regpop"));
}

#[test]
fn offline_report_writes_all_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("regpop").unwrap();
    cmd.args(["report", "--offline", "--print", "--out-dir"])
        .arg(dir.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("세종특별자치시"))
        .stderr(predicate::str::contains("Data source: fallback"))
        .stderr(predicate::str::contains("Saved 17 rows"));

    let mut exts: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| {
            e.unwrap()
                .path()
                .extension()
                .unwrap()
                .to_string_lossy()
                .into_owned()
        })
        .collect();
    exts.sort();
    assert_eq!(exts, ["csv", "html", "svg"]);
}

#[test]
fn offline_report_honors_path_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let table = dir.path().join("t.csv");
    let map = dir.path().join("m.html");
    let plot = dir.path().join("c.svg");

    let mut cmd = Command::cargo_bin("regpop").unwrap();
    cmd.args(["report", "--offline", "--json"])
        .arg("--out-dir")
        .arg(dir.path())
        .arg("--table")
        .arg(&table)
        .arg("--map-file")
        .arg(&map)
        .arg("--plot")
        .arg(&plot);
    cmd.assert().success();

    assert!(table.exists());
    assert!(table.with_extension("json").exists());
    assert!(map.exists());
    assert!(plot.exists());
}

// Live test (opt-in): cargo test --features online
#[cfg(feature = "online")]
#[test]
fn report_with_live_endpoint_never_fails() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("regpop").unwrap();
    cmd.args(["report", "--out-dir"]).arg(dir.path());
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Data source:"));
}
