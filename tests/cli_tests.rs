use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};
use std::fs;
use tempfile::{tempdir, TempDir};

/// Writes `graph` to a JSON file and returns a command reading it
fn sssp_on(graph: &str) -> (TempDir, Command) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("graph.json");
    fs::write(&path, graph).unwrap();

    let mut cmd = cargo_bin_cmd!("sssp");
    cmd.arg(&path);
    (dir, cmd)
}

fn stdout_json(cmd: &mut Command) -> Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).unwrap()
}

const ISOLATED: &str = r#"{"a": [["b", 1]], "b": [], "c": []}"#;
const NEGATIVE_EDGE: &str = r#"{"a": [["b", 4], ["c", 1]], "b": [], "c": [["b", -2]]}"#;

#[test]
fn test_unreachable_distance_is_null() {
    let (_dir, mut cmd) = sssp_on(ISOLATED);
    let report = stdout_json(cmd.args(["--source", "a"]));

    assert_eq!(report["algorithm"], json!("Dijkstra"));
    assert_eq!(report["distances"]["a"], json!(0.0));
    assert_eq!(report["distances"]["b"], json!(1.0));
    assert_eq!(report["distances"]["c"], Value::Null);
}

#[test]
fn test_unreachable_target_fails() {
    let (_dir, mut cmd) = sssp_on(ISOLATED);
    cmd.args(["--source", "a", "--target", "c"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No path"));
}

#[test]
fn test_target_distance_and_path() {
    let (_dir, mut cmd) = sssp_on(NEGATIVE_EDGE);
    let report = stdout_json(cmd.args(["--algorithm", "bellman-ford", "--source", "a", "--target", "b"]));
    assert_eq!(report["algorithm"], json!("Bellman-Ford"));
    assert_eq!(report["distance"], json!(-1.0));

    let (_dir, mut cmd) = sssp_on(NEGATIVE_EDGE);
    let report = stdout_json(cmd.args(["-a", "bellman-ford", "-s", "a", "-t", "b", "--paths"]));
    assert_eq!(report["path"], json!(["a", "c", "b"]));
}

#[test]
fn test_paths_omit_unreachable_nodes() {
    let (_dir, mut cmd) = sssp_on(ISOLATED);
    let report = stdout_json(cmd.args(["--source", "a", "--paths"]));

    assert_eq!(report["paths"], json!({"a": ["a"], "b": ["a", "b"]}));
}

#[test]
fn test_strict_rejects_negative_edge() {
    let (_dir, mut cmd) = sssp_on(NEGATIVE_EDGE);
    cmd.args(["--source", "a", "--strict"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("negative weight"));

    // Without --strict the precondition is not checked
    let (_dir, mut cmd) = sssp_on(NEGATIVE_EDGE);
    cmd.args(["--source", "a"]).assert().success();
}

#[test]
fn test_strict_with_bellman_ford_is_rejected() {
    let (_dir, mut cmd) = sssp_on(ISOLATED);
    cmd.args(["--algorithm", "bellman-ford", "--source", "a", "--strict"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--strict only applies"));
}

#[test]
fn test_negative_cycle_fails() {
    let (_dir, mut cmd) = sssp_on(r#"{"a": [["b", 1]], "b": [["a", -2]]}"#);
    cmd.args(["--algorithm", "bellman-ford", "--source", "a"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Negative-weight cycle"));
}

#[test]
fn test_unknown_source_and_bad_file_fail() {
    let (_dir, mut cmd) = sssp_on(ISOLATED);
    cmd.args(["--source", "zz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a node of the graph"));

    let (_dir, mut cmd) = sssp_on(r#"{"a": [["missing", 1]]}"#);
    cmd.args(["--source", "a"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a key"));
}
