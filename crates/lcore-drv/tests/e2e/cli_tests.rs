//! Tests against the built `lcorec` binary's argument surface (§6 "CLI
//! surface"): default input/output paths, explicit output, exit codes,
//! and the optional `--emit-errors-log` side file.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn lcorec() -> Command {
    Command::cargo_bin("lcorec").unwrap()
}

#[test]
fn successful_compile_writes_output_and_exits_zero() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("input.txt");
    fs::write(&input, "x = 2 + 3 * 4;\ncall print(x);\n").unwrap();

    lcorec().arg(&input).current_dir(dir.path()).assert().success();

    let output = fs::read_to_string(dir.path().join("input.rs")).unwrap();
    assert!(output.contains("fn main()"));
}

#[test]
fn explicit_output_path_is_respected() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("program.txt");
    let output = dir.path().join("generated.rs");
    fs::write(&input, "call print(\"hi\");\n").unwrap();

    lcorec().arg(&input).arg(&output).assert().success();

    assert!(output.exists());
    assert!(fs::read_to_string(&output).unwrap().contains("println!"));
}

#[test]
fn compilation_failure_exits_nonzero_and_prints_report() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("bad.txt");
    fs::write(&input, "call mystery(1);\n").unwrap();

    lcorec()
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Undefined function 'mystery'"));
}

#[test]
fn missing_input_file_is_a_distinct_failure_from_compilation_errors() {
    let dir = tempdir().unwrap();
    lcorec()
        .arg(dir.path().join("does_not_exist.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn emit_errors_log_appends_the_report() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("bad.txt");
    let log = dir.path().join("errors.txt");
    fs::write(&input, "call mystery(1);\n").unwrap();

    lcorec()
        .arg(&input)
        .arg("--emit-errors-log")
        .arg(&log)
        .assert()
        .failure();

    let logged = fs::read_to_string(&log).unwrap();
    assert!(logged.contains("Undefined function 'mystery'"));
}

#[test]
fn default_input_is_input_txt() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("input.txt"), "call print(1);\n").unwrap();

    lcorec().current_dir(dir.path()).assert().success();
    assert!(dir.path().join("input.rs").exists());
}
