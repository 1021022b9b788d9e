use std::path::{Path, PathBuf};
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

fn workspace_root() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest_dir.parent().unwrap().parent().unwrap().to_path_buf()
}

fn source(dir: &TempDir, name: &str, text: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, text).unwrap();
    path
}

fn swiftlet(args: &[&str], path: &Path) -> Command {
    let mut cmd = Command::cargo_bin("swiftlet").unwrap();
    cmd.args(args).arg(path);
    cmd
}

#[test]
fn dump_prints_the_tree() {
    let dir = tempfile::tempdir().unwrap();
    let path = source(&dir, "call.swift", "foo(x)\n");

    swiftlet(&["dump"], &path).assert().success().stdout(
        "SOURCE_FILE\n  EXPR_STMT\n    CALL_EXPR\n      NAME_EXPR\n        NAME \"foo\"\n      ARG_LIST\n        ARG\n          NAME_EXPR\n            NAME \"x\"\n",
    );
}

#[test]
fn dump_with_ranges() {
    let dir = tempfile::tempdir().unwrap();
    let path = source(&dir, "call.swift", "  foo(x)\n");

    swiftlet(&["dump", "--ranges"], &path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("SOURCE_FILE@2..8\n"))
        .stdout(predicate::str::contains("NAME@2..5 \"foo\""));
}

#[test]
fn dump_reports_errors_but_succeeds_unless_denied() {
    let dir = tempfile::tempdir().unwrap();
    let path = source(&dir, "bad.swift", "let x = )\n");

    swiftlet(&["dump"], &path)
        .assert()
        .success()
        .stdout(predicate::str::contains("errors:\n  8..9: expected expression"));
    swiftlet(&["dump", "--deny-errors"], &path).assert().failure();
}

#[test]
fn check_renders_diagnostics() {
    let dir = tempfile::tempdir().unwrap();
    let path = source(&dir, "bad.swift", "let a = 1\nfoo(1,,2)\n");

    swiftlet(&["check"], &path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected ',' separator"))
        .stderr(predicate::str::contains("1 error(s)"));
}

#[test]
fn check_accepts_clean_files() {
    let root = workspace_root();
    let path = root.join("crates/swiftlet-parse/test_data/generics.swift");

    swiftlet(&["check"], &path).assert().success().stderr("");
}

#[test]
fn tokens_lists_trivia() {
    let dir = tempfile::tempdir().unwrap();
    let path = source(&dir, "let.swift", "let x = 1\n");

    swiftlet(&["tokens"], &path)
        .assert()
        .success()
        .stdout(predicate::str::contains("LET_KW@0..3 \"let\" trailing=[Space]"))
        .stdout(predicate::str::contains("EOF@10..10 \"\" leading=[Newline]"));
}

#[test]
fn verify_accepts_test_data() {
    let root = workspace_root();
    for name in ["closures", "decls", "generics", "statements", "verify_parse"] {
        let path = root.join(format!("crates/swiftlet-parse/test_data/{name}.swift"));
        swiftlet(&["verify"], &path).assert().success().stdout(predicate::str::ends_with(": ok\n"));
    }
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.swift");

    swiftlet(&["dump"], &path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}
