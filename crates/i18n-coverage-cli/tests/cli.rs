//! End-to-end tests for the `i18n-coverage` binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn run(root: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_i18n-coverage"))
        .arg("--locales")
        .arg(root)
        .arg("--color")
        .arg("never")
        .args(args)
        .env_remove("I18N_COVERAGE_LOCALES")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn two_languages() -> TempDir {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "en/common.json", r#"{"a": 1, "b": 2}"#);
    write(dir.path(), "fr/common.json", r#"{"a": 1}"#);
    dir
}

// =========================================================================
// Plain Report
// =========================================================================

#[test]
fn prints_plain_report() {
    let dir = two_languages();
    let output = run(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(exitcode::OK));
    assert_eq!(stdout(&output), "Coverage:\nen\t100%\nfr\t50%\n");
}

#[test]
fn locales_root_from_environment() {
    let dir = two_languages();
    let output = Command::new(env!("CARGO_BIN_EXE_i18n-coverage"))
        .env("I18N_COVERAGE_LOCALES", dir.path())
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(exitcode::OK));
    assert_eq!(stdout(&output), "Coverage:\nen\t100%\nfr\t50%\n");
}

#[test]
fn default_root_is_next_to_executable() {
    let exe = Path::new(env!("CARGO_BIN_EXE_i18n-coverage"));
    // Same filesystem as the build output so the binary can be hard-linked.
    let install = tempfile::Builder::new()
        .tempdir_in(exe.parent().unwrap())
        .unwrap();
    let installed = install.path().join(exe.file_name().unwrap());
    if fs::hard_link(exe, &installed).is_err() {
        fs::copy(exe, &installed).unwrap();
    }
    write(install.path(), "public/locales/en/common.json", r#"{"a": 1, "b": 2}"#);
    write(install.path(), "public/locales/fr/common.json", r#"{"a": 1}"#);

    // A locales tree in the working directory must not be picked up.
    let cwd = TempDir::new().unwrap();
    write(cwd.path(), "public/locales/de/common.json", r#"{"z": 1}"#);

    let output = Command::new(&installed)
        .current_dir(cwd.path())
        .env_remove("I18N_COVERAGE_LOCALES")
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(exitcode::OK));
    assert_eq!(stdout(&output), "Coverage:\nen\t100%\nfr\t50%\n");
}

#[test]
fn lists_missing_keys() {
    let dir = two_languages();
    let output = run(dir.path(), &["--missing"]);

    assert_eq!(
        stdout(&output),
        "Coverage:\nen\t100%\nfr\t50%\n\nMissing in fr:\n  - b\n"
    );
}

// =========================================================================
// Other Formats
// =========================================================================

#[test]
fn prints_json_report() {
    let dir = two_languages();
    let output = run(dir.path(), &["--format", "json"]);
    assert_eq!(output.status.code(), Some(exitcode::OK));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            {"language": "en", "keys": 2, "total": 2, "percent": 100, "missing": []},
            {"language": "fr", "keys": 1, "total": 2, "percent": 50, "missing": ["b"]}
        ])
    );
}

#[test]
fn prints_table_report() {
    let dir = two_languages();
    let output = run(dir.path(), &["--format", "table"]);
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(exitcode::OK));
    assert!(out.contains("Language"));
    assert!(out.lines().any(|l| l.contains("fr") && l.contains("1/2")));
}

// =========================================================================
// Exit Codes
// =========================================================================

#[test]
fn strict_fails_on_incomplete_language() {
    let dir = two_languages();
    let output = run(dir.path(), &["--strict"]);

    assert_eq!(output.status.code(), Some(exitcode::DATAERR));
    assert_eq!(stdout(&output), "Coverage:\nen\t100%\nfr\t50%\n");
}

#[test]
fn strict_passes_when_complete() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "en/common.json", r#"{"a": 1}"#);
    write(dir.path(), "de/common.json", r#"{"a": "eins"}"#);

    let output = run(dir.path(), &["--strict"]);
    assert_eq!(output.status.code(), Some(exitcode::OK));
}

#[test]
fn malformed_json_prints_no_report() {
    let dir = two_languages();
    write(dir.path(), "fr/broken.json", "{\"a\": ");

    let output = run(dir.path(), &[]);
    assert_eq!(output.status.code(), Some(exitcode::SOFTWARE));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid JSON"), "stderr: {stderr}");
}

#[test]
fn missing_root_fails() {
    let dir = TempDir::new().unwrap();
    let output = run(&dir.path().join("nope"), &[]);

    assert_eq!(output.status.code(), Some(exitcode::SOFTWARE));
    assert!(output.stdout.is_empty());
}

#[test]
fn empty_root_fails() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(exitcode::SOFTWARE));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no translation keys"), "stderr: {stderr}");
    let root = dir.path().display().to_string();
    assert!(stderr.contains(&root), "stderr: {stderr}");
    assert!(!stderr.contains(&format!("\"{root}\"")), "stderr: {stderr}");
}

#[test]
fn non_object_document_warns_on_stderr() {
    let dir = two_languages();
    write(dir.path(), "fr/list.json", "[1, 2]");

    let output = run(dir.path(), &[]);
    assert_eq!(output.status.code(), Some(exitcode::OK));
    assert_eq!(stdout(&output), "Coverage:\nen\t100%\nfr\t50%\n");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not an object"), "stderr: {stderr}");
}
