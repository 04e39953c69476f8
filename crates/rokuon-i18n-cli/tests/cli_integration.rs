use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::tempdir;

fn cli_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_rokuon-i18n"))
}

fn run_cli(args: &[&str]) -> Output {
    Command::new(cli_bin())
        .args(args)
        .env_remove("ROKUON_LANG")
        .env_remove("RUST_LOG")
        .output()
        .expect("run rokuon-i18n binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn write_locale(dir: &Path, name: &str, body: &str) {
    fs::write(dir.join(format!("{name}.ftl")), body).expect("write locale file");
}

#[test]
fn get_resolves_bundled_messages() {
    let output = run_cli(&["get", "hz_unit", "--locale", "ja"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "Hz\n");

    let output = run_cli(&["get", "recording_time", "-l", "ja", "--arg", "time=00:12"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "録音時間: 00:12\n");
}

#[test]
fn get_without_locale_uses_env_default() {
    let output = Command::new(cli_bin())
        .args(["get", "app_title"])
        .env("ROKUON_LANG", "en")
        .output()
        .expect("run rokuon-i18n binary");
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "Recorder-kun\n");
}

#[test]
fn missing_argument_exits_nonzero() {
    let output = run_cli(&["get", "recording_time", "--locale", "ja"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("time"), "stderr: {}", stderr(&output));
}

#[test]
fn unknown_locale_reports_json_error() {
    let output = run_cli(&["--json", "get", "hz_unit", "--locale", "fr"]);
    assert_eq!(output.status.code(), Some(1));
    let error: Value = serde_json::from_str(stderr(&output).trim()).expect("json error");
    assert_eq!(error["status"], "error");
    assert_eq!(error["exit_code"], 1);
    assert!(
        error["error"].as_str().unwrap_or_default().contains("fr"),
        "error: {error}"
    );
}

#[test]
fn check_passes_for_bundled_catalogs() {
    let output = run_cli(&["check"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("en: ok"));
}

#[test]
fn check_flags_incomplete_locale_directory() {
    let temp = tempdir().expect("tempdir");
    write_locale(temp.path(), "ja", "a = あ\nb = い { $n }\n");
    write_locale(temp.path(), "en", "a = A\nb = B { $m }\n");
    let dir = temp.path().to_string_lossy().into_owned();

    let output = run_cli(&["--locales-dir", &dir, "--json", "check"]);
    assert_eq!(output.status.code(), Some(1));
    let report: Value = serde_json::from_str(&stdout(&output)).expect("json report");
    assert_eq!(report["reference"], "ja");
    assert_eq!(report["locales"][0]["locale"], "en");
    assert_eq!(report["locales"][0]["mismatched_placeholders"][0]["key"], "b");
}

#[test]
fn fmt_check_then_rewrite() {
    let temp = tempdir().expect("tempdir");
    let file = temp.path().join("ja.ftl");
    fs::write(&file, "# header\nhz_unit=Hz\n").expect("write file");
    let path = file.to_string_lossy().into_owned();

    let output = run_cli(&["fmt", "--check", &path]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(fs::read_to_string(&file).unwrap(), "# header\nhz_unit=Hz\n");

    let output = run_cli(&["fmt", &path]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(fs::read_to_string(&file).unwrap(), "# header\nhz_unit = Hz\n");

    let output = run_cli(&["fmt", "--check", &path]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
}

#[test]
fn fmt_rejects_malformed_resource() {
    let temp = tempdir().expect("tempdir");
    let file = temp.path().join("bad.ftl");
    fs::write(&file, "no equals here\n").expect("write file");

    let output = run_cli(&["fmt", &file.to_string_lossy()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("line 1"), "stderr: {}", stderr(&output));
}

#[test]
fn keys_and_locales_list_bundled_catalogs() {
    let output = run_cli(&["keys", "--locale", "en"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let keys = stdout(&output);
    assert!(keys.lines().any(|line| line == "hz_unit"));
    assert!(keys.lines().any(|line| line == "recording_time"));

    let output = run_cli(&["locales"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "en\nja (default)\n");
}
