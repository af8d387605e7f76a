//! Exit status and output of the `mmap-strings` binary.

use std::path::Path;
use std::process::{Command, Output};

use map_manager_strings::config::{CONFIG_ENV, StringsConfig};
use map_manager_strings::export::ExportFormat;
use tempfile::tempdir;

/// Run the binary with its config pointed at `config`.
fn run(config: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_mmap-strings"))
        .args(args)
        .env(CONFIG_ENV, config)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run mmap-strings")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_get_known_key() {
    let dir = tempdir().unwrap();
    let output = run(&dir.path().join("config.json"), &["get", "FILENAME"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "文件名\n");
}

#[test]
fn test_get_missing_key_exits_1() {
    let dir = tempdir().unwrap();
    let output = run(&dir.path().join("config.json"), &["get", "DOES_NOT_EXIST"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("DOES_NOT_EXIST"));
}

#[test]
fn test_check_partial_locale_exits_1() {
    let dir = tempdir().unwrap();
    let locale = dir.path().join("zh_CN.json");
    std::fs::write(&locale, r#"{"FILENAME": "文件名", "CANCEL": "取消"}"#).unwrap();

    let output = run(&dir.path().join("config.json"), &["check", locale.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("missing: WIFI_TRANS_TITLE\n"));
}

#[test]
fn test_check_complete_locale_succeeds() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("config.json");
    let locale = dir.path().join("zh_CN.json");

    let export = run(&config, &["export", "--format", "json", "-o", locale.to_str().unwrap()]);
    assert!(export.status.success(), "export failed: {}", stderr(&export));

    let output = run(&config, &["check", locale.to_str().unwrap()]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "OK: all keys present\n");
}

#[test]
fn test_export_rejects_invalid_global() {
    let dir = tempdir().unwrap();
    let output = run(&dir.path().join("config.json"), &["export", "--global", "my-strings"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("my-strings"));
}

#[test]
fn test_config_set_is_used_by_export() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("nested").join("config.json");

    let set = run(&config, &["config", "set", "--format", "js", "--global", "LANG"]);
    assert!(set.status.success(), "config set failed: {}", stderr(&set));
    assert!(stdout(&set).contains(&format!("path: {}", config.display())));

    let saved = StringsConfig::load_from(&config).unwrap();
    assert_eq!(saved.export_format, ExportFormat::Js);
    assert_eq!(saved.global_name, "LANG");

    let export = run(&config, &["export"]);
    assert!(export.status.success());
    assert!(stdout(&export).starts_with("var LANG = {};\n"));
}

#[test]
fn test_config_set_invalid_global_leaves_file_untouched() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("config.json");

    let output = run(&config, &["config", "set", "--global", "1bad"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(!config.exists());
}
