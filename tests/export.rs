//! Rendering the table to the page script and JSON locale formats.

use map_manager_strings::StringTable;
use map_manager_strings::export::{self, ExportFormat, ExportOptions};
use map_manager_strings::locale::{self, LocaleFile};
use tempfile::tempdir;

const PAGE_SCRIPT: &str = include_str!("fixtures/lang.js");

#[test]
fn test_js_export_matches_page_script() {
    let out = export::render(ExportFormat::Js, StringTable::global(), &ExportOptions::default())
        .unwrap();
    assert_eq!(out, PAGE_SCRIPT);
}

#[test]
fn test_json_export_is_complete_locale() {
    let out = export::render(ExportFormat::Json, StringTable::global(), &ExportOptions::default())
        .unwrap();
    let file = LocaleFile::from_json(&out).unwrap();
    assert_eq!(file.entries.len(), 27);
    assert_eq!(file.entries[0].0, "WIFI_TRANS_TITLE");
    assert_eq!(file.get("FILENAME"), Some("文件名"));

    let report = locale::check(StringTable::global(), &file);
    assert!(report.is_complete(), "unexpected report:\n{}", report);
}

#[test]
fn test_write_to_creates_parent_dirs() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("scripts").join("lang.js");

    export::write_to(&path, ExportFormat::Js, StringTable::global(), &ExportOptions::default())
        .unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content, PAGE_SCRIPT);
}

#[test]
fn test_written_json_loads_from_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("zh_CN.json");

    export::write_to(&path, ExportFormat::Json, StringTable::global(), &ExportOptions::default())
        .unwrap();

    let file = LocaleFile::load(&path).unwrap();
    assert_eq!(file.path, path);
    assert_eq!(
        file.get("VALID_CHOSEN_FILE_COUNT"),
        Some("个文件。\n请选择mmap文件，文件名不能重复。")
    );
}
