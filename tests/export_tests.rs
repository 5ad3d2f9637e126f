mod common;
use chrono::NaiveDate;
use common::temp_file;
use rattendance::core::table::AttendanceTable;
use rattendance::export::{ExportFormat, ExportLogic, render_csv};
use rattendance::models::AttendanceStatus;
use std::fs;
use std::path::Path;

fn reference_table() -> AttendanceTable {
    let (mut table, _) = AttendanceTable::from_names(["A", "B"]);
    let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    table.mark(&[1], AttendanceStatus::Present, day).unwrap();
    table
}

#[test]
fn test_csv_reference_layout() {
    let out = render_csv(reference_table().rows(), true).unwrap();
    assert_eq!(out, "A,,\nB,2024-01-01,Present,\n");
}

#[test]
fn test_csv_without_trailing_comma() {
    let out = render_csv(reference_table().rows(), false).unwrap();
    assert_eq!(out, "A,,\nB,2024-01-01,Present\n");
}

#[test]
fn test_csv_does_not_quote_embedded_commas() {
    let (table, _) = AttendanceTable::from_names(["Doe, Jane"]);
    let out = render_csv(table.rows(), true).unwrap();
    assert_eq!(out, "Doe, Jane,,\n");
}

#[test]
fn test_csv_empty_table_writes_nothing() {
    let out = render_csv(AttendanceTable::new().rows(), true).unwrap();
    assert!(out.is_empty());
}

#[test]
fn test_export_file_replaces_previous_content() {
    let path = temp_file("export_replace", "csv");
    fs::write(&path, "old content\nmore\nlines\n").unwrap();

    ExportLogic::export(
        &reference_table(),
        Path::new(&path),
        ExportFormat::Csv,
        true,
        true,
    )
    .unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "A,,\nB,2024-01-01,Present,\n"
    );
}

#[test]
fn test_export_json() {
    let path = temp_file("export_json", "json");

    ExportLogic::export(
        &reference_table(),
        Path::new(&path),
        ExportFormat::Json,
        true,
        false,
    )
    .unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let rows = value.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["name"], "A");
    assert!(rows[0]["date"].is_null());
    assert!(rows[0]["status"].is_null());
    assert_eq!(rows[1]["date"], "2024-01-01");
    assert_eq!(rows[1]["status"], "Present");
}

#[test]
fn test_export_to_missing_directory_reports_error() {
    let path = std::env::temp_dir()
        .join("rattendance_no_such_dir")
        .join("attendance.csv");

    let err = ExportLogic::export(&reference_table(), &path, ExportFormat::Csv, true, true)
        .unwrap_err();

    assert!(err.to_string().starts_with("Error saving file:"));
}
