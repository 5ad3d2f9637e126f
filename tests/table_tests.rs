use chrono::NaiveDate;
use rattendance::core::mark::MarkLogic;
use rattendance::core::selection::{parse_selection, select_by_names};
use rattendance::core::table::AttendanceTable;
use rattendance::errors::AppError;
use rattendance::models::AttendanceStatus;
use rattendance::utils::date::today;

fn class_of_five() -> AttendanceTable {
    let (table, dups) = AttendanceTable::from_names(["Ann", "Ben", "Cat", "Dan", "Eve"]);
    assert!(dups.is_empty());
    table
}

#[test]
fn test_mark_selected_rows_only() {
    let mut table = class_of_five();

    let summary = MarkLogic::apply(&mut table, &[0, 2, 4], AttendanceStatus::Present).unwrap();

    assert_eq!(summary.count, 3);
    assert_eq!(summary.date, today());
    for i in [0, 2, 4] {
        let row = table.get(i).unwrap();
        assert_eq!(row.date, Some(today()));
        assert_eq!(row.status, Some(AttendanceStatus::Present));
    }
    for i in [1, 3] {
        let row = table.get(i).unwrap();
        assert!(row.date.is_none());
        assert!(row.status.is_none());
    }
}

#[test]
fn test_mark_overwrites_previous_values() {
    let mut table = class_of_five();
    let yesterday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

    MarkLogic::apply_on(&mut table, &[1], AttendanceStatus::Present, yesterday).unwrap();
    MarkLogic::apply(&mut table, &[1], AttendanceStatus::Absent).unwrap();

    let row = table.get(1).unwrap();
    assert_eq!(row.date, Some(today()));
    assert_eq!(row.status, Some(AttendanceStatus::Absent));
    assert_eq!(row.date_str(), today().format("%Y-%m-%d").to_string());
}

#[test]
fn test_mark_without_selection_is_rejected() {
    let mut table = class_of_five();
    let before = table.clone();

    let err = MarkLogic::apply(&mut table, &[], AttendanceStatus::Absent).unwrap_err();

    assert!(matches!(err, AppError::NoSelection));
    assert_eq!(table, before);
}

#[test]
fn test_mark_out_of_range_touches_nothing() {
    let mut table = class_of_five();
    let before = table.clone();

    let err = MarkLogic::apply(&mut table, &[0, 9], AttendanceStatus::Present).unwrap_err();

    assert!(matches!(err, AppError::InvalidRow(10)));
    assert_eq!(table, before);
}

#[test]
fn test_mark_counts_repeated_indices_once() {
    let mut table = class_of_five();

    let summary = MarkLogic::apply(&mut table, &[3, 3, 3], AttendanceStatus::Present).unwrap();

    assert_eq!(summary.count, 1);
}

#[test]
fn test_add_student_keeps_insertion_order() {
    let mut table = class_of_five();

    table.add_student("Abe").unwrap();

    assert_eq!(table.len(), 6);
    assert_eq!(table.get(5).unwrap().name, "Abe");
    assert_eq!(table.position("Abe"), Some(5));
}

#[test]
fn test_parse_selection_forms() {
    assert_eq!(parse_selection("all", 3).unwrap(), vec![0, 1, 2]);
    assert!(parse_selection("none", 3).unwrap().is_empty());
    assert_eq!(parse_selection("2", 3).unwrap(), vec![1]);
    assert_eq!(parse_selection("1,3", 3).unwrap(), vec![0, 2]);
    assert_eq!(parse_selection("3, 1-2, 2", 5).unwrap(), vec![0, 1, 2]);
}

#[test]
fn test_parse_selection_errors() {
    assert!(matches!(
        parse_selection("0", 3),
        Err(AppError::InvalidSelection(_))
    ));
    assert!(matches!(
        parse_selection("3-1", 3),
        Err(AppError::InvalidSelection(_))
    ));
    assert!(matches!(
        parse_selection("two", 3),
        Err(AppError::InvalidSelection(_))
    ));
    assert!(matches!(parse_selection("4", 3), Err(AppError::InvalidRow(4))));
}

#[test]
fn test_select_by_names_is_exact() {
    let table = class_of_five();

    assert_eq!(
        select_by_names(&table, &["Eve".into(), "Ann".into()]).unwrap(),
        vec![0, 4]
    );
    assert!(matches!(
        select_by_names(&table, &["eve".into()]),
        Err(AppError::UnknownStudent(_))
    ));
}
