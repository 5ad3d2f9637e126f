mod common;
use common::temp_file;
use rattendance::core::session::{Action, Outcome, Session, load_table};
use rattendance::errors::AppError;
use rattendance::models::AttendanceStatus;
use rattendance::store::RosterStore;
use rattendance::utils::date::today;
use std::fs;
use std::path::PathBuf;

fn session(name: &str, names: &str) -> (Session, String, String) {
    let roster_path = temp_file(&format!("{name}_roster"), "txt");
    let export_path = temp_file(&format!("{name}_export"), "csv");
    fs::write(&roster_path, names).unwrap();

    let roster = RosterStore::new(&roster_path);
    let table = load_table(&roster).unwrap();
    let s = Session::new(table, roster, PathBuf::from(&export_path), true);
    (s, roster_path, export_path)
}

#[test]
fn test_parse_actions() {
    assert_eq!(Action::parse("   ").unwrap(), None);
    assert_eq!(
        Action::parse("add  Mary Ann ").unwrap(),
        Some(Action::Add("Mary Ann".into()))
    );
    assert_eq!(Action::parse("LS").unwrap(), Some(Action::List));
    assert_eq!(
        Action::parse("select 1,3").unwrap(),
        Some(Action::Select("1,3".into()))
    );
    assert_eq!(
        Action::parse("present").unwrap(),
        Some(Action::Mark(AttendanceStatus::Present))
    );
    assert_eq!(
        Action::parse("mark a").unwrap(),
        Some(Action::Mark(AttendanceStatus::Absent))
    );
    assert_eq!(Action::parse("save").unwrap(), Some(Action::Save(None)));
    assert_eq!(
        Action::parse("save /tmp/x.csv").unwrap(),
        Some(Action::Save(Some(PathBuf::from("/tmp/x.csv"))))
    );
    assert_eq!(Action::parse("exit").unwrap(), Some(Action::Quit));

    assert!(matches!(
        Action::parse("mark late"),
        Err(AppError::InvalidStatus(_))
    ));
    assert!(matches!(
        Action::parse("delete 1"),
        Err(AppError::UnknownCommand(_))
    ));
}

#[test]
fn test_full_session_flow() {
    let (mut s, roster_path, export_path) = session("session_flow", "Ann\nBen\n");

    assert_eq!(
        s.apply(Action::Add("Cat".into())).unwrap(),
        Outcome::Added("Cat".into())
    );
    assert_eq!(
        s.apply(Action::Select("1,3".into())).unwrap(),
        Outcome::Selected(2)
    );

    match s.apply(Action::Mark(AttendanceStatus::Present)).unwrap() {
        Outcome::Marked(summary) => assert_eq!(summary.count, 2),
        other => panic!("unexpected outcome {other:?}"),
    }

    assert_eq!(
        s.apply(Action::Save(None)).unwrap(),
        Outcome::Saved(PathBuf::from(&export_path))
    );

    let today = today().format("%Y-%m-%d").to_string();
    assert_eq!(
        fs::read_to_string(&export_path).unwrap(),
        format!("Ann,{today},Present,\nBen,,\nCat,{today},Present,\n")
    );
    assert_eq!(fs::read_to_string(&roster_path).unwrap(), "Ann\nBen\nCat\n");
}

#[test]
fn test_selection_survives_marking() {
    let (mut s, _, _) = session("session_keep_sel", "Ann\nBen\n");

    s.apply(Action::Select("2".into())).unwrap();
    s.apply(Action::Mark(AttendanceStatus::Present)).unwrap();
    s.apply(Action::Mark(AttendanceStatus::Absent)).unwrap();

    assert_eq!(s.selection(), &[1]);
    assert_eq!(
        s.table().get(1).unwrap().status,
        Some(AttendanceStatus::Absent)
    );
    assert!(s.table().get(0).unwrap().status.is_none());
}

#[test]
fn test_mark_with_empty_selection_fails() {
    let (mut s, _, _) = session("session_no_sel", "Ann\n");
    let before = s.table().clone();

    let err = s.apply(Action::Mark(AttendanceStatus::Present)).unwrap_err();

    assert!(matches!(err, AppError::NoSelection));
    assert_eq!(s.table(), &before);
}

#[test]
fn test_bad_selection_keeps_previous_one() {
    let (mut s, _, _) = session("session_bad_sel", "Ann\nBen\n");

    s.apply(Action::Select("1".into())).unwrap();
    assert!(s.apply(Action::Select("7".into())).is_err());

    assert_eq!(s.selection(), &[0]);
}
