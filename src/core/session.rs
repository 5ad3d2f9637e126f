//! Interactive attendance session.
//!
//! A [`Session`] owns everything the attendance window used to hold: the
//! table, the current row selection and where to read/write files. User
//! gestures arrive as [`Action`]s and are applied one at a time; each call
//! returns an [`Outcome`] or the error to show to the user.

use crate::core::add::AddLogic;
use crate::core::mark::{MarkLogic, MarkSummary};
use crate::core::selection::parse_selection;
use crate::core::table::AttendanceTable;
use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, ExportLogic};
use crate::models::AttendanceStatus;
use crate::store::RosterStore;
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;
use std::path::PathBuf;

/// Load the roster into a fresh table, warning about repeated names.
pub fn load_table(roster: &RosterStore) -> AppResult<AttendanceTable> {
    let names = roster.load()?;
    let (table, duplicates) = AttendanceTable::from_names(names);

    for name in duplicates {
        warning(format!(
            "Roster {} lists '{}' more than once; keeping the first entry",
            roster.path().display(),
            name
        ));
    }

    Ok(table)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Add(String),
    List,
    Select(String),
    Mark(AttendanceStatus),
    Save(Option<PathBuf>),
    Help,
    Quit,
}

impl Action {
    /// Parse one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> AppResult<Option<Action>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (cmd, rest) = match line.split_once(char::is_whitespace) {
            Some((c, r)) => (c, r.trim()),
            None => (line, ""),
        };

        let action = match cmd.to_lowercase().as_str() {
            "add" => Action::Add(rest.to_string()),
            "list" | "ls" => Action::List,
            "select" | "sel" => Action::Select(rest.to_string()),
            "present" => Action::Mark(AttendanceStatus::Present),
            "absent" => Action::Mark(AttendanceStatus::Absent),
            "mark" => Action::Mark(
                AttendanceStatus::from_code(rest)
                    .ok_or_else(|| AppError::InvalidStatus(rest.to_string()))?,
            ),
            "save" => Action::Save((!rest.is_empty()).then(|| expand_tilde(rest))),
            "help" | "?" => Action::Help,
            "quit" | "exit" | "q" => Action::Quit,
            other => return Err(AppError::UnknownCommand(other.to_string())),
        };

        Ok(Some(action))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Added(String),
    Listed,
    Selected(usize),
    Marked(MarkSummary),
    Saved(PathBuf),
    Help,
    Quit,
}

pub struct Session {
    table: AttendanceTable,
    roster: RosterStore,
    selection: Vec<usize>,
    export_path: PathBuf,
    trailing_comma: bool,
}

impl Session {
    pub fn new(
        table: AttendanceTable,
        roster: RosterStore,
        export_path: PathBuf,
        trailing_comma: bool,
    ) -> Self {
        Self {
            table,
            roster,
            selection: Vec::new(),
            export_path,
            trailing_comma,
        }
    }

    pub fn table(&self) -> &AttendanceTable {
        &self.table
    }

    pub fn selection(&self) -> &[usize] {
        &self.selection
    }

    pub fn apply(&mut self, action: Action) -> AppResult<Outcome> {
        match action {
            Action::Add(name) => {
                let stored = AddLogic::apply(&mut self.table, &self.roster, &name)?;
                Ok(Outcome::Added(stored))
            }
            Action::List => Ok(Outcome::Listed),
            Action::Select(expr) => {
                self.selection = parse_selection(&expr, self.table.len())?;
                Ok(Outcome::Selected(self.selection.len()))
            }
            Action::Mark(status) => {
                let summary = MarkLogic::apply(&mut self.table, &self.selection, status)?;
                Ok(Outcome::Marked(summary))
            }
            Action::Save(path) => {
                let path = path.unwrap_or_else(|| self.export_path.clone());
                ExportLogic::export(
                    &self.table,
                    &path,
                    ExportFormat::Csv,
                    self.trailing_comma,
                    true,
                )?;
                Ok(Outcome::Saved(path))
            }
            Action::Help => Ok(Outcome::Help),
            Action::Quit => Ok(Outcome::Quit),
        }
    }
}
