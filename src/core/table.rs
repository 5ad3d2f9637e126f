//! In-memory attendance table.
//!
//! Rows keep insertion order and are never removed during a session.
//! Student names are non-empty and unique (exact, case-sensitive match).

use crate::errors::{AppError, AppResult};
use crate::models::{AttendanceRow, AttendanceStatus};
use chrono::NaiveDate;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceTable {
    rows: Vec<AttendanceRow>,
}

impl AttendanceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from roster names.
    ///
    /// Blank names are skipped and repeated names are kept once.
    /// Returns the table together with the names that were dropped as duplicates.
    pub fn from_names<I, S>(names: I) -> (Self, Vec<String>)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::new();
        let mut duplicates = Vec::new();

        for name in names {
            let name = name.into();
            if name.trim().is_empty() {
                continue;
            }
            if table.contains(&name) {
                duplicates.push(name);
                continue;
            }
            table.rows.push(AttendanceRow::new(name));
        }

        (table, duplicates)
    }

    pub fn rows(&self) -> &[AttendanceRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&AttendanceRow> {
        self.rows.get(index)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rows.iter().any(|r| r.name == name)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.rows.iter().position(|r| r.name == name)
    }

    /// Validate a candidate name without touching the table.
    ///
    /// Returns the trimmed name that would be stored.
    pub fn check_new_name(&self, name: &str) -> AppResult<String> {
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err(AppError::EmptyName);
        }

        // the roster stores one name per line
        if trimmed.contains(['\n', '\r']) {
            return Err(AppError::MultiLineName);
        }

        if self.contains(trimmed) {
            return Err(AppError::DuplicateStudent(trimmed.to_string()));
        }

        Ok(trimmed.to_string())
    }

    /// Append a new student with empty date and status.
    pub fn add_student(&mut self, name: &str) -> AppResult<&AttendanceRow> {
        let name = self.check_new_name(name)?;
        self.rows.push(AttendanceRow::new(name));
        let last = self.rows.len() - 1;
        Ok(&self.rows[last])
    }

    /// Set `date` and `status` on every selected row, overwriting previous values.
    ///
    /// The whole selection is validated first: on error no row is touched.
    /// Repeated indices are marked once. Returns the number of marked rows.
    pub fn mark(
        &mut self,
        selected: &[usize],
        status: AttendanceStatus,
        date: NaiveDate,
    ) -> AppResult<usize> {
        if selected.is_empty() {
            return Err(AppError::NoSelection);
        }

        if let Some(bad) = selected.iter().find(|&&i| i >= self.rows.len()) {
            // report 1-based, as shown in the table
            return Err(AppError::InvalidRow(bad + 1));
        }

        let mut indices = selected.to_vec();
        indices.sort_unstable();
        indices.dedup();

        for &i in &indices {
            let row = &mut self.rows[i];
            row.date = Some(date);
            row.status = Some(status);
        }

        Ok(indices.len())
    }
}
