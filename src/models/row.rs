use crate::models::status::AttendanceStatus;
use crate::utils::date::format_date;
use chrono::NaiveDate;
use serde::Serialize;

/// One line of the attendance table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendanceRow {
    pub name: String,
    pub date: Option<NaiveDate>,
    pub status: Option<AttendanceStatus>,
}

impl AttendanceRow {
    /// New row with empty date and status.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            date: None,
            status: None,
        }
    }

    /// Date as `YYYY-MM-DD`, or empty string when the row is not marked yet.
    pub fn date_str(&self) -> String {
        self.date.map(format_date).unwrap_or_default()
    }

    pub fn status_str(&self) -> &'static str {
        self.status.map(|s| s.as_str()).unwrap_or("")
    }

    pub fn is_marked(&self) -> bool {
        self.status.is_some()
    }
}
