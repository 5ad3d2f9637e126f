use crate::core::table::AttendanceTable;
use crate::errors::AppResult;
use crate::models::AttendanceStatus;
use crate::utils::date::today;
use chrono::NaiveDate;

/// Result of a mark action, used for messages and the audit log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkSummary {
    pub count: usize,
    pub status: AttendanceStatus,
    pub date: NaiveDate,
}

pub struct MarkLogic;

impl MarkLogic {
    /// Mark the selected rows with `status` for the current local date.
    pub fn apply(
        table: &mut AttendanceTable,
        selected: &[usize],
        status: AttendanceStatus,
    ) -> AppResult<MarkSummary> {
        Self::apply_on(table, selected, status, today())
    }

    pub fn apply_on(
        table: &mut AttendanceTable,
        selected: &[usize],
        status: AttendanceStatus,
        date: NaiveDate,
    ) -> AppResult<MarkSummary> {
        let count = table.mark(selected, status, date)?;
        Ok(MarkSummary {
            count,
            status,
            date,
        })
    }
}
