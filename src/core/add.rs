use crate::core::table::AttendanceTable;
use crate::errors::AppResult;
use crate::store::RosterStore;

pub struct AddLogic;

impl AddLogic {
    /// Add a student to the table and persist it to the roster.
    ///
    /// The roster line is written before the row is inserted: if the write
    /// fails the table is left unchanged. Returns the stored (trimmed) name.
    pub fn apply(table: &mut AttendanceTable, roster: &RosterStore, name: &str) -> AppResult<String> {
        let name = table.check_new_name(name)?;
        roster.append(&name)?;
        table.add_student(&name)?;
        Ok(name)
    }
}
