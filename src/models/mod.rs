pub mod row;
pub mod status;

pub use row::AttendanceRow;
pub use status::AttendanceStatus;
