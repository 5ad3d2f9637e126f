//! ANSI color helper utilities for terminal output.

use crate::models::AttendanceStatus;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const CYAN: &str = "\x1b[36m";

/// Present → green, Absent → red, not marked → grey.
pub fn color_for_status(status: Option<AttendanceStatus>) -> &'static str {
    match status {
        Some(AttendanceStatus::Present) => GREEN,
        Some(AttendanceStatus::Absent) => RED,
        None => GREY,
    }
}

/// Returns GREY when the field is empty, RESET otherwise.
pub fn color_for_optional_field(value: &str) -> &'static str {
    if value.trim().is_empty() || value.trim() == "--" {
        GREY
    } else {
        RESET
    }
}
