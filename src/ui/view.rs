//! Text rendering of the attendance table ("Attendance Records").

use crate::core::table::AttendanceTable;
use crate::utils::colors::{CYAN, color_for_optional_field, color_for_status};
use crate::utils::table::{Column, Table};

const EMPTY: &str = "--";

/// Render the table. Rows whose index is in `selected` get a `*` marker.
pub fn render_table(table: &AttendanceTable, selected: &[usize]) -> String {
    let mut view = Table::new(vec![
        Column::new(" "),
        Column::new("#"),
        Column::new("Student Name"),
        Column::new("Date"),
        Column::new("Attendance Status"),
    ]);

    for (i, row) in table.rows().iter().enumerate() {
        let date = row.date_str();
        let status = row.status_str();
        view.add_row(vec![
            if selected.contains(&i) { "*" } else { " " }.to_string(),
            (i + 1).to_string(),
            row.name.clone(),
            if date.is_empty() { EMPTY.to_string() } else { date },
            if status.is_empty() { EMPTY } else { status }.to_string(),
        ]);
    }

    view.render_styled(|r, c, text| match c {
        0 if text == "*" => Some(CYAN),
        3 => Some(color_for_optional_field(text)),
        4 => Some(color_for_status(table.get(r).and_then(|row| row.status))),
        _ => None,
    })
}

pub fn print_table(table: &AttendanceTable, selected: &[usize]) {
    crate::ui::messages::header("Attendance Records");
    if table.is_empty() {
        println!("(no students yet)");
        return;
    }
    print!("{}", render_table(table, selected));
}
