use chrono::NaiveDate;

/// Current local date: the date written by every mark action.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// ISO `YYYY-MM-DD`.
pub fn format_date(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}
