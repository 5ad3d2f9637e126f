use crate::config::Config;
use crate::core::session::{Action, Outcome, Session, load_table};
use crate::core::table::AttendanceTable;
use crate::db::log::record;
use crate::errors::{AppError, AppResult};
use crate::store::RosterStore;
use crate::ui::messages::{error, info, prompt, success};
use crate::ui::view::print_table;
use crate::utils::date::format_date;
use crate::utils::path::expand_tilde;
use std::io::{self, BufRead};

const HELP: &str = "\
Commands:
  add NAME        add a student to the roster
  list            show the attendance table (* = selected)
  select ROWS     select rows: all, none, 3, 2-5, 1,3,6-8
  present         mark the selected rows present for today
  absent          mark the selected rows absent for today
  save [FILE]     save the table (default: configured export file)
  help            show this help
  quit            leave the session";

/// Start an interactive session on stdin.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let roster = RosterStore::new(expand_tilde(&cfg.roster_file));

    // a broken roster must not prevent the session from starting
    let table = match load_table(&roster) {
        Ok(t) => t,
        Err(e) => {
            error(e);
            AttendanceTable::new()
        }
    };

    let mut session = Session::new(
        table,
        roster,
        expand_tilde(&cfg.export_file),
        cfg.trailing_comma,
    );

    info("Attendance session started. Type `help` for the list of commands.");
    print_table(session.table(), session.selection());

    let stdin = io::stdin();
    run_loop(&mut session, stdin.lock(), &cfg.database)
}

/// Read actions line by line until `quit` or end of input.
/// Every failed action (or unreadable line) is reported and the loop goes on.
pub fn run_loop<R: BufRead>(session: &mut Session, mut input: R, database: &str) -> AppResult<()> {
    prompt("attendance");

    let mut buf = Vec::new();

    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let line = match std::str::from_utf8(&buf) {
            Ok(l) => l,
            Err(_) => {
                error(AppError::InvalidEncoding);
                prompt("attendance");
                continue;
            }
        };

        let outcome = Action::parse(line).and_then(|action| match action {
            Some(a) => session.apply(a).map(Some),
            None => Ok(None),
        });

        match outcome {
            Ok(Some(Outcome::Quit)) => return Ok(()),
            Ok(Some(o)) => report(session, &o, database),
            Ok(None) => {}
            Err(e) => error(e),
        }

        prompt("attendance");
    }

    println!();
    Ok(())
}

fn report(session: &Session, outcome: &Outcome, database: &str) {
    match outcome {
        Outcome::Added(name) => {
            success(format!("Student '{name}' added"));
            record(database, "add", name, "Student added from shell");
        }
        Outcome::Listed => print_table(session.table(), session.selection()),
        Outcome::Selected(n) => info(format!("{n} row(s) selected")),
        Outcome::Marked(summary) => {
            success(format!(
                "Marked {} student(s) {} on {}",
                summary.count,
                summary.status,
                format_date(summary.date)
            ));
            record(
                database,
                "mark",
                summary.status.as_str(),
                &format!("{} row(s) on {}", summary.count, format_date(summary.date)),
            );
            print_table(session.table(), session.selection());
        }
        Outcome::Saved(path) => {
            record(
                database,
                "save",
                &path.to_string_lossy(),
                &format!("{} rows saved", session.table().len()),
            );
        }
        Outcome::Help => println!("{HELP}"),
        Outcome::Quit => {}
    }
}
