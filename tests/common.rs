#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rat() -> Command {
    cargo_bin_cmd!("rattendance")
}

/// Unique path inside the system temp dir; any previous file is removed.
pub fn temp_file(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("rattendance_{}.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Roster + audit DB paths for one test, roster pre-filled with `names`.
pub struct Fixture {
    pub roster: String,
    pub db: String,
}

impl Fixture {
    pub fn new(name: &str, names: &[&str]) -> Self {
        let roster = temp_file(&format!("{name}_students"), "txt");
        let db = temp_file(name, "sqlite");
        if !names.is_empty() {
            let mut content = names.join("\n");
            content.push('\n');
            fs::write(&roster, content).expect("write roster");
        }
        Self { roster, db }
    }

    /// Command with `--roster` and `--db` already set.
    pub fn cmd(&self) -> Command {
        let mut c = rat();
        c.args(["--roster", &self.roster, "--db", &self.db]);
        c
    }

    pub fn roster_lines(&self) -> Vec<String> {
        fs::read_to_string(&self.roster)
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }
}

pub fn today() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}
