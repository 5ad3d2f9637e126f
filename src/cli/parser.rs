use crate::export::ExportFormat;
use crate::models::AttendanceStatus;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rattendance
/// CLI application to keep a student roster and record attendance
#[derive(Parser)]
#[command(
    name = "rattendance",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple attendance CLI: keep a student roster, mark students present or absent and save the records to CSV",
    long_about = None
)]
pub struct Cli {
    /// Override roster file path (useful for tests or multiple classes)
    #[arg(global = true, long = "roster", value_name = "FILE")]
    pub roster: Option<String>,

    /// Override audit log database path
    #[arg(global = true, long = "db", value_name = "FILE")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize configuration, audit log and an empty roster
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default value")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Add a student to the roster
    Add {
        /// Student name (surrounding whitespace is ignored)
        name: String,
    },

    /// Show the attendance table
    List,

    /// Mark selected students present or absent for today
    Mark {
        /// Attendance status
        #[arg(value_enum)]
        status: AttendanceStatus,

        /// Rows to mark: "all", "3", "2-5" or "1,3,6-8" (1-based, as shown by `list`)
        #[arg(long, short = 'r', value_name = "ROWS")]
        rows: Option<String>,

        /// Student to mark, by exact name (repeatable)
        #[arg(long = "student", short = 's', value_name = "NAME")]
        students: Vec<String>,

        /// Save the marked table to the export file
        #[arg(long)]
        save: bool,

        /// Output file used with --save (default: configured export file)
        #[arg(long, value_name = "FILE", requires = "save")]
        file: Option<String>,

        /// Output format used with --save
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,
    },

    /// Export the attendance table
    Export {
        /// Export format: csv, json
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path (default: configured export file)
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Start an interactive attendance session
    Shell,

    /// Create a backup copy of the roster file
    Backup {
        /// Destination file path
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Compress the backup (zip)
        #[arg(long)]
        compress: bool,

        /// Overwrite destination without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
