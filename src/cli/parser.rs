use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for timeclock
#[derive(Parser)]
#[command(
    name = "timeclock",
    version = env!("CARGO_PKG_VERSION"),
    about = "A personal time clock: track sessions, aggregate hours, mirror to a Google Sheet",
    long_about = None
)]
pub struct Cli {
    /// Override the record file path (useful for tests or custom data files)
    #[arg(global = true, long = "data")]
    pub data: Option<String>,

    /// Act as this user instead of the configured one
    #[arg(global = true, long = "user")]
    pub user: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the record file and configuration
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,
    },

    /// Clock in (start a new session)
    #[command(name = "in")]
    ClockIn {
        #[arg(long, help = "Notes to attach to the session")]
        notes: Option<String>,
    },

    /// Clock out (close the open session)
    #[command(name = "out")]
    ClockOut {
        #[arg(long, help = "Notes to attach to the session")]
        notes: Option<String>,
    },

    /// Add a complete session manually
    Add {
        /// Date of the session (YYYY-MM-DD)
        date: String,

        /// Clock-in time (HH:MM)
        #[arg(long = "in", help = "Clock-in time (HH:MM)")]
        start: String,

        /// Clock-out time (HH:MM)
        #[arg(long = "out", help = "Clock-out time (HH:MM)")]
        end: String,

        #[arg(long, help = "Notes to attach to the session")]
        notes: Option<String>,
    },

    /// Show whether a session is open and for how long
    Status,

    /// List recorded sessions
    List {
        #[arg(
            long,
            short,
            help = "Filter by day (YYYY-MM-DD), month (YYYY-MM), year (YYYY), or a start:end range"
        )]
        period: Option<String>,

        #[arg(long = "today", help = "Show only today's sessions")]
        today: bool,
    },

    /// Delete a session by id
    Del {
        /// Record id (shown by `list`)
        id: i64,
    },

    /// Aggregate hours: today, this week, this month, all time
    Summary {
        #[arg(long, help = "Range start date (YYYY-MM-DD)")]
        from: Option<String>,

        #[arg(long, help = "Range end date (YYYY-MM-DD)")]
        to: Option<String>,

        #[arg(long, help = "Show daily/weekly/monthly breakdowns")]
        breakdown: bool,
    },

    /// Export sessions to a file
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite output file without confirmation")]
        force: bool,
    },

    /// Write a backup copy of the record file
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing backup file")]
        force: bool,
    },

    /// Restore records from a backup file
    Restore {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Replace existing records instead of merging")]
        replace: bool,
    },

    /// Overwrite the remote sheet with every record (manual full sync)
    Sync,

    /// Run the REST API server
    Serve {
        #[arg(long, default_value_t = 3000)]
        port: u16,
    },
}
