use crate::export::ReportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for overwatcher
#[derive(Parser)]
#[command(
    name = "overwatcher",
    version = env!("CARGO_PKG_VERSION"),
    about = "Work time logging: record when you start and stop, breaks and overtime reasons",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file read or written)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Pin the clock to a local timestamp (YYYY-MM-DDTHH:MM[:SS])
    #[arg(global = true, long = "now", hide = true)]
    pub now: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use")]
        editor: Option<String>,
    },

    /// Log workday start (enter = now)
    Start,

    /// Log workday end (leave = now); can be called multiple times a day
    Stop,

    /// Update a day's worklog; omitted fields are left untouched
    Update {
        #[arg(long, help = "Day to update (YYYY-Mon-DD), default today")]
        day: Option<String>,

        #[arg(long, help = "Enter time (e.g. 9:00AM)")]
        enter: Option<String>,

        #[arg(long, help = "Leave time (e.g. 5:30PM)")]
        leave: Option<String>,

        #[arg(
            long = "break",
            conflicts_with = "add_break",
            help = "Total break time for the day (e.g. 1h, 45m, 1h15m)"
        )]
        breaks: Option<String>,

        #[arg(long = "add-break", help = "Add to the day's break time (e.g. 15m)")]
        add_break: Option<String>,

        #[arg(long, help = "Reason of overtime")]
        reason: Option<String>,
    },

    /// List worklogs over a date range with totals
    Query {
        #[arg(long, conflicts_with_all = ["week", "month"], help = "First day (YYYY-Mon-DD)")]
        from: Option<String>,

        #[arg(long, conflicts_with_all = ["week", "month"], help = "Last day (YYYY-Mon-DD)")]
        to: Option<String>,

        #[arg(long, conflicts_with = "month", help = "Current week (Monday to Sunday)")]
        week: bool,

        #[arg(long, help = "Current month")]
        month: bool,
    },

    /// Show start, worktime and overtime for a day
    Status {
        #[arg(long, help = "Day to query (YYYY-Mon-DD), default today")]
        day: Option<String>,
    },

    /// Generate a report through a template, or export CSV/JSON
    Report {
        #[arg(long, conflicts_with_all = ["from", "to"], help = "Single day (YYYY-Mon-DD)")]
        day: Option<String>,

        #[arg(long, help = "First day (YYYY-Mon-DD)")]
        from: Option<String>,

        #[arg(long, help = "Last day (YYYY-Mon-DD)")]
        to: Option<String>,

        #[arg(
            long,
            value_name = "FILE",
            help = "Template file with {day}, {total}, ... placeholders (text format only)"
        )]
        template: Option<String>,

        #[arg(long, value_enum, default_value = "text")]
        format: ReportFormat,

        #[arg(long, value_name = "FILE", help = "Write to FILE instead of stdout")]
        out: Option<String>,

        #[arg(long, short = 'f', requires = "out", help = "Overwrite an existing output file")]
        force: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
