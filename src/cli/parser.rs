use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for waterlog
/// CLI application to track daily water intake with SQLite
#[derive(Parser)]
#[command(
    name = "waterlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple water intake logging CLI: record drinks and track progress against a daily goal",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override preference store path
    #[arg(global = true, long = "settings", hide = true)]
    pub settings: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

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

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Record a water intake
    Add {
        /// Amount of water in milliliters (positive integer)
        amount_ml: i64,

        /// Date of the intake (YYYY-MM-DD, default: today)
        #[arg(long = "date")]
        date: Option<String>,

        /// Time of the intake (HH:MM, default: now)
        #[arg(long = "time")]
        time: Option<String>,
    },

    /// Delete a recorded entry by ID
    Del {
        /// Entry id (shown by `list --date`)
        id: i64,

        #[arg(long = "yes", short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// List daily summaries or a day's entries
    List {
        /// Show the entries of a specific date (YYYY-MM-DD)
        #[arg(long = "date")]
        date: Option<String>,

        #[arg(long = "today", help = "Show today's total against the daily goal")]
        today: bool,
    },

    /// Show or change the daily goal
    Goal {
        /// New daily goal in milliliters
        #[arg(long = "set", value_name = "ML")]
        set: Option<i64>,

        #[arg(long = "reset", help = "Reset the daily goal to the default (2000 ml)")]
        reset: bool,
    },

    /// Export daily summaries or entries
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'e', help = "Export individual entries instead of summaries")]
        entries: bool,

        #[arg(long, short = 'f', help = "Overwrite the output file if it exists")]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },
}
