use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rTally
/// CLI application to track daily game session results with SQLite
#[derive(Parser)]
#[command(
    name = "rtally",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple game session ledger CLI: record daily results, back them up and restore them using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

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

        #[arg(long = "last", value_name = "N", help = "Show only the last N entries")]
        last: Option<usize>,
    },

    /// Record a session result
    Add {
        #[arg(long, help = "Session date (YYYY-MM-DD), defaults to today")]
        date: Option<String>,

        #[arg(long, help = "Where the session was played")]
        location: Option<String>,

        #[arg(
            long,
            help = "Stake as base/multiplier (e.g. 30/10), defaults to the configured stake"
        )]
        stake: Option<String>,

        #[arg(long, help = "Number of hands played")]
        hands: i64,

        #[arg(
            long,
            allow_negative_numbers = true,
            help = "Net result: positive for a win, negative for a loss"
        )]
        net: i64,
    },

    /// Edit an existing session
    Edit {
        #[arg(long, help = "Id of the session to edit")]
        id: String,

        #[arg(long, help = "New session date (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long, help = "New location")]
        location: Option<String>,

        #[arg(long, help = "New stake (base/multiplier)")]
        stake: Option<String>,

        #[arg(long, help = "New hands count")]
        hands: Option<i64>,

        #[arg(long, allow_negative_numbers = true, help = "New net result")]
        net: Option<i64>,
    },

    /// Delete sessions by id or by date
    Del {
        #[arg(long, help = "Id of the session to delete")]
        id: Option<String>,

        #[arg(
            long,
            conflicts_with = "id",
            help = "Delete ALL sessions recorded on this date (YYYY-MM-DD)"
        )]
        date: Option<String>,
    },

    /// List sessions
    List {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,

        #[arg(long, help = "Filter by location (substring match)")]
        location: Option<String>,

        #[arg(long = "summary", help = "Append aggregate totals for the selection")]
        summary: bool,
    },

    /// Back up all sessions to a portable JSON document
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Restore sessions from a backup document (replaces the whole store)
    Restore {
        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Export session data
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
