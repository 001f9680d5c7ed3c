use crate::export::ExportFormat;
use crate::import::ImportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rAttendance
/// CLI application to reconcile badge scans into attendance work-days
#[derive(Parser)]
#[command(
    name = "rattendance",
    version = env!("CARGO_PKG_VERSION"),
    about = "Attendance reconciliation CLI: turn raw badge scans into work-days using SQLite",
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

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

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

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Import raw scans from a file
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_enum,
            help = "Input format (default: guessed from the extension, dump otherwise)"
        )]
        format: Option<ImportFormat>,
    },

    /// Manage the reference shifts
    Shift {
        #[arg(long = "add", value_name = "NAME", help = "Add a shift with the given name")]
        add: Option<String>,

        #[arg(long = "start", value_name = "HH:MM", requires = "add")]
        start: Option<String>,

        #[arg(long = "end", value_name = "HH:MM", requires = "add")]
        end: Option<String>,

        #[arg(
            long = "overnight",
            requires = "add",
            help = "Force the overnight flag (default: end <= start)"
        )]
        overnight: bool,

        #[arg(long = "list", help = "List all shifts")]
        list: bool,

        #[arg(long = "disable", value_name = "ID", help = "Deactivate a shift")]
        disable: Option<i64>,

        #[arg(long = "enable", value_name = "ID", help = "Reactivate a shift")]
        enable: Option<i64>,
    },

    /// Reconcile stored scans into work-days
    Reconcile {
        #[arg(
            long,
            short,
            value_name = "RANGE",
            help = "Work-date range: year/month/day or a custom range (default: current month)"
        )]
        range: Option<String>,

        #[arg(long, short = 'e', value_name = "ID", help = "Only this employee")]
        employee: Option<String>,

        #[arg(long = "save", help = "Store the work-days in the database")]
        save: bool,

        #[arg(long = "outcomes", help = "Print and record late/missing/overtime events")]
        outcomes: bool,

        #[arg(long = "scans", help = "Show the role assigned to every scan")]
        scans: bool,
    },

    /// Attendance statistics for a period
    Summary {
        #[arg(long, short, value_name = "RANGE")]
        range: Option<String>,

        #[arg(long, short = 'e', value_name = "ID")]
        employee: Option<String>,

        #[arg(long = "absent", help = "List the days without any scan")]
        absent: bool,
    },

    /// Export reconciled work-days
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

        #[arg(long, short = 'e', value_name = "ID")]
        employee: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
