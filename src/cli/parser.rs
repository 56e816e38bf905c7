use crate::export::{ExportFormat, ExportTarget};
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for nukistats
/// CLI application to explore Nuki access-log exports
#[derive(Parser)]
#[command(
    name = "nukistats",
    version = env!("CARGO_PKG_VERSION"),
    about = "Filter a Nuki access-log export and chart accesses per member and per day",
    long_about = None
)]
pub struct Cli {
    /// Use a specific configuration file instead of ~/.nukistats/nukistats.conf
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Override the timezone used to group accesses per day (IANA name)
    #[arg(global = true, long = "tz", value_name = "TZ")]
    pub tz: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Date range selection shared by the analysis commands.
#[derive(Args, Debug, Clone, Default)]
pub struct RangeArgs {
    /// First day to include (YYYY-MM-DD, default: day of the oldest entry)
    #[arg(long, value_name = "DATE")]
    pub from: Option<String>,

    /// Last day to include (YYYY-MM-DD, default: day of the newest entry)
    #[arg(long, value_name = "DATE")]
    pub to: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show or initialize the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "init", help = "Write the default configuration file")]
        init: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Show the newest entries of an export
    Preview {
        /// Access-log export (.csv, UTF-16, tab separated)
        file: String,

        #[arg(long, short = 'n', help = "Number of entries to show")]
        rows: Option<usize>,
    },

    /// Accesses per name and per day for a date range
    Report {
        file: String,

        #[command(flatten)]
        range: RangeArgs,

        #[arg(long, requires = "value", help = "Restrict to rows where COLUMN == VALUE")]
        column: Option<String>,

        #[arg(long, requires = "column")]
        value: Option<String>,

        #[arg(long = "names-only", conflicts_with = "dates_only")]
        names_only: bool,

        #[arg(long = "dates-only")]
        dates_only: bool,

        #[arg(long = "rows", help = "Also print the filtered rows")]
        show_rows: bool,
    },

    /// Filter rows by one column, or list the values of that column
    Filter {
        file: String,

        #[command(flatten)]
        range: RangeArgs,

        #[arg(
            long,
            help = "Column to filter by: name, action, trigger, state, autoUnlock"
        )]
        column: String,

        #[arg(long, help = "Value to match exactly (omit to list the distinct values)")]
        value: Option<String>,
    },

    /// Export filtered rows or aggregated counts
    Export {
        file: String,

        #[command(flatten)]
        range: RangeArgs,

        #[arg(long, requires = "value")]
        column: Option<String>,

        #[arg(long, requires = "column")]
        value: Option<String>,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_enum, default_value = "rows")]
        what: ExportTarget,

        #[arg(long = "file", short = 'o', value_name = "FILE")]
        out: String,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
