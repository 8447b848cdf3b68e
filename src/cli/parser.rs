use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for didledger
/// Monthly ledger of cities, KM and payments, one row per day
#[derive(Parser)]
#[command(
    name = "didledger",
    version = env!("CARGO_PKG_VERSION"),
    about = "A monthly records ledger: cities, KM and payments per day, with totals and CSV export",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration directory and file
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
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

    /// Write a fresh month (default rows, all values empty) to a CSV file
    New {
        #[arg(long, short = 'o', value_name = "FILE")]
        output: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Show the ledger grid and its summary
    Show {
        #[arg(long, value_name = "CSV")]
        file: String,
    },

    /// Coerce numeric columns and rebuild Total Payment
    Recompute {
        #[arg(long, value_name = "CSV")]
        file: String,

        #[arg(
            long,
            short = 'o',
            value_name = "FILE",
            help = "Write the result here instead of overwriting --file"
        )]
        output: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Blank every City and zero every amount, keeping the rows
    Clear {
        #[arg(long, value_name = "CSV")]
        file: String,

        #[arg(long, short = 'o', value_name = "FILE")]
        output: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the monthly sums
    Summary {
        #[arg(long, value_name = "CSV")]
        file: String,
    },

    /// Report negative KM or payment values
    Validate {
        #[arg(long, value_name = "CSV")]
        file: String,
    },

    /// Export the ledger
    Export {
        #[arg(long, value_name = "CSV")]
        file: String,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(
            long,
            short = 'o',
            value_name = "FILE",
            help = "Output file (default: configured export_file)"
        )]
        output: Option<String>,

        #[arg(long, help = "Recompute totals before exporting")]
        recompute: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Interactive editing session (commands read from stdin)
    Session {
        #[arg(long, value_name = "CSV", help = "Start from an existing CSV instead of a fresh month")]
        file: Option<String>,
    },
}
