use crate::core::calculator::hours::DecimalNotation;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for punchsheet
/// CLI application turning a monthly punch-clock workbook into an attendance summary
#[derive(Parser)]
#[command(
    name = "punchsheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "Turn a monthly punch-clock workbook into an attendance summary with daily and monthly work hours",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or per-company settings)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Show or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
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

    /// Generate the monthly attendance summary workbook
    Build {
        #[arg(long, short = 'i', value_name = "FILE", help = "Source workbook (default: search --dir)")]
        input: Option<PathBuf>,

        #[arg(long, short = 'd', value_name = "DIR", help = "Directory to search for the source workbook and to write the output (default: current directory)")]
        dir: Option<PathBuf>,

        #[arg(long, short = 'o', value_name = "FILE", help = "Output workbook")]
        output: Option<PathBuf>,

        #[arg(long, short = 'y', help = "Year (default: from the source file name)")]
        year: Option<i32>,

        #[arg(long, short = 'm', help = "Month 1-12 (default: from the source file name)")]
        month: Option<u32>,

        #[arg(long, short = 'f', help = "Overwrite the output file without asking")]
        force: bool,

        #[arg(long, short = 'v', help = "Print every punched day")]
        verbose: bool,
    },

    /// Run the built-in work-hours check table
    Check,

    /// Compute the hours between a check-in and a check-out
    Hours {
        /// Check-in time (HH:MM or hours as a number)
        check_in: String,

        /// Check-out time (HH:MM or hours as a number)
        check_out: String,

        #[arg(long, value_enum, help = "How to read numbers without ':' (default: from config)")]
        notation: Option<DecimalNotation>,
    },

    /// Print the number of days of a month
    Days {
        year: i32,

        month: u32,
    },
}
