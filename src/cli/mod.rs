use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::HighlightTerms;

mod commands;
mod errors;
mod handlers;
mod types;

pub use commands::*;
pub use errors::{CliError, CliResult};
pub use handlers::*;
pub use types::*;

/// Exit status when the query was valid but nothing matched
pub const EXIT_NO_MATCH: u8 = 1;
/// Exit status for an invalid query or any other failure
pub const EXIT_ERROR: u8 = 2;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Directory holding config.yaml.
    /// Defaults to $BOOLMARK_BASE_PATH or ~/.config/boolmark
    #[clap(long, global = true)]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the expression tree of a query as JSON
    Parse {
        /// Boolean query, e.g. '(kuppens and vaan) or aarts'
        query: String,
    },

    /// Print every term of a query as a JSON array
    Terms {
        /// Boolean query
        query: String,
    },

    /// Test a single text against a query
    Match {
        /// Boolean query
        query: String,

        /// Text to test
        #[clap(allow_hyphen_values = true)]
        text: String,

        /// Include the highlighted text in the output
        #[clap(long, default_value = "false")]
        highlight: bool,

        /// Which terms to mark. Overrides the config file
        #[clap(long, value_enum)]
        highlight_terms: Option<HighlightTerms>,
    },

    /// Print the lines of a file (or stdin) that match a query
    Filter {
        /// Boolean query
        query: String,

        /// Input file. Reads stdin when omitted
        file: Option<PathBuf>,

        /// Group lines under headings and hide headings
        /// without any matching line
        #[clap(short, long, default_value = "false")]
        sections: bool,

        /// Print the count only
        #[clap(short = 'c', long, default_value = "false")]
        count: bool,

        /// Print the full report as JSON
        #[clap(long, default_value = "false")]
        json: bool,

        #[clap(flatten)]
        highlight_args: HighlightArgs,
    },
}
