//! Command-line interface for rdp-reformat.
//!
//! ## Usage
//!
//! ```text
//! # Reformat RDP classifier output into a taxonomy table
//! rdp-reformat rdp_output.txt taxonomy.tsv
//!
//! # Gzipped input, table on stdout
//! rdp-reformat rdp_output.txt.gz -
//!
//! # Fail on rows whose last triplet has no confidence column
//! rdp-reformat rdp_output.txt taxonomy.tsv --truncated-triplets error
//!
//! # JSON summary for scripting
//! rdp-reformat rdp_output.txt taxonomy.tsv --format json
//! ```

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

pub mod reformat;

/// Exit status for usage errors
pub const USAGE_EXIT_CODE: i32 = 1;

#[derive(Parser)]
#[command(name = "rdp-reformat")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Reformat RDP classifier output into a Sequence ID/Taxonomy/Confidence table")]
#[command(
    long_about = "rdp-reformat converts tab-delimited RDP classifier output into a three-column table:\n\nSequence ID\tTaxonomy\tConfidence\n\nTaxa whose name and rank are both present are joined with ';', and the confidence of the last taxonomy level is carried through verbatim. Lines with fewer than two fields are skipped."
)]
pub struct Cli {
    #[command(flatten)]
    pub args: reformat::ReformatArgs,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Format of the completion summary
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

impl Cli {
    /// Parse arguments from the process command line.
    ///
    /// Help and version requests print and exit 0 as usual. Any other
    /// argument error, including a wrong number of positional arguments,
    /// reports clap's error on stderr, prints the usage line to stdout and
    /// exits with [`USAGE_EXIT_CODE`].
    pub fn parse_or_exit() -> Self {
        match Self::try_parse() {
            Ok(cli) => cli,
            Err(err) => match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
                _ => {
                    eprint!("{}", err.render());
                    println!("{}", Self::command().render_usage());
                    std::process::exit(USAGE_EXIT_CODE);
                }
            },
        }
    }
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
