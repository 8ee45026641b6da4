use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use tracing::{info, warn};

use crate::cli::OutputFormat;
use crate::parsing::rdp::TruncatedTripletPolicy;
use crate::reformat::{reformat, ReformatStats};
use crate::utils::files::{create_output, is_stdio, open_input};

#[derive(Args)]
pub struct ReformatArgs {
    /// RDP classifier output (plain or .gz). Use '-' for stdin
    #[arg(required = true)]
    pub input: PathBuf,

    /// Reformatted taxonomy table. Use '-' for stdout
    #[arg(required = true)]
    pub output: PathBuf,

    /// How to handle a final taxon/rank pair with no confidence column
    #[arg(long, value_enum, default_value = "skip")]
    pub truncated_triplets: TruncatedTripletPolicy,
}

/// Execute the reformat
///
/// # Errors
///
/// Returns an error if the input cannot be read, the output cannot be written,
/// or a row is rejected under `--truncated-triplets error`.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ReformatArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let reader = open_input(&args.input)
        .with_context(|| format!("Failed to open input file {}", args.input.display()))?;
    let writer = create_output(&args.output)
        .with_context(|| format!("Failed to create output file {}", args.output.display()))?;

    let stats = reformat(reader, writer, args.truncated_triplets)
        .with_context(|| format!("Failed to reformat {}", args.input.display()))?;

    if verbose {
        info!(
            lines = stats.lines_read,
            records = stats.records_written,
            skipped = stats.lines_skipped,
            "Reformatted {}",
            args.input.display()
        );
    }

    if stats.truncated_triplets > 0 {
        warn!(
            count = stats.truncated_triplets,
            "Dropped incomplete trailing taxonomy triplets"
        );
    }

    // Keep the summary off stdout when the table itself is going there
    if is_stdio(&args.output) {
        print_summary(&mut std::io::stderr(), &args, &stats, format)
    } else {
        print_summary(&mut std::io::stdout(), &args, &stats, format)
    }
}

fn print_summary(
    out: &mut dyn Write,
    args: &ReformatArgs,
    stats: &ReformatStats,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => print_text_summary(out, &args.output)?,
        OutputFormat::Json => print_json_summary(out, args, stats)?,
    }
    Ok(())
}

fn print_text_summary(out: &mut dyn Write, output: &Path) -> std::io::Result<()> {
    writeln!(out, "Reformatted file saved to: {}", output.display())
}

fn print_json_summary(
    out: &mut dyn Write,
    args: &ReformatArgs,
    stats: &ReformatStats,
) -> anyhow::Result<()> {
    let summary = serde_json::json!({
        "input": args.input.display().to_string(),
        "output": args.output.display().to_string(),
        "truncated_triplet_policy": args.truncated_triplets,
        "stats": stats,
    });

    writeln!(out, "{}", serde_json::to_string_pretty(&summary)?)?;
    Ok(())
}
