use std::io::{BufRead, Write};

use tracing::debug;

use crate::parsing::rdp::TruncatedTripletPolicy;
use crate::reformat::records::{ReformatError, ReformatStats, Records};

/// First line of every reformatted table
pub const OUTPUT_HEADER: &str = "Sequence ID\tTaxonomy\tConfidence";

/// Reformat classifier output from `reader` into `writer`.
///
/// Writes [`OUTPUT_HEADER`] and then one row per usable input line, reading,
/// transforming and writing a single line at a time. The writer is flushed
/// before returning.
///
/// # Errors
///
/// Returns `ReformatError::Io` if reading or writing fails, or
/// `ReformatError::Parse` if a row is rejected under
/// [`TruncatedTripletPolicy::Error`].
pub fn reformat<R: BufRead, W: Write>(
    reader: R,
    mut writer: W,
    policy: TruncatedTripletPolicy,
) -> Result<ReformatStats, ReformatError> {
    writeln!(writer, "{OUTPUT_HEADER}")?;

    let mut records = Records::new(reader, policy);
    let mut written = 0;

    for result in &mut records {
        let record = result?;
        writeln!(writer, "{record}")?;
        written += 1;
    }

    writer.flush()?;

    let mut stats = records.into_stats();
    stats.records_written = written;

    debug!(
        lines_read = stats.lines_read,
        records_written = stats.records_written,
        lines_skipped = stats.lines_skipped,
        truncated_triplets = stats.truncated_triplets,
        "Finished reformatting"
    );

    Ok(stats)
}
