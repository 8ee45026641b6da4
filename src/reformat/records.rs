use std::io::{BufRead, Lines};

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::core::record::ReformattedRecord;
use crate::parsing::rdp::{parse_line_detailed, ParseError, TruncatedTripletPolicy};

#[derive(Error, Debug)]
pub enum ReformatError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: ParseError,
    },
}

/// Counters collected over one pass through a classifier file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReformatStats {
    /// Input lines read
    pub lines_read: usize,
    /// Output rows written (excluding the header)
    pub records_written: usize,
    /// Lines with fewer than two fields
    pub lines_skipped: usize,
    /// Incomplete trailing triplets dropped under the `skip` policy
    pub truncated_triplets: usize,
}

/// Lazy iterator of reformatted records over the lines of a reader.
///
/// Malformed lines are filtered out rather than reported, so the iterator
/// yields one item per usable input line. It reads a line only when the next
/// record is requested and cannot be rewound.
pub struct Records<R> {
    lines: Lines<R>,
    policy: TruncatedTripletPolicy,
    line_number: usize,
    stats: ReformatStats,
}

impl<R: BufRead> Records<R> {
    pub fn new(reader: R, policy: TruncatedTripletPolicy) -> Self {
        Self {
            lines: reader.lines(),
            policy,
            line_number: 0,
            stats: ReformatStats::default(),
        }
    }

    /// Counters so far. `records_written` is left to the writer.
    pub fn into_stats(self) -> ReformatStats {
        self.stats
    }
}

impl<R: BufRead> Iterator for Records<R> {
    type Item = Result<ReformattedRecord, ReformatError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };
            self.line_number += 1;
            self.stats.lines_read += 1;

            match parse_line_detailed(&line, self.policy) {
                Ok(Some(parsed)) => {
                    if parsed.truncated {
                        self.stats.truncated_triplets += 1;
                        warn!(
                            line = self.line_number,
                            sequence = %parsed.record.sequence_id,
                            "Dropping incomplete trailing taxonomy triplet"
                        );
                    }
                    return Some(Ok(parsed.record));
                }
                Ok(None) => {
                    self.stats.lines_skipped += 1;
                    debug!(
                        line = self.line_number,
                        "Skipping malformed line with fewer than 2 fields"
                    );
                }
                Err(source) => {
                    return Some(Err(ReformatError::Parse {
                        line: self.line_number,
                        source,
                    }));
                }
            }
        }
    }
}
