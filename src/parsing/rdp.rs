//! Parser for RDP classifier rows.
//!
//! Each row is `id \t <ignored> \t taxon \t rank \t confidence \t taxon \t ...`.
//! Parsing is a pure function of one line: no state carries between rows.

use serde::Serialize;
use thiserror::Error;

use crate::core::record::{ReformattedRecord, Triplet};

/// Column delimiter in classifier output
pub const FIELD_DELIMITER: char = '\t';

/// Index of the first taxon column
const FIRST_TRIPLET_INDEX: usize = 2;

/// Columns per (taxon, rank, confidence) group
const TRIPLET_WIDTH: usize = 3;

/// Minimum number of fields for a row to be reformatted at all
const MIN_FIELDS: usize = 2;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error(
        "Truncated taxonomy triplet for sequence '{sequence_id}': taxon and rank at column {index} \
         but no confidence column (row has {fields} fields)"
    )]
    TruncatedTriplet {
        sequence_id: String,
        index: usize,
        fields: usize,
    },
}

/// What to do with a trailing triplet that has a taxon and rank but no confidence
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum TruncatedTripletPolicy {
    /// Drop the incomplete triplet; the row is still written
    #[default]
    Skip,
    /// Fail on the row
    Error,
}

/// Result of walking one row's triplets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    pub record: ReformattedRecord,
    /// Whether an incomplete trailing triplet was dropped
    pub truncated: bool,
}

/// Reformat one classifier row.
///
/// Returns `Ok(None)` for rows with fewer than two fields, which are skipped.
///
/// Only trailing `\r` and `\n` are removed before splitting. Leading spaces
/// and trailing tabs are kept as part of the fields, so `" seq"` stays the
/// sequence ID and a line of a single `\t` is a two-field row with an empty ID.
///
/// # Errors
///
/// Returns `ParseError::TruncatedTriplet` when the row ends in a taxon/rank pair
/// without a confidence and `policy` is [`TruncatedTripletPolicy::Error`].
pub fn parse_line(
    line: &str,
    policy: TruncatedTripletPolicy,
) -> Result<Option<ReformattedRecord>, ParseError> {
    Ok(parse_line_detailed(line, policy)?.map(|parsed| parsed.record))
}

/// Same as [`parse_line`], additionally reporting whether a truncated triplet
/// was dropped under [`TruncatedTripletPolicy::Skip`].
///
/// # Errors
///
/// See [`parse_line`].
pub fn parse_line_detailed(
    line: &str,
    policy: TruncatedTripletPolicy,
) -> Result<Option<ParsedLine>, ParseError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();

    if fields.len() < MIN_FIELDS {
        return Ok(None);
    }

    let mut record = ReformattedRecord::new(fields[0]);
    let mut truncated = false;

    for i in (FIRST_TRIPLET_INDEX..fields.len()).step_by(TRIPLET_WIDTH) {
        if i + 1 >= fields.len() {
            // A lone taxon with no rank is not a triplet
            break;
        }

        let Some(&confidence) = fields.get(i + 2) else {
            match policy {
                TruncatedTripletPolicy::Skip => {
                    truncated = true;
                    break;
                }
                TruncatedTripletPolicy::Error => {
                    return Err(ParseError::TruncatedTriplet {
                        sequence_id: record.sequence_id,
                        index: i,
                        fields: fields.len(),
                    });
                }
            }
        };

        let triplet = Triplet::new(fields[i], fields[i + 1], confidence);
        if triplet.entry().is_assigned() {
            record.taxonomy.push(triplet.taxon.to_string());
        }

        // Last triplet wins, even when its taxon was not assigned
        record.confidence = Some(triplet.confidence.to_string());
    }

    Ok(Some(ParsedLine { record, truncated }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reformat(line: &str) -> Option<String> {
        parse_line(line, TruncatedTripletPolicy::Skip)
            .unwrap()
            .map(|r| r.to_string())
    }

    #[test]
    fn test_two_triplets() {
        let line = "seq1\tgenus\tBacteria\tdomain\t0.95\tFirmicutes\tphylum\t0.88";
        let record = parse_line(line, TruncatedTripletPolicy::Skip)
            .unwrap()
            .unwrap();

        assert_eq!(record.sequence_id, "seq1");
        assert_eq!(record.taxonomy, vec!["Bacteria", "Firmicutes"]);
        assert_eq!(record.confidence.as_deref(), Some("0.88"));
        assert_eq!(record.to_string(), "seq1\tBacteria;Firmicutes\t0.88");
    }

    #[test]
    fn test_single_field_is_skipped() {
        assert_eq!(reformat("seq2"), None);
        assert_eq!(reformat("seq2\n"), None);
    }

    #[test]
    fn test_empty_line_is_skipped() {
        assert_eq!(reformat(""), None);
        assert_eq!(reformat("\r\n"), None);
    }

    #[test]
    fn test_empty_taxon_still_sets_confidence() {
        assert_eq!(reformat("seq3\tx\t\tdomain\t0.5").as_deref(), Some("seq3\t\t0.5"));
    }

    #[test]
    fn test_empty_rank_drops_taxon() {
        assert_eq!(
            reformat("seq3\t\tBacteria\t\t0.9\tFirmicutes\tphylum\t0.7").as_deref(),
            Some("seq3\tFirmicutes\t0.7")
        );
    }

    #[test]
    fn test_last_confidence_wins() {
        // The last triplet has no taxon but its confidence is still taken
        let line = "seq\t\tBacteria\tdomain\t1.0\tFirmicutes\tphylum\t0.9\t\t\t0.1";
        assert_eq!(reformat(line).as_deref(), Some("seq\tBacteria;Firmicutes\t0.1"));
    }

    #[test]
    fn test_two_fields_has_no_triplets() {
        let record = parse_line("seq5\t-", TruncatedTripletPolicy::Skip)
            .unwrap()
            .unwrap();
        assert!(record.taxonomy.is_empty());
        assert!(record.confidence.is_none());
        assert_eq!(record.to_string(), "seq5\t\t");
    }

    #[test]
    fn test_lone_trailing_taxon_is_ignored() {
        assert_eq!(
            reformat("seq\t\tBacteria\tdomain\t1.0\tFirmicutes").as_deref(),
            Some("seq\tBacteria\t1.0")
        );
        assert_eq!(reformat("seq\t\tBacteria").as_deref(), Some("seq\t\t"));
    }

    #[test]
    fn test_truncated_triplet_skip() {
        let line = "seq4\t\tBacteria\tdomain\t1.0\tFirmicutes\tphylum";
        let parsed = parse_line_detailed(line, TruncatedTripletPolicy::Skip)
            .unwrap()
            .unwrap();

        assert!(parsed.truncated);
        assert_eq!(parsed.record.to_string(), "seq4\tBacteria\t1.0");
    }

    #[test]
    fn test_truncated_first_triplet_skip() {
        let parsed = parse_line_detailed("seq4\t\tBacteria\tdomain", TruncatedTripletPolicy::Skip)
            .unwrap()
            .unwrap();

        assert!(parsed.truncated);
        assert_eq!(parsed.record.to_string(), "seq4\t\t");
    }

    #[test]
    fn test_truncated_triplet_error() {
        let line = "seq4\t\tBacteria\tdomain\t1.0\tFirmicutes\tphylum";
        let err = parse_line(line, TruncatedTripletPolicy::Error).unwrap_err();

        match err {
            ParseError::TruncatedTriplet {
                ref sequence_id,
                index,
                fields,
            } => {
                assert_eq!(sequence_id, "seq4");
                assert_eq!(index, 5);
                assert_eq!(fields, 7);
            }
        }
        assert!(err.to_string().contains("seq4"));
    }

    #[test]
    fn test_complete_row_is_not_truncated() {
        let line = "seq1\tgenus\tBacteria\tdomain\t0.95";
        let parsed = parse_line_detailed(line, TruncatedTripletPolicy::Error)
            .unwrap()
            .unwrap();
        assert!(!parsed.truncated);
    }

    #[test]
    fn test_only_line_terminators_are_trimmed() {
        assert_eq!(reformat("\t").as_deref(), Some("\t\t"));
        assert_eq!(
            reformat(" seq\t\tA\td\t1\t\t\t").as_deref(),
            Some(" seq\tA\t")
        );
    }

    #[test]
    fn test_crlf_matches_lf() {
        let lf = reformat("seq1\t\tBacteria\tdomain\t0.95\n");
        let crlf = reformat("seq1\t\tBacteria\tdomain\t0.95\r\n");
        assert_eq!(lf, crlf);
        assert_eq!(lf.as_deref(), Some("seq1\tBacteria\t0.95"));
    }

    #[test]
    fn test_confidence_is_verbatim() {
        assert_eq!(
            reformat("seq\t\tBacteria\tdomain\t1.00e0").as_deref(),
            Some("seq\tBacteria\t1.00e0")
        );
    }

    #[test]
    fn test_taxonomy_depth_bounded_by_triplets() {
        let line = "seq\t\tA\tdomain\t1\tB\t\t1\t\tgenus\t1\tD\tspecies\t0.5";
        let record = parse_line(line, TruncatedTripletPolicy::Skip)
            .unwrap()
            .unwrap();
        // Four complete triplets, two with both taxon and rank
        assert_eq!(record.taxonomy, vec!["A", "D"]);
        assert!(record.taxonomy.len() <= 4);
    }
}
