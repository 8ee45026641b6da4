//! # rdp-reformat
//!
//! A library for converting RDP classifier output into a simple taxonomy table.
//!
//! The RDP classifier writes one tab-separated row per sequence: the sequence ID,
//! an unused column, and then a (taxon, rank, confidence) triplet for every
//! taxonomic level. Many downstream tools (QIIME2 among them) instead expect
//!
//! ```text
//! Sequence ID	Taxonomy	Confidence
//! seq1	Bacteria;Firmicutes	0.88
//! ```
//!
//! `rdp-reformat` performs that conversion in a single streaming pass.
//!
//! ## Rules
//!
//! - **Taxonomy path**: taxa with both a name and a rank, joined with `;`
//! - **Confidence**: taken verbatim from the last triplet, never parsed
//! - **Malformed lines**: rows with fewer than two fields are skipped
//! - **Truncated triplets**: a final taxon/rank with no confidence is dropped,
//!   or rejected, depending on [`TruncatedTripletPolicy`]
//!
//! ## Example
//!
//! ```rust
//! use rdp_reformat::{reformat, TruncatedTripletPolicy};
//!
//! let input = "seq1\tgenus\tBacteria\tdomain\t0.95\tFirmicutes\tphylum\t0.88\n";
//! let mut output = Vec::new();
//! reformat(input.as_bytes(), &mut output, TruncatedTripletPolicy::Skip).unwrap();
//!
//! let table = String::from_utf8(output).unwrap();
//! assert!(table.ends_with("seq1\tBacteria;Firmicutes\t0.88\n"));
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Triplet, taxonomy entry, and output record types
//! - [`parsing`]: The per-line RDP row parser
//! - [`reformat`]: Streaming conversion from reader to writer
//! - [`utils`]: Opening plain, gzipped, and stdio streams
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod parsing;
pub mod reformat;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::record::{ReformattedRecord, TaxonomyEntry, Triplet};
pub use crate::parsing::rdp::{parse_line, ParseError, TruncatedTripletPolicy};
pub use crate::reformat::{reformat, ReformatError, ReformatStats, Records, OUTPUT_HEADER};
