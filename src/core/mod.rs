//! Core data types for reformatting RDP classifier output.
//!
//! - [`Triplet`]: One (taxon, rank, confidence) group from a classifier row
//! - [`TaxonomyEntry`]: The (taxon, rank) pair deciding whether a taxon is kept
//! - [`ReformattedRecord`]: One output row (sequence ID, taxonomy path, confidence)
//!
//! ## Row Layout
//!
//! An RDP classifier row is tab separated. Column 0 is the sequence ID, column 1
//! is ignored, and from column 2 onward the row repeats taxon/rank/confidence:
//!
//! | Column | 0      | 1   | 2        | 3      | 4    | 5          | 6      | 7    |
//! |--------|--------|-----|----------|--------|------|------------|--------|------|
//! | Value  | seq1   | -   | Bacteria | domain | 0.95 | Firmicutes | phylum | 0.88 |
//!
//! which reformats to `seq1\tBacteria;Firmicutes\t0.88`.

pub mod record;

pub use record::{ReformattedRecord, TaxonomyEntry, Triplet, TAXONOMY_SEPARATOR};
