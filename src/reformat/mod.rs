//! Line-by-line conversion of RDP classifier output into a taxonomy table.
//!
//! [`Records`] lazily maps input lines to [`ReformattedRecord`]s, dropping
//! malformed lines, and [`reformat`] writes them under the fixed
//! [`OUTPUT_HEADER`].
//!
//! ```rust
//! use rdp_reformat::parsing::rdp::TruncatedTripletPolicy;
//! use rdp_reformat::reformat::reformat;
//!
//! let input = "seq1\tgenus\tBacteria\tdomain\t0.95\tFirmicutes\tphylum\t0.88\nseq2\n";
//! let mut output = Vec::new();
//! let stats = reformat(input.as_bytes(), &mut output, TruncatedTripletPolicy::Skip).unwrap();
//!
//! assert_eq!(
//!     String::from_utf8(output).unwrap(),
//!     "Sequence ID\tTaxonomy\tConfidence\nseq1\tBacteria;Firmicutes\t0.88\n"
//! );
//! assert_eq!(stats.lines_skipped, 1);
//! ```
//!
//! [`ReformattedRecord`]: crate::core::record::ReformattedRecord

pub mod records;
pub mod writer;

pub use records::{ReformatError, ReformatStats, Records};
pub use writer::{reformat, OUTPUT_HEADER};
