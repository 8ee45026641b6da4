//! Parsers for taxonomic classifier output.
//!
//! - **RDP classifier rows**: Tab-separated rows of repeating
//!   taxon/rank/confidence triplets, see [`rdp`]
//!
//! ## Example
//!
//! ```rust
//! use rdp_reformat::parsing::rdp::{parse_line, TruncatedTripletPolicy};
//!
//! let line = "seq1\tgenus\tBacteria\tdomain\t0.95\tFirmicutes\tphylum\t0.88";
//! let record = parse_line(line, TruncatedTripletPolicy::Skip).unwrap().unwrap();
//! assert_eq!(record.to_string(), "seq1\tBacteria;Firmicutes\t0.88");
//!
//! // Rows with fewer than two fields are skipped
//! assert!(parse_line("seq2", TruncatedTripletPolicy::Skip).unwrap().is_none());
//! ```

pub mod rdp;
