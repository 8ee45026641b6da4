use std::fmt;

/// Separator placed between taxon names in the taxonomy column
pub const TAXONOMY_SEPARATOR: &str = ";";

/// One (taxon, rank, confidence) group from an RDP classifier row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triplet<'a> {
    pub taxon: &'a str,
    pub rank: &'a str,
    /// Confidence exactly as written by the classifier (never parsed)
    pub confidence: &'a str,
}

impl<'a> Triplet<'a> {
    pub fn new(taxon: &'a str, rank: &'a str, confidence: &'a str) -> Self {
        Self {
            taxon,
            rank,
            confidence,
        }
    }

    /// The (taxon, rank) half of this triplet
    pub fn entry(&self) -> TaxonomyEntry<'a> {
        TaxonomyEntry {
            taxon: self.taxon,
            rank: self.rank,
        }
    }
}

/// A taxon name paired with its rank label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxonomyEntry<'a> {
    pub taxon: &'a str,
    pub rank: &'a str,
}

impl TaxonomyEntry<'_> {
    /// An entry contributes to the taxonomy path only when both the taxon
    /// and its rank are non-empty. Rank labels are not otherwise checked.
    pub fn is_assigned(&self) -> bool {
        !self.taxon.is_empty() && !self.rank.is_empty()
    }
}

/// A single row of the reformatted taxonomy table
///
/// Renders (via [`fmt::Display`]) as exactly three tab-separated fields:
/// sequence ID, taxonomy path, confidence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReformattedRecord {
    /// Sequence identifier (first column of the classifier row)
    pub sequence_id: String,

    /// Assigned taxon names, broadest first
    pub taxonomy: Vec<String>,

    /// Confidence of the last triplet processed, if any was
    pub confidence: Option<String>,
}

impl ReformattedRecord {
    pub fn new(sequence_id: impl Into<String>) -> Self {
        Self {
            sequence_id: sequence_id.into(),
            taxonomy: Vec::new(),
            confidence: None,
        }
    }

    /// Taxon names joined with `;`
    pub fn taxonomy_path(&self) -> String {
        self.taxonomy.join(TAXONOMY_SEPARATOR)
    }

    /// Confidence column value; empty when no triplet was processed
    pub fn confidence_str(&self) -> &str {
        self.confidence.as_deref().unwrap_or_default()
    }
}

impl fmt::Display for ReformattedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}",
            self.sequence_id,
            self.taxonomy_path(),
            self.confidence_str()
        )
    }
}
