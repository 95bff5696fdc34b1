use serde::{Deserialize, Serialize};
use vokabel_model::{Lexicon, Strictness};

pub mod classify;
pub mod region;
pub mod extractor;
pub mod aggregate;

pub use aggregate::{Aggregate, Aggregator, Collation};
pub use classify::{Classifier, LineClass};
pub use extractor::{extract, ExtractedPair, Extraction, Extractor, ScanStats};

/// Which part of a document is scanned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanRegion {
    /// The whole document, up to the first footer line.
    #[default]
    Document,
    /// Only the text between the lexicon's start and end markers.
    /// Documents missing either marker yield no pairs.
    Marked,
}

/// Everything an [`Extractor`] needs.
#[derive(Debug, Clone, Default)]
pub struct ExtractConfig {
    pub strictness: Strictness,
    pub region: ScanRegion,
    pub lexicon: Lexicon,
}

impl ExtractConfig {
    /// Saved-words pages: scan only between the markers and pair lines
    /// by fixed alternation (Portuguese first, German second).
    pub fn marker_bounded() -> Self {
        Self {
            strictness: Strictness::Alternating,
            region: ScanRegion::Marked,
            lexicon: Lexicon::default(),
        }
    }
}
