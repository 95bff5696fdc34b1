// Cross-document aggregation.
//
// Extractions are concatenated in document input order; the richest
// collation then collapses exact duplicates and sorts by German.

use serde::Serialize;
use vokabel_model::VocabList;

use crate::extractor::Extraction;

/// How the concatenated pairs are handed to output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Collation {
    /// Exact duplicates removed, sorted case-insensitively by German.
    #[default]
    UniqueSorted,
    /// Raw concatenation in document and extraction order.
    Raw,
}

/// Accumulates extractions from several documents.
#[derive(Debug, Default)]
pub struct Aggregator {
    pairs: VocabList,
    documents: usize,
    low_confidence: usize,
}

/// Final pair list plus the counts reported to the user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Aggregate {
    pub pairs: VocabList,
    pub documents: usize,
    /// Pairs extracted before duplicate removal.
    pub total: usize,
    pub duplicates_removed: usize,
    /// Pairs accepted without lexical evidence, before duplicate removal.
    pub low_confidence: usize,
    pub collation: Collation,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, extraction: Extraction) {
        self.documents += 1;
        self.low_confidence += extraction.low_confidence().count();
        self.pairs.extend(extraction.pairs.into_iter().map(|p| p.pair));
    }

    pub fn finish(self, collation: Collation) -> Aggregate {
        let total = self.pairs.len();
        let (pairs, duplicates_removed) = match collation {
            Collation::UniqueSorted => self.pairs.into_unique_sorted(),
            Collation::Raw => (self.pairs, 0),
        };

        tracing::debug!(
            documents = self.documents,
            total,
            unique = pairs.len(),
            duplicates_removed,
            ?collation,
            "Aggregated pairs"
        );

        Aggregate {
            pairs,
            documents: self.documents,
            total,
            duplicates_removed,
            low_confidence: self.low_confidence,
            collation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::{ExtractedPair, Extractor};
    use crate::ExtractConfig;
    use vokabel_model::{Confidence, VocabPair};

    fn scan(text: &str) -> Extraction {
        Extractor::new(ExtractConfig::default()).unwrap().scan(text)
    }

    #[test]
    fn test_duplicates_across_documents() {
        let mut agg = Aggregator::new();
        agg.add(scan("Oi\nHallo"));
        agg.add(scan("Oi\nHallo"));
        let result = agg.finish(Collation::UniqueSorted);

        assert_eq!(result.documents, 2);
        assert_eq!(result.total, 2);
        assert_eq!(result.duplicates_removed, 1);
        assert_eq!(result.pairs.as_slice(), &[VocabPair::new("Hallo", "Oi").unwrap()]);
        assert_eq!(result.duplicates_removed, result.total - result.pairs.len());
    }

    #[test]
    fn test_sorted_case_insensitively() {
        let mut agg = Aggregator::new();
        agg.add(scan("o trem\nder Zug\na maçã\nder Apfel"));
        agg.add(scan("o pão\ndas Brot"));
        let result = agg.finish(Collation::UniqueSorted);

        let germans: Vec<_> = result.pairs.iter().map(|p| p.german.as_str()).collect();
        assert_eq!(germans, vec!["das Brot", "der Apfel", "der Zug"]);
        assert!(result
            .pairs
            .as_slice()
            .windows(2)
            .all(|w| w[0].german.to_lowercase() <= w[1].german.to_lowercase()));
    }

    #[test]
    fn test_raw_keeps_input_order() {
        let mut agg = Aggregator::new();
        agg.add(scan("o trem\nder Zug"));
        agg.add(scan("o trem\nder Zug\no pão\ndas Brot"));
        let result = agg.finish(Collation::Raw);

        let germans: Vec<_> = result.pairs.iter().map(|p| p.german.as_str()).collect();
        assert_eq!(germans, vec!["der Zug", "der Zug", "das Brot"]);
        assert_eq!(result.duplicates_removed, 0);
    }

    #[test]
    fn test_low_confidence_counted() {
        let mut agg = Aggregator::new();
        agg.add(Extraction {
            pairs: vec![
                ExtractedPair {
                    pair: VocabPair::new("Hallo!", "Oi!").unwrap(),
                    confidence: Confidence::Structural,
                    line: 1,
                },
                ExtractedPair {
                    pair: VocabPair::new("der Hund", "o cão").unwrap(),
                    confidence: Confidence::Lexical,
                    line: 3,
                },
            ],
            ..Extraction::default()
        });
        let result = agg.finish(Collation::UniqueSorted);
        assert_eq!(result.low_confidence, 1);
    }

    #[test]
    fn test_empty_aggregate() {
        let result = Aggregator::new().finish(Collation::UniqueSorted);
        assert!(result.pairs.is_empty());
        assert_eq!(result.total, 0);
        assert_eq!(result.documents, 0);
    }
}
