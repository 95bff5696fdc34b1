// Pairing heuristic.
//
// A single forward scan over trimmed lines with a two-line window. Skip
// lines are dropped, a footer line ends the scan, and each candidate is
// tested against the next line. Accepted pairs consume both lines; a
// rejected candidate consumes only itself so the next line gets its own
// turn as a candidate.

use std::sync::LazyLock;

use anyhow::Result;
use serde::Serialize;
use unicode_normalization::UnicodeNormalization;
use vokabel_model::{Confidence, Strictness, VocabPair};

use crate::classify::{self, Classifier, LineClass};
use crate::region;
use crate::{ExtractConfig, ScanRegion};

/// A pair together with the evidence that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractedPair {
    pub pair: VocabPair,
    pub confidence: Confidence,
    /// 1-based document line of the Portuguese (first) line.
    pub line: usize,
}

/// Line counts for one scan.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScanStats {
    pub lines: usize,
    pub blank: usize,
    pub navigation: usize,
    pub prose: usize,
    pub counters: usize,
    /// Candidates that did not start a pair.
    pub unpaired: usize,
    /// Line on which a footer marker ended the scan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer_line: Option<usize>,
    /// `Some(found)` for marker-bounded scans, `None` otherwise.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markers_found: Option<bool>,
}

/// Result of scanning one document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Extraction {
    pub pairs: Vec<ExtractedPair>,
    pub stats: ScanStats,
}

impl Extraction {
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn low_confidence(&self) -> impl Iterator<Item = &ExtractedPair> {
        self.pairs.iter().filter(|p| p.confidence.is_low())
    }

    pub fn vocab_pairs(&self) -> impl Iterator<Item = &VocabPair> {
        self.pairs.iter().map(|p| &p.pair)
    }
}

pub struct Extractor {
    strictness: Strictness,
    region: ScanRegion,
    classifier: Classifier,
}

static DEFAULT_EXTRACTOR: LazyLock<Extractor> = LazyLock::new(|| {
    Extractor::new(ExtractConfig::default()).expect("default lexicon is valid")
});

/// Extract pairs from one document with the default configuration
/// (heuristic with structural fallback, whole document).
pub fn extract(text: &str) -> Vec<VocabPair> {
    DEFAULT_EXTRACTOR.scan(text).pairs.into_iter().map(|p| p.pair).collect()
}

impl Extractor {
    pub fn new(config: ExtractConfig) -> Result<Self> {
        let ExtractConfig { strictness, region, lexicon } = config;
        let classifier = Classifier::new(lexicon)?;
        Ok(Self { strictness, region, classifier })
    }

    pub fn strictness(&self) -> Strictness {
        self.strictness
    }

    pub fn region(&self) -> ScanRegion {
        self.region
    }

    /// Scan one document. Never fails: unrecognized content is skipped.
    pub fn scan(&self, text: &str) -> Extraction {
        let text: String = text.nfc().collect();

        match self.region {
            ScanRegion::Document => self.scan_lines(&text, 1),
            ScanRegion::Marked => {
                let lexicon = self.classifier.lexicon();
                match region::between(&text, &lexicon.start_marker, &lexicon.end_marker) {
                    Some(marked) => {
                        let mut extraction = self.scan_lines(marked.text, marked.first_line);
                        extraction.stats.markers_found = Some(true);
                        extraction
                    }
                    None => {
                        tracing::debug!("Start or end marker missing, no pairs extracted");
                        Extraction {
                            pairs: Vec::new(),
                            stats: ScanStats { markers_found: Some(false), ..ScanStats::default() },
                        }
                    }
                }
            }
        }
    }

    fn scan_lines(&self, text: &str, first_line: usize) -> Extraction {
        let lines: Vec<&str> = text.lines().map(str::trim).collect();
        let min_chars = self.classifier.lexicon().min_candidate_chars;
        let mut stats = ScanStats { lines: lines.len(), ..ScanStats::default() };
        let mut pairs = Vec::new();

        let mut i = 0;
        while i < lines.len() {
            let line = lines[i];
            match self.classifier.classify(line) {
                LineClass::Blank => stats.blank += 1,
                LineClass::Navigation => stats.navigation += 1,
                LineClass::Prose => stats.prose += 1,
                LineClass::Counter => stats.counters += 1,
                LineClass::Footer => {
                    stats.footer_line = Some(first_line + i);
                    tracing::debug!(line = first_line + i, text = %line, "Footer reached");
                    break;
                }
                LineClass::Candidate => {
                    let next = lines.get(i + 1).copied().unwrap_or_default();
                    let next_ok = self.classifier.classify(next).is_candidate();

                    if next_ok && classify::char_len(line) >= min_chars {
                        if let Some(confidence) = self.accept(line, next) {
                            if let Some(pair) = VocabPair::new(next, line) {
                                tracing::trace!(
                                    line = first_line + i,
                                    german = %pair.german,
                                    portuguese = %pair.portuguese,
                                    ?confidence,
                                    "Pair"
                                );
                                pairs.push(ExtractedPair { pair, confidence, line: first_line + i });
                                i += 2;
                                continue;
                            }
                        }
                    }
                    stats.unpaired += 1;
                }
            }
            i += 1;
        }

        Extraction { pairs, stats }
    }

    /// Decide whether `first` (Portuguese) and `second` (German) form a pair.
    fn accept(&self, first: &str, second: &str) -> Option<Confidence> {
        let c = &self.classifier;
        match self.strictness {
            Strictness::Alternating => Some(Confidence::Assumed),
            Strictness::Heuristic => {
                let case_flip = classify::starts_lowercase(first) && classify::starts_uppercase(second);
                (c.looks_portuguese(first) || case_flip).then_some(Confidence::Lexical)
            }
            Strictness::HeuristicWithFallback => {
                if c.looks_german(second) && c.looks_portuguese(first) {
                    return Some(Confidence::Lexical);
                }
                let max = c.lexicon().max_structural_chars;
                let short = classify::char_len(first) < max && classify::char_len(second) < max;
                let clean = !c.has_boilerplate(first) && !c.has_boilerplate(second);
                (short && clean).then_some(Confidence::Structural)
            }
        }
    }
}
