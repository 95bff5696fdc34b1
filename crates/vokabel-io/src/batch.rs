// Best-effort batch extraction.
//
// Each file is read and scanned independently. A file that cannot be
// read or decoded is recorded as failed and the batch moves on; only the
// caller decides whether an empty result is fatal.

use std::path::{Path, PathBuf};

use serde::Serialize;
use vokabel_extract::{Aggregate, Aggregator, Collation, ExtractedPair, Extractor, ScanStats};

use crate::read;

/// What happened to one input file.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileOutcome {
    Extracted {
        encoding: &'static str,
        pairs: usize,
        stats: ScanStats,
        /// Pairs whose line order was guessed; worth a manual look.
        low_confidence: Vec<ExtractedPair>,
    },
    Failed {
        error: String,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    #[serde(flatten)]
    pub outcome: FileOutcome,
}

impl FileReport {
    pub fn pairs(&self) -> usize {
        match &self.outcome {
            FileOutcome::Extracted { pairs, .. } => *pairs,
            FileOutcome::Failed { .. } => 0,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.outcome, FileOutcome::Failed { .. })
    }
}

/// Per-file outcomes plus the aggregated pair list.
#[derive(Debug, Clone)]
pub struct BatchReport {
    pub files: Vec<FileReport>,
    pub aggregate: Aggregate,
}

impl BatchReport {
    pub fn failed(&self) -> impl Iterator<Item = &FileReport> {
        self.files.iter().filter(|f| f.is_failed())
    }
}

/// Read, decode and scan every path in order, then aggregate.
pub fn process_files(paths: &[PathBuf], extractor: &Extractor, collation: Collation) -> BatchReport {
    let mut aggregator = Aggregator::new();
    let mut files = Vec::with_capacity(paths.len());

    for path in paths {
        tracing::info!(path = %path.display(), "Processing");
        let outcome = match process_one(path, extractor) {
            Ok((outcome, extraction)) => {
                aggregator.add(extraction);
                outcome
            }
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "Failed to process file");
                FileOutcome::Failed { error: e.to_string() }
            }
        };
        files.push(FileReport { path: path.clone(), outcome });
    }

    BatchReport { files, aggregate: aggregator.finish(collation) }
}

fn process_one(
    path: &Path,
    extractor: &Extractor,
) -> Result<(FileOutcome, vokabel_extract::Extraction), crate::SourceError> {
    let document = read::read_document(path)?;
    let extraction = extractor.scan(&document.text);

    if extraction.stats.markers_found == Some(false) {
        tracing::warn!(path = %path.display(), "Start/end markers not found, no pairs taken from this file");
    }
    let low_confidence: Vec<ExtractedPair> = extraction.low_confidence().cloned().collect();
    tracing::info!(
        path = %path.display(),
        pairs = extraction.len(),
        low_confidence = low_confidence.len(),
        "Extracted pairs"
    );

    let outcome = FileOutcome::Extracted {
        encoding: document.encoding,
        pairs: extraction.len(),
        stats: extraction.stats.clone(),
        low_confidence,
    };
    Ok((outcome, extraction))
}
