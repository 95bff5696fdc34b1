// JSON run summary.
//
// Written next to the CSV on request so low-confidence pairs and failed
// files can be reviewed after a batch.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use vokabel_extract::{Collation, ScanRegion};
use vokabel_model::Strictness;

use crate::batch::{BatchReport, FileReport};
use crate::error::SourceError;

#[derive(Debug, Serialize)]
pub struct RunSummary<'a> {
    pub generated_at: String,
    pub strictness: Strictness,
    pub region: ScanRegion,
    pub collation: Collation,
    pub files: &'a [FileReport],
    pub missing: &'a [PathBuf],
    pub total: usize,
    pub unique: usize,
    pub duplicates_removed: usize,
    pub low_confidence: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<&'a Path>,
}

impl<'a> RunSummary<'a> {
    pub fn new(
        batch: &'a BatchReport,
        missing: &'a [PathBuf],
        strictness: Strictness,
        region: ScanRegion,
        output: Option<&'a Path>,
    ) -> Self {
        let aggregate = &batch.aggregate;
        Self {
            generated_at: chrono::Utc::now().to_rfc3339(),
            strictness,
            region,
            collation: aggregate.collation,
            files: &batch.files,
            missing,
            total: aggregate.total,
            unique: aggregate.pairs.len(),
            duplicates_removed: aggregate.duplicates_removed,
            low_confidence: aggregate.low_confidence,
            output,
        }
    }
}

pub fn write_report(summary: &RunSummary<'_>, path: &Path) -> Result<(), SourceError> {
    let json = serde_json::to_string_pretty(summary).map_err(|e| SourceError::Write {
        path: path.to_path_buf(),
        source: e.into(),
    })?;
    fs::write(path, &json).map_err(|source| SourceError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), files = summary.files.len(), "Wrote run report");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::process_files;
    use vokabel_extract::{ExtractConfig, Extractor};

    #[test]
    fn test_report_contents() {
        let dir = tempfile::tempdir().unwrap();
        let words = dir.path().join("words.txt");
        std::fs::write(&words, "Oi!\nHallo!\n").unwrap();
        let gone = dir.path().join("gone.txt");

        let extractor = Extractor::new(ExtractConfig::default()).unwrap();
        let batch = process_files(&[words], &extractor, Collation::UniqueSorted);
        let missing = vec![gone];
        let summary = RunSummary::new(
            &batch,
            &missing,
            extractor.strictness(),
            extractor.region(),
            None,
        );

        let path = dir.path().join("report.json");
        write_report(&summary, &path).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();

        assert_eq!(json["strictness"], "heuristic-with-fallback");
        assert_eq!(json["region"], "document");
        assert_eq!(json["unique"], 1);
        assert_eq!(json["low_confidence"], 1);
        assert_eq!(json["files"][0]["status"], "extracted");
        assert_eq!(json["files"][0]["low_confidence"][0]["pair"]["german"], "Hallo!");
        assert_eq!(json["missing"].as_array().unwrap().len(), 1);
        assert!(json.get("output").is_none());
    }
}
