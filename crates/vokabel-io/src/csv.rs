// Delimited two-column output.
//
// Minimal quoting: a field is quoted only when it contains the
// delimiter, a double quote, or a line break; embedded quotes are
// doubled. Records end with CRLF.

use std::fs;
use std::io;
use std::path::Path;

use ::csv::{QuoteStyle, Terminator, WriterBuilder};
use vokabel_model::VocabList;

use crate::error::SourceError;

/// Column layout of the output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvFormat {
    pub delimiter: u8,
    /// Column titles (German, Portuguese); `None` writes no header row.
    pub header: Option<(String, String)>,
}

impl Default for CsvFormat {
    fn default() -> Self {
        Self {
            delimiter: b';',
            header: Some(("Deutsch".to_string(), "Portugiesisch".to_string())),
        }
    }
}

impl CsvFormat {
    pub fn comma() -> Self {
        Self { delimiter: b',', ..Self::default() }
    }

    pub fn without_header(self) -> Self {
        Self { header: None, ..self }
    }
}

/// Render the whole list as delimited bytes.
pub fn render_csv(list: &VocabList, format: &CsvFormat) -> io::Result<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .delimiter(format.delimiter)
        .terminator(Terminator::CRLF)
        .quote_style(QuoteStyle::Necessary)
        .from_writer(Vec::new());

    if let Some((german, portuguese)) = &format.header {
        writer.write_record([german, portuguese])?;
    }
    for pair in list {
        writer.write_record([&pair.german, &pair.portuguese])?;
    }
    writer.into_inner().map_err(|e| e.into_error())
}

/// Write the list to `path` in one pass.
pub fn write_csv(list: &VocabList, path: &Path, format: &CsvFormat) -> Result<(), SourceError> {
    let write_error = |source| SourceError::Write { path: path.to_path_buf(), source };
    let contents = render_csv(list, format).map_err(write_error)?;
    fs::write(path, contents).map_err(write_error)?;
    tracing::info!(path = %path.display(), rows = list.len(), "Wrote vocabulary CSV");
    Ok(())
}
