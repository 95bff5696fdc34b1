// Input file selection.
//
// The extraction core never chooses its own inputs. A `FileProvider`
// hands it a list of paths: either the ones given on the command line or
// the ones picked interactively in the terminal.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::error::SourceError;

/// Supplies zero or more input paths.
pub trait FileProvider {
    fn provide(&mut self) -> Result<Vec<PathBuf>, SourceError>;
}

/// Paths fixed up front (command-line arguments).
#[derive(Debug, Clone, Default)]
pub struct PathListProvider {
    paths: Vec<PathBuf>,
}

impl PathListProvider {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }
}

impl FileProvider for PathListProvider {
    fn provide(&mut self) -> Result<Vec<PathBuf>, SourceError> {
        Ok(self.paths.clone())
    }
}

/// Interactive multi-file selection: one path per line, finished by an
/// empty line or end of input.
pub struct PromptProvider<R, W> {
    input: R,
    output: W,
}

impl PromptProvider<std::io::StdinLock<'static>, std::io::Stderr> {
    /// Prompt on stderr so stdout stays clean for the preview.
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stderr())
    }
}

impl<R: BufRead, W: Write> PromptProvider<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> FileProvider for PromptProvider<R, W> {
    fn provide(&mut self) -> Result<Vec<PathBuf>, SourceError> {
        writeln!(
            self.output,
            "Select vocabulary text files (*.txt), one path per line. Empty line to finish:"
        )
        .map_err(SourceError::Prompt)?;

        let mut paths = Vec::new();
        loop {
            write!(self.output, "> ").map_err(SourceError::Prompt)?;
            self.output.flush().map_err(SourceError::Prompt)?;

            let mut line = String::new();
            let read = self.input.read_line(&mut line).map_err(SourceError::Prompt)?;
            let entry = unquote(line.trim());
            if read == 0 || entry.is_empty() {
                break;
            }
            paths.push(PathBuf::from(entry));
        }

        tracing::debug!(selected = paths.len(), "Interactive file selection finished");
        Ok(paths)
    }
}

/// Terminals quote dragged-in paths that contain spaces.
fn unquote(entry: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = entry.strip_prefix(quote).and_then(|s| s.strip_suffix(quote)) {
            return inner;
        }
    }
    entry
}

/// Outcome of checking selected paths for existence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathCheck {
    pub valid: Vec<PathBuf>,
    pub missing: Vec<PathBuf>,
}

/// Split paths into existing and missing ones, preserving order.
pub fn validate_paths(paths: &[PathBuf]) -> PathCheck {
    let mut check = PathCheck::default();
    for path in paths {
        if path.exists() {
            check.valid.push(path.clone());
        } else {
            tracing::warn!(path = %path.display(), "File not found, skipping");
            check.missing.push(path.clone());
        }
    }
    check
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_reads_until_blank_line() {
        let input = Cursor::new("a.txt\n  \"my words.txt\"  \n\nignored.txt\n");
        let mut output = Vec::new();
        let paths = PromptProvider::new(input, &mut output).provide().unwrap();

        assert_eq!(paths, vec![PathBuf::from("a.txt"), PathBuf::from("my words.txt")]);
        let shown = String::from_utf8(output).unwrap();
        assert!(shown.starts_with("Select vocabulary text files"));
    }

    #[test]
    fn test_prompt_eof_without_selection() {
        let mut output = Vec::new();
        let paths = PromptProvider::new(Cursor::new(""), &mut output).provide().unwrap();
        assert!(paths.is_empty());
    }

    #[test]
    fn test_path_list_provider() {
        let mut provider = PathListProvider::new(vec![PathBuf::from("x.txt")]);
        assert_eq!(provider.provide().unwrap(), vec![PathBuf::from("x.txt")]);
    }

    #[test]
    fn test_unquote() {
        assert_eq!(unquote("'a b.txt'"), "a b.txt");
        assert_eq!(unquote("\"a.txt"), "\"a.txt");
        assert_eq!(unquote("plain.txt"), "plain.txt");
    }

    #[test]
    fn test_validate_paths() {
        let dir = tempfile::tempdir().unwrap();
        let present = dir.path().join("present.txt");
        std::fs::write(&present, "Oi\nHallo").unwrap();
        let absent = dir.path().join("absent.txt");

        let check = validate_paths(&[absent.clone(), present.clone()]);
        assert_eq!(check.valid, vec![present]);
        assert_eq!(check.missing, vec![absent]);
    }
}
