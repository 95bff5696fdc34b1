use std::fs;
use std::path::{Path, PathBuf};

use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_8};

use crate::error::SourceError;

/// One decoded input document.
#[derive(Debug, Clone)]
pub struct Document {
    pub path: PathBuf,
    pub text: String,
    /// Name of the encoding the bytes were decoded from.
    pub encoding: &'static str,
}

/// Read a text file into memory and decode it.
///
/// A byte-order mark wins; otherwise valid UTF-8 is taken as is, and
/// anything else is decoded with the encoding `chardetng` guesses (text
/// saved by Windows editors is usually windows-1252). Bytes that are
/// invalid in the chosen encoding fail the whole file.
pub fn read_document(path: &Path) -> Result<Document, SourceError> {
    let bytes = fs::read(path).map_err(|source| match source.kind() {
        std::io::ErrorKind::NotFound => SourceError::NotFound(path.to_path_buf()),
        _ => SourceError::Read { path: path.to_path_buf(), source },
    })?;

    let (text, encoding) = decode(&bytes).ok_or_else(|| SourceError::Decode {
        path: path.to_path_buf(),
        encoding: guess_encoding(&bytes).name().to_string(),
    })?;

    tracing::debug!(path = %path.display(), encoding, bytes = bytes.len(), "Read document");
    Ok(Document { path: path.to_path_buf(), text, encoding })
}

/// Decode bytes to text, `None` if they are malformed in every candidate.
pub fn decode(bytes: &[u8]) -> Option<(String, &'static str)> {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        let text = encoding.decode_without_bom_handling_and_without_replacement(&bytes[bom_len..])?;
        return Some((text.into_owned(), encoding.name()));
    }

    if let Ok(text) = std::str::from_utf8(bytes) {
        return Some((text.to_string(), UTF_8.name()));
    }

    let encoding = guess_encoding(bytes);
    let text = encoding.decode_without_bom_handling_and_without_replacement(bytes)?;
    Some((text.into_owned(), encoding.name()))
}

fn guess_encoding(bytes: &[u8]) -> &'static Encoding {
    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    detector.guess(None, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_passthrough() {
        let (text, encoding) = decode("o pão\ndas Brot".as_bytes()).unwrap();
        assert_eq!(text, "o pão\ndas Brot");
        assert_eq!(encoding, "UTF-8");
    }

    #[test]
    fn test_utf8_bom_stripped() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice("Oi\nHallo".as_bytes());
        let (text, _) = decode(&bytes).unwrap();
        assert_eq!(text, "Oi\nHallo");
    }

    #[test]
    fn test_utf16_bom() {
        let mut bytes = vec![0xFF, 0xFE];
        for unit in "Oi".encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        let (text, encoding) = decode(&bytes).unwrap();
        assert_eq!(text, "Oi");
        assert_eq!(encoding, "UTF-16LE");
    }

    #[test]
    fn test_legacy_single_byte() {
        // "das Brot für mich" in a single-byte Latin encoding
        let bytes = b"das Brot f\xFCr mich\nGr\xFC\xDFe".to_vec();
        let (text, encoding) = decode(&bytes).unwrap();
        assert!(text.contains("für"));
        assert_ne!(encoding, "UTF-8");
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_document(&dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, SourceError::NotFound(_)));
    }

    #[test]
    fn test_read_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        std::fs::write(&path, "obrigado\nDanke\n").unwrap();

        let doc = read_document(&path).unwrap();
        assert_eq!(doc.text, "obrigado\nDanke\n");
        assert_eq!(doc.path, path);
    }
}
