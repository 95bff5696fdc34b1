use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum LexiconError {
    #[error("empty entry in {0}")]
    EmptyEntry(&'static str),

    #[error("{field} must be greater than zero")]
    ZeroLength { field: &'static str },

    #[error("start and end marker must differ (both are '{0}')")]
    IdenticalMarkers(String),
}

/// Literal word tables that drive line classification.
///
/// Defaults describe the German-language interface of the vocabulary
/// page. A JSON profile may override any subset of fields; missing
/// fields keep their default value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lexicon {
    /// Menu entries that are skipped on exact (trimmed) match.
    pub navigation: Vec<String>,
    /// Substrings that mark the start of the page footer; scanning stops.
    pub footer_markers: Vec<String>,
    /// Substrings of instructional sentences (only when the line ends with '.').
    pub instructions: Vec<String>,
    /// Substrings that disqualify a line from the structural fallback.
    pub boilerplate: Vec<String>,
    /// German articles; matched as a prefix followed by a space.
    pub german_articles: Vec<String>,
    pub german_diacritics: Vec<char>,
    /// Portuguese articles; matched as a prefix followed by a space.
    pub portuguese_articles: Vec<String>,
    pub portuguese_diacritics: Vec<char>,
    /// Candidate lines shorter than this (in characters) never start a pair.
    pub min_candidate_chars: usize,
    /// Both lines must be shorter than this for the structural fallback.
    pub max_structural_chars: usize,
    /// Sentence that precedes the vocabulary table on saved-words pages.
    pub start_marker: String,
    /// Page-size selector label that follows the vocabulary table.
    pub end_marker: String,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            navigation: strings(&[
                "Home", "Üben", "Entdecken", "Alle Vokabeln", "Auswählen",
                "Alle", "Schwach", "Mittel", "Stark",
            ]),
            footer_markers: strings(&["Lernen mit Babbel", "Babbel-App", "Imprint"]),
            instructions: strings(&["Alle Wörter", "Speichere", "Vokabeln pro Seite"]),
            boilerplate: strings(&["Lernen mit", "Babbel", "Karriere", "Imprint", "AGB"]),
            german_articles: strings(&[
                "der", "die", "das", "den", "dem", "ein", "eine", "einen", "einem",
                "Der", "Die", "Das",
            ]),
            german_diacritics: vec!['ä', 'ö', 'ü', 'ß'],
            portuguese_articles: strings(&["a", "o", "as", "os", "um", "uma"]),
            portuguese_diacritics: vec!['ã', 'õ', 'ç', 'á', 'é', 'í', 'ó', 'ú'],
            min_candidate_chars: 2,
            max_structural_chars: 50,
            start_marker: "Speichere Wörter und Sätze aus deinen Lektionen, um sie hier zu üben."
                .to_string(),
            end_marker: "Vokabeln pro Seite".to_string(),
        }
    }
}

impl Lexicon {
    /// Reject tables that would make the classifier match everything.
    ///
    /// An empty footer marker would end every scan at the first line and
    /// an empty article would turn every line into a prefix match.
    pub fn validate(&self) -> Result<(), LexiconError> {
        let tables: [(&'static str, &Vec<String>); 6] = [
            ("navigation", &self.navigation),
            ("footer_markers", &self.footer_markers),
            ("instructions", &self.instructions),
            ("boilerplate", &self.boilerplate),
            ("german_articles", &self.german_articles),
            ("portuguese_articles", &self.portuguese_articles),
        ];
        for (name, table) in tables {
            if table.iter().any(|entry| entry.trim().is_empty()) {
                return Err(LexiconError::EmptyEntry(name));
            }
        }

        if self.start_marker.trim().is_empty() {
            return Err(LexiconError::EmptyEntry("start_marker"));
        }
        if self.end_marker.trim().is_empty() {
            return Err(LexiconError::EmptyEntry("end_marker"));
        }
        if self.start_marker == self.end_marker {
            return Err(LexiconError::IdenticalMarkers(self.start_marker.clone()));
        }
        if self.max_structural_chars == 0 {
            return Err(LexiconError::ZeroLength { field: "max_structural_chars" });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(Lexicon::default().validate(), Ok(()));
    }

    #[test]
    fn test_partial_profile_keeps_defaults() {
        let lexicon: Lexicon = serde_json::from_str(
            r#"{ "navigation": ["Home", "Practice"], "max_structural_chars": 40 }"#,
        )
        .unwrap();
        assert_eq!(lexicon.navigation, vec!["Home", "Practice"]);
        assert_eq!(lexicon.max_structural_chars, 40);
        assert_eq!(lexicon.footer_markers, Lexicon::default().footer_markers);
        assert_eq!(lexicon.german_diacritics, vec!['ä', 'ö', 'ü', 'ß']);
    }

    #[test]
    fn test_empty_article_rejected() {
        let lexicon = Lexicon {
            portuguese_articles: vec!["o".to_string(), " ".to_string()],
            ..Lexicon::default()
        };
        assert_eq!(lexicon.validate(), Err(LexiconError::EmptyEntry("portuguese_articles")));
    }

    #[test]
    fn test_zero_structural_length_rejected() {
        let lexicon = Lexicon { max_structural_chars: 0, ..Lexicon::default() };
        assert!(matches!(lexicon.validate(), Err(LexiconError::ZeroLength { .. })));
    }

    #[test]
    fn test_identical_markers_rejected() {
        let lexicon = Lexicon {
            start_marker: "Vokabeln".to_string(),
            end_marker: "Vokabeln".to_string(),
            ..Lexicon::default()
        };
        assert!(matches!(lexicon.validate(), Err(LexiconError::IdenticalMarkers(_))));
    }
}
