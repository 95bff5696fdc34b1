// Line classification for copied vocabulary pages.
//
// Every trimmed line is either noise to skip (blank, menu entry,
// instructional sentence, pagination counter), the footer boundary that
// ends the scan, or a candidate that may start a vocabulary pair.

use anyhow::{Context, Result};
use regex::Regex;
use unicode_normalization::UnicodeNormalization;
use vokabel_model::Lexicon;

/// What a single trimmed line is, before any pairing decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    Blank,
    /// Exact match of a navigation/menu keyword.
    Navigation,
    /// Contains a footer marker; nothing after this line is scanned.
    Footer,
    /// Instructional sentence ending with a period.
    Prose,
    /// Pagination or word counter consisting only of digits.
    Counter,
    Candidate,
}

impl LineClass {
    pub fn is_candidate(self) -> bool {
        self == LineClass::Candidate
    }
}

/// Classifier compiled from a [`Lexicon`].
#[derive(Debug, Clone)]
pub struct Classifier {
    lexicon: Lexicon,
    german_article: Option<Regex>,
    portuguese_article: Option<Regex>,
}

impl Classifier {
    /// Lexicon strings are NFC-normalized to match the normalized page text.
    pub fn new(lexicon: Lexicon) -> Result<Self> {
        lexicon.validate().context("Invalid lexicon")?;
        let lexicon = nfc_lexicon(lexicon);
        let german_article = article_prefix(&lexicon.german_articles)
            .context("Failed to compile German article pattern")?;
        let portuguese_article = article_prefix(&lexicon.portuguese_articles)
            .context("Failed to compile Portuguese article pattern")?;
        Ok(Self { lexicon, german_article, portuguese_article })
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Classify an already-trimmed line. Checks run in a fixed order:
    /// blank, navigation, footer, prose, counter.
    pub fn classify(&self, line: &str) -> LineClass {
        if line.is_empty() {
            return LineClass::Blank;
        }
        if self.is_navigation(line) {
            return LineClass::Navigation;
        }
        if self.is_footer(line) {
            return LineClass::Footer;
        }
        if self.is_prose(line) {
            return LineClass::Prose;
        }
        if is_counter(line) {
            return LineClass::Counter;
        }
        LineClass::Candidate
    }

    pub fn is_navigation(&self, line: &str) -> bool {
        self.lexicon.navigation.iter().any(|k| k == line)
    }

    pub fn is_footer(&self, line: &str) -> bool {
        self.lexicon.footer_markers.iter().any(|m| line.contains(m.as_str()))
    }

    pub fn is_prose(&self, line: &str) -> bool {
        line.ends_with('.') && self.lexicon.instructions.iter().any(|s| line.contains(s.as_str()))
    }

    /// Contains a navigation or legal keyword anywhere in the line.
    pub fn has_boilerplate(&self, line: &str) -> bool {
        self.lexicon.boilerplate.iter().any(|k| line.contains(k.as_str()))
    }

    pub fn has_german_article(&self, line: &str) -> bool {
        self.german_article.as_ref().is_some_and(|re| re.is_match(line))
    }

    pub fn has_german_diacritic(&self, line: &str) -> bool {
        line.chars().any(|c| self.lexicon.german_diacritics.contains(&c))
    }

    pub fn has_portuguese_article(&self, line: &str) -> bool {
        self.portuguese_article.as_ref().is_some_and(|re| re.is_match(line))
    }

    pub fn has_portuguese_diacritic(&self, line: &str) -> bool {
        line.chars().any(|c| self.lexicon.portuguese_diacritics.contains(&c))
    }

    pub fn looks_german(&self, line: &str) -> bool {
        self.has_german_article(line) || self.has_german_diacritic(line)
    }

    pub fn looks_portuguese(&self, line: &str) -> bool {
        self.has_portuguese_article(line)
            || self.has_portuguese_diacritic(line)
            || starts_lowercase(line)
    }
}

pub fn starts_lowercase(line: &str) -> bool {
    line.chars().next().is_some_and(char::is_lowercase)
}

pub fn starts_uppercase(line: &str) -> bool {
    line.chars().next().is_some_and(char::is_uppercase)
}

pub fn is_counter(line: &str) -> bool {
    !line.is_empty() && line.chars().all(|c| c.is_ascii_digit())
}

/// Length in characters, not bytes.
pub fn char_len(line: &str) -> usize {
    line.chars().count()
}

fn nfc(s: &str) -> String {
    s.nfc().collect()
}

fn nfc_all(items: Vec<String>) -> Vec<String> {
    items.iter().map(|s| nfc(s)).collect()
}

fn nfc_lexicon(lexicon: Lexicon) -> Lexicon {
    Lexicon {
        navigation: nfc_all(lexicon.navigation),
        footer_markers: nfc_all(lexicon.footer_markers),
        instructions: nfc_all(lexicon.instructions),
        boilerplate: nfc_all(lexicon.boilerplate),
        german_articles: nfc_all(lexicon.german_articles),
        portuguese_articles: nfc_all(lexicon.portuguese_articles),
        start_marker: nfc(&lexicon.start_marker),
        end_marker: nfc(&lexicon.end_marker),
        ..lexicon
    }
}

/// Anchored `^(?:a|b|...) ` pattern; `None` for an empty article list.
fn article_prefix(articles: &[String]) -> Result<Option<Regex>> {
    if articles.is_empty() {
        return Ok(None);
    }
    let alternatives: Vec<String> = articles.iter().map(|a| regex::escape(a.trim())).collect();
    let re = Regex::new(&format!("^(?:{}) ", alternatives.join("|")))?;
    Ok(Some(re))
}
