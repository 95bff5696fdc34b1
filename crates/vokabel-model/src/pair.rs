use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// One German/Portuguese vocabulary correspondence.
///
/// Equality is exact on both fields. Ordering compares the German field
/// case-insensitively first, then falls back to the exact German and
/// Portuguese text so that sorting a list is fully deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VocabPair {
    pub german: String,
    pub portuguese: String,
}

impl VocabPair {
    /// Build a pair from two already-trimmed lines.
    ///
    /// Returns `None` if either side is empty: a pair is never partial.
    pub fn new(german: impl Into<String>, portuguese: impl Into<String>) -> Option<Self> {
        let german = german.into();
        let portuguese = portuguese.into();
        if german.trim().is_empty() || portuguese.trim().is_empty() {
            return None;
        }
        Some(Self { german, portuguese })
    }

    /// Sort key for the German field.
    pub fn german_key(&self) -> String {
        self.german.to_lowercase()
    }
}

impl Ord for VocabPair {
    fn cmp(&self, other: &Self) -> Ordering {
        self.german_key()
            .cmp(&other.german_key())
            .then_with(|| self.german.cmp(&other.german))
            .then_with(|| self.portuguese.cmp(&other.portuguese))
    }
}

impl PartialOrd for VocabPair {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Ordered collection of pairs, built up across one or more documents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VocabList {
    pairs: Vec<VocabPair>,
}

impl VocabList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, pair: VocabPair) {
        self.pairs.push(pair);
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VocabPair> {
        self.pairs.iter()
    }

    pub fn as_slice(&self) -> &[VocabPair] {
        &self.pairs
    }

    /// The first `n` pairs, for console previews.
    pub fn preview(&self, n: usize) -> &[VocabPair] {
        &self.pairs[..n.min(self.pairs.len())]
    }

    /// Remove exact duplicates and sort by the German field.
    ///
    /// Returns the collapsed list and the number of pairs removed.
    pub fn into_unique_sorted(self) -> (VocabList, usize) {
        let before = self.pairs.len();
        let mut pairs = self.pairs;
        pairs.sort();
        pairs.dedup();
        let removed = before - pairs.len();
        (VocabList { pairs }, removed)
    }
}

impl Extend<VocabPair> for VocabList {
    fn extend<T: IntoIterator<Item = VocabPair>>(&mut self, iter: T) {
        self.pairs.extend(iter);
    }
}

impl FromIterator<VocabPair> for VocabList {
    fn from_iter<T: IntoIterator<Item = VocabPair>>(iter: T) -> Self {
        Self { pairs: iter.into_iter().collect() }
    }
}

impl IntoIterator for VocabList {
    type Item = VocabPair;
    type IntoIter = std::vec::IntoIter<VocabPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}

impl<'a> IntoIterator for &'a VocabList {
    type Item = &'a VocabPair;
    type IntoIter = std::slice::Iter<'a, VocabPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(de: &str, pt: &str) -> VocabPair {
        VocabPair::new(de, pt).unwrap()
    }

    #[test]
    fn test_empty_side_rejected() {
        assert!(VocabPair::new("", "oi").is_none());
        assert!(VocabPair::new("Hallo", "   ").is_none());
        assert!(VocabPair::new("Hallo", "oi").is_some());
    }

    #[test]
    fn test_ordering_is_case_insensitive() {
        let mut pairs = vec![pair("zug", "o trem"), pair("Apfel", "a maçã"), pair("brot", "o pão")];
        pairs.sort();
        let germans: Vec<_> = pairs.iter().map(|p| p.german.as_str()).collect();
        assert_eq!(germans, vec!["Apfel", "brot", "zug"]);
    }

    #[test]
    fn test_unique_sorted_counts_removed() {
        let list: VocabList = vec![
            pair("Hallo", "Oi"),
            pair("Danke", "obrigado"),
            pair("Hallo", "Oi"),
            pair("Hallo", "Olá"),
        ]
        .into_iter()
        .collect();

        let (unique, removed) = list.into_unique_sorted();
        assert_eq!(removed, 1);
        assert_eq!(unique.len(), 3);
        assert_eq!(unique.as_slice()[0], pair("Danke", "obrigado"));
        assert_eq!(unique.as_slice()[1], pair("Hallo", "Oi"));
        assert_eq!(unique.as_slice()[2], pair("Hallo", "Olá"));
    }

    #[test]
    fn test_case_variants_are_distinct_pairs() {
        let list: VocabList = vec![pair("hallo", "oi"), pair("Hallo", "oi")].into_iter().collect();
        let (unique, removed) = list.into_unique_sorted();
        assert_eq!(removed, 0);
        // Same lowercase key: exact German text breaks the tie
        assert_eq!(unique.as_slice()[0].german, "Hallo");
        assert_eq!(unique.as_slice()[1].german, "hallo");
    }

    #[test]
    fn test_preview_clamps() {
        let list: VocabList = vec![pair("Hallo", "Oi")].into_iter().collect();
        assert_eq!(list.preview(5).len(), 1);
        assert_eq!(VocabList::new().preview(5).len(), 0);
    }

    #[test]
    fn test_serializes_as_array() {
        let list: VocabList = vec![pair("Danke", "obrigado")].into_iter().collect();
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, r#"[{"german":"Danke","portuguese":"obrigado"}]"#);
    }
}
