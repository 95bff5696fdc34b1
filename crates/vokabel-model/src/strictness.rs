use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How much evidence a pair of adjacent lines needs before it is accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strictness {
    /// Every two adjacent candidate lines form a pair, Portuguese first.
    Alternating,
    /// Accept when the first line carries Portuguese evidence
    /// (lowercase start, article, diacritic) or starts lowercase while
    /// the second starts uppercase.
    Heuristic,
    /// Strong lexical signal on both lines, falling back to short,
    /// keyword-free line pairs.
    #[default]
    HeuristicWithFallback,
}

impl Strictness {
    pub fn as_str(self) -> &'static str {
        match self {
            Strictness::Alternating => "alternating",
            Strictness::Heuristic => "heuristic",
            Strictness::HeuristicWithFallback => "heuristic-with-fallback",
        }
    }
}

impl fmt::Display for Strictness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strictness {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "alternating" | "strict" => Ok(Strictness::Alternating),
            "heuristic" => Ok(Strictness::Heuristic),
            "heuristic-with-fallback" | "fallback" => Ok(Strictness::HeuristicWithFallback),
            other => Err(format!("unknown strictness: {other}")),
        }
    }
}

/// The evidence that produced an accepted pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    /// Article, diacritic or letter-case evidence decided the line order.
    Lexical,
    /// Only shortness and absence of navigation/legal keywords.
    Structural,
    /// Fixed alternation, no per-pair evidence at all.
    Assumed,
}

impl Confidence {
    /// Pairs whose line order was guessed rather than observed.
    pub fn is_low(self) -> bool {
        !matches!(self, Confidence::Lexical)
    }
}
