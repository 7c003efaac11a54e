//! Keyword presence tests over lowercased syllabus text.

use std::fmt;
use std::str::FromStr;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analysis::AnalysisError;

/// How a keyword is considered present in the syllabus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Anywhere in the text, including inside a larger word ("ml" in "html").
    #[default]
    Substring,
    /// Only when not adjacent to another word character.
    WordBoundary,
}

impl FromStr for MatchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "substring" => Ok(MatchMode::Substring),
            "word_boundary" | "word-boundary" => Ok(MatchMode::WordBoundary),
            other => Err(format!(
                "unknown keyword match mode '{other}' (expected 'substring' or 'word_boundary')"
            )),
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchMode::Substring => f.write_str("substring"),
            MatchMode::WordBoundary => f.write_str("word_boundary"),
        }
    }
}

/// A compiled test for one lowercase keyword.
#[derive(Debug, Clone)]
pub enum KeywordMatcher {
    Substring(String),
    WordBoundary(Regex),
}

impl KeywordMatcher {
    pub fn compile(keyword: &str, mode: MatchMode) -> Result<Self, AnalysisError> {
        match mode {
            MatchMode::Substring => Ok(KeywordMatcher::Substring(keyword.to_string())),
            MatchMode::WordBoundary => {
                // Explicit non-word guards rather than \b so keywords ending in
                // punctuation ("c++", "node.js") still match.
                let pattern = format!(r"(?:^|[^\w]){}(?:[^\w]|$)", regex::escape(keyword));
                Regex::new(&pattern)
                    .map(KeywordMatcher::WordBoundary)
                    .map_err(|e| AnalysisError::InvalidKeyword {
                        keyword: keyword.to_string(),
                        reason: e.to_string(),
                    })
            }
        }
    }

    /// `text_lower` must already be lowercased.
    pub fn is_present(&self, text_lower: &str) -> bool {
        match self {
            KeywordMatcher::Substring(keyword) => text_lower.contains(keyword.as_str()),
            KeywordMatcher::WordBoundary(re) => re.is_match(text_lower),
        }
    }
}
