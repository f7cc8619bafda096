//! Matcher result types

use serde::{Deserialize, Serialize};

/// Best company match for a piece of text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyMatch {
    /// Candidate name exactly as the caller supplied it
    pub company: String,
    /// Confidence (0.0 - 1.0)
    pub confidence: f64,
    /// Stage that produced the match
    pub strategy: MatchStrategy,
}

/// Matching stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategy {
    /// Name appears verbatim (case-insensitive) in the text
    Exact,
    /// Every word of a multi-word name appears somewhere in the text
    AllWordsPresent,
    /// A single token is close to the whole name
    TokenFuzzy,
    /// Every word of a multi-word name is individually close to some token
    WordAggregate,
}

impl MatchStrategy {
    /// Stable snake_case name, same as the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStrategy::Exact => "exact",
            MatchStrategy::AllWordsPresent => "all_words_present",
            MatchStrategy::TokenFuzzy => "token_fuzzy",
            MatchStrategy::WordAggregate => "word_aggregate",
        }
    }
}

impl CompanyMatch {
    pub(crate) fn new(company: &str, confidence: f64, strategy: MatchStrategy) -> Self {
        Self {
            company: company.to_string(),
            confidence,
            strategy,
        }
    }
}
