//! Company name matcher
//!
//! Detects which known company a free-form text (mail subject + body) refers to.
//!
//! ## Stages
//! 1. Exact containment (confidence 1.0)
//! 2. All words of a multi-word name present (confidence 0.95)
//! 3. Per-token fuzzy scoring (exact / containment / edit distance)
//! 4. Multi-word aggregate scoring (mean of per-word best scores)
//!
//! Stages 1-2 return the first candidate in list order; stages 3-4 keep the best score.

mod engine;
mod fuzzy;
mod similarity;
mod tokenizer;
mod types;

pub use engine::{find_best_match, CompanyMatcher};
pub use fuzzy::{confidence, score, ConfidenceKind};
pub use similarity::{levenshtein_distance, similarity};
pub use tokenizer::{Token, TokenKind, Tokenizer};
pub use types::{CompanyMatch, MatchStrategy};
