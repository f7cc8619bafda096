//! Fuzzy company-name detection for free-form text
//!
//! Given mail text and the list of known clients, [`CompanyMatcher`] reports
//! which company (if any) the text refers to, with a confidence score.

pub mod candidates;
pub mod config;
pub mod matcher;

pub use config::MatcherConfig;
pub use matcher::{find_best_match, CompanyMatch, CompanyMatcher, MatchStrategy};
