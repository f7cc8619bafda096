//! Company matcher engine
//!
//! Runs the matching stages in priority order:
//! 1. Exact containment / all-words-present (first candidate in list order wins)
//! 2. Per-token fuzzy scoring (best of all)
//! 3. Multi-word aggregate scoring (best of all, competes with stage 2)

use anyhow::Result;
use unicode_normalization::UnicodeNormalization;

use crate::config::MatcherConfig;
use crate::matcher::fuzzy::score_lowercase;
use crate::matcher::tokenizer::Tokenizer;
use crate::matcher::types::{CompanyMatch, MatchStrategy};

/// Confidence for a multi-word name whose words all appear in the text
const ALL_WORDS_PRESENT_CONFIDENCE: f64 = 0.95;

/// Candidate name with its comparison forms precomputed
#[derive(Debug, Clone)]
struct Candidate {
    /// Original name, returned to the caller
    name: String,
    /// NFC + lower-cased
    lower: String,
    /// Lower-cased whitespace-separated words
    words: Vec<String>,
}

impl Candidate {
    fn new(name: String) -> Self {
        let lower = normalize_for_compare(&name);
        let words = lower.split_whitespace().map(str::to_string).collect();
        Self { name, lower, words }
    }

    fn is_multi_word(&self) -> bool {
        self.words.len() > 1
    }
}

/// NFC + lower-case
fn normalize_for_compare(text: &str) -> String {
    text.nfc().collect::<String>().to_lowercase()
}

/// Company matcher (immutable, reusable across threads)
#[derive(Debug, Clone)]
pub struct CompanyMatcher {
    candidates: Vec<Candidate>,
    config: MatcherConfig,
    tokenizer: Tokenizer,
}

impl CompanyMatcher {
    /// Create a matcher with the default configuration
    ///
    /// # Arguments
    /// * `names` - known company names, de-duplicated by the caller; order decides ties
    pub fn new(names: Vec<String>) -> Self {
        Self::build(names, MatcherConfig::default())
    }

    /// Create a matcher with an explicit configuration
    ///
    /// Fails if the configuration does not validate.
    pub fn with_config(names: Vec<String>, config: MatcherConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(names, config))
    }

    /// Create a matcher with the default configuration and a different threshold
    pub fn with_threshold(names: Vec<String>, confidence_threshold: f64) -> Result<Self> {
        Self::with_config(names, MatcherConfig::with_threshold(confidence_threshold))
    }

    fn build(names: Vec<String>, config: MatcherConfig) -> Self {
        let tokenizer = Tokenizer::new(config.min_token_len, config.max_phrase_words);
        let candidates = names.into_iter().map(Candidate::new).collect();
        Self {
            candidates,
            config,
            tokenizer,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Candidate names in match order
    pub fn candidates(&self) -> impl Iterator<Item = &str> {
        self.candidates.iter().map(|c| c.name.as_str())
    }

    /// Find the company the text most likely refers to
    ///
    /// Pure function of `text` and the matcher's configuration. Returns `None`
    /// when nothing clears the confidence threshold.
    pub fn find_best_match(&self, text: &str) -> Option<CompanyMatch> {
        if self.candidates.is_empty() {
            return None;
        }

        let normalized: String = text.nfc().collect();
        let text_lower = normalized.to_lowercase();
        let mut tokens: Option<Vec<String>> = None;

        // Exact / all-words-present: first candidate in list order returns immediately
        for candidate in &self.candidates {
            if candidate.words.is_empty() {
                continue;
            }

            if text_lower.contains(&candidate.lower) {
                tracing::debug!("exact company match: {}", candidate.name);
                return Some(CompanyMatch::new(&candidate.name, 1.0, MatchStrategy::Exact));
            }

            if candidate.is_multi_word() {
                let tokens = tokens.get_or_insert_with(|| self.lowercase_tokens(&normalized));
                if Self::all_words_present(candidate, &text_lower, tokens) {
                    tracing::debug!("all words present for company: {}", candidate.name);
                    return Some(CompanyMatch::new(
                        &candidate.name,
                        ALL_WORDS_PRESENT_CONFIDENCE,
                        MatchStrategy::AllWordsPresent,
                    ));
                }
            }
        }

        let tokens = tokens.unwrap_or_else(|| self.lowercase_tokens(&normalized));

        let mut best = self.best_token_match(&tokens);
        if let Some(aggregate) = self.best_word_aggregate(&tokens, best.as_ref()) {
            best = Some(aggregate);
        }

        match &best {
            Some(m) => tracing::debug!(
                "fuzzy company match: {} ({:.3}, {})",
                m.company,
                m.confidence,
                m.strategy.as_str()
            ),
            None => tracing::trace!(
                "no company cleared threshold {}",
                self.config.confidence_threshold
            ),
        }

        best
    }

    /// Tokenize and lower-case
    fn lowercase_tokens(&self, text: &str) -> Vec<String> {
        self.tokenizer
            .tokenize(text)
            .into_iter()
            .map(|t| t.text.to_lowercase())
            .collect()
    }

    /// Every word is a substring of the text or equal to some token
    fn all_words_present(candidate: &Candidate, text_lower: &str, tokens: &[String]) -> bool {
        candidate
            .words
            .iter()
            .all(|word| text_lower.contains(word.as_str()) || tokens.iter().any(|t| t == word))
    }

    /// Whether `confidence` clears the threshold and beats the running best
    fn beats(&self, confidence: f64, best: Option<&CompanyMatch>) -> bool {
        confidence >= self.config.confidence_threshold
            && confidence > best.map_or(0.0, |b| b.confidence)
    }

    /// Best single token against whole candidate names
    ///
    /// Tokens are scanned in tokenizer order, candidates in list order; only a
    /// strictly higher score replaces the running best.
    fn best_token_match(&self, tokens: &[String]) -> Option<CompanyMatch> {
        let mut best: Option<CompanyMatch> = None;

        for token in tokens {
            if token.chars().count() < self.config.min_fuzzy_token_len {
                continue;
            }

            // Blank names score 0.0
            for candidate in self.candidates.iter().filter(|c| !c.words.is_empty()) {
                let (confidence, kind) = score_lowercase(token, &candidate.lower);
                if self.beats(confidence, best.as_ref()) {
                    tracing::trace!(
                        "token {:?} -> {} ({:.3}, {:?})",
                        token,
                        candidate.name,
                        confidence,
                        kind
                    );
                    best = Some(CompanyMatch::new(
                        &candidate.name,
                        confidence,
                        MatchStrategy::TokenFuzzy,
                    ));
                }
            }
        }

        best
    }

    /// Best multi-word candidate whose every word is individually close to some token
    ///
    /// Returns a match only if it beats `current`.
    fn best_word_aggregate(
        &self,
        tokens: &[String],
        current: Option<&CompanyMatch>,
    ) -> Option<CompanyMatch> {
        let mut best: Option<CompanyMatch> = None;

        for candidate in self.candidates.iter().filter(|c| c.is_multi_word()) {
            let Some(confidence) = self.word_aggregate_confidence(candidate, tokens) else {
                continue;
            };

            if self.beats(confidence, best.as_ref().or(current)) {
                best = Some(CompanyMatch::new(
                    &candidate.name,
                    confidence,
                    MatchStrategy::WordAggregate,
                ));
            }
        }

        best
    }

    /// Mean of per-word best confidences, or `None` if any word misses the per-word threshold
    ///
    /// Words shorter than `min_fuzzy_token_len` are left out; a name with no
    /// remaining words has no aggregate.
    fn word_aggregate_confidence(&self, candidate: &Candidate, tokens: &[String]) -> Option<f64> {
        let mut total = 0.0;
        let mut counted = 0usize;

        for word in &candidate.words {
            if word.chars().count() < self.config.min_fuzzy_token_len {
                continue;
            }

            let word_best = tokens
                .iter()
                .map(|t| score_lowercase(t, word).0)
                .fold(0.0_f64, f64::max);

            if word_best < self.config.word_match_threshold {
                return None;
            }

            total += word_best;
            counted += 1;
        }

        if counted == 0 {
            return None;
        }
        Some(total / counted as f64)
    }
}

/// One-shot match with an optional threshold override
///
/// Fails only if the threshold is outside `[0, 1]`.
pub fn find_best_match(
    text: &str,
    names: &[String],
    confidence_threshold: Option<f64>,
) -> Result<Option<CompanyMatch>> {
    let config = match confidence_threshold {
        Some(threshold) => MatcherConfig::with_threshold(threshold),
        None => MatcherConfig::default(),
    };
    let matcher = CompanyMatcher::with_config(names.to_vec(), config)?;
    Ok(matcher.find_best_match(text))
}
