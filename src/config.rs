// src/config.rs

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ============================================================================
// Matcher configuration
// ============================================================================

/// Company matcher configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatcherConfig {
    /// Minimum confidence for a fuzzy match to be accepted
    #[serde(default = "default_confidence_threshold")]
    pub confidence_threshold: f64,
    /// Minimum per-word confidence in the multi-word aggregate stage
    #[serde(default = "default_word_match_threshold")]
    pub word_match_threshold: f64,
    /// Shortest word the tokenizer keeps (chars)
    #[serde(default = "default_min_token_len")]
    pub min_token_len: usize,
    /// Shortest token/word that takes part in fuzzy comparison (chars)
    #[serde(default = "default_min_fuzzy_token_len")]
    pub min_fuzzy_token_len: usize,
    /// Longest phrase the tokenizer emits (words)
    #[serde(default = "default_max_phrase_words")]
    pub max_phrase_words: usize,
}

fn default_confidence_threshold() -> f64 {
    0.75
}

fn default_word_match_threshold() -> f64 {
    0.6
}

fn default_min_token_len() -> usize {
    2
}

fn default_min_fuzzy_token_len() -> usize {
    3
}

fn default_max_phrase_words() -> usize {
    3
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: default_confidence_threshold(),
            word_match_threshold: default_word_match_threshold(),
            min_token_len: default_min_token_len(),
            min_fuzzy_token_len: default_min_fuzzy_token_len(),
            max_phrase_words: default_max_phrase_words(),
        }
    }
}

impl MatcherConfig {
    /// Default config with a different acceptance threshold
    pub fn with_threshold(confidence_threshold: f64) -> Self {
        Self {
            confidence_threshold,
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.confidence_threshold) {
            anyhow::bail!(
                "confidence_threshold must be within [0, 1], got {}",
                self.confidence_threshold
            );
        }
        if !(0.0..=1.0).contains(&self.word_match_threshold) {
            anyhow::bail!(
                "word_match_threshold must be within [0, 1], got {}",
                self.word_match_threshold
            );
        }
        if self.min_token_len == 0 {
            anyhow::bail!("min_token_len must be at least 1");
        }
        if self.max_phrase_words == 0 {
            anyhow::bail!("max_phrase_words must be at least 1");
        }
        Ok(())
    }

    /// Default config file location
    pub fn default_path() -> Result<PathBuf> {
        let config_dir =
            dirs::config_dir().ok_or_else(|| anyhow::anyhow!("unable to locate config directory"))?;
        Ok(config_dir.join("CompanyMatcher").join("matcher.json"))
    }

    /// Load and validate a config file; missing fields take their defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        tracing::info!("loading matcher config from {:?}", path);
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read {:?}: {}", path, e))?;
        let config: MatcherConfig = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("invalid matcher config {:?}: {}", path, e))?;
        config.validate()?;
        Ok(config)
    }

    /// Save as pretty JSON
    ///
    /// Writes a temp file next to the target and renames it into place.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(self)?;
        let temp_path = path.with_extension("json.tmp");

        std::fs::write(&temp_path, &content).map_err(|e| {
            tracing::error!("failed to write temp file {:?}: {}", temp_path, e);
            e
        })?;

        if let Err(e) = std::fs::rename(&temp_path, path) {
            tracing::error!("failed to move {:?} into place: {}", temp_path, e);
            let _ = std::fs::remove_file(&temp_path);
            return Err(e.into());
        }

        tracing::info!("matcher config saved to {:?}", path);
        Ok(())
    }
}
