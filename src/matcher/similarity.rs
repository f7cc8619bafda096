//! Edit-distance scoring
//!
//! Levenshtein distance over Unicode scalar values, and the normalized
//! similarity derived from it.

use strsim::levenshtein;

/// Levenshtein distance
///
/// Minimum number of single-character insertions, deletions or
/// substitutions needed to turn `a` into `b`. Counted over `char`s, not bytes.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    levenshtein(a, b)
}

/// Normalized similarity in `[0.0, 1.0]`
///
/// `1 - distance / max(len(a), len(b))`. Two empty strings score 0.0.
pub fn similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 0.0;
    }

    let distance = levenshtein_distance(a, b);
    (1.0 - distance as f64 / max_len as f64).max(0.0)
}
