//! Token confidence scoring
//!
//! Scores how strongly a token points at a candidate name (or one word of it):
//! exact equality, then containment, then edit-distance similarity.

use crate::matcher::similarity::similarity;

/// Match kind behind a confidence score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceKind {
    /// Equal after lower-casing
    Exact,
    /// One string contains the other
    Containment,
    /// Edit-distance similarity
    EditDistance,
}

/// Confidence that `token` refers to `fragment`, case-insensitive, in `[0.0, 1.0]`
pub fn confidence(token: &str, fragment: &str) -> f64 {
    score(token, fragment).0
}

/// Confidence plus the rule that produced it
pub fn score(token: &str, fragment: &str) -> (f64, ConfidenceKind) {
    let token = token.to_lowercase();
    let fragment = fragment.to_lowercase();
    score_lowercase(&token, &fragment)
}

/// Same as [`score`] for inputs the caller has already lower-cased
pub(crate) fn score_lowercase(token: &str, fragment: &str) -> (f64, ConfidenceKind) {
    if token == fragment {
        return (1.0, ConfidenceKind::Exact);
    }

    let token_len = token.chars().count();
    let fragment_len = fragment.chars().count();
    let (shorter, longer) = if token_len <= fragment_len {
        (token_len, fragment_len)
    } else {
        (fragment_len, token_len)
    };

    // An empty side never counts as contained
    if shorter > 0 && (token.contains(fragment) || fragment.contains(token)) {
        return (shorter as f64 / longer as f64, ConfidenceKind::Containment);
    }

    (similarity(token, fragment), ConfidenceKind::EditDistance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        assert_eq!(score("ACME", "acme"), (1.0, ConfidenceKind::Exact));
        assert_eq!(confidence("Acme Corp", "acme corp"), 1.0);
    }

    #[test]
    fn test_containment_ratio() {
        let (c, kind) = score("Grayson", "graysonn");
        assert_eq!(kind, ConfidenceKind::Containment);
        assert!((c - 7.0 / 8.0).abs() < 1e-9);

        // Either direction
        let (c, kind) = score("acmecorp", "acme");
        assert_eq!(kind, ConfidenceKind::Containment);
        assert!((c - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_edit_distance_fallback() {
        let (c, kind) = score("Northwnd", "northwind");
        assert_eq!(kind, ConfidenceKind::EditDistance);
        assert!((c - (1.0 - 1.0 / 9.0)).abs() < 1e-9);
    }

    #[test]
    fn test_no_relation() {
        assert_eq!(confidence("xyz", "abc"), 0.0);
    }

    #[test]
    fn test_empty_fragment() {
        assert_eq!(score("token", ""), (0.0, ConfidenceKind::EditDistance));
        assert_eq!(confidence("", ""), 1.0);
    }

    #[test]
    fn test_range() {
        let pairs = [
            ("a", "abcdefgh"),
            ("Acme", "Acme Corp"),
            ("völker", "VÖLKER"),
            ("tiny", "a much longer name"),
        ];
        for (a, b) in pairs {
            let c = confidence(a, b);
            assert!((0.0..=1.0).contains(&c), "{} vs {} => {}", a, b, c);
        }
        assert_eq!(confidence("völker", "VÖLKER"), 1.0);
    }
}
