//! Tokenizer
//!
//! Splits free text into words, then adds every contiguous multi-word phrase
//! (sliding window, stride 1). Casing is preserved; comparisons lower-case later.

/// Token kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Single word
    Word,
    /// Contiguous run of words joined by a single space
    Phrase {
        /// Number of words in the phrase
        words: usize,
    },
}

/// Token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
}

/// Tokenizer
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer {
    /// Shortest word kept (chars)
    min_word_len: usize,
    /// Longest phrase emitted (words)
    max_phrase_words: usize,
}

impl Tokenizer {
    pub const DEFAULT_MIN_WORD_LEN: usize = 2;
    pub const DEFAULT_MAX_PHRASE_WORDS: usize = 3;

    pub fn new(min_word_len: usize, max_phrase_words: usize) -> Self {
        Self {
            min_word_len,
            max_phrase_words,
        }
    }

    /// Tokenize
    ///
    /// Output order: all single words left to right, then all 2-word phrases,
    /// then all 3-word phrases (and so on up to `max_phrase_words`).
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        let words = self.split_words(text);

        let mut tokens: Vec<Token> = words
            .iter()
            .map(|w| Token {
                text: (*w).to_string(),
                kind: TokenKind::Word,
            })
            .collect();

        for size in 2..=self.max_phrase_words {
            for window in words.windows(size) {
                tokens.push(Token {
                    text: window.join(" "),
                    kind: TokenKind::Phrase { words: size },
                });
            }
        }

        tokens
    }

    /// Split on whitespace and punctuation, dropping fragments shorter than `min_word_len`
    fn split_words<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split(Self::is_separator)
            .filter(|w| !w.is_empty() && w.chars().count() >= self.min_word_len)
            .collect()
    }

    /// Separator characters
    ///
    /// Whitespace, ASCII punctuation *and* ASCII symbols (`+ = < > | ~ ^ $` ...),
    /// plus common non-ASCII punctuation. "C++" therefore reduces to "C", which is
    /// too short to keep.
    fn is_separator(ch: char) -> bool {
        ch.is_whitespace() || ch.is_ascii_punctuation() || Self::is_unicode_punctuation(ch)
    }

    /// Non-ASCII punctuation commonly found in mail bodies
    fn is_unicode_punctuation(ch: char) -> bool {
        let code = ch as u32;
        // Latin-1 punctuation: ¡ « · » ¿
        matches!(code, 0xA1 | 0xAB | 0xB7 | 0xBB | 0xBF)
            // General Punctuation (dashes, curly quotes, ellipsis, ...)
            || (0x2010..=0x2027).contains(&code)
            || (0x2030..=0x205E).contains(&code)
            // CJK Symbols and Punctuation
            || (0x3001..=0x3003).contains(&code)
            || (0x3008..=0x3011).contains(&code)
            // Fullwidth forms
            || matches!(code, 0xFF01 | 0xFF0C | 0xFF0E | 0xFF1A | 0xFF1B | 0xFF1F)
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MIN_WORD_LEN, Self::DEFAULT_MAX_PHRASE_WORDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_tokenize_words_and_phrases() {
        let tokens = Tokenizer::default().tokenize("Invoice from Acme Corp");
        assert_eq!(
            texts(&tokens),
            vec![
                "Invoice",
                "from",
                "Acme",
                "Corp",
                "Invoice from",
                "from Acme",
                "Acme Corp",
                "Invoice from Acme",
                "from Acme Corp",
            ]
        );
        assert_eq!(tokens[0].kind, TokenKind::Word);
        assert_eq!(tokens[6].kind, TokenKind::Phrase { words: 2 });
        assert_eq!(tokens[8].kind, TokenKind::Phrase { words: 3 });
    }

    #[test]
    fn test_tokenize_strips_punctuation_and_short_fragments() {
        let tokens = Tokenizer::default().tokenize("Re: a quote, from\nAcme-Corp!");
        assert_eq!(texts(&tokens)[..5], ["Re", "quote", "from", "Acme", "Corp"]);
        // "a" is dropped before phrases are built
        assert!(texts(&tokens).contains(&"Re quote"));
    }

    #[test]
    fn test_tokenize_preserves_case() {
        let tokens = Tokenizer::default().tokenize("ACME corp");
        assert_eq!(texts(&tokens), vec!["ACME", "corp", "ACME corp"]);
    }

    #[test]
    fn test_tokenize_unicode_punctuation() {
        let tokens = Tokenizer::default().tokenize("“Grayson” — Music…Group");
        assert_eq!(texts(&tokens)[..3], ["Grayson", "Music", "Group"]);
    }

    #[test]
    fn test_tokenize_splits_on_ascii_symbols() {
        let tokens = Tokenizer::default().tokenize("C++ and R&D=fun|now");
        // "C" and "R"/"D" fall below the minimum length
        assert_eq!(
            texts(&tokens),
            vec!["and", "fun", "now", "and fun", "fun now", "and fun now"]
        );
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(Tokenizer::default().tokenize("").is_empty());
        assert!(Tokenizer::default().tokenize("  ,. ! a b ").is_empty());
    }

    #[test]
    fn test_tokenize_phrase_limit() {
        let tokens = Tokenizer::new(2, 1).tokenize("one two three");
        assert_eq!(texts(&tokens), vec!["one", "two", "three"]);

        let tokens = Tokenizer::new(2, 4).tokenize("one two three four");
        assert!(texts(&tokens).contains(&"one two three four"));
    }

    #[test]
    fn test_tokenize_min_len_counts_chars() {
        // An accented letter is one char even though it is two bytes
        let tokens = Tokenizer::default().tokenize("\u{e9} caf\u{e9}");
        assert_eq!(texts(&tokens), vec!["caf\u{e9}"]);
    }
}
