//! Word and term extraction used by the summarizer and flashcard generator.
//!
//! The default [`RegexTokenizer`] is a plain pattern matcher over ASCII
//! letters. Anything smarter (stemming, locale rules) can be plugged in by
//! implementing [`Tokenizer`].

use std::sync::LazyLock;

use regex::Regex;

static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z][a-zA-Z\-']+").expect("word pattern is valid"));

static TERM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([A-Z][a-z]+|[a-z]{6,})\b").expect("term pattern is valid"));

pub trait Tokenizer {
    /// Lowercased word tokens, one entry per occurrence
    fn words(&self, text: &str) -> Vec<String>;

    /// Candidate study terms in order of appearance
    fn terms(&self, text: &str) -> Vec<String>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RegexTokenizer;

impl Tokenizer for RegexTokenizer {
    fn words(&self, text: &str) -> Vec<String> {
        let lower = text.to_lowercase();
        WORD_RE
            .find_iter(&lower)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    fn terms(&self, text: &str) -> Vec<String> {
        TERM_RE
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_are_lowercased_and_keep_inner_punctuation() {
        let words = RegexTokenizer.words("Don't stop the well-known Engine!");
        assert_eq!(words, vec!["don't", "stop", "the", "well-known", "engine"]);
    }

    #[test]
    fn test_single_letters_are_not_words() {
        let words = RegexTokenizer.words("I saw a cat");
        assert_eq!(words, vec!["saw", "cat"]);
    }

    #[test]
    fn test_words_skip_digits() {
        assert!(RegexTokenizer.words("42 7 3.14").is_empty());
    }

    #[test]
    fn test_terms_capitalized_or_long_lowercase() {
        let terms = RegexTokenizer.terms("The cell uses energy through respiration daily");
        assert_eq!(terms, vec!["The", "energy", "through", "respiration"]);
    }

    #[test]
    fn test_terms_ignore_short_lowercase_and_acronyms() {
        assert!(RegexTokenizer.terms("hello DNA x").is_empty());
    }

    #[test]
    fn test_terms_need_word_boundaries() {
        // "McDonald" has an inner capital, so neither half stands alone
        assert!(RegexTokenizer.terms("McDonald").is_empty());
    }
}
