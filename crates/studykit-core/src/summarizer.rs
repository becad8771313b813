//! Extractive summaries ranked by keyword frequency.

use std::collections::HashMap;

use tracing::debug;

use crate::{
    segmenter::{leading_sentences, normalize_whitespace},
    tokenizer::{RegexTokenizer, Tokenizer},
    types::ScoredSentence,
};

/// Number of sentences kept in a summary
pub const SUMMARY_SENTENCE_COUNT: usize = 3;

/// Summarize a transcript with the default tokenizer
pub fn summarize(transcript: &str) -> String {
    summarize_with(transcript, &RegexTokenizer)
}

/// Summarize a transcript.
///
/// Picks the highest scoring of the leading sentences and joins them with a
/// single space, best sentence first. Returns an empty string for blank input.
pub fn summarize_with(transcript: &str, tokenizer: &dyn Tokenizer) -> String {
    let normalized = normalize_whitespace(transcript);
    if normalized.is_empty() {
        return String::new();
    }

    let mut scored = score_sentences(&normalized, tokenizer);
    // stable, so equal scores keep document order
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(SUMMARY_SENTENCE_COUNT);

    debug!(selected = scored.len(), "summary.selected");

    scored
        .into_iter()
        .map(|s| s.text)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Score the leading sentences of normalized text, in document order.
///
/// A sentence scores the sum of whole-text frequencies of each of its word
/// occurrences, divided by its length in characters plus one.
pub fn score_sentences(normalized: &str, tokenizer: &dyn Tokenizer) -> Vec<ScoredSentence> {
    let freq = word_frequencies(normalized, tokenizer);
    let sentences = leading_sentences(normalized);

    debug!(
        sentences = sentences.len(),
        vocabulary = freq.len(),
        "summary.scored"
    );

    sentences
        .into_iter()
        .map(|text| {
            let hits: usize = tokenizer
                .words(&text)
                .iter()
                .map(|w| freq.get(w).copied().unwrap_or(0))
                .sum();
            let score = hits as f64 / (text.chars().count() + 1) as f64;
            ScoredSentence { text, score }
        })
        .collect()
}

/// Occurrence count of every word token in the text
pub fn word_frequencies(text: &str, tokenizer: &dyn Tokenizer) -> HashMap<String, usize> {
    let mut freq = HashMap::new();
    for word in tokenizer.words(text) {
        *freq.entry(word).or_insert(0) += 1;
    }
    freq
}
