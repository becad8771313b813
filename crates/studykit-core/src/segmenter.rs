use std::sync::LazyLock;

use regex::Regex;

/// At most this many leading sentences are considered for a summary
pub const MAX_SUMMARY_SENTENCES: usize = 6;

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

static SENTENCE_BREAK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]\s+").expect("sentence break pattern is valid"));

static PARAGRAPH_BREAK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{2,}").expect("paragraph break pattern is valid"));

/// Collapse whitespace runs to a single space and trim both ends
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_RE.replace_all(text, " ").trim().to_string()
}

/// Split normalized text into sentences.
///
/// A boundary is a `.`, `!` or `?` followed by whitespace; the punctuation stays
/// with the sentence on its left. A trailing fragment without punctuation is
/// still a sentence.
pub fn split_sentences(normalized: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut cursor = 0;

    for m in SENTENCE_BREAK_RE.find_iter(normalized) {
        // punctuation is a single ASCII byte
        let end = m.start() + 1;
        push_trimmed(&mut sentences, &normalized[cursor..end]);
        cursor = m.end();
    }
    push_trimmed(&mut sentences, &normalized[cursor..]);

    sentences
}

/// The first [`MAX_SUMMARY_SENTENCES`] sentences of normalized text
pub fn leading_sentences(normalized: &str) -> Vec<String> {
    let mut sentences = split_sentences(normalized);
    sentences.truncate(MAX_SUMMARY_SENTENCES);
    sentences
}

/// Split raw text on blank lines into whitespace-normalized paragraphs.
///
/// Normalizing before this call would erase the newlines that separate
/// paragraphs.
pub fn split_paragraphs(raw: &str) -> Vec<String> {
    PARAGRAPH_BREAK_RE
        .split(raw)
        .map(normalize_whitespace)
        .filter(|p| !p.is_empty())
        .collect()
}

fn push_trimmed(out: &mut Vec<String>, piece: &str) {
    let piece = piece.trim();
    if !piece.is_empty() {
        out.push(piece.to_string());
    }
}
