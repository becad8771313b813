//! Flashcard synthesis from paragraph terms.

use rand::Rng;
use tracing::debug;

use crate::{
    error::{Result, StudyError},
    segmenter::split_paragraphs,
    tokenizer::{RegexTokenizer, Tokenizer},
    types::Flashcard,
};

pub const DEFAULT_FLASHCARD_LIMIT: usize = 10;
pub const MAX_TERMS_PER_PARAGRAPH: usize = 3;

/// Paragraphs without terms must be longer than this to get a summary card
pub const SUMMARY_CARD_MIN_CHARS: usize = 40;
pub const SUMMARY_CARD_PREVIEW_CHARS: usize = 60;

pub const DEFINE_PREFIX: &str = "Define: ";
const SUMMARY_CARD_BACK: &str = "Summarize this idea in one sentence.";

/// A validated, non-negative flashcard limit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlashcardLimit(usize);

impl FlashcardLimit {
    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for FlashcardLimit {
    fn default() -> Self {
        Self(DEFAULT_FLASHCARD_LIMIT)
    }
}

impl TryFrom<i64> for FlashcardLimit {
    type Error = StudyError;

    fn try_from(limit: i64) -> Result<Self> {
        usize::try_from(limit)
            .map(Self)
            .map_err(|_| StudyError::NegativeLimit { limit })
    }
}

/// Generate flashcards with the default tokenizer
pub fn generate_flashcards(transcript: &str, limit: usize) -> Vec<Flashcard> {
    generate_flashcards_with(transcript, limit, &RegexTokenizer)
}

/// Generate up to `limit` flashcards, paragraph by paragraph.
///
/// Each paragraph yields one card per term (at most three), or a single
/// summary card when it has no terms but is long enough, or nothing.
pub fn generate_flashcards_with(
    transcript: &str,
    limit: usize,
    tokenizer: &dyn Tokenizer,
) -> Vec<Flashcard> {
    if limit == 0 {
        return Vec::new();
    }

    let paragraphs = split_paragraphs(transcript);
    let mut cards = Vec::new();

    for (idx, paragraph) in paragraphs.iter().enumerate() {
        let mut terms = tokenizer.terms(paragraph);
        terms.truncate(MAX_TERMS_PER_PARAGRAPH);

        if !terms.is_empty() {
            cards.extend(
                terms
                    .iter()
                    .enumerate()
                    .map(|(i, term)| term_card(idx, i, term)),
            );
        } else if paragraph.chars().count() > SUMMARY_CARD_MIN_CHARS {
            cards.push(summary_card(idx, paragraph));
        }

        if cards.len() >= limit {
            break;
        }
    }

    cards.truncate(limit);

    debug!(
        paragraphs = paragraphs.len(),
        cards = cards.len(),
        limit,
        "flashcards.generated"
    );

    cards
}

/// Pick a card index uniformly at random, `None` for an empty deck
pub fn pick_random_card<R: Rng + ?Sized>(cards: &[Flashcard], rng: &mut R) -> Option<usize> {
    if cards.is_empty() {
        None
    } else {
        Some(rng.gen_range(0..cards.len()))
    }
}

fn term_card(paragraph: usize, position: usize, term: &str) -> Flashcard {
    Flashcard {
        id: format!("{}-{}-{}", paragraph, position, term),
        front: format!("{}{}", DEFINE_PREFIX, term),
        back: format!(
            "In this context, {} refers to a key idea from your notes. Explain it in your own words.",
            term
        ),
    }
}

fn summary_card(paragraph: usize, text: &str) -> Flashcard {
    let preview: String = text.chars().take(SUMMARY_CARD_PREVIEW_CHARS).collect();
    Flashcard {
        id: format!("{}-summary", paragraph),
        front: format!("{}…", preview),
        back: SUMMARY_CARD_BACK.to_string(),
    }
}
