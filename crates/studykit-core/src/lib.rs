//! Studykit Core Library
//!
//! Turns free-form transcript text into study material: an extractive
//! summary, a deck of flashcards and a multiple-choice quiz.

pub mod config;
pub mod error;
pub mod flashcards;
pub mod format;
pub mod pipeline;
pub mod quiz;
pub mod segmenter;
pub mod summarizer;
pub mod tokenizer;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{StudyConfig, get_config_path, load_config, load_default_config};
pub use error::{Result, StudyError};
pub use flashcards::{
    DEFAULT_FLASHCARD_LIMIT, FlashcardLimit, generate_flashcards, generate_flashcards_with,
    pick_random_card,
};
pub use format::{
    format_flashcard_readable, format_flashcards_readable, format_json, format_quiz_readable,
    format_score, format_study_set_readable, format_summary_readable,
};
pub use pipeline::{build_study_set, load_transcript};
pub use quiz::{answer_for, generate_quiz, generate_quiz_with_rng, score_quiz};
pub use segmenter::{normalize_whitespace, split_paragraphs, split_sentences};
pub use summarizer::{summarize, summarize_with};
pub use tokenizer::{RegexTokenizer, Tokenizer};
pub use types::{Flashcard, QuizQuestion, QuizScore, ScoredSentence, StudySet};
