use std::path::Path;

use rand::Rng;
use tokio::fs;
use tracing::debug;

use crate::{
    config::StudyConfig,
    error::Result,
    flashcards::generate_flashcards,
    quiz::generate_quiz_with_rng,
    summarizer::summarize,
    types::StudySet,
};

/// Run the whole pipeline over one transcript.
///
/// Fails only when the configured flashcard limit is negative.
pub fn build_study_set<R: Rng + ?Sized>(
    transcript: &str,
    config: &StudyConfig,
    rng: &mut R,
) -> Result<StudySet> {
    let limit = config.flashcard_limit()?;

    let summary = summarize(transcript);
    let flashcards = generate_flashcards(transcript, limit.get());
    let quiz = generate_quiz_with_rng(&flashcards, rng);

    debug!(
        transcript_chars = transcript.chars().count(),
        summary_chars = summary.chars().count(),
        flashcards = flashcards.len(),
        questions = quiz.len(),
        "pipeline.completed"
    );

    Ok(StudySet {
        summary,
        flashcards,
        quiz,
    })
}

/// Load a transcript from a plain text file
pub async fn load_transcript(path: &Path) -> Result<String> {
    let transcript = fs::read_to_string(path).await?;
    Ok(transcript)
}
