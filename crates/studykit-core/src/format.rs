use crate::{
    error::Result,
    types::{Flashcard, QuizQuestion, QuizScore, StudySet},
};

pub const EMPTY_SUMMARY_HINT: &str = "Add some transcript text to see a concise summary here.";
pub const EMPTY_FLASHCARDS_HINT: &str = "Add more transcript text to generate practice cards.";
pub const EMPTY_QUIZ_HINT: &str = "Add more transcript text to build a quick quiz.";

/// Format a summary section as markdown
pub fn format_summary_readable(summary: &str) -> String {
    let mut output = String::new();
    output.push_str("## Summary\n\n");
    if summary.is_empty() {
        output.push_str(EMPTY_SUMMARY_HINT);
    } else {
        output.push_str(summary);
    }
    output.push_str("\n\n");
    output
}

pub fn format_flashcards_readable(cards: &[Flashcard]) -> String {
    let mut output = String::new();
    output.push_str("## Flashcards\n\n");
    if cards.is_empty() {
        output.push_str(EMPTY_FLASHCARDS_HINT);
        output.push_str("\n\n");
        return output;
    }

    for (i, card) in cards.iter().enumerate() {
        output.push_str(&format_flashcard_readable(card, i + 1, cards.len()));
    }
    output
}

/// Format one card with its 1-based position in the deck
pub fn format_flashcard_readable(card: &Flashcard, position: usize, total: usize) -> String {
    format!(
        "### Card {} of {}\n\n**Q:** {}\n\n**A:** {}\n\n",
        position, total, card.front, card.back
    )
}

pub fn format_quiz_readable(quiz: &[QuizQuestion]) -> String {
    let mut output = String::new();
    output.push_str("## Quiz\n\n");
    if quiz.is_empty() {
        output.push_str(EMPTY_QUIZ_HINT);
        output.push_str("\n\n");
        return output;
    }

    for (i, question) in quiz.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", i + 1, question.prompt));
        for choice in &question.choices {
            output.push_str(&format!("   • {}\n", choice));
        }
        output.push('\n');
    }

    output.push_str("### Answers\n\n");
    for (i, question) in quiz.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", i + 1, question.answer));
    }
    output.push('\n');
    output
}

pub fn format_score(score: &QuizScore) -> String {
    format!("Score: {} / {}", score.correct, score.total)
}

/// Format every artifact of a study set as human-readable markdown
pub fn format_study_set_readable(set: &StudySet) -> String {
    let mut output = String::new();
    output.push_str(&format_summary_readable(&set.summary));
    output.push_str(&format_flashcards_readable(&set.flashcards));
    output.push_str(&format_quiz_readable(&set.quiz));
    output
}

/// Format any serializable artifact as pretty JSON
pub fn format_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String> {
    let pretty_json = serde_json::to_string_pretty(value)?;
    Ok(pretty_json)
}
