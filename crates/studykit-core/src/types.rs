use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub id: String,
    pub front: String,
    pub back: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: String,
    pub prompt: String,
    pub choices: Vec<String>,
    pub answer: String,
}

/// A sentence together with its keyword-frequency score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredSentence {
    pub text: String,
    pub score: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct QuizScore {
    pub correct: usize,
    pub total: usize,
}

/// Every artifact derived from one transcript
#[derive(Debug, Clone, Default, Serialize)]
pub struct StudySet {
    pub summary: String,
    pub flashcards: Vec<Flashcard>,
    pub quiz: Vec<QuizQuestion>,
}

impl StudySet {
    pub fn is_empty(&self) -> bool {
        self.summary.is_empty() && self.flashcards.is_empty() && self.quiz.is_empty()
    }
}
