//! Multiple-choice quizzes built from a flashcard deck.

use std::collections::HashMap;

use rand::{Rng, seq::SliceRandom};
use tracing::debug;

use crate::{
    flashcards::DEFINE_PREFIX,
    types::{Flashcard, QuizQuestion, QuizScore},
};

pub const MAX_QUIZ_QUESTIONS: usize = 5;
pub const MAX_DISTRACTORS: usize = 3;

/// Build a quiz using the thread-local random source
pub fn generate_quiz(cards: &[Flashcard]) -> Vec<QuizQuestion> {
    generate_quiz_with_rng(cards, &mut rand::thread_rng())
}

/// Build up to [`MAX_QUIZ_QUESTIONS`] questions from the front of the deck.
///
/// Distractors are sampled from the answers of the whole deck. A small deck
/// gives fewer choices rather than repeated ones. Choice order comes from `rng`.
pub fn generate_quiz_with_rng<R: Rng + ?Sized>(
    cards: &[Flashcard],
    rng: &mut R,
) -> Vec<QuizQuestion> {
    let answers: Vec<String> = cards.iter().map(answer_for).collect();

    let quiz: Vec<QuizQuestion> = cards
        .iter()
        .zip(&answers)
        .take(MAX_QUIZ_QUESTIONS)
        .enumerate()
        .map(|(i, (card, answer))| QuizQuestion {
            id: format!("q-{}", i),
            prompt: format!("Which term best matches this prompt? \"{}\"", card.back),
            choices: choices_for(answer, &answers, rng),
            answer: answer.clone(),
        })
        .collect();

    debug!(deck = cards.len(), questions = quiz.len(), "quiz.generated");

    quiz
}

/// The answer a card tests: its front without the `Define: ` prefix.
///
/// Summary cards have no prefix, so their whole front is the answer.
pub fn answer_for(card: &Flashcard) -> String {
    card.front
        .strip_prefix(DEFINE_PREFIX)
        .unwrap_or(&card.front)
        .to_string()
}

/// Count questions whose selected choice is the correct answer.
///
/// `selections` maps question id to the chosen text; unanswered questions
/// and unknown ids count as wrong.
pub fn score_quiz(questions: &[QuizQuestion], selections: &HashMap<String, String>) -> QuizScore {
    let correct = questions
        .iter()
        .filter(|q| selections.get(&q.id) == Some(&q.answer))
        .count();

    QuizScore {
        correct,
        total: questions.len(),
    }
}

fn choices_for<R: Rng + ?Sized>(answer: &str, answers: &[String], rng: &mut R) -> Vec<String> {
    let pool: Vec<&String> = answers.iter().filter(|a| a.as_str() != answer).collect();

    let mut choices: Vec<String> = pool
        .choose_multiple(rng, MAX_DISTRACTORS)
        .map(|a| (*a).clone())
        .collect();
    choices.push(answer.to_string());
    choices.shuffle(rng);
    choices
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    fn card(term: &str) -> Flashcard {
        Flashcard {
            id: format!("0-0-{}", term),
            front: format!("Define: {}", term),
            back: format!("About {}", term),
        }
    }

    fn as_set(choices: &[String]) -> HashSet<&str> {
        choices.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_empty_deck() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(generate_quiz_with_rng(&[], &mut rng).is_empty());
        assert!(generate_quiz(&[]).is_empty());
    }

    #[test]
    fn test_question_shape() {
        let deck = vec![card("Alpha"), card("Beta")];
        let mut rng = StdRng::seed_from_u64(1);
        let quiz = generate_quiz_with_rng(&deck, &mut rng);

        assert_eq!(quiz.len(), 2);
        assert_eq!(quiz[0].id, "q-0");
        assert_eq!(quiz[1].id, "q-1");
        assert_eq!(quiz[0].answer, "Alpha");
        assert_eq!(
            quiz[0].prompt,
            "Which term best matches this prompt? \"About Alpha\""
        );
        assert_eq!(as_set(&quiz[0].choices), HashSet::from(["Alpha", "Beta"]));
        assert_eq!(as_set(&quiz[1].choices), HashSet::from(["Alpha", "Beta"]));
    }

    #[test]
    fn test_at_most_five_questions_four_choices() {
        let deck: Vec<Flashcard> = ["Aa", "Bb", "Cc", "Dd", "Ee", "Ff", "Gg"]
            .iter()
            .map(|t| card(t))
            .collect();
        let mut rng = StdRng::seed_from_u64(42);
        let quiz = generate_quiz_with_rng(&deck, &mut rng);

        assert_eq!(quiz.len(), MAX_QUIZ_QUESTIONS);
        for q in &quiz {
            assert_eq!(q.choices.len(), MAX_DISTRACTORS + 1);
            assert_eq!(as_set(&q.choices).len(), q.choices.len());
            assert!(q.choices.contains(&q.answer));
        }
    }

    #[test]
    fn test_single_card_has_only_answer() {
        let mut rng = StdRng::seed_from_u64(3);
        let quiz = generate_quiz_with_rng(&[card("Solo")], &mut rng);
        assert_eq!(quiz[0].choices, vec!["Solo".to_string()]);
    }

    #[test]
    fn test_same_answer_never_used_as_distractor() {
        let deck = vec![card("Energy"), card("Energy"), card("Cell")];
        let mut rng = StdRng::seed_from_u64(9);
        let quiz = generate_quiz_with_rng(&deck, &mut rng);
        assert_eq!(quiz[0].choices.len(), 2);
        assert_eq!(as_set(&quiz[0].choices), HashSet::from(["Energy", "Cell"]));
    }

    #[test]
    fn test_duplicate_distractors_are_tolerated() {
        let deck = vec![card("Cell"), card("Energy"), card("Energy")];
        let mut rng = StdRng::seed_from_u64(5);
        let quiz = generate_quiz_with_rng(&deck, &mut rng);
        assert_eq!(quiz[0].choices.len(), 3);
        assert_eq!(as_set(&quiz[0].choices), HashSet::from(["Cell", "Energy"]));
    }

    #[test]
    fn test_summary_card_answer_is_whole_front() {
        let summary = Flashcard {
            id: "0-summary".into(),
            front: "some long text…".into(),
            back: "Summarize this idea in one sentence.".into(),
        };
        assert_eq!(answer_for(&summary), "some long text…");
        assert_eq!(answer_for(&card("Cell")), "Cell");
    }

    #[test]
    fn test_same_seed_same_quiz() {
        let deck: Vec<Flashcard> = ["Aa", "Bb", "Cc", "Dd", "Ee"].iter().map(|t| card(t)).collect();
        let a = generate_quiz_with_rng(&deck, &mut StdRng::seed_from_u64(11));
        let b = generate_quiz_with_rng(&deck, &mut StdRng::seed_from_u64(11));
        assert_eq!(a, b);
    }

    #[test]
    fn test_score_quiz() {
        let deck = vec![card("Alpha"), card("Beta"), card("Gamma")];
        let quiz = generate_quiz_with_rng(&deck, &mut StdRng::seed_from_u64(2));

        let mut selections = HashMap::new();
        selections.insert("q-0".to_string(), "Alpha".to_string());
        selections.insert("q-1".to_string(), "Alpha".to_string());
        selections.insert("q-9".to_string(), "Gamma".to_string());

        let score = score_quiz(&quiz, &selections);
        assert_eq!(score, QuizScore { correct: 1, total: 3 });
        assert_eq!(score_quiz(&quiz, &HashMap::new()).correct, 0);
    }
}
