//! Quiz content model.
//!
//! Content is immutable once loaded; all mutable attempt state lives in
//! [`crate::session::QuizSession`].

use serde::Deserialize;

/// One answer choice belonging to a single question.
#[derive(Debug, Clone, Deserialize)]
pub struct Answer {
    pub id: String,
    pub text: String,
    #[serde(rename = "isCorrect")]
    pub is_correct: bool,
}

/// Question difficulty, shown as a colored badge in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// A prompt with exactly one correct answer among its choices.
#[derive(Debug, Clone, Deserialize)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub category: String,
    pub difficulty: Difficulty,
    pub answers: Vec<Answer>,
}

impl Question {
    /// Look up an answer choice by id.
    pub fn answer(&self, answer_id: &str) -> Option<&Answer> {
        self.answers.iter().find(|a| a.id == answer_id)
    }

    /// The answer flagged correct. `None` only for malformed content,
    /// which validation rejects at load time.
    pub fn correct_answer(&self) -> Option<&Answer> {
        self.answers.iter().find(|a| a.is_correct)
    }
}

/// An ordered collection of questions presented as one attempt.
#[derive(Debug, Clone, Deserialize)]
pub struct Quiz {
    pub id: String,
    pub title: String,
    pub description: String,
    pub questions: Vec<Question>,
}

impl Quiz {
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// Check the content invariants: at least one question, and every
    /// question has a non-empty answer list with exactly one correct entry.
    pub fn validate(&self) -> Result<(), String> {
        if self.questions.is_empty() {
            return Err(format!("quiz '{}' has no questions", self.id));
        }

        for question in &self.questions {
            if question.answers.is_empty() {
                return Err(format!("question '{}' has no answers", question.id));
            }

            let correct = question.answers.iter().filter(|a| a.is_correct).count();
            if correct != 1 {
                return Err(format!(
                    "question '{}' has {} correct answers, expected exactly 1",
                    question.id, correct
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer(id: &str, text: &str, is_correct: bool) -> Answer {
        Answer {
            id: id.to_string(),
            text: text.to_string(),
            is_correct,
        }
    }

    fn question(id: &str, answers: Vec<Answer>) -> Question {
        Question {
            id: id.to_string(),
            text: format!("question {}", id),
            category: "Test".to_string(),
            difficulty: Difficulty::Easy,
            answers,
        }
    }

    fn quiz(questions: Vec<Question>) -> Quiz {
        Quiz {
            id: "quiz-test".to_string(),
            title: "Test Quiz".to_string(),
            description: "".to_string(),
            questions,
        }
    }

    #[test]
    fn valid_quiz_passes_validation() {
        let q = quiz(vec![question(
            "q1",
            vec![answer("a1", "yes", true), answer("a2", "no", false)],
        )]);
        assert!(q.validate().is_ok());
    }

    #[test]
    fn empty_quiz_is_rejected() {
        let q = quiz(vec![]);
        assert!(q.validate().is_err());
    }

    #[test]
    fn question_without_answers_is_rejected() {
        let q = quiz(vec![question("q1", vec![])]);
        assert!(q.validate().is_err());
    }

    #[test]
    fn question_without_correct_answer_is_rejected() {
        let q = quiz(vec![question(
            "q1",
            vec![answer("a1", "no", false), answer("a2", "also no", false)],
        )]);
        assert!(q.validate().is_err());
    }

    #[test]
    fn question_with_two_correct_answers_is_rejected() {
        let q = quiz(vec![question(
            "q1",
            vec![answer("a1", "yes", true), answer("a2", "also yes", true)],
        )]);
        assert!(q.validate().is_err());
    }

    #[test]
    fn difficulty_deserializes_lowercase() {
        let json = r#"{
            "id": "q1",
            "text": "?",
            "category": "Test",
            "difficulty": "hard",
            "answers": [{ "id": "a1", "text": "x", "isCorrect": true }]
        }"#;
        let q: Question = serde_json::from_str(json).unwrap();
        assert_eq!(q.difficulty, Difficulty::Hard);
        assert!(q.answers[0].is_correct);
    }
}
