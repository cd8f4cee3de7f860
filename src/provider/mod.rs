//! Quiz content acquisition.
//!
//! A [`ContentProvider`] resolves exactly once per process with a validated
//! [`Quiz`] or a [`LoadError`]. Restarting an attempt reuses the quiz that
//! already arrived; nothing re-fetches.

mod file;
mod fixture;

use std::future::Future;

use crate::models::Quiz;

pub use file::FileProvider;
pub use fixture::{FixtureProvider, DEFAULT_FETCH_DELAY};

/// Source of quiz content, fixture-backed or file-backed.
pub trait ContentProvider {
    /// Fetch the quiz. Consumed once per session lifetime.
    fn fetch(&self) -> impl Future<Output = Result<Quiz, LoadError>> + Send;
}

/// Error producing quiz content.
#[derive(Debug)]
pub enum LoadError {
    /// Reading the content source failed.
    Io(std::io::Error),
    /// The content was not valid quiz JSON.
    Parse(serde_json::Error),
    /// The content parsed but violated a quiz invariant.
    Invalid(String),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "Failed to read quiz content: {}", e),
            LoadError::Parse(e) => write!(f, "Failed to parse quiz content: {}", e),
            LoadError::Invalid(reason) => write!(f, "Invalid quiz content: {}", reason),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Parse(e) => Some(e),
            LoadError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        LoadError::Io(err)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Parse(err)
    }
}

/// Parse and validate quiz JSON.
pub(crate) fn parse_quiz(json: &str) -> Result<Quiz, LoadError> {
    let quiz: Quiz = serde_json::from_str(json)?;
    quiz.validate().map_err(LoadError::Invalid)?;
    Ok(quiz)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rejects_invalid_json() {
        assert!(matches!(parse_quiz("not json"), Err(LoadError::Parse(_))));
    }

    #[test]
    fn parse_rejects_quiz_without_questions() {
        let json = r#"{ "id": "q", "title": "t", "description": "", "questions": [] }"#;
        assert!(matches!(parse_quiz(json), Err(LoadError::Invalid(_))));
    }

    #[test]
    fn parse_rejects_question_with_two_correct_answers() {
        let json = r#"{
            "id": "q", "title": "t", "description": "",
            "questions": [{
                "id": "q1", "text": "?", "category": "c", "difficulty": "easy",
                "answers": [
                    { "id": "a1", "text": "x", "isCorrect": true },
                    { "id": "a2", "text": "y", "isCorrect": true }
                ]
            }]
        }"#;
        assert!(matches!(parse_quiz(json), Err(LoadError::Invalid(_))));
    }
}
