//! Built-in quiz content standing in for a future API.

use std::time::Duration;

use crate::models::Quiz;

use super::{parse_quiz, ContentProvider, LoadError};

const FIXTURE_JSON: &str = include_str!("../../fixture.json");

/// Latency the fixture simulates by default.
pub const DEFAULT_FETCH_DELAY: Duration = Duration::from_millis(1000);

/// Serves the embedded general-knowledge quiz after a simulated delay.
pub struct FixtureProvider {
    delay: Duration,
}

impl FixtureProvider {
    pub fn new() -> Self {
        Self::with_delay(DEFAULT_FETCH_DELAY)
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for FixtureProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentProvider for FixtureProvider {
    async fn fetch(&self) -> Result<Quiz, LoadError> {
        tokio::time::sleep(self.delay).await;
        parse_quiz(FIXTURE_JSON)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Difficulty;

    #[tokio::test]
    async fn fixture_fetches_valid_quiz() {
        let provider = FixtureProvider::with_delay(Duration::ZERO);
        let quiz = provider.fetch().await.unwrap();

        assert_eq!(quiz.id, "quiz-1");
        assert_eq!(quiz.title, "General Knowledge Quiz");
        assert_eq!(quiz.total_questions(), 5);
        assert!(quiz.validate().is_ok());

        let first = &quiz.questions[0];
        assert_eq!(first.category, "Geography");
        assert_eq!(first.difficulty, Difficulty::Easy);
        assert_eq!(first.correct_answer().unwrap().text, "Paris");

        let last = &quiz.questions[4];
        assert_eq!(last.difficulty, Difficulty::Hard);
        assert_eq!(last.correct_answer().unwrap().text, "1945");
    }
}
