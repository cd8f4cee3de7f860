mod quiz;

pub use quiz::{Answer, Difficulty, Question, Quiz};
