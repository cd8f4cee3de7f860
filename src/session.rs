//! Quiz attempt state machine.
//!
//! [`QuizSession`] holds all mutable state for one attempt at a quiz: the
//! current position, recorded selections, and timing. It moves through three
//! phases, `Loading -> InProgress -> Completed`, with `restart` looping back
//! to a fresh `InProgress` once content is held. Every operation checks its
//! phase precondition first and returns a typed error without touching state
//! when called out of order.

use std::collections::HashMap;

use crate::clock::{Clock, SystemClock};
use crate::models::Quiz;

/// Text reported for a question the user never answered.
const NO_ANSWER: &str = "No answer";

/// Coarse state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for quiz content to arrive.
    Loading,
    /// Content held, questions being answered.
    InProgress,
    /// Past the last question; elapsed time is frozen.
    Completed,
}

/// Rejection of an operation whose precondition is unmet.
///
/// These indicate a caller bug, not a runtime failure: the session state is
/// unchanged when one is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// `initialize` called when the session already holds content.
    AlreadyInitialized,
    /// Operation requires content but the session is still loading.
    NotStarted,
    /// Operation requires an in-progress attempt but it already completed.
    AlreadyCompleted,
    /// `initialize` called with a quiz that has no questions.
    EmptyQuiz,
    /// `select_answer` called for a question other than the current one.
    NotCurrentQuestion { question_id: String },
    /// `advance` called with no selection recorded for the current question.
    NoSelection,
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::AlreadyInitialized => write!(f, "session is already initialized"),
            SessionError::NotStarted => write!(f, "session has no quiz content yet"),
            SessionError::AlreadyCompleted => write!(f, "session is already completed"),
            SessionError::EmptyQuiz => write!(f, "quiz has no questions"),
            SessionError::NotCurrentQuestion { question_id } => {
                write!(f, "question '{}' is not the current question", question_id)
            }
            SessionError::NoSelection => {
                write!(f, "no answer selected for the current question")
            }
        }
    }
}

impl std::error::Error for SessionError {}

/// Scored outcome of an attempt, recomputed on demand from quiz + session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizResult {
    /// Percentage of correct answers, rounded half up. 0-100.
    pub score: u32,
    pub total_questions: usize,
    pub correct_count: usize,
    pub elapsed_seconds: u64,
    /// One entry per question, in quiz order.
    pub per_question: Vec<AnswerReview>,
}

/// Review entry for a single question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerReview {
    pub question_id: String,
    /// The chosen answer's text, or a "No answer" sentinel.
    pub selected_text: String,
    pub is_correct: bool,
}

/// Mutable progress state for one attempt at a quiz.
pub struct QuizSession<C: Clock = SystemClock> {
    clock: C,
    phase: Phase,
    current_index: usize,
    /// Question ids in quiz order, captured at `initialize`.
    question_ids: Vec<String>,
    /// Question id -> chosen answer id. At most one entry per question.
    selections: HashMap<String, String>,
    started_at: Option<u64>,
    elapsed_seconds: Option<u64>,
}

impl QuizSession<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for QuizSession<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> QuizSession<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            phase: Phase::Loading,
            current_index: 0,
            question_ids: Vec::new(),
            selections: HashMap::new(),
            started_at: None,
            elapsed_seconds: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn total_questions(&self) -> usize {
        self.question_ids.len()
    }

    /// The recorded answer id for a question, if one exists.
    pub fn selection_for(&self, question_id: &str) -> Option<&str> {
        self.selections.get(question_id).map(String::as_str)
    }

    /// Whether the current question has a recorded selection.
    pub fn has_current_selection(&self) -> bool {
        self.current_question_id()
            .is_some_and(|id| self.selections.contains_key(id))
    }

    /// Whether the current question is the last one.
    pub fn is_last_question(&self) -> bool {
        !self.question_ids.is_empty() && self.current_index + 1 == self.question_ids.len()
    }

    fn current_question_id(&self) -> Option<&str> {
        self.question_ids.get(self.current_index).map(String::as_str)
    }

    /// Accept quiz content and start the attempt. Valid only while loading.
    pub fn initialize(&mut self, quiz: &Quiz) -> Result<(), SessionError> {
        if self.phase != Phase::Loading {
            return Err(SessionError::AlreadyInitialized);
        }
        if quiz.questions.is_empty() {
            return Err(SessionError::EmptyQuiz);
        }

        self.question_ids = quiz.questions.iter().map(|q| q.id.clone()).collect();
        self.phase = Phase::InProgress;
        self.current_index = 0;
        self.selections.clear();
        self.started_at = Some(self.clock.now_millis());
        self.elapsed_seconds = None;
        Ok(())
    }

    /// Record an answer for the current question. Reselecting replaces the
    /// prior entry; a question never holds more than one selection.
    pub fn select_answer(
        &mut self,
        question_id: &str,
        answer_id: &str,
    ) -> Result<(), SessionError> {
        match self.phase {
            Phase::Loading => return Err(SessionError::NotStarted),
            Phase::Completed => return Err(SessionError::AlreadyCompleted),
            Phase::InProgress => {}
        }
        if self.current_question_id() != Some(question_id) {
            return Err(SessionError::NotCurrentQuestion {
                question_id: question_id.to_string(),
            });
        }

        self.selections
            .insert(question_id.to_string(), answer_id.to_string());
        Ok(())
    }

    /// Move to the next question, or complete the attempt when on the last
    /// one. Requires a selection for the current question.
    pub fn advance(&mut self) -> Result<(), SessionError> {
        match self.phase {
            Phase::Loading => return Err(SessionError::NotStarted),
            Phase::Completed => return Err(SessionError::AlreadyCompleted),
            Phase::InProgress => {}
        }
        if !self.has_current_selection() {
            return Err(SessionError::NoSelection);
        }

        if self.is_last_question() {
            self.phase = Phase::Completed;
            self.elapsed_seconds = Some(self.elapsed_now());
        } else {
            self.current_index += 1;
        }
        Ok(())
    }

    /// Begin a fresh attempt at the already-held quiz. Valid once content has
    /// arrived; content is never re-fetched.
    pub fn restart(&mut self) -> Result<(), SessionError> {
        if self.phase == Phase::Loading {
            return Err(SessionError::NotStarted);
        }

        self.phase = Phase::InProgress;
        self.current_index = 0;
        self.selections.clear();
        self.started_at = Some(self.clock.now_millis());
        self.elapsed_seconds = None;
        Ok(())
    }

    /// Whole seconds since the attempt started, frozen once completed.
    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds.unwrap_or_else(|| self.elapsed_now())
    }

    fn elapsed_now(&self) -> u64 {
        match self.started_at {
            Some(started) => self.clock.now_millis().saturating_sub(started) / 1000,
            None => 0,
        }
    }

    /// Score the attempt against the quiz.
    ///
    /// Pure with respect to session state: a selection id that matches no
    /// answer in its question counts as unanswered, never an error.
    pub fn results(&self, quiz: &Quiz) -> QuizResult {
        let per_question: Vec<AnswerReview> = quiz
            .questions
            .iter()
            .map(|question| {
                let selected = self
                    .selections
                    .get(&question.id)
                    .and_then(|answer_id| question.answer(answer_id));

                AnswerReview {
                    question_id: question.id.clone(),
                    selected_text: selected
                        .map(|a| a.text.clone())
                        .unwrap_or_else(|| NO_ANSWER.to_string()),
                    is_correct: selected.is_some_and(|a| a.is_correct),
                }
            })
            .collect();

        let correct_count = per_question.iter().filter(|r| r.is_correct).count();
        let total_questions = quiz.questions.len();
        let score = if total_questions == 0 {
            0
        } else {
            (100.0 * correct_count as f64 / total_questions as f64).round() as u32
        };

        QuizResult {
            score,
            total_questions,
            correct_count,
            elapsed_seconds: self.elapsed_seconds(),
            per_question,
        }
    }
}
