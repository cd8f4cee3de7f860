//! Shared application state for the TUI.
//!
//! `App` owns the fetched quiz and the attempt session, plus view-only state
//! (answer cursor, review scroll) that never belongs in the session itself.
//! User intents are forwarded into [`QuizSession`]; the session's typed
//! rejections are dropped here because the UI already disables those actions.

use crate::models::{Question, Quiz};
use crate::provider::LoadError;
use crate::session::{Phase, QuizResult, QuizSession};

/// Which of the mutually exclusive screens to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Loading,
    LoadFailed,
    Question,
    Results,
}

pub struct App {
    quiz: Option<Quiz>,
    session: QuizSession,
    /// Highlighted answer index on the question screen.
    cursor: usize,
    /// Scroll offset of the results review list.
    review_scroll: usize,
    load_error: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        Self {
            quiz: None,
            session: QuizSession::new(),
            cursor: 0,
            review_scroll: 0,
            load_error: None,
            should_quit: false,
        }
    }

    pub fn screen(&self) -> Screen {
        if self.load_error.is_some() {
            return Screen::LoadFailed;
        }
        match self.session.phase() {
            Phase::Loading => Screen::Loading,
            Phase::InProgress => Screen::Question,
            Phase::Completed => Screen::Results,
        }
    }

    pub fn quiz(&self) -> Option<&Quiz> {
        self.quiz.as_ref()
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn review_scroll(&self) -> usize {
        self.review_scroll
    }

    /// The question at the session's current index.
    pub fn current_question(&self) -> Option<&Question> {
        self.quiz
            .as_ref()
            .and_then(|quiz| quiz.questions.get(self.session.current_index()))
    }

    pub fn results(&self) -> Option<QuizResult> {
        self.quiz.as_ref().map(|quiz| self.session.results(quiz))
    }

    /// The provider resolved with a quiz. Called at most once.
    pub fn content_loaded(&mut self, quiz: Quiz) {
        match self.session.initialize(&quiz) {
            Ok(()) => self.quiz = Some(quiz),
            Err(err) => {
                if self.quiz.is_none() {
                    self.load_error = Some(err.to_string());
                }
            }
        }
    }

    /// The provider failed. There is no retry; the screen is terminal.
    pub fn content_failed(&mut self, err: &LoadError) {
        self.load_error = Some(err.to_string());
    }

    pub fn cursor_down(&mut self) {
        let Some(len) = self.current_question().map(|q| q.answers.len()) else {
            return;
        };
        self.cursor = (self.cursor + 1) % len;
    }

    pub fn cursor_up(&mut self) {
        let Some(len) = self.current_question().map(|q| q.answers.len()) else {
            return;
        };
        self.cursor = (self.cursor + len - 1) % len;
    }

    /// Record the highlighted answer as the selection for the current
    /// question. Reselecting replaces the previous choice.
    pub fn select_highlighted(&mut self) {
        let Some(question) = self.current_question() else {
            return;
        };
        let Some(answer) = question.answers.get(self.cursor) else {
            return;
        };
        let (question_id, answer_id) = (question.id.clone(), answer.id.clone());
        let _ = self.session.select_answer(&question_id, &answer_id);
    }

    /// Move to the next question or finish the quiz. Ignored while the
    /// current question has no selection.
    pub fn advance(&mut self) {
        if self.session.advance().is_ok() {
            self.cursor = self.cursor_home();
            self.review_scroll = 0;
        }
    }

    /// Start a fresh attempt at the already-loaded quiz.
    pub fn restart(&mut self) {
        if self.session.restart().is_ok() {
            self.cursor = 0;
            self.review_scroll = 0;
        }
    }

    pub fn scroll_review_down(&mut self) {
        let total = self.quiz.as_ref().map_or(0, Quiz::total_questions);
        // Each review entry takes up to four rendered lines.
        let max_scroll = (total * 4).saturating_sub(1);
        self.review_scroll = (self.review_scroll + 1).min(max_scroll);
    }

    pub fn scroll_review_up(&mut self) {
        self.review_scroll = self.review_scroll.saturating_sub(1);
    }

    /// Cursor position after advancing: the already-recorded selection of the
    /// new current question, or the first answer.
    fn cursor_home(&self) -> usize {
        let Some(question) = self.current_question() else {
            return 0;
        };
        self.session
            .selection_for(&question.id)
            .and_then(|answer_id| question.answers.iter().position(|a| a.id == answer_id))
            .unwrap_or(0)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
