//! # quiz-tui
//!
//! A terminal quiz-taking application.
//!
//! Quiz content comes from a [`ContentProvider`] (the built-in fixture or a
//! JSON file), one attempt at it is tracked by the [`QuizSession`] state
//! machine, and three screens render from that state: loading, the current
//! question, and the scored results.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use quiz_tui::FixtureProvider;
//!
//! #[tokio::main]
//! async fn main() -> std::io::Result<()> {
//!     quiz_tui::run(FixtureProvider::new()).await
//! }
//! ```

mod app;
mod clock;
mod models;
mod provider;
mod session;
pub mod terminal;
mod ui;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use tokio::sync::Mutex;

pub use app::{App, Screen};
pub use clock::{Clock, SystemClock};
pub use models::{Answer, Difficulty, Question, Quiz};
pub use provider::{
    ContentProvider, FileProvider, FixtureProvider, LoadError, DEFAULT_FETCH_DELAY,
};
pub use session::{AnswerReview, Phase, QuizResult, QuizSession, SessionError};

/// Shared application state between the TUI loop and the fetch task.
type SharedApp = Arc<Mutex<App>>;

/// Run the quiz in the terminal.
///
/// Fetches content from the provider exactly once while the loading screen is
/// up, then drives the question and results screens until the user quits.
pub async fn run<P>(provider: P) -> io::Result<()>
where
    P: ContentProvider + Send + 'static,
{
    let app = Arc::new(Mutex::new(App::new()));

    let fetch_app = Arc::clone(&app);
    let fetch_task = tokio::spawn(async move {
        match provider.fetch().await {
            Ok(quiz) => fetch_app.lock().await.content_loaded(quiz),
            Err(err) => fetch_app.lock().await.content_failed(&err),
        }
    });

    let result = run_tui(&app).await;
    fetch_task.abort();
    result
}

async fn run_tui(app: &SharedApp) -> io::Result<()> {
    let mut terminal = terminal::init()?;
    let result = event_loop(&mut terminal, app).await;
    terminal::restore()?;
    result
}

async fn event_loop(terminal: &mut terminal::QuizTerminal, app: &SharedApp) -> io::Result<()> {
    loop {
        {
            let app = app.lock().await;
            if app.should_quit {
                break;
            }
            terminal.draw(|frame| ui::render(frame, &app))?;
        }

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                let mut app = app.lock().await;
                if handle_input(&mut app, key.code) {
                    app.should_quit = true;
                }
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    match app.screen() {
        Screen::Loading => matches!(key, KeyCode::Char('q') | KeyCode::Char('Q')),
        Screen::LoadFailed => handle_load_failed_input(key),
        Screen::Question => handle_question_input(app, key),
        Screen::Results => handle_results_input(app, key),
    }
}

fn handle_load_failed_input(key: KeyCode) -> bool {
    matches!(
        key,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc | KeyCode::Enter
    )
}

fn handle_question_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.cursor_up();
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.cursor_down();
            false
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.select_highlighted();
            false
        }
        KeyCode::Right | KeyCode::Tab | KeyCode::Char('n') | KeyCode::Char('N') => {
            app.advance();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_results_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Down | KeyCode::Char('j') => {
            app.scroll_review_down();
            false
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.scroll_review_up();
            false
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.restart();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded_app() -> App {
        let mut app = App::new();
        let quiz: Quiz = serde_json::from_str(include_str!("../fixture.json")).unwrap();
        app.content_loaded(quiz);
        app
    }

    #[test]
    fn quit_works_on_every_screen() {
        let mut app = App::new();
        assert!(handle_input(&mut app, KeyCode::Char('q')));

        let mut app = loaded_app();
        assert!(handle_input(&mut app, KeyCode::Char('Q')));

        let mut app = App::new();
        app.content_failed(&LoadError::Invalid("x".to_string()));
        assert!(handle_input(&mut app, KeyCode::Esc));
    }

    #[test]
    fn keys_drive_a_full_attempt() {
        let mut app = loaded_app();

        for _ in 0..5 {
            assert_eq!(app.screen(), Screen::Question);
            handle_input(&mut app, KeyCode::Down);
            handle_input(&mut app, KeyCode::Enter);
            handle_input(&mut app, KeyCode::Char('n'));
        }

        assert_eq!(app.screen(), Screen::Results);
        let result = app.results().unwrap();
        assert_eq!(result.total_questions, 5);

        handle_input(&mut app, KeyCode::Char('r'));
        assert_eq!(app.screen(), Screen::Question);
        assert_eq!(app.session().current_index(), 0);
    }

    #[test]
    fn advance_key_without_selection_stays_put() {
        let mut app = loaded_app();
        handle_input(&mut app, KeyCode::Char('n'));
        assert_eq!(app.screen(), Screen::Question);
        assert_eq!(app.session().current_index(), 0);
    }
}
