//! In-progress question screen.

use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::app::App;
use crate::models::Difficulty;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let (Some(quiz), Some(question)) = (app.quiz(), app.current_question()) else {
        return;
    };
    let session = app.session();

    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_header(frame, chunks[0], &quiz.title);
    render_progress(
        frame,
        chunks[1],
        session.current_index() + 1,
        quiz.total_questions(),
    );
    render_badges(frame, chunks[2], question.difficulty, &question.category);
    render_question_text(frame, chunks[3], &question.text);
    render_answers(frame, chunks[4], app);
    render_action(
        frame,
        chunks[5],
        session.is_last_question(),
        session.has_current_selection(),
    );
    render_controls(frame, chunks[6]);
}

fn render_header(frame: &mut Frame, area: Rect, title: &str) {
    let widget = Paragraph::new(title)
        .alignment(Alignment::Center)
        .fg(Color::Cyan)
        .bold();
    frame.render_widget(widget, area);
}

fn render_progress(frame: &mut Frame, area: Rect, current: usize, total: usize) {
    let progress = format!("Question {} of {}", current, total);
    let widget = Paragraph::new(progress)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_badges(frame: &mut Frame, area: Rect, difficulty: Difficulty, category: &str) {
    let line = Line::from(vec![
        Span::styled(
            format!("[{}]", difficulty.label()),
            Style::default().fg(difficulty_color(difficulty)).bold(),
        ),
        Span::raw("  "),
        Span::styled(category, Style::default().fg(Color::Gray)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn difficulty_color(difficulty: Difficulty) -> Color {
    match difficulty {
        Difficulty::Easy => Color::Green,
        Difficulty::Medium => Color::Yellow,
        Difficulty::Hard => Color::Red,
    }
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_answers(frame: &mut Frame, area: Rect, app: &App) {
    let Some(question) = app.current_question() else {
        return;
    };
    let selected_id = app.session().selection_for(&question.id);

    let mut lines: Vec<Line> = Vec::with_capacity(question.answers.len() * 2);
    for (index, answer) in question.answers.iter().enumerate() {
        let at_cursor = index == app.cursor();
        let is_selected = selected_id == Some(answer.id.as_str());

        let style = if is_selected {
            Style::default().fg(Color::Cyan).bold()
        } else if at_cursor {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Gray)
        };
        let cursor = if at_cursor { ">" } else { " " };
        let radio = if is_selected { "(x)" } else { "( )" };
        let label = (b'A' + index as u8) as char;

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", cursor), style),
            Span::styled(format!("{} ", radio), style),
            Span::styled(format!("{}. ", label), style),
            Span::styled(answer.text.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_action(frame: &mut Frame, area: Rect, is_last: bool, enabled: bool) {
    let label = if is_last { "Finish Quiz" } else { "Next Question" };
    let widget = if enabled {
        Paragraph::new(format!("[ {} ]", label))
            .alignment(Alignment::Center)
            .fg(Color::Green)
            .bold()
    } else {
        Paragraph::new(format!("[ {} ]  (select an answer first)", label))
            .alignment(Alignment::Center)
            .fg(Color::DarkGray)
    };
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k navigate  ·  enter select  ·  n next  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
