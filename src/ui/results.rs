//! Results screen: score summary and per-question review.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;

const QUESTION_PREVIEW_LENGTH: usize = 55;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let (Some(quiz), Some(result)) = (app.quiz(), app.results()) else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(7),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[1], &result);
    render_review(frame, chunks[2], quiz, &result, app.review_scroll());
    render_controls(frame, chunks[3]);
}

fn grade_color(score: u32) -> Color {
    match score {
        90..=100 => Color::Green,
        70..=89 => Color::Cyan,
        50..=69 => Color::Yellow,
        _ => Color::Red,
    }
}

fn render_score_summary(frame: &mut Frame, area: Rect, result: &crate::session::QuizResult) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "QUIZ COMPLETE",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "{}%   {} / {} correct",
                result.score, result.correct_count, result.total_questions
            ),
            Style::default().fg(grade_color(result.score)).bold(),
        )),
        Line::from(Span::styled(
            format!("Time: {}", format_elapsed(result.elapsed_seconds)),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_review(
    frame: &mut Frame,
    area: Rect,
    quiz: &crate::models::Quiz,
    result: &crate::session::QuizResult,
    scroll: usize,
) {
    let mut lines: Vec<Line> = Vec::new();

    for (question, review) in quiz.questions.iter().zip(result.per_question.iter()) {
        let (symbol, color) = if review.is_correct {
            ("+", Color::Green)
        } else {
            ("-", Color::Red)
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", symbol), Style::default().fg(color)),
            Span::styled(
                truncate_question(&question.text),
                Style::default().fg(Color::White),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::raw("   "),
            Span::styled("Your answer: ", Style::default().fg(Color::DarkGray)),
            Span::styled(review.selected_text.as_str(), Style::default().fg(color)),
        ]));
        if !review.is_correct {
            let correct_text = question
                .correct_answer()
                .map(|a| a.text.as_str())
                .unwrap_or("?");
            lines.push(Line::from(vec![
                Span::raw("   "),
                Span::styled("Correct answer: ", Style::default().fg(Color::DarkGray)),
                Span::styled(correct_text, Style::default().fg(Color::Green)),
            ]));
        }
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::NONE)
                .title(" Question Review ")
                .title_style(Style::default().fg(Color::Cyan))
                .padding(Padding::horizontal(1)),
        )
        .scroll((scroll as u16, 0));
    frame.render_widget(widget, area);
}

fn truncate_question(text: &str) -> String {
    let char_count = text.chars().count();
    if char_count > QUESTION_PREVIEW_LENGTH {
        let truncated: String = text.chars().take(QUESTION_PREVIEW_LENGTH).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k scroll  ·  r restart  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

/// Elapsed time as `minutes:seconds`, seconds zero-padded.
pub fn format_elapsed(total_seconds: u64) -> String {
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_formatting_zero_pads_seconds() {
        assert_eq!(format_elapsed(0), "0:00");
        assert_eq!(format_elapsed(9), "0:09");
        assert_eq!(format_elapsed(60), "1:00");
        assert_eq!(format_elapsed(95), "1:35");
        assert_eq!(format_elapsed(605), "10:05");
    }

    #[test]
    fn long_question_text_is_truncated() {
        let long = "x".repeat(80);
        let preview = truncate_question(&long);
        assert_eq!(preview.chars().count(), QUESTION_PREVIEW_LENGTH + 3);
        assert!(preview.ends_with("..."));

        assert_eq!(truncate_question("short"), "short");
    }
}
