/// Ratatui rendering of engine state. Reads queries, draws, nothing else.
use ratatui::layout::{Alignment, Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::game::engine::GameEngine;
use crate::game::round::{Outcome, MAX_WRONG_GUESSES};
use crate::ui::figure;

pub fn render(frame: &mut Frame, engine: &GameEngine, notice: Option<&str>) {
    let [figure_area, word_area, letters_area, hint_area, status_area] = Layout::vertical([
        Constraint::Length(9),
        Constraint::Length(3),
        Constraint::Length(4),
        Constraint::Length(3),
        Constraint::Min(3),
    ])
    .areas(frame.area());

    let wrong = engine.round().wrong_guesses();
    let gallows = Paragraph::new(figure::stage(wrong))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(format!(
            " Hangman — wrong guesses {wrong}/{MAX_WRONG_GUESSES} "
        )));
    frame.render_widget(gallows, figure_area);

    let word = engine
        .display_word()
        .chars()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    let word_line = Paragraph::new(Line::styled(
        word,
        Style::default().add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title(" Word "));
    frame.render_widget(word_line, word_area);

    frame.render_widget(letter_grid(engine), letters_area);

    let hint_text = engine.revealed_hint().unwrap_or("No hints given yet");
    let hint = Paragraph::new(hint_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Hint "));
    frame.render_widget(hint, hint_area);

    frame.render_widget(status_lines(engine, notice), status_area);
}

/// A-Z in two rows: guessed letters dimmed, the pending selection
/// highlighted.
fn letter_grid(engine: &GameEngine) -> Paragraph<'static> {
    let rows: Vec<Line> = ('A'..='Z')
        .collect::<Vec<_>>()
        .chunks(13)
        .map(|chunk| {
            let spans: Vec<Span> = chunk
                .iter()
                .map(|&letter| {
                    let style = if engine.pending() == Some(letter) {
                        Style::default()
                            .fg(Color::Black)
                            .bg(Color::Yellow)
                            .add_modifier(Modifier::BOLD)
                    } else if engine.round().is_guessed(letter) {
                        Style::default()
                            .fg(Color::DarkGray)
                            .add_modifier(Modifier::CROSSED_OUT)
                    } else {
                        Style::default()
                    };
                    Span::styled(format!(" {letter} "), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    Paragraph::new(rows).alignment(Alignment::Center)
}

fn status_lines(engine: &GameEngine, notice: Option<&str>) -> Paragraph<'static> {
    let mut lines = Vec::new();
    if let Some(text) = notice {
        let color = match engine.outcome() {
            Outcome::Win => Color::Green,
            Outcome::Lose => Color::Red,
            Outcome::InProgress => Color::Yellow,
        };
        lines.push(Line::styled(
            text.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
    } else {
        lines.push(Line::from(""));
    }
    lines.push(Line::styled(
        "A-Z select · Enter submit · Tab hint · Ctrl-N new round · Esc quit",
        Style::default().fg(Color::DarkGray),
    ));

    Paragraph::new(lines).alignment(Alignment::Center)
}
