//! Title and game-over screens, with the persisted top-3 table.

use crate::highscores::HighScoreTable;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the title screen.
pub fn render_title(frame: &mut Frame, area: Rect, highscores: &HighScoreTable) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "S K Y B I R D",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Flap through the gaps. One point per pipe."),
        Line::from(""),
    ];
    push_highscore_lines(&mut lines, highscores, None);
    lines.push(Line::from(""));
    push_prompt_lines(&mut lines, "Press Space to play");

    render_screen(frame, area, " Skybird ", Color::Cyan, lines);
}

/// Render the end-of-session screen with the final score and the updated
/// table.
pub fn render_game_over(frame: &mut Frame, area: Rect, score: u32, highscores: &HighScoreTable) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "GAME OVER",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("Score: "),
            Span::styled(
                format!("{}", score),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
    ];
    push_highscore_lines(&mut lines, highscores, Some(score));
    lines.push(Line::from(""));
    push_prompt_lines(&mut lines, "Press Space to play again");

    render_screen(frame, area, " Game Over ", Color::Red, lines);
}

fn push_highscore_lines(lines: &mut Vec<Line>, highscores: &HighScoreTable, highlight: Option<u32>) {
    lines.push(Line::from(Span::styled(
        "Best Runs",
        Style::default().fg(Color::Cyan),
    )));
    for (rank, &entry) in highscores.entries().iter().enumerate() {
        // The run just finished glows gold in its table slot.
        let style = match highlight {
            Some(score) if score == entry && score > 0 => Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            _ => Style::default().fg(Color::White),
        };
        lines.push(Line::from(Span::styled(
            format!("{}. {}", rank + 1, entry),
            style,
        )));
    }
}

fn push_prompt_lines(lines: &mut Vec<Line>, play_prompt: &str) {
    lines.push(Line::from(Span::styled(
        play_prompt.to_string(),
        Style::default().fg(Color::Green),
    )));
    lines.push(Line::from(Span::styled(
        "Esc to exit",
        Style::default().fg(Color::DarkGray),
    )));
}

fn render_screen(frame: &mut Frame, area: Rect, title: &str, accent: Color, lines: Vec<Line>) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, inner);
}
