//! Renders the 400x600 virtual-pixel play area into the terminal cell grid.
//!
//! Every cell samples the same sprite masks the collision code uses, so
//! what the player sees is what the simulation tests against.

use crate::assets::GameAssets;
use crate::constants::{PLAY_HEIGHT, PLAY_WIDTH};
use crate::game::types::{GameSession, Pipe};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render one frame of the play session.
pub fn render_session(frame: &mut Frame, area: Rect, session: &GameSession, assets: &GameAssets) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" Score: {} ", session.score))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width as usize;
    let height = inner.height as usize;
    if width == 0 || height == 0 {
        return;
    }

    // Scale terminal cells to game pixels.
    let x_scale = PLAY_WIDTH as f64 / width as f64;
    let y_scale = PLAY_HEIGHT as f64 / height as f64;

    let mut lines = Vec::with_capacity(height);
    for row in 0..height {
        let gy = ((row as f64 + 0.5) * y_scale) as i32;
        let mut spans = Vec::with_capacity(width);
        for col in 0..width {
            let gx = ((col as f64 + 0.5) * x_scale) as i32;
            spans.push(cell_span(gx, gy, session, assets));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Resolve the cell covering game pixel (gx, gy): bird over pipes over
/// background.
fn cell_span(gx: i32, gy: i32, session: &GameSession, assets: &GameAssets) -> Span<'static> {
    let bird = &session.bird;
    if bird.mask.get(gx - bird.left(), gy - bird.top()) {
        return Span::styled("█", Style::default().fg(bird.sprite.color));
    }

    for pipe in &session.pipes {
        if pipe_covers(pipe, gx, gy) {
            return Span::styled("█", Style::default().fg(assets.pipe.color));
        }
    }

    if assets.background.is_opaque(gx, gy) {
        Span::styled(" ", Style::default().bg(assets.background.color))
    } else {
        Span::raw(" ")
    }
}

fn pipe_covers(pipe: &Pipe, gx: i32, gy: i32) -> bool {
    let px = pipe.x as i32;
    if pipe.top_mask.get(gx - px, gy - pipe.top_segment_top()) {
        return true;
    }
    // The bottom segment honors the clamped draw height.
    let local_y = gy - pipe.bottom_start;
    local_y < pipe.bottom_draw_height && pipe.bottom_mask.get(gx - px, local_y)
}
