//! Keyboard input for the play session.
//!
//! Input is collected once per tick as a batch of discrete events. Only
//! key-press transitions count; held keys produce nothing, so a jump is
//! edge-triggered.

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use std::io;
use std::time::Duration;

/// A discrete input event consumed by the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Flap upward (Space or Up).
    Jump,
    /// Abort the session (Esc or q).
    Quit,
}

/// Map a pressed key to a simulation event.
pub fn map_key(code: KeyCode) -> Option<InputEvent> {
    match code {
        KeyCode::Char(' ') | KeyCode::Up => Some(InputEvent::Jump),
        KeyCode::Esc | KeyCode::Char('q') => Some(InputEvent::Quit),
        _ => None,
    }
}

/// Drain every pending terminal event into this tick's batch without
/// blocking.
pub fn poll_events() -> io::Result<Vec<InputEvent>> {
    let mut events = Vec::new();
    while event::poll(Duration::from_millis(0))? {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if let Some(input) = map_key(key.code) {
                events.push(input);
            }
        }
    }
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(map_key(KeyCode::Char(' ')), Some(InputEvent::Jump));
        assert_eq!(map_key(KeyCode::Up), Some(InputEvent::Jump));
        assert_eq!(map_key(KeyCode::Esc), Some(InputEvent::Quit));
        assert_eq!(map_key(KeyCode::Char('q')), Some(InputEvent::Quit));
        assert_eq!(map_key(KeyCode::Char('x')), None);
        assert_eq!(map_key(KeyCode::Down), None);
    }
}
