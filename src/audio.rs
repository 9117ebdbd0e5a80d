//! Fire-and-forget audio cues.
//!
//! The simulation never calls audio directly; the binary maps
//! [`SessionEvent`]s to cues and hands them to whichever [`AudioPlayer`] is
//! installed. Playing a cue can never fail.

use crate::game::logic::SessionEvent;
use std::io::{self, Write};

/// The three cues a session can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Jump,
    Score,
    GameOver,
}

/// Sink for sound cues. Implementations must be silent no-ops when they
/// cannot produce sound.
pub trait AudioPlayer {
    fn play(&self, cue: SoundCue);
}

/// Plays nothing. Used in tests and for muted sessions.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAudio;

impl AudioPlayer for NullAudio {
    fn play(&self, _cue: SoundCue) {}
}

/// Rings the terminal bell for score and game-over cues. Flap cues stay
/// silent; one bell per flap would drown the terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalBell;

impl AudioPlayer for TerminalBell {
    fn play(&self, cue: SoundCue) {
        match cue {
            SoundCue::Jump => {}
            SoundCue::Score | SoundCue::GameOver => {
                let mut out = io::stdout();
                let _ = out.write_all(b"\x07");
                let _ = out.flush();
            }
        }
    }
}

/// The cue a session event maps to, if any.
pub fn cue_for(event: &SessionEvent) -> SoundCue {
    match event {
        SessionEvent::Jumped => SoundCue::Jump,
        SessionEvent::Scored { .. } => SoundCue::Score,
        SessionEvent::Collided { .. } | SessionEvent::WentOutOfBounds { .. } => SoundCue::GameOver,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cue_mapping() {
        assert_eq!(cue_for(&SessionEvent::Jumped), SoundCue::Jump);
        assert_eq!(cue_for(&SessionEvent::Scored { score: 3 }), SoundCue::Score);
        assert_eq!(
            cue_for(&SessionEvent::Collided { score: 3 }),
            SoundCue::GameOver
        );
        assert_eq!(
            cue_for(&SessionEvent::WentOutOfBounds { score: 3 }),
            SoundCue::GameOver
        );
    }

    #[test]
    fn test_null_audio_is_silent() {
        NullAudio.play(SoundCue::GameOver);
    }
}
