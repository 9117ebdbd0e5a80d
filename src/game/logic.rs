//! Per-tick game logic: input application, physics, spawning, collision,
//! scoring, and pruning.
//!
//! The functions here mutate a [`GameSession`] and return discrete
//! [`SessionEvent`]s describing what happened, so the presentation layer can
//! map them to audio cues and screen transitions without game logic
//! depending on any UI types.

use super::types::{Bird, GameSession, Pipe, SessionPhase};
use crate::constants::{OUT_OF_BOUNDS_MARGIN, PLAY_HEIGHT};
use crate::input::InputEvent;
use rand::Rng;

/// A single event produced while applying input or running a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// The bird received a jump impulse.
    Jumped,
    /// A pipe was cleared; `score` is the new total.
    Scored { score: u32 },
    /// The bird hit a pipe segment; the session is over.
    Collided { score: u32 },
    /// The bird left the play area; the session is over.
    WentOutOfBounds { score: u32 },
}

/// Apply one tick's batch of input events. A quit request takes effect
/// immediately; events after it in the batch are dropped.
pub fn process_events(session: &mut GameSession, events: &[InputEvent]) -> Vec<SessionEvent> {
    let mut out = Vec::new();
    for event in events {
        if session.phase.is_terminal() {
            break;
        }
        match event {
            InputEvent::Jump => {
                session.bird.jump();
                out.push(SessionEvent::Jumped);
            }
            InputEvent::Quit => {
                session.phase = SessionPhase::QuitRequested;
            }
        }
    }
    out
}

/// Run one fixed-rate simulation tick: bird physics, spawn check, then the
/// pipe pass (advance, collide, score, prune) and the bounds check.
pub fn process_tick<R: Rng>(session: &mut GameSession, rng: &mut R) -> Vec<SessionEvent> {
    let mut events = Vec::new();
    if session.phase.is_terminal() {
        return events;
    }
    session.tick_count += 1;

    session.bird.update();

    if session.scheduler.tick(session.score) {
        session.spawn_pipe(rng);
    }

    // Pipes are visited in spawn order; removal must not skip the next
    // entry, hence the index loop.
    let mut i = 0;
    while i < session.pipes.len() {
        session.pipes[i].advance();

        if pipe_hits_bird(&session.pipes[i], &session.bird) {
            session.phase = SessionPhase::Collided;
            events.push(SessionEvent::Collided {
                score: session.score,
            });
            return events;
        }

        if session.pipes[i].right() < session.bird.left() as f64 {
            session.pipes[i].passed = true;
            if !session.pipes[i].scored {
                session.pipes[i].scored = true;
                session.score += 1;
                events.push(SessionEvent::Scored {
                    score: session.score,
                });
            }
        }

        if session.pipes[i].is_offscreen() {
            session.pipes.remove(i);
        } else {
            i += 1;
        }
    }

    if bird_out_of_bounds(&session.bird) {
        session.phase = SessionPhase::OutOfBounds;
        events.push(SessionEvent::WentOutOfBounds {
            score: session.score,
        });
    }

    events
}

/// Pixel-exact overlap between the bird and either segment of a pipe.
pub fn pipe_hits_bird(pipe: &Pipe, bird: &Bird) -> bool {
    let dx = pipe.x as i32 - bird.left();
    let bird_top = bird.top();
    let top_offset = (dx, pipe.top_segment_top() - bird_top);
    let bottom_offset = (dx, pipe.bottom_start - bird_top);

    bird.mask.overlap(&pipe.top_mask, top_offset)
        || bird.mask.overlap(&pipe.bottom_mask, bottom_offset)
}

/// Terminal bounds check: the bird may overshoot the visible area by a
/// small margin before the session ends.
pub fn bird_out_of_bounds(bird: &Bird) -> bool {
    bird.top() <= -OUT_OF_BOUNDS_MARGIN || bird.bottom() >= PLAY_HEIGHT + OUT_OF_BOUNDS_MARGIN
}
