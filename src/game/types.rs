//! Core data structures for the play session: bird, pipes, spawn pacing,
//! and the session state machine.

use crate::assets::{GameAssets, Mask, Sprite};
use crate::constants::{
    BASE_GAP, BIRD_CENTER_X, GAP_BAND_HIGH, GAP_BAND_LOW, GRAVITY, JUMP_FORCE, MAX_SPEED, MIN_GAP,
    PIPE_DESPAWN_MARGIN, PIPE_SPEED, PLAY_HEIGHT, PLAY_WIDTH, SPAWN_BASE_TICKS,
    SPAWN_FLOOR_TICKS, SPAWN_SCORE_DIVISOR, SPEED_INCREASE,
};
use rand::Rng;

/// The player avatar. Horizontal position is fixed at spawn; only the
/// vertical axis is simulated.
#[derive(Debug, Clone)]
pub struct Bird {
    /// Left edge in pixels, constant after spawn.
    pub x: i32,
    /// Top edge in pixels (positive = down).
    pub y: f64,
    /// Vertical velocity in pixels/tick (positive = down).
    pub velocity: f64,
    pub sprite: Sprite,
    pub mask: Mask,
}

impl Bird {
    /// Spawn at the fixed column, vertically centered in the play area.
    pub fn new(sprite: Sprite) -> Self {
        let x = BIRD_CENTER_X - sprite.width() as i32 / 2;
        let y = (PLAY_HEIGHT - sprite.height() as i32) as f64 / 2.0;
        let mask = sprite.mask();
        Self {
            x,
            y,
            velocity: 0.0,
            sprite,
            mask,
        }
    }

    /// One physics step: gravity into velocity, velocity into position.
    /// The collision mask is re-derived from the current silhouette.
    pub fn update(&mut self) {
        self.velocity += GRAVITY;
        self.y += self.velocity;
        self.mask = self.sprite.mask();
    }

    /// Set velocity to the fixed upward impulse, overriding any prior
    /// velocity (not additive).
    pub fn jump(&mut self) {
        self.velocity = JUMP_FORCE;
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn top(&self) -> i32 {
        self.y as i32
    }

    pub fn bottom(&self) -> i32 {
        self.top() + self.sprite.height() as i32
    }
}

/// One obstacle column: a hanging top segment and a rising bottom segment
/// with a passable gap between them. All difficulty parameters are frozen
/// at spawn time.
#[derive(Debug, Clone)]
pub struct Pipe {
    /// Left edge of both segments (f64 for continuous scrolling).
    pub x: f64,
    /// Segment width in pixels.
    pub width: i32,
    /// Segment sprite height in pixels.
    pub segment_height: i32,
    /// Gap size in pixels, frozen at spawn.
    pub gap: i32,
    /// Scroll speed in pixels/tick, frozen at spawn.
    pub speed: f64,
    /// Bottom edge of the top segment (upper gap boundary).
    pub top_end: i32,
    /// Top edge of the bottom segment (lower gap boundary).
    pub bottom_start: i32,
    /// Render height of the bottom segment; zero when the gap boundary
    /// falls at or below the play-area bottom edge. Collision geometry is
    /// unaffected by this clamp.
    pub bottom_draw_height: i32,
    /// The bird has horizontally cleared this pipe.
    pub passed: bool,
    /// Score has been credited for this pipe.
    pub scored: bool,
    pub top_mask: Mask,
    pub bottom_mask: Mask,
}

impl Pipe {
    /// Gap size for a pipe spawned at the given score: narrows one pixel
    /// per ten points, floored.
    pub fn gap_for_score(score: u32) -> i32 {
        (BASE_GAP - (score / 10) as i32).max(MIN_GAP)
    }

    /// Scroll speed for a pipe spawned at the given score: linear ramp,
    /// capped.
    pub fn speed_for_score(score: u32) -> f64 {
        (PIPE_SPEED + score as f64 * SPEED_INCREASE).min(MAX_SPEED)
    }

    /// Spawn a pipe with a randomized gap center.
    pub fn new<R: Rng>(score: u32, bottom: &Sprite, top: &Sprite, rng: &mut R) -> Self {
        let low = (PLAY_HEIGHT as f64 * GAP_BAND_LOW) as i32;
        let high = (PLAY_HEIGHT as f64 * GAP_BAND_HIGH) as i32;
        let gap_center = rng.gen_range(low..=high);
        Self::at_gap_center(score, gap_center, bottom, top)
    }

    /// Spawn a pipe with an explicit gap center. The column starts
    /// horizontally centered on the play-area right edge.
    pub fn at_gap_center(score: u32, gap_center: i32, bottom: &Sprite, top: &Sprite) -> Self {
        let gap = Self::gap_for_score(score);
        let width = bottom.width() as i32;
        let segment_height = bottom.height() as i32;

        let top_end = gap_center - gap / 2;
        let bottom_start = gap_center + gap / 2;
        let bottom_draw_height = if bottom_start < PLAY_HEIGHT {
            segment_height
        } else {
            0
        };

        Self {
            x: (PLAY_WIDTH - width / 2) as f64,
            width,
            segment_height,
            gap,
            speed: Self::speed_for_score(score),
            top_end,
            bottom_start,
            bottom_draw_height,
            passed: false,
            scored: false,
            top_mask: top.mask(),
            bottom_mask: bottom.mask(),
        }
    }

    /// Scroll both segments left by the frozen per-tick speed.
    pub fn advance(&mut self) {
        self.x -= self.speed;
    }

    pub fn right(&self) -> f64 {
        self.x + self.width as f64
    }

    /// Top edge of the hanging segment (may be above the play area).
    pub fn top_segment_top(&self) -> i32 {
        self.top_end - self.segment_height
    }

    /// True once the column has scrolled far enough past the left edge to
    /// be discarded.
    pub fn is_offscreen(&self) -> bool {
        self.right() < -PIPE_DESPAWN_MARGIN
    }
}

/// Tick-counter pacing for pipe introduction. The interval shortens as the
/// score grows, down to a fixed floor.
#[derive(Debug, Clone, Default)]
pub struct SpawnScheduler {
    ticks_since_spawn: u32,
}

impl SpawnScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ticks that must elapse between spawns at the given score.
    pub fn interval_for_score(score: u32) -> u32 {
        SPAWN_BASE_TICKS
            .saturating_sub(score / SPAWN_SCORE_DIVISOR)
            .max(SPAWN_FLOOR_TICKS)
    }

    /// Advance the counter one tick; true when a spawn is due, resetting
    /// the counter.
    pub fn tick(&mut self, score: u32) -> bool {
        self.ticks_since_spawn += 1;
        if self.ticks_since_spawn > Self::interval_for_score(score) {
            self.ticks_since_spawn = 0;
            true
        } else {
            false
        }
    }
}

/// Session state machine. All phases other than `Running` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Running,
    /// The bird overlapped a pipe segment.
    Collided,
    /// The bird left the play area past the allowed margin.
    OutOfBounds,
    /// The player asked to abort; the score is not recorded.
    QuitRequested,
}

impl SessionPhase {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SessionPhase::Running)
    }
}

/// How a finished session is reported to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The run ended in collision or out-of-bounds; record the score.
    Completed { score: u32 },
    /// The player quit mid-run; do not record.
    Aborted,
}

/// One play session: the bird, the live pipes in spawn order, the score,
/// and the spawn pacing state.
pub struct GameSession {
    pub bird: Bird,
    pub pipes: Vec<Pipe>,
    pub scheduler: SpawnScheduler,
    pub score: u32,
    pub phase: SessionPhase,
    pub tick_count: u64,
    pipe_sprite: Sprite,
    pipe_top_sprite: Sprite,
}

impl GameSession {
    pub fn new(assets: &GameAssets) -> Self {
        Self {
            bird: Bird::new(assets.bird.clone()),
            pipes: Vec::new(),
            scheduler: SpawnScheduler::new(),
            score: 0,
            phase: SessionPhase::Running,
            tick_count: 0,
            pipe_sprite: assets.pipe.clone(),
            pipe_top_sprite: assets.pipe_top.clone(),
        }
    }

    /// Spawn a new pipe parameterized by the current score.
    pub fn spawn_pipe<R: Rng>(&mut self, rng: &mut R) {
        let pipe = Pipe::new(self.score, &self.pipe_sprite, &self.pipe_top_sprite, rng);
        self.pipes.push(pipe);
    }

    /// The terminal result, or `None` while the session is still running.
    pub fn outcome(&self) -> Option<SessionOutcome> {
        match self.phase {
            SessionPhase::Running => None,
            SessionPhase::QuitRequested => Some(SessionOutcome::Aborted),
            SessionPhase::Collided | SessionPhase::OutOfBounds => {
                Some(SessionOutcome::Completed { score: self.score })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{placeholder, AssetProvider};
    use crate::constants::{OUT_OF_BOUNDS_MARGIN, PIPE_DESPAWN_MARGIN};

    fn test_assets() -> GameAssets {
        // The provider falls back to placeholders, so any root works.
        GameAssets::load(&AssetProvider::new("no_such_dir"))
    }

    #[test]
    fn test_gap_narrows_with_score_and_floors() {
        assert_eq!(Pipe::gap_for_score(0), 200);
        assert_eq!(Pipe::gap_for_score(25), 198);
        assert_eq!(Pipe::gap_for_score(1000), 120);

        let mut prev = Pipe::gap_for_score(0);
        for score in 1..1200 {
            let gap = Pipe::gap_for_score(score);
            assert!(gap <= prev);
            assert!(gap >= MIN_GAP);
            prev = gap;
        }
    }

    #[test]
    fn test_speed_ramps_with_score_and_caps() {
        assert!((Pipe::speed_for_score(0) - 3.0).abs() < f64::EPSILON);
        assert!((Pipe::speed_for_score(25) - 3.125).abs() < f64::EPSILON);
        assert!((Pipe::speed_for_score(1000) - 6.0).abs() < f64::EPSILON);

        let mut prev = Pipe::speed_for_score(0);
        for score in 1..1200 {
            let speed = Pipe::speed_for_score(score);
            assert!(speed >= prev);
            assert!(speed <= MAX_SPEED);
            prev = speed;
        }
    }

    #[test]
    fn test_pipe_geometry_brackets_gap_center() {
        let sprite = placeholder("pipe");
        let top = sprite.flipped_vertical();
        let pipe = Pipe::at_gap_center(0, 300, &sprite, &top);

        assert_eq!(pipe.gap, 200);
        assert_eq!(pipe.top_end, 200);
        assert_eq!(pipe.bottom_start, 400);
        assert_eq!(pipe.bottom_draw_height, 300);
        assert_eq!(pipe.top_segment_top(), -100);
        // Column spawns centered on the right edge.
        assert!((pipe.x - 360.0).abs() < f64::EPSILON);
        assert!((pipe.right() - 440.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_degenerate_bottom_segment_clamps_draw_height() {
        let sprite = placeholder("pipe");
        let top = sprite.flipped_vertical();
        // Gap center low enough that the lower boundary falls past the
        // play-area bottom edge.
        let pipe = Pipe::at_gap_center(1000, 590, &sprite, &top);

        assert_eq!(pipe.gap, 120);
        assert_eq!(pipe.bottom_start, 650);
        assert_eq!(pipe.bottom_draw_height, 0);
        // Collision masks keep their full static size.
        assert_eq!(pipe.bottom_mask.height(), 300);
    }

    #[test]
    fn test_spawned_gap_center_within_band() {
        let sprite = placeholder("pipe");
        let top = sprite.flipped_vertical();
        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let pipe = Pipe::new(0, &sprite, &top, &mut rng);
            let center = pipe.top_end + pipe.gap / 2;
            assert!((120..=390).contains(&center));
        }
    }

    #[test]
    fn test_pipe_advance_is_continuous() {
        let sprite = placeholder("pipe");
        let top = sprite.flipped_vertical();
        let mut pipe = Pipe::at_gap_center(25, 300, &sprite, &top);
        let x0 = pipe.x;
        pipe.advance();
        assert!((pipe.x - (x0 - 3.125)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_offscreen_boundary() {
        let sprite = placeholder("pipe");
        let top = sprite.flipped_vertical();
        let mut pipe = Pipe::at_gap_center(0, 300, &sprite, &top);

        pipe.x = -99.0 - pipe.width as f64;
        assert!(!pipe.is_offscreen());
        pipe.x = -101.0 - pipe.width as f64;
        assert!(pipe.is_offscreen());
    }

    #[test]
    fn test_spawn_interval_formula() {
        assert_eq!(SpawnScheduler::interval_for_score(0), 90);
        assert_eq!(SpawnScheduler::interval_for_score(50), 80);
        assert_eq!(SpawnScheduler::interval_for_score(150), 60);
        assert_eq!(SpawnScheduler::interval_for_score(10_000), 60);
    }

    #[test]
    fn test_spawn_cadence_at_score_zero() {
        let mut scheduler = SpawnScheduler::new();
        for _ in 0..90 {
            assert!(!scheduler.tick(0));
        }
        assert!(scheduler.tick(0));
        // Counter reset; the next spawn is a full interval away.
        assert!(!scheduler.tick(0));
    }

    #[test]
    fn test_spawn_cadence_at_floor() {
        let mut scheduler = SpawnScheduler::new();
        for _ in 0..60 {
            assert!(!scheduler.tick(150));
        }
        assert!(scheduler.tick(150));
    }

    #[test]
    fn test_bird_spawns_centered() {
        let bird = Bird::new(placeholder("bird"));
        assert_eq!(bird.left(), 75);
        assert_eq!(bird.top(), 275);
        assert!((bird.velocity - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_new_session_defaults() {
        let session = GameSession::new(&test_assets());
        assert_eq!(session.phase, SessionPhase::Running);
        assert_eq!(session.score, 0);
        assert!(session.pipes.is_empty());
        assert!(session.outcome().is_none());
    }

    #[test]
    fn test_outcome_mapping() {
        let mut session = GameSession::new(&test_assets());
        session.score = 7;

        session.phase = SessionPhase::Collided;
        assert_eq!(session.outcome(), Some(SessionOutcome::Completed { score: 7 }));

        session.phase = SessionPhase::OutOfBounds;
        assert_eq!(session.outcome(), Some(SessionOutcome::Completed { score: 7 }));

        session.phase = SessionPhase::QuitRequested;
        assert_eq!(session.outcome(), Some(SessionOutcome::Aborted));
    }

    #[test]
    fn test_bounds_constants_allow_margin() {
        // Sanity: the despawn margin and bounds margin are the documented
        // pixel values.
        assert!((PIPE_DESPAWN_MARGIN - 100.0).abs() < f64::EPSILON);
        assert_eq!(OUT_OF_BOUNDS_MARGIN, 50);
    }
}
