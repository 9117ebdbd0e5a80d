// Game timing constants
pub const TICKS_PER_SECOND: u64 = 60;
pub const TICK_INTERVAL_MS: u64 = 1000 / TICKS_PER_SECOND;

// Play area dimensions in virtual pixels
pub const PLAY_WIDTH: i32 = 400;
pub const PLAY_HEIGHT: i32 = 600;

// Bird physics constants
pub const GRAVITY: f64 = 0.5;
pub const JUMP_FORCE: f64 = -8.0;

// Fixed horizontal center column of the bird
pub const BIRD_CENTER_X: i32 = 100;

// Pipe difficulty constants
pub const BASE_GAP: i32 = 200;
pub const MIN_GAP: i32 = 120;
pub const PIPE_SPEED: f64 = 3.0;
pub const SPEED_INCREASE: f64 = 0.005;
pub const MAX_SPEED: f64 = 6.0;

// Gap center is drawn from this band of the play-area height
pub const GAP_BAND_LOW: f64 = 0.2;
pub const GAP_BAND_HIGH: f64 = 0.65;

// Spawn cadence: a pipe spawns once the tick counter exceeds
// max(SPAWN_FLOOR_TICKS, SPAWN_BASE_TICKS - score / SPAWN_SCORE_DIVISOR)
pub const SPAWN_BASE_TICKS: u32 = 90;
pub const SPAWN_FLOOR_TICKS: u32 = 60;
pub const SPAWN_SCORE_DIVISOR: u32 = 5;

// The bird may leave the visible area by this margin before the session ends
pub const OUT_OF_BOUNDS_MARGIN: i32 = 50;

// A pipe is discarded once its right edge is this far left of the play area
pub const PIPE_DESPAWN_MARGIN: f64 = 100.0;
