//! Board geometry and gameplay constants.
//!
//! Every position in the game is expressed in pixel space on a 505 px wide
//! canvas, aligned to a grid of 101 × 83 px tiles.

// ── Geometry ──────────────────────────────────────────────────────────────────

pub const TILE_WIDTH: i32 = 101;
pub const TILE_HEIGHT: i32 = 83;

pub const NUM_COLS: i32 = 5;
pub const NUM_ROWS: i32 = 6;

/// Canvas width; an enemy past this x wraps around.
pub const CANVAS_WIDTH: f64 = 505.0;

/// Entity sprites sit 11 px above their tile, so row `r` has y = r·83 − 11.
pub const ROW_OFFSET: i32 = -11;

pub const MIN_X: i32 = 0;
pub const MAX_X: i32 = 404;
/// The water row; reaching it scores.
pub const FINISH_Y: i32 = -11;
pub const MAX_Y: i32 = 404;

/// Player spawn and respawn cell.
pub const HOME: (i32, i32) = (202, 404);

/// Reserved character-select cell; never used as a bonus spawn point.
pub const LOBBY: (i32, i32) = (404, 321);

/// Player–enemy collisions are only checked above this y (the road rows).
pub const ROAD_LIMIT_Y: i32 = 321;

/// Valid bonus-item columns and rows.
pub const SPAWN_XS: [i32; 5] = [0, 101, 202, 303, 404];
pub const SPAWN_YS: [i32; 5] = [72, 155, 238, 321, 404];

// ── Enemies ───────────────────────────────────────────────────────────────────

pub const ENEMY_ROWS: [i32; 3] = [72, 155, 238];
pub const ENEMY_START_X: f64 = 0.0;
pub const ENEMY_RESPAWN_X: f64 = -100.0;
/// Respawn speeds are drawn from `ENEMY_SPEED_MIN..ENEMY_SPEED_MAX` px/s.
pub const ENEMY_SPEED_MIN: u32 = 5;
pub const ENEMY_SPEED_MAX: u32 = 155;

/// Hit reach when the player is right of the enemy.
pub const HIT_REACH_BEHIND: f64 = 81.0;
/// Hit reach when the enemy is right of the player.
pub const HIT_REACH_AHEAD: f64 = 70.0;

// ── Scoring & lives ───────────────────────────────────────────────────────────

pub const STARTING_LIVES: u32 = 5;
pub const MAX_LIVES: u32 = 10;
pub const WIN_SCORE: u32 = 50;
pub const GEM_SCORE: u32 = 10;
/// Bonus items never appear at or below this score.
pub const BONUS_MIN_SCORE: u32 = 10;
/// Hearts appear on multiples of this score.
pub const HEART_SCORE_STEP: u32 = 5;

// ── Host loop ─────────────────────────────────────────────────────────────────

pub const DEFAULT_FPS: u32 = 30;
