//! All game entity types — pure data, no logic.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        self != GameStatus::Playing
    }
}

// ── Sprite identifiers ────────────────────────────────────────────────────────

/// Playable characters, in the order `select` cycles through them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Character {
    Boy,
    CatGirl,
    HornGirl,
    PinkGirl,
    PrincessGirl,
}

pub const CHARACTER_ROSTER: [Character; 5] = [
    Character::Boy,
    Character::CatGirl,
    Character::HornGirl,
    Character::PinkGirl,
    Character::PrincessGirl,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GemColor {
    Blue,
    Green,
    Orange,
}

pub const GEM_COLORS: [GemColor; 3] = [GemColor::Blue, GemColor::Green, GemColor::Orange];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Terrain {
    Water,
    Stone,
    Grass,
}

/// Everything the render stage can ask a renderer to draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sprite {
    Tile(Terrain),
    Selector,
    Bug,
    Character(Character),
    Heart,
    Gem(GemColor),
}

// ── Entities ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: i32,
    pub y: i32,
    pub score: u32,
    pub lives: u32,
    pub gems: u32,
    /// Index into `CHARACTER_ROSTER`.
    pub sprite_index: usize,
}

impl Player {
    pub fn character(&self) -> Character {
        CHARACTER_ROSTER[self.sprite_index % CHARACTER_ROSTER.len()]
    }
}

/// A bug crossing one road row left to right.
#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    /// Horizontal position; fractional because movement is `speed * dt`.
    pub x: f64,
    pub y: i32,
    /// Pixels per second.
    pub speed: f64,
}

/// Bonus life.
#[derive(Clone, Debug, PartialEq)]
pub struct Heart {
    pub x: i32,
    pub y: i32,
}

/// Bonus score.
#[derive(Clone, Debug, PartialEq)]
pub struct Gem {
    pub x: i32,
    pub y: i32,
    pub color: GemColor,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub player: Player,
    pub enemies: Vec<Enemy>,
    /// Exists for the whole session; only drawn and collectible while eligible.
    pub heart: Heart,
    pub gem: Gem,
    pub status: GameStatus,
    /// Whole seconds on the session clock.
    pub elapsed: u64,
}
