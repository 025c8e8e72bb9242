//! Render stage — turns a `GameState` into draw calls.
//!
//! No game logic is performed here beyond the bonus eligibility checks that
//! decide whether the heart and gem are visible.  Pixels are the renderer's
//! business; this module only says which sprite goes where.

use crate::compute::{gem_eligible, heart_eligible};
use crate::config::{LOBBY, NUM_COLS, NUM_ROWS, TILE_HEIGHT, TILE_WIDTH};
use crate::entities::{GameState, Sprite, Terrain};

/// A drawing surface.  Coordinates are in board pixels.
pub trait Renderer {
    fn clear(&mut self) -> std::io::Result<()>;
    fn draw_sprite(&mut self, sprite: Sprite, x: i32, y: i32) -> std::io::Result<()>;
    /// Called once all sprites of a frame are drawn.
    fn present(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Resolves a sprite to whatever the renderer actually paints with.
pub trait SpriteSheet {
    type Handle;
    fn get(&self, sprite: Sprite) -> Self::Handle;
}

/// Terrain of each board row, top to bottom.
pub const ROW_TERRAIN: [Terrain; NUM_ROWS as usize] = [
    Terrain::Water,
    Terrain::Stone,
    Terrain::Stone,
    Terrain::Stone,
    Terrain::Grass,
    Terrain::Grass,
];

/// Draw one complete frame: board, selector, bugs, player, then any visible
/// bonus items.
pub fn draw_frame<R: Renderer>(out: &mut R, state: &GameState) -> std::io::Result<()> {
    out.clear()?;

    for (row, terrain) in ROW_TERRAIN.iter().enumerate() {
        for col in 0..NUM_COLS {
            out.draw_sprite(Sprite::Tile(*terrain), col * TILE_WIDTH, row as i32 * TILE_HEIGHT)?;
        }
    }
    out.draw_sprite(Sprite::Selector, LOBBY.0, LOBBY.1)?;

    for enemy in &state.enemies {
        // Sprites land on whole pixels; the simulation keeps the fraction.
        out.draw_sprite(Sprite::Bug, enemy.x.floor() as i32, enemy.y)?;
    }

    let p = &state.player;
    out.draw_sprite(Sprite::Character(p.character()), p.x, p.y)?;

    if heart_eligible(p.score, p.lives) {
        out.draw_sprite(Sprite::Heart, state.heart.x, state.heart.y)?;
    }
    if gem_eligible(p.score) {
        out.draw_sprite(Sprite::Gem(state.gem.color), state.gem.x, state.gem.y)?;
    }

    out.present()
}
