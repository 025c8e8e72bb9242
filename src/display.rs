//! Rendering layer — all terminal I/O lives here.
//!
//! The board is drawn through the library's `Renderer` trait, which this
//! module implements on top of crossterm.  Each 101 × 83 px tile becomes a
//! block of `CELL_COLS` × `CELL_ROWS` terminal cells.  The HUD and the
//! end-of-game dialog read from the `Scoreboard`, never from game state.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use frogger::clock::format_elapsed;
use frogger::config::{NUM_COLS, NUM_ROWS, ROW_OFFSET, TILE_HEIGHT, TILE_WIDTH};
use frogger::engine::{GameEvent, Outcome, Summary};
use frogger::entities::{Character, GemColor, Sprite, Terrain};
use frogger::render::{Renderer, SpriteSheet};

// ── Layout ────────────────────────────────────────────────────────────────────

const CELL_COLS: i32 = 10;
const CELL_ROWS: i32 = 3;

/// Terminal column of the board's left edge (inside the border).
const BOARD_LEFT: i32 = 1;
/// Terminal row of the board's top edge (below the two HUD lines and border).
const BOARD_TOP: i32 = 3;

const BOARD_COLS: i32 = NUM_COLS * CELL_COLS;
const BOARD_ROWS: i32 = NUM_ROWS * CELL_ROWS;

/// Smallest terminal the game fits in.
pub const MIN_WIDTH: u16 = (BOARD_COLS + 2) as u16;
pub const MIN_HEIGHT: u16 = (BOARD_TOP + BOARD_ROWS + 3) as u16;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_TITLE: Color = Color::Green;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_LIVES: Color = Color::Red;
const C_HUD_GEMS: Color = Color::Cyan;
const C_HUD_TIMER: Color = Color::White;
const C_HINT: Color = Color::DarkGrey;

// ── Sprite sheet ──────────────────────────────────────────────────────────────

/// What a sprite looks like in the terminal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glyph {
    pub text: &'static str,
    pub fg: Color,
    /// Tiles fill their whole cell; everything else is a single line.
    pub fill: bool,
}

pub struct GlyphSheet;

impl SpriteSheet for GlyphSheet {
    type Handle = Glyph;

    fn get(&self, sprite: Sprite) -> Glyph {
        let (text, fg, fill) = match sprite {
            Sprite::Tile(Terrain::Water) => ("~", Color::Blue, true),
            Sprite::Tile(Terrain::Stone) => ("░", Color::DarkGrey, true),
            Sprite::Tile(Terrain::Grass) => ("\"", Color::DarkGreen, true),
            Sprite::Selector => ("[      ]", Color::Yellow, false),
            Sprite::Bug => ("<◉◉◉>", Color::Red, false),
            Sprite::Character(c) => match c {
                Character::Boy => ("@", Color::White, false),
                Character::CatGirl => ("&", Color::Magenta, false),
                Character::HornGirl => ("Y", Color::Yellow, false),
                Character::PinkGirl => ("%", Color::Magenta, false),
                Character::PrincessGirl => ("$", Color::Cyan, false),
            },
            Sprite::Heart => ("♥", Color::Red, false),
            Sprite::Gem(GemColor::Blue) => ("◆", Color::Blue, false),
            Sprite::Gem(GemColor::Green) => ("◆", Color::Green, false),
            Sprite::Gem(GemColor::Orange) => ("◆", Color::DarkYellow, false),
        };
        Glyph { text, fg, fill }
    }
}

// ── Board renderer ────────────────────────────────────────────────────────────

pub struct TerminalRenderer<'a, W: Write> {
    out: &'a mut W,
    sheet: GlyphSheet,
}

impl<'a, W: Write> TerminalRenderer<'a, W> {
    pub fn new(out: &'a mut W) -> Self {
        Self {
            out,
            sheet: GlyphSheet,
        }
    }
}

/// Terminal cell of a board pixel position.  Entities sit 11 px above their
/// tile, so both tile and entity y values land on the same row.
fn to_cell(x: i32, y: i32) -> (i32, i32) {
    let col = (x * CELL_COLS).div_euclid(TILE_WIDTH);
    let row = (y - ROW_OFFSET).div_euclid(TILE_HEIGHT);
    (col, row)
}

impl<W: Write> Renderer for TerminalRenderer<'_, W> {
    fn clear(&mut self) -> std::io::Result<()> {
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        Ok(())
    }

    fn draw_sprite(&mut self, sprite: Sprite, x: i32, y: i32) -> std::io::Result<()> {
        let glyph = self.sheet.get(sprite);
        let (col, row) = to_cell(x, y);
        if !(0..NUM_ROWS).contains(&row) {
            return Ok(());
        }

        if glyph.fill {
            self.out.queue(style::SetForegroundColor(glyph.fg))?;
            let line = glyph.text.repeat(CELL_COLS as usize);
            for dy in 0..CELL_ROWS {
                let ty = BOARD_TOP + row * CELL_ROWS + dy;
                self.out.queue(cursor::MoveTo((BOARD_LEFT + col) as u16, ty as u16))?;
                self.out.queue(Print(&line))?;
            }
            return Ok(());
        }

        // Centre the glyph in its cell, clipping whatever falls off the board.
        let width = glyph.text.chars().count() as i32;
        let start = col + (CELL_COLS - width) / 2;
        let visible: String = glyph
            .text
            .chars()
            .enumerate()
            .filter(|(i, _)| (0..BOARD_COLS).contains(&(start + *i as i32)))
            .map(|(_, c)| c)
            .collect();
        if visible.is_empty() {
            return Ok(());
        }
        let tx = BOARD_LEFT + start.max(0);
        let ty = BOARD_TOP + row * CELL_ROWS + CELL_ROWS / 2;
        self.out.queue(style::SetForegroundColor(glyph.fg))?;
        self.out.queue(cursor::MoveTo(tx as u16, ty as u16))?;
        self.out.queue(Print(visible))?;
        Ok(())
    }
}

// ── Scoreboard ────────────────────────────────────────────────────────────────

/// Stats panel contents, kept current from `GameEvent`s.
#[derive(Debug, Default)]
pub struct Scoreboard {
    pub score: u32,
    pub lives: u32,
    pub gems: u32,
    pub elapsed: u64,
    pub summary: Option<Summary>,
}

impl Scoreboard {
    pub fn apply(&mut self, event: GameEvent) {
        match event {
            GameEvent::Score(score) => self.score = score,
            GameEvent::Lives(lives) => self.lives = lives,
            GameEvent::Gems(gems) => self.gems = gems,
            GameEvent::Elapsed(secs) => self.elapsed = secs,
            GameEvent::Finished(summary) => self.summary = Some(summary),
        }
    }
}

// ── Border ────────────────────────────────────────────────────────────────────

pub fn draw_border<W: Write>(out: &mut W) -> std::io::Result<()> {
    let w = BOARD_COLS as usize;
    let bottom = (BOARD_TOP + BOARD_ROWS) as u16;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, (BOARD_TOP - 1) as u16))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w))))?;

    out.queue(cursor::MoveTo(0, bottom))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w))))?;

    for row in BOARD_TOP as u16..bottom {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo((BOARD_LEFT + BOARD_COLS) as u16, row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (rows 0–1) ────────────────────────────────────────────────────────────

pub fn draw_hud<W: Write>(out: &mut W, board: &Scoreboard) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_TITLE))?;
    out.queue(Print("FROGGER?"))?;

    out.queue(cursor::MoveTo(1, 1))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score:{:>3}  ", board.score)))?;

    out.queue(style::SetForegroundColor(C_HUD_LIVES))?;
    out.queue(Print(format!("Lives:{:>3}  ", board.lives)))?;

    out.queue(style::SetForegroundColor(C_HUD_GEMS))?;
    out.queue(Print(format!("Gems:{:>3}  ", board.gems)))?;

    out.queue(style::SetForegroundColor(C_HUD_TIMER))?;
    out.queue(Print(format!("Timer: {}", format_elapsed(board.elapsed))))?;

    Ok(())
}

// ── Instructions (below the board) ────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W) -> std::io::Result<()> {
    let first = (BOARD_TOP + BOARD_ROWS + 1) as u16;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(cursor::MoveTo(1, first))?;
    out.queue(Print("Dodge the bugs. Gems +10, hearts +1 life. Reach 50 to win."))?;
    out.queue(cursor::MoveTo(1, first + 1))?;
    out.queue(Print("←↑→↓ / WASD : Move   SPACE : Character (on [ ])   Q : Quit"))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(out: &mut W, summary: &Summary) -> std::io::Result<()> {
    let (title, title_color) = match summary.outcome {
        Outcome::Won => ("Yay! You Win", Color::Green),
        Outcome::Lost => ("OOPS! You Lost!", Color::Red),
    };
    let time_line = format!("Time taken: {}", format_elapsed(summary.elapsed));
    let score_line = format!("Score: {}", summary.score);
    let lives_line = format!("Lives: {}", summary.lives);

    let lines: &[(&str, Color)] = &[
        ("╔══════════════════════════╗", title_color),
        (title, title_color),
        ("╚══════════════════════════╝", title_color),
        (&time_line, Color::White),
        (&score_line, Color::Yellow),
        (&lives_line, Color::Red),
        ("Would you like to play again?", Color::White),
        ("R - Play Again  Q - Quit", Color::White),
    ];

    let cx = (BOARD_LEFT + BOARD_COLS / 2) as u16;
    let start_row = (BOARD_TOP + BOARD_ROWS / 2) as u16 - lines.len() as u16 / 2;

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    Ok(())
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame: board, HUD, hints and, once the game has
/// ended, the result dialog.
pub fn render<W: Write>(
    out: &mut W,
    state: &frogger::entities::GameState,
    board: &Scoreboard,
) -> std::io::Result<()> {
    frogger::render::draw_frame(&mut TerminalRenderer::new(out), state)?;

    draw_border(out)?;
    draw_hud(out, board)?;
    draw_controls_hint(out)?;

    if let Some(summary) = &board.summary {
        draw_game_over(out, summary)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, MIN_HEIGHT.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}
