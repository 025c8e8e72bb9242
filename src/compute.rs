//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current
//! `GameState` (or one of its entities, and where needed an RNG handle) and
//! returns a brand-new value.  Side effects are limited to the injected RNG.

use log::debug;
use rand::Rng;

use crate::config::{
    BONUS_MIN_SCORE, ENEMY_RESPAWN_X, ENEMY_ROWS, ENEMY_SPEED_MAX, ENEMY_SPEED_MIN,
    ENEMY_START_X, CANVAS_WIDTH, FINISH_Y, GEM_SCORE, HEART_SCORE_STEP, HIT_REACH_AHEAD,
    HIT_REACH_BEHIND, HOME, LOBBY, MAX_LIVES, MAX_X, MAX_Y, MIN_X, ROAD_LIMIT_Y, SPAWN_XS,
    SPAWN_YS, STARTING_LIVES, TILE_HEIGHT, TILE_WIDTH, WIN_SCORE,
};
use crate::entities::{
    Direction, Enemy, GameState, GameStatus, Gem, GemColor, Heart, Player, CHARACTER_ROSTER,
    GEM_COLORS,
};

// ── Random placement ─────────────────────────────────────────────────────────

/// A uniformly random bonus cell, re-rolled until it is not the lobby cell.
pub fn random_cell(rng: &mut impl Rng) -> (i32, i32) {
    loop {
        let x = SPAWN_XS[rng.gen_range(0..SPAWN_XS.len())];
        let y = SPAWN_YS[rng.gen_range(0..SPAWN_YS.len())];
        if (x, y) != LOBBY {
            return (x, y);
        }
    }
}

pub fn random_gem_color(rng: &mut impl Rng) -> GemColor {
    GEM_COLORS[rng.gen_range(0..GEM_COLORS.len())]
}

pub fn random_enemy_speed(rng: &mut impl Rng) -> f64 {
    f64::from(rng.gen_range(ENEMY_SPEED_MIN..ENEMY_SPEED_MAX))
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the state of a fresh session: player at home, one bug per road row,
/// heart and gem on random cells.
pub fn init_state(rng: &mut impl Rng) -> GameState {
    let (hx, hy) = HOME;
    let enemies = ENEMY_ROWS
        .iter()
        .map(|&y| Enemy {
            x: ENEMY_START_X,
            y,
            speed: random_enemy_speed(rng),
        })
        .collect();

    let (heart_x, heart_y) = random_cell(rng);
    let color = random_gem_color(rng);
    let (gem_x, gem_y) = random_cell(rng);

    GameState {
        player: Player {
            x: hx,
            y: hy,
            score: 0,
            lives: STARTING_LIVES,
            gems: 0,
            sprite_index: 0,
        },
        enemies,
        heart: Heart { x: heart_x, y: heart_y },
        gem: Gem { x: gem_x, y: gem_y, color },
        status: GameStatus::Playing,
        elapsed: 0,
    }
}

// ── Entity updates ───────────────────────────────────────────────────────────

/// Move a bug right by `speed * dt`.  Past the canvas edge it wraps to the
/// left of the board with a fresh random speed.  `dt` is not clamped.
pub fn advance_enemy(enemy: &Enemy, dt: f64, rng: &mut impl Rng) -> Enemy {
    let x = enemy.x + enemy.speed * dt;
    if x > CANVAS_WIDTH {
        let speed = random_enemy_speed(rng);
        debug!("bug on row {} wrapped, new speed {}", enemy.y, speed);
        Enemy {
            x: ENEMY_RESPAWN_X,
            speed,
            ..enemy.clone()
        }
    } else {
        Enemy { x, ..enemy.clone() }
    }
}

pub fn revert(player: &Player) -> Player {
    let (x, y) = HOME;
    Player {
        x,
        y,
        ..player.clone()
    }
}

/// Reaching the water row scores a point and sends the player home.
pub fn update_player(player: &Player) -> Player {
    if player.y == FINISH_Y {
        let scored = Player {
            score: player.score + 1,
            ..player.clone()
        };
        revert(&scored)
    } else {
        player.clone()
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

/// Step one cell in `direction`.  Moves that would leave the board are
/// ignored, as is any input once the game has ended.
pub fn handle_input(state: &GameState, direction: Direction) -> GameState {
    if state.status.is_terminal() {
        return state.clone();
    }
    let p = &state.player;
    let (x, y) = match direction {
        Direction::Left => (p.x - TILE_WIDTH, p.y),
        Direction::Right => (p.x + TILE_WIDTH, p.y),
        Direction::Up => (p.x, p.y - TILE_HEIGHT),
        Direction::Down => (p.x, p.y + TILE_HEIGHT),
    };
    if !(MIN_X..=MAX_X).contains(&x) || !(FINISH_Y..=MAX_Y).contains(&y) {
        return state.clone();
    }
    GameState {
        player: Player { x, y, ..p.clone() },
        ..state.clone()
    }
}

/// Cycle the character sprite.  Only works while standing on the lobby cell.
pub fn select(state: &GameState) -> GameState {
    let p = &state.player;
    if state.status.is_terminal() || (p.x, p.y) != LOBBY {
        return state.clone();
    }
    GameState {
        player: Player {
            sprite_index: (p.sprite_index + 1) % CHARACTER_ROSTER.len(),
            ..p.clone()
        },
        ..state.clone()
    }
}

// ── Bonus eligibility ────────────────────────────────────────────────────────

/// Trial division over `[2, n)`.  Only meaningful for the scores it is asked
/// about (above 10).
pub fn is_prime(n: u32) -> bool {
    (2..n).all(|q| n % q != 0)
}

pub fn heart_eligible(score: u32, lives: u32) -> bool {
    score > BONUS_MIN_SCORE && score % HEART_SCORE_STEP == 0 && lives < MAX_LIVES
}

pub fn gem_eligible(score: u32) -> bool {
    score > BONUS_MIN_SCORE && is_prime(score)
}

// ── Collisions ───────────────────────────────────────────────────────────────

/// Row-gated overlap test.  The reach differs by side because the bug and
/// character sprites have different widths.
pub fn collides(player: &Player, enemy: &Enemy) -> bool {
    if player.y != enemy.y {
        return false;
    }
    let px = f64::from(player.x);
    (px > enemy.x && px - enemy.x <= HIT_REACH_BEHIND)
        || (enemy.x > px && enemy.x - px <= HIT_REACH_AHEAD)
}

/// Player after being hit: sent home with one life fewer.
pub fn lose_life(player: &Player) -> Player {
    debug_assert!(player.lives > 0, "lost a life with none left");
    Player {
        lives: player.lives.saturating_sub(1),
        ..revert(player)
    }
}

/// Check the player against every bug.  Only the road rows are dangerous.
pub fn resolve_collisions(player: &Player, enemies: &[Enemy]) -> Player {
    if player.y >= ROAD_LIMIT_Y {
        return player.clone();
    }
    match enemies.iter().find(|e| collides(player, e)) {
        Some(enemy) => {
            debug!(
                "hit by bug on row {} at x={:.1}, player x={}",
                enemy.y, enemy.x, player.x
            );
            // Reverting moves the player off every road row, so one hit per tick.
            lose_life(player)
        }
        None => player.clone(),
    }
}

/// Pick up the heart if standing on it.
pub fn collect_heart(player: &Player, heart: &Heart, rng: &mut impl Rng) -> (Player, Heart) {
    if (player.x, player.y) != (heart.x, heart.y) {
        return (player.clone(), heart.clone());
    }
    let (x, y) = random_cell(rng);
    debug!("heart collected, respawned at ({}, {})", x, y);
    (
        Player {
            lives: player.lives + 1,
            ..player.clone()
        },
        Heart { x, y },
    )
}

/// Pick up the gem if standing on it.
pub fn collect_gem(player: &Player, gem: &Gem, rng: &mut impl Rng) -> (Player, Gem) {
    if (player.x, player.y) != (gem.x, gem.y) {
        return (player.clone(), gem.clone());
    }
    let color = random_gem_color(rng);
    let (x, y) = random_cell(rng);
    debug!("gem collected, respawned {:?} at ({}, {})", color, x, y);
    (
        Player {
            score: player.score + GEM_SCORE,
            gems: player.gems + 1,
            ..player.clone()
        },
        Gem { x, y, color },
    )
}

// ── Per-frame tick (nearly pure — RNG is injected) ──────────────────────────

/// Advance the simulation by `dt` seconds.  All randomness comes through
/// `rng` so callers control determinism (useful for tests with a seeded RNG).
///
/// The order of the stages is fixed: bugs, player, collisions, heart, gem,
/// win check.  A terminal state is returned unchanged.
pub fn tick(state: &GameState, dt: f64, rng: &mut impl Rng) -> GameState {
    if state.status.is_terminal() {
        return state.clone();
    }

    // ── 1. Move bugs ─────────────────────────────────────────────────────────
    let mut enemies = Vec::with_capacity(state.enemies.len());
    for enemy in &state.enemies {
        enemies.push(advance_enemy(enemy, dt, rng));
    }

    // ── 2. Player reaching the water ─────────────────────────────────────────
    let player = update_player(&state.player);

    // ── 3. Collisions ────────────────────────────────────────────────────────
    let player = resolve_collisions(&player, &enemies);
    if player.lives == 0 {
        return GameState {
            player,
            enemies,
            status: GameStatus::Lost,
            ..state.clone()
        };
    }

    // ── 4. Heart ─────────────────────────────────────────────────────────────
    let (player, heart) = if heart_eligible(player.score, player.lives) {
        collect_heart(&player, &state.heart, rng)
    } else {
        (player, state.heart.clone())
    };

    // ── 5. Gem ───────────────────────────────────────────────────────────────
    let (player, gem) = if gem_eligible(player.score) {
        collect_gem(&player, &state.gem, rng)
    } else {
        (player, state.gem.clone())
    };

    // ── 6. Win check ─────────────────────────────────────────────────────────
    let (player, status) = if player.score >= WIN_SCORE {
        (revert(&player), GameStatus::Won)
    } else {
        (player, GameStatus::Playing)
    };

    GameState {
        player,
        enemies,
        heart,
        gem,
        status,
        ..state.clone()
    }
}
