//! Game-state controller.
//!
//! A `Session` owns the `GameState`, the RNG and the elapsed-time clock.  It
//! runs the pure update functions from `compute` and reports what changed as
//! `GameEvent`s, which the host feeds to its scoreboard and end-of-game
//! dialog.

use std::time::Instant;

use log::info;
use rand::Rng;

use crate::clock::{format_elapsed, SessionClock};
use crate::compute;
use crate::entities::{Direction, GameState, GameStatus};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

/// Final figures reported once when the game ends.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Summary {
    pub outcome: Outcome,
    pub score: u32,
    pub lives: u32,
    pub gems: u32,
    /// Seconds on the session clock when it was stopped.
    pub elapsed: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Score(u32),
    Lives(u32),
    Gems(u32),
    Elapsed(u64),
    Finished(Summary),
}

pub struct Session<R: Rng> {
    state: GameState,
    rng: R,
    clock: SessionClock,
}

impl<R: Rng> Session<R> {
    /// Start a new session; the clock starts at `now`.
    pub fn new(mut rng: R, now: Instant) -> Self {
        let state = compute::init_state(&mut rng);
        info!(
            "new session: heart at ({}, {}), gem at ({}, {})",
            state.heart.x, state.heart.y, state.gem.x, state.gem.y
        );
        Self::with_state(state, rng, now)
    }

    /// Resume from an existing state; the clock carries on from
    /// `state.elapsed`.
    pub fn with_state(state: GameState, rng: R, now: Instant) -> Self {
        let mut clock = SessionClock::resume(now, state.elapsed);
        if state.status.is_terminal() {
            clock.stop();
        }
        Self { state, rng, clock }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_over(&self) -> bool {
        self.state.status.is_terminal()
    }

    pub fn clock_running(&self) -> bool {
        self.clock.is_running()
    }

    /// Current scoreboard values, for a host that has just attached.
    pub fn snapshot(&self) -> Vec<GameEvent> {
        let p = &self.state.player;
        vec![
            GameEvent::Score(p.score),
            GameEvent::Lives(p.lives),
            GameEvent::Gems(p.gems),
            GameEvent::Elapsed(self.state.elapsed),
        ]
    }

    /// Run one frame of game logic.
    pub fn tick(&mut self, dt: f64) -> Vec<GameEvent> {
        if self.is_over() {
            return Vec::new();
        }
        let next = compute::tick(&self.state, dt, &mut self.rng);
        self.commit(next)
    }

    pub fn handle_input(&mut self, direction: Direction) -> Vec<GameEvent> {
        let next = compute::handle_input(&self.state, direction);
        self.commit(next)
    }

    pub fn select(&mut self) {
        self.state = compute::select(&self.state);
    }

    /// Advance the once-a-second display counter.  Has no effect on play.
    pub fn poll_clock(&mut self, now: Instant) -> Option<GameEvent> {
        let seconds = self.clock.poll(now)?;
        self.state.elapsed = seconds;
        Some(GameEvent::Elapsed(seconds))
    }

    fn commit(&mut self, next: GameState) -> Vec<GameEvent> {
        let mut events = changes(&self.state, &next);
        let finished = !self.state.status.is_terminal() && next.status.is_terminal();
        self.state = next;

        if finished {
            self.clock.stop();
            let p = &self.state.player;
            let outcome = match self.state.status {
                GameStatus::Won => Outcome::Won,
                _ => Outcome::Lost,
            };
            info!(
                "game over: {:?} with score {}, {} lives, {} gems after {}",
                outcome,
                p.score,
                p.lives,
                p.gems,
                format_elapsed(self.state.elapsed)
            );
            events.push(GameEvent::Finished(Summary {
                outcome,
                score: p.score,
                lives: p.lives,
                gems: p.gems,
                elapsed: self.state.elapsed,
            }));
        }
        events
    }
}

/// Scoreboard events for every counter that differs between two states.
pub fn changes(old: &GameState, new: &GameState) -> Vec<GameEvent> {
    let (a, b) = (&old.player, &new.player);
    let mut events = Vec::new();
    if a.score != b.score {
        events.push(GameEvent::Score(b.score));
    }
    if a.lives != b.lives {
        events.push(GameEvent::Lives(b.lives));
    }
    if a.gems != b.gems {
        events.push(GameEvent::Gems(b.gems));
    }
    events
}
