use std::time::{Duration, Instant};

use frogger::config::HOME;
use frogger::engine::*;
use frogger::entities::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn make_state() -> GameState {
    GameState {
        player: Player {
            x: 202,
            y: 404,
            score: 0,
            lives: 5,
            gems: 0,
            sprite_index: 0,
        },
        enemies: vec![
            Enemy { x: -100.0, y: 72, speed: 0.0 },
            Enemy { x: -100.0, y: 155, speed: 0.0 },
            Enemy { x: -100.0, y: 238, speed: 0.0 },
        ],
        heart: Heart { x: 0, y: 72 },
        gem: Gem { x: 303, y: 155, color: GemColor::Orange },
        status: GameStatus::Playing,
        elapsed: 0,
    }
}

fn session_with(state: GameState, now: Instant) -> Session<StdRng> {
    Session::with_state(state, StdRng::seed_from_u64(42), now)
}

/// A state whose next tick loses the last life.
fn about_to_lose() -> GameState {
    let mut s = make_state();
    s.player.x = 300;
    s.player.y = 72;
    s.player.lives = 1;
    s.enemies[0].x = 250.0;
    s
}

#[test]
fn new_session_reports_starting_counters() {
    let session = Session::new(StdRng::seed_from_u64(1), Instant::now());
    assert_eq!(
        session.snapshot(),
        vec![
            GameEvent::Score(0),
            GameEvent::Lives(5),
            GameEvent::Gems(0),
            GameEvent::Elapsed(0),
        ]
    );
    assert!(!session.is_over());
    assert!(session.clock_running());
}

#[test]
fn same_seed_same_session() {
    let now = Instant::now();
    let mut a = Session::new(StdRng::seed_from_u64(9), now);
    let mut b = Session::new(StdRng::seed_from_u64(9), now);
    for _ in 0..300 {
        a.tick(0.05);
        b.tick(0.05);
    }
    assert_eq!(a.state(), b.state());
}

#[test]
fn quiet_tick_emits_nothing() {
    let mut session = session_with(make_state(), Instant::now());
    assert!(session.tick(0.016).is_empty());
}

#[test]
fn gem_pickup_reports_score_and_gems() {
    let mut s = make_state();
    s.player.x = 303;
    s.player.y = 155;
    s.player.score = 13;
    let mut session = session_with(s, Instant::now());
    assert_eq!(
        session.tick(0.0),
        vec![GameEvent::Score(23), GameEvent::Gems(1)]
    );
}

#[test]
fn collision_reports_lives() {
    let mut s = about_to_lose();
    s.player.lives = 3;
    let mut session = session_with(s, Instant::now());
    assert_eq!(session.tick(0.0), vec![GameEvent::Lives(2)]);
    assert!(!session.is_over());
}

#[test]
fn moving_reports_nothing() {
    let mut session = session_with(make_state(), Instant::now());
    assert!(session.handle_input(Direction::Up).is_empty());
    assert_eq!(session.state().player.y, 321);
}

#[test]
fn losing_last_life_finishes_once_and_stops_clock() {
    let t0 = Instant::now();
    let mut session = session_with(about_to_lose(), t0);
    session.poll_clock(t0 + Duration::from_secs(42));

    let events = session.tick(0.0);
    assert_eq!(
        events,
        vec![
            GameEvent::Lives(0),
            GameEvent::Finished(Summary {
                outcome: Outcome::Lost,
                score: 0,
                lives: 0,
                gems: 0,
                elapsed: 42,
            }),
        ]
    );
    assert!(session.is_over());
    assert!(!session.clock_running());

    // Nothing moves any more.
    assert!(session.tick(1.0).is_empty());
    assert!(session.poll_clock(t0 + Duration::from_secs(100)).is_none());
    assert_eq!(session.state().elapsed, 42);
    assert!(session.handle_input(Direction::Up).is_empty());
    assert_eq!((session.state().player.x, session.state().player.y), HOME);
}

#[test]
fn reaching_fifty_wins() {
    let mut s = make_state();
    s.player.x = 101;
    s.player.y = -11;
    s.player.score = 49;
    s.player.lives = 2;
    let mut session = session_with(s, Instant::now());

    let events = session.tick(0.0);
    assert_eq!(events[0], GameEvent::Score(50));
    match events.last() {
        Some(GameEvent::Finished(summary)) => {
            assert_eq!(summary.outcome, Outcome::Won);
            assert_eq!(summary.score, 50);
            assert_eq!(summary.lives, 2);
        }
        other => panic!("expected Finished, got {:?}", other),
    }
    assert_eq!(session.state().status, GameStatus::Won);
}

#[test]
fn clock_ticks_whole_seconds() {
    let t0 = Instant::now();
    let mut session = session_with(make_state(), t0);
    assert_eq!(session.poll_clock(t0 + Duration::from_millis(500)), None);
    assert_eq!(
        session.poll_clock(t0 + Duration::from_millis(1000)),
        Some(GameEvent::Elapsed(1))
    );
    assert_eq!(session.poll_clock(t0 + Duration::from_millis(1500)), None);
    assert_eq!(
        session.poll_clock(t0 + Duration::from_millis(3200)),
        Some(GameEvent::Elapsed(3))
    );
    assert_eq!(session.state().elapsed, 3);
}

#[test]
fn clock_does_not_affect_play() {
    let t0 = Instant::now();
    let mut session = session_with(make_state(), t0);
    let before = session.state().player.clone();
    session.poll_clock(t0 + Duration::from_secs(5));
    assert_eq!(session.state().player, before);
}

#[test]
fn resuming_finished_state_has_clock_stopped() {
    let mut s = make_state();
    s.status = GameStatus::Won;
    let t0 = Instant::now();
    let mut session = session_with(s, t0);
    assert!(!session.clock_running());
    assert!(session.poll_clock(t0 + Duration::from_secs(3)).is_none());
}

#[test]
fn select_on_lobby_changes_character() {
    let mut s = make_state();
    s.player.x = 404;
    s.player.y = 321;
    let mut session = session_with(s, Instant::now());
    session.select();
    assert_eq!(session.state().player.character(), Character::CatGirl);
}

#[test]
fn changes_lists_only_differences() {
    let a = make_state();
    let mut b = a.clone();
    b.player.lives = 6;
    assert_eq!(changes(&a, &b), vec![GameEvent::Lives(6)]);
    assert!(changes(&a, &a).is_empty());
}

#[test]
fn resumed_session_keeps_counting_from_saved_time() {
    let mut s = make_state();
    s.elapsed = 100;
    let t0 = Instant::now();
    let mut session = session_with(s, t0);

    assert_eq!(session.snapshot().last(), Some(&GameEvent::Elapsed(100)));
    assert_eq!(session.poll_clock(t0 + Duration::from_millis(400)), None);
    assert_eq!(session.state().elapsed, 100);
    assert_eq!(
        session.poll_clock(t0 + Duration::from_secs(1)),
        Some(GameEvent::Elapsed(101))
    );
    assert_eq!(session.state().elapsed, 101);
}

#[test]
fn resumed_session_reports_full_time_when_finished() {
    let mut s = about_to_lose();
    s.elapsed = 100;
    let t0 = Instant::now();
    let mut session = session_with(s, t0);
    session.poll_clock(t0 + Duration::from_secs(5));

    match session.tick(0.0).last() {
        Some(GameEvent::Finished(summary)) => assert_eq!(summary.elapsed, 105),
        other => panic!("expected Finished, got {:?}", other),
    }
}
