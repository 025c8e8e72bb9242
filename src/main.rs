mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{bail, Context};
use clap::Parser;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal, ExecutableCommand,
};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use frogger::clock::{frame_remaining, FrameClock};
use frogger::config::DEFAULT_FPS;
use frogger::engine::Session;
use frogger::entities::Direction;

use display::Scoreboard;

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(about = "Cross the road, dodge the bugs, collect hearts and gems.")]
struct Cli {
    /// Frames per second of the game loop.
    #[arg(long, default_value_t = DEFAULT_FPS, value_parser = clap::value_parser!(u32).range(1..=120))]
    fps: u32,

    /// Seed for a reproducible session (bug speeds, bonus placement).
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file.  Filter with RUST_LOG (default: info).
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn init_logging(path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("opening log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

// ── Input ─────────────────────────────────────────────────────────────────────

enum Command {
    Move(Direction),
    Select,
    Restart,
    Quit,
}

fn command_for(code: KeyCode, modifiers: KeyModifiers) -> Option<Command> {
    let command = match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Command::Move(Direction::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Command::Move(Direction::Right),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Command::Move(Direction::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Command::Move(Direction::Down),
        KeyCode::Char(' ') => Command::Select,
        KeyCode::Char('r') | KeyCode::Char('R') => Command::Restart,
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Command::Quit,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Command::Quit,
        _ => return None,
    };
    Some(command)
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Returns `true` → quit program,  `false` → start a fresh session.
fn game_loop<W: Write>(
    out: &mut W,
    session: &mut Session<StdRng>,
    rx: &mpsc::Receiver<Event>,
    frame: Duration,
) -> std::io::Result<bool> {
    let mut board = Scoreboard::default();
    for event in session.snapshot() {
        board.apply(event);
    }
    let mut frames = FrameClock::start(Instant::now());

    loop {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            let Event::Key(KeyEvent { code, kind, modifiers, .. }) = ev else {
                continue;
            };
            if kind != KeyEventKind::Press {
                continue;
            }
            match command_for(code, modifiers) {
                Some(Command::Quit) => return Ok(true),
                Some(Command::Restart) if session.is_over() => return Ok(false),
                Some(Command::Move(direction)) => {
                    for event in session.handle_input(direction) {
                        board.apply(event);
                    }
                }
                Some(Command::Select) => session.select(),
                Some(Command::Restart) | None => {}
            }
        }

        // ── Update ────────────────────────────────────────────────────────────
        let dt = frames.delta(frame_start);
        for event in session.tick(dt) {
            board.apply(event);
        }
        if let Some(event) = session.poll_clock(frame_start) {
            board.apply(event);
        }

        display::render(out, session.state(), &board)?;

        if let Some(rest) = frame_remaining(frame, frame_start.elapsed()) {
            thread::sleep(rest);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let (width, height) = terminal::size().context("querying terminal size")?;
    if width < display::MIN_WIDTH || height < display::MIN_HEIGHT {
        bail!(
            "terminal is {}x{}, need at least {}x{}",
            width,
            height,
            display::MIN_WIDTH,
            display::MIN_HEIGHT
        );
    }

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = run(&mut out, &rx, &cli);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result.context("running the game")
}

fn run<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>, cli: &Cli) -> std::io::Result<()> {
    let frame = Duration::from_secs_f64(1.0 / f64::from(cli.fps));
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    loop {
        // One child stream per session, all derived from the root seed.
        let session_rng = StdRng::from_rng(&mut rng).map_err(std::io::Error::other)?;
        let mut session = Session::new(session_rng, Instant::now());
        info!("session started at {} fps", cli.fps);

        if game_loop(out, &mut session, rx, frame)? {
            break;
        }
    }
    Ok(())
}
