mod display;

use std::collections::HashMap;
use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
        KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use log::{error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use nebula_strike::compute::{advance, init_state, normalize_delta};
use nebula_strike::config::Config;
use nebula_strike::entities::Playfield;
use nebula_strike::error::{GameError, Result};
use nebula_strike::input::Intents;

const FRAME: Duration = Duration::from_millis(16); // ≈60 FPS

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames. Covers terminals that don't emit key-release events:
/// the OS key-repeat rate is ≥ 15 Hz, so 8 frames (≈133 ms) is always
/// refreshed before expiry.
const HOLD_WINDOW: u64 = 8;

/// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

fn any_held(key_frame: &HashMap<KeyCode, u64>, keys: &[KeyCode], frame: u64) -> bool {
    keys.iter().any(|k| is_held(key_frame, k, frame))
}

/// Map the currently held keys onto one intent snapshot for this frame.
fn sample_intents(key_frame: &HashMap<KeyCode, u64>, frame: u64, restart: bool) -> Intents {
    use KeyCode::{Char, Down, Left, Right, Up};
    Intents {
        up: any_held(key_frame, &[Up, Char('w'), Char('W')], frame),
        down: any_held(key_frame, &[Down, Char('s'), Char('S')], frame),
        left: any_held(key_frame, &[Left, Char('a'), Char('A')], frame),
        right: any_held(key_frame, &[Right, Char('d'), Char('D')], frame),
        fire: any_held(key_frame, &[Char(' '), Char('j'), Char('J')], frame),
        restart,
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits.
///
/// Input model: instead of acting on each key event individually, we maintain
/// a `key_frame` map that records the frame number of the last press/repeat
/// event for every key. Each frame we turn the keys that are still "fresh"
/// into a single `Intents` snapshot, so Space + arrows can be held together.
/// Terminals with keyboard enhancement report releases, which drop the key
/// immediately; classic terminals let it expire after `HOLD_WINDOW` frames.
fn game_loop<W: Write>(
    out: &mut W,
    field: Playfield,
    rng: &mut StdRng,
    rx: &mpsc::Receiver<Event>,
) -> Result<()> {
    let mut state = init_state(field, rng);
    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut frame: u64 = 0;
    let mut last_frame = Instant::now();

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        let mut restart = false;
        while let Ok(ev) = rx.try_recv() {
            let Event::Key(KeyEvent { code, kind, modifiers, .. }) = ev else {
                continue;
            };
            match kind {
                KeyEventKind::Press => {
                    key_frame.insert(code, frame);
                    match code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                            info!("quit requested at score {}", state.score);
                            return Ok(());
                        }
                        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                            return Ok(());
                        }
                        KeyCode::Char('r') | KeyCode::Char('R') => restart = true,
                        _ => {}
                    }
                }
                KeyEventKind::Repeat => {
                    key_frame.insert(code, frame);
                }
                KeyEventKind::Release => {
                    key_frame.remove(&code);
                }
            }
        }

        let intents = sample_intents(&key_frame, frame, restart);
        let elapsed_ms = last_frame.elapsed().as_secs_f64() * 1000.0;
        last_frame = Instant::now();
        let dt = normalize_delta(elapsed_ms);

        state = advance(&state, &intents, dt, rng);

        let (cols, rows) = terminal::size()?;
        display::render(out, &state, cols, rows)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let config = Config::parse();
    simple_logging::log_to_file(&config.log_file, config.log_level).map_err(|source| {
        GameError::LogFile {
            path: config.log_file.clone(),
            source,
        }
    })?;
    info!("starting nebula_strike with {:?}", config);

    let field = config.playfield()?;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

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
            Err(e) => {
                error!("input thread stopped: {}", e);
                break;
            }
        }
    });

    let result = game_loop(&mut out, field, &mut rng, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(e) = &result {
        error!("game loop failed: {}", e);
    }
    result
}
