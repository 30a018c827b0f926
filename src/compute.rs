/// Game state machine and frame driver.
///
/// [`advance`] takes an immutable reference to the current
/// `SimulationState`, the frame's input snapshot and an RNG handle, and
/// returns a brand-new `SimulationState`. Side effects are limited to the
/// injected RNG.

use log::info;
use rand::Rng;

use crate::collision::resolve_collisions;
use crate::constants::*;
use crate::entities::{GameStatus, Playfield, SimulationState, SpawnTimers};
use crate::input::Intents;
use crate::motion::{move_bullets, move_enemies, move_power_ups, move_stars};
use crate::player::{new_player, update_player};
use crate::spawn::{
    next_enemy_delay, next_power_up_delay, spawn_boss, spawn_enemy, spawn_power_up, spawn_stars,
};

// ── Constructors ─────────────────────────────────────────────────────────────

fn fresh_timers() -> SpawnTimers {
    SpawnTimers {
        enemy: 0.0,
        power_up: FIRST_POWER_UP_DELAY,
    }
}

/// Build the opening state for a playfield of the given size.
pub fn init_state(field: Playfield, rng: &mut impl Rng) -> SimulationState {
    SimulationState {
        player: new_player(&field),
        bullets: Vec::new(),
        enemies: Vec::new(),
        power_ups: Vec::new(),
        stars: spawn_stars(&field, rng),
        score: 0,
        lives: START_LIVES,
        hp: MAX_HP,
        boss_spawned: false,
        status: GameStatus::Playing,
        timers: fresh_timers(),
        playfield: field,
    }
}

/// Start a new game on the same playfield. Only the cosmetic star field
/// carries over.
pub fn reset(state: &SimulationState) -> SimulationState {
    info!("game reset (previous score {})", state.score);
    let field = state.playfield;
    SimulationState {
        player: new_player(&field),
        bullets: Vec::new(),
        enemies: Vec::new(),
        power_ups: Vec::new(),
        stars: state.stars.clone(),
        score: 0,
        lives: START_LIVES,
        hp: MAX_HP,
        boss_spawned: false,
        status: GameStatus::Playing,
        timers: fresh_timers(),
        playfield: field,
    }
}

// ── Timing ───────────────────────────────────────────────────────────────────

/// Convert wall-clock milliseconds since the last frame into frame units.
/// A zero, negative or non-finite interval counts as one frame; long stalls
/// are capped at [`MAX_DELTA`] frames.
pub fn normalize_delta(elapsed_ms: f64) -> f64 {
    let scaled = elapsed_ms / FRAME_MS;
    if !scaled.is_finite() || scaled <= 0.0 {
        return 1.0;
    }
    scaled.min(MAX_DELTA)
}

// ── Spawning ─────────────────────────────────────────────────────────────────

/// Count the spawn timers down and spawn whatever has come due. The boss
/// replaces the regular wave the first time the threshold is seen; after
/// that no more ordinary enemies arrive.
pub fn schedule_spawns(state: &mut SimulationState, dt: f64, rng: &mut impl Rng) {
    state.timers.enemy -= dt;
    if state.timers.enemy <= 0.0 {
        if !state.boss_spawned && state.score >= BOSS_SCORE_THRESHOLD {
            state.boss_spawned = true;
            state.enemies.push(spawn_boss(&state.playfield));
            info!("boss spawned at score {}", state.score);
        } else if !state.boss_spawned {
            state.enemies.push(spawn_enemy(&state.playfield, rng));
        }
        state.timers.enemy = next_enemy_delay(rng);
    }

    state.timers.power_up -= dt;
    if state.timers.power_up <= 0.0 {
        state.power_ups.push(spawn_power_up(&state.playfield, rng));
        state.timers.power_up = next_power_up_delay(rng);
    }
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Run one frame in place. Does nothing once the game is won or lost.
pub fn step(state: &mut SimulationState, intents: &Intents, dt: f64, rng: &mut impl Rng) {
    if state.is_terminal() {
        return;
    }
    let field = state.playfield;

    update_player(&mut state.player, &mut state.bullets, intents, dt, &field);
    move_bullets(&mut state.bullets, &state.enemies, dt, &field);
    schedule_spawns(state, dt, rng);
    move_enemies(&mut state.enemies, dt, &field);
    move_power_ups(&mut state.power_ups, dt);
    move_stars(&mut state.stars, dt, &field, rng);
    resolve_collisions(state);
}

/// Produce the next frame. In a terminal state the only thing that changes
/// anything is the restart intent, which starts a new game.
pub fn advance(
    state: &SimulationState,
    intents: &Intents,
    dt: f64,
    rng: &mut impl Rng,
) -> SimulationState {
    if state.is_terminal() {
        return if intents.restart {
            reset(state)
        } else {
            state.clone()
        };
    }
    let mut next = state.clone();
    step(&mut next, intents, dt, rng);
    next
}
