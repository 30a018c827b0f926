#![allow(dead_code)]

use nebula_strike::compute::init_state;
use nebula_strike::entities::{Enemy, EnemyKind, Playfield, PowerKind, PowerUp, SimulationState};
use nebula_strike::geometry::Vec2;

use rand::rngs::StdRng;
use rand::SeedableRng;

pub const FIELD: Playfield = Playfield {
    width: 960.0,
    height: 540.0,
};

pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

/// Opening state with no background stars, so equality checks stay focused
/// on gameplay fields.
pub fn make_state() -> SimulationState {
    let mut s = init_state(FIELD, &mut seeded_rng());
    s.stars.clear();
    s
}

pub fn enemy(kind: EnemyKind, x: f64, y: f64) -> Enemy {
    Enemy {
        pos: Vec2::new(x, y),
        radius: 20.0,
        speed: 2.0,
        hp: 1,
        kind,
        score: 20,
        damage: 20,
        wobble: 0.0,
    }
}

pub fn boss(x: f64, y: f64) -> Enemy {
    Enemy {
        radius: 42.0,
        speed: 1.2,
        hp: 220,
        score: 300,
        damage: 40,
        ..enemy(EnemyKind::Boss, x, y)
    }
}

pub fn power_up(kind: PowerKind, x: f64, y: f64) -> PowerUp {
    PowerUp {
        pos: Vec2::new(x, y),
        radius: 12.0,
        speed: 2.6,
        kind,
    }
}
