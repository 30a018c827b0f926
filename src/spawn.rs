/// Entity factories. All randomness comes through the injected `rng` so
/// callers control determinism.
use std::f64::consts::TAU;

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

use crate::constants::*;
use crate::entities::{
    Bullet, BulletMotion, Enemy, EnemyKind, Playfield, PowerKind, PowerUp, Star,
};
use crate::geometry::Vec2;

// ── Archetype table ──────────────────────────────────────────────────────────

/// Stat profile an ordinary enemy is rolled from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArchetypeProfile {
    pub kind: EnemyKind,
    /// Relative spawn weight; the table is normalized before drawing.
    pub weight: u32,
    pub radius: (f64, f64),
    pub speed: (f64, f64),
    pub hp: i32,
    pub score: u32,
    pub damage: i32,
}

pub const ARCHETYPES: [ArchetypeProfile; 4] = [
    ArchetypeProfile {
        kind: EnemyKind::Grunt,
        weight: 42,
        radius: (16.0, 26.0),
        speed: (2.0, 4.0),
        hp: 1,
        score: 20,
        damage: 20,
    },
    ArchetypeProfile {
        kind: EnemyKind::Swift,
        weight: 24,
        radius: (12.0, 18.0),
        speed: (4.0, 6.0),
        hp: 1,
        score: 30,
        damage: 15,
    },
    ArchetypeProfile {
        kind: EnemyKind::Tank,
        weight: 20,
        radius: (26.0, 34.0),
        speed: (1.0, 2.0),
        hp: 4,
        score: 60,
        damage: 30,
    },
    ArchetypeProfile {
        kind: EnemyKind::Zigzag,
        weight: 14,
        radius: (14.0, 22.0),
        speed: (2.5, 4.0),
        hp: 2,
        score: 40,
        damage: 20,
    },
];

/// Look up the profile for an ordinary archetype. The boss has no profile.
pub fn profile_for(kind: EnemyKind) -> Option<&'static ArchetypeProfile> {
    ARCHETYPES.iter().find(|p| p.kind == kind)
}

/// Weighted draw over [`ARCHETYPES`].
pub fn pick_archetype(rng: &mut impl Rng) -> &'static ArchetypeProfile {
    // Every weight in the table is positive, so building the index can't fail.
    match WeightedIndex::new(ARCHETYPES.iter().map(|p| p.weight)) {
        Ok(dist) => &ARCHETYPES[dist.sample(rng)],
        Err(_) => &ARCHETYPES[0],
    }
}

/// Uniform draw from `lo..hi`. A range left empty by a hand-built tiny
/// playfield collapses to `lo`.
pub(crate) fn roll(rng: &mut impl Rng, lo: f64, hi: f64) -> f64 {
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}

// ── Enemies ──────────────────────────────────────────────────────────────────

pub fn spawn_boss(field: &Playfield) -> Enemy {
    Enemy {
        pos: Vec2::new(field.width + BOSS_SPAWN_OFFSET, field.height / 2.0),
        radius: BOSS_RADIUS,
        speed: BOSS_SPEED,
        hp: BOSS_HP,
        kind: EnemyKind::Boss,
        score: BOSS_SCORE,
        damage: BOSS_DAMAGE,
        wobble: 0.0,
    }
}

/// Roll an ordinary enemy just past the right edge.
pub fn spawn_enemy(field: &Playfield, rng: &mut impl Rng) -> Enemy {
    let profile = pick_archetype(rng);
    spawn_enemy_of(profile, field, rng)
}

pub fn spawn_enemy_of(profile: &ArchetypeProfile, field: &Playfield, rng: &mut impl Rng) -> Enemy {
    let radius = rng.gen_range(profile.radius.0..profile.radius.1);
    let speed = rng.gen_range(profile.speed.0..profile.speed.1);
    let y = roll(rng, ENEMY_SPAWN_INSET, field.height - ENEMY_SPAWN_INSET);
    Enemy {
        pos: Vec2::new(field.width + radius + ENEMY_SPAWN_MARGIN, y),
        radius,
        speed,
        hp: profile.hp,
        kind: profile.kind,
        score: profile.score,
        damage: profile.damage,
        wobble: rng.gen_range(0.0..TAU),
    }
}

// ── Power-ups ────────────────────────────────────────────────────────────────

pub fn spawn_power_up(field: &Playfield, rng: &mut impl Rng) -> PowerUp {
    let kind = PowerKind::ALL[rng.gen_range(0..PowerKind::ALL.len())];
    let y = roll(rng, POWER_UP_SPAWN_INSET, field.height - POWER_UP_SPAWN_INSET);
    PowerUp {
        pos: Vec2::new(field.width + POWER_UP_SPAWN_OFFSET, y),
        radius: POWER_UP_RADIUS,
        speed: POWER_UP_SPEED,
        kind,
    }
}

// ── Bullets ──────────────────────────────────────────────────────────────────

pub fn bullet(pos: Vec2, motion: BulletMotion) -> Bullet {
    Bullet {
        pos,
        radius: BULLET_RADIUS,
        speed: BULLET_SPEED,
        motion,
    }
}

/// A bullet leaving along `angle` radians off the +x axis.
pub fn angled_bullet(pos: Vec2, angle: f64) -> Bullet {
    bullet(
        pos,
        BulletMotion::Angled {
            dx: angle.cos(),
            dy: angle.sin(),
        },
    )
}

// ── Background ───────────────────────────────────────────────────────────────

pub fn spawn_stars(field: &Playfield, rng: &mut impl Rng) -> Vec<Star> {
    (0..STAR_COUNT)
        .map(|_| Star {
            pos: Vec2::new(roll(rng, 0.0, field.width), roll(rng, 0.0, field.height)),
            size: rng.gen_range(0.5..2.5),
            speed: rng.gen_range(0.6..2.4),
        })
        .collect()
}

// ── Timers ───────────────────────────────────────────────────────────────────

pub fn next_enemy_delay(rng: &mut impl Rng) -> f64 {
    ENEMY_SPAWN_INTERVAL_MIN + rng.gen_range(0.0..ENEMY_SPAWN_INTERVAL_SPREAD)
}

pub fn next_power_up_delay(rng: &mut impl Rng) -> f64 {
    POWER_UP_INTERVAL_MIN + rng.gen_range(0.0..POWER_UP_INTERVAL_SPREAD)
}
