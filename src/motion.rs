/// Per-frame movement for everything except the player.
use rand::Rng;

use crate::constants::*;
use crate::entities::{Bullet, BulletMotion, Enemy, EnemyKind, Playfield, PowerUp, Star};
use crate::geometry::{clamp, Vec2};
use crate::spawn::roll;

// ── Wobble table ─────────────────────────────────────────────────────────────

/// Vertical sine parameters for one archetype.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wobble {
    /// Phase added per frame.
    pub rate: f64,
    pub amplitude: f64,
    /// Multiplier applied to the phase before taking the sine.
    pub frequency: f64,
}

pub fn wobble_for(kind: EnemyKind) -> Wobble {
    let (rate, amplitude, frequency) = match kind {
        EnemyKind::Boss => (0.02, BOSS_AMPLITUDE, 1.0),
        EnemyKind::Grunt => (0.03, 0.5, 1.0),
        EnemyKind::Swift => (0.11, 1.4, 2.4),
        EnemyKind::Tank => (0.015, 0.2, 1.0),
        EnemyKind::Zigzag => (0.08, 2.2, 1.0),
    };
    Wobble {
        rate,
        amplitude,
        frequency,
    }
}

// ── Projectiles ──────────────────────────────────────────────────────────────

/// Nearest enemy to `from` by squared distance. Ties go to the first one in
/// collection order.
pub fn nearest_enemy(from: Vec2, enemies: &[Enemy]) -> Option<&Enemy> {
    let mut best: Option<(&Enemy, f64)> = None;
    for enemy in enemies {
        let d = enemy.pos.distance_sq(from);
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((enemy, d)),
        }
    }
    best.map(|(enemy, _)| enemy)
}

pub fn step_bullet(bullet: &mut Bullet, enemies: &[Enemy], dt: f64) {
    match bullet.motion {
        BulletMotion::Straight => bullet.pos.x += bullet.speed * dt,
        BulletMotion::Angled { dx, dy } => {
            bullet.pos.x += dx * bullet.speed * dt;
            bullet.pos.y += dy * bullet.speed * dt;
        }
        BulletMotion::Homing => {
            let Some(target) = nearest_enemy(bullet.pos, enemies) else {
                return;
            };
            let to_target = target.pos.sub(bullet.pos);
            let dist = to_target.length_sq().sqrt();
            if dist > 0.0 {
                bullet.pos = bullet
                    .pos
                    .add(to_target.scale(bullet.speed * dt / dist));
            }
        }
    }
}

pub fn bullet_in_bounds(bullet: &Bullet, field: &Playfield) -> bool {
    let m = BULLET_CULL_MARGIN;
    bullet.pos.x <= field.width + m
        && bullet.pos.x >= -m
        && bullet.pos.y <= field.height + m
        && bullet.pos.y >= -m
}

/// Advance every bullet, then drop the ones that left the field.
pub fn move_bullets(bullets: &mut Vec<Bullet>, enemies: &[Enemy], dt: f64, field: &Playfield) {
    for bullet in bullets.iter_mut() {
        step_bullet(bullet, enemies, dt);
    }
    bullets.retain(|b| bullet_in_bounds(b, field));
}

// ── Enemies ──────────────────────────────────────────────────────────────────

pub fn step_enemy(enemy: &mut Enemy, dt: f64, field: &Playfield) {
    let wobble = wobble_for(enemy.kind);
    enemy.pos.x -= enemy.speed * dt;
    enemy.wobble += wobble.rate * dt;

    let swing = (enemy.wobble * wobble.frequency).sin() * wobble.amplitude;
    match enemy.kind {
        EnemyKind::Boss => enemy.pos.y = field.height / 2.0 + swing,
        _ => {
            let inset = enemy.radius + ENEMY_CLAMP_PADDING;
            enemy.pos.y = clamp(enemy.pos.y + swing * dt, inset, field.height - inset);
        }
    }
}

/// Move every enemy and drop those that slipped past the left edge. Escapes
/// are neither scored nor penalized.
pub fn move_enemies(enemies: &mut Vec<Enemy>, dt: f64, field: &Playfield) {
    for enemy in enemies.iter_mut() {
        step_enemy(enemy, dt, field);
    }
    enemies.retain(|e| e.pos.x >= -ENEMY_ESCAPE_DISTANCE);
}

// ── Pickups & background ─────────────────────────────────────────────────────

pub fn move_power_ups(power_ups: &mut Vec<PowerUp>, dt: f64) {
    for item in power_ups.iter_mut() {
        item.pos.x -= item.speed * dt;
    }
    power_ups.retain(|p| p.pos.x >= -POWER_UP_CULL_MARGIN);
}

/// Scroll stars left; a star leaving the left edge re-enters from the right.
pub fn move_stars(stars: &mut [Star], dt: f64, field: &Playfield, rng: &mut impl Rng) {
    for star in stars.iter_mut() {
        star.pos.x -= star.speed * dt;
        if star.pos.x < 0.0 {
            star.pos.x = field.width + rng.gen_range(0.0..STAR_RECYCLE_SPREAD);
            star.pos.y = roll(rng, 0.0, field.height);
        }
    }
}
