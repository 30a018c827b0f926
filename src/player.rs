/// Player controller: timer decay, movement and the per-power shoot policy.
use crate::constants::*;
use crate::entities::{ActivePower, Bullet, BulletMotion, Player, Playfield};
use crate::geometry::{clamp, Vec2};
use crate::input::Intents;
use crate::spawn::{angled_bullet, bullet};

pub fn new_player(field: &Playfield) -> Player {
    Player {
        pos: Vec2::new(PLAYER_START_X, field.height / 2.0),
        radius: PLAYER_RADIUS,
        speed: PLAYER_SPEED,
        cooldown: 0.0,
        power: ActivePower::None,
        power_remaining: 0.0,
        invulnerable: 0.0,
    }
}

/// Count every player timer down by `dt`, never below zero. An expired power
/// is dropped along with any shield hits it had absorbed.
pub fn tick_timers(player: &mut Player, dt: f64) {
    player.cooldown = (player.cooldown - dt).max(0.0);
    player.power_remaining = (player.power_remaining - dt).max(0.0);
    player.invulnerable = (player.invulnerable - dt).max(0.0);

    if player.power_remaining <= 0.0 {
        player.power = ActivePower::None;
    }
}

pub fn speed_multiplier(power: &ActivePower) -> f64 {
    match power {
        ActivePower::SpeedBoost => SPEED_BOOST_MULTIPLIER,
        _ => 1.0,
    }
}

/// Apply the movement intents and keep the ship inside the inset rectangle.
pub fn apply_movement(player: &mut Player, intents: &Intents, dt: f64, field: &Playfield) {
    let step = player.speed * speed_multiplier(&player.power) * dt;
    player.pos.x = clamp(
        player.pos.x + intents.axis_x() * step,
        PLAYER_MARGIN,
        field.width - PLAYER_MARGIN,
    );
    player.pos.y = clamp(
        player.pos.y + intents.axis_y() * step,
        PLAYER_MARGIN,
        field.height - PLAYER_MARGIN,
    );
}

/// Bullets emitted by one trigger pull under `power`, and the cooldown it sets.
pub fn shoot_policy(power: &ActivePower, origin: Vec2) -> (Vec<Bullet>, f64) {
    let muzzle = Vec2::new(origin.x + BULLET_MUZZLE_OFFSET, origin.y);
    match power {
        ActivePower::RapidFire => {
            let bullets = [-RAPID_FIRE_SPREAD, RAPID_FIRE_SPREAD]
                .iter()
                .map(|&offset| bullet(Vec2::new(muzzle.x, muzzle.y + offset), BulletMotion::Straight))
                .collect();
            (bullets, RAPID_FIRE_COOLDOWN)
        }
        ActivePower::TripleShot => {
            let bullets = TRIPLE_SHOT_ANGLES
                .iter()
                .map(|&angle| angled_bullet(muzzle, angle))
                .collect();
            (bullets, DEFAULT_COOLDOWN)
        }
        ActivePower::Homing => (vec![bullet(muzzle, BulletMotion::Homing)], DEFAULT_COOLDOWN),
        ActivePower::None
        | ActivePower::Shield { .. }
        | ActivePower::SpeedBoost => (vec![bullet(muzzle, BulletMotion::Straight)], DEFAULT_COOLDOWN),
    }
}

/// Fire if the trigger is held and the gun has cooled down.
pub fn try_fire(player: &mut Player, intents: &Intents, bullets: &mut Vec<Bullet>) {
    if !intents.fire || player.cooldown > 0.0 {
        return;
    }
    let (shots, cooldown) = shoot_policy(&player.power, player.pos);
    bullets.extend(shots);
    player.cooldown = cooldown;
}

/// One frame of the player controller.
pub fn update_player(
    player: &mut Player,
    bullets: &mut Vec<Bullet>,
    intents: &Intents,
    dt: f64,
    field: &Playfield,
) {
    tick_timers(player, dt);
    apply_movement(player, intents, dt, field);
    try_fire(player, intents, bullets);
}
