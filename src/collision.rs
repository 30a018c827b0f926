//! Collision & resolution engine.
//!
//! Runs once per frame in a fixed order: bullets against enemies, enemies
//! against the player, then pickups against the player. Each pass walks its
//! collections back to front by index so removals never disturb the
//! elements still to be visited.

use log::{debug, info};

use crate::constants::*;
use crate::entities::{ActivePower, EnemyKind, GameStatus, SimulationState};
use crate::geometry::overlaps;

/// Resolve every collision for this frame. Stops early once the game has
/// been won or lost so a single frame can't end in both states.
pub fn resolve_collisions(state: &mut SimulationState) {
    resolve_bullet_hits(state);
    if state.is_terminal() {
        return;
    }
    resolve_enemy_contacts(state);
    if state.is_terminal() {
        return;
    }
    resolve_power_up_pickups(state);
}

/// Each enemy consumes at most one bullet per frame: the last overlapping
/// bullet in collection order. Killing the boss wins the game, but the rest
/// of the pass still runs so same-frame kills are scored.
pub fn resolve_bullet_hits(state: &mut SimulationState) {
    let mut boss_down = false;
    let mut i = state.enemies.len();
    while i > 0 {
        i -= 1;
        let hit = (0..state.bullets.len())
            .rev()
            .find(|&j| overlaps(&state.enemies[i], &state.bullets[j]));
        let Some(j) = hit else {
            continue;
        };

        state.bullets.remove(j);
        state.enemies[i].hp -= 1;
        if state.enemies[i].hp > 0 {
            continue;
        }

        let enemy = state.enemies.remove(i);
        state.score += enemy.score;
        debug!("{:?} destroyed, score now {}", enemy.kind, state.score);

        if enemy.kind == EnemyKind::Boss {
            boss_down = true;
        }
    }

    if boss_down {
        state.status = GameStatus::Won;
        info!("boss destroyed, game won with score {}", state.score);
    }
}

/// Contact damage. The invulnerability window set by the first contact also
/// shields the player from any other enemy touching it in the same frame.
pub fn resolve_enemy_contacts(state: &mut SimulationState) {
    for i in (0..state.enemies.len()).rev() {
        if state.player.invulnerable > 0.0 || !overlaps(&state.enemies[i], &state.player) {
            continue;
        }
        state.player.invulnerable = HIT_INVULNERABILITY;

        match state.player.power {
            ActivePower::Shield { absorbed } if absorbed < SHIELD_MAX_HITS => {
                let absorbed = absorbed + 1;
                debug!("shield absorbed hit {}/{}", absorbed, SHIELD_MAX_HITS);
                if absorbed >= SHIELD_MAX_HITS {
                    state.player.power = ActivePower::None;
                    state.player.power_remaining = 0.0;
                } else {
                    state.player.power = ActivePower::Shield { absorbed };
                }
            }
            _ => {
                state.hp -= state.enemies[i].damage;
                if state.hp > 0 {
                    continue;
                }
                state.lives = state.lives.saturating_sub(1);
                state.hp = MAX_HP;
                info!("life lost, {} remaining", state.lives);
                if state.lives == 0 {
                    state.status = GameStatus::Lost;
                    info!("game over with score {}", state.score);
                    return;
                }
            }
        }
    }
}

pub fn resolve_power_up_pickups(state: &mut SimulationState) {
    for i in (0..state.power_ups.len()).rev() {
        if !overlaps(&state.power_ups[i], &state.player) {
            continue;
        }
        let item = state.power_ups.remove(i);
        state.player.power = ActivePower::granted(item.kind);
        state.player.power_remaining = POWER_DURATION;
        state.score += POWER_UP_SCORE;
        debug!("picked up {}", item.kind.name());
    }
}
