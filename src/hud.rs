/// Read-only HUD view of the simulation, formatted for display.
use crate::constants::MAX_HP;
use crate::entities::{ActivePower, GameStatus, SimulationState};

pub const WIN_MESSAGE: &str = "You Win! Press R to restart";
pub const GAME_OVER_MESSAGE: &str = "Game Over - Press R to restart";

#[derive(Clone, Debug, PartialEq)]
pub struct Hud {
    pub score: u32,
    pub lives: u32,
    /// 0..=100, for the health bar.
    pub hp: u32,
    pub power: String,
    /// Message for the end-of-game overlay; `None` hides it.
    pub overlay: Option<&'static str>,
}

impl Hud {
    pub fn from_state(state: &SimulationState) -> Self {
        Hud {
            score: state.score,
            lives: state.lives,
            hp: state.hp.clamp(0, MAX_HP) as u32,
            power: power_label(&state.player.power, state.player.power_remaining),
            overlay: overlay_message(state.status),
        }
    }
}

pub fn power_label(power: &ActivePower, remaining: f64) -> String {
    match (power.kind(), remaining > 0.0) {
        (Some(kind), true) => match power {
            ActivePower::Shield { absorbed } => format!("Power: {} ({} hits)", kind.name(), absorbed),
            _ => format!("Power: {}", kind.name()),
        },
        _ => "Power: None".to_string(),
    }
}

pub fn overlay_message(status: GameStatus) -> Option<&'static str> {
    match status {
        GameStatus::Playing => None,
        GameStatus::Won => Some(WIN_MESSAGE),
        GameStatus::Lost => Some(GAME_OVER_MESSAGE),
    }
}
