/// Entity and state types shared by every simulation stage. Plain data only.
use crate::constants::MIN_PLAYFIELD_EDGE;
use crate::error::{GameError, Result};
use crate::geometry::{Circle, Vec2};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EnemyKind {
    Grunt,
    Swift,
    Tank,
    Zigzag,
    Boss,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

/// Collectible kinds, in the order the spawner draws them from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PowerKind {
    /// Two parallel shots, faster cooldown.
    RapidFire,
    /// Absorbs up to three contacts, then breaks.
    Shield,
    /// Three-way angled spread.
    TripleShot,
    /// 1.5x movement speed.
    SpeedBoost,
    /// Single shot that steers toward the nearest enemy.
    Homing,
}

impl PowerKind {
    pub const ALL: [PowerKind; 5] = [
        PowerKind::RapidFire,
        PowerKind::Shield,
        PowerKind::TripleShot,
        PowerKind::SpeedBoost,
        PowerKind::Homing,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PowerKind::RapidFire => "Rapid Fire",
            PowerKind::Shield => "Shield",
            PowerKind::TripleShot => "Triple Shot",
            PowerKind::SpeedBoost => "Speed Boost",
            PowerKind::Homing => "Homing Missiles",
        }
    }
}

/// The power currently held by the player. Shield carries the number of
/// contacts it has absorbed so far.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ActivePower {
    #[default]
    None,
    RapidFire,
    Shield {
        absorbed: u8,
    },
    TripleShot,
    SpeedBoost,
    Homing,
}

impl ActivePower {
    /// A freshly collected power; a new shield starts with no absorbed hits.
    pub fn granted(kind: PowerKind) -> Self {
        match kind {
            PowerKind::RapidFire => ActivePower::RapidFire,
            PowerKind::Shield => ActivePower::Shield { absorbed: 0 },
            PowerKind::TripleShot => ActivePower::TripleShot,
            PowerKind::SpeedBoost => ActivePower::SpeedBoost,
            PowerKind::Homing => ActivePower::Homing,
        }
    }

    pub fn kind(&self) -> Option<PowerKind> {
        match self {
            ActivePower::None => None,
            ActivePower::RapidFire => Some(PowerKind::RapidFire),
            ActivePower::Shield { .. } => Some(PowerKind::Shield),
            ActivePower::TripleShot => Some(PowerKind::TripleShot),
            ActivePower::SpeedBoost => Some(PowerKind::SpeedBoost),
            ActivePower::Homing => Some(PowerKind::Homing),
        }
    }
}

// ── Projectiles ───────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BulletMotion {
    /// Flies along +x.
    Straight,
    /// Flies along a unit direction fixed at spawn time.
    Angled { dx: f64, dy: f64 },
    /// Re-aims at the nearest enemy every frame.
    Homing,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub pos: Vec2,
    pub radius: f64,
    pub speed: f64,
    pub motion: BulletMotion,
}

// ── Player, enemies & pickups ─────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub pos: Vec2,
    pub radius: f64,
    pub speed: f64,
    /// Frames until the next shot is allowed.
    pub cooldown: f64,
    pub power: ActivePower,
    /// Frames left on the active power.
    pub power_remaining: f64,
    /// Frames of post-hit invulnerability left.
    pub invulnerable: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub pos: Vec2,
    pub radius: f64,
    pub speed: f64,
    pub hp: i32,
    pub kind: EnemyKind,
    pub score: u32,
    pub damage: i32,
    /// Phase accumulator driving the vertical sine motion.
    pub wobble: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PowerUp {
    pub pos: Vec2,
    pub radius: f64,
    pub speed: f64,
    pub kind: PowerKind,
}

/// Cosmetic parallax dot; never collides with anything.
#[derive(Clone, Debug, PartialEq)]
pub struct Star {
    pub pos: Vec2,
    pub size: f64,
    pub speed: f64,
}

impl Circle for Player {
    fn center(&self) -> Vec2 {
        self.pos
    }
    fn radius(&self) -> f64 {
        self.radius
    }
}

impl Circle for Bullet {
    fn center(&self) -> Vec2 {
        self.pos
    }
    fn radius(&self) -> f64 {
        self.radius
    }
}

impl Circle for Enemy {
    fn center(&self) -> Vec2 {
        self.pos
    }
    fn radius(&self) -> f64 {
        self.radius
    }
}

impl Circle for PowerUp {
    fn center(&self) -> Vec2 {
        self.pos
    }
    fn radius(&self) -> f64 {
        self.radius
    }
}

// ── Master simulation state ───────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Playfield {
    pub width: f64,
    pub height: f64,
}

impl Playfield {
    /// A playfield large enough for the spawn insets. Both edges must be
    /// finite and at least [`MIN_PLAYFIELD_EDGE`].
    pub fn new(width: f64, height: f64) -> Result<Self> {
        let fits = |edge: f64| edge.is_finite() && edge >= MIN_PLAYFIELD_EDGE;
        if !fits(width) || !fits(height) {
            return Err(GameError::InvalidPlayfield {
                width,
                height,
                min: MIN_PLAYFIELD_EDGE,
            });
        }
        Ok(Playfield { width, height })
    }
}

/// Countdowns (in frames) until the next enemy / power-up spawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnTimers {
    pub enemy: f64,
    pub power_up: f64,
}

/// The entire simulation state. Cloneable so the frame driver can return a
/// new copy without touching the caller's.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationState {
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    pub power_ups: Vec<PowerUp>,
    pub stars: Vec<Star>,
    pub score: u32,
    pub lives: u32,
    /// 0..=100 at rest; may dip below zero only inside damage resolution.
    pub hp: i32,
    /// Latches once the boss has been spawned this game.
    pub boss_spawned: bool,
    pub status: GameStatus,
    pub timers: SpawnTimers,
    pub playfield: Playfield,
}

impl SimulationState {
    pub fn game_over(&self) -> bool {
        self.status == GameStatus::Lost
    }

    pub fn win(&self) -> bool {
        self.status == GameStatus::Won
    }

    pub fn is_terminal(&self) -> bool {
        self.status != GameStatus::Playing
    }
}
