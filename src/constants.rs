// ── Frame timing ─────────────────────────────────────────────────────────────

/// Milliseconds in one nominal 60 FPS frame; delta-time is measured in these.
pub const FRAME_MS: f64 = 16.67;
/// Largest delta-time a single frame may advance by.
pub const MAX_DELTA: f64 = 2.0;

// ── Playfield ────────────────────────────────────────────────────────────────

/// Smallest playfield edge that leaves room for the spawn insets.
pub const MIN_PLAYFIELD_EDGE: f64 = 200.0;

// ── Game rules ───────────────────────────────────────────────────────────────

pub const START_LIVES: u32 = 3;
pub const MAX_HP: i32 = 100;
pub const BOSS_SCORE_THRESHOLD: u32 = 500;
pub const POWER_UP_SCORE: u32 = 40;
pub const POWER_DURATION: f64 = 300.0;
pub const HIT_INVULNERABILITY: f64 = 45.0;
pub const SHIELD_MAX_HITS: u8 = 3;

// ── Player ───────────────────────────────────────────────────────────────────

pub const PLAYER_START_X: f64 = 120.0;
pub const PLAYER_RADIUS: f64 = 16.0;
pub const PLAYER_SPEED: f64 = 4.2;
/// Inset from every playfield edge the ship is clamped to.
pub const PLAYER_MARGIN: f64 = 40.0;
pub const SPEED_BOOST_MULTIPLIER: f64 = 1.5;

// ── Bullets ──────────────────────────────────────────────────────────────────

pub const BULLET_SPEED: f64 = 8.2;
pub const BULLET_RADIUS: f64 = 4.0;
/// Bullets spawn this far ahead of the ship's centre.
pub const BULLET_MUZZLE_OFFSET: f64 = 18.0;
pub const BULLET_CULL_MARGIN: f64 = 40.0;
pub const DEFAULT_COOLDOWN: f64 = 10.0;
pub const RAPID_FIRE_COOLDOWN: f64 = 6.0;
pub const RAPID_FIRE_SPREAD: f64 = 8.0;
pub const TRIPLE_SHOT_ANGLES: [f64; 3] = [-0.3, 0.0, 0.3];

// ── Enemies ──────────────────────────────────────────────────────────────────

pub const ENEMY_SPAWN_MARGIN: f64 = 20.0;
/// Ordinary enemies spawn this far inside the top/bottom edges.
pub const ENEMY_SPAWN_INSET: f64 = 40.0;
/// Extra inset (beyond the radius) non-boss enemies are kept within.
pub const ENEMY_CLAMP_PADDING: f64 = 8.0;
/// Enemies are dropped once they are this far past the left edge.
pub const ENEMY_ESCAPE_DISTANCE: f64 = 120.0;
pub const ENEMY_SPAWN_INTERVAL_MIN: f64 = 28.0;
pub const ENEMY_SPAWN_INTERVAL_SPREAD: f64 = 30.0;

pub const BOSS_RADIUS: f64 = 42.0;
pub const BOSS_SPEED: f64 = 1.2;
pub const BOSS_HP: i32 = 220;
pub const BOSS_DAMAGE: i32 = 40;
pub const BOSS_SCORE: u32 = 300;
pub const BOSS_SPAWN_OFFSET: f64 = 120.0;
pub const BOSS_AMPLITUDE: f64 = 120.0;

// ── Power-ups ────────────────────────────────────────────────────────────────

pub const POWER_UP_RADIUS: f64 = 12.0;
pub const POWER_UP_SPEED: f64 = 2.6;
pub const POWER_UP_SPAWN_OFFSET: f64 = 40.0;
pub const POWER_UP_SPAWN_INSET: f64 = 50.0;
pub const POWER_UP_CULL_MARGIN: f64 = 40.0;
pub const FIRST_POWER_UP_DELAY: f64 = 300.0;
pub const POWER_UP_INTERVAL_MIN: f64 = 240.0;
pub const POWER_UP_INTERVAL_SPREAD: f64 = 240.0;

// ── Background ───────────────────────────────────────────────────────────────

pub const STAR_COUNT: usize = 120;
pub const STAR_RECYCLE_SPREAD: f64 = 40.0;
