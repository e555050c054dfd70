//! Eggfall - dodge the falling eggs
//!
//! Core modules:
//! - `sim`: Deterministic simulation (actor physics, spawning, collisions, round lifecycle)
//! - `platform`: Frame clock and input aggregation
//! - `renderer`: Render sink seam and GPU-ready sprite instances
//! - `game`: Per-frame driver tying the clock, simulation and sink together
//! - `settings`: Player preferences (JSON)

pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use settings::Settings;
pub use sim::CollisionMode;

/// Game configuration constants
///
/// All positions live in a fixed 1920x1080 logical playfield, origin top-left.
/// Times are milliseconds, speeds are units per second.
pub mod consts {
    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 1920.0;
    pub const PLAYFIELD_HEIGHT: f32 = 1080.0;

    /// Actor (the ball) defaults
    pub const ACTOR_WIDTH: f32 = 150.0;
    pub const ACTOR_HEIGHT: f32 = 150.0;
    pub const ACTOR_HALF_WIDTH: f32 = ACTOR_WIDTH / 2.0;
    pub const ACTOR_RADIUS: f32 = ACTOR_WIDTH / 2.0;
    pub const ACTOR_MAX_SPEED: f32 = 1000.0;
    pub const ACTOR_ACCELERATION: f32 = 10000.0;
    /// Fraction of velocity left after one second of braking (before the multiplier)
    pub const ACTOR_FRICTION: f32 = 0.01;
    pub const ACTOR_FRICTION_MULTIPLIER: f32 = 3.0;
    /// Spawn position, also used on every round reset
    pub const ACTOR_SPAWN_X: f32 = PLAYFIELD_WIDTH / 2.0;
    /// Actor center sits 200 units above the bottom edge
    pub const ACTOR_Y: f32 = PLAYFIELD_HEIGHT - ACTOR_HEIGHT / 2.0 - 200.0;

    /// Falling object (egg) defaults
    pub const OBJECT_WIDTH: f32 = 150.0;
    pub const OBJECT_HEIGHT: f32 = 185.0;
    pub const OBJECT_RADIUS: f32 = OBJECT_WIDTH / 2.0;
    pub const OBJECT_FALL_SPEED: f32 = 800.0;
    /// Degrees per second
    pub const OBJECT_SPIN_SPEED: f32 = 60.0;
    /// Objects below this y have left the playfield (hidden behind the ground)
    pub const GROUND_THRESHOLD: f32 = PLAYFIELD_HEIGHT - 200.0 + OBJECT_HEIGHT;

    /// Spawner
    pub const SPAWN_INTERVAL_MS: f32 = 125.0;
    pub const SPAWN_MIN_SPACING: f32 = 200.0;
    /// Rejection-sampling bound; the last candidate is accepted past this
    pub const SPAWN_MAX_RETRIES: u32 = 64;

    /// Round lifecycle
    pub const DEATH_ANIMATION_MS: f64 = 1000.0;
    pub const RESET_DELAY_MS: f64 = 1000.0;

    /// Narrow-phase collision buffer (square, centered on the actor)
    pub const COLLISION_BUFFER_SIZE: usize = 150;

    /// Default RNG seed when settings don't provide one
    pub const DEFAULT_SEED: u64 = 0x00E6_6FA1;
}

/// Wrap an angle in degrees to [0, 360)
#[inline]
pub fn wrap_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}
