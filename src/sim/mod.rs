//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only advances through the deltas passed to `tick`
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod actor;
pub mod autopilot;
pub mod collision;
pub mod ease;
pub mod mask;
pub mod round;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{CollisionBuffer, CollisionDetector, CollisionMode, broad_phase};
pub use ease::{CubicBezier, EASE};
pub use mask::SilhouetteMask;
pub use round::DeathVisual;
pub use state::{Actor, FallingObject, GameEvent, GameState, RoundPhase};
pub use tick::{TickInput, tick};
