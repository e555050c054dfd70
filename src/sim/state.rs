//! Game state and core simulation types
//!
//! Everything the update loop mutates lives in [`GameState`]; nothing is global.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Where the current round is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Normal play: navigation, scoring and collisions enabled
    Active,
    /// Actor was hit; death animation plays until the reset countdown expires
    Dying { started_ms: f64, reset_at_ms: f64 },
    /// Countdown expired, the reset is applied at the end of this tick
    Resetting,
}

impl RoundPhase {
    #[inline]
    pub fn is_active(&self) -> bool {
        matches!(self, RoundPhase::Active)
    }
}

/// Something that happened during the last tick (for audio/HUD hooks)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    ObjectSpawned { id: u32, x: f32 },
    /// Object left the playfield while the round was active
    ObjectDodged { id: u32, score: u32 },
    ActorHit { id: u32, score: u32 },
    RoundReset { round: u32 },
    Paused,
    Resumed,
}

/// The player-controlled ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    /// Horizontal center, kept within [ACTOR_HALF_WIDTH, PLAYFIELD_WIDTH - ACTOR_HALF_WIDTH]
    pub x: f32,
    /// Units per second, clamped to ±ACTOR_MAX_SPEED
    pub velocity: f32,
}

impl Default for Actor {
    fn default() -> Self {
        Self {
            x: ACTOR_SPAWN_X,
            velocity: 0.0,
        }
    }
}

impl Actor {
    /// Center of the actor in playfield space (y never changes)
    #[inline]
    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, ACTOR_Y)
    }

    /// Put the actor back at its spawn state
    pub fn respawn(&mut self) {
        *self = Self::default();
    }
}

/// A falling, spinning egg
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FallingObject {
    pub id: u32,
    /// Center in playfield space
    pub pos: Vec2,
    /// Rotation in degrees, [0, 360)
    pub angle: f32,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Spawner RNG
    pub rng: Pcg32,
    /// Logical time (sum of all applied deltas), milliseconds
    pub time_ms: f64,
    pub phase: RoundPhase,
    /// Everything but rendering is frozen while paused
    pub paused: bool,
    pub score: u32,
    /// Highest score reached during this process
    pub best_score: u32,
    /// Number of resets so far; identifies the current round
    pub round: u32,
    pub actor: Actor,
    /// Live objects in spawn order
    pub objects: Vec<FallingObject>,
    /// Time accumulated since the last spawn
    pub spawn_timer_ms: f32,
    /// x of the most recently spawned object (spacing reference)
    pub last_spawn_x: Option<f32>,
    /// Events recorded during the last tick
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            time_ms: 0.0,
            phase: RoundPhase::Active,
            paused: false,
            score: 0,
            best_score: 0,
            round: 0,
            actor: Actor::default(),
            objects: Vec::new(),
            spawn_timer_ms: 0.0,
            last_spawn_x: None,
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Record a dodge: bump the score and the session best
    pub fn award_point(&mut self) {
        self.score += 1;
        self.best_score = self.best_score.max(self.score);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_spawn_values() {
        let state = GameState::new(1);
        assert_eq!(state.actor.x, 960.0);
        assert_eq!(state.actor.velocity, 0.0);
        assert_eq!(state.phase, RoundPhase::Active);
        assert!(state.objects.is_empty());
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_entity_ids_increase() {
        let mut state = GameState::new(1);
        let a = state.next_entity_id();
        let b = state.next_entity_id();
        assert!(b > a);
    }

    #[test]
    fn test_award_point_tracks_best() {
        let mut state = GameState::new(1);
        state.award_point();
        state.award_point();
        state.score = 0;
        state.award_point();
        assert_eq!(state.score, 1);
        assert_eq!(state.best_score, 2);
    }
}
