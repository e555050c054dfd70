//! Round lifecycle: Active -> Dying -> Resetting -> Active
//!
//! The reset is an explicit deadline stored in the phase itself, checked every
//! tick against logical time. A reset can only ever apply to the round that
//! scheduled it.

use super::ease::EASE;
use super::state::{GameEvent, GameState, RoundPhase};
use crate::consts::*;

/// Scale/alpha applied to the actor sprite
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeathVisual {
    pub scale: f32,
    pub alpha: f32,
}

impl DeathVisual {
    pub const IDLE: Self = Self {
        scale: 1.0,
        alpha: 1.0,
    };

    /// Visual for linear animation progress `t`
    pub fn at(t: f32) -> Self {
        let eased = EASE.sample(t);
        Self {
            scale: 1.0 + eased,
            alpha: 1.0 - eased,
        }
    }
}

impl GameState {
    /// Actor was hit. Starts the death sequence once per round; returns
    /// whether this call started it.
    pub fn trigger_death(&mut self, object_id: u32) -> bool {
        if !self.phase.is_active() {
            return false;
        }
        let started_ms = self.time_ms;
        self.phase = RoundPhase::Dying {
            started_ms,
            reset_at_ms: started_ms + RESET_DELAY_MS,
        };
        self.events.push(GameEvent::ActorHit {
            id: object_id,
            score: self.score,
        });
        log::info!(
            "Round {} over: hit by egg {} with score {}",
            self.round,
            object_id,
            self.score
        );
        true
    }

    /// Move Dying to Resetting once its deadline has passed
    pub fn advance_countdown(&mut self) {
        if let RoundPhase::Dying { reset_at_ms, .. } = self.phase
            && self.time_ms >= reset_at_ms
        {
            self.phase = RoundPhase::Resetting;
        }
    }

    /// Apply a pending reset (no-op unless Resetting)
    pub fn finish_reset(&mut self) {
        if self.phase == RoundPhase::Resetting {
            self.reset_round();
        }
    }

    /// Start a fresh round: zero score, clear eggs, respawn actor
    pub fn reset_round(&mut self) {
        self.score = 0;
        self.objects.clear();
        self.last_spawn_x = None;
        self.spawn_timer_ms = 0.0;
        self.actor.respawn();
        self.round += 1;
        self.phase = RoundPhase::Active;
        self.events.push(GameEvent::RoundReset { round: self.round });
        log::info!("Round {} started", self.round);
    }

    /// Linear death animation progress in [0, 1] (0 when not dying)
    pub fn death_progress(&self) -> f32 {
        match self.phase {
            RoundPhase::Active => 0.0,
            RoundPhase::Dying { started_ms, .. } => {
                ((self.time_ms - started_ms) / DEATH_ANIMATION_MS).clamp(0.0, 1.0) as f32
            }
            RoundPhase::Resetting => 1.0,
        }
    }

    /// Actor scale/alpha for the current frame
    pub fn death_visual(&self) -> DeathVisual {
        if self.phase.is_active() {
            DeathVisual::IDLE
        } else {
            DeathVisual::at(self.death_progress())
        }
    }
}
