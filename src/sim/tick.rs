//! Per-frame simulation tick
//!
//! Order within a tick is fixed: lifecycle countdown, actor, spawner, eggs
//! (movement, scoring, collision), then any pending reset. Given the same
//! deltas and inputs the outcome is identical.

use super::autopilot;
use super::collision::CollisionDetector;
use super::spawn::update_spawner;
use super::state::{GameEvent, GameState};
use crate::consts::*;
use crate::wrap_degrees;

/// Input snapshot for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Move toward smaller x (A / Left / left half touch)
    pub move_neg: bool,
    /// Move toward larger x (D / Right / right half touch)
    pub move_pos: bool,
    /// Pause toggle
    pub pause: bool,
    /// Idle/demo mode - autopilot drives the actor
    pub idle_mode: bool,
}

/// Advance the game state by `dt_ms` milliseconds
pub fn tick(state: &mut GameState, detector: &mut CollisionDetector, input: &TickInput, dt_ms: f32) {
    state.events.clear();

    if input.pause {
        state.paused = !state.paused;
        state
            .events
            .push(if state.paused { GameEvent::Paused } else { GameEvent::Resumed });
        log::info!("Game {}", if state.paused { "paused" } else { "resumed" });
    }

    // Degenerate deltas are a no-op; paused freezes everything
    if state.paused || !dt_ms.is_finite() || dt_ms <= 0.0 {
        return;
    }

    state.time_ms += dt_ms as f64;
    state.advance_countdown();

    let navigable = state.phase.is_active();
    let (move_neg, move_pos) = if input.idle_mode && navigable {
        autopilot::steer(state)
    } else {
        (input.move_neg, input.move_pos)
    };
    state.actor.update(dt_ms, move_neg, move_pos, navigable);

    update_spawner(state, dt_ms);
    update_objects(state, detector, dt_ms);

    state.finish_reset();
}

/// Move every egg, retire the ones that left the playfield or hit the actor
pub fn update_objects(state: &mut GameState, detector: &mut CollisionDetector, dt_ms: f32) {
    let dt_secs = dt_ms / 1000.0;
    let actor_pos = state.actor.pos();

    let mut i = 0;
    while i < state.objects.len() {
        let egg = &mut state.objects[i];
        egg.pos.y += OBJECT_FALL_SPEED * dt_secs;
        egg.angle = wrap_degrees(egg.angle + OBJECT_SPIN_SPEED * dt_secs);
        let egg = *egg;

        if egg.pos.y > GROUND_THRESHOLD {
            state.objects.remove(i);
            if state.phase.is_active() {
                state.award_point();
                state.events.push(GameEvent::ObjectDodged {
                    id: egg.id,
                    score: state.score,
                });
                log::debug!("Egg {} dodged, score {}", egg.id, state.score);
            }
            continue;
        }

        // Only a live round can be lost; eggs pass through a dying actor
        if state.phase.is_active() && detector.hits(actor_pos, &egg) {
            state.objects.remove(i);
            state.trigger_death(egg.id);
            continue;
        }

        i += 1;
    }
}
