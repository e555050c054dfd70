//! Procedural egg spawner
//!
//! Eggs appear at a fixed cadence, fully above the top edge, at a random x that
//! keeps a minimum horizontal gap from the previously spawned egg.

use glam::Vec2;
use rand::Rng;

use super::state::{FallingObject, GameEvent, GameState};
use crate::consts::*;

/// Horizontal range an egg center may spawn in
pub const SPAWN_MIN_X: f32 = OBJECT_WIDTH / 2.0;
pub const SPAWN_MAX_X: f32 = PLAYFIELD_WIDTH - OBJECT_WIDTH / 2.0;

/// Whether a candidate x keeps the required spacing from the last spawn
#[inline]
pub fn spacing_ok(candidate: f32, last_x: Option<f32>) -> bool {
    last_x.is_none_or(|last| (candidate - last).abs() >= SPAWN_MIN_SPACING)
}

/// Rejection-sample a spawn x from `draw`.
///
/// Only the most recent spawn is checked. After `SPAWN_MAX_RETRIES` rejected
/// draws the last candidate is taken as-is.
pub fn pick_spawn_x(mut draw: impl FnMut() -> f32, last_x: Option<f32>) -> f32 {
    let mut candidate = draw();
    let mut retries = 0;
    while !spacing_ok(candidate, last_x) {
        if retries >= SPAWN_MAX_RETRIES {
            log::warn!(
                "Spawner gave up after {} retries, accepting x={:.1}",
                retries,
                candidate
            );
            break;
        }
        candidate = draw();
        retries += 1;
    }
    candidate
}

/// Accumulate `dt_ms` and spawn one egg once the interval has elapsed.
///
/// Returns the new egg's id, if one was spawned.
pub fn update_spawner(state: &mut GameState, dt_ms: f32) -> Option<u32> {
    state.spawn_timer_ms += dt_ms;
    if state.spawn_timer_ms < SPAWN_INTERVAL_MS {
        return None;
    }
    state.spawn_timer_ms = 0.0;
    Some(spawn_object(state))
}

/// Append a new egg above the playfield
pub fn spawn_object(state: &mut GameState) -> u32 {
    let last_x = state.last_spawn_x;
    let rng = &mut state.rng;
    let x = pick_spawn_x(|| rng.random_range(SPAWN_MIN_X..=SPAWN_MAX_X), last_x);
    let angle = state.rng.random_range(0.0..360.0);

    let id = state.next_entity_id();
    state.objects.push(FallingObject {
        id,
        pos: Vec2::new(x, -OBJECT_HEIGHT),
        angle,
    });
    state.last_spawn_x = Some(x);
    state.events.push(GameEvent::ObjectSpawned { id, x });
    log::debug!("Spawned egg {} at x={:.1} angle={:.1}", id, x, angle);
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_close_candidate_is_redrawn() {
        let mut draws = [600.0, 750.0].into_iter();
        let x = pick_spawn_x(|| draws.next().unwrap(), Some(500.0));
        assert_eq!(x, 750.0);
    }

    #[test]
    fn test_first_spawn_accepts_anything() {
        let x = pick_spawn_x(|| 123.0, None);
        assert_eq!(x, 123.0);
    }

    #[test]
    fn test_retry_bound_accepts_last_candidate() {
        let mut calls = 0;
        let x = pick_spawn_x(
            || {
                calls += 1;
                510.0
            },
            Some(500.0),
        );
        assert_eq!(x, 510.0);
        assert_eq!(calls, SPAWN_MAX_RETRIES + 1);
    }

    #[test]
    fn test_spawner_waits_for_interval() {
        let mut state = GameState::new(7);
        assert_eq!(update_spawner(&mut state, 100.0), None);
        assert!(update_spawner(&mut state, 30.0).is_some());
        assert_eq!(state.objects.len(), 1);
        assert_eq!(state.spawn_timer_ms, 0.0);

        let egg = state.objects[0];
        assert_eq!(egg.pos.y, -OBJECT_HEIGHT);
        assert!(egg.angle >= 0.0 && egg.angle < 360.0);
        assert!(egg.pos.x >= SPAWN_MIN_X && egg.pos.x <= SPAWN_MAX_X);
    }

    proptest! {
        #[test]
        fn prop_consecutive_spawns_keep_spacing(seed in any::<u64>(), count in 2usize..60) {
            let mut state = GameState::new(seed);
            let mut xs = Vec::with_capacity(count);
            for _ in 0..count {
                spawn_object(&mut state);
                xs.push(state.last_spawn_x.unwrap());
            }
            for pair in xs.windows(2) {
                prop_assert!((pair[1] - pair[0]).abs() >= SPAWN_MIN_SPACING);
            }
        }
    }
}
