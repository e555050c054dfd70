//! Actor controller
//!
//! Integrates the ball's velocity and position from the direction intent.
//! Everything is scaled by real elapsed time so the feel doesn't depend on
//! frame rate.

use super::state::Actor;
use crate::consts::*;

/// Braking factor for `dt_secs` of friction
#[inline]
pub fn friction_factor(dt_secs: f32) -> f32 {
    ACTOR_FRICTION.powf(dt_secs * ACTOR_FRICTION_MULTIPLIER)
}

impl Actor {
    /// Advance the actor by `dt_ms`.
    ///
    /// `navigable` is false while the round isn't active: input is ignored and
    /// the ball coasts to a stop with a gentler decay than normal braking.
    pub fn update(&mut self, dt_ms: f32, move_neg: bool, move_pos: bool, navigable: bool) {
        if dt_ms <= 0.0 || !dt_ms.is_finite() {
            return;
        }
        let dt_secs = dt_ms / 1000.0;

        if navigable {
            if move_neg {
                self.velocity -= ACTOR_ACCELERATION * dt_secs;
            }
            if move_pos {
                self.velocity += ACTOR_ACCELERATION * dt_secs;
            }
            // No net input: brake
            if move_neg == move_pos {
                self.velocity *= friction_factor(dt_secs);
            }
        } else {
            self.velocity *= friction_factor(dt_secs) / 2.0;
        }

        self.velocity = self.velocity.clamp(-ACTOR_MAX_SPEED, ACTOR_MAX_SPEED);
        self.x += self.velocity * dt_secs;

        // Inelastic wall stop
        let min_x = ACTOR_HALF_WIDTH;
        let max_x = PLAYFIELD_WIDTH - ACTOR_HALF_WIDTH;
        if self.x < min_x {
            self.x = min_x;
            self.velocity = 0.0;
        }
        if self.x > max_x {
            self.x = max_x;
            self.velocity = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_accelerate_left_clamps_to_max_speed() {
        let mut actor = Actor::default();
        actor.update(100.0, true, false, true);
        assert_eq!(actor.velocity, -1000.0);
        assert!((actor.x - 860.0).abs() < 1e-3);
    }

    #[test]
    fn test_both_directions_brake() {
        let mut actor = Actor {
            x: 960.0,
            velocity: 500.0,
        };
        actor.update(16.0, true, true, true);
        assert!(actor.velocity < 500.0);
        assert!(actor.velocity > 0.0);
    }

    #[test]
    fn test_wall_stop_zeroes_velocity() {
        let mut actor = Actor {
            x: 80.0,
            velocity: -1000.0,
        };
        actor.update(50.0, true, false, true);
        assert_eq!(actor.x, ACTOR_HALF_WIDTH);
        assert_eq!(actor.velocity, 0.0);

        let mut actor = Actor {
            x: 1840.0,
            velocity: 1000.0,
        };
        actor.update(50.0, false, true, true);
        assert_eq!(actor.x, PLAYFIELD_WIDTH - ACTOR_HALF_WIDTH);
        assert_eq!(actor.velocity, 0.0);
    }

    #[test]
    fn test_input_ignored_when_not_navigable() {
        let mut actor = Actor::default();
        actor.update(100.0, false, true, false);
        assert_eq!(actor.velocity, 0.0);
        assert_eq!(actor.x, ACTOR_SPAWN_X);
    }

    #[test]
    fn test_coasting_decays_faster_than_halving() {
        let dt = 16.0;
        let mut braking = Actor {
            x: 960.0,
            velocity: 800.0,
        };
        let mut coasting = braking;
        braking.update(dt, false, false, true);
        coasting.update(dt, false, false, false);
        assert!((coasting.velocity - braking.velocity / 2.0).abs() < 1e-3);
    }

    #[test]
    fn test_zero_dt_is_noop() {
        let mut actor = Actor {
            x: 500.0,
            velocity: 300.0,
        };
        actor.update(0.0, true, false, true);
        actor.update(-5.0, true, false, true);
        assert_eq!(actor.x, 500.0);
        assert_eq!(actor.velocity, 300.0);
    }

    proptest! {
        #[test]
        fn prop_actor_stays_in_bounds(
            x in 75.0f32..1845.0,
            velocity in -1000.0f32..1000.0,
            steps in proptest::collection::vec((0.0f32..250.0, any::<bool>(), any::<bool>(), any::<bool>()), 1..40),
        ) {
            let mut actor = Actor { x, velocity };
            for (dt, neg, pos, nav) in steps {
                actor.update(dt, neg, pos, nav);
                prop_assert!(actor.x >= 75.0 && actor.x <= 1845.0);
                prop_assert!(actor.velocity.abs() <= ACTOR_MAX_SPEED);
            }
        }

        #[test]
        fn prop_friction_monotonically_slows(
            velocity in -1000.0f32..1000.0,
            dts in proptest::collection::vec(1.0f32..100.0, 1..30),
        ) {
            let mut actor = Actor { x: 960.0, velocity };
            for dt in dts {
                let before = actor.velocity.abs();
                actor.update(dt, false, false, true);
                prop_assert!(actor.velocity.abs() <= before);
            }
        }
    }
}
