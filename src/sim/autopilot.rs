//! Idle/demo mode: steer the ball away from incoming eggs

use super::state::GameState;
use crate::consts::*;

/// How far above the actor an egg is still considered a threat
const LOOKAHEAD: f32 = 450.0;
/// Extra horizontal clearance on top of the combined radii
const CLEARANCE: f32 = 30.0;

/// Direction intent (move_neg, move_pos) that dodges the nearest threat
pub fn steer(state: &GameState) -> (bool, bool) {
    let actor = state.actor.pos();
    let danger = ACTOR_RADIUS + OBJECT_RADIUS + CLEARANCE;

    let threat = state
        .objects
        .iter()
        .filter(|o| {
            let above = actor.y - o.pos.y;
            (-OBJECT_RADIUS..LOOKAHEAD).contains(&above) && (o.pos.x - actor.x).abs() < danger
        })
        .min_by(|a, b| {
            let da = actor.y - a.pos.y;
            let db = actor.y - b.pos.y;
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        });

    let Some(threat) = threat else {
        return (false, false);
    };

    // Dodge away from the egg, unless that runs into a wall
    let room_left = actor.x - ACTOR_HALF_WIDTH;
    let room_right = PLAYFIELD_WIDTH - ACTOR_HALF_WIDTH - actor.x;
    let go_left = if threat.pos.x > actor.x {
        room_left > danger
    } else {
        room_right <= danger
    };
    (go_left, !go_left)
}
