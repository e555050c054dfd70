//! Actor vs. egg collision detection
//!
//! Eggs aren't circles, so a circle test alone only approximates contact.
//! Detection runs coarse-to-fine:
//!
//! 1. Broad phase: center distance against the combined radii. The pixel
//!    path widens this to the silhouette's full reach.
//! 2. Narrow phase: the candidate's silhouette is stamped into a small buffer
//!    centered on the actor, then every sample inside the actor's disc is
//!    scanned for opacity.
//!
//! The buffer has a fixed size, so the narrow phase costs the same no matter
//! where on the playfield the actor is.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::mask::SilhouetteMask;
use super::state::FallingObject;
use crate::consts::*;

/// Narrow-phase strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CollisionMode {
    /// Pixel-accurate silhouette test
    #[default]
    PixelMask,
    /// Circle-circle overlap with fixed radii (cheaper, less precise)
    Circle,
}

/// Cheap reject: is the egg close enough to possibly touch the actor?
#[inline]
pub fn broad_phase(actor: Vec2, object: Vec2) -> bool {
    within_reach(actor, object, ACTOR_RADIUS + OBJECT_RADIUS)
}

#[inline]
fn within_reach(actor: Vec2, object: Vec2, reach: f32) -> bool {
    actor.distance_squared(object) < reach * reach
}

/// Square alpha buffer centered on the actor
#[derive(Debug, Clone)]
pub struct CollisionBuffer {
    size: usize,
    alpha: Vec<u8>,
}

impl CollisionBuffer {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            alpha: vec![0; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn clear(&mut self) {
        self.alpha.fill(0);
    }

    /// Offset of sample (px, py) from the buffer center
    #[inline]
    fn sample_offset(&self, px: usize, py: usize) -> Vec2 {
        let half = self.size as f32 / 2.0;
        Vec2::new(px as f32 + 0.5 - half, py as f32 + 0.5 - half)
    }

    /// Draw `mask` rotated by `angle_deg` with its center at `offset` from
    /// the buffer center. Only samples inside the buffer are touched.
    pub fn stamp(&mut self, mask: &SilhouetteMask, offset: Vec2, angle_deg: f32) {
        let half = self.size as f32 / 2.0;
        let reach = mask.bounding_radius();
        let lo_x = (offset.x - reach + half).floor().max(0.0) as usize;
        let lo_y = (offset.y - reach + half).floor().max(0.0) as usize;
        let hi_x = ((offset.x + reach + half).ceil().max(0.0) as usize).min(self.size);
        let hi_y = ((offset.y + reach + half).ceil().max(0.0) as usize).min(self.size);

        for py in lo_y..hi_y {
            for px in lo_x..hi_x {
                let local = self.sample_offset(px, py) - offset;
                let a = mask.sample_rotated(local, angle_deg);
                let cell = &mut self.alpha[py * self.size + px];
                *cell = (*cell).max(a);
            }
        }
    }

    /// Is any sample within `radius` of the buffer center opaque?
    pub fn any_opaque_within(&self, radius: f32) -> bool {
        let r_sq = radius * radius;
        (0..self.size).any(|py| {
            (0..self.size).any(|px| {
                self.sample_offset(px, py).length_squared() <= r_sq
                    && self.alpha[py * self.size + px] > 0
            })
        })
    }
}

/// Owns the precomputed egg silhouette and the scratch buffer
#[derive(Debug, Clone)]
pub struct CollisionDetector {
    mode: CollisionMode,
    object_mask: SilhouetteMask,
    buffer: CollisionBuffer,
}

impl CollisionDetector {
    pub fn new(mode: CollisionMode) -> Self {
        Self::with_mask(mode, SilhouetteMask::egg(OBJECT_WIDTH, OBJECT_HEIGHT))
    }

    /// Detector using a custom object silhouette
    pub fn with_mask(mode: CollisionMode, object_mask: SilhouetteMask) -> Self {
        Self {
            mode,
            object_mask,
            buffer: CollisionBuffer::new(COLLISION_BUFFER_SIZE),
        }
    }

    /// Full test for one object against the actor at `actor_pos`
    pub fn hits(&mut self, actor_pos: Vec2, object: &FallingObject) -> bool {
        match self.mode {
            CollisionMode::Circle => broad_phase(actor_pos, object.pos),
            CollisionMode::PixelMask => {
                // The egg's tips reach past its nominal radius
                let reach = ACTOR_RADIUS + self.object_mask.bounding_radius();
                if !within_reach(actor_pos, object.pos, reach) {
                    return false;
                }
                self.buffer.clear();
                self.buffer
                    .stamp(&self.object_mask, object.pos - actor_pos, object.angle);
                self.buffer.any_opaque_within(ACTOR_RADIUS)
            }
        }
    }

    /// Index of the first object (in spawn order) touching the actor
    pub fn first_hit(&mut self, actor_pos: Vec2, objects: &[FallingObject]) -> Option<usize> {
        objects.iter().position(|o| self.hits(actor_pos, o))
    }
}

impl Default for CollisionDetector {
    fn default() -> Self {
        Self::new(CollisionMode::default())
    }
}
