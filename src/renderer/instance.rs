//! GPU-ready sprite instances
//!
//! One instance per sprite, laid out for a per-instance vertex buffer.

use bytemuck::{Pod, Zeroable};

use super::frame::{RenderFrame, RenderSink};
use crate::consts::*;

/// Textured quad placement
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct SpriteInstance {
    /// Center in playfield units
    pub position: [f32; 2],
    /// Unscaled quad size
    pub size: [f32; 2],
    /// Radians, clockwise on screen
    pub rotation: f32,
    pub scale: f32,
    pub alpha: f32,
    /// Index into the sprite atlas
    pub sprite: u32,
}

/// Atlas indices
pub mod sprites {
    pub const ACTOR: u32 = 0;
    pub const EGG: u32 = 1;
}

impl SpriteInstance {
    /// Actor first, then eggs in spawn order
    pub fn from_frame(frame: &RenderFrame) -> Vec<Self> {
        let mut instances = Vec::with_capacity(frame.objects.len() + 1);
        Self::write_frame(frame, &mut instances);
        instances
    }

    /// Replace the contents of `instances` with `frame`, reusing its allocation
    pub fn write_frame(frame: &RenderFrame, instances: &mut Vec<Self>) {
        instances.clear();
        instances.push(Self {
            position: [frame.actor.x, frame.actor.y],
            size: [ACTOR_WIDTH, ACTOR_HEIGHT],
            rotation: 0.0,
            scale: frame.actor.scale,
            alpha: frame.actor.alpha,
            sprite: sprites::ACTOR,
        });
        instances.extend(frame.objects.iter().map(|o| Self {
            position: [o.x, o.y],
            size: [OBJECT_WIDTH, OBJECT_HEIGHT],
            rotation: o.angle.to_radians(),
            scale: 1.0,
            alpha: 1.0,
            sprite: sprites::EGG,
        }));
    }

    /// Raw bytes for a buffer upload
    pub fn as_bytes(instances: &[Self]) -> &[u8] {
        bytemuck::cast_slice(instances)
    }
}

/// Sink that keeps the latest frame as an upload-ready instance buffer
#[derive(Debug, Default)]
pub struct InstanceSink {
    instances: Vec<SpriteInstance>,
    peak: usize,
}

impl InstanceSink {
    pub fn instances(&self) -> &[SpriteInstance] {
        &self.instances
    }

    pub fn bytes(&self) -> &[u8] {
        SpriteInstance::as_bytes(&self.instances)
    }

    /// Largest instance count seen so far
    pub fn peak(&self) -> usize {
        self.peak
    }
}

impl RenderSink for InstanceSink {
    fn present(&mut self, frame: &RenderFrame) {
        SpriteInstance::write_frame(frame, &mut self.instances);
        self.peak = self.peak.max(self.instances.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{FallingObject, GameState};
    use glam::Vec2;

    #[test]
    fn test_instances_layout() {
        assert_eq!(std::mem::size_of::<SpriteInstance>(), 32);
    }

    #[test]
    fn test_instances_from_frame() {
        let mut state = GameState::new(1);
        state.objects.push(FallingObject {
            id: 1,
            pos: Vec2::new(300.0, 20.0),
            angle: 180.0,
        });
        let frame = RenderFrame::from_state(&state);
        let instances = SpriteInstance::from_frame(&frame);
        assert_eq!(instances.len(), 2);
        assert_eq!(instances[0].sprite, sprites::ACTOR);
        assert_eq!(instances[1].sprite, sprites::EGG);
        assert!((instances[1].rotation - std::f32::consts::PI).abs() < 1e-5);
        assert_eq!(SpriteInstance::as_bytes(&instances).len(), 64);
    }

    #[test]
    fn test_instance_sink_tracks_latest_frame() {
        let mut state = GameState::new(1);
        let mut sink = InstanceSink::default();
        for x in [300.0, 700.0] {
            state.objects.push(FallingObject {
                id: x as u32,
                pos: Vec2::new(x, 20.0),
                angle: 0.0,
            });
        }
        sink.present(&RenderFrame::from_state(&state));
        assert_eq!(sink.instances().len(), 3);

        state.objects.clear();
        sink.present(&RenderFrame::from_state(&state));
        assert_eq!(sink.instances().len(), 1);
        assert_eq!(sink.bytes().len(), 32);
        assert_eq!(sink.peak(), 3);
    }
}
