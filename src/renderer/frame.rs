//! Per-frame render snapshot and the sink that consumes it

use serde::Serialize;

use crate::consts::*;
use crate::sim::{GameState, RoundPhase};

/// Actor sprite placement
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ActorPose {
    pub x: f32,
    pub y: f32,
    pub scale: f32,
    pub alpha: f32,
}

/// Egg sprite placement (angle in degrees)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ObjectPose {
    pub x: f32,
    pub y: f32,
    pub angle: f32,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderFrame {
    pub actor: ActorPose,
    /// Spawn order, oldest first
    pub objects: Vec<ObjectPose>,
    pub score: u32,
    pub best_score: u32,
    pub round: u32,
    pub dying: bool,
    pub paused: bool,
}

impl RenderFrame {
    pub fn from_state(state: &GameState) -> Self {
        let visual = state.death_visual();
        Self {
            actor: ActorPose {
                x: state.actor.x,
                y: ACTOR_Y,
                scale: visual.scale,
                alpha: visual.alpha,
            },
            objects: state
                .objects
                .iter()
                .map(|o| ObjectPose {
                    x: o.pos.x,
                    y: o.pos.y,
                    angle: o.angle,
                })
                .collect(),
            score: state.score,
            best_score: state.best_score,
            round: state.round,
            dying: !matches!(state.phase, RoundPhase::Active),
            paused: state.paused,
        }
    }
}

/// Anything that can draw a frame (canvas, GPU, terminal, test recorder)
pub trait RenderSink {
    fn present(&mut self, frame: &RenderFrame);
}

/// Sink that logs a one-line summary per frame
#[derive(Debug, Default)]
pub struct LogSink {
    frames: u64,
}

impl LogSink {
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl RenderSink for LogSink {
    fn present(&mut self, frame: &RenderFrame) {
        self.frames += 1;
        log::trace!(
            "frame {}: actor x={:.1} scale={:.2} alpha={:.2}, {} eggs, score {}",
            self.frames,
            frame.actor.x,
            frame.actor.scale,
            frame.actor.alpha,
            frame.objects.len(),
            frame.score
        );
    }
}
