//! Rendering seam
//!
//! The simulation never draws. Each frame it hands a [`RenderFrame`] to a
//! [`RenderSink`]; GPU backends can upload [`SpriteInstance`]s directly.

pub mod frame;
pub mod instance;

pub use frame::{ActorPose, LogSink, ObjectPose, RenderFrame, RenderSink};
pub use instance::{InstanceSink, SpriteInstance};
