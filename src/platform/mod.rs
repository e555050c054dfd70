//! Platform abstraction layer
//!
//! Turns raw platform signals into what the simulation consumes:
//! - Timestamps into per-frame deltas
//! - Keyboard/touch events into a polled direction intent

pub mod input;
pub mod time;

pub use input::{InputState, Key, TouchZone};
pub use time::FrameClock;
