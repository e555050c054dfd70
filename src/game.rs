//! Frame driver
//!
//! Owns the clock, the simulation state and the collision detector. The
//! embedding layer calls [`Game::frame`] once per display refresh with the
//! current timestamp and an input snapshot.

use crate::platform::FrameClock;
use crate::renderer::{RenderFrame, RenderSink};
use crate::settings::Settings;
use crate::sim::{CollisionDetector, GameEvent, GameState, TickInput, tick};

/// Game instance holding all state
#[derive(Debug, Clone)]
pub struct Game {
    clock: FrameClock,
    state: GameState,
    detector: CollisionDetector,
}

impl Game {
    pub fn new(settings: &Settings) -> Self {
        let seed = settings.effective_seed();
        log::info!(
            "New game: seed={:#x}, collision={:?}",
            seed,
            settings.collision_mode
        );
        Self {
            clock: FrameClock::new(),
            state: GameState::new(seed),
            detector: CollisionDetector::new(settings.collision_mode),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Events produced by the most recent frame
    pub fn events(&self) -> &[GameEvent] {
        &self.state.events
    }

    /// Advance one display frame and return what to draw
    pub fn frame(&mut self, timestamp_ms: f64, input: &TickInput) -> RenderFrame {
        let dt_ms = self.clock.tick(timestamp_ms);
        tick(&mut self.state, &mut self.detector, input, dt_ms as f32);
        RenderFrame::from_state(&self.state)
    }

    /// Advance one display frame and hand it to `sink`
    pub fn frame_into(&mut self, timestamp_ms: f64, input: &TickInput, sink: &mut impl RenderSink) {
        let frame = self.frame(timestamp_ms, input);
        sink.present(&frame);
    }
}
