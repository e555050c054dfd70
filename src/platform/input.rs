//! Input aggregation
//!
//! Event callbacks write into [`InputState`] whenever they fire (last write
//! wins); the game polls a [`TickInput`] snapshot once per frame.

use crate::sim::TickInput;

/// Keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    A,
    D,
    Left,
    Right,
    /// Pause toggle
    Escape,
}

impl Key {
    /// Map a DOM-style `KeyboardEvent.key` name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "a" | "A" => Some(Key::A),
            "d" | "D" => Some(Key::D),
            "ArrowLeft" => Some(Key::Left),
            "ArrowRight" => Some(Key::Right),
            "Escape" | "p" | "P" => Some(Key::Escape),
            _ => None,
        }
    }
}

/// Screen half a touch landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchZone {
    Left,
    Right,
}

impl TouchZone {
    pub fn from_position(x: f32, viewport_width: f32) -> Self {
        if x < viewport_width / 2.0 {
            TouchZone::Left
        } else {
            TouchZone::Right
        }
    }
}

/// Held keys and active touch zones
#[derive(Debug, Clone, Default)]
pub struct InputState {
    a: bool,
    d: bool,
    left: bool,
    right: bool,
    touch_left: bool,
    touch_right: bool,
    pause_pressed: bool,
    pub idle_mode: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) {
        self.set_key(key, true);
    }

    pub fn key_up(&mut self, key: Key) {
        self.set_key(key, false);
    }

    fn set_key(&mut self, key: Key, down: bool) {
        match key {
            Key::A => self.a = down,
            Key::D => self.d = down,
            Key::Left => self.left = down,
            Key::Right => self.right = down,
            // Edge-triggered; consumed by the next snapshot
            Key::Escape => {
                if down {
                    self.pause_pressed = true;
                }
            }
        }
    }

    /// A touch began at screen x. Zones are sets: a second finger on the same
    /// half doesn't stack.
    pub fn touch_start(&mut self, x: f32, viewport_width: f32) {
        match TouchZone::from_position(x, viewport_width) {
            TouchZone::Left => self.touch_left = true,
            TouchZone::Right => self.touch_right = true,
        }
    }

    /// A touch ended at screen x; releases that whole half
    pub fn touch_end(&mut self, x: f32, viewport_width: f32) {
        match TouchZone::from_position(x, viewport_width) {
            TouchZone::Left => self.touch_left = false,
            TouchZone::Right => self.touch_right = false,
        }
    }

    /// Drop everything held (e.g. on focus loss)
    pub fn release_all(&mut self) {
        let idle_mode = self.idle_mode;
        *self = Self {
            idle_mode,
            ..Self::default()
        };
    }

    pub fn move_neg(&self) -> bool {
        self.a || self.left || self.touch_left
    }

    pub fn move_pos(&self) -> bool {
        self.d || self.right || self.touch_right
    }

    /// Snapshot for this frame; clears one-shot inputs
    pub fn snapshot(&mut self) -> TickInput {
        let input = TickInput {
            move_neg: self.move_neg(),
            move_pos: self.move_pos(),
            pause: self.pause_pressed,
            idle_mode: self.idle_mode,
        };
        self.pause_pressed = false;
        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_aggregate() {
        let mut input = InputState::new();
        input.key_down(Key::A);
        input.key_down(Key::Right);
        let snap = input.snapshot();
        assert!(snap.move_neg && snap.move_pos);

        input.key_up(Key::A);
        let snap = input.snapshot();
        assert!(!snap.move_neg && snap.move_pos);
    }

    #[test]
    fn test_key_names() {
        assert_eq!(Key::from_name("A"), Some(Key::A));
        assert_eq!(Key::from_name("ArrowRight"), Some(Key::Right));
        assert_eq!(Key::from_name("q"), None);
    }

    #[test]
    fn test_touch_zones() {
        let mut input = InputState::new();
        input.touch_start(100.0, 800.0);
        assert!(input.move_neg());
        assert!(!input.move_pos());

        input.touch_start(700.0, 800.0);
        assert!(input.move_pos());

        // Two fingers on the left, one lifts: left half released
        input.touch_start(50.0, 800.0);
        input.touch_end(60.0, 800.0);
        assert!(!input.move_neg());
        assert!(input.move_pos());
    }

    #[test]
    fn test_pause_is_one_shot() {
        let mut input = InputState::new();
        input.key_down(Key::Escape);
        assert!(input.snapshot().pause);
        assert!(!input.snapshot().pause);
    }

    #[test]
    fn test_release_all_keeps_idle_mode() {
        let mut input = InputState::new();
        input.idle_mode = true;
        input.key_down(Key::D);
        input.touch_start(10.0, 100.0);
        input.release_all();
        let snap = input.snapshot();
        assert!(!snap.move_neg && !snap.move_pos);
        assert!(snap.idle_mode);
    }
}
