//! Keyboard input to per-frame intents
//!
//! Movement, run and interact are level-triggered (held). Jump fires once per
//! physical press. Fire additionally needs the key released before it can fire
//! again.

use crate::sim::TickInput;

/// Logical keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Run,
    Jump,
    Fire,
    Interact,
}

impl Key {
    /// Map a DOM-style `KeyboardEvent.code` string
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ArrowLeft" | "KeyA" => Some(Key::Left),
            "ArrowRight" | "KeyD" => Some(Key::Right),
            "ShiftLeft" | "ShiftRight" => Some(Key::Run),
            "ArrowUp" | "KeyW" => Some(Key::Jump),
            "Space" => Some(Key::Fire),
            "KeyE" => Some(Key::Interact),
            _ => None,
        }
    }
}

/// Accumulated key state between frames
#[derive(Debug, Clone)]
pub struct InputState {
    left: bool,
    right: bool,
    run: bool,
    interact: bool,
    /// Pending edge-triggered intents
    jump_pressed: bool,
    fire_pressed: bool,
    /// Released on fire key-up
    can_fire: bool,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            left: false,
            right: false,
            run: false,
            interact: false,
            jump_pressed: false,
            fire_pressed: false,
            can_fire: true,
        }
    }
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key pressed. Auto-repeat events (`repeat == true`) are ignored.
    pub fn key_down(&mut self, key: Key, repeat: bool) {
        if repeat {
            return;
        }
        match key {
            Key::Left => self.left = true,
            Key::Right => self.right = true,
            Key::Run => self.run = true,
            Key::Interact => self.interact = true,
            Key::Jump => self.jump_pressed = true,
            Key::Fire => {
                if self.can_fire {
                    self.fire_pressed = true;
                    self.can_fire = false;
                }
            }
        }
    }

    pub fn key_up(&mut self, key: Key) {
        match key {
            Key::Left => self.left = false,
            Key::Right => self.right = false,
            Key::Run => self.run = false,
            Key::Interact => self.interact = false,
            Key::Jump => {}
            Key::Fire => self.can_fire = true,
        }
    }

    /// Convenience for hosts that receive raw code strings
    pub fn code_down(&mut self, code: &str, repeat: bool) {
        if let Some(key) = Key::from_code(code) {
            self.key_down(key, repeat);
        }
    }

    pub fn code_up(&mut self, code: &str) {
        if let Some(key) = Key::from_code(code) {
            self.key_up(key);
        }
    }

    /// Intents for the next frame; consumes pending presses
    pub fn take_tick_input(&mut self) -> TickInput {
        let input = TickInput {
            move_left: self.left,
            move_right: self.right,
            run: self.run,
            jump: self.jump_pressed,
            fire: self.fire_pressed,
            interact: self.interact,
        };
        self.jump_pressed = false;
        self.fire_pressed = false;
        input
    }

    /// Drop everything (focus loss, level swap)
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(Key::from_code("KeyD"), Some(Key::Right));
        assert_eq!(Key::from_code("ArrowLeft"), Some(Key::Left));
        assert_eq!(Key::from_code("ShiftLeft"), Some(Key::Run));
        assert_eq!(Key::from_code("KeyW"), Some(Key::Jump));
        assert_eq!(Key::from_code("Space"), Some(Key::Fire));
        assert_eq!(Key::from_code("KeyE"), Some(Key::Interact));
        assert_eq!(Key::from_code("KeyQ"), None);
    }

    #[test]
    fn test_held_keys_persist() {
        let mut input = InputState::new();
        input.key_down(Key::Right, false);
        input.key_down(Key::Run, false);
        assert!(input.take_tick_input().move_right);
        let second = input.take_tick_input();
        assert!(second.move_right && second.run);
        input.key_up(Key::Right);
        assert!(!input.take_tick_input().move_right);
    }

    #[test]
    fn test_jump_is_edge_triggered() {
        let mut input = InputState::new();
        input.key_down(Key::Jump, false);
        input.key_down(Key::Jump, true);
        assert!(input.take_tick_input().jump);
        assert!(!input.take_tick_input().jump);
    }

    #[test]
    fn test_fire_latch() {
        let mut input = InputState::new();
        input.code_down("Space", false);
        assert!(input.take_tick_input().fire);

        // Holding or re-pressing without release does nothing
        input.code_down("Space", false);
        assert!(!input.take_tick_input().fire);

        input.code_up("Space");
        input.code_down("Space", false);
        assert!(input.take_tick_input().fire);
    }
}
