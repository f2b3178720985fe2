//! Host backend trait definitions.
//!
//! The console never talks to a windowing or input library directly. A host
//! implements these traits over whatever it uses (raylib, SDL, a test
//! script) and hands them to the console once per tick.

use crate::input::{Key, Modifiers};

/// Raw keyboard and mouse queries, sampled once per tick.
pub trait InputSource {
    /// The key pressed this tick, if any. At most one key is reported per
    /// call; hosts with a queue return the next queued key.
    fn key_pressed(&mut self) -> Option<Key>;

    /// Whether `key` is currently held down.
    fn is_key_down(&self, key: Key) -> bool;

    /// Mouse wheel movement since the previous tick (positive = away from
    /// the user).
    fn mouse_wheel_delta(&self) -> f32;

    /// Shift/control state from either side of the keyboard.
    fn modifiers(&self) -> Modifiers {
        Modifiers {
            shift: self.is_key_down(Key::LeftShift) || self.is_key_down(Key::RightShift),
            control: self.is_key_down(Key::LeftControl) || self.is_key_down(Key::RightControl),
        }
    }
}

/// System clipboard access.
pub trait Clipboard {
    fn get_text(&self) -> String;
    fn set_text(&mut self, text: &str);
}

/// Clipboard that lives only as long as the process. Useful for hosts
/// without a system clipboard and for tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    text: String,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for MemoryClipboard {
    fn get_text(&self) -> String {
        self.text.clone()
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }
}
