//! Queue-backed input source for headless hosts and tests.

use std::collections::VecDeque;

use nes_types::backend::InputSource;
use nes_types::input::{Key, Modifiers};

/// Input for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Frame {
    key: Option<Key>,
    modifiers: Modifiers,
    wheel: f32,
}

/// An [`InputSource`] that replays queued frames, one per tick.
///
/// [`InputSource::key_pressed`] advances to the next frame; the modifier and
/// wheel queries then describe that frame until the next call.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    queue: VecDeque<Frame>,
    current: Frame,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a key press with no modifiers held.
    pub fn push_key(&mut self, key: Key) {
        self.push_chord(key, Modifiers::default());
    }

    /// Queue a key press with `modifiers` held.
    pub fn push_chord(&mut self, key: Key, modifiers: Modifiers) {
        self.queue.push_back(Frame {
            key: Some(key),
            modifiers,
            wheel: 0.0,
        });
    }

    /// Queue a tick with no key and `delta` of wheel movement.
    pub fn push_wheel(&mut self, delta: f32, modifiers: Modifiers) {
        self.queue.push_back(Frame {
            key: None,
            modifiers,
            wheel: delta,
        });
    }

    /// Queue one character key per char of `text`.
    pub fn push_text(&mut self, text: &str) {
        for c in text.chars() {
            self.push_key(Key::Char(c));
        }
    }

    /// Queue `text` followed by Enter.
    pub fn push_line(&mut self, text: &str) {
        self.push_text(text);
        self.push_key(Key::Enter);
    }

    /// Frames not yet consumed.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}

impl InputSource for ScriptedInput {
    fn key_pressed(&mut self) -> Option<Key> {
        self.current = self.queue.pop_front().unwrap_or_default();
        self.current.key
    }

    fn is_key_down(&self, key: Key) -> bool {
        match key {
            Key::LeftShift => self.current.modifiers.shift,
            Key::LeftControl => self.current.modifiers.control,
            _ => false,
        }
    }

    fn mouse_wheel_delta(&self) -> f32 {
        self.current.wheel
    }
}
