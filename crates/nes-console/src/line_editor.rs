//! Single-line input editor with history browsing.
//!
//! The editor consumes one key per tick. The cursor is a char index into the
//! buffer, so multi-byte characters move and delete as one unit.

use nes_types::backend::Clipboard;
use nes_types::input::{Key, Modifiers};

use crate::keymap;

/// What the console should do after a key was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// Nothing beyond the edit itself.
    None,
    /// Escape was pressed.
    Close,
    /// Enter was pressed. Carries the submitted line, which may be empty.
    Submit(String),
}

/// Text input with cursor, submit history, and a blinking cursor timer.
#[derive(Debug, Clone)]
pub struct LineEditor {
    buffer: String,
    cursor: usize,
    /// Submitted lines, most recent first.
    history: Vec<String>,
    browsing: bool,
    history_pos: usize,
    blink_timer: f32,
    blink_period: f32,
}

impl Default for LineEditor {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl LineEditor {
    pub fn new(blink_period: f32) -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
            history: Vec::new(),
            browsing: false,
            history_pos: 0,
            blink_timer: 0.0,
            blink_period: if blink_period > 0.0 { blink_period } else { 1.0 },
        }
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Cursor position in chars.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Submitted lines, most recent first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn is_browsing(&self) -> bool {
        self.browsing
    }

    /// 0 means "not on an entry"; `n` selects `history()[n - 1]`.
    pub fn history_position(&self) -> usize {
        self.history_pos
    }

    /// Whether the cursor is in the visible half of its blink cycle.
    pub fn cursor_visible(&self) -> bool {
        self.blink_timer < self.blink_period / 2.0
    }

    /// Advance the blink timer by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        self.blink_timer = (self.blink_timer + dt) % self.blink_period;
    }

    /// Apply one key press.
    pub fn handle_key(
        &mut self,
        key: Key,
        modifiers: Modifiers,
        clipboard: &mut dyn Clipboard,
    ) -> EditOutcome {
        match key {
            k if k.is_modifier() => {},
            Key::Escape => return EditOutcome::Close,
            Key::Backspace => {
                if self.cursor > 0 {
                    let start = if modifiers.control {
                        self.word_start()
                    } else {
                        self.cursor - 1
                    };
                    self.remove_chars(start, self.cursor);
                    self.cursor = start;
                    self.stop_browsing();
                }
                self.restart_blink();
            },
            Key::Char(c) if modifiers.control => match c.to_ascii_lowercase() {
                'c' => clipboard.set_text(&self.buffer),
                'v' => self.paste(&clipboard.get_text()),
                _ => {},
            },
            Key::Left => {
                self.cursor = if modifiers.control {
                    self.word_start()
                } else {
                    self.cursor.saturating_sub(1)
                };
                self.restart_blink();
            },
            Key::Right => {
                self.cursor = if modifiers.control {
                    self.next_word_end()
                } else {
                    (self.cursor + 1).min(self.char_len())
                };
                self.restart_blink();
            },
            Key::Up => {
                if self.browsing || self.buffer.is_empty() {
                    self.browse(1);
                }
            },
            Key::Down => {
                if self.browsing || self.buffer.is_empty() {
                    self.browse(-1);
                }
            },
            Key::Enter => return EditOutcome::Submit(self.submit()),
            Key::Char(c) => {
                let c = if modifiers.shift {
                    keymap::shifted(c).unwrap_or(c)
                } else {
                    c
                };
                self.insert_str(&c.to_string());
                self.stop_browsing();
                self.restart_blink();
            },
            _ => {},
        }
        EditOutcome::None
    }

    fn submit(&mut self) -> String {
        let line = std::mem::take(&mut self.buffer);
        if !line.is_empty() {
            self.history.insert(0, line.clone());
        }
        self.cursor = 0;
        self.stop_browsing();
        line
    }

    fn browse(&mut self, step: isize) {
        self.browsing = true;
        self.history_pos = self
            .history_pos
            .saturating_add_signed(step)
            .min(self.history.len());
        self.buffer = match self.history_pos {
            0 => String::new(),
            n => self.history[n - 1].clone(),
        };
        self.cursor = self.char_len();
    }

    fn paste(&mut self, text: &str) {
        let clean: String = text.chars().filter(|c| !c.is_control()).collect();
        self.insert_str(&clean);
    }

    fn insert_str(&mut self, text: &str) {
        let at = self.byte_index(self.cursor);
        self.buffer.insert_str(at, text);
        self.cursor += text.chars().count();
    }

    fn remove_chars(&mut self, start: usize, end: usize) {
        let from = self.byte_index(start);
        let to = self.byte_index(end);
        self.buffer.drain(from..to);
    }

    /// Index of the first char of the word left of the cursor.
    fn word_start(&self) -> usize {
        let chars: Vec<char> = self.buffer.chars().collect();
        let mut index = self.cursor.saturating_sub(1);
        while index > 0 && chars[index - 1] != ' ' {
            index -= 1;
        }
        index
    }

    /// Index of the space after the word right of the cursor, or the end.
    fn next_word_end(&self) -> usize {
        let chars: Vec<char> = self.buffer.chars().collect();
        let mut index = self.cursor + 1;
        while index < chars.len() && chars[index] != ' ' {
            index += 1;
        }
        index.min(chars.len())
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(char_index)
            .map_or(self.buffer.len(), |(i, _)| i)
    }

    fn char_len(&self) -> usize {
        self.buffer.chars().count()
    }

    fn stop_browsing(&mut self) {
        self.browsing = false;
        self.history_pos = 0;
    }

    fn restart_blink(&mut self) {
        self.blink_timer = 0.0;
    }
}
