//! Scrollable console output.

use nes_terminal::LogSink;
use nes_types::color::Color;

/// Append-only log of colored lines with independent vertical and
/// horizontal scroll offsets.
///
/// `scroll_y` is the index of the first visible line. Once the buffer holds
/// more than a screenful, an append made while the view shows the newest
/// lines advances the offset so they stay visible; otherwise a manual
/// scroll position is left alone.
#[derive(Debug, Clone)]
pub struct Scrollback {
    lines: Vec<(String, Color)>,
    scroll_y: f32,
    scroll_x: f32,
    max_visible: usize,
    generation: u64,
}

impl Scrollback {
    pub fn new(max_visible: usize) -> Self {
        Self {
            lines: Vec::new(),
            scroll_y: 0.0,
            scroll_x: 0.0,
            max_visible: max_visible.max(1),
            generation: 0,
        }
    }

    /// Append `text`, one entry per `\n`-separated line.
    pub fn append(&mut self, text: &str, color: Color) {
        let new_lines: Vec<&str> = text.split('\n').collect();
        if self.is_pinned() {
            self.scroll_y += new_lines.len() as f32;
        }
        for line in new_lines {
            log::trace!(target: "console", "{line}");
            self.lines.push((line.to_string(), color));
        }
    }

    /// Remove every line and reset both offsets.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.scroll_y = 0.0;
        self.scroll_x = 0.0;
        self.generation += 1;
    }

    /// Move the view by `delta` lines; positive moves toward older lines.
    /// Clamped to `[0, len - 1]`.
    pub fn scroll_vertical(&mut self, delta: f32) {
        self.scroll_y = (self.scroll_y - delta).clamp(0.0, self.last_index());
    }

    /// Move the view sideways by `delta` columns. Never below zero.
    pub fn scroll_horizontal(&mut self, delta: f32) {
        self.scroll_x = (self.scroll_x - delta).max(0.0);
    }

    /// Jump to the newest screenful and the first column.
    pub fn reset_scroll(&mut self) {
        self.scroll_x = 0.0;
        let newest = self.lines.len() as f32 - self.max_visible as f32;
        self.scroll_y = newest.clamp(0.0, self.last_index());
    }

    /// The lines currently in view, oldest first.
    pub fn visible(&self) -> &[(String, Color)] {
        let start = (self.scroll_y as usize).min(self.lines.len());
        let end = (start + self.max_visible).min(self.lines.len());
        &self.lines[start..end]
    }

    pub fn lines(&self) -> &[(String, Color)] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn scroll_y(&self) -> f32 {
        self.scroll_y
    }

    pub fn scroll_x(&self) -> f32 {
        self.scroll_x
    }

    pub fn max_visible(&self) -> usize {
        self.max_visible
    }

    /// Number of times the buffer has been cleared. Lets a mirror of the
    /// log tell a clear apart from a buffer that merely stayed the same
    /// length.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn is_pinned(&self) -> bool {
        self.scroll_y == self.lines.len() as f32 - self.max_visible as f32
    }

    fn last_index(&self) -> f32 {
        self.lines.len().saturating_sub(1) as f32
    }
}

impl LogSink for Scrollback {
    fn log(&mut self, text: &str, color: Color) {
        self.append(text, color);
    }

    fn clear(&mut self) {
        Scrollback::clear(self);
    }
}
