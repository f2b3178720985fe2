//! The environment commands run in.
//!
//! Commands never reach global state. Everything they may touch (the
//! output log, debug toggles, the tooltip, requests to the host) is lent to
//! them through an [`Environment`] for the duration of one call.

use std::path::Path;

use nes_types::color::Color;

use crate::registry::CommandRegistry;

/// Destination for console output: colored lines of text.
pub trait LogSink {
    /// Append `text` in `color`. Multi-line text becomes several lines.
    fn log(&mut self, text: &str, color: Color);

    /// Remove every line.
    fn clear(&mut self);

    /// Append `text` in the default color.
    fn print(&mut self, text: &str) {
        self.log(text, Color::WHITE);
    }
}

impl LogSink for Vec<(String, Color)> {
    fn log(&mut self, text: &str, color: Color) {
        for line in text.split('\n') {
            self.push((line.to_string(), color));
        }
    }

    fn clear(&mut self) {
        Vec::clear(self);
    }
}

/// Requests a command makes of the host, drained after execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostSignal {
    /// Stop the game and exit.
    Quit,
    /// Drop cached sprites and sounds so they reload from disk.
    ReloadResources,
}

/// Debug overlays the host may draw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DebugFlags {
    pub draw_colliders: bool,
    pub draw_fps: bool,
}

/// Text shown at the bottom of the screen for a limited time.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub text: String,
    /// Seconds left before the tooltip disappears.
    pub remaining: f32,
}

impl Tooltip {
    pub fn new(text: &str, seconds: f32) -> Self {
        Self {
            text: text.to_string(),
            remaining: seconds,
        }
    }

    /// Count down by `dt` seconds. Returns `false` once expired.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.remaining -= dt;
        self.remaining > 0.0
    }
}

/// Shared mutable environment passed to every command.
pub struct Environment<'a> {
    /// The registry the command was dispatched from.
    pub registry: &'a CommandRegistry,
    /// Console output.
    pub out: &'a mut dyn LogSink,
    pub debug: &'a mut DebugFlags,
    pub tooltip: &'a mut Option<Tooltip>,
    pub signals: &'a mut Vec<HostSignal>,
    /// Directory searched by `exec`.
    pub exec_dir: &'a Path,
    /// Number of `exec` batches currently running.
    pub exec_depth: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_sink_splits_lines() {
        let mut sink: Vec<(String, Color)> = Vec::new();
        sink.log("a\nb", Color::RED);
        sink.print("c");
        assert_eq!(
            sink,
            vec![
                ("a".to_string(), Color::RED),
                ("b".to_string(), Color::RED),
                ("c".to_string(), Color::WHITE),
            ]
        );
        LogSink::clear(&mut sink);
        assert!(sink.is_empty());
    }

    #[test]
    fn tooltip_expires() {
        let mut t = Tooltip::new("hello", 1.0);
        assert!(t.tick(0.4));
        assert!(t.tick(0.4));
        assert!(!t.tick(0.4));
    }

    #[test]
    fn debug_flags_default_off() {
        let d = DebugFlags::default();
        assert!(!d.draw_colliders);
        assert!(!d.draw_fps);
    }
}
