//! Shared test utilities for the terminal crate.
//!
//! [`Harness`] owns everything an [`Environment`] borrows so tests can run
//! commands without a console around them.

use std::path::PathBuf;

use nes_types::color::Color;

use crate::interpreter::{DebugFlags, Environment, HostSignal, Tooltip};
use crate::registry::CommandRegistry;

/// Owned backing state for a test environment.
#[derive(Default)]
pub struct Harness {
    pub out: Vec<(String, Color)>,
    pub debug: DebugFlags,
    pub tooltip: Option<Tooltip>,
    pub signals: Vec<HostSignal>,
    pub exec_dir: PathBuf,
}

impl Harness {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_exec_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            exec_dir: dir.into(),
            ..Self::default()
        }
    }

    /// Borrow the harness as an environment dispatched from `registry`.
    pub fn env<'a>(&'a mut self, registry: &'a CommandRegistry) -> Environment<'a> {
        Environment {
            registry,
            out: &mut self.out,
            debug: &mut self.debug,
            tooltip: &mut self.tooltip,
            signals: &mut self.signals,
            exec_dir: &self.exec_dir,
            exec_depth: 0,
        }
    }

    /// Logged text without colors.
    pub fn lines(&self) -> Vec<&str> {
        self.out.iter().map(|(text, _)| text.as_str()).collect()
    }
}
