//! The console context object.
//!
//! A [`Console`] owns everything the in-game console needs between frames:
//! the command registry, the scrollback, the line editor, and the state
//! commands change (debug flags, tooltip, pending host signals). The host
//! calls [`Console::tick`] once per frame.

use nes_terminal::{
    CommandDescriptor, CommandRegistry, DebugFlags, Environment, HostSignal, LogSink, Tooltip,
    Value, register_builtins,
};
use nes_types::backend::{Clipboard, InputSource};
use nes_types::color::Color;
use nes_types::config::ConsoleConfig;
use nes_types::error::Result;
use nes_types::input::Key;

use crate::line_editor::{EditOutcome, LineEditor};
use crate::scrollback::Scrollback;

pub struct Console {
    config: ConsoleConfig,
    open_key: Option<Key>,
    registry: CommandRegistry,
    scrollback: Scrollback,
    editor: LineEditor,
    open: bool,
    debug: DebugFlags,
    tooltip: Option<Tooltip>,
    signals: Vec<HostSignal>,
}

impl Console {
    /// Create a closed console with the built-in commands registered.
    pub fn new(config: ConsoleConfig) -> Result<Self> {
        let mut registry = CommandRegistry::new();
        register_builtins(&mut registry)?;
        log::info!("Console ready with {} command signatures", registry.len());
        Ok(Self {
            open_key: config.open_key(),
            scrollback: Scrollback::new(config.max_lines_on_screen),
            editor: LineEditor::new(config.blink_period),
            config,
            registry,
            open: false,
            debug: DebugFlags::default(),
            tooltip: None,
            signals: Vec::new(),
        })
    }

    /// Add a host command after the built-ins.
    pub fn register(&mut self, descriptor: CommandDescriptor) -> Result<()> {
        self.registry.register(descriptor)
    }

    /// Run one frame of console logic.
    ///
    /// The tooltip counts down whether or not the console is open. The open
    /// key toggles the console and is never passed to the editor. While
    /// open, the wheel scrolls the scrollback and the pressed key (if any)
    /// goes to the line editor.
    pub fn tick(&mut self, input: &mut dyn InputSource, clipboard: &mut dyn Clipboard, dt: f32) {
        if let Some(tooltip) = &mut self.tooltip
            && !tooltip.tick(dt)
        {
            self.tooltip = None;
        }

        let key = input.key_pressed();
        if !self.config.enabled {
            return;
        }
        if key.is_some() && key == self.open_key {
            self.set_open(!self.open);
            return;
        }
        if !self.open {
            return;
        }

        let modifiers = input.modifiers();
        let mut wheel = input.mouse_wheel_delta() * self.config.wheel_step;
        if modifiers.control {
            wheel *= self.config.wheel_fast_multiplier;
        }
        if modifiers.shift {
            self.scrollback.scroll_horizontal(wheel);
        } else {
            self.scrollback.scroll_vertical(wheel);
        }

        self.editor.tick(dt);

        let Some(key) = key else {
            return;
        };
        match self.editor.handle_key(key, modifiers, clipboard) {
            EditOutcome::None => {},
            EditOutcome::Close => self.set_open(false),
            EditOutcome::Submit(line) => self.submit(&line),
        }
    }

    /// Echo a submitted line, run it, and log the outcome.
    fn submit(&mut self, line: &str) {
        self.scrollback.append(&format!("> {line}"), Color::GRAY);
        self.scrollback.reset_scroll();
        if line.is_empty() {
            return;
        }
        match self.execute(line) {
            Ok(Some(value)) => self.scrollback.print(&format!("> {value}")),
            Ok(None) => {},
            Err(e) => {
                log::debug!("{line:?} failed: {e}");
                self.scrollback.append(&e.to_string(), Color::RED);
            },
        }
    }

    /// Execute a command line against this console's state.
    pub fn execute(&mut self, line: &str) -> Result<Option<Value>> {
        let mut env = Environment {
            registry: &self.registry,
            out: &mut self.scrollback,
            debug: &mut self.debug,
            tooltip: &mut self.tooltip,
            signals: &mut self.signals,
            exec_dir: &self.config.exec_dir,
            exec_depth: 0,
        };
        self.registry.execute(line, &mut env)
    }

    /// Append text to the scrollback.
    pub fn log(&mut self, text: &str, color: Color) {
        self.scrollback.append(text, color);
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Open or close the console. A disabled console stays closed.
    pub fn set_open(&mut self, open: bool) {
        let open = open && self.config.enabled;
        if open != self.open {
            log::debug!("Console {}", if open { "opened" } else { "closed" });
        }
        self.open = open;
    }

    /// Whether the host should skip its game step this frame.
    pub fn blocks_host(&self) -> bool {
        self.open && self.config.stops_execution
    }

    /// Whether the host should draw the compact overlay of recent output.
    pub fn overlay_visible(&self) -> bool {
        !self.open && self.config.enabled && self.config.ui_visible
    }

    /// Drain the requests commands made of the host.
    pub fn take_signals(&mut self) -> Vec<HostSignal> {
        std::mem::take(&mut self.signals)
    }

    pub fn scrollback(&self) -> &Scrollback {
        &self.scrollback
    }

    pub fn editor(&self) -> &LineEditor {
        &self.editor
    }

    pub fn tooltip(&self) -> Option<&Tooltip> {
        self.tooltip.as_ref()
    }

    pub fn debug(&self) -> DebugFlags {
        self.debug
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }
}
