//! Headless NES console host.
//!
//! Reads command lines from stdin, types each one into the console one key
//! per frame, and prints new scrollback lines to stdout. Between lines the
//! console is closed for one frame so the game world advances. `quit` ends
//! the session. The console config path comes from the first argument or the
//! `NES_CONSOLE_CONFIG` environment variable.

mod world;

use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{Context, Result};

use nes_console::{Console, ScriptedInput};
use nes_terminal::HostSignal;
use nes_types::backend::MemoryClipboard;
use nes_types::color::Color;
use nes_types::config::ConsoleConfig;

use world::{World, register_world_commands};

const FRAME_TIME: f32 = 1.0 / 60.0;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("NES_CONSOLE_CONFIG").ok())
        .map(PathBuf::from);
    let config = match &config_path {
        Some(path) => ConsoleConfig::load(path)
            .with_context(|| format!("loading console config {}", path.display()))?,
        None => ConsoleConfig::default(),
    };

    let world = Rc::new(RefCell::new(World::default()));
    let mut console = Console::new(config)?;
    register_world_commands(&mut console, &world)?;
    console.set_open(true);
    console.log("NES console. Type \"help\" or \"commands\".", Color::YELLOW);

    let mut input = ScriptedInput::new();
    let mut clipboard = MemoryClipboard::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut mirror = StdoutMirror::default();
    mirror.flush(&console, &mut out)?;

    for line in io::stdin().lock().lines() {
        let line = line.context("reading stdin")?;
        if !console.is_open() {
            console.set_open(true);
        }
        input.push_line(&line);

        while input.pending() > 0 {
            console.tick(&mut input, &mut clipboard, FRAME_TIME);
            if !console.blocks_host() {
                world.borrow_mut().step(FRAME_TIME);
            }
        }
        mirror.flush(&console, &mut out)?;

        let mut quit = false;
        for signal in console.take_signals() {
            match signal {
                HostSignal::Quit => quit = true,
                HostSignal::ReloadResources => log::info!("Reloading resources"),
            }
        }
        if quit {
            break;
        }

        game_frame(&mut console, &mut input, &mut clipboard, &world);
    }

    log::info!(
        "Session ended after {:.2}s of game time",
        world.borrow().elapsed
    );
    Ok(())
}

/// Run one frame with the console closed so the world is not paused.
fn game_frame(
    console: &mut Console,
    input: &mut ScriptedInput,
    clipboard: &mut MemoryClipboard,
    world: &RefCell<World>,
) {
    console.set_open(false);
    console.tick(input, clipboard, FRAME_TIME);
    if !console.blocks_host() {
        world.borrow_mut().step(FRAME_TIME);
    }
}

/// Tracks how much of the scrollback has already been written out.
#[derive(Debug, Default)]
struct StdoutMirror {
    generation: u64,
    printed: usize,
}

impl StdoutMirror {
    /// Write the scrollback lines not yet printed. Red lines are prefixed
    /// with `error: `.
    fn flush(&mut self, console: &Console, out: &mut impl Write) -> Result<()> {
        let scrollback = console.scrollback();
        if scrollback.generation() != self.generation {
            self.generation = scrollback.generation();
            self.printed = 0;
        }
        let lines = scrollback.lines();
        for (text, color) in lines.iter().skip(self.printed) {
            if *color == Color::RED {
                writeln!(out, "error: {text}")?;
            } else {
                writeln!(out, "{text}")?;
            }
        }
        out.flush()?;
        self.printed = lines.len();
        Ok(())
    }
}
