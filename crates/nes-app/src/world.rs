//! A stand-in game world with a few knobs the console can turn.

use std::cell::RefCell;
use std::rc::Rc;

use nes_console::Console;
use nes_terminal::descriptor::{float_arg, int_arg, str_arg};
use nes_terminal::{CommandDescriptor, ParamType, ParameterSpec, Value};
use nes_types::error::{ConsoleError, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct World {
    pub gravity: f32,
    pub enemies: u32,
    pub difficulty: String,
    pub elapsed: f32,
}

impl Default for World {
    fn default() -> Self {
        Self {
            gravity: 9.81,
            enemies: 0,
            difficulty: "normal".to_string(),
            elapsed: 0.0,
        }
    }
}

impl World {
    /// Advance the simulation clock.
    pub fn step(&mut self, dt: f32) {
        self.elapsed += dt;
    }
}

/// Register the commands that reach into the game world.
pub fn register_world_commands(console: &mut Console, world: &Rc<RefCell<World>>) -> Result<()> {
    let w = Rc::clone(world);
    console.register(
        CommandDescriptor::new("spawn_enemies", move |args, env| {
            let count = int_arg(args, 0)?;
            let count = u32::try_from(count)
                .map_err(|_| ConsoleError::Command("count must not be negative".to_string()))?;
            let mut world = w.borrow_mut();
            world.enemies = world
                .enemies
                .checked_add(count)
                .ok_or_else(|| ConsoleError::Command("too many enemies".to_string()))?;
            env.out
                .print(&format!("Spawned {count} enemies ({} total)", world.enemies));
            Ok(None)
        })
        .summary("Spawns enemies at random positions.")
        .param(ParameterSpec::int("count")),
    )?;

    let w = Rc::clone(world);
    console.register(
        CommandDescriptor::new("enemies", move |_, _| {
            let count = i32::try_from(w.borrow().enemies).map_err(|_| {
                ConsoleError::Command("enemy count does not fit in an Int".to_string())
            })?;
            Ok(Some(Value::Int(count)))
        })
        .summary("Returns the number of living enemies.")
        .returns(ParamType::Int),
    )?;

    let w = Rc::clone(world);
    console.register(
        CommandDescriptor::new("set_gravity", move |args, _| {
            w.borrow_mut().gravity = float_arg(args, 0)?;
            Ok(None)
        })
        .summary("Sets the downward acceleration in units per second squared.")
        .param(ParameterSpec::float("value")),
    )?;

    let w = Rc::clone(world);
    console.register(
        CommandDescriptor::new("gravity", move |_, _| {
            Ok(Some(Value::Float(w.borrow().gravity)))
        })
        .summary("Returns the current gravity.")
        .returns(ParamType::Float),
    )?;

    let w = Rc::clone(world);
    console.register(
        CommandDescriptor::new("difficulty", move |args, env| {
            let level = str_arg(args, 0)?.to_lowercase();
            env.out.print(&format!("Difficulty set to {level}"));
            w.borrow_mut().difficulty = level;
            Ok(None)
        })
        .summary("Sets the game difficulty.")
        .param(ParameterSpec::string("level").one_of(&["easy", "normal", "hard"], true)),
    )?;

    Ok(())
}
