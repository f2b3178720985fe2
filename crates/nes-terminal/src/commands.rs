//! Built-in commands for the NES console.

use std::fs;
use std::path::PathBuf;

use nes_types::color::Color;
use nes_types::error::{ConsoleError, Result};
use nes_types::input::Key;

use crate::descriptor::{
    CommandDescriptor, DynamicChoices, ParamType, ParameterSpec, ReturnKind, Value, bool_arg,
    float_arg, str_arg,
};
use crate::interpreter::{Environment, HostSignal, Tooltip};
use crate::registry::CommandRegistry;

/// Nested `exec` batches deeper than this are refused.
pub const MAX_EXEC_DEPTH: usize = 16;

/// Register all built-in commands into a registry.
///
/// Registration order is overload order, so the one-argument `print` is
/// tried before the two-argument form and the bare form.
pub fn register_builtins(reg: &mut CommandRegistry) -> Result<()> {
    reg.register_all([
        CommandDescriptor::new("get_keycode", get_keycode)
            .summary("Gets the keycode of the specified key name.")
            .param(ParameterSpec::string("name"))
            .returns(ParamType::Int),
        CommandDescriptor::new("exec", exec)
            .summary("Executes all the commands in a .exec file.\n.exec files are stored in the exec directory.")
            .param(ParameterSpec::string("file")),
        CommandDescriptor::new("print", print)
            .summary("Prints a string out to the console.")
            .param(ParameterSpec::string("message")),
        CommandDescriptor::new("print", print_colored)
            .summary("Prints a string with the specified color out to the console.")
            .param(ParameterSpec::string("message"))
            .param(ParameterSpec::string("color").choices(DynamicChoices::Colors, true)),
        CommandDescriptor::new("print", print_blank)
            .summary("Prints a blank line out to the console."),
        CommandDescriptor::new("set_tooltip", set_tooltip)
            .summary("Sets the tooltip at the bottom of the screen.\nNote: \"time\" is measured in seconds.")
            .param(ParameterSpec::string("text"))
            .param(ParameterSpec::float("time")),
        CommandDescriptor::new("help", help)
            .summary("Prints out the summary and usage information about a command.")
            .param(ParameterSpec::string("commandName").choices(DynamicChoices::Commands, false)),
        CommandDescriptor::new("help", help_general)
            .summary("Prints out a generic help message."),
        CommandDescriptor::new("commands", commands)
            .summary("Prints out every registered command."),
        CommandDescriptor::new("reload_resources", reload_resources)
            .summary("Clears all resource caches."),
        CommandDescriptor::new("quit", quit).summary("Closes the game."),
        CommandDescriptor::new("draw_colliders", set_draw_colliders)
            .summary("Sets if to draw the colliders in the game.")
            .param(ParameterSpec::bool("value")),
        CommandDescriptor::new("draw_colliders", get_draw_colliders)
            .summary("Returns if colliders are to be drawn.")
            .returns(ParamType::Bool),
        CommandDescriptor::new("draw_fps", set_draw_fps)
            .summary("Sets if to draw the current fps in the game.")
            .param(ParameterSpec::bool("value")),
        CommandDescriptor::new("draw_fps", get_draw_fps)
            .summary("Returns if fps is to be drawn.")
            .returns(ParamType::Bool),
        CommandDescriptor::new("clear_console", clear_console)
            .summary("Clears all text from the console."),
    ])
}

// ---------------------------------------------------------------------------
// get_keycode
// ---------------------------------------------------------------------------

fn get_keycode(args: &[Value], _env: &mut Environment<'_>) -> Result<Option<Value>> {
    let name = str_arg(args, 0)?;
    let code = Key::from_name(name).map_or(0, |k| k.code() as i32);
    Ok(Some(Value::Int(code)))
}

// ---------------------------------------------------------------------------
// exec
// ---------------------------------------------------------------------------

fn exec(args: &[Value], env: &mut Environment<'_>) -> Result<Option<Value>> {
    let file = str_arg(args, 0)?;

    if !env.exec_dir.is_dir() {
        fs::create_dir_all(env.exec_dir)?;
        log::info!("Created exec directory {}", env.exec_dir.display());
        env.out.log("Exec folder not found, creating...", Color::LIME);
        return Ok(None);
    }

    let path = find_exec_file(env, file)?
        .ok_or_else(|| ConsoleError::Command(format!("File \"{file}.exec\" not found!")))?;

    if env.exec_depth >= MAX_EXEC_DEPTH {
        return Err(ConsoleError::Command(format!(
            "exec nested deeper than {MAX_EXEC_DEPTH} files"
        )));
    }

    let source = fs::read_to_string(&path)?;
    log::debug!("Running batch {}", path.display());
    env.exec_depth += 1;
    let result = run_batch(&source, env);
    env.exec_depth -= 1;
    result.map(|()| None)
}

/// `<exec_dir>/<stem>.exec`, with the stem compared case-insensitively.
fn find_exec_file(env: &Environment<'_>, stem: &str) -> Result<Option<PathBuf>> {
    let wanted = stem.to_uppercase();
    for entry in fs::read_dir(env.exec_dir)? {
        let path = entry?.path();
        let is_exec = path.extension().is_some_and(|ext| ext == "exec");
        let matches = path
            .file_stem()
            .and_then(|s| s.to_str())
            .is_some_and(|s| s.to_uppercase() == wanted);
        if is_exec && matches && path.is_file() {
            return Ok(Some(path));
        }
    }
    Ok(None)
}

/// Execute a batch of command lines, one per line.
///
/// Lines are trimmed; blank lines and lines starting with `//` are skipped.
/// The first failing line aborts the batch with [`ConsoleError::Batch`]
/// carrying its 1-based line number.
pub fn run_batch(source: &str, env: &mut Environment<'_>) -> Result<()> {
    let registry = env.registry;
    for (i, raw) in source.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with("//") {
            continue;
        }
        registry
            .execute(line, env)
            .map_err(|e| ConsoleError::Batch {
                line: i + 1,
                source: Box::new(e),
            })?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// print
// ---------------------------------------------------------------------------

fn print(args: &[Value], env: &mut Environment<'_>) -> Result<Option<Value>> {
    env.out.print(str_arg(args, 0)?);
    Ok(None)
}

fn print_colored(args: &[Value], env: &mut Environment<'_>) -> Result<Option<Value>> {
    let message = str_arg(args, 0)?;
    let name = str_arg(args, 1)?;
    let color = Color::from_name(name)
        .ok_or_else(|| ConsoleError::Command(format!("Unknown color: {name}")))?;
    env.out.log(message, color);
    Ok(None)
}

fn print_blank(_args: &[Value], env: &mut Environment<'_>) -> Result<Option<Value>> {
    env.out.print("");
    Ok(None)
}

// ---------------------------------------------------------------------------
// set_tooltip
// ---------------------------------------------------------------------------

fn set_tooltip(args: &[Value], env: &mut Environment<'_>) -> Result<Option<Value>> {
    let text = str_arg(args, 0)?;
    let time = float_arg(args, 1)?;
    *env.tooltip = Some(Tooltip::new(text, time));
    Ok(None)
}

// ---------------------------------------------------------------------------
// help
// ---------------------------------------------------------------------------

fn help(args: &[Value], env: &mut Environment<'_>) -> Result<Option<Value>> {
    let name = str_arg(args, 0)?;
    let wanted = name.trim().to_uppercase();
    let registry = env.registry;
    let mut found = false;

    for d in registry.descriptors() {
        if !wanted.starts_with(&d.name().to_uppercase()) {
            continue;
        }
        env.out.print("");
        if found {
            env.out.log("--== OVERLOAD ==--", Color::GOLD);
        } else {
            env.out.log(&format!("--== \"{}\" help ==--", d.name()), Color::GOLD);
        }
        env.out.log(
            d.summary_text()
                .unwrap_or("No summary information specified."),
            Color::AQUA,
        );
        env.out.log(&format!("Usage: {}", d.usage()), Color::AQUA);
        if let ReturnKind::Value(ty) = d.return_kind() {
            env.out.log(&format!("Returns: {ty}"), Color::AQUA);
        }
        env.out.print("");
        found = true;
    }

    if !found {
        env.out.log(&format!("Command \"{name}\" not found!"), Color::RED);
    }
    Ok(None)
}

fn help_general(_args: &[Value], env: &mut Environment<'_>) -> Result<Option<Value>> {
    env.out.log(
        "Use \"help <command name>\" to get\nspecific information about that\ncommand.",
        Color::YELLOW,
    );
    env.out.print("");
    env.out.log(
        "Use \"commands\" to get a list of\nall the registered commands.",
        Color::YELLOW,
    );
    Ok(None)
}

// ---------------------------------------------------------------------------
// commands
// ---------------------------------------------------------------------------

fn commands(_args: &[Value], env: &mut Environment<'_>) -> Result<Option<Value>> {
    let registry = env.registry;
    for d in registry.descriptors() {
        let line = match d.return_kind() {
            ReturnKind::Void => d.usage(),
            ReturnKind::Value(ty) => format!("{}  Returns: {ty}", d.usage()),
        };
        env.out.print(&line);
    }
    Ok(None)
}

// ---------------------------------------------------------------------------
// reload_resources / quit
// ---------------------------------------------------------------------------

fn reload_resources(_args: &[Value], env: &mut Environment<'_>) -> Result<Option<Value>> {
    log::info!("Resource reload requested");
    env.signals.push(HostSignal::ReloadResources);
    env.out.print("All Caches cleared and resources reloaded!");
    Ok(None)
}

fn quit(_args: &[Value], env: &mut Environment<'_>) -> Result<Option<Value>> {
    log::info!("Quit requested");
    env.signals.push(HostSignal::Quit);
    Ok(None)
}

// ---------------------------------------------------------------------------
// draw_colliders / draw_fps
// ---------------------------------------------------------------------------

fn set_draw_colliders(args: &[Value], env: &mut Environment<'_>) -> Result<Option<Value>> {
    env.debug.draw_colliders = bool_arg(args, 0)?;
    Ok(None)
}

fn get_draw_colliders(_args: &[Value], env: &mut Environment<'_>) -> Result<Option<Value>> {
    Ok(Some(Value::Bool(env.debug.draw_colliders)))
}

fn set_draw_fps(args: &[Value], env: &mut Environment<'_>) -> Result<Option<Value>> {
    env.debug.draw_fps = bool_arg(args, 0)?;
    Ok(None)
}

fn get_draw_fps(_args: &[Value], env: &mut Environment<'_>) -> Result<Option<Value>> {
    Ok(Some(Value::Bool(env.debug.draw_fps)))
}

// ---------------------------------------------------------------------------
// clear_console
// ---------------------------------------------------------------------------

fn clear_console(_args: &[Value], env: &mut Environment<'_>) -> Result<Option<Value>> {
    env.out.clear();
    env.out.print("Console Cleared!");
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::Harness;

    fn setup() -> CommandRegistry {
        let mut reg = CommandRegistry::new();
        register_builtins(&mut reg).unwrap();
        reg
    }

    fn run(reg: &CommandRegistry, h: &mut Harness, line: &str) -> Result<Option<Value>> {
        reg.execute(line, &mut h.env(reg))
    }

    #[test]
    fn builtins_register_cleanly() {
        let reg = setup();
        assert_eq!(reg.len(), 16);
        assert_eq!(
            reg.command_names(),
            vec![
                "get_keycode",
                "exec",
                "print",
                "set_tooltip",
                "help",
                "commands",
                "reload_resources",
                "quit",
                "draw_colliders",
                "draw_fps",
                "clear_console",
            ]
        );
    }

    #[test]
    fn print_overloads() {
        let reg = setup();
        let mut h = Harness::new();
        run(&reg, &mut h, "print hello").unwrap();
        run(&reg, &mut h, "print \"Hello World\" red").unwrap();
        run(&reg, &mut h, "print").unwrap();
        assert_eq!(
            h.out,
            vec![
                ("hello".to_string(), Color::WHITE),
                ("Hello World".to_string(), Color::RED),
                (String::new(), Color::WHITE),
            ]
        );
    }

    #[test]
    fn print_unknown_color_has_no_overload() {
        let reg = setup();
        let mut h = Harness::new();
        let err = run(&reg, &mut h, "print hello world").unwrap_err();
        assert!(matches!(err, ConsoleError::NoMatchingOverload(_)));
        assert!(h.out.is_empty());
    }

    #[test]
    fn print_decodes_newline_escape() {
        let reg = setup();
        let mut h = Harness::new();
        run(&reg, &mut h, r#"print "one\Ntwo""#).unwrap();
        assert_eq!(h.lines(), vec!["one", "two"]);
    }

    #[test]
    fn get_keycode_known_and_unknown() {
        let reg = setup();
        let mut h = Harness::new();
        assert_eq!(
            run(&reg, &mut h, "get_keycode a").unwrap(),
            Some(Value::Int(65))
        );
        assert_eq!(
            run(&reg, &mut h, "get_keycode ENTER").unwrap(),
            Some(Value::Int(257))
        );
        assert_eq!(
            run(&reg, &mut h, "get_keycode nonsense").unwrap(),
            Some(Value::Int(0))
        );
    }

    #[test]
    fn set_tooltip_stores_text_and_time() {
        let reg = setup();
        let mut h = Harness::new();
        run(&reg, &mut h, "set_tooltip 'Saved!' 2.5").unwrap();
        assert_eq!(h.tooltip, Some(Tooltip::new("Saved!", 2.5)));
        assert!(run(&reg, &mut h, "set_tooltip hi soon").is_err());
    }

    #[test]
    fn debug_flag_setters_and_getters() {
        let reg = setup();
        let mut h = Harness::new();
        assert_eq!(
            run(&reg, &mut h, "draw_fps").unwrap(),
            Some(Value::Bool(false))
        );
        run(&reg, &mut h, "draw_fps TRUE").unwrap();
        assert!(h.debug.draw_fps);
        assert_eq!(
            run(&reg, &mut h, "draw_fps").unwrap(),
            Some(Value::Bool(true))
        );
        run(&reg, &mut h, "draw_colliders true").unwrap();
        run(&reg, &mut h, "draw_colliders false").unwrap();
        assert!(!h.debug.draw_colliders);
        assert!(run(&reg, &mut h, "draw_colliders maybe").is_err());
    }

    #[test]
    fn quit_and_reload_raise_signals() {
        let reg = setup();
        let mut h = Harness::new();
        run(&reg, &mut h, "reload_resources").unwrap();
        run(&reg, &mut h, "quit").unwrap();
        assert_eq!(h.signals, vec![HostSignal::ReloadResources, HostSignal::Quit]);
        assert_eq!(h.lines(), vec!["All Caches cleared and resources reloaded!"]);
    }

    #[test]
    fn clear_console_leaves_one_line() {
        let reg = setup();
        let mut h = Harness::new();
        run(&reg, &mut h, "print a").unwrap();
        run(&reg, &mut h, "print b").unwrap();
        run(&reg, &mut h, "clear_console").unwrap();
        assert_eq!(h.lines(), vec!["Console Cleared!"]);
    }

    #[test]
    fn help_for_overloaded_command() {
        let reg = setup();
        let mut h = Harness::new();
        run(&reg, &mut h, "help draw_fps").unwrap();
        let lines = h.lines();
        assert!(lines.contains(&"--== \"draw_fps\" help ==--"));
        assert!(lines.contains(&"--== OVERLOAD ==--"));
        assert!(lines.contains(&"Usage: draw_fps <value (Bool)>"));
        assert!(lines.contains(&"Returns: Bool"));
        assert!(
            h.out
                .iter()
                .any(|(t, c)| t == "Usage: draw_fps" && *c == Color::AQUA)
        );
    }

    #[test]
    fn help_lists_summary_lines() {
        let reg = setup();
        let mut h = Harness::new();
        run(&reg, &mut h, "help set_tooltip").unwrap();
        assert!(h.lines().contains(&"Note: \"time\" is measured in seconds."));
    }

    #[test]
    fn help_unknown_command_logs_red() {
        let reg = setup();
        let mut h = Harness::new();
        run(&reg, &mut h, "help nothing").unwrap();
        assert_eq!(
            h.out,
            vec![("Command \"nothing\" not found!".to_string(), Color::RED)]
        );
    }

    #[test]
    fn help_without_argument_is_yellow() {
        let reg = setup();
        let mut h = Harness::new();
        run(&reg, &mut h, "help").unwrap();
        assert!(h.out.iter().all(|(t, c)| t.is_empty() || *c == Color::YELLOW));
        assert!(h.lines().contains(&"all the registered commands."));
    }

    #[test]
    fn commands_lists_every_descriptor() {
        let reg = setup();
        let mut h = Harness::new();
        run(&reg, &mut h, "commands").unwrap();
        let lines = h.lines();
        assert_eq!(lines.len(), reg.len());
        assert!(lines.contains(&"get_keycode <name (String)>  Returns: Int"));
        assert!(lines.contains(&"print <message (String)> <color (String)>"));
        assert!(lines.contains(&"quit"));
    }

    // -- exec --

    #[test]
    fn exec_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let exec_dir = dir.path().join("exec");
        let reg = setup();
        let mut h = Harness::with_exec_dir(&exec_dir);
        run(&reg, &mut h, "exec startup").unwrap();
        assert!(exec_dir.is_dir());
        assert_eq!(
            h.out,
            vec![("Exec folder not found, creating...".to_string(), Color::LIME)]
        );
    }

    #[test]
    fn exec_runs_lines_skipping_comments() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("Startup.exec"),
            "// setup\n\n  print one  \ndraw_fps true\nprint two\n",
        )
        .unwrap();
        let reg = setup();
        let mut h = Harness::with_exec_dir(dir.path());
        run(&reg, &mut h, "exec STARTUP").unwrap();
        assert_eq!(h.lines(), vec!["one", "two"]);
        assert!(h.debug.draw_fps);
    }

    #[test]
    fn exec_aborts_at_first_failing_line() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("broken.exec"),
            "print before\n// note\nfly away\nprint after\n",
        )
        .unwrap();
        let reg = setup();
        let mut h = Harness::with_exec_dir(dir.path());
        let err = run(&reg, &mut h, "exec broken").unwrap_err();
        assert!(matches!(err, ConsoleError::Batch { line: 3, .. }));
        assert_eq!(err.to_string(), "At line 3: Command not found: FLY");
        assert_eq!(h.lines(), vec!["before"]);
    }

    #[test]
    fn exec_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("other.txt"), "print no").unwrap();
        let reg = setup();
        let mut h = Harness::with_exec_dir(dir.path());
        let err = run(&reg, &mut h, "exec other").unwrap_err();
        assert_eq!(err.to_string(), "File \"other.exec\" not found!");
    }

    #[test]
    fn exec_recursion_is_bounded() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("loop.exec"), "exec loop\n").unwrap();
        let reg = setup();
        let mut h = Harness::with_exec_dir(dir.path());
        let err = run(&reg, &mut h, "exec loop").unwrap_err();
        let mut depth = 0;
        let mut inner = &err;
        while let ConsoleError::Batch { source, .. } = inner {
            depth += 1;
            inner = source.as_ref();
        }
        assert_eq!(depth, MAX_EXEC_DEPTH);
        assert!(matches!(inner, ConsoleError::Command(_)));
    }

    #[test]
    fn run_batch_directly() {
        let reg = setup();
        let mut h = Harness::new();
        run_batch("print a\n\nquit\n", &mut h.env(&reg)).unwrap();
        assert_eq!(h.lines(), vec!["a"]);
        assert_eq!(h.signals, vec![HostSignal::Quit]);
    }
}
