//! In-game developer console front end.
//!
//! Wraps the `nes-terminal` interpreter in the state a game needs to drive
//! it one frame at a time: a line editor with history, a scrollable log,
//! and the open/close toggle. Hosts supply input and clipboard access
//! through the `nes-types` backend traits.

mod console;
pub mod keymap;
mod line_editor;
mod scrollback;
mod scripted;

/// The console context object driven once per frame.
pub use console::Console;
/// Result of feeding one key to the line editor.
pub use line_editor::EditOutcome;
/// Single-line input editor with history browsing.
pub use line_editor::LineEditor;
/// Queue-backed input source for headless hosts and tests.
pub use scripted::ScriptedInput;
/// Scrollable console output.
pub use scrollback::Scrollback;
