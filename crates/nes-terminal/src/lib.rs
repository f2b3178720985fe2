//! Command interpreter for the NES console.
//!
//! Commands are declared as [`CommandDescriptor`]s and registered in order
//! into a [`CommandRegistry`]. Several descriptors may share a name; they
//! are overloads. Executing a line tokenizes it, finds the descriptors whose
//! name prefixes the line, and invokes the first one whose arity and
//! argument coercions all succeed.

pub mod coerce;
mod commands;
pub mod descriptor;
mod dispatch;
mod interpreter;
mod registry;
pub mod tokenizer;

#[cfg(test)]
pub(crate) mod test_utils;

/// Nested `exec` batches deeper than this are refused.
pub use commands::MAX_EXEC_DEPTH;
/// Register all built-in commands (print, help, exec, debug toggles, ...) into a registry.
pub use commands::register_builtins;
/// Execute a batch of command lines, aborting at the first failure.
pub use commands::run_batch;
/// A named, invocable command signature.
pub use descriptor::CommandDescriptor;
/// Semantic type of a command parameter.
pub use descriptor::ParamType;
/// One declared parameter slot.
pub use descriptor::ParameterSpec;
/// A coerced argument or command result.
pub use descriptor::Value;
/// Debug overlays toggled by commands.
pub use interpreter::DebugFlags;
/// Shared mutable environment passed to every command.
pub use interpreter::Environment;
/// Requests a command makes of the host.
pub use interpreter::HostSignal;
/// Destination for console output.
pub use interpreter::LogSink;
/// Timed text shown at the bottom of the screen.
pub use interpreter::Tooltip;
/// Ordered registry of command descriptors with dispatch.
pub use registry::CommandRegistry;
/// Split a command line into tokens.
pub use tokenizer::tokenize;
