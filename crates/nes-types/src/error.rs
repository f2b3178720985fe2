//! Error types for the NES console.

use std::io;

/// Errors produced by the console interpreter and its host plumbing.
///
/// The `Display` text of every variant is what the console shows the user,
/// so messages are written as sentences rather than as `kind: detail` pairs.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    /// No registered command name is a prefix of the input line.
    #[error("Command not found: {0}")]
    CommandNotFound(String),

    /// A command name matched but no overload accepted the arguments.
    #[error(
        "No overload of {0} exists with the specified parameters. Type \"help {0}\" for usage."
    )]
    NoMatchingOverload(String),

    /// A descriptor declares a parameter the coercer cannot handle.
    #[error("Parameter {parameter} of {command} has an unsupported type: {reason}")]
    UnsupportedParameterType {
        command: String,
        parameter: String,
        reason: String,
    },

    /// A command body failed while running.
    #[error("{0}")]
    Command(String),

    /// A line of an `exec` batch failed; the rest of the batch was skipped.
    #[error("At line {line}: {source}")]
    Batch {
        line: usize,
        source: Box<ConsoleError>,
    },

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, ConsoleError>;
