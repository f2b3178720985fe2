//! Foundation types for the NES console.
//!
//! This crate holds the platform-agnostic types shared by the interpreter,
//! the console front end, and hosts: colors, key codes, the backend traits a
//! host implements (input and clipboard), configuration, and error types.

pub mod backend;
pub mod color;
pub mod config;
pub mod error;
pub mod input;
