//! Command-line interface for fieldprobe.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, CompletionsArgs, FieldsArgs, ProbeArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
