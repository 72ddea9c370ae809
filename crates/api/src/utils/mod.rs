//! Shared helpers for command handlers

pub mod command_helpers;
pub mod logging;

pub use command_helpers::execute_command;
