//! Subcommand implementations.

pub mod menu;
pub mod session;
