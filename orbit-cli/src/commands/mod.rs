//! CLI subcommand implementations.

pub mod chains;
pub mod classify;
pub mod custom;
pub mod hierarchy;
