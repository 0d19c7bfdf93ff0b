//! Command-line interface for backlog.

pub mod args;
pub mod commands;
