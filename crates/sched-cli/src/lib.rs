//! Track scheduler CLI library.
//!
//! This crate provides the CLI interface for the track scheduler.

mod cli;
pub mod commands;
mod config;
pub mod format;
pub mod input;

pub use cli::{Cli, Commands, InputArgs, ScheduleArgs};
pub use config::Config;
