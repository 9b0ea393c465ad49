//! CLI subcommand implementations.

pub mod catalog;
pub mod fit;
pub mod schedule;
