//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use sched_core::SelectionStrategy;

/// Conference track scheduler.
///
/// Packs talks into tracks with a morning and an afternoon session, filling
/// each session as close to its length as possible.
#[derive(Debug, Parser)]
#[command(name = "sched", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Partition talks into tracks and print the timetable.
    Schedule(ScheduleArgs),

    /// Fill a single session of the given length.
    Fit {
        /// Session length in minutes.
        #[arg(long)]
        capacity: u32,

        #[command(flatten)]
        input: InputArgs,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List the built-in talk catalog.
    Catalog {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },
}

/// Where talks come from and how sessions are filled.
#[derive(Debug, Clone, Default, Args)]
pub struct InputArgs {
    /// Talk list file, one `Title, Duration` per line ("-" reads stdin).
    /// Uses the built-in catalog when omitted.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Selection strategy: "exact" or "greedy" (overrides config).
    #[arg(long)]
    pub strategy: Option<SelectionStrategy>,
}

/// Options for `sched schedule`.
#[derive(Debug, Clone, Default, Args)]
pub struct ScheduleArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output as JSON.
    #[arg(long)]
    pub json: bool,

    /// Also write the timetable to this file.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Fail if any talk is longer than every session.
    #[arg(long)]
    pub strict: bool,
}
