//! Core scheduling logic for the track scheduler.
//!
//! This crate contains the fundamental types and logic for:
//! - Selection: filling one session as fully as possible from a pool of talks
//! - Partitioning: carving successive tracks out of the pool until it is empty
//! - Session layout: capacities, start times and the sharing-session floor

mod catalog;
pub mod clock;
mod partition;
mod selector;
mod talk;
mod track;

pub use catalog::default_talks;
pub use partition::{ScheduleError, SessionConfig, partition};
pub use selector::{Selection, SelectionStrategy, select_best_fit, select_greedy};
pub use talk::{LIGHTNING_MINUTES, Talk, Timed, ValidationError};
pub use track::{Schedule, Track};
