//! Talk definitions with validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors for core types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided value was empty or whitespace only.
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    /// A talk must last at least one minute.
    #[error("duration must be at least one minute")]
    ZeroDuration,

    /// Unknown selection strategy name.
    #[error("invalid selection strategy: {value} (expected 'exact' or 'greedy')")]
    InvalidStrategy { value: String },
}

/// Anything that occupies a fixed number of minutes in a session.
///
/// Selectors are generic over this trait so they can run against talks
/// as well as bare durations in tests.
pub trait Timed {
    /// Returns the duration in minutes.
    fn minutes(&self) -> u32;
}

impl Timed for u32 {
    fn minutes(&self) -> u32 {
        *self
    }
}

impl<T: Timed + ?Sized> Timed for &T {
    fn minutes(&self) -> u32 {
        (**self).minutes()
    }
}

/// A titled talk with a fixed duration.
///
/// Two talks may share a title and duration; the scheduler tracks them by
/// position, never by value, so duplicates stay distinct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTalk")]
pub struct Talk {
    title: String,
    minutes: u32,
}

/// Unvalidated wire form of [`Talk`].
#[derive(Deserialize)]
struct RawTalk {
    title: String,
    minutes: u32,
}

impl Talk {
    /// Creates a talk after validation.
    ///
    /// The title is trimmed. Whitespace-only titles and zero durations are
    /// rejected.
    pub fn new(title: impl Into<String>, minutes: u32) -> Result<Self, ValidationError> {
        let title = title.into();
        let title = title.trim();
        if title.is_empty() {
            return Err(ValidationError::Empty { field: "title" });
        }
        if minutes == 0 {
            return Err(ValidationError::ZeroDuration);
        }
        Ok(Self {
            title: title.to_string(),
            minutes,
        })
    }

    /// Returns the talk title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns true for five-minute lightning talks.
    pub const fn is_lightning(&self) -> bool {
        self.minutes == LIGHTNING_MINUTES
    }
}

/// Duration of a lightning talk.
pub const LIGHTNING_MINUTES: u32 = 5;

impl Timed for Talk {
    fn minutes(&self) -> u32 {
        self.minutes
    }
}

impl TryFrom<RawTalk> for Talk {
    type Error = ValidationError;

    fn try_from(raw: RawTalk) -> Result<Self, Self::Error> {
        Self::new(raw.title, raw.minutes)
    }
}
