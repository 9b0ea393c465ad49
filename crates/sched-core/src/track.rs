//! Scheduled tracks.

use chrono::NaiveTime;
use serde::Serialize;

use crate::talk::{Talk, Timed};

/// One conference track: a morning session, an afternoon session and the
/// time the closing sharing session starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Track {
    /// Morning talks in presentation order.
    pub morning: Vec<Talk>,

    /// Afternoon talks in presentation order.
    pub afternoon: Vec<Talk>,

    /// Start of the sharing session that closes the day.
    #[serde(serialize_with = "crate::clock::serialize")]
    pub sharing_start: NaiveTime,
}

impl Track {
    /// Total minutes booked in the morning session.
    pub fn morning_minutes(&self) -> u32 {
        total_minutes(&self.morning)
    }

    /// Total minutes booked in the afternoon session.
    pub fn afternoon_minutes(&self) -> u32 {
        total_minutes(&self.afternoon)
    }

    /// Iterates over every talk in the track, morning first.
    pub fn talks(&self) -> impl Iterator<Item = &Talk> {
        self.morning.iter().chain(&self.afternoon)
    }
}

/// Result of partitioning a talk list into tracks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Schedule {
    /// Tracks in the order they were filled.
    pub tracks: Vec<Track>,

    /// Talks longer than both sessions. They are never placed.
    pub unplaceable: Vec<Talk>,
}

impl Schedule {
    /// Number of talks placed in some track.
    pub fn scheduled_count(&self) -> usize {
        self.tracks
            .iter()
            .map(|t| t.morning.len() + t.afternoon.len())
            .sum()
    }
}

pub(crate) fn total_minutes(talks: &[Talk]) -> u32 {
    talks.iter().map(Timed::minutes).sum()
}
