//! Track assembly.
//!
//! Repeatedly carves the best-fitting morning and afternoon sessions out of
//! a shrinking pool until every placeable talk belongs to a track.
//!
//! # Algorithm Summary
//!
//! 1. Set aside talks longer than both sessions; no track can ever hold them
//! 2. Select the morning session from the pool and remove it
//! 3. Select the afternoon session from what is left and remove it
//! 4. Start the sharing session when the afternoon ends, but never before
//!    the configured floor
//! 5. Repeat from 2 until the pool is empty

use chrono::{Duration, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::selector::{Selection, SelectionStrategy};
use crate::talk::{Talk, Timed};
use crate::track::{Schedule, Track, total_minutes};

/// Errors from [`partition`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// A session would run past midnight.
    #[error("{session} session starting at {start} cannot last {minutes} minutes without passing midnight")]
    PastMidnight {
        session: &'static str,
        start: NaiveTime,
        minutes: u32,
    },

    /// The morning session ends after lunch begins.
    #[error("morning session ends at {ends}, after lunch starts at {lunch}")]
    MorningOverrunsLunch { ends: NaiveTime, lunch: NaiveTime },

    /// Lunch must start before the afternoon session.
    #[error("lunch at {lunch} must start before the afternoon session at {afternoon}")]
    LunchAfterAfternoon { lunch: NaiveTime, afternoon: NaiveTime },
}

/// Layout of a conference day.
///
/// Defaults: a 09:00-12:00 morning, lunch at noon, a 13:00 afternoon of up
/// to four hours and a sharing session no earlier than 16:00.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Morning session capacity in minutes.
    pub morning_minutes: u32,

    /// Afternoon session capacity in minutes.
    pub afternoon_minutes: u32,

    #[serde(with = "crate::clock")]
    pub morning_start: NaiveTime,

    #[serde(with = "crate::clock")]
    pub lunch_start: NaiveTime,

    #[serde(with = "crate::clock")]
    pub afternoon_start: NaiveTime,

    /// Earliest start for the sharing session.
    #[serde(with = "crate::clock")]
    pub sharing_floor: NaiveTime,

    /// Selector used to fill each session.
    pub strategy: SelectionStrategy,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            morning_minutes: 180,
            afternoon_minutes: 240,
            morning_start: hm(9, 0),
            lunch_start: hm(12, 0),
            afternoon_start: hm(13, 0),
            sharing_floor: hm(16, 0),
            strategy: SelectionStrategy::Exact,
        }
    }
}

impl SessionConfig {
    /// Checks that the sessions fit in one day in the expected order.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        let morning_end = session_end(self.morning_start, self.morning_minutes).ok_or(
            ScheduleError::PastMidnight {
                session: "morning",
                start: self.morning_start,
                minutes: self.morning_minutes,
            },
        )?;
        if morning_end > self.lunch_start {
            return Err(ScheduleError::MorningOverrunsLunch {
                ends: morning_end,
                lunch: self.lunch_start,
            });
        }
        if self.lunch_start >= self.afternoon_start {
            return Err(ScheduleError::LunchAfterAfternoon {
                lunch: self.lunch_start,
                afternoon: self.afternoon_start,
            });
        }
        if session_end(self.afternoon_start, self.afternoon_minutes).is_none() {
            return Err(ScheduleError::PastMidnight {
                session: "afternoon",
                start: self.afternoon_start,
                minutes: self.afternoon_minutes,
            });
        }
        Ok(())
    }

    /// Sharing session start for an afternoon booked with `afternoon_minutes`.
    pub fn sharing_start(&self, afternoon_minutes: u32) -> NaiveTime {
        let ends = self.afternoon_start + Duration::minutes(i64::from(afternoon_minutes));
        ends.max(self.sharing_floor)
    }

    /// Longest talk any session can hold.
    pub const fn longest_session(&self) -> u32 {
        if self.morning_minutes > self.afternoon_minutes {
            self.morning_minutes
        } else {
            self.afternoon_minutes
        }
    }
}

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default()
}

/// End of a session, or `None` if it would wrap past midnight.
fn session_end(start: NaiveTime, minutes: u32) -> Option<NaiveTime> {
    let (end, wrapped_secs) = start.overflowing_add_signed(Duration::minutes(i64::from(minutes)));
    (wrapped_secs == 0).then_some(end)
}

/// Partitions `talks` into tracks.
///
/// Every input talk ends up in exactly one track session or in
/// [`Schedule::unplaceable`]. Each pass places at least one talk, so the
/// number of tracks never exceeds the number of placeable talks.
pub fn partition(talks: Vec<Talk>, config: &SessionConfig) -> Result<Schedule, ScheduleError> {
    config.validate()?;

    let longest_session = config.longest_session();
    let (mut pool, unplaceable): (Vec<Talk>, Vec<Talk>) = talks
        .into_iter()
        .partition(|talk| talk.minutes() <= longest_session);

    for talk in &unplaceable {
        tracing::warn!(
            title = talk.title(),
            minutes = talk.minutes(),
            longest_session,
            "talk is longer than any session"
        );
    }

    let mut tracks = Vec::new();
    while !pool.is_empty() {
        let morning = config.strategy.select(&pool, config.morning_minutes);
        let morning = take_selected(&mut pool, &morning);

        let afternoon = config.strategy.select(&pool, config.afternoon_minutes);
        let afternoon = take_selected(&mut pool, &afternoon);

        // Every pooled talk fits the longer session, so it is never left empty.
        debug_assert!(
            !(morning.is_empty() && afternoon.is_empty()),
            "a pass over {} talks placed nothing",
            pool.len()
        );

        let afternoon_minutes = total_minutes(&afternoon);
        let track = Track {
            sharing_start: config.sharing_start(afternoon_minutes),
            morning,
            afternoon,
        };

        tracing::debug!(
            track = tracks.len() + 1,
            morning_minutes = track.morning_minutes(),
            afternoon_minutes,
            remaining = pool.len(),
            "filled track"
        );
        tracks.push(track);
    }

    Ok(Schedule {
        tracks,
        unplaceable,
    })
}

/// Moves the selected talks out of `pool`, keeping the rest in order.
fn take_selected(pool: &mut Vec<Talk>, selection: &Selection) -> Vec<Talk> {
    let mut slots: Vec<Option<Talk>> = pool.drain(..).map(Some).collect();
    let taken = selection
        .indices
        .iter()
        .filter_map(|&i| slots.get_mut(i).and_then(Option::take))
        .collect();
    pool.extend(slots.into_iter().flatten());
    taken
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::catalog::default_talks;

    fn talk(title: &str, minutes: u32) -> Talk {
        Talk::new(title, minutes).unwrap()
    }

    fn sample_talks() -> Vec<Talk> {
        vec![
            talk("Talk A", 60),
            talk("Talk B", 45),
            talk("Talk C", 30),
            talk("Talk D", 60),
            talk("Talk E", 45),
        ]
    }

    fn titles(talks: &[Talk]) -> Vec<&str> {
        talks.iter().map(Talk::title).collect()
    }

    /// Sorted (title, minutes) pairs, so multisets can be compared.
    fn multiset<'a>(talks: impl IntoIterator<Item = &'a Talk>) -> Vec<(String, u32)> {
        let mut pairs: Vec<_> = talks
            .into_iter()
            .map(|t| (t.title().to_string(), t.minutes()))
            .collect();
        pairs.sort();
        pairs
    }

    fn assert_invariants(input: &[Talk], schedule: &Schedule, config: &SessionConfig) {
        let placed = schedule.tracks.iter().flat_map(Track::talks);
        let output = multiset(placed.chain(&schedule.unplaceable));
        assert_eq!(output, multiset(input), "talks must be conserved");

        for track in &schedule.tracks {
            assert!(track.morning_minutes() <= config.morning_minutes);
            assert!(track.afternoon_minutes() <= config.afternoon_minutes);
            assert!(track.sharing_start >= config.sharing_floor);
        }
        assert!(schedule.tracks.len() <= input.len());
    }

    fn session_layout(morning_minutes: u32, afternoon_minutes: u32) -> SessionConfig {
        SessionConfig {
            morning_minutes,
            afternoon_minutes,
            morning_start: hm(6, 0),
            ..SessionConfig::default()
        }
    }

    #[test]
    fn single_track_when_everything_fits() {
        let config = SessionConfig::default();
        let schedule = partition(sample_talks(), &config).unwrap();

        assert_eq!(schedule.tracks.len(), 1);
        let track = &schedule.tracks[0];
        assert_eq!(titles(&track.morning), vec!["Talk A", "Talk B", "Talk C", "Talk E"]);
        assert_eq!(titles(&track.afternoon), vec!["Talk D"]);
        assert_eq!(track.sharing_start, hm(16, 0));
        assert!(schedule.unplaceable.is_empty());
        assert_invariants(&sample_talks(), &schedule, &config);
    }

    #[test]
    fn oversized_talk_is_reported_not_looped_on() {
        let config = SessionConfig::default();
        let mut input = sample_talks();
        input.push(talk("Marathon", 500));

        let schedule = partition(input.clone(), &config).unwrap();

        assert_eq!(titles(&schedule.unplaceable), vec!["Marathon"]);
        assert_eq!(schedule.tracks.len(), 1);
        assert_invariants(&input, &schedule, &config);
    }

    #[test]
    fn only_unplaceable_talks_yield_no_tracks() {
        let config = SessionConfig::default();
        let schedule = partition(vec![talk("Long", 241), talk("Longer", 600)], &config).unwrap();

        assert!(schedule.tracks.is_empty());
        assert_eq!(schedule.unplaceable.len(), 2);
    }

    #[test]
    fn empty_input_yields_no_tracks() {
        let schedule = partition(Vec::new(), &SessionConfig::default()).unwrap();
        assert_eq!(schedule, Schedule::default());
    }

    #[test]
    fn afternoon_only_talk_is_placed() {
        // Too long for the morning, fits the afternoon.
        let config = SessionConfig::default();
        let schedule = partition(vec![talk("Workshop", 200)], &config).unwrap();

        assert_eq!(schedule.tracks.len(), 1);
        let track = &schedule.tracks[0];
        assert!(track.morning.is_empty());
        assert_eq!(titles(&track.afternoon), vec!["Workshop"]);
        assert_eq!(track.sharing_start, hm(16, 20));
    }

    #[test]
    fn morning_only_talk_is_placed_when_morning_is_longer() {
        let config = session_layout(300, 60);
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.longest_session(), 300);

        let input = vec![talk("Workshop", 200), talk("Talk A", 60), talk("Talk B", 90)];
        let schedule = partition(input.clone(), &config).unwrap();

        assert!(schedule.unplaceable.is_empty());
        assert_eq!(schedule.tracks.len(), 1);
        let track = &schedule.tracks[0];
        assert_eq!(titles(&track.morning), vec!["Workshop", "Talk B"]);
        assert_eq!(titles(&track.afternoon), vec!["Talk A"]);
        assert_eq!(track.sharing_start, hm(16, 0));
        assert_invariants(&input, &schedule, &config);
    }

    #[test]
    fn every_track_places_a_talk() {
        let mut state: u32 = 0x1234_5677;
        let mut next = || {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            state
        };

        let layouts = [session_layout(300, 60), session_layout(60, 240), session_layout(120, 120)];
        let strategies = [SelectionStrategy::Exact, SelectionStrategy::Greedy];
        for layout in layouts {
            for strategy in strategies {
                let config = SessionConfig { strategy, ..layout.clone() };
                let input: Vec<Talk> = (0..12)
                    .map(|_| talk("Talk", next() % config.longest_session() + 1))
                    .collect();

                let schedule = partition(input.clone(), &config).unwrap();

                assert!(schedule.unplaceable.is_empty());
                assert!(schedule.tracks.iter().all(|t| t.talks().next().is_some()));
                assert_invariants(&input, &schedule, &config);
            }
        }
    }

    #[test]
    fn duplicates_are_each_placed_once() {
        let config = SessionConfig::default();
        let input: Vec<Talk> = (0..8).map(|_| talk("Same Talk", 60)).collect();

        let schedule = partition(input.clone(), &config).unwrap();

        assert_eq!(schedule.tracks.len(), 2);
        assert_eq!(schedule.tracks[0].morning.len(), 3);
        assert_eq!(schedule.tracks[0].afternoon.len(), 4);
        assert_eq!(schedule.tracks[1].morning.len(), 1);
        assert!(schedule.tracks[1].afternoon.is_empty());
        assert_eq!(schedule.tracks[1].sharing_start, hm(16, 0));
        assert_eq!(schedule.scheduled_count(), 8);
        assert_invariants(&input, &schedule, &config);
    }

    #[test]
    fn default_catalog_fills_two_tracks() {
        let config = SessionConfig::default();
        let input = default_talks();

        let schedule = partition(input.clone(), &config).unwrap();

        assert_eq!(schedule.tracks.len(), 2);
        assert_eq!(schedule.tracks[0].morning_minutes(), 180);
        assert_eq!(schedule.tracks[0].afternoon_minutes(), 240);
        assert_eq!(schedule.tracks[0].sharing_start, hm(17, 0));
        assert_eq!(schedule.tracks[1].morning_minutes(), 180);
        assert_eq!(schedule.tracks[1].afternoon_minutes(), 190);
        assert_eq!(schedule.tracks[1].sharing_start, hm(16, 10));
        assert_invariants(&input, &schedule, &config);
    }

    #[test]
    fn greedy_strategy_respects_invariants() {
        let config = SessionConfig {
            strategy: SelectionStrategy::Greedy,
            ..SessionConfig::default()
        };
        let input = default_talks();

        let schedule = partition(input.clone(), &config).unwrap();

        assert!(!schedule.tracks.is_empty());
        assert_invariants(&input, &schedule, &config);
    }

    #[test]
    fn sharing_start_is_floored() {
        let config = SessionConfig::default();
        assert_eq!(config.sharing_start(0), hm(16, 0));
        assert_eq!(config.sharing_start(180), hm(16, 0));
        assert_eq!(config.sharing_start(200), hm(16, 20));
        assert_eq!(config.sharing_start(240), hm(17, 0));
    }

    #[test]
    fn take_selected_keeps_remaining_order() {
        let mut pool = sample_talks();
        let selection = Selection {
            indices: vec![3, 1],
            total_minutes: 105,
        };

        let taken = take_selected(&mut pool, &selection);

        assert_eq!(titles(&taken), vec!["Talk D", "Talk B"]);
        assert_eq!(titles(&pool), vec!["Talk A", "Talk C", "Talk E"]);
    }

    #[test]
    fn validate_accepts_default() {
        assert_eq!(SessionConfig::default().validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_morning_overrunning_lunch() {
        let config = SessionConfig {
            morning_minutes: 200,
            ..SessionConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ScheduleError::MorningOverrunsLunch {
                ends: hm(12, 20),
                lunch: hm(12, 0),
            })
        );
    }

    #[test]
    fn validate_rejects_lunch_after_afternoon() {
        let config = SessionConfig {
            afternoon_start: hm(11, 0),
            ..SessionConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ScheduleError::LunchAfterAfternoon { .. })
        ));
    }

    #[test]
    fn validate_rejects_afternoon_past_midnight() {
        let config = SessionConfig {
            afternoon_start: hm(22, 0),
            ..SessionConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ScheduleError::PastMidnight {
                session: "afternoon",
                ..
            })
        ));
        assert!(partition(sample_talks(), &config).is_err());
    }

    #[test]
    fn session_config_deserializes_partial_table() {
        let config: SessionConfig =
            serde_json::from_str(r#"{"morning_minutes":150,"sharing_floor":"15:30","strategy":"greedy"}"#)
                .unwrap();

        assert_eq!(config.morning_minutes, 150);
        assert_eq!(config.afternoon_minutes, 240);
        assert_eq!(config.sharing_floor, hm(15, 30));
        assert_eq!(config.strategy, SelectionStrategy::Greedy);
    }
}
