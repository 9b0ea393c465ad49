//! Presentation of schedules as text tables and JSON.

use std::fmt::Write;

use anyhow::Result;
use chrono::{Duration, NaiveTime};
use serde::Serialize;

use sched_core::{Schedule, SessionConfig, Talk, Timed, Track};

const SESSION_HEADER: &str = "Session Name";
const SHARING_TITLE: &str = "Sharing Session";
const LUNCH_TITLE: &str = "Lunch";

/// Formats a time of day on a 12-hour clock, e.g. `09:00AM`.
pub fn format_clock(time: NaiveTime) -> String {
    time.format("%I:%M%p").to_string()
}

/// Formats a talk's length, e.g. `45min` or `lightning`.
pub fn format_talk_duration(talk: &Talk) -> String {
    if talk.is_lightning() {
        "lightning".to_string()
    } else {
        format!("{}min", talk.minutes())
    }
}

/// Pairs each talk with its start time when run back to back from `start`.
pub fn start_times(talks: &[Talk], start: NaiveTime) -> Vec<(NaiveTime, &Talk)> {
    let mut current = start;
    talks
        .iter()
        .map(|talk| {
            let slot = (current, talk);
            current += Duration::minutes(i64::from(talk.minutes()));
            slot
        })
        .collect()
}

// ========== Text Output ==========

/// Formats the schedule as one table per track.
pub fn render_schedule(schedule: &Schedule, config: &SessionConfig) -> String {
    let mut output = String::new();

    if schedule.tracks.is_empty() {
        writeln!(output, "No talks to schedule.").unwrap();
    }

    for (index, track) in schedule.tracks.iter().enumerate() {
        if index > 0 {
            writeln!(output).unwrap();
        }
        render_track(&mut output, index + 1, track, config);
    }

    if !schedule.unplaceable.is_empty() {
        writeln!(output).unwrap();
        writeln!(output, "Unplaceable talks (longer than any session):").unwrap();
        for talk in &schedule.unplaceable {
            writeln!(output, "- {} ({})", talk.title(), format_talk_duration(talk)).unwrap();
        }
    }

    output
}

fn render_track(output: &mut String, number: usize, track: &Track, config: &SessionConfig) {
    let width = track
        .talks()
        .map(|t| t.title().chars().count())
        .chain([SESSION_HEADER.len(), SHARING_TITLE.len()])
        .max()
        .unwrap_or_default();

    writeln!(output, "Track {number}:").unwrap();
    writeln!(output).unwrap();
    push_row(output, width, "Time", SESSION_HEADER, "Duration");
    writeln!(
        output,
        "{}-|-{}-|-{}",
        "-".repeat(7),
        "-".repeat(width),
        "-".repeat(8)
    )
    .unwrap();

    for (start, talk) in start_times(&track.morning, config.morning_start) {
        push_row(
            output,
            width,
            &format_clock(start),
            talk.title(),
            &format_talk_duration(talk),
        );
    }
    push_row(output, width, &format_clock(config.lunch_start), LUNCH_TITLE, "");
    for (start, talk) in start_times(&track.afternoon, config.afternoon_start) {
        push_row(
            output,
            width,
            &format_clock(start),
            talk.title(),
            &format_talk_duration(talk),
        );
    }
    push_row(
        output,
        width,
        &format_clock(track.sharing_start),
        SHARING_TITLE,
        "",
    );
}

fn push_row(output: &mut String, width: usize, time: &str, name: &str, duration: &str) {
    if duration.is_empty() {
        writeln!(output, "{time:<7} | {name}").unwrap();
    } else {
        writeln!(output, "{time:<7} | {name:<width$} | {duration}").unwrap();
    }
}

// ========== JSON Output ==========

/// JSON schedule structure.
#[derive(Debug, Serialize)]
pub struct JsonSchedule<'a> {
    pub strategy: String,
    pub tracks: Vec<JsonTrack<'a>>,
    pub unplaceable: &'a [Talk],
}

#[derive(Debug, Serialize)]
pub struct JsonTrack<'a> {
    pub track: usize,
    pub morning: Vec<JsonSlot<'a>>,
    pub lunch: String,
    pub afternoon: Vec<JsonSlot<'a>>,
    pub sharing_start: String,
}

#[derive(Debug, Serialize)]
pub struct JsonSlot<'a> {
    pub start: String,
    pub title: &'a str,
    pub minutes: u32,
}

fn hh_mm(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

fn json_slots(talks: &[Talk], start: NaiveTime) -> Vec<JsonSlot<'_>> {
    start_times(talks, start)
        .into_iter()
        .map(|(at, talk)| JsonSlot {
            start: hh_mm(at),
            title: talk.title(),
            minutes: talk.minutes(),
        })
        .collect()
}

/// Formats the schedule as pretty-printed JSON with start times.
pub fn render_schedule_json(schedule: &Schedule, config: &SessionConfig) -> Result<String> {
    let report = JsonSchedule {
        strategy: config.strategy.to_string(),
        tracks: schedule
            .tracks
            .iter()
            .enumerate()
            .map(|(index, track)| JsonTrack {
                track: index + 1,
                morning: json_slots(&track.morning, config.morning_start),
                lunch: hh_mm(config.lunch_start),
                afternoon: json_slots(&track.afternoon, config.afternoon_start),
                sharing_start: hh_mm(track.sharing_start),
            })
            .collect(),
        unplaceable: &schedule.unplaceable,
    };

    Ok(serde_json::to_string_pretty(&report)?)
}
