//! Schedule command: partition talks into tracks and print the timetable.

use std::io::Write;

use anyhow::{Context, Result};

use crate::format::{render_schedule, render_schedule_json};
use crate::{Config, ScheduleArgs, input};

/// Runs the schedule command.
pub fn run<W: Write>(writer: &mut W, config: &Config, args: &ScheduleArgs) -> Result<()> {
    let talks = input::load_talks(args.input.input.as_deref(), config.max_talks)?;

    let mut session = config.session.clone();
    if let Some(strategy) = args.input.strategy {
        session.strategy = strategy;
    }

    let schedule = sched_core::partition(talks, &session).context("failed to schedule talks")?;
    tracing::info!(
        tracks = schedule.tracks.len(),
        scheduled = schedule.scheduled_count(),
        unplaceable = schedule.unplaceable.len(),
        strategy = %session.strategy,
        "scheduled talks"
    );

    let text = render_schedule(&schedule, &session);
    if args.json {
        writeln!(writer, "{}", render_schedule_json(&schedule, &session)?)?;
    } else {
        write!(writer, "{text}")?;
    }

    if let Some(path) = &args.output {
        std::fs::write(path, &text)
            .with_context(|| format!("failed to write schedule to {}", path.display()))?;
        tracing::info!(path = %path.display(), "schedule saved");
    }

    if (args.strict || config.strict) && !schedule.unplaceable.is_empty() {
        anyhow::bail!(
            "{} talk(s) are longer than any session and were not scheduled",
            schedule.unplaceable.len()
        );
    }

    Ok(())
}
