//! Fit command: fill a single session from a talk list.

use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use sched_core::{SelectionStrategy, Talk};

use crate::format::format_talk_duration;
use crate::{Config, InputArgs, input};

/// JSON fit structure.
#[derive(Debug, Serialize)]
struct JsonFit<'a> {
    capacity: u32,
    strategy: SelectionStrategy,
    total_minutes: u32,
    talks: Vec<&'a Talk>,
}

/// Runs the fit command.
pub fn run<W: Write>(
    writer: &mut W,
    config: &Config,
    input_args: &InputArgs,
    capacity: u32,
    json: bool,
) -> Result<()> {
    let talks = input::load_talks(input_args.input.as_deref(), config.max_talks)?;
    let strategy = input_args.strategy.unwrap_or(config.session.strategy);

    let selection = strategy.select(&talks, capacity);
    let chosen = selection.items(&talks);
    tracing::debug!(
        capacity,
        total = selection.total_minutes,
        count = chosen.len(),
        "selected talks"
    );

    if json {
        let fit = JsonFit {
            capacity,
            strategy,
            total_minutes: selection.total_minutes,
            talks: chosen,
        };
        writeln!(writer, "{}", serde_json::to_string_pretty(&fit)?)?;
        return Ok(());
    }

    writeln!(
        writer,
        "Selected {} talks ({} of {capacity} minutes, {strategy}):",
        chosen.len(),
        selection.total_minutes
    )?;
    for talk in chosen {
        writeln!(writer, "- {} ({})", talk.title(), format_talk_duration(talk))?;
    }

    Ok(())
}
