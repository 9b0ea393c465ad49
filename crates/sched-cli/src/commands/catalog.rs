//! Catalog command: list the built-in talks.

use std::io::Write;

use anyhow::Result;
use sched_core::default_talks;

use crate::format::format_talk_duration;

/// Runs the catalog command.
pub fn run<W: Write>(writer: &mut W, json: bool) -> Result<()> {
    let talks = default_talks();

    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&talks)?)?;
        return Ok(());
    }

    for talk in &talks {
        writeln!(writer, "{}, {}", talk.title(), format_talk_duration(talk))?;
    }
    Ok(())
}
