//! Talk list parsing.
//!
//! One talk per line, `Title, Duration`. The duration is a number of minutes
//! (`45`, `45min`) or `lightning` for a five-minute talk. Blank lines and
//! `#` comments are skipped; a line reading `done` ends the list so the same
//! format works when typing talks into stdin.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;
use sched_core::{LIGHTNING_MINUTES, Talk, default_talks};

/// Titles may not contain digits.
static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[^0-9]*$").unwrap());

/// Returns true if `title` is non-blank and contains no digits.
pub fn is_valid_title(title: &str) -> bool {
    !title.trim().is_empty() && TITLE_RE.is_match(title)
}

/// Parses a duration such as `45`, `45min`, `45 mins` or `lightning`.
pub fn parse_duration(s: &str) -> Option<u32> {
    let s = s.trim().to_lowercase();
    if s == "lightning" {
        return Some(LIGHTNING_MINUTES);
    }
    let digits = s
        .strip_suffix("mins")
        .or_else(|| s.strip_suffix("min"))
        .unwrap_or(&s)
        .trim();
    digits.parse().ok()
}

/// Parses a single `Title, Duration` line.
///
/// The split happens at the last comma, so titles may contain commas.
pub fn parse_talk_line(line: &str) -> Result<Talk> {
    let Some((title, duration)) = line.rsplit_once(',') else {
        anyhow::bail!("expected 'Title, Duration' (e.g. 'Teaching Innovations, 45')");
    };

    let title = title.trim();
    if !is_valid_title(title) {
        anyhow::bail!("invalid title '{title}': titles must be non-empty and contain no digits");
    }

    let Some(minutes) = parse_duration(duration) else {
        anyhow::bail!(
            "invalid duration '{}': use minutes (e.g. 45) or 'lightning'",
            duration.trim()
        );
    };

    Ok(Talk::new(title, minutes)?)
}

/// Reads a talk list until end of input or a `done` line.
pub fn read_talks<R: BufRead>(reader: R) -> Result<Vec<Talk>> {
    let mut talks = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.context("failed to read talk list")?;
        let trimmed = line.trim();
        if trimmed.eq_ignore_ascii_case("done") {
            break;
        }
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let talk =
            parse_talk_line(trimmed).with_context(|| format!("invalid talk on line {}", index + 1))?;
        talks.push(talk);
    }
    Ok(talks)
}

/// Loads talks from a file, from stdin (`-`), or the built-in catalog.
///
/// Fails if more than `max_talks` talks are given.
pub fn load_talks(source: Option<&Path>, max_talks: usize) -> Result<Vec<Talk>> {
    let talks = match source {
        None => default_talks(),
        Some(path) if path.as_os_str() == "-" => read_talks(std::io::stdin().lock())?,
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open talk list {}", path.display()))?;
            read_talks(BufReader::new(file))
                .with_context(|| format!("failed to parse {}", path.display()))?
        }
    };

    if talks.len() > max_talks {
        anyhow::bail!(
            "{} talks exceeds the limit of {max_talks}; raise max_talks in the config to allow more",
            talks.len()
        );
    }

    tracing::debug!(count = talks.len(), "loaded talks");
    Ok(talks)
}
