//! Single-session talk selection.
//!
//! Both selectors answer the same question: given a pool and a capacity in
//! minutes, which talks should fill the session? They never mutate the pool
//! and report their choice as positions into it, so the caller can remove
//! exactly the chosen talks even when the pool holds duplicates.
//!
//! # Strategies
//!
//! - [`select_best_fit`]: optimal fill. Finds the largest total that fits,
//!   preferring the first such subset in index order. Pseudo-polynomial in
//!   the capacity.
//! - [`select_greedy`]: longest talks first, skipping any that overflow.
//!   Linearithmic, but can leave minutes on the table.

use std::cmp::Reverse;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::talk::{Timed, ValidationError};

/// Talks chosen for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// Positions of the chosen talks in the pool the selector was given.
    pub indices: Vec<usize>,

    /// Sum of the chosen talks' durations.
    pub total_minutes: u32,
}

impl Selection {
    /// Returns true if nothing was chosen.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Resolves the chosen positions against the pool they were taken from.
    pub fn items<'a, T>(&self, pool: &'a [T]) -> Vec<&'a T> {
        self.indices.iter().filter_map(|&i| pool.get(i)).collect()
    }
}

/// Which selector fills each session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionStrategy {
    /// Optimal fill via [`select_best_fit`].
    #[default]
    Exact,
    /// Approximate fill via [`select_greedy`].
    Greedy,
}

impl SelectionStrategy {
    /// Runs this strategy over `items`.
    pub fn select<T: Timed>(self, items: &[T], capacity: u32) -> Selection {
        match self {
            Self::Exact => select_best_fit(items, capacity),
            Self::Greedy => select_greedy(items, capacity),
        }
    }

    /// String representation for configuration and output.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Greedy => "greedy",
        }
    }
}

impl fmt::Display for SelectionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SelectionStrategy {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exact" => Ok(Self::Exact),
            "greedy" => Ok(Self::Greedy),
            _ => Err(ValidationError::InvalidStrategy {
                value: s.to_string(),
            }),
        }
    }
}

/// Finds the subset of `items` with the largest total duration not
/// exceeding `capacity`.
///
/// Items are decided in index order, trying "include" before "skip". Only a
/// strictly larger total replaces the current best, so among equally good
/// subsets the first one reached wins and repeated calls return the same
/// selection. Returned indices are ascending.
///
/// Runs in `O(n * capacity)` through a table of reachable sums. When that
/// table would be too large (huge durations and capacities), falls back to a
/// pruned depth-first search with the same result.
pub fn select_best_fit<T: Timed>(items: &[T], capacity: u32) -> Selection {
    let durations: Vec<u32> = items.iter().map(Timed::minutes).collect();

    match SuffixSums::build(&durations, capacity) {
        Some(sums) => sums.first_best_fit(&durations),
        None => search_best_fit(&durations, capacity),
    }
}

/// Largest table [`SuffixSums`] will allocate, in cells.
const MAX_TABLE_CELLS: usize = 1 << 24;

/// Sums reachable by each suffix of a pool.
///
/// Row `i` marks every total some subset of `durations[i..]` adds up to,
/// for totals `0..stride`.
struct SuffixSums {
    stride: usize,
    reach: Vec<bool>,
}

impl SuffixSums {
    fn build(durations: &[u32], capacity: u32) -> Option<Self> {
        // Totals above the sum of everything that fits are never reached.
        let fitting: u64 = durations
            .iter()
            .filter(|&&d| d <= capacity)
            .map(|&d| u64::from(d))
            .sum();
        let limit = fitting.min(u64::from(capacity));

        let stride = usize::try_from(limit).ok()?.checked_add(1)?;
        let cells = stride.checked_mul(durations.len() + 1)?;
        if cells > MAX_TABLE_CELLS {
            return None;
        }

        let mut reach = vec![false; cells];
        reach[durations.len() * stride] = true;
        for (i, &duration) in durations.iter().enumerate().rev() {
            let (head, tail) = reach.split_at_mut((i + 1) * stride);
            let row = &mut head[i * stride..];
            let next = &tail[..stride];
            row.copy_from_slice(next);

            let shift = usize::try_from(duration).unwrap_or(usize::MAX);
            if shift < stride {
                for (cell, &reachable) in row[shift..].iter_mut().zip(next) {
                    *cell |= reachable;
                }
            }
        }

        Some(Self { stride, reach })
    }

    fn contains(&self, index: usize, total: u32) -> bool {
        usize::try_from(total)
            .ok()
            .filter(|&total| total < self.stride)
            .is_some_and(|total| self.reach[index * self.stride + total])
    }

    /// Walks the items in order, including each one whenever the best total
    /// is still reachable with it. This is the first best subset the
    /// include-before-skip search would reach.
    fn first_best_fit(&self, durations: &[u32]) -> Selection {
        let best = self.reach[..self.stride]
            .iter()
            .rposition(|&reachable| reachable)
            .and_then(|total| u32::try_from(total).ok())
            .unwrap_or_default();

        let mut selection = Selection {
            indices: Vec::new(),
            total_minutes: best,
        };
        let mut needed = best;
        for (i, &duration) in durations.iter().enumerate() {
            if needed == 0 {
                break;
            }
            if duration <= needed && self.contains(i + 1, needed - duration) {
                selection.indices.push(i);
                needed -= duration;
            }
        }
        selection
    }
}

/// Exhaustive include-before-skip search for [`select_best_fit`].
fn search_best_fit(durations: &[u32], capacity: u32) -> Selection {
    // remaining[i] = total duration of durations[i..]
    let mut remaining = vec![0_u64; durations.len() + 1];
    for i in (0..durations.len()).rev() {
        remaining[i] = remaining[i + 1] + u64::from(durations[i]);
    }

    let mut search = BestFitSearch {
        durations,
        remaining: &remaining,
        capacity,
        path: Vec::with_capacity(durations.len()),
        best: Selection::default(),
    };
    search.explore(0, 0);
    search.best
}

/// Depth-first state for [`search_best_fit`].
struct BestFitSearch<'a> {
    durations: &'a [u32],
    remaining: &'a [u64],
    capacity: u32,
    /// Indices included on the current branch.
    path: Vec<usize>,
    best: Selection,
}

impl BestFitSearch<'_> {
    /// Visits the node where items before `index` are decided and the
    /// included ones sum to `sum` (always `<= capacity`).
    fn explore(&mut self, index: usize, sum: u32) {
        if sum > self.best.total_minutes {
            self.best = Selection {
                indices: self.path.clone(),
                total_minutes: sum,
            };
        }

        if self.best.total_minutes == self.capacity || index == self.durations.len() {
            return;
        }

        // Nothing below this node can strictly beat the current best.
        if u64::from(sum) + self.remaining[index] <= u64::from(self.best.total_minutes) {
            return;
        }

        let duration = self.durations[index];
        if duration <= self.capacity - sum {
            self.path.push(index);
            self.explore(index + 1, sum + duration);
            self.path.pop();
        }

        self.explore(index + 1, sum);
    }
}

/// Fills `capacity` with the longest talks first.
///
/// Items are visited by descending duration (ties keep pool order). An item
/// that would overflow is passed over and later, shorter items are still
/// considered. Returned indices are in the order taken.
pub fn select_greedy<T: Timed>(items: &[T], capacity: u32) -> Selection {
    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_by_key(|&i| Reverse(items[i].minutes()));

    let mut selection = Selection::default();
    for i in order {
        let duration = items[i].minutes();
        if duration <= capacity - selection.total_minutes {
            selection.indices.push(i);
            selection.total_minutes += duration;
        }
    }
    selection
}
