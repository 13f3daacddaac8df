//! Duplicated-line counting over reported duplicate ranges.
//!
//! ## Algorithm
//!
//! Clone detectors report every copy of a block as a line range, so one
//! physical line may be covered by several ranges (a 3-way clone, or two
//! clones that overlap). Summing range lengths would count such lines
//! more than once.
//!
//! 1. Drop ranges shorter than the tolerance.
//! 2. Group the remaining ranges by (recipe, file).
//! 3. Mark every line of every range of a group in a bitset sized to the
//!    smaller of the file's line count and the furthest range end.
//! 4. The group's duplicated lines are the bitset's population count.
//!
//! A group too wide for a bitset is counted by sweeping its ranges in
//! start order instead; both give the same union length.
//!
//! The container total is the sum over groups, so it never exceeds the
//! sum of the files' line counts.

mod bitset;

use std::collections::{BTreeMap, BTreeSet};

use log::warn;

use crate::container::FactContainer;
use crate::facts::{DuplicatedRange, Fact, FactKind};

pub use bitset::LineSet;

/// Distinct duplicated lines of a container.
pub fn duplicated_lines(c: &dyn FactContainer, tolerance: u64) -> u64 {
    duplicated_lines_by_file(c, tolerance).values().sum()
}

/// Distinct duplicated lines per `(recipe, file)`.
pub fn duplicated_lines_by_file(
    c: &dyn FactContainer,
    tolerance: u64,
) -> BTreeMap<(&str, &str), u64> {
    let mut groups: BTreeMap<(&str, &str), Vec<&DuplicatedRange>> = BTreeMap::new();
    for fact in c.query(FactKind::Duplication) {
        let Fact::Duplication(range) = fact else {
            continue;
        };
        if range.len() < tolerance {
            continue;
        }
        groups
            .entry((range.recipe.as_str(), range.file.as_str()))
            .or_default()
            .push(range);
    }

    groups
        .into_iter()
        .map(|(key, ranges)| (key, count_group(&ranges)))
        .collect()
}

/// Other places each `(recipe, file)` shares duplicated blocks with, from
/// the copies the detector reported. Files without reported copies are
/// left out.
pub fn clone_locations(
    c: &dyn FactContainer,
) -> BTreeMap<(&str, &str), BTreeSet<(&str, &str)>> {
    let mut locations: BTreeMap<(&str, &str), BTreeSet<(&str, &str)>> = BTreeMap::new();
    for fact in c.query(FactKind::Duplication) {
        let Fact::Duplication(range) = fact else {
            continue;
        };
        let here = (range.recipe.as_str(), range.file.as_str());
        for block in &range.blocks {
            let there = (block.recipe.as_str(), block.file.as_str());
            if there != here {
                locations.entry(here).or_default().insert(there);
            }
        }
    }
    locations
}

/// Widest bitset allocated for one group. Groups spanning more lines are
/// counted by merging sorted ranges.
const MAX_BITSET_LINES: u64 = 1 << 24;

fn count_group(ranges: &[&DuplicatedRange]) -> u64 {
    let lines = ranges.iter().map(|r| r.lines).max().unwrap_or(0);
    for range in ranges.iter().filter(|r| r.end > lines) {
        warn!(
            "{}: duplicated range {}..{} exceeds {} lines, clamped",
            range.file, range.start, range.end, lines
        );
    }

    // No index at or past the furthest range end is ever set.
    let span = ranges
        .iter()
        .map(|r| r.end)
        .max()
        .unwrap_or(0)
        .min(lines);
    match usize::try_from(span) {
        Ok(len) if span <= MAX_BITSET_LINES => {
            let mut set = LineSet::with_len(len);
            for range in ranges {
                let start = usize::try_from(range.start).unwrap_or(len);
                let end = usize::try_from(range.end.min(span)).unwrap_or(len);
                set.insert_range(start, end);
            }
            set.count() as u64
        }
        _ => merged_len(ranges, span),
    }
}

/// Union length of `ranges` clipped to `limit`, by sweeping sorted ranges.
fn merged_len(ranges: &[&DuplicatedRange], limit: u64) -> u64 {
    let mut spans: Vec<(u64, u64)> = ranges
        .iter()
        .map(|r| (r.start, r.end.min(limit)))
        .filter(|(start, end)| start < end)
        .collect();
    spans.sort_unstable();

    let mut total = 0;
    let mut reach = 0;
    for (start, end) in spans {
        let start = start.max(reach);
        if end > start {
            total += end - start;
            reach = end;
        }
    }
    total
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
