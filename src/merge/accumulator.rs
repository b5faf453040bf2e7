//! Accumulation of constraints into a minimal, most restrictive list
//!
//! Each inserted constraint is compared against the entries collected so far:
//! - an entry that implies it makes it redundant, so it is discarded
//! - if it implies an entry, it replaces that entry in place
//! - otherwise it is appended
//!
//! After every insert no entry implies another, so merging the rendered
//! output again yields the same output.

use super::MergeOutcome;
use crate::domain::IntervalSet;

/// Ordered list of constraints where no entry implies another
#[derive(Debug, Clone, Default)]
pub struct Accumulator {
    entries: Vec<IntervalSet>,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a constraint and report what happened to it
    pub fn insert(&mut self, set: IntervalSet) -> MergeOutcome {
        if let Some(by) = self.entries.iter().position(|entry| entry.implies(&set)) {
            return MergeOutcome::Discarded {
                by,
                kept: self.entries[by].formatted(),
            };
        }

        let Some(index) = self.entries.iter().position(|entry| set.implies(entry)) else {
            self.entries.push(set);
            return MergeOutcome::Added {
                index: self.entries.len() - 1,
            };
        };

        let replaced = std::mem::replace(&mut self.entries[index], set);

        // Entries before `index` are not implied, otherwise position() would have found them
        let mut pruned = Vec::new();
        let mut i = index + 1;
        while i < self.entries.len() {
            if self.entries[index].implies(&self.entries[i]) {
                pruned.push(self.entries.remove(i).formatted());
            } else {
                i += 1;
            }
        }

        MergeOutcome::Replaced {
            index,
            replaced: replaced.formatted(),
            pruned,
        }
    }

    /// The entries in insertion order
    pub fn entries(&self) -> &[IntervalSet] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Formatted entries, sorted lexicographically
    pub fn formatted_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self.entries.iter().map(IntervalSet::formatted).collect();
        lines.sort();
        lines
    }

    /// The deps file text: sorted lines, each terminated by a newline
    pub fn render(&self) -> String {
        self.formatted_lines()
            .into_iter()
            .map(|line| line + "\n")
            .collect()
    }
}

impl Extend<IntervalSet> for Accumulator {
    fn extend<I: IntoIterator<Item = IntervalSet>>(&mut self, iter: I) {
        for set in iter {
            self.insert(set);
        }
    }
}

impl FromIterator<IntervalSet> for Accumulator {
    fn from_iter<I: IntoIterator<Item = IntervalSet>>(iter: I) -> Self {
        let mut accumulator = Accumulator::new();
        accumulator.extend(iter);
        accumulator
    }
}
