//! Version constraints of a single package
//!
//! An `IntervalSet` is the meaning of one dependency line such as
//! `libc6 (>= 2.17)` or `libfoo (>= 1.0, < 2.0)`: the set of versions of the
//! named package that satisfy it, stored as sorted, disjoint intervals.

use super::{DebVersion, Interval};
use serde::Serialize;
use std::fmt;
use std::ops::Bound::{Excluded, Included, Unbounded};

/// A package together with the versions it may be satisfied by
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalSet {
    package: String,
    intervals: Vec<Interval>,
}

impl IntervalSet {
    /// Creates a new IntervalSet, sorting and coalescing the intervals
    pub fn new(package: impl Into<String>, intervals: Vec<Interval>) -> Self {
        Self {
            package: package.into(),
            intervals: normalize(intervals),
        }
    }

    /// Creates an unconstrained IntervalSet matching every version
    pub fn any(package: impl Into<String>) -> Self {
        Self::new(package, vec![Interval::any()])
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    /// The intervals in ascending order
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// Returns true if some interval contains the version
    pub fn contains(&self, version: &DebVersion) -> bool {
        self.intervals.iter().any(|i| i.contains(version))
    }

    /// Returns true if every version satisfying `self` also satisfies `other`
    ///
    /// Constraints on different packages never imply one another.
    pub fn implies(&self, other: &IntervalSet) -> bool {
        self.package == other.package
            && self.intervals.iter().all(|interval| {
                interval.is_empty() || other.intervals.iter().any(|o| o.contains_interval(interval))
            })
    }

    /// Canonical text of the constraint, e.g. `foo (>= 1.0, < 2.0)`
    pub fn formatted(&self) -> String {
        let alternatives: Vec<String> = self
            .intervals
            .iter()
            .map(|interval| format_interval(&self.package, interval))
            .collect();
        alternatives.join(" | ")
    }
}

fn format_interval(package: &str, interval: &Interval) -> String {
    if interval.is_any() {
        return package.to_string();
    }
    if let Some(version) = interval.as_point() {
        return format!("{} (= {})", package, version);
    }

    let mut clauses = Vec::with_capacity(2);
    match &interval.lower {
        Included(v) => clauses.push(format!(">= {}", v)),
        Excluded(v) => clauses.push(format!("> {}", v)),
        Unbounded => {}
    }
    match &interval.upper {
        Included(v) => clauses.push(format!("<= {}", v)),
        Excluded(v) => clauses.push(format!("< {}", v)),
        Unbounded => {}
    }

    format!("{} ({})", package, clauses.join(", "))
}

/// Sort intervals by their start and merge those that overlap or touch
///
/// Empty intervals are dropped unless nothing else is left, in which case the
/// first one is kept so the set still formats to what was written.
fn normalize(mut intervals: Vec<Interval>) -> Vec<Interval> {
    if intervals.iter().all(Interval::is_empty) {
        intervals.truncate(1);
        return intervals;
    }

    intervals.retain(|i| !i.is_empty());
    intervals.sort_by(|a, b| super::interval::cmp_lower(&a.lower, &b.lower));

    let mut merged: Vec<Interval> = Vec::with_capacity(intervals.len());
    for interval in intervals {
        match merged.last_mut() {
            Some(last) if !last.ends_before(&interval) => *last = last.hull(&interval),
            _ => merged.push(interval),
        }
    }
    merged
}

impl fmt::Display for IntervalSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl Serialize for IntervalSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.formatted())
    }
}
