//! Merge decision result types

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// What the accumulator did with an inserted constraint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MergeOutcome {
    /// No existing entry was related; the constraint was appended
    Added {
        /// Position of the new entry
        index: usize,
    },
    /// An existing entry already implies the constraint
    Discarded {
        /// Position of the entry that implies it
        by: usize,
        /// Formatted text of that entry
        kept: String,
    },
    /// The constraint implies an existing entry and took its place
    Replaced {
        /// Position of the replaced entry
        index: usize,
        /// Formatted text of the replaced entry
        replaced: String,
        /// Later entries also implied by the constraint, removed from the list
        #[serde(skip_serializing_if = "Vec::is_empty")]
        pruned: Vec<String>,
    },
}

impl MergeOutcome {
    /// Returns true if the constraint ended up in the accumulator
    pub fn is_kept(&self) -> bool {
        !matches!(self, MergeOutcome::Discarded { .. })
    }
}

impl fmt::Display for MergeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MergeOutcome::Added { .. } => write!(f, "added"),
            MergeOutcome::Discarded { kept, .. } => write!(f, "implied by {}", kept),
            MergeOutcome::Replaced {
                replaced, pruned, ..
            } => {
                write!(f, "replaces {}", replaced)?;
                for p in pruned {
                    write!(f, ", {}", p)?;
                }
                Ok(())
            }
        }
    }
}

/// A constraint read from an input together with the accumulator's decision
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergeDecision {
    /// Position of the input in argument order
    pub input: usize,
    /// File the constraint was read from
    pub source: PathBuf,
    /// Formatted constraint
    pub constraint: String,
    pub outcome: MergeOutcome,
}

/// Counters over all decisions of a merge run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MergeStats {
    /// Constraints appended as new entries
    pub added: usize,
    /// Constraints dropped because an entry implied them
    pub discarded: usize,
    /// Constraints that replaced an existing entry
    pub replaced: usize,
    /// Additional entries removed by a replacing constraint
    pub pruned: usize,
}

impl MergeStats {
    /// Count one outcome
    pub fn record(&mut self, outcome: &MergeOutcome) {
        match outcome {
            MergeOutcome::Added { .. } => self.added += 1,
            MergeOutcome::Discarded { .. } => self.discarded += 1,
            MergeOutcome::Replaced { pruned, .. } => {
                self.replaced += 1;
                self.pruned += pruned.len();
            }
        }
    }

    /// Total number of constraints seen
    pub fn total(&self) -> usize {
        self.added + self.discarded + self.replaced
    }
}
