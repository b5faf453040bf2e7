//! Merge logic for dependency constraints
//!
//! This module provides:
//! - The accumulator that keeps only the most restrictive constraints
//! - Outcome types describing what happened to each inserted constraint

mod accumulator;
mod outcome;

pub use accumulator::Accumulator;
pub use outcome::{MergeDecision, MergeOutcome, MergeStats};
