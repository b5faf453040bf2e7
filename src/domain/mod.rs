//! Core domain models for debver-merge
//!
//! This module contains the fundamental types used throughout the application:
//! - Debian version parsing and ordering
//! - Version intervals with inclusive/exclusive bounds
//! - Per-package interval sets with implication and canonical formatting

mod interval;
mod interval_set;
mod version;

pub use interval::{cmp_lower, cmp_upper, Interval};
pub use interval_set::IntervalSet;
pub use version::{compare_fragment, DebVersion};
