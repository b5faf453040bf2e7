//! Parsers for dependency files
//!
//! This module provides:
//! - Constraint line parsing (`package (op version, ...)`) into interval sets
//! - Dependency file reading with comment and blank line skipping

mod constraint;
mod deps_file;

pub use constraint::parse_interval_set;
pub use deps_file::{constraint_lines, parse_deps};
