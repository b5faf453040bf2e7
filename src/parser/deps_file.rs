//! Dependency file reading
//!
//! A deps file holds one constraint per line. Blank lines and lines starting
//! with `#` are skipped.

use crate::domain::IntervalSet;
use crate::error::InputError;
use crate::parser::parse_interval_set;
use std::path::Path;

/// Iterate over the constraint lines of a deps file
///
/// Yields the 1-based line number together with the trimmed line.
pub fn constraint_lines(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
}

/// Parse every constraint of a deps file, in file order
///
/// The first malformed line aborts parsing; the error carries its location.
pub fn parse_deps(path: &Path, content: &str) -> Result<Vec<IntervalSet>, InputError> {
    constraint_lines(content)
        .map(|(line_number, line)| {
            parse_interval_set(line).map_err(|e| InputError::new(path, line_number, e))
        })
        .collect()
}
