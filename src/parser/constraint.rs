//! Dependency constraint line parser
//!
//! Handles constraint formats:
//! - Bare package: `libc6` (any version)
//! - Single clause: `libc6 (>= 2.17)`
//! - Intersected clauses: `libfoo (>= 1.0, << 2.0)`
//! - Alternatives of one package: `libfoo (<< 1.0) | libfoo (>= 2.0)`
//!
//! Operators: `>=`, `<=`, `>`, `<`, `=` and the Debian strict forms `>>`, `<<`.

use crate::domain::{DebVersion, Interval, IntervalSet};
use crate::error::ConstraintError;
use regex::Regex;
use std::ops::Bound::{Excluded, Included, Unbounded};
use std::sync::LazyLock;

// Regex patterns for constraint lines
static ALTERNATIVE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z0-9][A-Za-z0-9+._:-]*)(?:\s*\((.*)\))?$").unwrap()
});
static CLAUSE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([<>=!~]*)\s*([A-Za-z0-9.+~:-]*)$").unwrap());

/// Parse one constraint line into the set of versions it allows
pub fn parse_interval_set(line: &str) -> Result<IntervalSet, ConstraintError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(ConstraintError::parse(line, "empty constraint"));
    }

    let mut package: Option<&str> = None;
    let mut intervals = Vec::new();
    for alternative in trimmed.split('|') {
        let (name, interval) = parse_alternative(trimmed, alternative.trim())?;
        match package {
            None => package = Some(name),
            Some(first) if first == name => {}
            Some(first) => {
                return Err(ConstraintError::parse(
                    trimmed,
                    format!("alternatives name different packages '{}' and '{}'", first, name),
                ))
            }
        }
        intervals.push(interval);
    }

    let package = package.ok_or_else(|| ConstraintError::parse(trimmed, "missing package name"))?;
    Ok(IntervalSet::new(package, intervals))
}

/// Parse `package` or `package (clause, ...)` into the package name and the
/// intersection of its clauses
fn parse_alternative<'a>(
    line: &str,
    alternative: &'a str,
) -> Result<(&'a str, Interval), ConstraintError> {
    let caps = ALTERNATIVE_RE.captures(alternative).ok_or_else(|| {
        ConstraintError::parse(
            line,
            format!(
                "expected 'package' or 'package (op version, ...)', found '{}'",
                alternative
            ),
        )
    })?;
    // Group 1 is mandatory in the pattern
    let package = caps.get(1).map_or("", |m| m.as_str());

    let Some(body) = caps.get(2).map(|m| m.as_str().trim()) else {
        return Ok((package, Interval::any()));
    };
    if body.is_empty() {
        return Err(ConstraintError::parse(line, "empty version constraint"));
    }

    let mut interval = Interval::any();
    for clause in body.split(',') {
        interval = interval.intersect(&parse_clause(line, clause.trim())?);
    }
    Ok((package, interval))
}

/// Parse a single `op version` clause into the interval it describes
fn parse_clause(line: &str, clause: &str) -> Result<Interval, ConstraintError> {
    let caps = CLAUSE_RE
        .captures(clause)
        .ok_or_else(|| ConstraintError::parse(line, format!("malformed clause '{}'", clause)))?;
    let op = caps.get(1).map_or("", |m| m.as_str());
    let version = caps.get(2).map_or("", |m| m.as_str());

    if op.is_empty() {
        return Err(ConstraintError::parse(
            line,
            format!("missing operator in clause '{}'", clause),
        ));
    }
    if version.is_empty() {
        return Err(ConstraintError::parse(
            line,
            format!("missing version after '{}'", op),
        ));
    }

    let version = DebVersion::parse(version).map_err(|e| ConstraintError::version(line, e))?;
    let interval = match op {
        ">=" => Interval::new(Included(version), Unbounded),
        ">" | ">>" => Interval::new(Excluded(version), Unbounded),
        "<=" => Interval::new(Unbounded, Included(version)),
        "<" | "<<" => Interval::new(Unbounded, Excluded(version)),
        "=" => Interval::exactly(version),
        other => {
            return Err(ConstraintError::parse(
                line,
                format!("unknown operator '{}'", other),
            ))
        }
    };
    Ok(interval)
}
