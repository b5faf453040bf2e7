//! Debian package version strings
//!
//! The version format is `[epoch:]upstream_version[-debian_revision]`:
//! - The epoch is everything before the first `:` and defaults to 0
//! - The debian revision is everything after the last `-` and defaults to empty
//! - The upstream version is whatever remains in between
//!
//! Ordering follows Debian policy: epochs compare numerically, then the
//! upstream version and the revision are compared fragment by fragment with
//! [`compare_fragment`].

use crate::error::VersionError;
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A parsed Debian version
///
/// Equality is ordering equality, so `1.0` and `1.00` are equal even though
/// they display differently.
#[derive(Debug, Clone)]
pub struct DebVersion {
    /// The text the version was parsed from
    raw: String,
    /// Epoch digits without leading zeros, `0` when absent
    epoch: String,
    upstream_version: String,
    debian_revision: String,
}

impl DebVersion {
    /// Decompose a version string into epoch, upstream version and revision
    ///
    /// Missing components are filled in with their defaults. The only error
    /// is an epoch prefix that is not a non-negative integer.
    pub fn parse(version: &str) -> Result<Self, VersionError> {
        let (epoch, rest) = match version.split_once(':') {
            Some((epoch, rest)) => (parse_epoch(version, epoch)?, rest),
            None => ("0".to_string(), version),
        };
        let (upstream_version, debian_revision) = rest.rsplit_once('-').unwrap_or((rest, ""));

        Ok(Self {
            raw: version.to_string(),
            epoch,
            upstream_version: upstream_version.to_string(),
            debian_revision: debian_revision.to_string(),
        })
    }

    /// The epoch as decimal digits, `0` when absent
    ///
    /// Epochs are not limited to a machine integer; they compare numerically
    /// at any length.
    pub fn epoch(&self) -> &str {
        &self.epoch
    }

    pub fn upstream_version(&self) -> &str {
        &self.upstream_version
    }

    /// The debian revision, empty when absent
    pub fn debian_revision(&self) -> &str {
        &self.debian_revision
    }

    /// The original text of the version
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

fn parse_epoch(version: &str, epoch: &str) -> Result<String, VersionError> {
    if epoch.is_empty() || !epoch.bytes().all(|b| b.is_ascii_digit()) {
        return Err(VersionError::invalid_epoch(version, epoch));
    }
    match epoch.trim_start_matches('0') {
        "" => Ok("0".to_string()),
        digits => Ok(digits.to_string()),
    }
}

/// Sort weight of a single character inside a non-digit run
///
/// `~` sorts before the end of a run, letters sort before everything else.
/// Digits never reach this function inside a run; they share the weight of
/// the end of the run.
fn weight(c: Option<u8>) -> i32 {
    match c {
        None => 0,
        Some(b'~') => -1,
        Some(c) if c.is_ascii_digit() => 0,
        Some(c) if c.is_ascii_alphabetic() => i32::from(c),
        Some(c) => i32::from(c) + 256,
    }
}

fn split_digits(s: &[u8]) -> (&[u8], &[u8]) {
    let end = s.iter().position(|b| !b.is_ascii_digit()).unwrap_or(s.len());
    s.split_at(end)
}

/// Compare two digit runs numerically, without overflow for long runs
fn compare_numeric(a: &[u8], b: &[u8]) -> Ordering {
    let strip = |s: &[u8]| -> usize { s.iter().take_while(|&&b| b == b'0').count() };
    let a = &a[strip(a)..];
    let b = &b[strip(b)..];
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Compare two upstream versions or two debian revisions
///
/// The strings are consumed as alternating non-digit and digit runs. Non-digit
/// runs compare character by character by [`weight`], digit runs compare as
/// integers with an empty run counting as zero. The first difference decides.
pub fn compare_fragment(a: &str, b: &str) -> Ordering {
    let mut a = a.as_bytes();
    let mut b = b.as_bytes();

    while !a.is_empty() || !b.is_empty() {
        loop {
            let ca = a.first().copied().filter(|c| !c.is_ascii_digit());
            let cb = b.first().copied().filter(|c| !c.is_ascii_digit());
            if ca.is_none() && cb.is_none() {
                break;
            }
            match weight(ca).cmp(&weight(cb)) {
                Ordering::Equal => {}
                other => return other,
            }
            if ca.is_some() {
                a = &a[1..];
            }
            if cb.is_some() {
                b = &b[1..];
            }
        }

        let (num_a, rest_a) = split_digits(a);
        let (num_b, rest_b) = split_digits(b);
        match compare_numeric(num_a, num_b) {
            Ordering::Equal => {}
            other => return other,
        }
        a = rest_a;
        b = rest_b;
    }

    Ordering::Equal
}

impl FromStr for DebVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Ord for DebVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_numeric(self.epoch.as_bytes(), other.epoch.as_bytes())
            .then_with(|| compare_fragment(&self.upstream_version, &other.upstream_version))
            .then_with(|| compare_fragment(&self.debian_revision, &other.debian_revision))
    }
}

impl PartialOrd for DebVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for DebVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for DebVersion {}

impl fmt::Display for DebVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for DebVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}
