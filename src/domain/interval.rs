//! Version intervals over the Debian version ordering
//!
//! An interval is a pair of `std::ops::Bound`s. Legend used below: `∞` is
//! unbounded, `[1,2]` is `>= 1, <= 2`, `]1,2[` is `> 1, < 2`.

use super::DebVersion;
use std::cmp::Ordering;
use std::ops::Bound::{self, Excluded, Included, Unbounded};

/// A continuous span of versions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interval {
    pub lower: Bound<DebVersion>,
    pub upper: Bound<DebVersion>,
}

/// Order two lower bounds by where the interval starts
///
/// `[v` starts before `]v`, and `∞` starts before everything.
pub fn cmp_lower(left: &Bound<DebVersion>, right: &Bound<DebVersion>) -> Ordering {
    match (left, right) {
        (Unbounded, Unbounded) => Ordering::Equal,
        (Unbounded, _) => Ordering::Less,
        (_, Unbounded) => Ordering::Greater,
        (Included(l), Included(r)) | (Excluded(l), Excluded(r)) => l.cmp(r),
        (Included(l), Excluded(r)) => l.cmp(r).then(Ordering::Less),
        (Excluded(l), Included(r)) => l.cmp(r).then(Ordering::Greater),
    }
}

/// Order two upper bounds by where the interval ends
///
/// `v[` ends before `v]`, and `∞` ends after everything.
pub fn cmp_upper(left: &Bound<DebVersion>, right: &Bound<DebVersion>) -> Ordering {
    match (left, right) {
        (Unbounded, Unbounded) => Ordering::Equal,
        (Unbounded, _) => Ordering::Greater,
        (_, Unbounded) => Ordering::Less,
        (Included(l), Included(r)) | (Excluded(l), Excluded(r)) => l.cmp(r),
        (Included(l), Excluded(r)) => l.cmp(r).then(Ordering::Greater),
        (Excluded(l), Included(r)) => l.cmp(r).then(Ordering::Less),
    }
}

impl Interval {
    /// Create an interval from its two bounds
    pub fn new(lower: Bound<DebVersion>, upper: Bound<DebVersion>) -> Self {
        Self { lower, upper }
    }

    /// The interval containing every version
    pub fn any() -> Self {
        Self::new(Unbounded, Unbounded)
    }

    /// The interval containing exactly one version
    pub fn exactly(version: DebVersion) -> Self {
        Self::new(Included(version.clone()), Included(version))
    }

    /// Returns true if both sides are unbounded
    pub fn is_any(&self) -> bool {
        matches!((&self.lower, &self.upper), (Unbounded, Unbounded))
    }

    /// Returns the version if this interval is `[v,v]`
    pub fn as_point(&self) -> Option<&DebVersion> {
        match (&self.lower, &self.upper) {
            (Included(l), Included(u)) if l == u => Some(l),
            _ => None,
        }
    }

    /// Returns true if no version satisfies the interval
    pub fn is_empty(&self) -> bool {
        match (&self.lower, &self.upper) {
            (Unbounded, _) | (_, Unbounded) => false,
            (Included(l), Included(u)) => l > u,
            (Included(l), Excluded(u)) | (Excluded(l), Included(u)) | (Excluded(l), Excluded(u)) => {
                l >= u
            }
        }
    }

    /// Returns true if the version lies inside the interval
    pub fn contains(&self, version: &DebVersion) -> bool {
        let above_lower = match &self.lower {
            Unbounded => true,
            Included(l) => version >= l,
            Excluded(l) => version > l,
        };
        let below_upper = match &self.upper {
            Unbounded => true,
            Included(u) => version <= u,
            Excluded(u) => version < u,
        };
        above_lower && below_upper
    }

    /// Returns true if every version of `other` also lies inside `self`
    ///
    /// An empty interval is contained in anything.
    pub fn contains_interval(&self, other: &Interval) -> bool {
        other.is_empty()
            || (cmp_lower(&self.lower, &other.lower) != Ordering::Greater
                && cmp_upper(&other.upper, &self.upper) != Ordering::Greater)
    }

    /// The versions satisfying both intervals
    pub fn intersect(&self, other: &Interval) -> Interval {
        let lower = if cmp_lower(&self.lower, &other.lower) == Ordering::Less {
            other.lower.clone()
        } else {
            self.lower.clone()
        };
        let upper = if cmp_upper(&self.upper, &other.upper) == Ordering::Greater {
            other.upper.clone()
        } else {
            self.upper.clone()
        };
        Interval::new(lower, upper)
    }

    /// Returns true if `self` ends before `next` starts with a version in between
    ///
    /// ```text
    /// |----|             |----[
    ///         |-----|         ]-----|
    /// ```
    /// are separate, while touching intervals sharing an included endpoint are not.
    pub fn ends_before(&self, next: &Interval) -> bool {
        match (&self.upper, &next.lower) {
            (Unbounded, _) | (_, Unbounded) => false,
            (Included(u), Included(l)) | (Included(u), Excluded(l)) | (Excluded(u), Included(l)) => {
                u < l
            }
            (Excluded(u), Excluded(l)) => u <= l,
        }
    }

    /// The smallest interval covering both
    ///
    /// Only meaningful when the two intervals overlap or touch.
    pub fn hull(&self, other: &Interval) -> Interval {
        let lower = if cmp_lower(&other.lower, &self.lower) == Ordering::Less {
            other.lower.clone()
        } else {
            self.lower.clone()
        };
        let upper = if cmp_upper(&other.upper, &self.upper) == Ordering::Greater {
            other.upper.clone()
        } else {
            self.upper.clone()
        };
        Interval::new(lower, upper)
    }
}

impl Default for Interval {
    fn default() -> Self {
        Self::any()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> DebVersion {
        DebVersion::parse(s).unwrap()
    }

    fn at_least(s: &str) -> Interval {
        Interval::new(Included(v(s)), Unbounded)
    }

    fn below(s: &str) -> Interval {
        Interval::new(Unbounded, Excluded(v(s)))
    }

    fn range(lower: &str, upper: &str) -> Interval {
        Interval::new(Included(v(lower)), Excluded(v(upper)))
    }

    #[test]
    fn test_cmp_lower_tie_break() {
        assert_eq!(cmp_lower(&Included(v("1.0")), &Excluded(v("1.0"))), Ordering::Less);
        assert_eq!(cmp_lower(&Excluded(v("1.0")), &Included(v("1.0"))), Ordering::Greater);
        assert_eq!(cmp_lower(&Unbounded, &Included(v("~"))), Ordering::Less);
        assert_eq!(cmp_lower(&Excluded(v("1.0")), &Included(v("1.1"))), Ordering::Less);
    }

    #[test]
    fn test_cmp_upper_tie_break() {
        assert_eq!(cmp_upper(&Excluded(v("1.0")), &Included(v("1.0"))), Ordering::Less);
        assert_eq!(cmp_upper(&Included(v("1.0")), &Excluded(v("1.0"))), Ordering::Greater);
        assert_eq!(cmp_upper(&Unbounded, &Included(v("99"))), Ordering::Greater);
        assert_eq!(cmp_upper(&Included(v("1.0")), &Excluded(v("1.1"))), Ordering::Less);
    }

    #[test]
    fn test_contains() {
        let interval = range("1.0", "2.0");
        assert!(interval.contains(&v("1.0")));
        assert!(interval.contains(&v("1.9")));
        assert!(interval.contains(&v("2.0~rc1")));
        assert!(!interval.contains(&v("2.0")));
        assert!(!interval.contains(&v("1.0~beta")));
        assert!(Interval::any().contains(&v("")));
    }

    #[test]
    fn test_contains_interval() {
        assert!(at_least("1.0").contains_interval(&at_least("2.0")));
        assert!(!at_least("2.0").contains_interval(&at_least("1.0")));
        assert!(Interval::any().contains_interval(&range("1.0", "2.0")));
        assert!(at_least("1.0").contains_interval(&range("1.0", "2.0")));
        assert!(!below("2.0").contains_interval(&Interval::new(Unbounded, Included(v("2.0")))));
        assert!(Interval::new(Unbounded, Included(v("2.0"))).contains_interval(&below("2.0")));
    }

    #[test]
    fn test_contains_empty_interval() {
        let empty = range("2.0", "1.0");
        assert!(empty.is_empty());
        assert!(at_least("5.0").contains_interval(&empty));
    }

    #[test]
    fn test_is_empty() {
        assert!(!Interval::exactly(v("1.0")).is_empty());
        assert!(range("1.0", "1.0").is_empty());
        assert!(Interval::new(Excluded(v("1.0")), Included(v("1.0"))).is_empty());
        assert!(!Interval::any().is_empty());
    }

    #[test]
    fn test_intersect() {
        let both = at_least("1.0").intersect(&below("2.0"));
        assert_eq!(both, range("1.0", "2.0"));

        let tighter = Interval::new(Included(v("1.0")), Unbounded)
            .intersect(&Interval::new(Excluded(v("1.0")), Unbounded));
        assert_eq!(tighter.lower, Excluded(v("1.0")));
    }

    #[test]
    fn test_point() {
        let point = at_least("1.0").intersect(&Interval::new(Unbounded, Included(v("1.0"))));
        assert_eq!(point.as_point(), Some(&v("1.0")));
        assert!(at_least("1.0").as_point().is_none());
    }

    #[test]
    fn test_ends_before() {
        assert!(range("1.0", "2.0").ends_before(&range("3.0", "4.0")));
        assert!(range("1.0", "2.0").ends_before(&Interval::new(Excluded(v("2.0")), Unbounded)));
        assert!(!range("1.0", "2.0").ends_before(&range("2.0", "3.0")));
        assert!(!range("1.0", "3.0").ends_before(&range("2.0", "4.0")));
    }

    #[test]
    fn test_hull() {
        let hull = range("1.0", "2.0").hull(&range("2.0", "3.0"));
        assert_eq!(hull, range("1.0", "3.0"));
        assert!(below("1.0").hull(&at_least("0.5")).is_any());
    }
}
