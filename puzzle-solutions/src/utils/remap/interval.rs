//! Half-open integer intervals and the primitives the remap pipeline is built on
//!
//! Every interval here is half-open: `[start, end)` contains `start` and
//! excludes `end`, so `[1, 3)` and `[3, 5)` share no integer but touch.

use itertools::Itertools;
use std::fmt;

use super::error::RemapError;

/// An integer interval `[start, end)` with `start <= end`
///
/// Ordered by `start`, then by `end`. An interval with `start == end` is
/// empty and covers no integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Interval {
    start: i64,
    end: i64,
}

/// Whether two intervals that merely touch (`a.end == b.start`) are merged
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MergePolicy {
    /// Merge intervals that overlap or touch; yields the minimal disjoint cover
    #[default]
    Touching,
    /// Merge only intervals sharing at least one integer
    Overlapping,
}

impl Interval {
    /// Create `[start, end)`
    ///
    /// # Panics
    ///
    /// Panics if `start > end`.
    pub const fn new(start: i64, end: i64) -> Self {
        assert!(start <= end, "interval start must not exceed its end");
        Self { start, end }
    }

    /// Create `[start, start + len)` from untrusted input
    pub fn from_start_len(start: i64, len: i64) -> Result<Self, RemapError> {
        if len < 0 {
            return Err(RemapError::invalid(format!(
                "negative length {len} for range starting at {start}"
            )));
        }
        let end = start.checked_add(len).ok_or_else(|| {
            RemapError::invalid(format!("range {start} + {len} overflows"))
        })?;
        Ok(Self { start, end })
    }

    pub const fn start(&self) -> i64 {
        self.start
    }

    pub const fn end(&self) -> i64 {
        self.end
    }

    /// Number of integers covered
    pub const fn len(&self) -> u64 {
        self.end.abs_diff(self.start)
    }

    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub const fn contains(&self, value: i64) -> bool {
        self.start <= value && value < self.end
    }

    /// True iff both intervals share at least one integer
    pub const fn overlaps(&self, other: &Interval) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.start < other.end
            && other.start < self.end
    }

    /// The sub-interval covered by both, if any
    pub fn intersect(&self, other: &Interval) -> Option<Interval> {
        self.overlaps(other).then(|| Interval {
            start: self.start.max(other.start),
            end: self.end.min(other.end),
        })
    }

    /// Convex hull of both intervals when `policy` allows merging them
    ///
    /// Intervals separated by a gap never merge.
    pub fn union_if_overlapping(&self, other: &Interval, policy: MergePolicy) -> Option<Interval> {
        let mergeable = match policy {
            MergePolicy::Touching => self.start <= other.end && other.start <= self.end,
            MergePolicy::Overlapping => self.overlaps(other),
        };
        mergeable.then(|| Interval {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        })
    }

    /// The part of `self` strictly before `other.start`
    pub fn prefix(&self, other: &Interval) -> Option<Interval> {
        (self.start < other.start).then(|| Interval {
            start: self.start,
            end: self.end.min(other.start),
        })
    }

    /// The part of `self` strictly after `other.end`
    pub fn suffix(&self, other: &Interval) -> Option<Interval> {
        (self.end > other.end).then(|| Interval {
            start: self.start.max(other.end),
            end: self.end,
        })
    }

    /// Translate both bounds by `offset`; `None` on overflow
    pub fn shift(&self, offset: i64) -> Option<Interval> {
        Some(Interval {
            start: self.start.checked_add(offset)?,
            end: self.end.checked_add(offset)?,
        })
    }
}

impl From<Interval> for std::ops::Range<i64> {
    fn from(interval: Interval) -> Self {
        interval.start..interval.end
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// Reduce `ranges` to a sorted list of disjoint intervals covering the same integers
///
/// Empty intervals are dropped. With [`MergePolicy::Touching`] the result is
/// also non-touching, i.e. the minimal disjoint cover.
pub fn minimize<I>(ranges: I, policy: MergePolicy) -> Vec<Interval>
where
    I: IntoIterator<Item = Interval>,
{
    ranges
        .into_iter()
        .filter(|r| !r.is_empty())
        .sorted_unstable()
        .coalesce(|acc, next| acc.union_if_overlapping(&next, policy).ok_or((acc, next)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(start: i64, end: i64) -> Interval {
        Interval::new(start, end)
    }

    #[test]
    fn test_overlaps() {
        assert!(iv(1, 3).overlaps(&iv(2, 4)));
        assert!(iv(1, 5).overlaps(&iv(3, 7)));
        assert!(!iv(1, 3).overlaps(&iv(3, 5)), "touching is not overlapping");
        assert!(!iv(3, 5).overlaps(&iv(1, 3)));
        assert!(!iv(5, 5).overlaps(&iv(0, 10)), "empty overlaps nothing");
    }

    #[test]
    fn test_intersect() {
        assert_eq!(iv(1, 5).intersect(&iv(3, 7)), Some(iv(3, 5)));
        assert_eq!(iv(3, 7).intersect(&iv(1, 5)), Some(iv(3, 5)));
        assert_eq!(iv(0, 10).intersect(&iv(2, 4)), Some(iv(2, 4)));
        assert_eq!(iv(79, 93).intersect(&iv(98, 100)), None);
        assert_eq!(iv(1, 3).intersect(&iv(3, 9)), None);
    }

    #[test]
    fn test_union_touching_policy() {
        assert_eq!(
            iv(1, 3).union_if_overlapping(&iv(3, 9), MergePolicy::Touching),
            Some(iv(1, 9))
        );
        assert_eq!(
            iv(1, 5).union_if_overlapping(&iv(3, 7), MergePolicy::Touching),
            Some(iv(1, 7))
        );
        assert_eq!(iv(1, 3).union_if_overlapping(&iv(4, 9), MergePolicy::Touching), None);
    }

    #[test]
    fn test_union_overlapping_policy() {
        assert_eq!(iv(1, 3).union_if_overlapping(&iv(3, 9), MergePolicy::Overlapping), None);
        assert_eq!(
            iv(2, 9).union_if_overlapping(&iv(1, 3), MergePolicy::Overlapping),
            Some(iv(1, 9))
        );
    }

    #[test]
    fn test_prefix() {
        assert_eq!(iv(1, 10).prefix(&iv(5, 20)), Some(iv(1, 5)));
        assert_eq!(iv(1, 5).prefix(&iv(100, 300)), Some(iv(1, 5)));
        assert_eq!(iv(5, 10).prefix(&iv(5, 20)), None);
        assert_eq!(iv(6, 10).prefix(&iv(5, 20)), None);
    }

    #[test]
    fn test_suffix() {
        assert_eq!(iv(1, 10).suffix(&iv(2, 5)), Some(iv(5, 10)));
        assert_eq!(iv(234, 255).suffix(&iv(2, 5)), Some(iv(234, 255)));
        assert_eq!(iv(1, 5).suffix(&iv(2, 5)), None);
        assert_eq!(iv(1, 4).suffix(&iv(2, 5)), None);
    }

    #[test]
    fn test_shift() {
        assert_eq!(iv(50, 98).shift(2), Some(iv(52, 100)));
        assert_eq!(iv(10, 20).shift(-10), Some(iv(0, 10)));
        assert_eq!(iv(0, i64::MAX).shift(1), None);
    }

    #[test]
    fn test_from_start_len() {
        assert_eq!(Interval::from_start_len(79, 14), Ok(iv(79, 93)));
        assert_eq!(Interval::from_start_len(7, 0), Ok(iv(7, 7)));
        assert!(matches!(
            Interval::from_start_len(7, -1),
            Err(RemapError::InvalidInput(_))
        ));
        assert!(Interval::from_start_len(i64::MAX, 1).is_err());
    }

    #[test]
    fn test_minimize_merges_overlapping() {
        assert_eq!(minimize([iv(1, 3), iv(2, 9)], MergePolicy::Touching), vec![iv(1, 9)]);
        assert_eq!(minimize([iv(2, 9), iv(1, 3)], MergePolicy::Overlapping), vec![iv(1, 9)]);
    }

    #[test]
    fn test_minimize_touching_depends_on_policy() {
        assert_eq!(minimize([iv(1, 3), iv(3, 9)], MergePolicy::Touching), vec![iv(1, 9)]);
        assert_eq!(
            minimize([iv(1, 3), iv(3, 9)], MergePolicy::Overlapping),
            vec![iv(1, 3), iv(3, 9)]
        );
    }

    #[test]
    fn test_minimize_input_order_is_irrelevant() {
        let expected = vec![iv(1, 3), iv(3, 9)];
        for input in [
            [iv(1, 3), iv(5, 9), iv(3, 9)],
            [iv(1, 3), iv(3, 9), iv(5, 9)],
            [iv(3, 9), iv(5, 9), iv(1, 3)],
        ] {
            assert_eq!(minimize(input, MergePolicy::Overlapping), expected);
            assert_eq!(minimize(input, MergePolicy::Touching), vec![iv(1, 9)]);
        }
    }

    #[test]
    fn test_minimize_keeps_gaps_and_drops_empty() {
        assert_eq!(
            minimize([iv(10, 12), iv(4, 4), iv(0, 2), iv(1, 2)], MergePolicy::Touching),
            vec![iv(0, 2), iv(10, 12)]
        );
        assert!(minimize([], MergePolicy::Touching).is_empty());
    }

    #[test]
    fn test_display_and_range_conversion() {
        assert_eq!(iv(3, 5).to_string(), "[3, 5)");
        assert_eq!(std::ops::Range::from(iv(3, 5)), 3..5);
        assert_eq!(iv(3, 5).len(), 2);
        assert!(iv(3, 5).contains(4));
        assert!(!iv(3, 5).contains(5));
    }
}
