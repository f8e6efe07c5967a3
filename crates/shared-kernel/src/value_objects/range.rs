// crates/shared-kernel/src/value_objects/range.rs
use std::{
    cmp::{max, min},
    fmt,
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use super::difference::RangeDifference;
use crate::error::{DomainError, DomainResult};

/// Immutable half-open interval `[start, end)` over absolute indices.
///
/// Every empty range is normalised to [`Range::EMPTY`], so two empty ranges
/// always compare equal no matter how they were produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RangeRepr", into = "RangeRepr")]
#[must_use]
pub struct Range {
    start: i64,
    end: i64,
}

impl Range {
    /// The canonical empty range, `[0, 0)`.
    pub const EMPTY: Self = Self { start: 0, end: 0 };

    /// Builds `[start, end)`.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidRange`] when `start > end`.
    pub fn new(start: i64, end: i64) -> DomainResult<Self> {
        if start > end {
            return Err(DomainError::InvalidRange { start, end });
        }
        Ok(Self::from_ordered(start, end))
    }

    #[inline]
    pub const fn empty() -> Self {
        Self::EMPTY
    }

    // Callers guarantee `start <= end`.
    #[inline]
    const fn from_ordered(start: i64, end: i64) -> Self {
        debug_assert!(start <= end);
        if start == end { Self::EMPTY } else { Self { start, end } }
    }

    #[inline]
    pub const fn start(self) -> i64 {
        self.start
    }

    #[inline]
    pub const fn end(self) -> i64 {
        self.end
    }

    /// Number of indices covered, `end - start`.
    #[inline]
    pub fn len(self) -> usize {
        usize::try_from(self.end.abs_diff(self.start)).unwrap_or(usize::MAX)
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub const fn contains(self, index: i64) -> bool {
        self.start <= index && index < self.end
    }

    /// The `count` indices immediately preceding this range.
    ///
    /// Clamps at `i64::MIN`, so the result can be shorter than `count`.
    pub fn before(self, count: usize) -> Self {
        Self::from_ordered(self.start.saturating_sub(span(count)), self.start)
    }

    /// The `count` indices immediately following this range.
    ///
    /// Clamps at `i64::MAX`, so the result can be shorter than `count`.
    pub fn after(self, count: usize) -> Self {
        Self::from_ordered(self.end, self.end.saturating_add(span(count)))
    }

    /// The first `min(count, len)` indices of this range.
    pub fn first(self, count: usize) -> Self {
        Self::from_ordered(self.start, min(self.start.saturating_add(span(count)), self.end))
    }

    /// The last `min(count, len)` indices of this range.
    pub fn last(self, count: usize) -> Self {
        Self::from_ordered(max(self.start, self.end.saturating_sub(span(count))), self.end)
    }

    /// Extends the start by `count`, clamping at `i64::MIN`.
    pub fn add_before(self, count: usize) -> Self {
        Self::from_ordered(self.start.saturating_sub(span(count)), self.end)
    }

    /// Extends the end by `count`, clamping at `i64::MAX`.
    pub fn add_after(self, count: usize) -> Self {
        Self::from_ordered(self.start, self.end.saturating_add(span(count)))
    }

    /// Extends the start by exactly `count`, or `None` past `i64::MIN`.
    pub fn checked_add_before(self, count: usize) -> Option<Self> {
        let count = i64::try_from(count).ok()?;
        Some(Self::from_ordered(self.start.checked_sub(count)?, self.end))
    }

    /// Extends the end by exactly `count`, or `None` past `i64::MAX`.
    pub fn checked_add_after(self, count: usize) -> Option<Self> {
        let count = i64::try_from(count).ok()?;
        Some(Self::from_ordered(self.start, self.end.checked_add(count)?))
    }

    /// Drops `count` indices from the start; collapses to empty when `count >= len`.
    pub fn remove_first(self, count: usize) -> Self {
        let new_start = self.start.saturating_add(span(count));
        Self::from_ordered(new_start, max(new_start, self.end))
    }

    /// Drops `count` indices from the end; collapses to empty when `count >= len`.
    pub fn remove_last(self, count: usize) -> Self {
        let new_end = self.end.saturating_sub(span(count));
        Self::from_ordered(min(self.start, new_end), new_end)
    }

    #[inline]
    pub const fn starts_before(self, other: Self) -> bool {
        self.start < other.start
    }

    #[inline]
    pub const fn ends_after(self, other: Self) -> bool {
        self.end > other.end
    }

    /// True when the two ranges share at least one index.
    pub const fn intersects(self, other: Self) -> bool {
        if self.start <= other.start {
            self.end > other.start
        } else {
            other.end > self.start
        }
    }

    pub fn intersection(self, other: Self) -> Self {
        if self.intersects(other) {
            Self::from_ordered(max(self.start, other.start), min(self.end, other.end))
        } else {
            Self::EMPTY
        }
    }

    /// The part of `self` lying strictly before `other.start`.
    pub fn difference_before(self, other: Self) -> Self {
        if self.start >= other.start {
            return Self::EMPTY;
        }
        Self::from_ordered(self.start, min(self.end, other.start))
    }

    /// The part of `self` lying at or after `other.end`.
    pub fn difference_after(self, other: Self) -> Self {
        if self.end <= other.end {
            return Self::EMPTY;
        }
        Self::from_ordered(max(self.start, other.end), self.end)
    }

    /// Describes how to turn `self` into `other`.
    ///
    /// The start and end boundaries are compared independently, so the result
    /// holds at most one change per side: either indices to add in front of
    /// `self` or indices to trim from its front, and likewise at the back.
    pub fn difference(self, other: Self) -> RangeDifference {
        let (add_to_start, remove_from_start) = if other.starts_before(self) {
            (Some(other.difference_before(self)), None)
        } else if self.starts_before(other) {
            (None, Some(self.difference_before(other)))
        } else {
            (None, None)
        };
        let (add_to_end, remove_from_end) = if other.ends_after(self) {
            (Some(other.difference_after(self)), None)
        } else if self.ends_after(other) {
            (None, Some(self.difference_after(other)))
        } else {
            (None, None)
        };
        RangeDifference::new(add_to_start, remove_from_start, add_to_end, remove_from_end)
    }

    /// Calls `f` once per index, in ascending order.
    pub fn for_each<F>(self, f: F)
    where
        F: FnMut(i64),
    {
        self.iter().for_each(f);
    }

    #[inline]
    pub const fn iter(self) -> std::ops::Range<i64> {
        self.start..self.end
    }
}

#[inline]
fn span(count: usize) -> i64 {
    i64::try_from(count).unwrap_or(i64::MAX)
}

impl Default for Range {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl IntoIterator for Range {
    type Item = i64;
    type IntoIter = std::ops::Range<i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

impl FromStr for Range {
    type Err = DomainError;

    /// Parses the display form, e.g. `"[23, 45)"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| DomainError::InvalidRangeLiteral {
            input: s.to_string(),
            reason: reason.to_string(),
        };
        let inner = s
            .trim()
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| invalid("expected the form [start, end)"))?;
        let (start, end) = inner
            .split_once(',')
            .ok_or_else(|| invalid("missing ',' between bounds"))?;
        let start = parse_bound(start).map_err(|e| invalid(&format!("bad start: {e}")))?;
        let end = parse_bound(end).map_err(|e| invalid(&format!("bad end: {e}")))?;
        Self::new(start, end)
    }
}

fn parse_bound(s: &str) -> Result<i64, std::num::ParseIntError> {
    s.trim().parse::<i64>()
}

mod convert {
    use super::{DomainError, Range};

    impl TryFrom<(i64, i64)> for Range {
        type Error = DomainError;

        fn try_from((start, end): (i64, i64)) -> Result<Self, Self::Error> {
            Self::new(start, end)
        }
    }

    impl TryFrom<[i64; 2]> for Range {
        type Error = DomainError;

        fn try_from([start, end]: [i64; 2]) -> Result<Self, Self::Error> {
            Self::new(start, end)
        }
    }

    impl TryFrom<std::ops::Range<i64>> for Range {
        type Error = DomainError;

        fn try_from(range: std::ops::Range<i64>) -> Result<Self, Self::Error> {
            Self::new(range.start, range.end)
        }
    }

    impl From<Range> for std::ops::Range<i64> {
        fn from(range: Range) -> Self {
            range.iter()
        }
    }
}

/// Wire shape for serde; deserialisation is validated through [`Range::new`].
#[derive(Serialize, Deserialize)]
struct RangeRepr {
    start: i64,
    end: i64,
}

impl TryFrom<RangeRepr> for Range {
    type Error = DomainError;

    fn try_from(repr: RangeRepr) -> Result<Self, Self::Error> {
        Self::new(repr.start, repr.end)
    }
}

impl From<Range> for RangeRepr {
    fn from(range: Range) -> Self {
        Self { start: range.start, end: range.end }
    }
}
