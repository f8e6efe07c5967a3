// crates/shared-kernel/src/value_objects/difference.rs
use super::range::Range;

/// Per-boundary changes that turn one [`Range`] into another.
///
/// Produced by [`Range::difference`]. Each side carries either an addition or a
/// removal, never both, and a field is only present when it is non-empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RangeDifference {
    add_to_start: Option<Range>,
    remove_from_start: Option<Range>,
    add_to_end: Option<Range>,
    remove_from_end: Option<Range>,
}

impl RangeDifference {
    pub(crate) fn new(
        add_to_start: Option<Range>,
        remove_from_start: Option<Range>,
        add_to_end: Option<Range>,
        remove_from_end: Option<Range>,
    ) -> Self {
        debug_assert!(add_to_start.is_none() || remove_from_start.is_none());
        debug_assert!(add_to_end.is_none() || remove_from_end.is_none());
        Self {
            add_to_start: non_empty(add_to_start),
            remove_from_start: non_empty(remove_from_start),
            add_to_end: non_empty(add_to_end),
            remove_from_end: non_empty(remove_from_end),
        }
    }

    #[inline]
    pub const fn add_to_start(&self) -> Option<Range> {
        self.add_to_start
    }

    #[inline]
    pub const fn remove_from_start(&self) -> Option<Range> {
        self.remove_from_start
    }

    #[inline]
    pub const fn add_to_end(&self) -> Option<Range> {
        self.add_to_end
    }

    #[inline]
    pub const fn remove_from_end(&self) -> Option<Range> {
        self.remove_from_end
    }

    /// True when the two ranges were identical.
    pub const fn is_empty(&self) -> bool {
        self.add_to_start.is_none()
            && self.remove_from_start.is_none()
            && self.add_to_end.is_none()
            && self.remove_from_end.is_none()
    }

    /// Applies the difference through caller supplied actions.
    ///
    /// `add` sees `add_to_start` then `add_to_end`; `remove` then sees
    /// `remove_from_start` then `remove_from_end`. Absent fields are skipped.
    pub fn patch<A, R>(&self, mut add: A, mut remove: R)
    where
        A: FnMut(Range),
        R: FnMut(Range),
    {
        self.add_to_start.into_iter().chain(self.add_to_end).for_each(&mut add);
        self.remove_from_start
            .into_iter()
            .chain(self.remove_from_end)
            .for_each(&mut remove);
    }
}

fn non_empty(range: Option<Range>) -> Option<Range> {
    range.filter(|r| !r.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sides_are_dropped() {
        let diff = RangeDifference::new(Some(Range::EMPTY), None, None, Some(Range::EMPTY));
        assert!(diff.is_empty());
        assert_eq!(diff, RangeDifference::default());
    }

    #[test]
    fn patch_visits_adds_before_removes() {
        let a = Range::new(1, 2).unwrap();
        let b = Range::new(8, 9).unwrap();
        let diff = RangeDifference::new(Some(a), None, None, Some(b));
        let log = std::cell::RefCell::new(Vec::new());
        diff.patch(|r| log.borrow_mut().push(("add", r)), |r| log.borrow_mut().push(("remove", r)));
        assert_eq!(log.into_inner(), vec![("add", a), ("remove", b)]);
    }
}
