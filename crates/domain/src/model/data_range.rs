// crates/domain/src/model/data_range.rs
use std::{collections::VecDeque, iter};

use data_range_shared_kernel::{DomainError, DomainResult, Range};
use serde::Serialize;
use tracing::{debug, trace};

/// A window onto a wider sequence together with the locally known values.
///
/// `values[i]` holds the value for absolute index `range.start() + i`. A `None`
/// slot is an index inside the window whose value is not known yet; callers
/// fetch it out of band and install it with [`DataRange::update_values`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataRange<V> {
    range: Range,
    values: VecDeque<Option<V>>,
}

impl<V> Default for DataRange<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> DataRange<V> {
    /// Creates an empty window.
    #[must_use]
    pub fn new() -> Self {
        Self { range: Range::EMPTY, values: VecDeque::new() }
    }

    /// Creates a window starting at `start` holding `values`, all known.
    ///
    /// # Errors
    /// Returns [`DomainError::WindowOverflow`] when the window would end past `i64::MAX`.
    pub fn from_values<I>(start: i64, values: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = V>,
    {
        let values: VecDeque<Option<V>> = values.into_iter().map(Some).collect();
        let len = values.len();
        let end = i64::try_from(len)
            .ok()
            .and_then(|n| start.checked_add(n))
            .ok_or(DomainError::WindowOverflow { start, len })?;
        let range = Range::new(start, end)?;
        Ok(Self { range, values })
    }

    #[inline]
    pub fn range(&self) -> Range {
        self.range
    }

    #[inline]
    pub fn values(&self) -> &VecDeque<Option<V>> {
        &self.values
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Known value at an absolute index, if the index is inside the window.
    pub fn value_at(&self, index: i64) -> Option<&V> {
        self.offset_of(index)
            .and_then(|offset| self.values.get(offset))
            .and_then(Option::as_ref)
    }

    /// `(absolute index, value)` pairs for the whole window in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, Option<&V>)> + '_ {
        self.range.iter().zip(self.values.iter().map(Option::as_ref))
    }

    /// Values for every index of `query`, `None` where the index is outside
    /// the window or not known yet.
    pub fn get(&self, query: Range) -> Vec<Option<V>>
    where
        V: Clone,
    {
        let diff = self.range.difference(query);
        let keep_end = self.values.len().saturating_sub(len_of(diff.remove_from_end()));
        let keep_start = len_of(diff.remove_from_start()).min(keep_end);

        let mut out = Vec::with_capacity(query.len());
        out.extend(placeholders(len_of(diff.add_to_start())));
        out.extend(self.values.range(keep_start..keep_end).cloned());
        out.extend(placeholders(len_of(diff.add_to_end())));
        out
    }

    /// Moves the window to `new_range`.
    ///
    /// Values for indices present in both windows are kept, indices entering
    /// the window start out unknown and indices leaving it are dropped.
    pub fn update_range(&mut self, new_range: Range) {
        let diff = self.range.difference(new_range);
        debug!(from = %self.range, to = %new_range, ?diff, "moving data range window");
        self.range = new_range;

        // The difference never adds and removes on the same side.
        if let Some(added) = diff.add_to_start() {
            for placeholder in placeholders(added.len()) {
                self.values.push_front(placeholder);
            }
        } else if let Some(removed) = diff.remove_from_start() {
            self.values.drain(..removed.len());
        }
        if let Some(added) = diff.add_to_end() {
            self.values.extend(placeholders(added.len()));
        } else if let Some(removed) = diff.remove_from_end() {
            self.values.truncate(self.values.len() - removed.len());
        }

        debug_assert_eq!(self.values.len(), self.range.len());
    }

    /// Overwrites the values of `sub_range` that fall inside the window.
    ///
    /// `source[i]` is the value for index `sub_range.start() + i`; a short
    /// `source` leaves the remaining indices unknown.
    pub fn update_values(&mut self, sub_range: Range, source: &[V])
    where
        V: Clone,
    {
        self.apply_values(sub_range, |index| {
            usize::try_from(index.abs_diff(sub_range.start()))
                .ok()
                .and_then(|offset| source.get(offset))
                .cloned()
        });
    }

    /// Overwrites the values of `sub_range` that fall inside the window with
    /// `f(index)`, called once per affected index in ascending order.
    pub fn update_values_with<F>(&mut self, sub_range: Range, mut f: F)
    where
        F: FnMut(i64) -> V,
    {
        self.apply_values(sub_range, |index| Some(f(index)));
    }

    fn apply_values<F>(&mut self, sub_range: Range, mut value_for: F)
    where
        F: FnMut(i64) -> Option<V>,
    {
        let target = sub_range.intersection(self.range);
        trace!(requested = %sub_range, applied = %target, "updating values");
        for index in target {
            if let Some(slot) = self.offset_of(index).and_then(|offset| self.values.get_mut(offset)) {
                *slot = value_for(index);
            }
        }
    }

    /// Appends `items` to the end of the window.
    ///
    /// # Errors
    /// Returns [`DomainError::WindowOverflow`] when the window would end past
    /// `i64::MAX`; the window is left unchanged.
    pub fn push<I>(&mut self, items: I) -> DomainResult<()>
    where
        I: IntoIterator<Item = V>,
    {
        let items: Vec<V> = items.into_iter().collect();
        if items.is_empty() {
            return Ok(());
        }
        let added = items.len();
        let window = self
            .range
            .checked_add_after(added)
            .ok_or_else(|| self.overflow(added))?;
        self.range = window;
        self.values.extend(items.into_iter().map(Some));
        trace!(added, window = %self.range, "pushed values");
        Ok(())
    }

    /// Removes the last slot. `None` when the window is empty.
    pub fn pop(&mut self) -> Option<Option<V>> {
        if self.range.is_empty() {
            return None;
        }
        self.range = self.range.remove_last(1);
        trace!(window = %self.range, "popped value");
        self.values.pop_back()
    }

    /// Prepends `items` to the start of the window, keeping their order.
    ///
    /// # Errors
    /// Returns [`DomainError::WindowOverflow`] when the window would start
    /// before `i64::MIN`; the window is left unchanged.
    pub fn unshift<I>(&mut self, items: I) -> DomainResult<()>
    where
        I: IntoIterator<Item = V>,
    {
        let items: Vec<V> = items.into_iter().collect();
        if items.is_empty() {
            return Ok(());
        }
        let window = self
            .range
            .checked_add_before(items.len())
            .ok_or_else(|| self.overflow(items.len()))?;
        self.range = window;
        for item in items.into_iter().rev() {
            self.values.push_front(Some(item));
        }
        trace!(window = %self.range, "unshifted values");
        Ok(())
    }

    /// Removes the first slot. `None` when the window is empty.
    pub fn shift(&mut self) -> Option<Option<V>> {
        if self.range.is_empty() {
            return None;
        }
        self.range = self.range.remove_first(1);
        trace!(window = %self.range, "shifted value");
        self.values.pop_front()
    }

    fn overflow(&self, extra: usize) -> DomainError {
        DomainError::WindowOverflow {
            start: self.range.start(),
            len: self.values.len().saturating_add(extra),
        }
    }

    fn offset_of(&self, index: i64) -> Option<usize> {
        if !self.range.contains(index) {
            return None;
        }
        usize::try_from(index.abs_diff(self.range.start())).ok()
    }
}

fn len_of(range: Option<Range>) -> usize {
    range.map_or(0, Range::len)
}

fn placeholders<V>(count: usize) -> impl Iterator<Item = Option<V>> {
    iter::repeat_with(|| None).take(count)
}
