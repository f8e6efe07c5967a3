//! Half-open integer ranges and the sliding data windows built on them.
//!
//! [`Range`] is an immutable `[start, end)` interval whose [`Range::difference`]
//! splits any change of window into independent start and end deltas.
//! [`DataRange`] pairs a range with the locally known values for it and keeps
//! the two aligned as the window grows, shrinks or shifts.
#![allow(clippy::multiple_crate_versions)]

pub use data_range_domain::{DataRange, model};
pub use data_range_shared_kernel::{
    DataRangeError, DomainError, DomainResult, ErrorContext, Range, RangeDifference, Result, error,
    value_objects,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
