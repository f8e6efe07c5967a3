// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{DataRangeError, DomainError, DomainResult, ErrorContext, Result};

pub mod error;
pub mod value_objects;

pub use value_objects::{Range, RangeDifference};
