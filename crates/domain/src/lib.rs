// crates/domain/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod model;

pub use model::DataRange;
