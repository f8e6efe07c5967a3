// crates/domain/src/model.rs
pub mod data_range;

pub use data_range::DataRange;
