// crates/shared-kernel/src/value_objects/mod.rs
pub mod difference;
pub mod range;

pub use difference::RangeDifference;
pub use range::Range;
