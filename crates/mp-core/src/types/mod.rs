//! Common types used across mp-* crates

pub mod common;
pub mod region;

pub use common::Unit;
pub use region::Region;
