#![deny(warnings)]
//! Arithmetic primitives for the billsplit allocation engine.
//!
//! This crate provides the pure currency formatter used for every monetary
//! figure, plus the built-in percentage and allocation calculators the
//! engine composes into a split.

pub mod built_in;
pub mod currency;

// Re-export calculator implementations
pub use built_in::even_share::even_share;
pub use built_in::percentage_add::{percentage_add, percentage_of};
pub use built_in::proportional_allocator::{allocate, percentage_share};
pub use currency::format_currency;
