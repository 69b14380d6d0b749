//! Billsplit Types
//!
//! This crate defines the data model shared across the billsplit workspace
//! (currently `billsplit-core`, `billsplit-calculator` and `billsplit-cli`):
//! contributors, the roster that holds them, the split mode and the
//! calculation result handed to presentation layers.

#![deny(warnings)]
#![deny(missing_docs)]

mod types;
pub use types::{
    CalculationResult, Contributor, ContributorId, Roster, SplitMode, SplitTotals, ZERO_AMOUNT,
};
