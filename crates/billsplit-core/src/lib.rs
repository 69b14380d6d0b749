#![deny(warnings)]
//! Allocation engine for the billsplit workspace.
//!
//! Two responsibilities share one data model, the contributor [`Roster`]:
//!
//! - split computation ([`split::calculate`]) turns a bill amount, tip percent
//!   and people count into formatted totals and per-contributor shares;
//! - roster reconciliation ([`roster`]) keeps the roster consistent with the
//!   people count and the [`SplitMode`], redistributing percentages evenly when
//!   membership or mode changes.
//!
//! Every operation is a pure transformation returning a new roster.
//! [`SplitSession`] wires them into explicit state transitions for a single
//! logical session.

/// Engine-wide constants
pub mod constants;
/// Error taxonomy for validation and allocation failures
pub mod error;
/// Raw input parsing and validation
pub mod input;
/// Roster reconciliation and mutation operations
pub mod roster;
/// Session state machine driving the engine from user events
pub mod session;
/// Split computation
pub mod split;

pub use billsplit_types::{
    CalculationResult, Contributor, ContributorId, Roster, SplitMode, SplitTotals,
};
pub use error::{SplitError, SplitResult};
pub use input::{InputField, RawInputs, SplitInputs};
pub use roster::{
    ContributionSummary, Reconciliation, RosterChange, add_contributor, contribution_summary,
    reconcile, remove_contributor, rename_contributor, set_percentage,
};
pub use session::{Notice, SplitSession};
pub use split::calculate;
