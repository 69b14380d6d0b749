//! Roster reconciliation and mutation.
//!
//! All operations borrow the current roster and return a new one; callers
//! commit the result as the new state. Membership changes always redistribute
//! percentages evenly, discarding custom values.

use crate::constants::allocation::{FULL_SHARE, PERCENTAGE_TOLERANCE};
use crate::constants::limits::MAX_PEOPLE;
use crate::error::{SplitError, SplitResult};
use billsplit_types::{Contributor, ContributorId, Roster, SplitMode};
use serde::Serialize;
use std::fmt;
use tracing::{debug, instrument};

/// Roster and mode after reconciliation. The mode differs from the requested
/// one only when custom contribution was forced off.
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciliation {
    pub roster: Roster,
    pub mode: SplitMode,
}

/// New roster after a membership change, with the people count the caller
/// must adopt to stay in sync.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterChange {
    pub roster: Roster,
    pub number_of_people: u32,
}

impl RosterChange {
    fn new(roster: Roster) -> Self {
        let number_of_people = u32::try_from(roster.len()).unwrap_or(u32::MAX);
        Self { roster, number_of_people }
    }
}

/// Brings the roster in line with the people count and mode.
///
/// Run when the people count or the mode changes, not on name or percentage
/// edits. A single person cannot use custom contribution, so that mode is
/// forced back to even split. In even split a roster of the wrong length is
/// rebuilt from scratch; custom rosters are left alone. People counts are
/// clamped to `1..=MAX_PEOPLE`.
#[instrument(skip(previous), fields(previous_len = previous.len()))]
pub fn reconcile(previous: &Roster, number_of_people: u32, mode: SplitMode) -> Reconciliation {
    let number_of_people = number_of_people.clamp(1, MAX_PEOPLE);
    let mode = if number_of_people == 1 && mode.is_custom() {
        debug!("custom contribution disabled for a single person");
        SplitMode::EvenSplit
    } else {
        mode
    };

    let roster = match mode {
        SplitMode::EvenSplit if previous.len() != number_of_people as usize => {
            debug!(number_of_people, "rebuilding even roster");
            Roster::even(number_of_people as usize)
        }
        _ => previous.clone(),
    };

    Reconciliation { roster, mode }
}

/// Appends a contributor with the next unused id and splits evenly across
/// everyone, the newcomer included.
#[instrument(skip(roster), fields(len = roster.len()))]
pub fn add_contributor(roster: &Roster) -> RosterChange {
    let id = roster.next_id();
    let mut contributors = roster.as_slice().to_vec();
    contributors.push(Contributor::new(id, 0.0));
    debug!(id, "contributor added");
    RosterChange::new(redistribute(contributors))
}

/// Removes the contributor with `id` and splits evenly across the rest.
///
/// Fails with [`SplitError::CannotRemove`] when one contributor or fewer
/// remains. An unknown id removes nobody but still redistributes.
#[instrument(skip(roster), fields(len = roster.len()))]
pub fn remove_contributor(roster: &Roster, id: ContributorId) -> SplitResult<RosterChange> {
    if roster.len() <= 1 {
        return Err(SplitError::CannotRemove);
    }
    let remaining: Vec<Contributor> = roster.iter().filter(|c| c.id != id).cloned().collect();
    debug!(remaining = remaining.len(), "contributor removed");
    Ok(RosterChange::new(redistribute(remaining)))
}

/// Renames one contributor. Percentages are untouched.
pub fn rename_contributor(roster: &Roster, id: ContributorId, name: impl Into<String>) -> Roster {
    let name = name.into();
    update(roster, id, |c| c.name = name.clone())
}

/// Sets one contributor's percentage without renormalising the others.
/// Non-finite values are stored as 0. The roster may be out of balance
/// until the next calculation checks it.
pub fn set_percentage(roster: &Roster, id: ContributorId, value: f64) -> Roster {
    let value = if value.is_finite() { value } else { 0.0 };
    update(roster, id, |c| c.percentage = value)
}

fn update(roster: &Roster, id: ContributorId, mut edit: impl FnMut(&mut Contributor)) -> Roster {
    roster
        .iter()
        .cloned()
        .map(|mut c| {
            if c.id == id {
                edit(&mut c);
            }
            c
        })
        .collect()
}

fn redistribute(mut contributors: Vec<Contributor>) -> Roster {
    if !contributors.is_empty() {
        let share = FULL_SHARE / contributors.len() as f64;
        for c in &mut contributors {
            c.percentage = share;
        }
    }
    Roster::new(contributors)
}

/// Whether `total` is close enough to 100 for a custom calculation.
pub fn is_balanced(total: f64) -> bool {
    (total - FULL_SHARE).abs() <= PERCENTAGE_TOLERANCE
}

/// Running percentage total shown while custom shares are edited.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContributionSummary {
    pub total: f64,
    pub balanced: bool,
}

impl fmt::Display for ContributionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Total contribution: {:.1}%", self.total)?;
        if !self.balanced {
            write!(f, " (should be 100%)")?;
        }
        Ok(())
    }
}

pub fn contribution_summary(roster: &Roster) -> ContributionSummary {
    let total = roster.percentage_total();
    ContributionSummary { total, balanced: is_balanced(total) }
}
