//! Session state machine.
//!
//! [`SplitSession`] owns the state of one logical session and exposes one
//! method per user event. Reconciliation runs explicitly on the events that
//! can change the roster's shape (people count, mode, membership) and never on
//! name or percentage edits. Sessions are not shared; a multi-user host keeps
//! one per user and serialises calls to it.

use crate::constants::defaults;
use crate::error::{SplitError, SplitResult};
use crate::input::{RawInputs, SplitInputs, lenient_people_count, parse_percentage};
use crate::roster::{self, ContributionSummary, RosterChange};
use crate::split;
use billsplit_types::{CalculationResult, ContributorId, Roster, SplitMode};
use serde::Serialize;
use std::fmt;
use tracing::{debug, info};

/// Feedback for the user after a successful event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Notice {
    CalculationSuccessful,
    ContributorAdded(ContributorId),
    ContributorRemoved(ContributorId),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::CalculationSuccessful => write!(f, "Calculation Successful!"),
            Notice::ContributorAdded(_) => write!(f, "Contributor Added Successfully!"),
            Notice::ContributorRemoved(_) => write!(f, "Contributor Removed Successfully!"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SplitSession {
    inputs: RawInputs,
    default_tip_percent: f64,
    custom_tip_enabled: bool,
    mode: SplitMode,
    roster: Roster,
    result: CalculationResult,
}

impl Default for SplitSession {
    fn default() -> Self {
        Self::new(defaults::TIP_PERCENT)
    }
}

impl SplitSession {
    /// A fresh session: one contributor paying 100%, even split, all figures
    /// at `$0.00`, and `default_tip_percent` as the service rating.
    pub fn new(default_tip_percent: f64) -> Self {
        Self {
            inputs: RawInputs::with_default_tip(default_tip_percent),
            default_tip_percent,
            custom_tip_enabled: false,
            mode: SplitMode::EvenSplit,
            roster: Roster::default(),
            result: CalculationResult::default(),
        }
    }

    pub fn inputs(&self) -> &RawInputs {
        &self.inputs
    }

    pub fn mode(&self) -> SplitMode {
        self.mode
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Figures from the last successful calculation.
    pub fn result(&self) -> &CalculationResult {
        &self.result
    }

    pub fn custom_tip_enabled(&self) -> bool {
        self.custom_tip_enabled
    }

    /// People count as the roster sees it; bad input counts as one.
    pub fn number_of_people(&self) -> u32 {
        lenient_people_count(&self.inputs.number_of_people)
    }

    /// Custom contribution is only offered to more than one person.
    pub fn custom_contribution_available(&self) -> bool {
        self.number_of_people() > 1
    }

    pub fn contribution_summary(&self) -> ContributionSummary {
        roster::contribution_summary(&self.roster)
    }

    /// Tip percent a submit would use: the entered value with custom tip on,
    /// the default service rating otherwise.
    pub fn effective_tip_input(&self) -> String {
        if self.custom_tip_enabled {
            self.inputs.service_rating.clone()
        } else {
            self.default_tip_percent.to_string()
        }
    }

    pub fn set_bill_amount(&mut self, raw: impl Into<String>) {
        self.inputs.bill_amount = raw.into();
    }

    /// Stores a tip edit. It only takes effect while custom tip is enabled.
    pub fn set_tip_percent(&mut self, raw: impl Into<String>) {
        self.inputs.service_rating = raw.into();
    }

    pub fn set_custom_tip_enabled(&mut self, enabled: bool) {
        self.custom_tip_enabled = enabled;
    }

    pub fn set_number_of_people(&mut self, raw: impl Into<String>) {
        self.inputs.number_of_people = raw.into();
        self.reconcile();
    }

    /// Switches mode. Custom contribution for a single person is refused.
    pub fn set_mode(&mut self, mode: SplitMode) -> SplitResult<()> {
        if mode.is_custom() && !self.custom_contribution_available() {
            return Err(SplitError::ModeUnavailable { number_of_people: self.number_of_people() });
        }
        self.mode = mode;
        self.reconcile();
        Ok(())
    }

    /// Flips between even split and custom contribution, returning the new mode.
    pub fn toggle_custom_contribution(&mut self) -> SplitResult<SplitMode> {
        let next = if self.mode.is_custom() {
            SplitMode::EvenSplit
        } else {
            SplitMode::CustomContribution
        };
        self.set_mode(next)?;
        Ok(self.mode)
    }

    pub fn add_contributor(&mut self) -> Notice {
        let id = self.roster.next_id();
        let change = roster::add_contributor(&self.roster);
        self.commit(change);
        Notice::ContributorAdded(id)
    }

    pub fn remove_contributor(&mut self, id: ContributorId) -> SplitResult<Notice> {
        let change = roster::remove_contributor(&self.roster, id)?;
        self.commit(change);
        Ok(Notice::ContributorRemoved(id))
    }

    pub fn rename_contributor(&mut self, id: ContributorId, name: impl Into<String>) {
        self.roster = roster::rename_contributor(&self.roster, id, name);
    }

    /// Applies a percentage edit; unparsable text is stored as 0.
    pub fn set_percentage(&mut self, id: ContributorId, raw: &str) {
        self.roster = roster::set_percentage(&self.roster, id, parse_percentage(raw));
    }

    /// Validates the form and runs the calculation. On failure the roster and
    /// the previous result stay exactly as they were.
    pub fn submit(&mut self) -> SplitResult<Notice> {
        let raw = RawInputs { service_rating: self.effective_tip_input(), ..self.inputs.clone() };
        let inputs: SplitInputs = raw.validate()?;
        let result = split::calculate(&inputs, self.mode, &self.roster)?;
        self.roster = result.roster.clone();
        self.result = result;
        info!(mode = %self.mode, "session calculation committed");
        Ok(Notice::CalculationSuccessful)
    }

    fn commit(&mut self, change: RosterChange) {
        self.roster = change.roster;
        self.inputs.number_of_people = change.number_of_people.to_string();
        self.reconcile();
    }

    fn reconcile(&mut self) {
        let reconciled = roster::reconcile(&self.roster, self.number_of_people(), self.mode);
        if reconciled.mode != self.mode {
            debug!(from = %self.mode, to = %reconciled.mode, "mode forced by reconciliation");
        }
        self.mode = reconciled.mode;
        self.roster = reconciled.roster;
    }
}
