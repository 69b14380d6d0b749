use serde::{Deserialize, Serialize};
use std::fmt;

/// Formatted monetary value shown before any calculation has run.
pub const ZERO_AMOUNT: &str = "$0.00";

/// Identifier of a contributor, unique within a roster.
pub type ContributorId = u32;

/// How the bill is shared between contributors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitMode {
    /// Everyone pays the same share of total and tip.
    #[default]
    EvenSplit,
    /// Shares follow per-contributor percentages that must sum to 100.
    CustomContribution,
}

impl SplitMode {
    /// Returns `true` for [`SplitMode::CustomContribution`].
    pub fn is_custom(self) -> bool {
        matches!(self, SplitMode::CustomContribution)
    }
}

impl fmt::Display for SplitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitMode::EvenSplit => write!(f, "even"),
            SplitMode::CustomContribution => write!(f, "custom"),
        }
    }
}

/// One person splitting the bill.
///
/// `amount` and `tip_amount` are derived values. They are recomputed from
/// `percentage` on every successful calculation and are stale in between.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contributor {
    /// Stable identifier, reassigned only when contributors are added or removed.
    pub id: ContributorId,
    /// Display name, `"Person {id}"` until edited.
    pub name: String,
    /// Share of the total bill in percent.
    pub percentage: f64,
    /// Formatted share of the total (bill plus tip).
    pub amount: String,
    /// Formatted share of the tip.
    pub tip_amount: String,
}

impl Contributor {
    /// Creates a contributor with the default name and zeroed monetary fields.
    pub fn new(id: ContributorId, percentage: f64) -> Self {
        Self {
            id,
            name: Self::default_name(id),
            percentage,
            amount: ZERO_AMOUNT.to_string(),
            tip_amount: ZERO_AMOUNT.to_string(),
        }
    }

    /// The name a contributor gets before anyone edits it.
    pub fn default_name(id: ContributorId) -> String {
        format!("Person {id}")
    }
}

/// Ordered collection of the contributors currently configured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster(Vec<Contributor>);

impl Default for Roster {
    /// A single contributor paying 100%.
    fn default() -> Self {
        Self::even(1)
    }
}

impl Roster {
    /// Wraps an existing list of contributors without touching it.
    pub fn new(contributors: Vec<Contributor>) -> Self {
        Self(contributors)
    }

    /// Builds `count` contributors with ids `1..=count`, default names and
    /// equal percentages. A count of zero yields an empty roster.
    pub fn even(count: usize) -> Self {
        if count == 0 {
            return Self(Vec::new());
        }
        let share = 100.0 / count as f64;
        Self((1..=count).map(|id| Contributor::new(id as ContributorId, share)).collect())
    }

    /// Number of contributors.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when the roster has no contributors.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the contributors in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Contributor> {
        self.0.iter()
    }

    /// Looks up a contributor by id.
    pub fn get(&self, id: ContributorId) -> Option<&Contributor> {
        self.0.iter().find(|c| c.id == id)
    }

    /// Returns `true` if a contributor with `id` exists.
    pub fn contains(&self, id: ContributorId) -> bool {
        self.get(id).is_some()
    }

    /// The id an appended contributor receives: one past the largest id,
    /// or 1 for an empty roster.
    pub fn next_id(&self) -> ContributorId {
        self.0.iter().map(|c| c.id).max().map_or(1, |max| max + 1)
    }

    /// Sum of all contributor percentages.
    pub fn percentage_total(&self) -> f64 {
        self.0.iter().map(|c| c.percentage).sum()
    }

    /// Borrows the contributors as a slice.
    pub fn as_slice(&self) -> &[Contributor] {
        &self.0
    }

    /// Consumes the roster, returning the contributors.
    pub fn into_vec(self) -> Vec<Contributor> {
        self.0
    }
}

impl From<Vec<Contributor>> for Roster {
    fn from(contributors: Vec<Contributor>) -> Self {
        Self(contributors)
    }
}

impl FromIterator<Contributor> for Roster {
    fn from_iter<I: IntoIterator<Item = Contributor>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Contributor;
    type IntoIter = std::slice::Iter<'a, Contributor>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Roster {
    type Item = Contributor;
    type IntoIter = std::vec::IntoIter<Contributor>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Unformatted monetary figures of a split.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitTotals {
    /// Tip on the whole bill.
    pub tip_amount: f64,
    /// Bill plus tip.
    pub total_amount: f64,
    /// Total divided by the number of people.
    pub per_person: f64,
    /// Tip divided by the number of people.
    pub tip_per_person: f64,
}

/// Outcome of a successful calculation. Replaced wholesale on every
/// successful calculation and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    /// Formatted tip on the whole bill.
    pub tip_amount: String,
    /// Formatted bill plus tip.
    pub total_amount: String,
    /// Formatted even share of the total.
    pub per_person: String,
    /// Formatted even share of the tip.
    pub tip_per_person: String,
    /// Roster with `amount` and `tip_amount` filled in.
    pub roster: Roster,
    /// The same figures before formatting.
    pub totals: SplitTotals,
}

impl Default for CalculationResult {
    fn default() -> Self {
        Self {
            tip_amount: ZERO_AMOUNT.to_string(),
            total_amount: ZERO_AMOUNT.to_string(),
            per_person: ZERO_AMOUNT.to_string(),
            tip_per_person: ZERO_AMOUNT.to_string(),
            roster: Roster::default(),
            totals: SplitTotals::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_roster_is_one_person_paying_everything() {
        let roster = Roster::default();
        assert_eq!(roster.len(), 1);
        let only = &roster.as_slice()[0];
        assert_eq!(only.id, 1);
        assert_eq!(only.name, "Person 1");
        assert_eq!(only.percentage, 100.0);
        assert_eq!(only.amount, ZERO_AMOUNT);
    }

    #[test]
    fn even_roster_assigns_sequential_ids() {
        let roster = Roster::even(3);
        let ids: Vec<_> = roster.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!((roster.percentage_total() - 100.0).abs() < 1e-9);
        assert!(Roster::even(0).is_empty());
    }

    #[test]
    fn next_id_skips_past_gaps() {
        let roster = Roster::new(vec![Contributor::new(1, 50.0), Contributor::new(4, 50.0)]);
        assert_eq!(roster.next_id(), 5);
        assert_eq!(Roster::even(0).next_id(), 1);
    }

    #[test]
    fn contributor_serializes_with_camel_case_fields() {
        let json = serde_json::to_value(Contributor::new(2, 25.0)).unwrap();
        assert_eq!(json["tipAmount"], "$0.00");
        assert_eq!(json["name"], "Person 2");
    }
}
