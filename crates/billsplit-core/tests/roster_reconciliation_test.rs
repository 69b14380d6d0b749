use billsplit_core::*;

fn roster_with(shares: &[f64]) -> Roster {
    shares
        .iter()
        .enumerate()
        .map(|(i, &p)| Contributor::new(i as ContributorId + 1, p))
        .collect()
}

fn percentages(roster: &Roster) -> Vec<f64> {
    roster.iter().map(|c| c.percentage).collect()
}

#[test]
fn even_mode_rebuilds_roster_of_wrong_length() {
    let previous = Roster::new(vec![Contributor {
        name: "Ana".to_string(),
        ..Contributor::new(7, 100.0)
    }]);
    let reconciled = reconcile(&previous, 3, SplitMode::EvenSplit);
    assert_eq!(reconciled.mode, SplitMode::EvenSplit);
    assert_eq!(reconciled.roster, Roster::even(3));
}

#[test]
fn even_mode_keeps_roster_of_right_length() {
    let previous = rename_contributor(&Roster::even(2), 1, "Ana");
    let reconciled = reconcile(&previous, 2, SplitMode::EvenSplit);
    assert_eq!(reconciled.roster, previous);
}

#[test]
fn people_count_is_clamped_to_the_limit() {
    let reconciled = reconcile(&Roster::default(), u32::MAX, SplitMode::EvenSplit);
    assert_eq!(reconciled.roster.len(), constants::limits::MAX_PEOPLE as usize);
    let reconciled = reconcile(&Roster::even(2), 0, SplitMode::EvenSplit);
    assert_eq!(reconciled.roster, Roster::even(1));
}

#[test]
fn switching_to_even_at_the_same_length_keeps_custom_percentages() {
    let previous = roster_with(&[60.0, 40.0]);
    let reconciled = reconcile(&previous, 2, SplitMode::EvenSplit);
    assert_eq!(reconciled.mode, SplitMode::EvenSplit);
    assert_eq!(percentages(&reconciled.roster), vec![60.0, 40.0]);
}

#[test]
fn single_person_forces_even_split() {
    let previous = roster_with(&[100.0]);
    let reconciled = reconcile(&previous, 1, SplitMode::CustomContribution);
    assert_eq!(reconciled.mode, SplitMode::EvenSplit);
    assert_eq!(reconciled.roster.len(), 1);
}

#[test]
fn custom_mode_leaves_roster_alone() {
    let previous = roster_with(&[70.0, 20.0, 10.0]);
    let reconciled = reconcile(&previous, 5, SplitMode::CustomContribution);
    assert_eq!(reconciled.mode, SplitMode::CustomContribution);
    assert_eq!(reconciled.roster, previous);
}

#[test]
fn add_contributor_redistributes_evenly() {
    let change = add_contributor(&roster_with(&[70.0, 30.0]));
    assert_eq!(change.number_of_people, 3);
    assert_eq!(change.roster.len(), 3);
    let added = change.roster.get(3).unwrap();
    assert_eq!(added.name, "Person 3");
    assert_eq!(added.amount, "$0.00");
    for pct in percentages(&change.roster) {
        assert!((pct - 100.0 / 3.0).abs() < 1e-9);
    }
}

#[test]
fn add_contributor_uses_next_id_after_the_largest() {
    let roster = Roster::new(vec![Contributor::new(2, 50.0), Contributor::new(5, 50.0)]);
    let change = add_contributor(&roster);
    assert!(change.roster.contains(6));
    assert_eq!(add_contributor(&Roster::new(Vec::new())).roster.get(1).unwrap().percentage, 100.0);
}

#[test]
fn remove_contributor_redistributes_evenly() {
    let change = remove_contributor(&roster_with(&[50.0, 30.0, 20.0]), 2).unwrap();
    assert_eq!(change.number_of_people, 2);
    let ids: Vec<_> = change.roster.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 3]);
    assert_eq!(percentages(&change.roster), vec![50.0, 50.0]);
}

#[test]
fn removing_the_last_contributor_fails() {
    let roster = Roster::default();
    assert_eq!(remove_contributor(&roster, 1), Err(SplitError::CannotRemove));
    assert_eq!(roster, Roster::default());
}

#[test]
fn removing_an_unknown_id_keeps_members() {
    let change = remove_contributor(&roster_with(&[80.0, 20.0]), 42).unwrap();
    assert_eq!(change.roster.len(), 2);
    assert_eq!(percentages(&change.roster), vec![50.0, 50.0]);
}

#[test]
fn add_then_remove_restores_even_distribution() {
    let original = Roster::even(3);
    let added = add_contributor(&original);
    let new_id = added.roster.next_id() - 1;
    let restored = remove_contributor(&added.roster, new_id).unwrap();
    for (before, after) in original.iter().zip(restored.roster.iter()) {
        assert_eq!(before.id, after.id);
        assert!((before.percentage - after.percentage).abs() < 1e-9);
    }
}

#[test]
fn rename_leaves_percentages_untouched() {
    let roster = roster_with(&[60.0, 40.0]);
    let renamed = rename_contributor(&roster, 2, "Ben");
    assert_eq!(renamed.get(2).unwrap().name, "Ben");
    assert_eq!(percentages(&renamed), vec![60.0, 40.0]);
}

#[test]
fn set_percentage_does_not_renormalise() {
    let roster = roster_with(&[50.0, 50.0]);
    let edited = set_percentage(&roster, 1, 75.0);
    assert_eq!(percentages(&edited), vec![75.0, 50.0]);
    let summary = contribution_summary(&edited);
    assert!(!summary.balanced);
    assert_eq!(summary.total, 125.0);
}
