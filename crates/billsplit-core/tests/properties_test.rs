use billsplit_core::*;
use proptest::prelude::*;

proptest! {
    #[test]
    fn even_shares_add_back_up_to_the_totals(
        bill in 0.01f64..100_000.0,
        tip in 0.01f64..100.0,
        people in 1u32..50,
    ) {
        let inputs = SplitInputs::new(bill, tip, people).unwrap();
        let result = calculate(&inputs, SplitMode::EvenSplit, &Roster::default()).unwrap();
        let totals = result.totals;
        let tolerance = 0.01 * f64::from(people);
        let count = f64::from(people);
        prop_assert!((totals.per_person * count - totals.total_amount).abs() <= tolerance);
        prop_assert!((totals.tip_per_person * count - totals.tip_amount).abs() <= tolerance);
        prop_assert_eq!(result.roster.len(), people as usize);
    }

    #[test]
    fn unbalanced_custom_rosters_are_always_rejected(
        shares in proptest::collection::vec(0.0f64..100.0, 2..6),
    ) {
        let roster: Roster = shares
            .iter()
            .enumerate()
            .map(|(i, &p)| Contributor::new(i as ContributorId + 1, p))
            .collect();
        let sum = roster.percentage_total();
        prop_assume!((sum - 100.0).abs() > 0.1);
        let inputs = SplitInputs::new(50.0, 10.0, roster.len() as u32).unwrap();
        let err = calculate(&inputs, SplitMode::CustomContribution, &roster).unwrap_err();
        prop_assert_eq!(err, SplitError::PercentageMismatch { actual_sum: sum });
    }

    #[test]
    fn add_then_remove_restores_percentages(count in 1usize..20) {
        let original = Roster::even(count);
        let added = add_contributor(&original);
        let new_id = original.next_id();
        let restored = remove_contributor(&added.roster, new_id).unwrap();
        prop_assert_eq!(restored.number_of_people as usize, count);
        for (before, after) in original.iter().zip(restored.roster.iter()) {
            prop_assert!((before.percentage - after.percentage).abs() < 1e-9);
        }
    }

    #[test]
    fn single_contributor_can_never_be_removed(id in 0u32..10) {
        let roster = Roster::default();
        prop_assert_eq!(remove_contributor(&roster, id), Err(SplitError::CannotRemove));
    }
}
