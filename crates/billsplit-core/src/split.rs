use crate::error::{SplitError, SplitResult};
use crate::input::SplitInputs;
use crate::roster::is_balanced;
use billsplit_calculator::{
    even_share, format_currency, percentage_add, percentage_of, percentage_share,
};
use billsplit_types::{CalculationResult, Roster, SplitMode, SplitTotals};
use tracing::{info, instrument, warn};

/// Computes tip, total and per-person figures and fills in every
/// contributor's share.
///
/// In custom contribution mode the roster percentages must sum to 100 within
/// the tolerance, otherwise [`SplitError::PercentageMismatch`] is returned and
/// nothing is produced. Names and percentages are kept; only the monetary
/// fields change. In even split mode the roster is replaced by
/// `number_of_people` default contributors sharing equally.
#[instrument(skip(roster), fields(roster_len = roster.len()))]
pub fn calculate(
    inputs: &SplitInputs,
    mode: SplitMode,
    roster: &Roster,
) -> SplitResult<CalculationResult> {
    let totals = split_totals(inputs);

    let roster = match mode {
        SplitMode::CustomContribution => {
            let actual_sum = roster.percentage_total();
            if !is_balanced(actual_sum) {
                warn!(actual_sum, "custom percentages do not sum to 100");
                return Err(SplitError::PercentageMismatch { actual_sum });
            }
            allocate_by_percentage(roster, &totals)
        }
        SplitMode::EvenSplit => allocate_evenly(inputs.number_of_people(), &totals),
    };

    info!(total = totals.total_amount, contributors = roster.len(), "calculation complete");

    Ok(CalculationResult {
        tip_amount: format_currency(totals.tip_amount),
        total_amount: format_currency(totals.total_amount),
        per_person: format_currency(totals.per_person),
        tip_per_person: format_currency(totals.tip_per_person),
        roster,
        totals,
    })
}

/// Unformatted figures for the inputs. Per-person values are always derived
/// from the people count, whatever the mode.
pub fn split_totals(inputs: &SplitInputs) -> SplitTotals {
    let tip_amount = percentage_of(inputs.bill_amount(), inputs.tip_percent());
    let total_amount = percentage_add(inputs.bill_amount(), inputs.tip_percent());
    SplitTotals {
        tip_amount,
        total_amount,
        per_person: even_share(total_amount, inputs.number_of_people()),
        tip_per_person: even_share(tip_amount, inputs.number_of_people()),
    }
}

fn allocate_by_percentage(roster: &Roster, totals: &SplitTotals) -> Roster {
    roster
        .iter()
        .cloned()
        .map(|mut c| {
            c.amount = format_currency(percentage_share(totals.total_amount, c.percentage));
            c.tip_amount = format_currency(percentage_share(totals.tip_amount, c.percentage));
            c
        })
        .collect()
}

fn allocate_evenly(number_of_people: u32, totals: &SplitTotals) -> Roster {
    let amount = format_currency(totals.per_person);
    let tip_amount = format_currency(totals.tip_per_person);
    Roster::even(number_of_people as usize)
        .into_iter()
        .map(|mut c| {
            c.amount = amount.clone();
            c.tip_amount = tip_amount.clone();
            c
        })
        .collect()
}
