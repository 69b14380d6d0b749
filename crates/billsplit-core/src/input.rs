//! Raw input parsing and validation
//!
//! Presentation layers collect the three form fields as text. [`RawInputs`]
//! turns them into [`SplitInputs`], the only form the split computation
//! accepts, reporting the first offending field.

use crate::constants::{defaults, limits};
use crate::error::{SplitError, SplitResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validation messages shown to users.
pub mod reasons {
    pub const NOT_A_NUMBER: &str = "must be a number";
    pub const NOT_POSITIVE: &str = "Amount must be greater than zero";
    pub const NO_PEOPLE: &str = "At least one person";
    pub const TOO_MANY_PEOPLE: &str = "At most 1000 people";
}

/// The numeric fields a calculation needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InputField {
    BillAmount,
    ServiceRating,
    NumberOfPeople,
}

impl InputField {
    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            InputField::BillAmount => "Bill Amount",
            InputField::ServiceRating => "Service Rating",
            InputField::NumberOfPeople => "Number of People",
        }
    }

    /// Form key of the field.
    pub fn key(self) -> &'static str {
        match self {
            InputField::BillAmount => "billAmount",
            InputField::ServiceRating => "serviceRating",
            InputField::NumberOfPeople => "numberOfPeople",
        }
    }

    fn required(self) -> SplitError {
        SplitError::invalid_input(self, format!("{} is Required", self.label()))
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Form values as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawInputs {
    pub bill_amount: String,
    pub service_rating: String,
    pub number_of_people: String,
}

impl Default for RawInputs {
    fn default() -> Self {
        Self::with_default_tip(defaults::TIP_PERCENT)
    }
}

impl RawInputs {
    /// Empty bill, one person, and `tip_percent` as the service rating.
    pub fn with_default_tip(tip_percent: f64) -> Self {
        Self {
            bill_amount: String::new(),
            service_rating: tip_percent.to_string(),
            number_of_people: defaults::NUMBER_OF_PEOPLE.to_string(),
        }
    }

    /// Validates the fields in form order and returns the first failure.
    pub fn validate(&self) -> SplitResult<SplitInputs> {
        let bill_amount = parse_field(InputField::BillAmount, &self.bill_amount)?;
        let tip_percent = parse_field(InputField::ServiceRating, &self.service_rating)?;
        let people = parse_field(InputField::NumberOfPeople, &self.number_of_people)?;
        SplitInputs::from_numbers(bill_amount, tip_percent, people)
    }
}

/// Validated calculation inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitInputs {
    bill_amount: f64,
    tip_percent: f64,
    number_of_people: u32,
}

impl SplitInputs {
    /// Checks that the bill and tip are positive and at least one person pays.
    pub fn new(bill_amount: f64, tip_percent: f64, number_of_people: u32) -> SplitResult<Self> {
        Self::from_numbers(bill_amount, tip_percent, f64::from(number_of_people))
    }

    fn from_numbers(bill_amount: f64, tip_percent: f64, people: f64) -> SplitResult<Self> {
        ensure_positive(InputField::BillAmount, bill_amount)?;
        ensure_positive(InputField::ServiceRating, tip_percent)?;
        let field = InputField::NumberOfPeople;
        if !people.is_finite() {
            return Err(SplitError::invalid_input(field, reasons::NOT_A_NUMBER));
        }
        if people < 1.0 {
            return Err(SplitError::invalid_input(field, reasons::NO_PEOPLE));
        }
        let people = people.trunc();
        if people > f64::from(limits::MAX_PEOPLE) {
            return Err(SplitError::invalid_input(field, reasons::TOO_MANY_PEOPLE));
        }
        let number_of_people = people as u32;
        Ok(Self { bill_amount, tip_percent, number_of_people })
    }

    pub fn bill_amount(&self) -> f64 {
        self.bill_amount
    }

    /// Tip as a percentage of the bill, e.g. 15 for 15%.
    pub fn tip_percent(&self) -> f64 {
        self.tip_percent
    }

    pub fn number_of_people(&self) -> u32 {
        self.number_of_people
    }
}

fn ensure_positive(field: InputField, value: f64) -> SplitResult<()> {
    if !value.is_finite() {
        return Err(SplitError::invalid_input(field, reasons::NOT_A_NUMBER));
    }
    if value <= 0.0 {
        return Err(SplitError::invalid_input(field, reasons::NOT_POSITIVE));
    }
    Ok(())
}

fn parse_field(field: InputField, raw: &str) -> SplitResult<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(field.required());
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(SplitError::invalid_input(field, reasons::NOT_A_NUMBER)),
    }
}

/// People count used to shape the roster while the field is being edited.
/// Anything unparsable or below one counts as one person; counts above
/// [`limits::MAX_PEOPLE`] are clamped to it.
pub fn lenient_people_count(raw: &str) -> u32 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 1.0 => {
            value.trunc().min(f64::from(limits::MAX_PEOPLE)) as u32
        }
        _ => defaults::NUMBER_OF_PEOPLE,
    }
}

/// Parses a percentage edit. Bad input becomes 0 rather than an error; a
/// trailing `%` is accepted.
pub fn parse_percentage(raw: &str) -> f64 {
    raw.trim()
        .trim_end_matches('%')
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(bill: &str, tip: &str, people: &str) -> RawInputs {
        RawInputs {
            bill_amount: bill.to_string(),
            service_rating: tip.to_string(),
            number_of_people: people.to_string(),
        }
    }

    #[test]
    fn valid_inputs_pass() {
        let inputs = raw(" 100 ", "15", "4").validate().unwrap();
        assert_eq!(inputs.bill_amount(), 100.0);
        assert_eq!(inputs.tip_percent(), 15.0);
        assert_eq!(inputs.number_of_people(), 4);
    }

    #[test]
    fn missing_bill_is_required() {
        let err = RawInputs::default().validate().unwrap_err();
        assert_eq!(
            err,
            SplitError::invalid_input(InputField::BillAmount, "Bill Amount is Required")
        );
    }

    #[test]
    fn zero_and_negative_amounts_are_rejected() {
        let err = raw("0", "15", "1").validate().unwrap_err();
        assert_eq!(err, SplitError::invalid_input(InputField::BillAmount, reasons::NOT_POSITIVE));

        let err = raw("10", "-5", "1").validate().unwrap_err();
        assert_eq!(
            err,
            SplitError::invalid_input(InputField::ServiceRating, reasons::NOT_POSITIVE)
        );
    }

    #[test]
    fn non_numeric_fields_are_rejected() {
        let err = raw("abc", "15", "1").validate().unwrap_err();
        assert_eq!(err, SplitError::invalid_input(InputField::BillAmount, reasons::NOT_A_NUMBER));

        let err = raw("10", "15", "NaN").validate().unwrap_err();
        assert_eq!(
            err,
            SplitError::invalid_input(InputField::NumberOfPeople, reasons::NOT_A_NUMBER)
        );
    }

    #[test]
    fn people_must_be_at_least_one_and_truncate() {
        let err = raw("10", "15", "0.5").validate().unwrap_err();
        assert_eq!(err, SplitError::invalid_input(InputField::NumberOfPeople, reasons::NO_PEOPLE));

        let inputs = raw("10", "15", "2.9").validate().unwrap();
        assert_eq!(inputs.number_of_people(), 2);
    }

    #[test]
    fn first_failing_field_wins() {
        let err = raw("", "", "").validate().unwrap_err();
        assert_eq!(err.field(), Some(InputField::BillAmount));
        let err = raw("10", "", "").validate().unwrap_err();
        assert_eq!(err.field(), Some(InputField::ServiceRating));
    }

    #[test]
    fn typed_constructor_applies_the_same_rules() {
        assert!(SplitInputs::new(100.0, 15.0, 4).is_ok());
        assert!(SplitInputs::new(100.0, 15.0, 0).is_err());
        assert!(SplitInputs::new(f64::INFINITY, 15.0, 1).is_err());
    }

    #[test]
    fn people_count_is_capped() {
        assert!(SplitInputs::new(100.0, 15.0, limits::MAX_PEOPLE).is_ok());
        let err = SplitInputs::new(100.0, 15.0, limits::MAX_PEOPLE + 1).unwrap_err();
        assert_eq!(
            err,
            SplitError::invalid_input(InputField::NumberOfPeople, reasons::TOO_MANY_PEOPLE)
        );
        let err = SplitInputs::new(100.0, 15.0, u32::MAX).unwrap_err();
        assert_eq!(err.field(), Some(InputField::NumberOfPeople));

        let err = raw("10", "15", "1e10").validate().unwrap_err();
        assert_eq!(
            err,
            SplitError::invalid_input(InputField::NumberOfPeople, reasons::TOO_MANY_PEOPLE)
        );
    }

    #[test]
    fn lenient_people_count_falls_back_to_one_and_clamps() {
        assert_eq!(lenient_people_count("3"), 3);
        assert_eq!(lenient_people_count(""), 1);
        assert_eq!(lenient_people_count("0"), 1);
        assert_eq!(lenient_people_count("-4"), 1);
        assert_eq!(lenient_people_count("x"), 1);
        assert_eq!(lenient_people_count("1e10"), limits::MAX_PEOPLE);
    }

    #[test]
    fn percentage_edits_coerce_bad_input_to_zero() {
        assert_eq!(parse_percentage("60"), 60.0);
        assert_eq!(parse_percentage(" 33.5% "), 33.5);
        assert_eq!(parse_percentage(""), 0.0);
        assert_eq!(parse_percentage("lots"), 0.0);
        assert_eq!(parse_percentage("inf"), 0.0);
    }
}
