//! Percentage addition
//!
//! Adds `percentage` percent of the base amount to the amount itself.
//! For example, adding 15% to 100 results in 115 (100 + 100 * 15 / 100).

/// The portion `percentage` percent of `amount` represents.
pub fn percentage_of(amount: f64, percentage: f64) -> f64 {
    amount * (percentage / 100.0)
}

/// `amount` plus `percentage` percent of itself.
pub fn percentage_add(amount: f64, percentage: f64) -> f64 {
    amount + percentage_of(amount, percentage)
}
