//! Proportional Allocator
//!
//! Distributes `total_amount` proportionally based on an `individual_value`
//! relative to a `total_value`.
//!
//! result = total_amount * (individual_value / total_value)
//!
//! Returns 0 when `total_value` is 0.

pub fn allocate(total_amount: f64, individual_value: f64, total_value: f64) -> f64 {
    if total_value == 0.0 {
        return 0.0;
    }
    total_amount * (individual_value / total_value)
}

/// Share of `total_amount` owed by someone contributing `percentage` percent.
pub fn percentage_share(total_amount: f64, percentage: f64) -> f64 {
    allocate(total_amount, percentage, 100.0)
}
