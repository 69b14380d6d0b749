//! Even Share
//!
//! Splits `total_amount` into `parts` equal shares.
//!
//! result = total_amount / parts
//!
//! Returns 0 when `parts` is 0.

pub fn even_share(total_amount: f64, parts: u32) -> f64 {
    if parts == 0 {
        return 0.0;
    }
    total_amount / f64::from(parts)
}
