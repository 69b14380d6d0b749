//! Currency formatting.
//!
//! Every monetary figure leaving the engine goes through [`format_currency`]:
//! round half-up to whole cents, group the integer part in thousands with `,`,
//! and prefix the currency symbol. Only formatting rounds; arithmetic on the
//! underlying values never does.

pub const CURRENCY_SYMBOL: &str = "$";

/// Relative nudge applied before rounding so that values whose binary form
/// sits just under a half cent (1.005 is stored as 1.00499...) round up.
const ROUNDING_NUDGE: f64 = 4.0 * f64::EPSILON;

/// Rounds the magnitude of `amount` to whole cents, half-up.
/// Non-finite input yields 0.
pub fn to_cents(amount: f64) -> u128 {
    if !amount.is_finite() {
        return 0;
    }
    let scaled = amount.abs() * 100.0;
    (scaled + scaled * ROUNDING_NUDGE).round() as u128
}

/// Formats `amount` as `$1,234.56`. Negative amounts get a leading `-`.
pub fn format_currency(amount: f64) -> String {
    let cents = to_cents(amount);
    let sign = if amount < 0.0 && cents != 0 { "-" } else { "" };
    format!("{sign}{CURRENCY_SYMBOL}{}.{:02}", group_thousands(cents / 100), cents % 100)
}

fn group_thousands(value: u128) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
