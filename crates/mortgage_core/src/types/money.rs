//! Currency rounding for display figures.
//!
//! The workspace computes every amount at full floating-point precision and
//! rounds only at the display boundary. The fixed rule is
//! **round-half-away-from-zero at zero decimal places** — the behaviour of
//! [`f64::round`], and the same rule the common `toFixed()`-style formatting
//! applies implicitly. All currency-formatted fields go through
//! [`round_currency`] so the rule cannot drift between call sites.

use num_traits::Float;

/// Rounds a currency amount to the nearest whole unit.
///
/// Halfway cases round away from zero: `0.5` rounds to `1`, `-0.5` rounds
/// to `-1`.
///
/// # Examples
/// ```
/// use mortgage_core::types::money::round_currency;
///
/// assert_eq!(round_currency(959.28_f64), 959.0);
/// assert_eq!(round_currency(959.5_f64), 960.0);
/// assert_eq!(round_currency(-0.5_f64), -1.0);
/// ```
#[inline]
pub fn round_currency<T: Float>(amount: T) -> T {
    amount.round()
}

/// Formats a currency amount as a whole-unit string.
///
/// Applies [`round_currency`] and renders without decimals. Negative zero
/// is normalised to `"0"` so a tiny residual balance never prints a sign.
///
/// # Examples
/// ```
/// use mortgage_core::types::money::format_currency;
///
/// assert_eq!(format_currency(959.28_f64), "959");
/// assert_eq!(format_currency(-0.2_f64), "0");
/// ```
pub fn format_currency<T: Float>(amount: T) -> String {
    let rounded = round_currency(amount).to_f64().unwrap_or(f64::NAN);
    // Normalise -0.0 so residual balances never print a stray sign.
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{:.0}", rounded)
}
