//! Closed-form fixed-payment annuity formula.
//!
//! ## Mathematical Formula
//!
//! **Monthly payment**: M = L·r / (1 - (1 + r)^(-n))
//!
//! Where:
//! - L = loan amount
//! - r = periodic (monthly) interest rate
//! - n = number of monthly payments
//!
//! At r = 0 the formula is a 0/0 indeterminate form; its limit is the
//! straight-line payment M = L / n, which is handled as an explicit
//! special case.

use num_traits::Float;

/// Computes the constant monthly payment that fully amortizes a loan.
///
/// M = L·r / (1 - (1 + r)^(-n)), with the zero-rate case special-cased
/// to M = L / n.
///
/// # Arguments
/// * `loan_amount` - Financed amount L (positive)
/// * `monthly_rate` - Periodic rate r as a fraction (non-negative)
/// * `total_payments` - Number of monthly payments n (at least 1)
///
/// # Returns
/// The constant monthly payment. Finite for every input admitted by
/// [`LoanTerms`](crate::amortization::LoanTerms): the discount factor
/// `1 - (1 + r)^(-n)` is strictly positive whenever r > 0 and n >= 1.
///
/// # Examples
/// ```
/// use mortgage_models::amortization::annuity::monthly_payment;
///
/// // 160k at 0.5% monthly over 360 payments
/// let payment = monthly_payment(160_000.0_f64, 0.005, 360);
/// assert!((payment - 959.28).abs() < 0.01);
///
/// // Zero-interest loan pays straight-line
/// let payment = monthly_payment(120_000.0_f64, 0.0, 240);
/// assert_eq!(payment, 500.0);
/// ```
#[inline]
pub fn monthly_payment<T: Float>(loan_amount: T, monthly_rate: T, total_payments: u32) -> T {
    debug_assert!(total_payments >= 1);

    if monthly_rate == T::zero() {
        // Limit of the annuity formula as r -> 0
        return loan_amount / T::from(total_payments).unwrap();
    }

    let exponent = -(total_payments as i32);
    let discount = T::one() - (T::one() + monthly_rate).powi(exponent);

    loan_amount * monthly_rate / discount
}
