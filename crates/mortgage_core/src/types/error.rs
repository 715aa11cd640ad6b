//! Error types for loan-parameter validation.
//!
//! This module provides:
//! - `InvalidInputError`: Errors raised when loan terms violate their
//!   preconditions

use thiserror::Error;

/// Loan-parameter validation errors.
///
/// Raised synchronously when loan terms are constructed from values that
/// violate the calculator's preconditions. Validation is the only failure
/// mode in the workspace: once terms are accepted, the amortization itself
/// cannot fail.
///
/// # Variants
/// - `NonPositivePrice`: Property price is zero or negative
/// - `NonPositiveDuration`: Loan duration is zero or negative (or rounds
///   to zero monthly payments)
/// - `NegativeRate`: Annual interest rate is negative
/// - `DownPaymentOutOfRange`: Down payment falls outside `[0, price)`
///
/// # Examples
/// ```
/// use mortgage_core::types::InvalidInputError;
///
/// let err = InvalidInputError::NonPositivePrice { price: -1000.0 };
/// assert!(format!("{}", err).contains("property price"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InvalidInputError {
    /// Property price is zero or negative.
    #[error("Invalid property price: {price} (must be positive)")]
    NonPositivePrice {
        /// The invalid property price
        price: f64,
    },

    /// Loan duration is zero or negative, or too short to produce a
    /// single monthly payment.
    #[error("Invalid loan duration: {years} years (must cover at least one monthly payment)")]
    NonPositiveDuration {
        /// The invalid duration in years
        years: f64,
    },

    /// Annual interest rate is negative.
    #[error("Invalid interest rate: {rate}% (must be non-negative)")]
    NegativeRate {
        /// The invalid annual rate in percent
        rate: f64,
    },

    /// Down payment falls outside `[0, property_price)`.
    ///
    /// Covers both explicit down payments and values derived from a
    /// percent-of-price that is negative or at least 100%.
    #[error("Invalid down payment: {down_payment} for property price {property_price} (must be in [0, price))")]
    DownPaymentOutOfRange {
        /// The offending down payment amount
        down_payment: f64,
        /// The property price it was checked against
        property_price: f64,
    },
}
