//! Amortization schedule generation for fixed-rate mortgages.
//!
//! This module provides:
//! - [`LoanTerms`]: Validated loan parameters with derived quantities
//! - [`DownPaymentMode`]: Explicit or percent-of-price down payment
//! - [`annuity::monthly_payment`]: The closed-form annuity payment
//! - [`PaymentScheduleEntry`]: A single month's principal/interest split
//! - [`AmortizationResult`]: Summary totals plus the full schedule
//!
//! # Examples
//!
//! ```
//! use mortgage_models::amortization::{DownPaymentMode, LoanTerms};
//!
//! // 15% of the price down by default
//! let terms = LoanTerms::new(
//!     300_000.0_f64,
//!     5.0,
//!     20.0,
//!     DownPaymentMode::default(),
//! )
//! .unwrap();
//!
//! assert_eq!(terms.down_payment(), 45_000.0);
//! assert_eq!(terms.total_payments(), 240);
//! ```

pub mod annuity;
mod schedule;
mod terms;

pub use schedule::{AmortizationResult, PaymentScheduleEntry};
pub use terms::{DownPaymentMode, LoanTerms};
