//! # Mortgage Models (Calculator Layer)
//!
//! Loan terms, the fixed-payment annuity formula, and amortization
//! schedule generation.
//!
//! This crate provides:
//! - Validated loan terms with explicit or percent-of-price down payments
//! - The closed-form annuity payment, including the zero-interest case
//! - Month-by-month amortization schedules with summary totals
//!
//! ## Design Principles
//!
//! - **Pure computation** — no I/O, no shared state, no failure modes
//!   after construction
//! - **Full precision inside, one rounding rule outside** — amounts are
//!   carried as floating point and rounded only for display
//!
//! ## Example
//!
//! ```
//! use mortgage_models::amortization::{DownPaymentMode, LoanTerms};
//!
//! let terms = LoanTerms::new(
//!     200_000.0_f64,
//!     6.0,
//!     30.0,
//!     DownPaymentMode::Explicit(40_000.0),
//! )
//! .unwrap();
//!
//! let result = terms.amortize();
//! assert_eq!(result.schedule.len(), 360);
//! assert!((result.total_paid_principal - 160_000.0).abs() < 1e-6);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod amortization;
