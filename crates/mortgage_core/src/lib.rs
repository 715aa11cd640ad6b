//! # Mortgage Core (Foundation Layer)
//!
//! Shared foundation types for the mortgage amortization workspace.
//!
//! This crate provides:
//! - Structured input-validation errors ([`types::InvalidInputError`])
//! - The workspace-wide currency rounding rule ([`types::money`])
//!
//! ## Design Principles
//!
//! - **Validate once, at construction** — downstream computation is
//!   infallible after the preconditions pass
//! - **One rounding rule** — every currency-formatted figure in the
//!   workspace goes through the same function

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod types;
