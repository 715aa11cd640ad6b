//! Foundation types shared across the workspace.
//!
//! This module provides:
//! - [`InvalidInputError`]: Structured loan-parameter validation errors
//! - [`money`]: The workspace-wide currency rounding rule

mod error;
pub mod money;

pub use error::InvalidInputError;
