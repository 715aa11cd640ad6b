//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod schedule;
pub mod totals;

use mortgage_models::amortization::{DownPaymentMode, LoanTerms};

use crate::{LoanArgs, Result};

/// Builds validated loan terms from command-line arguments.
///
/// An explicit `--down` wins over `--down-percent`; without it the down
/// payment is derived from the percentage (default 15).
pub fn loan_terms(args: &LoanArgs) -> Result<LoanTerms<f64>> {
    let mode = match args.down {
        Some(amount) => DownPaymentMode::Explicit(amount),
        None => DownPaymentMode::PercentOfPrice {
            percent: args.down_percent,
        },
    };

    Ok(LoanTerms::new(args.price, args.rate, args.years, mode)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(down: Option<f64>, down_percent: f64) -> LoanArgs {
        LoanArgs {
            price: 200_000.0,
            rate: 6.0,
            years: 30.0,
            down,
            down_percent,
            format: "table".to_string(),
        }
    }

    #[test]
    fn test_explicit_down_wins() {
        let terms = loan_terms(&args(Some(40_000.0), 15.0)).unwrap();
        assert_eq!(terms.down_payment(), 40_000.0);
    }

    #[test]
    fn test_percent_used_without_explicit_down() {
        let terms = loan_terms(&args(None, 15.0)).unwrap();
        assert_eq!(terms.down_payment(), 30_000.0);
    }

    #[test]
    fn test_invalid_input_maps_to_cli_error() {
        let result = loan_terms(&args(Some(200_000.0), 15.0));
        assert!(matches!(result, Err(crate::CliError::Input(_))));
    }
}
