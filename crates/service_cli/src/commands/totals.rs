//! Totals command implementation
//!
//! Computes summary totals without building the per-month schedule.

use mortgage_core::types::money::format_currency;
use tracing::info;

use crate::{CliError, LoanArgs, Result};

/// Run the totals command
pub fn run(args: &LoanArgs) -> Result<()> {
    let terms = super::loan_terms(args)?;

    info!("Computing summary totals...");
    info!("  Loan amount: {}", terms.loan_amount());

    let result = terms.summary();

    match args.format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&result.rounded())?);
        }
        "table" => {
            println!("\nDown payment:         {}", format_currency(result.down_payment));
            println!("Total paid principal: {}", format_currency(result.total_paid_principal));
            println!("Total paid interest:  {}", format_currency(result.total_paid_interest));
            println!("Total paid amount:    {}", format_currency(result.total_paid_amount));
        }
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: json, table",
                other
            )));
        }
    }

    Ok(())
}
