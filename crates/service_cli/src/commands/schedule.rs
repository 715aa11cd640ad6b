//! Schedule command implementation
//!
//! Renders the full month-by-month amortization table plus summary totals.

use mortgage_core::types::money::format_currency;
use tracing::info;

use crate::{CliError, LoanArgs, Result};

/// Run the schedule command
pub fn run(args: &LoanArgs) -> Result<()> {
    let terms = super::loan_terms(args)?;

    info!("Amortizing...");
    info!("  Property price: {}", terms.property_price());
    info!("  Annual rate: {}%", terms.annual_rate_pct());
    info!("  Duration: {} years", terms.duration_years());
    info!("  Monthly payments: {}", terms.total_payments());

    let result = terms.amortize();

    match args.format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&result.rounded())?);
        }
        "table" => {
            println!("\n┌────────┬────────────┬────────────┬────────────┬──────────────┐");
            println!("│ Month  │ Payment    │ Principal  │ Interest   │ Remaining    │");
            println!("├────────┼────────────┼────────────┼────────────┼──────────────┤");
            for entry in &result.schedule {
                println!(
                    "│ {:>6} │ {:>10} │ {:>10} │ {:>10} │ {:>12} │",
                    entry.month,
                    format_currency(entry.monthly_payment),
                    format_currency(entry.principal_paid),
                    format_currency(entry.interest_paid),
                    format_currency(entry.remaining_loan),
                );
            }
            println!("└────────┴────────────┴────────────┴────────────┴──────────────┘");

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

    info!("Amortization complete");
    Ok(())
}
