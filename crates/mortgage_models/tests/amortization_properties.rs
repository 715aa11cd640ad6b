//! Property-based tests for the amortization identities.
//!
//! These exercise the calculator across randomly drawn loan parameters:
//! the principal sum must reproduce the loan amount, the final balance
//! must vanish, and the grand total must hold exactly by construction.

use mortgage_core::types::money::round_currency;
use mortgage_models::amortization::{DownPaymentMode, LoanTerms};
use proptest::prelude::*;

fn price_strategy() -> impl Strategy<Value = f64> {
    10_000.0..2_000_000.0_f64
}

fn rate_strategy() -> impl Strategy<Value = f64> {
    0.0..15.0_f64
}

fn years_strategy() -> impl Strategy<Value = f64> {
    1.0..40.0_f64
}

fn percent_strategy() -> impl Strategy<Value = f64> {
    0.0..90.0_f64
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_principal_sum_reproduces_loan_amount(
        price in price_strategy(),
        rate in rate_strategy(),
        years in years_strategy(),
        percent in percent_strategy()
    ) {
        let terms = LoanTerms::new(
            price,
            rate,
            years,
            DownPaymentMode::PercentOfPrice { percent },
        )
        .unwrap();
        let result = terms.amortize();

        let loan = terms.loan_amount();
        let tolerance = loan * 1e-9 + 1e-6;
        prop_assert!(
            (result.total_paid_principal - loan).abs() < tolerance,
            "sum of principal {} should equal loan amount {}",
            result.total_paid_principal,
            loan
        );
    }

    #[test]
    fn prop_final_balance_rounds_to_zero(
        price in price_strategy(),
        rate in rate_strategy(),
        years in years_strategy(),
        percent in percent_strategy()
    ) {
        let terms = LoanTerms::new(
            price,
            rate,
            years,
            DownPaymentMode::PercentOfPrice { percent },
        )
        .unwrap();
        let result = terms.amortize();

        let last = result.schedule.last().unwrap();
        prop_assert_eq!(round_currency(last.remaining_loan), 0.0);
    }

    #[test]
    fn prop_grand_total_identity_exact(
        price in price_strategy(),
        rate in rate_strategy(),
        years in years_strategy(),
        percent in percent_strategy()
    ) {
        let terms = LoanTerms::new(
            price,
            rate,
            years,
            DownPaymentMode::PercentOfPrice { percent },
        )
        .unwrap();
        let result = terms.summary();

        // Exact by construction, not re-derived
        prop_assert_eq!(
            result.total_paid_amount,
            result.total_paid_principal + result.total_paid_interest + result.down_payment
        );
    }

    #[test]
    fn prop_schedule_length_and_months(
        price in price_strategy(),
        rate in rate_strategy(),
        years in years_strategy()
    ) {
        let terms = LoanTerms::new(price, rate, years, DownPaymentMode::default()).unwrap();
        let result = terms.amortize();

        let expected = (years * 12.0).round() as usize;
        prop_assert_eq!(result.schedule.len(), expected);
        for (i, entry) in result.schedule.iter().enumerate() {
            prop_assert_eq!(entry.month as usize, i + 1);
        }
    }

    #[test]
    fn prop_interest_strictly_increases_with_rate(
        price in price_strategy(),
        rate in 0.1..10.0_f64,
        years in years_strategy()
    ) {
        let low = LoanTerms::new(price, rate, years, DownPaymentMode::default())
            .unwrap()
            .summary();
        let high = LoanTerms::new(price, rate + 1.0, years, DownPaymentMode::default())
            .unwrap()
            .summary();

        prop_assert!(high.total_paid_interest > low.total_paid_interest);
    }

    #[test]
    fn prop_no_nan_or_infinity(
        price in price_strategy(),
        rate in rate_strategy(),
        years in years_strategy()
    ) {
        let terms = LoanTerms::new(price, rate, years, DownPaymentMode::default()).unwrap();
        let result = terms.amortize();

        prop_assert!(result.total_paid_amount.is_finite());
        for entry in &result.schedule {
            prop_assert!(entry.monthly_payment.is_finite());
            prop_assert!(entry.principal_paid.is_finite());
            prop_assert!(entry.interest_paid.is_finite());
            prop_assert!(entry.remaining_loan.is_finite());
        }
    }
}

#[test]
fn zero_interest_has_no_indeterminate_payment() {
    let terms = LoanTerms::new(
        250_000.0_f64,
        0.0,
        25.0,
        DownPaymentMode::Explicit(50_000.0),
    )
    .unwrap();
    let result = terms.amortize();

    let expected = 200_000.0 / 300.0;
    for entry in &result.schedule {
        assert_eq!(entry.monthly_payment, expected);
    }
}

#[test]
fn invalid_inputs_produce_no_result() {
    use mortgage_core::types::InvalidInputError;

    let cases = [
        LoanTerms::new(0.0_f64, 6.0, 30.0, DownPaymentMode::default()),
        LoanTerms::new(200_000.0_f64, 6.0, -1.0, DownPaymentMode::default()),
        LoanTerms::new(200_000.0_f64, -5.0, 30.0, DownPaymentMode::default()),
        LoanTerms::new(
            200_000.0_f64,
            6.0,
            30.0,
            DownPaymentMode::Explicit(200_000.0),
        ),
    ];

    for case in cases {
        let err = case.unwrap_err();
        let _: InvalidInputError = err;
    }
}
