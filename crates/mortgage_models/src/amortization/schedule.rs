//! Amortization schedule generation and summary totals.

use mortgage_core::types::money::round_currency;
use num_traits::Float;

use super::annuity;
use super::terms::LoanTerms;

/// One month's payment split into principal and interest.
///
/// Amounts are carried at full floating-point precision; [`Self::rounded`]
/// applies the workspace currency rounding rule for display.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PaymentScheduleEntry<T> {
    /// 1-based month index.
    pub month: u32,
    /// Constant monthly payment.
    pub monthly_payment: T,
    /// Portion of the payment reducing the balance.
    pub principal_paid: T,
    /// Portion of the payment covering interest.
    pub interest_paid: T,
    /// Outstanding balance after this payment.
    pub remaining_loan: T,
}

impl<T: Float> PaymentScheduleEntry<T> {
    /// Returns a copy with every amount rounded to the nearest whole unit.
    pub fn rounded(&self) -> Self {
        Self {
            month: self.month,
            monthly_payment: round_currency(self.monthly_payment),
            principal_paid: round_currency(self.principal_paid),
            interest_paid: round_currency(self.interest_paid),
            remaining_loan: round_currency(self.remaining_loan),
        }
    }
}

/// Summary totals and (optionally) the full month-by-month schedule.
///
/// `total_paid_amount` always includes the down payment, regardless of how
/// the down payment was configured: it is the borrower's total cash outlay.
///
/// # Examples
/// ```
/// use mortgage_models::amortization::{DownPaymentMode, LoanTerms};
///
/// let terms = LoanTerms::new(
///     300_000.0_f64,
///     5.0,
///     20.0,
///     DownPaymentMode::default(),
/// )
/// .unwrap();
///
/// let result = terms.amortize();
/// assert_eq!(result.down_payment, 45_000.0);
/// assert_eq!(result.schedule.len(), 240);
///
/// let identity = result.total_paid_principal + result.total_paid_interest
///     + result.down_payment;
/// assert_eq!(result.total_paid_amount, identity);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AmortizationResult<T> {
    /// Resolved down payment.
    pub down_payment: T,
    /// Sum of all principal payments (equals the loan amount up to
    /// floating-point tolerance).
    pub total_paid_principal: T,
    /// Sum of all interest payments.
    pub total_paid_interest: T,
    /// Total cash outlay: principal + interest + down payment.
    pub total_paid_amount: T,
    /// Month-by-month schedule, in chronological order. Empty when the
    /// caller asked for totals only.
    pub schedule: Vec<PaymentScheduleEntry<T>>,
}

impl<T: Float> AmortizationResult<T> {
    /// Returns a copy with every amount rounded to the nearest whole unit.
    pub fn rounded(&self) -> Self {
        Self {
            down_payment: round_currency(self.down_payment),
            total_paid_principal: round_currency(self.total_paid_principal),
            total_paid_interest: round_currency(self.total_paid_interest),
            total_paid_amount: round_currency(self.total_paid_amount),
            schedule: self.schedule.iter().map(|e| e.rounded()).collect(),
        }
    }
}

impl<T: Float> LoanTerms<T> {
    /// Computes the full amortization: summary totals plus the complete
    /// month-by-month schedule.
    ///
    /// Infallible: every precondition was checked when the terms were
    /// constructed.
    ///
    /// # Examples
    /// ```
    /// use mortgage_models::amortization::{DownPaymentMode, LoanTerms};
    ///
    /// let terms = LoanTerms::new(
    ///     200_000.0_f64,
    ///     6.0,
    ///     30.0,
    ///     DownPaymentMode::Explicit(40_000.0),
    /// )
    /// .unwrap();
    ///
    /// let result = terms.amortize();
    /// assert_eq!(result.schedule.len(), 360);
    ///
    /// // The balance is fully paid off at the end
    /// let last = result.schedule.last().unwrap();
    /// assert!(last.remaining_loan.abs() < 1e-6);
    /// ```
    pub fn amortize(&self) -> AmortizationResult<T> {
        self.run(true)
    }

    /// Computes summary totals only, skipping schedule allocation.
    ///
    /// Produces the same totals as [`Self::amortize`] with an empty
    /// `schedule`, for callers that only render the summary labels.
    pub fn summary(&self) -> AmortizationResult<T> {
        self.run(false)
    }

    fn run(&self, include_schedule: bool) -> AmortizationResult<T> {
        let total_payments = self.total_payments();
        let monthly_rate = self.monthly_rate();
        let loan_amount = self.loan_amount();
        let monthly_payment = annuity::monthly_payment(loan_amount, monthly_rate, total_payments);

        let mut remaining_loan = loan_amount;
        let mut total_paid_principal = T::zero();
        let mut total_paid_interest = T::zero();
        let mut schedule = if include_schedule {
            Vec::with_capacity(total_payments as usize)
        } else {
            Vec::new()
        };

        for month in 1..=total_payments {
            let interest_paid = remaining_loan * monthly_rate;
            let principal_paid = monthly_payment - interest_paid;
            remaining_loan = remaining_loan - principal_paid;
            total_paid_principal = total_paid_principal + principal_paid;
            total_paid_interest = total_paid_interest + interest_paid;

            if include_schedule {
                schedule.push(PaymentScheduleEntry {
                    month,
                    monthly_payment,
                    principal_paid,
                    interest_paid,
                    remaining_loan,
                });
            }
        }

        let down_payment = self.down_payment();

        AmortizationResult {
            down_payment,
            total_paid_principal,
            total_paid_interest,
            total_paid_amount: total_paid_principal + total_paid_interest + down_payment,
            schedule,
        }
    }
}
