//! Loan terms and down-payment configuration.

use mortgage_core::types::InvalidInputError;
use num_traits::Float;

/// How the down payment is determined.
///
/// Either a direct user-supplied amount, or an amount derived as a fixed
/// percentage of the property price (15% by default). One configuration
/// value covers both, so callers never maintain parallel code paths.
///
/// # Examples
/// ```
/// use mortgage_models::amortization::DownPaymentMode;
///
/// let explicit = DownPaymentMode::Explicit(40_000.0_f64);
/// let derived: DownPaymentMode<f64> = DownPaymentMode::default();
///
/// assert_eq!(explicit.resolve(200_000.0), 40_000.0);
/// assert_eq!(derived.resolve(200_000.0), 30_000.0); // 15% of price
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DownPaymentMode<T> {
    /// User-supplied down payment amount in currency units.
    Explicit(T),
    /// Down payment derived as a percentage of the property price.
    PercentOfPrice {
        /// Percentage of the property price paid upfront (0..100).
        percent: T,
    },
}

impl<T: Float> DownPaymentMode<T> {
    /// Creates a percent-of-price mode with the default of 15%.
    pub fn default_percent() -> Self {
        DownPaymentMode::PercentOfPrice {
            percent: T::from(15.0).unwrap(),
        }
    }

    /// Resolves the down payment amount for a given property price.
    #[inline]
    pub fn resolve(&self, property_price: T) -> T {
        match *self {
            DownPaymentMode::Explicit(amount) => amount,
            DownPaymentMode::PercentOfPrice { percent } => {
                property_price * percent / T::from(100.0).unwrap()
            }
        }
    }
}

impl<T: Float> Default for DownPaymentMode<T> {
    fn default() -> Self {
        Self::default_percent()
    }
}

/// Validated loan parameters for a fixed-rate mortgage.
///
/// All preconditions are checked at construction; every derived quantity
/// and the amortization itself are infallible afterwards.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
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
/// assert_eq!(terms.loan_amount(), 160_000.0);
/// assert_eq!(terms.monthly_rate(), 0.005);
/// assert_eq!(terms.total_payments(), 360);
/// ```
// Serialize only: deserialisation would bypass the constructor checks.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LoanTerms<T: Float> {
    /// Property price (currency units).
    property_price: T,
    /// Annual nominal interest rate in percent.
    annual_rate_pct: T,
    /// Loan duration in years (fractional years allowed).
    duration_years: T,
    /// Down payment configuration.
    down_payment_mode: DownPaymentMode<T>,
}

impl<T: Float> LoanTerms<T> {
    /// Creates validated loan terms.
    ///
    /// # Arguments
    /// * `property_price` - Property price (must be positive)
    /// * `annual_rate_pct` - Annual nominal rate in percent (non-negative)
    /// * `duration_years` - Loan duration in years (must cover at least
    ///   one monthly payment)
    /// * `down_payment_mode` - Explicit amount or percent of price
    ///
    /// # Errors
    /// - `InvalidInputError::NonPositivePrice` if `property_price <= 0`
    /// - `InvalidInputError::NonPositiveDuration` if `duration_years <= 0`
    ///   or it rounds to zero monthly payments
    /// - `InvalidInputError::NegativeRate` if `annual_rate_pct < 0`
    /// - `InvalidInputError::DownPaymentOutOfRange` if the resolved down
    ///   payment falls outside `[0, property_price)`
    ///
    /// # Examples
    /// ```
    /// use mortgage_models::amortization::{DownPaymentMode, LoanTerms};
    ///
    /// // Down payment equal to the price leaves nothing to finance
    /// let result = LoanTerms::new(
    ///     200_000.0_f64,
    ///     6.0,
    ///     30.0,
    ///     DownPaymentMode::Explicit(200_000.0),
    /// );
    /// assert!(result.is_err());
    /// ```
    pub fn new(
        property_price: T,
        annual_rate_pct: T,
        duration_years: T,
        down_payment_mode: DownPaymentMode<T>,
    ) -> Result<Self, InvalidInputError> {
        let zero = T::zero();

        if property_price <= zero {
            return Err(InvalidInputError::NonPositivePrice {
                price: property_price.to_f64().unwrap_or(0.0),
            });
        }

        if annual_rate_pct < zero {
            return Err(InvalidInputError::NegativeRate {
                rate: annual_rate_pct.to_f64().unwrap_or(0.0),
            });
        }

        let months_per_year = T::from(12.0).unwrap();
        let payments = (duration_years * months_per_year).round();
        if duration_years <= zero || payments < T::one() {
            return Err(InvalidInputError::NonPositiveDuration {
                years: duration_years.to_f64().unwrap_or(0.0),
            });
        }

        let down_payment = down_payment_mode.resolve(property_price);
        if down_payment < zero || down_payment >= property_price {
            return Err(InvalidInputError::DownPaymentOutOfRange {
                down_payment: down_payment.to_f64().unwrap_or(0.0),
                property_price: property_price.to_f64().unwrap_or(0.0),
            });
        }

        Ok(Self {
            property_price,
            annual_rate_pct,
            duration_years,
            down_payment_mode,
        })
    }

    /// Returns the property price.
    #[inline]
    pub fn property_price(&self) -> T {
        self.property_price
    }

    /// Returns the annual nominal rate in percent.
    #[inline]
    pub fn annual_rate_pct(&self) -> T {
        self.annual_rate_pct
    }

    /// Returns the loan duration in years.
    #[inline]
    pub fn duration_years(&self) -> T {
        self.duration_years
    }

    /// Returns the down payment configuration.
    #[inline]
    pub fn down_payment_mode(&self) -> DownPaymentMode<T> {
        self.down_payment_mode
    }

    /// Returns the resolved down payment amount.
    #[inline]
    pub fn down_payment(&self) -> T {
        self.down_payment_mode.resolve(self.property_price)
    }

    /// Returns the financed amount: price minus down payment.
    ///
    /// Strictly positive by construction.
    #[inline]
    pub fn loan_amount(&self) -> T {
        self.property_price - self.down_payment()
    }

    /// Returns the periodic (monthly) interest rate as a fraction.
    ///
    /// `monthly_rate = annual_rate_pct / (12 * 100)`
    #[inline]
    pub fn monthly_rate(&self) -> T {
        self.annual_rate_pct / T::from(1200.0).unwrap()
    }

    /// Returns the number of monthly payments: `round(duration_years * 12)`.
    ///
    /// At least 1 by construction.
    #[inline]
    pub fn total_payments(&self) -> u32 {
        let payments = (self.duration_years * T::from(12.0).unwrap()).round();
        payments.to_u32().unwrap_or(1)
    }
}
