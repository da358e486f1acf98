//! Money value object.
//!
//! A strongly-typed monetary amount backed by `Decimal`, so balances never
//! accumulate binary floating point error.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when working with Money.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum MoneyError {
    /// The amount string could not be parsed as a valid decimal.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    /// The result does not fit in a `Decimal`.
    #[error("Arithmetic overflow: {left} and {right}")]
    Overflow {
        /// The left operand.
        left: Decimal,
        /// The right operand.
        right: Decimal,
    },
}

/// A monetary value.
///
/// `Money` is immutable; arithmetic returns new values and reports overflow
/// instead of panicking.
///
/// # Examples
///
/// ```rust
/// use oop_tour::account::Money;
///
/// let total = Money::new(100).checked_add(&Money::new(50)).unwrap();
/// assert_eq!(total.to_string(), "150");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money {
    amount: Decimal,
}

impl Money {
    /// Creates a new `Money` value from a whole amount.
    #[must_use]
    pub fn new(amount: i64) -> Self {
        Self {
            amount: Decimal::from(amount),
        }
    }

    /// Creates a new `Money` value from a `Decimal` amount.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use oop_tour::account::Money;
    /// use rust_decimal::Decimal;
    ///
    /// let money = Money::from_decimal(Decimal::new(1050, 2));
    /// assert_eq!(money.to_string(), "10.50");
    /// ```
    #[must_use]
    pub const fn from_decimal(amount: Decimal) -> Self {
        Self { amount }
    }

    /// Parses a string amount into `Money`.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::InvalidAmount` if the string is not a decimal number.
    pub fn parse(amount: &str) -> Result<Self, MoneyError> {
        amount
            .trim()
            .parse::<Decimal>()
            .map(Self::from_decimal)
            .map_err(|_| MoneyError::InvalidAmount(amount.to_string()))
    }

    /// Creates a zero amount.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            amount: Decimal::ZERO,
        }
    }

    /// Returns the amount as a `Decimal`.
    #[must_use]
    pub const fn amount(&self) -> &Decimal {
        &self.amount
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // Decimal::is_zero is not const
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns `true` if the amount is strictly greater than zero.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    /// Returns `true` if the amount is strictly less than zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount < Decimal::ZERO
    }

    /// Adds two money values.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::Overflow` if the sum is out of range.
    pub fn checked_add(&self, other: &Self) -> Result<Self, MoneyError> {
        self.amount
            .checked_add(other.amount)
            .map(Self::from_decimal)
            .ok_or(MoneyError::Overflow {
                left: self.amount,
                right: other.amount,
            })
    }

    /// Subtracts `other` from this value.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::Overflow` if the difference is out of range.
    pub fn checked_sub(&self, other: &Self) -> Result<Self, MoneyError> {
        self.amount
            .checked_sub(other.amount)
            .map(Self::from_decimal)
            .ok_or(MoneyError::Overflow {
                left: self.amount,
                right: other.amount,
            })
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<i64> for Money {
    fn from(amount: i64) -> Self {
        Self::new(amount)
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self::from_decimal(amount)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // =========================================================================
    // Construction Tests
    // =========================================================================

    #[rstest]
    fn new_creates_whole_amount() {
        let money = Money::new(1000);

        assert_eq!(*money.amount(), Decimal::from(1000));
    }

    #[rstest]
    fn default_is_zero() {
        assert!(Money::default().is_zero());
        assert_eq!(Money::default(), Money::zero());
    }

    #[rstest]
    #[case("10.50", Decimal::new(1050, 2))]
    #[case("  42 ", Decimal::from(42))]
    #[case("-5", Decimal::from(-5))]
    fn parse_valid_amount(#[case] input: &str, #[case] expected: Decimal) {
        let money = Money::parse(input).unwrap();

        assert_eq!(*money.amount(), expected);
    }

    #[rstest]
    fn parse_invalid_amount_returns_error() {
        let error = Money::parse("not-a-number").unwrap_err();

        assert_eq!(error, MoneyError::InvalidAmount("not-a-number".to_string()));
    }

    // =========================================================================
    // Sign Tests
    // =========================================================================

    #[rstest]
    #[case(100, true, false)]
    #[case(0, false, false)]
    #[case(-100, false, true)]
    fn sign_predicates(#[case] amount: i64, #[case] positive: bool, #[case] negative: bool) {
        let money = Money::new(amount);

        assert_eq!(money.is_positive(), positive);
        assert_eq!(money.is_negative(), negative);
    }

    // =========================================================================
    // Arithmetic Tests
    // =========================================================================

    #[rstest]
    fn checked_add_sums_amounts() {
        let sum = Money::new(100).checked_add(&Money::new(50)).unwrap();

        assert_eq!(sum, Money::new(150));
    }

    #[rstest]
    fn checked_sub_subtracts_amounts() {
        let difference = Money::new(100).checked_sub(&Money::new(30)).unwrap();

        assert_eq!(difference, Money::new(70));
    }

    #[rstest]
    fn checked_add_reports_overflow() {
        let max = Money::from_decimal(Decimal::MAX);
        let error = max.checked_add(&Money::new(1)).unwrap_err();

        assert_eq!(
            error,
            MoneyError::Overflow {
                left: Decimal::MAX,
                right: Decimal::ONE,
            }
        );
    }

    // =========================================================================
    // Display / Ordering Tests
    // =========================================================================

    #[rstest]
    fn display_renders_plain_decimal() {
        assert_eq!(Money::new(70).to_string(), "70");
        assert_eq!(Money::from_decimal(Decimal::new(1050, 2)).to_string(), "10.50");
    }

    #[rstest]
    fn ordering_follows_amount() {
        assert!(Money::new(10) < Money::new(20));
        assert!(Money::new(-1) < Money::zero());
    }

    #[rstest]
    fn serializes_as_decimal_string() {
        let serialized = serde_json::to_string(&Money::from_decimal(Decimal::new(1050, 2))).unwrap();

        assert_eq!(serialized, "\"10.50\"");
    }
}
