//! Errors for account operations.
//!
//! Every failing operation leaves the account exactly as it was, so callers
//! can report the error and keep using the account.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::account::money::{Money, MoneyError};

/// Errors that can occur while constructing or mutating an [`Account`].
///
/// [`Account`]: crate::account::Account
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum AccountError {
    /// A deposit amount was zero or negative.
    #[error("Amount must be positive: {amount}")]
    InvalidAmount {
        /// The rejected amount.
        amount: Money,
    },

    /// A withdrawal asked for more than the current balance.
    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        /// The amount the caller tried to withdraw.
        requested: Money,
        /// The balance at the time of the request.
        available: Money,
    },

    /// An account was opened with a negative balance.
    #[error("Initial balance cannot be negative: {amount}")]
    NegativeInitialBalance {
        /// The rejected opening balance.
        amount: Money,
    },

    /// The owner identifier was empty or blank.
    #[error("Owner must not be empty")]
    EmptyOwner,

    /// Decimal arithmetic failed.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Result alias for account operations.
pub type AccountResult<T> = Result<T, AccountError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal::Decimal;

    #[rstest]
    fn display_invalid_amount() {
        let error = AccountError::InvalidAmount {
            amount: Money::new(-5),
        };

        assert_eq!(error.to_string(), "Amount must be positive: -5");
    }

    #[rstest]
    fn display_insufficient_funds() {
        let error = AccountError::InsufficientFunds {
            requested: Money::new(10),
            available: Money::zero(),
        };

        let message = error.to_string();
        assert!(message.starts_with("Insufficient funds"));
        assert!(message.contains("requested 10"));
        assert!(message.contains("available 0"));
    }

    #[rstest]
    fn display_empty_owner() {
        assert_eq!(AccountError::EmptyOwner.to_string(), "Owner must not be empty");
    }

    #[rstest]
    fn money_error_converts_transparently() {
        let money_error = MoneyError::Overflow {
            left: Decimal::MAX,
            right: Decimal::ONE,
        };
        let error: AccountError = money_error.clone().into();

        assert_eq!(error.to_string(), money_error.to_string());
        assert_eq!(error, AccountError::Money(money_error));
    }

    #[rstest]
    fn serialize_deserialize_insufficient_funds() {
        let original = AccountError::InsufficientFunds {
            requested: Money::new(1000),
            available: Money::new(500),
        };
        let serialized = serde_json::to_string(&original).unwrap();
        let deserialized: AccountError = serde_json::from_str(&serialized).unwrap();

        assert_eq!(original, deserialized);
    }
}
