//! The `Account` entity.
//!
//! `Account` owns its balance outright: the field is private and the only
//! ways to change it are [`Account::deposit`] and [`Account::withdraw`].
//! The balance is never negative at any observable point.

use serde::Serialize;

use crate::account::errors::{AccountError, AccountResult};
use crate::account::money::Money;
use crate::account::owner::OwnerName;

/// A bank account with an owner and a non-negative balance.
///
/// # Examples
///
/// ```rust
/// use oop_tour::account::{Account, AccountError, Money, OwnerName};
///
/// let mut account = Account::new(OwnerName::create("Alex").unwrap());
/// account.deposit(Money::new(100)).unwrap();
/// account.withdraw(Money::new(30)).unwrap();
/// assert_eq!(account.balance(), Money::new(70));
///
/// let error = account.withdraw(Money::new(500)).unwrap_err();
/// assert!(matches!(error, AccountError::InsufficientFunds { .. }));
/// assert_eq!(account.balance(), Money::new(70));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Account {
    owner: OwnerName,
    balance: Money,
}

impl Account {
    /// Opens an account with a zero balance.
    #[must_use]
    pub const fn new(owner: OwnerName) -> Self {
        Self {
            owner,
            balance: Money::zero(),
        }
    }

    /// Opens an account with an initial balance.
    ///
    /// # Errors
    ///
    /// Returns `AccountError::NegativeInitialBalance` if `initial_balance < 0`.
    pub fn with_balance(owner: OwnerName, initial_balance: Money) -> AccountResult<Self> {
        if initial_balance.is_negative() {
            return Err(AccountError::NegativeInitialBalance {
                amount: initial_balance,
            });
        }
        Ok(Self {
            owner,
            balance: initial_balance,
        })
    }

    /// Returns the owner of this account.
    #[must_use]
    pub const fn owner(&self) -> &OwnerName {
        &self.owner
    }

    /// Returns the current balance.
    #[must_use]
    pub const fn balance(&self) -> Money {
        self.balance
    }

    /// Adds `amount` to the balance.
    ///
    /// # Errors
    ///
    /// - `AccountError::InvalidAmount` if `amount <= 0`
    /// - `AccountError::Money` if the new balance overflows
    pub fn deposit(&mut self, amount: Money) -> AccountResult<()> {
        if !amount.is_positive() {
            tracing::warn!(owner = %self.owner, %amount, "deposit rejected: amount not positive");
            return Err(AccountError::InvalidAmount { amount });
        }
        self.balance = self.balance.checked_add(&amount)?;
        tracing::debug!(owner = %self.owner, %amount, balance = %self.balance, "deposit applied");
        Ok(())
    }

    /// Removes `amount` from the balance.
    ///
    /// Only the upper bound is checked. A negative `amount` is accepted and
    /// raises the balance, which keeps it non-negative.
    ///
    /// # Errors
    ///
    /// - `AccountError::InsufficientFunds` if `amount > balance`
    /// - `AccountError::Money` if the new balance overflows
    pub fn withdraw(&mut self, amount: Money) -> AccountResult<()> {
        if amount > self.balance {
            tracing::warn!(
                owner = %self.owner,
                %amount,
                balance = %self.balance,
                "withdrawal rejected: insufficient funds"
            );
            return Err(AccountError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }
        self.balance = self.balance.checked_sub(&amount)?;
        tracing::debug!(owner = %self.owner, %amount, balance = %self.balance, "withdrawal applied");
        Ok(())
    }
}
