//! Encapsulated bank account.
//!
//! # Structure
//!
//! - [`aggregate`] - The [`Account`] entity and its deposit/withdraw rules
//! - [`errors`] - [`AccountError`] and the [`AccountResult`] alias
//! - [`money`] - The [`Money`] value object
//! - [`owner`] - The [`OwnerName`] value object

pub mod aggregate;
pub mod errors;
pub mod money;
pub mod owner;

pub use aggregate::Account;
pub use errors::{AccountError, AccountResult};
pub use money::{Money, MoneyError};
pub use owner::OwnerName;
