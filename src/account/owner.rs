//! Owner identifier value object.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::account::errors::AccountError;

/// The non-empty name of an account owner.
///
/// Surrounding whitespace is trimmed; a blank name is rejected.
///
/// # Examples
///
/// ```
/// use oop_tour::account::OwnerName;
///
/// let owner = OwnerName::create("  Alex ").unwrap();
/// assert_eq!(owner.value(), "Alex");
///
/// assert!(OwnerName::create("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OwnerName(String);

impl OwnerName {
    /// Creates an `OwnerName` from a string.
    ///
    /// # Errors
    ///
    /// Returns `AccountError::EmptyOwner` if the trimmed value is empty.
    pub fn create(value: &str) -> Result<Self, AccountError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            Err(AccountError::EmptyOwner)
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    /// Returns a reference to the inner string.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for OwnerName {
    type Error = AccountError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::create(&value)
    }
}

impl From<OwnerName> for String {
    fn from(owner: OwnerName) -> Self {
        owner.0
    }
}

impl fmt::Display for OwnerName {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Alex", "Alex")]
    #[case("  Alex  ", "Alex")]
    #[case("Mary Jane", "Mary Jane")]
    fn create_accepts_non_blank(#[case] input: &str, #[case] expected: &str) {
        let owner = OwnerName::create(input).unwrap();

        assert_eq!(owner.value(), expected);
        assert_eq!(owner.to_string(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn create_rejects_blank(#[case] input: &str) {
        assert_eq!(OwnerName::create(input), Err(AccountError::EmptyOwner));
    }

    #[rstest]
    fn deserialize_validates() {
        let owner: OwnerName = serde_json::from_str("\"Alex\"").unwrap();
        assert_eq!(owner.value(), "Alex");

        let blank: Result<OwnerName, _> = serde_json::from_str("\"  \"");
        assert!(blank.is_err());
    }
}
