//! Associated constructors and associated functions.

use serde::{Deserialize, Serialize};

/// Toppings that make a pizza non-vegetarian.
const NON_VEGETARIAN_TOPPINGS: [&str; 4] = ["pepperoni", "ham", "bacon", "chicken"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pizza {
    /// Toppings in the order they were added.
    pub toppings: Vec<String>,
}

impl Pizza {
    #[must_use]
    pub fn new<I, S>(toppings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            toppings: toppings.into_iter().map(Into::into).collect(),
        }
    }

    /// Tomato, mozzarella and basil.
    #[must_use]
    pub fn margherita() -> Self {
        Self::new(["tomato", "mozzarella", "basil"])
    }

    /// Returns `true` if none of `toppings` contain meat.
    ///
    /// Does not need a `Pizza`; any list of topping names will do.
    ///
    /// ```
    /// use oop_tour::pizza::Pizza;
    ///
    /// assert!(Pizza::is_vegetarian(&["tomato", "basil"]));
    /// assert!(!Pizza::is_vegetarian(&["cheese", "ham"]));
    /// ```
    #[must_use]
    pub fn is_vegetarian<S: AsRef<str>>(toppings: &[S]) -> bool {
        !toppings
            .iter()
            .any(|topping| NON_VEGETARIAN_TOPPINGS.contains(&topping.as_ref()))
    }

    #[must_use]
    pub fn is_vegetarian_pizza(&self) -> bool {
        Self::is_vegetarian(self.toppings.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn margherita_has_classic_toppings() {
        let pizza = Pizza::margherita();

        assert_eq!(pizza.toppings, vec!["tomato", "mozzarella", "basil"]);
        assert!(pizza.is_vegetarian_pizza());
    }

    #[rstest]
    #[case(&["pepperoni"], false)]
    #[case(&["mushroom", "chicken"], false)]
    #[case(&["mushroom", "olive"], true)]
    #[case(&[], true)]
    fn is_vegetarian_checks_every_topping(#[case] toppings: &[&str], #[case] expected: bool) {
        assert_eq!(Pizza::is_vegetarian(toppings), expected);
    }

    #[rstest]
    fn matching_is_case_sensitive() {
        assert!(Pizza::is_vegetarian(&["Ham"]));
    }
}
