//! A plain data type with a behaviour method.

use serde::{Deserialize, Serialize};

/// A person who can introduce themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Display name.
    pub name: String,
    /// Age in years.
    pub age: u32,
}

impl Person {
    #[must_use]
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    /// Returns a one-line greeting.
    ///
    /// ```
    /// use oop_tour::person::Person;
    ///
    /// assert_eq!(Person::new("Alex", 30).greet(), "Hi, I am Alex and I'm 30.");
    /// ```
    #[must_use]
    pub fn greet(&self) -> String {
        format!("Hi, I am {} and I'm {}.", self.name, self.age)
    }
}
