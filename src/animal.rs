//! Polymorphism through a closed sum type.
//!
//! Every [`Species`] must answer [`Species::sound`]; adding a variant without
//! a sound is a compile error.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The kinds of animal that can speak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    /// Says "Woof!".
    Dog,
    /// Says "Meow!!".
    Cat,
}

impl Species {
    /// The sound this species makes.
    #[must_use]
    pub const fn sound(self) -> &'static str {
        match self {
            Self::Dog => "Woof!",
            Self::Cat => "Meow!!",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dog => write!(formatter, "dog"),
            Self::Cat => write!(formatter, "cat"),
        }
    }
}

/// Returned when parsing an unknown species name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown species: {0}")]
pub struct ParseSpeciesError(pub String);

impl FromStr for Species {
    type Err = ParseSpeciesError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "dog" => Ok(Self::Dog),
            "cat" => Ok(Self::Cat),
            _ => Err(ParseSpeciesError(value.to_string())),
        }
    }
}

/// A named animal of some species.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animal {
    /// The animal's name.
    pub name: String,
    /// What kind of animal it is.
    pub species: Species,
}

impl Animal {
    #[must_use]
    pub fn new(name: impl Into<String>, species: Species) -> Self {
        Self {
            name: name.into(),
            species,
        }
    }

    #[must_use]
    pub fn dog(name: impl Into<String>) -> Self {
        Self::new(name, Species::Dog)
    }

    #[must_use]
    pub fn cat(name: impl Into<String>) -> Self {
        Self::new(name, Species::Cat)
    }

    #[must_use]
    pub const fn speak(&self) -> &'static str {
        self.species.sound()
    }

    /// Returns `"{name} says {sound}"`.
    #[must_use]
    pub fn introduce(&self) -> String {
        format!("{} says {}", self.name, self.speak())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Animal::dog("Rex"), "Woof!", "Rex says Woof!")]
    #[case(Animal::cat("Luna"), "Meow!!", "Luna says Meow!!")]
    fn each_species_speaks(#[case] animal: Animal, #[case] sound: &str, #[case] line: &str) {
        assert_eq!(animal.speak(), sound);
        assert_eq!(animal.introduce(), line);
    }

    #[rstest]
    fn heterogeneous_collection_dispatches_per_variant() {
        let animals = [Animal::dog("Rex"), Animal::cat("Luna")];
        let lines: Vec<String> = animals.iter().map(Animal::introduce).collect();

        assert_eq!(lines, vec!["Rex says Woof!", "Luna says Meow!!"]);
    }

    #[rstest]
    #[case("dog", Species::Dog)]
    #[case(" Cat ", Species::Cat)]
    fn parse_known_species(#[case] input: &str, #[case] expected: Species) {
        assert_eq!(input.parse::<Species>(), Ok(expected));
    }

    #[rstest]
    fn parse_unknown_species() {
        let error = "parrot".parse::<Species>().unwrap_err();

        assert_eq!(error.to_string(), "Unknown species: parrot");
    }

    #[rstest]
    fn display_round_trips_through_parse() {
        for species in [Species::Dog, Species::Cat] {
            assert_eq!(species.to_string().parse::<Species>(), Ok(species));
        }
    }
}
