//! Two-dimensional vector with an explicit combinator.

use std::fmt;
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// A point or displacement in the plane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise sum of two vectors.
    ///
    /// ```
    /// use oop_tour::vector::Vector;
    ///
    /// let sum = Vector::new(1.0, 2.0).combine(&Vector::new(3.0, 9.0));
    /// assert_eq!(sum.to_string(), "Vector(4, 11)");
    /// ```
    #[must_use]
    pub fn combine(&self, other: &Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Add for Vector {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        self.combine(&other)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Vector({}, {})", self.x, self.y)
    }
}
