//! Arithmetic helpers over `f64`.
//!
//! Division and modulus return [`ArithmeticError::DivisionByZero`] instead of
//! producing infinities or NaN.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    #[error("Cannot divide by zero")]
    DivisionByZero,
}

#[must_use]
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

#[must_use]
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

#[must_use]
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Divides `a` by `b`.
///
/// # Errors
///
/// Returns `ArithmeticError::DivisionByZero` if `b` is zero.
pub fn divide(a: f64, b: f64) -> Result<f64, ArithmeticError> {
    if b == 0.0 {
        return Err(ArithmeticError::DivisionByZero);
    }
    Ok(a / b)
}

/// Floored modulus: the result takes the sign of the divisor.
///
/// ```
/// use oop_tour::arithmetic::modulus;
///
/// assert_eq!(modulus(-7.0, 3.0), Ok(2.0));
/// assert_eq!(modulus(7.0, -3.0), Ok(-2.0));
/// ```
///
/// # Errors
///
/// Returns `ArithmeticError::DivisionByZero` if `b` is zero.
pub fn modulus(a: f64, b: f64) -> Result<f64, ArithmeticError> {
    if b == 0.0 {
        return Err(ArithmeticError::DivisionByZero);
    }
    let remainder = a % b;
    if remainder != 0.0 && (remainder < 0.0) != (b < 0.0) {
        Ok(remainder + b)
    } else {
        Ok(remainder)
    }
}

#[must_use]
pub fn power(a: f64, b: f64) -> f64 {
    a.powf(b)
}
