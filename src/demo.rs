//! The guided walkthrough.
//!
//! [`run`] builds each example type in turn and collects the lines the
//! binary prints. It performs no I/O itself apart from tracing events.

use thiserror::Error;

use crate::account::{Account, AccountError, OwnerName};
use crate::animal::Animal;
use crate::config::DemoConfig;
use crate::person::Person;
use crate::pizza::Pizza;
use crate::vector::Vector;
use crate::vehicle::Car;

/// Errors that abort the walkthrough.
///
/// A failed withdrawal is not one of them: it is reported as an output line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DemoError {
    #[error("account setup failed: {0}")]
    Account(#[from] AccountError),
}

/// Runs the walkthrough and returns the lines to print, in order.
///
/// # Errors
///
/// Returns `DemoError::Account` if the owner name is blank or the configured
/// deposit is not positive.
pub fn run(config: &DemoConfig) -> Result<Vec<String>, DemoError> {
    let mut lines = Vec::new();

    let person = Person::new(config.owner.clone(), config.owner_age);
    lines.push(person.greet());

    lines.extend(account_walkthrough(config)?);

    let animals = [Animal::dog("Rex"), Animal::cat("Luna")];
    lines.extend(animals.iter().map(Animal::introduce));

    let car = Car::new("Toyota");
    lines.push(car.start());

    let margherita = Pizza::margherita();
    lines.push(format!(
        "Margherita is vegetarian? {}",
        Pizza::is_vegetarian(margherita.toppings.as_slice())
    ));

    let v1 = Vector::new(1.0, 2.0);
    let v2 = Vector::new(3.0, 9.0);
    lines.push(format!("v1 + v2 = {}", v1.combine(&v2)));

    tracing::info!(lines = lines.len(), "walkthrough finished");
    Ok(lines)
}

fn account_walkthrough(config: &DemoConfig) -> Result<Vec<String>, DemoError> {
    let mut lines = Vec::new();
    let mut account = Account::new(OwnerName::create(&config.owner)?);
    account.deposit(config.deposit)?;

    if let Err(error) = account.withdraw(config.withdrawal) {
        lines.push(format!("Error: {error}"));
    }
    lines.push(format!("Balance: {}", account.balance()));

    match serde_json::to_string(&account) {
        Ok(snapshot) => tracing::debug!(%snapshot, "account after walkthrough"),
        Err(error) => tracing::warn!(%error, "could not serialise account snapshot"),
    }
    Ok(lines)
}
