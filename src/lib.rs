//! A guided tour of object modelling in Rust.
//!
//! Each module takes one classic object-oriented idea and expresses it the
//! way Rust does:
//!
//! - [`account`] - Encapsulation: private state behind validating methods
//! - [`person`] - A plain data type with behaviour
//! - [`animal`] - Polymorphism through a closed sum type
//! - [`vehicle`] - Composition (a car owns an engine)
//! - [`pizza`] - Associated constructors and associated functions
//! - [`vector`] - An explicit combinator, with `Add` layered on top
//! - [`arithmetic`] - Small numeric helpers with checked division
//!
//! [`config`] and [`demo`] drive the `oop-tour` binary.

pub mod account;
pub mod animal;
pub mod arithmetic;
pub mod config;
pub mod demo;
pub mod person;
pub mod pizza;
pub mod vector;
pub mod vehicle;
