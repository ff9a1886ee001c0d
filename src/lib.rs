//! # Capability Design Patterns
//!
//! This crate demonstrates the five SOLID principles through one recurring
//! shape: declare a minimal single-operation capability as a trait, let
//! concrete variants implement only the capabilities they can honor, and
//! consume values through the capability alone.
//!
//! ## Pattern 1: Single Responsibility
//! - Data types hold data; a separate formatter renders it
//!
//! ## Pattern 2: Open/Closed
//! - A stateless aggregator folds over capability-typed values
//! - New variants plug in without touching consumer code
//!
//! ## Pattern 3: Liskov Substitution
//! - Every implementor honors in-domain calls the same way
//! - Out-of-domain input is rejected through the shared error channel
//!
//! ## Pattern 4: Interface Segregation
//! - `Bookable` and `Cancelable` are separate capabilities
//! - A non-refundable room simply never exposes `cancel`
//!
//! ## Pattern 5: Dependency Inversion
//! - `RecordHandler` depends on the `Storage` capability
//! - Concrete backends are supplied at construction
//!
//! Run demonstrations with: `cargo run --example <name>`

pub mod aggregate;
pub mod area;
pub mod booking;
pub mod contact;
pub mod storage;

pub use aggregate::aggregate;
