//! Domain Services
//!
//! Stateful domain logic that does not belong to a single entity.

mod quote_builder;

pub use quote_builder::*;
