//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod catalog;
mod component_category;

pub use catalog::*;
pub use component_category::*;
