//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Quote: Saved PC build estimate

mod quote;

pub use quote::*;
