//! buildquote API Data Models
//!
//! - Quote: Saved PC build estimate

mod quote;

pub use quote::*;
