//! Repository Ports
//!
//! Abstract interfaces for data persistence operations.

mod quote_repository;

pub use quote_repository::*;
