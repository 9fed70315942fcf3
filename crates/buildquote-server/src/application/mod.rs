//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates with repositories.

mod quote_service;

pub use quote_service::QuoteService;
