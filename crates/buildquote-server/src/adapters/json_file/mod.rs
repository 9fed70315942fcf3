//! JSON file adapters
//!
//! Repositories that keep a whole collection as one JSON array on disk.

mod quote_repository;

pub use quote_repository::JsonFileQuoteRepository;
