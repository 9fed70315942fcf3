//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod formatters;
pub mod json_file;

// Re-exports
pub use json_file::JsonFileQuoteRepository;
