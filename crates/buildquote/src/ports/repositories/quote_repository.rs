//! Quote Repository Port
//!
//! Abstract interface for Quote persistence operations.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, Quote};

/// Repository interface for Quote entities
#[async_trait]
pub trait QuoteRepository: Send + Sync {
    /// Find all Quotes in insertion order
    async fn find_all(&self) -> Result<Vec<Quote>, DomainError>;

    /// Find a Quote by ID
    async fn find_by_id(&self, id: &str) -> Result<Option<Quote>, DomainError>;

    /// Append a new Quote
    async fn insert(&self, quote: &Quote) -> Result<Quote, DomainError>;

    /// Replace the Quote with the same ID in place; `None` if absent
    async fn replace(&self, quote: &Quote) -> Result<Option<Quote>, DomainError>;

    /// Remove a Quote by ID, returning the removed record
    async fn delete(&self, id: &str) -> Result<Option<Quote>, DomainError>;
}
