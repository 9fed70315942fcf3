//! Quote Application Service (Use Case)
//!
//! Orchestrates domain operations for quote management.

use std::sync::Arc;

use buildquote::{CandidateComponents, DomainError, Quote, QuoteDraft, QuoteRepository};

/// Application service for Quote operations
pub struct QuoteService<R: QuoteRepository> {
    repo: Arc<R>,
}

impl<R: QuoteRepository> QuoteService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Get all Quotes in insertion order
    pub async fn list_all(&self) -> Result<Vec<Quote>, DomainError> {
        self.repo.find_all().await
    }

    /// Get a Quote by ID
    pub async fn get_by_id(&self, id: &str) -> Result<Quote, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Quote", id))
    }

    /// Validate a candidate and store it as a new Quote
    pub async fn create(
        &self,
        name: Option<String>,
        components: Option<CandidateComponents>,
        total: Option<f64>,
    ) -> Result<Quote, DomainError> {
        let draft = QuoteDraft::validate(name, components, total)?;
        let saved = self.repo.insert(&Quote::new(draft)).await?;

        tracing::info!("Created Quote: {} ({})", saved.name, saved.id);

        Ok(saved)
    }

    /// Full replace of a Quote's mutable fields.
    ///
    /// The candidate is validated before the lookup, so an invalid body on an
    /// unknown id reports the validation failure.
    pub async fn update(
        &self,
        id: &str,
        name: Option<String>,
        components: Option<CandidateComponents>,
        total: Option<f64>,
    ) -> Result<Quote, DomainError> {
        let draft = QuoteDraft::validate(name, components, total)?;

        let current = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Quote", id))?;

        let saved = self
            .repo
            .replace(&current.replace_with(draft))
            .await?
            .ok_or_else(|| DomainError::not_found("Quote", id))?;

        tracing::info!("Updated Quote: {} ({})", saved.name, saved.id);

        Ok(saved)
    }

    /// Delete a Quote, returning the removed record
    pub async fn delete(&self, id: &str) -> Result<Quote, DomainError> {
        let removed = self
            .repo
            .delete(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Quote", id))?;

        tracing::info!("Deleted Quote: {}", removed.id);

        Ok(removed)
    }
}
