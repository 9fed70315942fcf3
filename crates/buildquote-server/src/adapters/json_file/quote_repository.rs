//! JSON file implementation of QuoteRepository
//!
//! Every operation reads the whole file; every write rewrites it. All
//! read-modify-write cycles are serialized by one async mutex, so requests
//! handled by this process cannot lose each other's updates. Other
//! processes writing the same file are not coordinated with.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;

use buildquote::{DomainError, Quote, QuoteRepository};

/// Quote store backed by a single pretty-printed JSON array
pub struct JsonFileQuoteRepository {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileQuoteRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the collection, creating the file as `[]` if it does not exist
    async fn read_store(&self) -> Result<Vec<Quote>, DomainError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!("Initializing empty quote store at {}", self.path.display());
                self.write_store(&[]).await?;
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(DomainError::Repository(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&raw).map_err(|e| {
            DomainError::Repository(format!("Failed to parse {}: {}", self.path.display(), e))
        })
    }

    async fn write_store(&self, quotes: &[Quote]) -> Result<(), DomainError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(dir).await.map_err(|e| {
                DomainError::Repository(format!("Failed to create {}: {}", dir.display(), e))
            })?;
        }

        let json = serde_json::to_string_pretty(quotes)
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        tokio::fs::write(&self.path, json).await.map_err(|e| {
            DomainError::Repository(format!("Failed to write {}: {}", self.path.display(), e))
        })
    }
}

#[async_trait]
impl QuoteRepository for JsonFileQuoteRepository {
    async fn find_all(&self) -> Result<Vec<Quote>, DomainError> {
        let _guard = self.lock.lock().await;
        self.read_store().await
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Quote>, DomainError> {
        let _guard = self.lock.lock().await;
        let quotes = self.read_store().await?;
        Ok(quotes.into_iter().find(|q| q.id == id))
    }

    async fn insert(&self, quote: &Quote) -> Result<Quote, DomainError> {
        let _guard = self.lock.lock().await;
        let mut quotes = self.read_store().await?;
        quotes.push(quote.clone());
        self.write_store(&quotes).await?;
        Ok(quote.clone())
    }

    async fn replace(&self, quote: &Quote) -> Result<Option<Quote>, DomainError> {
        let _guard = self.lock.lock().await;
        let mut quotes = self.read_store().await?;

        let Some(slot) = quotes.iter_mut().find(|q| q.id == quote.id) else {
            return Ok(None);
        };
        *slot = quote.clone();

        self.write_store(&quotes).await?;
        Ok(Some(quote.clone()))
    }

    async fn delete(&self, id: &str) -> Result<Option<Quote>, DomainError> {
        let _guard = self.lock.lock().await;
        let mut quotes = self.read_store().await?;

        let Some(idx) = quotes.iter().position(|q| q.id == id) else {
            return Ok(None);
        };
        let removed = quotes.remove(idx);

        self.write_store(&quotes).await?;
        Ok(Some(removed))
    }
}
