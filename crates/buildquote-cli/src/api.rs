//! buildquote API Client

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};

use buildquote::QuoteDraft;

/// API Client for the quote store
pub struct QuoteClient {
    client: Client,
    base_url: String,
}

// ============================================
// API Types
// ============================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentsBody {
    #[serde(rename = "CPU")]
    pub cpu: String,
    #[serde(rename = "GPU")]
    pub gpu: String,
    #[serde(rename = "RAM")]
    pub ram: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub id: String,
    pub name: String,
    pub components: ComponentsBody,
    pub total: f64,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Exactly the fields the store accepts on create and replace
#[derive(Debug, Serialize)]
pub struct QuoteRequest {
    pub name: String,
    pub components: ComponentsBody,
    pub total: f64,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

impl From<QuoteDraft> for QuoteRequest {
    fn from(draft: QuoteDraft) -> Self {
        Self {
            name: draft.name,
            components: ComponentsBody {
                cpu: draft.components.cpu,
                gpu: draft.components.gpu,
                ram: draft.components.ram,
            },
            total: draft.total,
        }
    }
}

/// Pull the `error` field out of an error body, falling back to the raw text
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|e| e.error)
        .unwrap_or_else(|_| body.to_string())
}

async fn ensure_success(resp: Response) -> Result<Response> {
    if resp.status().is_success() {
        return Ok(resp);
    }

    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    bail!("API error ({}): {}", status, error_message(&body));
}

impl QuoteClient {
    /// Create a new API client
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn quote_url(&self, id: &str) -> String {
        format!("{}/quotes/{}", self.base_url, urlencoding::encode(id))
    }

    /// Test connection with health check
    pub async fn health(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);
        let resp = self.client.get(&url).send().await?;
        Ok(resp.status().is_success())
    }

    /// List all saved quotes
    pub async fn list_quotes(&self) -> Result<Vec<QuoteResponse>> {
        let url = format!("{}/quotes", self.base_url);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to connect to quote service")?;

        ensure_success(resp)
            .await?
            .json()
            .await
            .context("Failed to parse response")
    }

    /// Get a single quote
    pub async fn get_quote(&self, id: &str) -> Result<QuoteResponse> {
        let resp = self
            .client
            .get(self.quote_url(id))
            .send()
            .await
            .context("Failed to connect to quote service")?;

        ensure_success(resp)
            .await?
            .json()
            .await
            .context("Failed to parse response")
    }

    /// Save a finished build
    pub async fn create_quote(&self, request: &QuoteRequest) -> Result<QuoteResponse> {
        let url = format!("{}/quotes", self.base_url);
        let resp = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .context("Failed to connect to quote service")?;

        ensure_success(resp)
            .await?
            .json()
            .await
            .context("Failed to parse response")
    }

    /// Replace a saved quote with `request`
    pub async fn update_quote(&self, id: &str, request: &QuoteRequest) -> Result<QuoteResponse> {
        let resp = self
            .client
            .put(self.quote_url(id))
            .json(request)
            .send()
            .await
            .context("Failed to connect to quote service")?;

        ensure_success(resp)
            .await?
            .json()
            .await
            .context("Failed to parse response")
    }

    /// Delete a saved quote, returning what was removed
    pub async fn delete_quote(&self, id: &str) -> Result<QuoteResponse> {
        let resp = self
            .client
            .delete(self.quote_url(id))
            .send()
            .await
            .context("Failed to connect to quote service")?;

        ensure_success(resp)
            .await?
            .json()
            .await
            .context("Failed to parse response")
    }

    /// Fetch the XML export
    pub async fn export_xml(&self) -> Result<String> {
        let url = format!("{}/quotes.xml", self.base_url);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to connect to quote service")?;

        ensure_success(resp)
            .await?
            .text()
            .await
            .context("Failed to read response")
    }
}
