//! Quote request/response DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use buildquote::{CandidateComponents, Quote, QuoteComponents};

// ============================================
// Request DTOs
// ============================================

/// Component selection as sent by the client
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct QuoteComponentsRequest {
    #[serde(rename = "CPU")]
    #[schema(example = "AMD Ryzen 5 7600X")]
    pub cpu: Option<String>,
    #[serde(rename = "GPU")]
    #[schema(example = "NVIDIA RTX 4060")]
    pub gpu: Option<String>,
    #[serde(rename = "RAM")]
    #[schema(example = "16GB DDR5 5600MHz")]
    pub ram: Option<String>,
}

/// Create / full-replace request.
///
/// Every field is optional at the wire level so that missing fields reach
/// validation and get a specific message. `id`, `createdAt` and `updatedAt`
/// are not part of the request and are ignored if sent.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct QuoteRequest {
    #[schema(example = "Test Build")]
    pub name: Option<String>,
    pub components: Option<QuoteComponentsRequest>,
    #[schema(example = 594)]
    pub total: Option<f64>,
}

impl From<QuoteComponentsRequest> for CandidateComponents {
    fn from(req: QuoteComponentsRequest) -> Self {
        Self {
            cpu: req.cpu,
            gpu: req.gpu,
            ram: req.ram,
        }
    }
}

// ============================================
// Response DTOs
// ============================================

/// Components of a stored quote
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct QuoteComponentsResponse {
    #[serde(rename = "CPU")]
    pub cpu: String,
    #[serde(rename = "GPU")]
    pub gpu: String,
    #[serde(rename = "RAM")]
    pub ram: String,
}

/// Stored quote
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub id: String,
    pub name: String,
    pub components: QuoteComponentsResponse,
    #[serde(serialize_with = "buildquote::domain::serialize_total")]
    #[schema(example = 594)]
    pub total: f64,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Error body returned for every 4xx/5xx
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Not found")]
    pub error: String,
}

impl From<QuoteComponents> for QuoteComponentsResponse {
    fn from(c: QuoteComponents) -> Self {
        Self {
            cpu: c.cpu,
            gpu: c.gpu,
            ram: c.ram,
        }
    }
}

impl From<Quote> for QuoteResponse {
    fn from(q: Quote) -> Self {
        Self {
            id: q.id,
            name: q.name,
            components: q.components.into(),
            total: q.total,
            created_at: q.created_at,
            updated_at: q.updated_at,
        }
    }
}
