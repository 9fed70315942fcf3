//! Quote - Saved PC build estimate
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};
use uuid::Uuid;

use crate::domain::errors::DomainError;

/// One selected part per component category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteComponents {
    #[serde(rename = "CPU")]
    pub cpu: String,
    #[serde(rename = "GPU")]
    pub gpu: String,
    #[serde(rename = "RAM")]
    pub ram: String,
}

/// Quote - persisted record of one build estimate
///
/// `id`, `created_at` and `updated_at` are owned by the store; everything
/// else comes from a validated [`QuoteDraft`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: String,
    pub name: String,
    pub components: QuoteComponents,
    #[serde(serialize_with = "serialize_total")]
    pub total: f64,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Component fields as received, before presence checks
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateComponents {
    pub cpu: Option<String>,
    pub gpu: Option<String>,
    pub ram: Option<String>,
}

/// Validated candidate for a create or full replace
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteDraft {
    pub name: String,
    pub components: QuoteComponents,
    pub total: f64,
}

impl QuoteDraft {
    /// Check a candidate's presence and type constraints.
    ///
    /// Checks run in a fixed order and the first failure wins:
    /// name, components, the three component fields, total.
    pub fn validate(
        name: Option<String>,
        components: Option<CandidateComponents>,
        total: Option<f64>,
    ) -> Result<Self, DomainError> {
        let name = match name {
            Some(n) if !n.trim().is_empty() && is_plain_text(&n) => n,
            _ => return Err(DomainError::Validation(r#"Missing/invalid "name""#.to_string())),
        };

        let parts = components
            .ok_or_else(|| DomainError::Validation(r#"Missing "components""#.to_string()))?;

        let components = match (non_empty(parts.cpu), non_empty(parts.gpu), non_empty(parts.ram)) {
            (Some(cpu), Some(gpu), Some(ram)) => QuoteComponents { cpu, gpu, ram },
            _ => {
                return Err(DomainError::Validation(
                    "Components must include CPU, GPU, and RAM".to_string(),
                ))
            }
        };

        let total = match total {
            Some(t) if t.is_finite() && t >= 0.0 => t,
            _ => return Err(DomainError::Validation(r#"Missing/invalid "total""#.to_string())),
        };

        Ok(Self {
            name,
            components,
            total,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty() && is_plain_text(v))
}

/// No control characters other than tab and line breaks, no U+FFFE/U+FFFF
fn is_plain_text(value: &str) -> bool {
    value.chars().all(|c| match c {
        '\t' | '\n' | '\r' => true,
        '\u{FFFE}' | '\u{FFFF}' => false,
        c => !c.is_control(),
    })
}

/// Write whole-number totals as JSON integers (`594`, not `594.0`).
pub fn serialize_total<S: Serializer>(total: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    // 2^53: every integer below this is exact in an f64
    if total.fract() == 0.0 && total.abs() < 9_007_199_254_740_992.0 {
        serializer.serialize_i64(*total as i64)
    } else {
        serializer.serialize_f64(*total)
    }
}

impl Quote {
    /// Create a new Quote with generated ID and creation timestamp
    pub fn new(draft: QuoteDraft) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: draft.name,
            components: draft.components,
            total: draft.total,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Full replace: take every mutable field from `draft`, keep identity
    /// and creation time, stamp `updated_at`.
    pub fn replace_with(self, draft: QuoteDraft) -> Self {
        Self {
            id: self.id,
            name: draft.name,
            components: draft.components,
            total: draft.total,
            created_at: self.created_at,
            updated_at: Some(Utc::now()),
        }
    }
}
