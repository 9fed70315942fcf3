//! QuoteBuilder - Client-side build selection
//!
//! Keeps one catalog option per category and computes a running total.
//! Nothing here talks to the store: an incomplete or unnamed build is
//! rejected locally by [`QuoteBuilder::finish`].

use std::collections::HashMap;

use crate::domain::entities::{CandidateComponents, QuoteDraft};
use crate::domain::errors::DomainError;
use crate::domain::value_objects::{Catalog, CatalogOption, ComponentCategory};

/// Selection state for one build
#[derive(Debug, Clone)]
pub struct QuoteBuilder {
    catalog: Catalog,
    selections: HashMap<ComponentCategory, CatalogOption>,
}

impl QuoteBuilder {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            selections: HashMap::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Select the option at `index` for `category`, replacing any earlier pick
    pub fn select(
        &mut self,
        category: ComponentCategory,
        index: usize,
    ) -> Result<&CatalogOption, DomainError> {
        let option = self
            .catalog
            .option(category, index)
            .cloned()
            .ok_or_else(|| {
                DomainError::Validation(format!("No {} option at index {}", category, index))
            })?;

        tracing::debug!("Selected {} for {}", option.label, category);
        self.selections.insert(category, option);

        Ok(&self.selections[&category])
    }

    /// Drop the selection for `category`
    pub fn clear(&mut self, category: ComponentCategory) {
        self.selections.remove(&category);
    }

    pub fn selection(&self, category: ComponentCategory) -> Option<&CatalogOption> {
        self.selections.get(&category)
    }

    /// Sum of selected prices; unselected categories contribute 0
    pub fn total(&self) -> f64 {
        self.selections.values().map(|o| o.price).sum()
    }

    pub fn is_complete(&self) -> bool {
        ComponentCategory::ALL
            .iter()
            .all(|c| self.selections.contains_key(c))
    }

    /// Turn the selection into a draft ready to submit.
    pub fn finish(&self, name: &str) -> Result<QuoteDraft, DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::Validation(
                "Please enter a name for this quote".to_string(),
            ));
        }

        if !self.is_complete() {
            let missing: Vec<String> = ComponentCategory::ALL
                .iter()
                .filter(|c| !self.selections.contains_key(c))
                .map(|c| c.to_string())
                .collect();
            return Err(DomainError::Validation(format!(
                "Select a part for: {}",
                missing.join(", ")
            )));
        }

        let label = |c: ComponentCategory| self.selection(c).map(|o| o.label.clone());

        QuoteDraft::validate(
            Some(name.to_string()),
            Some(CandidateComponents {
                cpu: label(ComponentCategory::Cpu),
                gpu: label(ComponentCategory::Gpu),
                ram: label(ComponentCategory::Ram),
            }),
            Some(self.total()),
        )
    }
}

impl Default for QuoteBuilder {
    fn default() -> Self {
        Self::new(Catalog::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_total_is_zero() {
        let builder = QuoteBuilder::default();
        assert_eq!(builder.total(), 0.0);
        assert!(!builder.is_complete());
    }

    #[test]
    fn test_partial_total() {
        let mut builder = QuoteBuilder::default();
        builder.select(ComponentCategory::Cpu, 0).unwrap();
        builder.select(ComponentCategory::Ram, 1).unwrap();
        assert_eq!(builder.total(), 220.0 + 140.0);
    }

    #[test]
    fn test_reselect_replaces() {
        let mut builder = QuoteBuilder::default();
        builder.select(ComponentCategory::Gpu, 0).unwrap();
        builder.select(ComponentCategory::Gpu, 2).unwrap();
        assert_eq!(builder.total(), 599.0);

        builder.clear(ComponentCategory::Gpu);
        assert_eq!(builder.total(), 0.0);
        assert!(builder.selection(ComponentCategory::Gpu).is_none());
    }

    #[test]
    fn test_out_of_range_index() {
        let mut builder = QuoteBuilder::default();
        assert!(builder.select(ComponentCategory::Cpu, 9).is_err());
        assert!(builder.selection(ComponentCategory::Cpu).is_none());
    }

    #[test]
    fn test_finish_requires_every_category() {
        let mut builder = QuoteBuilder::default();
        builder.select(ComponentCategory::Cpu, 0).unwrap();
        match builder.finish("Gaming rig") {
            Err(DomainError::Validation(msg)) => assert_eq!(msg, "Select a part for: GPU, RAM"),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_finish_requires_name() {
        let mut builder = QuoteBuilder::default();
        for category in ComponentCategory::ALL {
            builder.select(category, 0).unwrap();
        }
        assert!(matches!(
            builder.finish("  "),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn test_finish_builds_draft() {
        let mut builder = QuoteBuilder::default();
        builder.select(ComponentCategory::Cpu, 0).unwrap();
        builder.select(ComponentCategory::Gpu, 0).unwrap();
        builder.select(ComponentCategory::Ram, 0).unwrap();

        let draft = builder.finish("Starter").unwrap();
        assert_eq!(draft.name, "Starter");
        assert_eq!(draft.components.cpu, "AMD Ryzen 5 7600X");
        assert_eq!(draft.components.gpu, "NVIDIA RTX 4060");
        assert_eq!(draft.components.ram, "16GB DDR5 5600MHz");
        assert_eq!(draft.total, 594.0);
    }
}
