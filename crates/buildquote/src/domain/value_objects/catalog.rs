//! Catalog - Fixed price list offered by the quote builder

use serde::{Deserialize, Serialize};

use super::ComponentCategory;

/// A purchasable part and its price in dollars
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogOption {
    pub label: String,
    pub price: f64,
}

impl CatalogOption {
    pub fn new(label: impl Into<String>, price: f64) -> Self {
        Self {
            label: label.into(),
            price,
        }
    }
}

/// Options available per component category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub cpu: Vec<CatalogOption>,
    pub gpu: Vec<CatalogOption>,
    pub ram: Vec<CatalogOption>,
}

impl Catalog {
    /// Options for a category, in display order
    pub fn options(&self, category: ComponentCategory) -> &[CatalogOption] {
        match category {
            ComponentCategory::Cpu => &self.cpu,
            ComponentCategory::Gpu => &self.gpu,
            ComponentCategory::Ram => &self.ram,
        }
    }

    /// Option at `index` within a category, if any
    pub fn option(&self, category: ComponentCategory, index: usize) -> Option<&CatalogOption> {
        self.options(category).get(index)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            cpu: vec![
                CatalogOption::new("AMD Ryzen 5 7600X", 220.0),
                CatalogOption::new("Intel Core i5-13600K", 250.0),
                CatalogOption::new("AMD Ryzen 7 7800X3D", 380.0),
            ],
            gpu: vec![
                CatalogOption::new("NVIDIA RTX 4060", 299.0),
                CatalogOption::new("AMD Radeon RX 7700 XT", 450.0),
                CatalogOption::new("NVIDIA RTX 4070 Super", 599.0),
            ],
            ram: vec![
                CatalogOption::new("16GB DDR5 5600MHz", 75.0),
                CatalogOption::new("32GB DDR5 6000MHz", 140.0),
                CatalogOption::new("64GB DDR5 6000MHz", 250.0),
            ],
        }
    }
}
