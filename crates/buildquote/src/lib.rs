//! buildquote Domain Library
//!
//! Core domain types and interfaces for saved PC build quotes.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Quote record and its validated draft
//!   - `value_objects/`: ComponentCategory, price Catalog
//!   - `services/`: QuoteBuilder (selection and running total)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!
//! # Usage
//!
//! ```rust,ignore
//! use buildquote::{ComponentCategory, QuoteBuilder};
//!
//! let mut builder = QuoteBuilder::default();
//! builder.select(ComponentCategory::Cpu, 0)?;
//! println!("running total: {}", builder.total());
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    CandidateComponents, Catalog, CatalogOption, ComponentCategory, DomainError, Quote,
    QuoteBuilder, QuoteComponents, QuoteDraft,
};
pub use ports::QuoteRepository;
