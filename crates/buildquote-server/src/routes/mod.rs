//! buildquote API Routes
//!
//! - /quotes - Quote CRUD (also mounted under /api)
//! - /quotes.xml - XML export
//! - /swagger-ui - OpenAPI documentation

pub mod quote;
pub mod swagger;
