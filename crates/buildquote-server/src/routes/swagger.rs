//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{
    ErrorResponse, QuoteComponentsRequest, QuoteComponentsResponse, QuoteRequest, QuoteResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::quote::list_quotes,
        super::quote::create_quote,
        super::quote::get_quote,
        super::quote::update_quote,
        super::quote::delete_quote,
        super::quote::export_quotes_xml,
    ),
    info(
        title = "buildquote API",
        version = "0.2.0",
        description = "PC build quote store.\n\nQuotes are kept as one JSON array on disk and can be exported as XML.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
        (url = "/api", description = "Frontend base path"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Quote", description = "Quote - Saved PC build estimates"),
    ),
    components(
        schemas(
            QuoteRequest,
            QuoteComponentsRequest,
            QuoteResponse,
            QuoteComponentsResponse,
            ErrorResponse,
        )
    ),
)]
pub struct ApiDoc;
