//! Quote Routes - Saved PC build estimates
//!
//! HTTP handlers that delegate to QuoteService for business logic.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::adapters::formatters::quotes_to_xml;
use crate::error::ApiResult;
use crate::models::{ErrorResponse, QuoteRequest, QuoteResponse};
use crate::AppState;

/// List all Quotes
#[utoipa::path(
    get,
    path = "/quotes",
    responses(
        (status = 200, description = "All quotes in insertion order", body = Vec<QuoteResponse>),
        (status = 500, description = "Quote store unavailable", body = ErrorResponse)
    ),
    tag = "Quote"
)]
pub async fn list_quotes(State(state): State<AppState>) -> ApiResult<Json<Vec<QuoteResponse>>> {
    let quotes = state.quote_service.list_all().await?;
    Ok(Json(quotes.into_iter().map(Into::into).collect()))
}

/// Create new Quote
#[utoipa::path(
    post,
    path = "/quotes",
    request_body = QuoteRequest,
    responses(
        (status = 201, description = "Quote created", body = QuoteResponse),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Quote store unavailable", body = ErrorResponse)
    ),
    tag = "Quote"
)]
pub async fn create_quote(
    State(state): State<AppState>,
    payload: Result<Json<QuoteRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<QuoteResponse>)> {
    let Json(payload) = payload?;

    let quote = state
        .quote_service
        .create(
            payload.name,
            payload.components.map(Into::into),
            payload.total,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(quote.into())))
}

/// Get Quote by ID
#[utoipa::path(
    get,
    path = "/quotes/{id}",
    params(
        ("id" = String, Path, description = "Quote ID")
    ),
    responses(
        (status = 200, description = "Quote found", body = QuoteResponse),
        (status = 404, description = "Quote not found", body = ErrorResponse)
    ),
    tag = "Quote"
)]
pub async fn get_quote(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<QuoteResponse>> {
    let quote = state.quote_service.get_by_id(&id).await?;
    Ok(Json(quote.into()))
}

/// Replace Quote
#[utoipa::path(
    put,
    path = "/quotes/{id}",
    params(
        ("id" = String, Path, description = "Quote ID")
    ),
    request_body = QuoteRequest,
    responses(
        (status = 200, description = "Quote replaced", body = QuoteResponse),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 404, description = "Quote not found", body = ErrorResponse)
    ),
    tag = "Quote"
)]
pub async fn update_quote(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<QuoteRequest>, JsonRejection>,
) -> ApiResult<Json<QuoteResponse>> {
    let Json(payload) = payload?;

    let quote = state
        .quote_service
        .update(
            &id,
            payload.name,
            payload.components.map(Into::into),
            payload.total,
        )
        .await?;

    Ok(Json(quote.into()))
}

/// Delete Quote
#[utoipa::path(
    delete,
    path = "/quotes/{id}",
    params(
        ("id" = String, Path, description = "Quote ID")
    ),
    responses(
        (status = 200, description = "Removed quote", body = QuoteResponse),
        (status = 404, description = "Quote not found", body = ErrorResponse)
    ),
    tag = "Quote"
)]
pub async fn delete_quote(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<QuoteResponse>> {
    let removed = state.quote_service.delete(&id).await?;
    Ok(Json(removed.into()))
}

/// Export all Quotes as XML
#[utoipa::path(
    get,
    path = "/quotes.xml",
    responses(
        (status = 200, description = "Quotes as an XML document", content_type = "application/xml", body = String),
        (status = 500, description = "Quote store unavailable", body = ErrorResponse)
    ),
    tag = "Quote"
)]
pub async fn export_quotes_xml(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let quotes = state.quote_service.list_all().await?;
    let xml = quotes_to_xml(&quotes)?;

    Ok(([(header::CONTENT_TYPE, "application/xml")], xml))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/quotes", get(list_quotes).post(create_quote))
        .route("/quotes.xml", get(export_quotes_xml))
        .route(
            "/quotes/:id",
            get(get_quote).put(update_quote).delete(delete_quote),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::JsonFileQuoteRepository;
    use axum::body::Body;
    use axum::http::{Method, Request, Response};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tempfile::TempDir;
    use tower::ServiceExt;

    fn test_app() -> (Router, TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileQuoteRepository::new(dir.path().join("quotes.json"));
        (crate::app(AppState::new(repo)), dir)
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        app.clone().oneshot(builder.body(body).unwrap()).await.unwrap()
    }

    async fn body_bytes(resp: Response<Body>) -> Vec<u8> {
        resp.into_body().collect().await.unwrap().to_bytes().to_vec()
    }

    async fn body_json(resp: Response<Body>) -> Value {
        serde_json::from_slice(&body_bytes(resp).await).unwrap()
    }

    fn test_build() -> Value {
        json!({
            "name": "Test Build",
            "components": { "CPU": "Ryzen 5", "GPU": "RTX 4060", "RAM": "16GB" },
            "total": 594
        })
    }

    async fn list(app: &Router) -> Value {
        let resp = send(app, Method::GET, "/quotes", None).await;
        assert_eq!(resp.status(), StatusCode::OK);
        body_json(resp).await
    }

    #[tokio::test]
    async fn test_list_empty_store() {
        let (app, _dir) = test_app();
        assert_eq!(list(&app).await, json!([]));
    }

    #[tokio::test]
    async fn test_create_get_delete_scenario() {
        let (app, _dir) = test_app();

        let resp = send(&app, Method::POST, "/quotes", Some(test_build())).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created = body_json(resp).await;
        let id = created["id"].as_str().unwrap().to_string();
        assert!(!id.is_empty());
        assert!(created["createdAt"].is_string());
        assert_eq!(created["name"], "Test Build");
        assert_eq!(created["components"]["GPU"], "RTX 4060");
        assert_eq!(created["total"].as_f64(), Some(594.0));

        let resp = send(&app, Method::GET, &format!("/quotes/{}", id), None).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await, created);

        let resp = send(&app, Method::DELETE, &format!("/quotes/{}", id), None).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await, created);

        let resp = send(&app, Method::GET, &format!("/quotes/{}", id), None).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(resp).await, json!({ "error": "Not found" }));
    }

    #[tokio::test]
    async fn test_negative_total_rejected() {
        let (app, _dir) = test_app();
        send(&app, Method::POST, "/quotes", Some(test_build())).await;
        let before = list(&app).await;

        let mut body = test_build();
        body["total"] = json!(-5);
        let resp = send(&app, Method::POST, "/quotes", Some(body)).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(resp).await,
            json!({ "error": "Missing/invalid \"total\"" })
        );

        assert_eq!(list(&app).await, before);
    }

    #[tokio::test]
    async fn test_invalid_candidates_rejected() {
        let (app, _dir) = test_app();

        let mut blank_name = test_build();
        blank_name["name"] = json!("   ");
        let mut missing_ram = test_build();
        missing_ram["components"] = json!({ "CPU": "Ryzen 5", "GPU": "RTX 4060" });
        let mut string_total = test_build();
        string_total["total"] = json!("594");
        let mut no_components = test_build();
        no_components.as_object_mut().unwrap().remove("components");

        for body in [blank_name, missing_ram, string_total, no_components] {
            let resp = send(&app, Method::POST, "/quotes", Some(body)).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
            assert!(body_json(resp).await["error"].is_string());
        }

        assert_eq!(list(&app).await, json!([]));
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let (app, _dir) = test_app();
        let req = Request::builder()
            .method(Method::POST)
            .uri("/quotes")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{\"name\": "))
            .unwrap();
        let resp = app.clone().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(body_json(resp).await["error"].is_string());
    }

    #[tokio::test]
    async fn test_client_cannot_choose_id_on_create() {
        let (app, _dir) = test_app();
        let mut body = test_build();
        body["id"] = json!("chosen-by-client");
        body["createdAt"] = json!("2000-01-01T00:00:00Z");

        let created = body_json(send(&app, Method::POST, "/quotes", Some(body)).await).await;
        assert_ne!(created["id"], "chosen-by-client");
        assert_ne!(created["createdAt"], "2000-01-01T00:00:00Z");
    }

    #[tokio::test]
    async fn test_update_preserves_id_and_created_at() {
        let (app, _dir) = test_app();
        let created = body_json(send(&app, Method::POST, "/quotes", Some(test_build())).await).await;
        let id = created["id"].as_str().unwrap();

        let mut body = test_build();
        body["name"] = json!("Renamed");
        body["id"] = json!("hijacked");
        body["createdAt"] = json!("2000-01-01T00:00:00Z");

        let resp = send(&app, Method::PUT, &format!("/quotes/{}", id), Some(body)).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let updated = body_json(resp).await;
        assert_eq!(updated["id"], created["id"]);
        assert_eq!(updated["createdAt"], created["createdAt"]);
        assert_eq!(updated["name"], "Renamed");
        assert!(updated["updatedAt"].is_string());

        let stored = list(&app).await;
        assert_eq!(stored, json!([updated]));
    }

    #[tokio::test]
    async fn test_every_update_stamps_a_later_updated_at() {
        let (app, _dir) = test_app();
        let created = body_json(send(&app, Method::POST, "/quotes", Some(test_build())).await).await;
        let uri = format!("/quotes/{}", created["id"].as_str().unwrap());
        let updated_at = |q: &Value| {
            q["updatedAt"]
                .as_str()
                .unwrap()
                .parse::<chrono::DateTime<chrono::Utc>>()
                .unwrap()
        };

        let first = body_json(send(&app, Method::PUT, &uri, Some(test_build())).await).await;
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        let second = body_json(send(&app, Method::PUT, &uri, Some(test_build())).await).await;

        assert!(updated_at(&second) > updated_at(&first));
        assert_eq!(first["createdAt"], created["createdAt"]);
        assert_eq!(second["createdAt"], created["createdAt"]);
        assert_eq!(second["id"], created["id"]);
    }

    #[tokio::test]
    async fn test_whole_total_written_as_integer() {
        let (app, _dir) = test_app();
        let resp = send(&app, Method::POST, "/quotes", Some(test_build())).await;
        let raw = String::from_utf8(body_bytes(resp).await).unwrap();
        assert!(raw.contains(r#""total":594,"#));
    }

    #[tokio::test]
    async fn test_control_characters_rejected() {
        let (app, _dir) = test_app();
        let mut body = test_build();
        body["name"] = json!("A\u{1}B");

        let resp = send(&app, Method::POST, "/quotes", Some(body)).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(list(&app).await, json!([]));

        let resp = send(&app, Method::GET, "/quotes.xml", None).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_update_errors() {
        let (app, _dir) = test_app();

        let resp = send(&app, Method::PUT, "/quotes/unknown", Some(test_build())).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let created = body_json(send(&app, Method::POST, "/quotes", Some(test_build())).await).await;
        let mut body = test_build();
        body["components"]["CPU"] = json!("");
        let uri = format!("/quotes/{}", created["id"].as_str().unwrap());
        let resp = send(&app, Method::PUT, &uri, Some(body)).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        assert_eq!(list(&app).await, json!([created]));
    }

    #[tokio::test]
    async fn test_delete_unknown_leaves_collection() {
        let (app, _dir) = test_app();
        send(&app, Method::POST, "/quotes", Some(test_build())).await;
        let before = list(&app).await;

        let resp = send(&app, Method::DELETE, "/quotes/unknown", None).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(list(&app).await, before);
    }

    #[tokio::test]
    async fn test_xml_export_matches_list() {
        let (app, _dir) = test_app();

        let resp = send(&app, Method::GET, "/quotes.xml", None).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers()[header::CONTENT_TYPE],
            "application/xml"
        );
        let xml = String::from_utf8(body_bytes(resp).await).unwrap();
        assert!(xml.contains("<quotes/>"));

        send(&app, Method::POST, "/quotes", Some(test_build())).await;
        let mut second = test_build();
        second["name"] = json!("Second");
        send(&app, Method::POST, "/quotes", Some(second)).await;

        let quotes = list(&app).await;
        let resp = send(&app, Method::GET, "/quotes.xml", None).await;
        let xml = String::from_utf8(body_bytes(resp).await).unwrap();

        assert_eq!(xml.matches("<quote>").count(), 2);
        for q in quotes.as_array().unwrap() {
            assert!(xml.contains(&format!("<id>{}</id>", q["id"].as_str().unwrap())));
            assert!(xml.contains(&format!("<name>{}</name>", q["name"].as_str().unwrap())));
            assert!(xml.contains(&format!(
                "<createdAt>{}</createdAt>",
                q["createdAt"].as_str().unwrap()
            )));
        }
        assert!(xml.contains("<total>594</total>"));
        assert!(xml.contains("<RAM>16GB</RAM>"));
    }

    #[tokio::test]
    async fn test_api_prefix_routes() {
        let (app, _dir) = test_app();
        let resp = send(&app, Method::POST, "/api/quotes", Some(test_build())).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let quotes = list(&app).await;
        assert_eq!(quotes.as_array().unwrap().len(), 1);

        let resp = send(&app, Method::GET, "/api/quotes.xml", None).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health() {
        let (app, _dir) = test_app();
        let resp = send(&app, Method::GET, "/health", None).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await["status"], "ok");
    }
}
