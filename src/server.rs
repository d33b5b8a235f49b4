//! HTTP surface for a [`Cookbook`].
//!
//! Routes:
//! - `POST /parse` with `{"input": "..."}` returns `{"msg": "<normalized>"}`
//! - `POST /entry` with an entry object returns an empty `200` or `400`
//! - `GET /summary?name=...` returns a [`RecipeSummary`](crate::resolver::RecipeSummary)
//!   or an empty `400`
//! - `GET /health`

use crate::cookbook::Cookbook;
use crate::data::EntryRequest;
use axum::{
    Json, Router,
    extract::{Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{debug, info};

pub type SharedCookbook = Arc<Cookbook>;

const INVALID_NAME: &str = "Invalid recipe name";

/// Request body for `POST /parse`.
#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    #[serde(default)]
    pub input: String,
}

/// Response body for `POST /parse`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ParseResponse {
    pub msg: String,
}

/// Query string for `GET /summary`.
#[derive(Debug, Deserialize)]
pub struct SummaryParams {
    pub name: Option<String>,
}

/// Create the application router
pub fn create_router(cookbook: SharedCookbook) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/parse", post(parse))
        .route("/entry", post(create_entry))
        .route("/summary", get(summary))
        .with_state(cookbook)
}

/// Serves the router on `listener` until the process is stopped.
pub async fn serve(listener: TcpListener, cookbook: SharedCookbook) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!("Listening on http://{}", addr);
    }
    axum::serve(listener, create_router(cookbook)).await
}

async fn health_check() -> &'static str {
    "OK"
}

/// POST /parse
async fn parse(
    State(cookbook): State<SharedCookbook>,
    payload: Result<Json<ParseRequest>, JsonRejection>,
) -> Response {
    let Ok(Json(request)) = payload else {
        return (StatusCode::BAD_REQUEST, INVALID_NAME).into_response();
    };

    match cookbook.parse_name(&request.input) {
        Ok(msg) => (StatusCode::OK, Json(ParseResponse { msg })).into_response(),
        Err(_) => (StatusCode::BAD_REQUEST, INVALID_NAME).into_response(),
    }
}

/// POST /entry
async fn create_entry(
    State(cookbook): State<SharedCookbook>,
    payload: Result<Json<EntryRequest>, JsonRejection>,
) -> StatusCode {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(e) => {
            debug!("malformed entry body: {}", e);
            return StatusCode::BAD_REQUEST;
        }
    };

    match cookbook.create_entry(request) {
        Ok(()) => StatusCode::OK,
        Err(_) => StatusCode::BAD_REQUEST,
    }
}

/// GET /summary?name=...
async fn summary(
    State(cookbook): State<SharedCookbook>,
    Query(params): Query<SummaryParams>,
) -> Response {
    let Some(name) = params.name else {
        return StatusCode::BAD_REQUEST.into_response();
    };

    match cookbook.summarize(&name) {
        Ok(summary) => (StatusCode::OK, Json(summary)).into_response(),
        Err(_) => StatusCode::BAD_REQUEST.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::RecipeSummary;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use tower::ServiceExt;

    fn app() -> (SharedCookbook, Router) {
        let cookbook = Arc::new(Cookbook::new());
        let router = create_router(cookbook.clone());
        (cookbook, router)
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn body_bytes(response: Response) -> Vec<u8> {
        to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    #[test]
    fn test_health_check() {
        tokio_test::block_on(async {
            let (_, app) = app();
            let response = app.oneshot(get("/health")).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        });
    }

    #[test]
    fn test_parse_route() {
        tokio_test::block_on(async {
            let (_, app) = app();
            let response = app
                .clone()
                .oneshot(post_json(
                    "/parse",
                    serde_json::json!({ "input": "Riz@z RISO00tto!" }),
                ))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            let parsed: ParseResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
            assert_eq!(parsed.msg, "Rizz Risotto");

            let response = app
                .oneshot(post_json("/parse", serde_json::json!({ "input": "123" })))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        });
    }

    #[test]
    fn test_entry_and_summary_routes() {
        tokio_test::block_on(async {
            let (cookbook, app) = app();
            let entries = [
                serde_json::json!({ "type": "ingredient", "name": "egg", "cookTime": 5 }),
                serde_json::json!({ "type": "ingredient", "name": "flour", "cookTime": 2 }),
                serde_json::json!({
                    "type": "recipe",
                    "name": "batter",
                    "requiredItems": [
                        { "name": "Egg", "quantity": 2 },
                        { "name": "Flour", "quantity": 1 }
                    ]
                }),
                serde_json::json!({
                    "type": "recipe",
                    "name": "pancake",
                    "requiredItems": [{ "name": "Batter", "quantity": 3 }]
                }),
            ];
            for entry in entries {
                let response = app.clone().oneshot(post_json("/entry", entry)).await.unwrap();
                assert_eq!(response.status(), StatusCode::OK);
                assert!(body_bytes(response).await.is_empty());
            }
            assert_eq!(cookbook.store().len(), 4);

            let response = app
                .clone()
                .oneshot(post_json(
                    "/entry",
                    serde_json::json!({ "type": "ingredient", "name": "EGG", "cookTime": 1 }),
                ))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);

            let response = app.clone().oneshot(get("/summary?name=pancake")).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            let summary: RecipeSummary = serde_json::from_slice(&body_bytes(response).await).unwrap();
            assert_eq!(summary.name, "Pancake");
            assert_eq!(summary.cook_time, 36);
            assert_eq!(summary.ingredients.len(), 2);

            let response = app.clone().oneshot(get("/summary?name=egg")).await.unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);

            let response = app.oneshot(get("/summary")).await.unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        });
    }

    #[test]
    fn test_malformed_entry_body() {
        tokio_test::block_on(async {
            let (_, app) = app();
            let response = app
                .oneshot(post_json("/entry", serde_json::json!({ "type": "recipe" })))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        });
    }
}
