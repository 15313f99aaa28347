//! HTTP Server for the catalog intake API.
//!
//! # API Endpoints
//!
//! | Method | Path                | Description                          |
//! |--------|---------------------|--------------------------------------|
//! | GET    | `/health`           | Health check                         |
//! | POST   | `/api/products/add` | Validate and accept a product batch  |

use axum::{
    extract::rejection::JsonRejection,
    http::{header, Method, StatusCode},
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::types::AddProductsResponse;
use crate::batch::process_batch;
use crate::error::{ServerError, ServerResult};

/// Collection-creation route.
pub const PRODUCTS_ADD_PATH: &str = "/api/products/add";

/// Build the application router.
pub fn router() -> Router {
    // Permissive CORS for local development
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(health))
        .route("/health", get(health))
        .route(PRODUCTS_ADD_PATH, post(add_products))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server
pub async fn start_server(port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("🚀 Catalog server running on http://localhost:{}", port);
    tracing::info!("   POST {} - Add a product batch", PRODUCTS_ADD_PATH);
    tracing::info!("   GET  /health - Health check");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router()).await?;

    Ok(())
}

/// Health check endpoint
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "catalog",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "addProducts": format!("POST {}", PRODUCTS_ADD_PATH)
        }
    }))
}

/// Batch creation endpoint
async fn add_products(
    payload: Result<Json<Value>, JsonRejection>,
) -> ServerResult<(StatusCode, Json<AddProductsResponse>)> {
    let Json(body) = payload.map_err(|rejection| ServerError::BadRequest(rejection.body_text()))?;

    let products = process_batch(&body)?;
    let response = AddProductsResponse::from(products);

    tracing::info!(
        batch_id = %response.batch_id,
        accepted = response.accepted,
        "✅ Product batch accepted"
    );

    Ok((StatusCode::CREATED, Json(response)))
}
