//! HTTP API for ncsmc-simplify
//!
//! Endpoints:
//! - GET /health - Health check
//! - POST /extract - Log text in, JSON report out
//! - POST /simplify - Log text in, simplified text view out

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};

use crate::core::simplify_text;
use crate::types::{SimplifiedReport, SimplifyError};

/// Label used when a request does not name its source
const DEFAULT_SOURCE: &str = "request";

/// Extraction request
#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    /// Label shown in the report header
    pub source: Option<String>,
    /// Full log text
    pub text: String,
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Error body for rejected logs
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl IntoResponse for SimplifyError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            code: self.code().to_string(),
            message: self.to_string(),
        };
        (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
    }
}

/// Create the API router
pub fn create_router() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/extract", post(extract))
        .route("/simplify", post(simplify))
}

/// Health check endpoint
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
    })
}

/// Extract bound states, return the structured report
async fn extract(Json(req): Json<ExtractRequest>) -> Result<Json<SimplifiedReport>, SimplifyError> {
    let source = req.source.as_deref().unwrap_or(DEFAULT_SOURCE);
    let (report, _) = simplify_text(source, &req.text)?;
    Ok(Json(report))
}

/// Extract bound states, return the rendered text view
async fn simplify(Json(req): Json<ExtractRequest>) -> Result<impl IntoResponse, SimplifyError> {
    let source = req.source.as_deref().unwrap_or(DEFAULT_SOURCE);
    let (_, rendered) = simplify_text(source, &req.text)?;
    Ok((StatusCode::OK, [(header::CONTENT_TYPE, "text/plain; charset=utf-8")], rendered))
}

/// Run the API server
pub async fn run_server(addr: &str) -> Result<(), Box<dyn std::error::Error>> {
    let router = create_router();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    println!("ncsmc-simplify API running on {}", addr);
    println!("  GET  /health   - Health check");
    println!("  POST /extract  - JSON report");
    println!("  POST /simplify - Simplified text view");
    axum::serve(listener, router).await?;
    Ok(())
}
