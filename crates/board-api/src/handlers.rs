//! # Request Handlers
//!
//! Axum request handlers for the development purchase endpoint.

use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use board_core::StoreError;
use serde::Serialize;
use tracing::{error, info, instrument};

// =============================================================================
// Response Types
// =============================================================================

/// Body of a successful checkout call; the page navigates to `url`
#[derive(Debug, Serialize)]
pub struct CheckoutSessionResponse {
    pub url: String,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: u16) -> Self {
        Self {
            error: error.into(),
            code,
        }
    }
}

fn store_error_to_response(err: StoreError) -> (StatusCode, Json<ErrorResponse>) {
    let code = err.status_code();
    let response = ErrorResponse::new(err.to_string(), code);
    (
        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        Json(response),
    )
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "driftboard-shop",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Create a purchase session for a product
#[instrument(skip(state), fields(product_id = %product_id))]
pub async fn create_session(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<Json<CheckoutSessionResponse>, (StatusCode, Json<ErrorResponse>)> {
    if !state.catalog.contains(&product_id) {
        return Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new(
                format!("Unknown product: {}", product_id),
                404,
            )),
        ));
    }

    let session = state
        .sessions
        .create_session(&product_id)
        .await
        .map_err(|e| {
            error!("Failed to create session: {}", e);
            store_error_to_response(e)
        })?;

    info!("Created purchase session: url={}", session.checkout_url);

    Ok(Json(CheckoutSessionResponse {
        url: session.checkout_url,
    }))
}

/// List the finish catalog
pub async fn list_finishes(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "finishes": state.catalog.finishes,
        "count": state.catalog.len()
    }))
}

/// Checkout success page
pub async fn checkout_success(
    Query(params): Query<std::collections::HashMap<String, String>>,
) -> impl IntoResponse {
    let session_id = params
        .get("session_id")
        .map(|s| s.as_str())
        .unwrap_or("unknown");
    axum::response::Html(format!(
        r#"
<!DOCTYPE html>
<html>
<head><title>Payment Successful</title></head>
<body style="font-family: system-ui; display: flex; justify-content: center; align-items: center; height: 100vh; margin: 0; background: linear-gradient(135deg, #1a1a2e 0%, #16213e 100%);">
    <div style="background: white; padding: 60px; border-radius: 16px; text-align: center;">
        <h1>Payment Successful!</h1>
        <p>Session: <code>{}</code></p>
        <p style="color: #666;">Your Driftboard is on its way.</p>
    </div>
</body>
</html>
"#,
        session_id
    ))
}

/// Checkout cancel page
pub async fn checkout_cancel() -> impl IntoResponse {
    axum::response::Html(
        r#"
<!DOCTYPE html>
<html>
<head><title>Payment Cancelled</title></head>
<body style="font-family: system-ui; display: flex; justify-content: center; align-items: center; height: 100vh; margin: 0; background: linear-gradient(135deg, #1a1a2e 0%, #16213e 100%);">
    <div style="background: white; padding: 60px; border-radius: 16px; text-align: center;">
        <h1>Payment Cancelled</h1>
        <p style="color: #666;">No charges were made.</p>
    </div>
</body>
</html>
"#,
    )
}
