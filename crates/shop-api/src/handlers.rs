//! # Request Handlers
//!
//! Axum request handlers for the checkout session service and the
//! catalog endpoints. Every failure on the session route is converted
//! into a `{error}` body; downstream detail stays in the server log.

use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    Json,
};
use shop_core::{ErrorResponse, SessionRequest, SessionResponse, ShopError};
use std::collections::HashMap;
use tracing::{error, info, instrument};

fn error_response(err: ShopError) -> (StatusCode, Json<ErrorResponse>) {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(ErrorResponse::new(err.to_string())))
}

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "ferment-cart",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Create a checkout session.
///
/// The body is read raw and deserialized here rather than through the
/// `Json` extractor so every parse failure lands in the same `{error}`
/// shape as the downstream failures.
#[instrument(skip(state, body))]
pub async fn create_checkout_session(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SessionResponse>, (StatusCode, Json<ErrorResponse>)> {
    let request: SessionRequest = serde_json::from_slice(&body)
        .map_err(|e| error_response(ShopError::InvalidRequest(e.to_string())))?;

    info!(
        "Creating checkout session: {} line items, provider={}",
        request.line_items.len(),
        state.provider.provider_name()
    );

    let session = state.provider.create_session(&request).await.map_err(|e| {
        error!("Failed to create checkout session: {}", e);
        error_response(e)
    })?;

    info!("Created checkout session: {}", session.session_id);

    Ok(Json(SessionResponse {
        url: session.url,
        session_id: session.session_id,
    }))
}

/// Fallback for non-POST, non-preflight methods on the session route
pub async fn method_not_allowed() -> (StatusCode, Json<ErrorResponse>) {
    error_response(ShopError::MethodNotAllowed)
}

/// List in-stock products
pub async fn list_products(State(state): State<AppState>) -> impl IntoResponse {
    let products: Vec<_> = state.catalog.in_stock_products().collect();
    Json(serde_json::json!({
        "products": products,
        "count": products.len()
    }))
}

/// Get single product
pub async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
    let product = state
        .catalog
        .get(&product_id)
        .ok_or_else(|| error_response(ShopError::ProductNotFound { product_id }))?;

    Ok(Json(product.clone()))
}

/// Post-payment confirmation page.
///
/// The processor redirects back here with the real session id in the
/// query string; the page reads it to display confirmation.
pub async fn checkout_success(Query(params): Query<HashMap<String, String>>) -> impl IntoResponse {
    let session_id = params
        .get("session_id")
        .map(|s| s.as_str())
        .unwrap_or("unknown");
    Html(format!(
        r#"
<!DOCTYPE html>
<html lang="no">
<head><title>Takk for bestillingen!</title></head>
<body style="font-family: system-ui; display: flex; justify-content: center; align-items: center; height: 100vh; margin: 0;">
    <div style="padding: 60px; text-align: center;">
        <h1>Takk for bestillingen!</h1>
        <p>Ordrereferanse: <code>{}</code></p>
        <p style="color: #666;">Du vil motta en bekreftelse på e-post.</p>
    </div>
</body>
</html>
"#,
        session_id
    ))
}

/// Cancelled-payment page
pub async fn checkout_cancel() -> impl IntoResponse {
    Html(
        r#"
<!DOCTYPE html>
<html lang="no">
<head><title>Betaling avbrutt</title></head>
<body style="font-family: system-ui; display: flex; justify-content: center; align-items: center; height: 100vh; margin: 0;">
    <div style="padding: 60px; text-align: center;">
        <h1>Betaling avbrutt</h1>
        <p style="color: #666;">Ingen belastning er gjort. Handlekurven din er urørt.</p>
    </div>
</body>
</html>
"#,
    )
}
