//! # Checkout Session Types
//!
//! Wire contract between the storefront client and the checkout session
//! service, plus the provider trait the service dispatches through.
//! Field names follow the session-creation JSON body exactly.

use crate::checkout::CustomerInfo;
use crate::error::ShopResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// The storefront's fixed currency code (ISO 4217, lowercase per Stripe)
pub const CURRENCY: &str = "nok";

/// Product metadata on a line item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductData {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,

    /// Free-form labels (category, weight). Carried on the request for
    /// the processor's records; not part of the form-encoded relay.
    #[serde(default, skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub metadata: std::collections::HashMap<String, String>,
}

/// Pricing for a line item. `unit_amount` is in minor currency units
/// (øre), converted from the catalog's whole-NOK price at build time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceData {
    pub currency: String,
    pub product_data: ProductData,
    pub unit_amount: i64,
}

/// One priced entry (product or shipping) in a session request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionLineItem {
    pub price_data: PriceData,
    pub quantity: u32,
}

impl SessionLineItem {
    /// Line total in minor currency units
    pub fn total(&self) -> i64 {
        self.price_data.unit_amount * self.quantity as i64
    }
}

/// Session-creation request body (client -> service)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRequest {
    pub line_items: Vec<SessionLineItem>,
    pub customer_info: CustomerInfo,

    /// Must contain the `{CHECKOUT_SESSION_ID}` placeholder token
    pub success_url: String,
    pub cancel_url: String,
}

/// Session-creation response body (service -> client), success case
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub url: String,

    #[serde(rename = "sessionId")]
    pub session_id: String,
}

/// Error response body for every failure path
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// A checkout session created by the payment processor.
///
/// Created once per checkout attempt; the processor owns its state
/// machine after the redirect.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutSession {
    /// Processor's opaque session identifier
    pub session_id: String,

    /// URL to redirect the customer to for payment
    pub url: String,

    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl CheckoutSession {
    /// Create a new checkout session
    pub fn new(session_id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            url: url.into(),
            created_at: Utc::now(),
        }
    }
}

/// Trait for payment-processor session creation.
///
/// The session service dispatches through this seam so the processor
/// can be swapped (or mocked in tests) without touching handler code.
#[async_trait]
pub trait CheckoutProvider: Send + Sync {
    /// Create a checkout session from a session request.
    ///
    /// One outbound call per invocation; failures are surfaced directly,
    /// never retried.
    async fn create_session(&self, request: &SessionRequest) -> ShopResult<CheckoutSession>;

    /// Processor name (for logging)
    fn provider_name(&self) -> &'static str;
}

/// Type alias for a shared provider (dynamic dispatch)
pub type BoxedCheckoutProvider = Arc<dyn CheckoutProvider>;
