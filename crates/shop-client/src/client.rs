//! # Checkout Session Client
//!
//! Builds the session-creation request from the cart and submits it to
//! the checkout session service. One outbound call per invocation; a
//! failed call is surfaced directly to the caller, never retried.

use crate::urls::StorefrontUrls;
use reqwest::Client;
use shop_core::{
    shipping_cost, Cart, CheckoutSession, CustomerInfo, ErrorResponse, PriceData, ProductData,
    SessionLineItem, SessionRequest, SessionResponse, ShopError, ShopResult, CURRENCY,
};
use tracing::{debug, error, info, instrument};

/// Shipping line-item label
const SHIPPING_NAME: &str = "Frakt";
/// Shipping line-item description
const SHIPPING_DESCRIPTION: &str = "Levering til din adresse";

/// Failure notice shown when the service reports no message
const GENERIC_FAILURE: &str = "Kunne ikke starte betaling";

/// Client for the checkout session service
pub struct CheckoutClient {
    endpoint: String,
    client: Client,
}

impl CheckoutClient {
    /// Create a client for a session-service endpoint
    pub fn new(endpoint: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            endpoint: endpoint.into(),
            client,
        }
    }

    /// Create from the `CHECKOUT_ENDPOINT` environment variable
    pub fn from_env() -> ShopResult<Self> {
        dotenvy::dotenv().ok();

        let endpoint = std::env::var("CHECKOUT_ENDPOINT")
            .map_err(|_| ShopError::Configuration("CHECKOUT_ENDPOINT not set".to_string()))?;

        Ok(Self::new(endpoint))
    }

    /// Build the session request: one line item per cart line, plus a
    /// synthetic shipping line when the subtotal is under the
    /// free-shipping threshold. Catalog prices (whole NOK) are converted
    /// to øre here.
    fn build_request(
        &self,
        cart: &Cart,
        customer: &CustomerInfo,
        urls: &StorefrontUrls,
    ) -> SessionRequest {
        let subtotal = cart.total_price();
        let shipping = shipping_cost(subtotal);

        let mut line_items: Vec<SessionLineItem> = cart
            .lines()
            .iter()
            .map(|line| {
                let product = &line.product;
                let images = if product.image.is_empty() {
                    None
                } else {
                    Some(vec![product.image.clone()])
                };

                let mut metadata = std::collections::HashMap::new();
                if !product.category.is_empty() {
                    metadata.insert("category".to_string(), product.category.clone());
                }
                if !product.weight.is_empty() {
                    metadata.insert("weight".to_string(), product.weight.clone());
                }

                SessionLineItem {
                    price_data: PriceData {
                        currency: CURRENCY.to_string(),
                        product_data: ProductData {
                            name: product.name.clone(),
                            description: Some(product.description.clone()),
                            images,
                            metadata,
                        },
                        unit_amount: product.price * 100,
                    },
                    quantity: line.quantity,
                }
            })
            .collect();

        if shipping > 0 {
            line_items.push(SessionLineItem {
                price_data: PriceData {
                    currency: CURRENCY.to_string(),
                    product_data: ProductData {
                        name: SHIPPING_NAME.to_string(),
                        description: Some(SHIPPING_DESCRIPTION.to_string()),
                        images: None,
                        metadata: Default::default(),
                    },
                    unit_amount: shipping * 100,
                },
                quantity: 1,
            });
        }

        SessionRequest {
            line_items,
            customer_info: customer.clone(),
            success_url: urls.success_url_with_session(),
            cancel_url: urls.cancel_url(),
        }
    }

    /// Create a checkout session for the cart.
    ///
    /// On success the service's `{url, sessionId}` is returned unchanged;
    /// the caller performs the redirect.
    #[instrument(skip(self, cart, customer, urls), fields(items = cart.total_items()))]
    pub async fn create_session(
        &self,
        cart: &Cart,
        customer: &CustomerInfo,
        urls: &StorefrontUrls,
    ) -> ShopResult<CheckoutSession> {
        let request = self.build_request(cart, customer, urls);

        debug!(
            "Submitting session request: {} line items, subtotal={}",
            request.line_items.len(),
            cart.total_price()
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("Session service unreachable: {}", e);
                ShopError::Network(e.to_string())
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ShopError::Network(e.to_string()))?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.error)
                .unwrap_or_else(|_| GENERIC_FAILURE.to_string());
            error!("Session creation failed: status={}, message={}", status, message);
            return Err(ShopError::SessionCreationFailed(message));
        }

        let session: SessionResponse = serde_json::from_str(&body).map_err(|e| {
            ShopError::Serialization(format!("Failed to parse session response: {}", e))
        })?;

        info!("Checkout session created: id={}", session.session_id);

        Ok(CheckoutSession::new(session.session_id, session.url))
    }
}
