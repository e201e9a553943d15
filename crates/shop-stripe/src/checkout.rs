//! # Stripe Checkout Sessions
//!
//! Implementation of the Stripe Checkout Sessions API call. This is the
//! only outbound call the session service makes; nothing is retried.

use crate::config::StripeConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use shop_core::{CheckoutProvider, CheckoutSession, SessionRequest, ShopError, ShopResult};
use tracing::{debug, error, info, instrument};

/// Countries the storefront ships to (ISO 3166-1 alpha-2)
const SHIPPING_COUNTRIES: &[&str] = &["NO"];

/// Stripe Checkout Session provider.
///
/// Uses Stripe's hosted checkout page; the storefront redirects the
/// customer to the returned URL and Stripe owns the flow from there.
pub struct StripeCheckout {
    config: StripeConfig,
    client: Client,
}

impl StripeCheckout {
    /// Create a new Stripe checkout provider
    pub fn new(config: StripeConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Create from environment variables
    pub fn from_env() -> ShopResult<Self> {
        let config = StripeConfig::from_env()?;
        Ok(Self::new(config))
    }

    /// Build the form-encoded body for `/v1/checkout/sessions`.
    ///
    /// One encoded entry per line item; customer fields ride along as
    /// session metadata so they land on Stripe's record of the payment.
    fn build_form_params(&self, request: &SessionRequest) -> Vec<(String, String)> {
        let customer = &request.customer_info;

        let mut params: Vec<(String, String)> = vec![
            ("mode".to_string(), "payment".to_string()),
            ("success_url".to_string(), request.success_url.clone()),
            ("cancel_url".to_string(), request.cancel_url.clone()),
            ("customer_email".to_string(), customer.email.clone()),
            (
                "billing_address_collection".to_string(),
                "required".to_string(),
            ),
            (
                "phone_number_collection[enabled]".to_string(),
                "true".to_string(),
            ),
            ("metadata[customer_name]".to_string(), customer.name.clone()),
            (
                "metadata[customer_phone]".to_string(),
                customer.phone.clone(),
            ),
            (
                "metadata[shipping_address]".to_string(),
                customer.address.clone(),
            ),
            ("metadata[shipping_city]".to_string(), customer.city.clone()),
            (
                "metadata[shipping_postal_code]".to_string(),
                customer.postal_code.clone(),
            ),
        ];

        for (i, country) in SHIPPING_COUNTRIES.iter().enumerate() {
            params.push((
                format!("shipping_address_collection[allowed_countries][{i}]"),
                (*country).to_string(),
            ));
        }

        for (i, item) in request.line_items.iter().enumerate() {
            params.push((
                format!("line_items[{i}][price_data][currency]"),
                item.price_data.currency.clone(),
            ));
            params.push((
                format!("line_items[{i}][price_data][product_data][name]"),
                item.price_data.product_data.name.clone(),
            ));
            params.push((
                format!("line_items[{i}][price_data][product_data][description]"),
                item.price_data
                    .product_data
                    .description
                    .clone()
                    .unwrap_or_default(),
            ));
            if let Some(image) = item
                .price_data
                .product_data
                .images
                .as_ref()
                .and_then(|imgs| imgs.first())
            {
                params.push((
                    format!("line_items[{i}][price_data][product_data][images][0]"),
                    image.clone(),
                ));
            }
            params.push((
                format!("line_items[{i}][price_data][unit_amount]"),
                item.price_data.unit_amount.to_string(),
            ));
            params.push((
                format!("line_items[{i}][quantity]"),
                item.quantity.to_string(),
            ));
        }

        params
    }
}

#[async_trait]
impl CheckoutProvider for StripeCheckout {
    #[instrument(skip(self, request), fields(items = request.line_items.len()))]
    async fn create_session(&self, request: &SessionRequest) -> ShopResult<CheckoutSession> {
        // The downstream call is never attempted without a credential
        if self.config.secret_key.is_empty() {
            return Err(ShopError::Configuration(
                "Missing Stripe secret key".to_string(),
            ));
        }

        let form_params = self.build_form_params(request);

        debug!(
            "Creating Stripe checkout session: {} line items",
            request.line_items.len()
        );

        let url = format!("{}/v1/checkout/sessions", self.config.api_base_url);

        let response = self
            .client
            .post(&url)
            .header("Authorization", self.config.auth_header())
            .header("Stripe-Version", &self.config.api_version)
            .form(&form_params)
            .send()
            .await
            .map_err(|e| ShopError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ShopError::Network(e.to_string()))?;

        if !status.is_success() {
            // Full detail stays server-side; the caller sees only the code
            error!("Stripe API error: status={}, body={}", status, body);
            return Err(ShopError::Provider {
                status: status.as_u16(),
            });
        }

        let session: StripeSessionResponse = serde_json::from_str(&body).map_err(|e| {
            ShopError::Serialization(format!("Failed to parse Stripe response: {}", e))
        })?;

        info!(
            "Created Stripe checkout session: id={}, url={}",
            session.id, session.url
        );

        Ok(CheckoutSession::new(session.id, session.url))
    }

    fn provider_name(&self) -> &'static str {
        "stripe"
    }
}

// =============================================================================
// Stripe API Types
// =============================================================================

#[derive(Debug, Deserialize)]
struct StripeSessionResponse {
    id: String,
    url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use shop_core::{CustomerInfo, PriceData, ProductData, SessionLineItem, CURRENCY};
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn customer() -> CustomerInfo {
        CustomerInfo {
            email: "ola@nordmann.no".to_string(),
            name: "Ola Nordmann".to_string(),
            address: "Karl Johans gate 1".to_string(),
            city: "Oslo".to_string(),
            postal_code: "0154".to_string(),
            phone: "+47 912 34 567".to_string(),
        }
    }

    fn request() -> SessionRequest {
        SessionRequest {
            line_items: vec![
                SessionLineItem {
                    price_data: PriceData {
                        currency: CURRENCY.to_string(),
                        product_data: ProductData {
                            name: "Klassisk Sauerkraut".to_string(),
                            description: Some("Tradisjonell sauerkraut".to_string()),
                            images: Some(vec!["https://example.com/kraut.jpg".to_string()]),
                            metadata: Default::default(),
                        },
                        unit_amount: 8900,
                    },
                    quantity: 2,
                },
                SessionLineItem {
                    price_data: PriceData {
                        currency: CURRENCY.to_string(),
                        product_data: ProductData {
                            name: "Frakt".to_string(),
                            description: Some("Levering til din adresse".to_string()),
                            images: None,
                            metadata: Default::default(),
                        },
                        unit_amount: 4900,
                    },
                    quantity: 1,
                },
            ],
            customer_info: customer(),
            success_url: "https://shop.example/success?session_id={CHECKOUT_SESSION_ID}"
                .to_string(),
            cancel_url: "https://shop.example/cart".to_string(),
        }
    }

    #[test]
    fn test_form_params_cover_session_settings() {
        let stripe = StripeCheckout::new(StripeConfig::new("sk_test_abc"));
        let params = stripe.build_form_params(&request());

        let get = |key: &str| {
            params
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str())
        };

        assert_eq!(get("mode"), Some("payment"));
        assert_eq!(get("billing_address_collection"), Some("required"));
        assert_eq!(get("phone_number_collection[enabled]"), Some("true"));
        assert_eq!(
            get("shipping_address_collection[allowed_countries][0]"),
            Some("NO")
        );
        assert_eq!(get("customer_email"), Some("ola@nordmann.no"));
        assert_eq!(get("metadata[customer_name]"), Some("Ola Nordmann"));
        assert_eq!(get("metadata[shipping_postal_code]"), Some("0154"));
    }

    #[test]
    fn test_form_params_encode_each_line_item() {
        let stripe = StripeCheckout::new(StripeConfig::new("sk_test_abc"));
        let params = stripe.build_form_params(&request());

        let get = |key: &str| {
            params
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str())
        };

        assert_eq!(get("line_items[0][price_data][currency]"), Some("nok"));
        assert_eq!(get("line_items[0][price_data][unit_amount]"), Some("8900"));
        assert_eq!(get("line_items[0][quantity]"), Some("2"));
        assert_eq!(
            get("line_items[0][price_data][product_data][images][0]"),
            Some("https://example.com/kraut.jpg")
        );

        // Shipping line has no image entry
        assert_eq!(get("line_items[1][price_data][unit_amount]"), Some("4900"));
        assert_eq!(get("line_items[1][quantity]"), Some("1"));
        assert!(get("line_items[1][price_data][product_data][images][0]").is_none());
    }

    #[tokio::test]
    async fn test_create_session_success() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/checkout/sessions"))
            .and(header("Authorization", "Bearer sk_test_abc"))
            .and(body_string_contains("mode=payment"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "cs_test_123",
                "url": "https://checkout.stripe.com/c/pay/cs_test_123"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let config = StripeConfig::new("sk_test_abc").with_api_base_url(server.uri());
        let stripe = StripeCheckout::new(config);

        let session = stripe.create_session(&request()).await.unwrap();

        assert_eq!(session.session_id, "cs_test_123");
        assert_eq!(session.url, "https://checkout.stripe.com/c/pay/cs_test_123");
    }

    #[tokio::test]
    async fn test_downstream_error_surfaces_status_only() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/checkout/sessions"))
            .respond_with(ResponseTemplate::new(402).set_body_json(serde_json::json!({
                "error": { "message": "Your card was declined." }
            })))
            .mount(&server)
            .await;

        let config = StripeConfig::new("sk_test_abc").with_api_base_url(server.uri());
        let stripe = StripeCheckout::new(config);

        let err = stripe.create_session(&request()).await.unwrap_err();

        assert!(matches!(err, ShopError::Provider { status: 402 }));
        // Downstream detail is logged, not surfaced
        assert_eq!(err.to_string(), "Stripe API error: 402");
    }

    #[tokio::test]
    async fn test_missing_secret_never_calls_downstream() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let config = StripeConfig::new("").with_api_base_url(server.uri());
        let stripe = StripeCheckout::new(config);

        let err = stripe.create_session(&request()).await.unwrap_err();

        assert!(matches!(err, ShopError::Configuration(_)));
    }
}
