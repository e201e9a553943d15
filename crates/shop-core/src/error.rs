//! # Error Types
//!
//! Typed error handling for the ferment-cart storefront.
//! All fallible operations return `Result<T, ShopError>`.

use thiserror::Error;

/// Core error type for catalog, checkout, and session operations
#[derive(Debug, Error)]
pub enum ShopError {
    /// Configuration errors (missing secret key, invalid config)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid request data (unparseable body, missing fields)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Product not found in catalog
    #[error("Product not found: {product_id}")]
    ProductNotFound { product_id: String },

    /// Request used a method other than POST or OPTIONS
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Payment processor rejected the session-creation call.
    /// Carries only the downstream status code; the response body is
    /// logged server-side and never surfaced to the caller.
    #[error("Stripe API error: {status}")]
    Provider { status: u16 },

    /// Network/HTTP error reaching the processor or session service
    #[error("Network error: {0}")]
    Network(String),

    /// Session creation failed with a service-reported message
    #[error("{0}")]
    SessionCreationFailed(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ShopError {
    /// Returns the HTTP status code for this error.
    ///
    /// The session service contract is 405 for a bad method and 500 for
    /// every other failure; 404 is used only by the catalog endpoints.
    pub fn status_code(&self) -> u16 {
        match self {
            ShopError::MethodNotAllowed => 405,
            ShopError::ProductNotFound { .. } => 404,
            _ => 500,
        }
    }
}

/// Result type alias for storefront operations
pub type ShopResult<T> = Result<T, ShopError>;
