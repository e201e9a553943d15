//! # Application State
//!
//! Shared state for the Axum application. The checkout provider is
//! constructed once at startup from validated configuration; a missing
//! Stripe credential fails the boot, never a request mid-flight.

use shop_core::{BoxedCheckoutProvider, Catalog};
use shop_stripe::StripeCheckout;
use std::sync::Arc;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Base URL of the storefront (for the redirect pages)
    pub base_url: String,
    /// Environment (development, staging, production)
    pub environment: String,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            base_url: std::env::var("BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> std::net::SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .expect("Invalid socket address")
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Checkout session provider
    pub provider: BoxedCheckoutProvider,
    /// Product catalog
    pub catalog: Catalog,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Create the AppState with the Stripe provider.
    ///
    /// Fails fast if `STRIPE_SECRET_KEY` is absent or malformed.
    pub fn new() -> anyhow::Result<Self> {
        let config = AppConfig::from_env();
        let catalog = load_catalog()?;

        let stripe = StripeCheckout::from_env()
            .map_err(|e| anyhow::anyhow!("Failed to initialize Stripe: {}", e))?;

        Ok(Self {
            provider: Arc::new(stripe) as BoxedCheckoutProvider,
            catalog,
            config,
        })
    }

    /// Create state with an explicit provider and catalog (for tests)
    pub fn with_provider(
        provider: BoxedCheckoutProvider,
        catalog: Catalog,
        config: AppConfig,
    ) -> Self {
        Self {
            provider,
            catalog,
            config,
        }
    }
}

/// Load product catalog from config file
fn load_catalog() -> anyhow::Result<Catalog> {
    let config_paths = [
        "config/products.toml",
        "../config/products.toml",
        "../../config/products.toml",
    ];

    for path in config_paths {
        if let Ok(content) = std::fs::read_to_string(path) {
            let catalog = Catalog::from_toml(&content)
                .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path, e))?;
            tracing::info!("Loaded {} products from {}", catalog.len(), path);
            return Ok(catalog);
        }
    }

    tracing::warn!("No product catalog found, using empty catalog");
    Ok(Catalog::new())
}
