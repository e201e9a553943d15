//! # Ferment-Cart RS
//!
//! Checkout session service for the fermented-foods storefront.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables
//! export STRIPE_SECRET_KEY=sk_test_...
//!
//! # Run the server
//! ferment-cart
//! ```

use shop_api::{routes, state::AppState};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    // Initialize application state (fails fast on missing Stripe key)
    let state = AppState::new()?;

    let addr = state.config.socket_addr();
    let is_prod = state.config.is_production();

    info!("Environment: {}", state.config.environment);
    info!("Products loaded: {}", state.catalog.len());
    info!("Checkout provider: {}", state.provider.provider_name());

    let app = routes::create_router(state);

    info!("Ferment-Cart starting on http://{}", addr);

    if !is_prod {
        info!("Checkout: POST http://{}/create-checkout-session", addr);
        info!("Products: GET http://{}/api/v1/products", addr);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
