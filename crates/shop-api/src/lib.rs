//! # shop-api
//!
//! HTTP API layer for ferment-cart.
//!
//! This crate provides:
//! - The stateless checkout session service (POST /create-checkout-session)
//! - Catalog endpoints for the storefront
//! - Success/cancel pages for the payment redirect contract
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | POST | `/create-checkout-session` | Create a Stripe checkout session |
//! | GET | `/api/v1/products` | List in-stock products |
//! | GET | `/api/v1/products/{id}` | Get product |
//! | GET | `/checkout/success` | Post-payment confirmation page |
//! | GET | `/checkout/cancel` | Cancelled-payment page |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
