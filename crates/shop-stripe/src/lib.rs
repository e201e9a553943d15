//! # shop-stripe
//!
//! Stripe Checkout Sessions integration for ferment-cart.
//!
//! The session service holds the secret key; the storefront never sees
//! it. A session-creation call reshapes the storefront's JSON request
//! into Stripe's form-encoded `/v1/checkout/sessions` request and
//! relays the resulting redirect URL and session id.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use shop_stripe::StripeCheckout;
//! use shop_core::CheckoutProvider;
//!
//! // Create from environment (fails fast if STRIPE_SECRET_KEY is absent)
//! let stripe = StripeCheckout::from_env()?;
//!
//! let session = stripe.create_session(&request).await?;
//! // Respond with session.url and session.session_id
//! ```

pub mod checkout;
pub mod config;

// Re-exports
pub use checkout::StripeCheckout;
pub use config::StripeConfig;
