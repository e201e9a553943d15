//! # shop-client
//!
//! Storefront-side checkout session client.
//!
//! Takes the cart and validated customer info, computes shipping, builds
//! the session-creation request, and submits it to the checkout session
//! service. The caller opens the returned URL (e.g. in a new browsing
//! context); this client never performs the redirect itself.
//!
//! ## Example
//!
//! ```rust,ignore
//! use shop_client::{CheckoutClient, StorefrontUrls};
//!
//! let client = CheckoutClient::from_env()?;
//! let urls = StorefrontUrls::new("https://surkaal.no");
//!
//! let session = client.create_session(&cart, &customer, &urls).await?;
//! // open session.url, keep session.session_id for the success page
//! ```

pub mod client;
pub mod urls;

// Re-exports
pub use client::CheckoutClient;
pub use urls::StorefrontUrls;
