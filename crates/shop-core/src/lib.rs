//! # shop-core
//!
//! Core types for the ferment-cart storefront.
//!
//! This crate provides:
//! - `Product` and `Catalog` for the read-only product catalog
//! - `Cart` and `CartLine` for the in-memory shopping cart
//! - `CustomerInfo` and `Validator` for checkout form validation
//! - `SessionRequest` / `CheckoutSession` wire types for session creation
//! - `CheckoutProvider` trait for payment-processor implementations
//! - `ShopError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use shop_core::{Cart, Catalog, CustomerInfo, Validator};
//!
//! let catalog = Catalog::from_toml(include_str!("../../config/products.toml"))?;
//! let mut cart = Cart::new();
//!
//! // Call sites check stock before adding
//! let product = catalog.get("1").unwrap();
//! if product.in_stock {
//!     cart.add(product);
//! }
//!
//! let errors = Validator::new().validate(&customer);
//! if errors.is_empty() {
//!     // hand the cart to the checkout session client
//! }
//! ```

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod session;
pub mod shipping;

// Re-exports for convenience
pub use cart::{Cart, CartLine};
pub use catalog::{Catalog, Product};
pub use checkout::{
    CheckoutField, CustomerInfo, FourDigitPostalCode, PostalCodeRule, ValidationErrors, Validator,
};
pub use error::{ShopError, ShopResult};
pub use session::{
    BoxedCheckoutProvider, CheckoutProvider, CheckoutSession, ErrorResponse, PriceData,
    ProductData, SessionLineItem, SessionRequest, SessionResponse, CURRENCY,
};
pub use shipping::{shipping_cost, FLAT_RATE, FREE_SHIPPING_THRESHOLD};
