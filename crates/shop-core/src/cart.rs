//! # Shopping Cart
//!
//! In-memory cart for a single shopping session. The cart is an ordered
//! sequence of lines, at most one per product id, and is never persisted.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// One (product, quantity) pair in the cart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLine {
    /// The product (denormalized from the catalog)
    pub product: Product,

    /// Quantity (always >= 1; a line at 0 is removed from the cart)
    pub quantity: u32,
}

impl CartLine {
    /// Create a line for a product with quantity 1
    pub fn new(product: &Product) -> Self {
        Self {
            product: product.clone(),
            quantity: 1,
        }
    }

    /// Line total in whole NOK
    pub fn total(&self) -> i64 {
        self.product.price * self.quantity as i64
    }
}

/// An ordered shopping cart, owned by the active session.
///
/// Stock enforcement is the caller's responsibility: add-to-cart call
/// sites must check `Product::in_stock` before calling [`Cart::add`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add one unit of a product.
    ///
    /// If a line for the product already exists its quantity is
    /// incremented; otherwise a new line is appended with quantity 1.
    pub fn add(&mut self, product: &Product) {
        match self.lines.iter_mut().find(|l| l.product.id == product.id) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(CartLine::new(product)),
        }
    }

    /// Set the quantity for a product's line.
    ///
    /// A quantity of 0 removes the line entirely. Setting a quantity for
    /// a product not in the cart is a no-op. No upper bound is enforced.
    pub fn set_quantity(&mut self, product_id: &str, quantity: u32) {
        if quantity == 0 {
            self.remove(product_id);
        } else if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product_id) {
            line.quantity = quantity;
        }
    }

    /// Remove a product's line entirely
    pub fn remove(&mut self, product_id: &str) {
        self.lines.retain(|l| l.product.id != product_id);
    }

    /// Remove all lines
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of quantities across all lines
    pub fn total_items(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Sum of `price * quantity` across all lines, in whole NOK
    pub fn total_price(&self) -> i64 {
        self.lines.iter().map(CartLine::total).sum()
    }

    /// The cart lines, in insertion order
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Check if cart is empty
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
