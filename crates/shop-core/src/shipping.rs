//! # Shipping Policy
//!
//! Flat-rate shipping with a free-shipping threshold. Amounts are whole
//! NOK, matching catalog prices.

/// Orders at or above this subtotal ship free (whole NOK)
pub const FREE_SHIPPING_THRESHOLD: i64 = 500;

/// Flat shipping rate below the threshold (whole NOK)
pub const FLAT_RATE: i64 = 49;

/// Shipping cost for a cart subtotal in whole NOK
pub fn shipping_cost(subtotal: i64) -> i64 {
    if subtotal >= FREE_SHIPPING_THRESHOLD {
        0
    } else {
        FLAT_RATE
    }
}
