//! # Storefront URLs
//!
//! Success/cancel URLs for the checkout redirect contract. The success
//! URL carries the processor's session-id placeholder; after payment the
//! processor redirects back with the real id in the query string, which
//! the success page reads to display confirmation.

/// URLs the payment processor redirects back to
#[derive(Debug, Clone)]
pub struct StorefrontUrls {
    /// Base URL of the storefront (e.g. "https://surkaal.no")
    pub base_url: String,
    /// Success page path
    pub success_path: String,
    /// Cancel destination path (back to the cart)
    pub cancel_path: String,
}

impl StorefrontUrls {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            success_path: "/success".to_string(),
            cancel_path: "/cart".to_string(),
        }
    }

    /// Builder: set success page path
    pub fn with_success_path(mut self, path: impl Into<String>) -> Self {
        self.success_path = path.into();
        self
    }

    /// Builder: set cancel destination path
    pub fn with_cancel_path(mut self, path: impl Into<String>) -> Self {
        self.cancel_path = path.into();
        self
    }

    /// Success URL with the session-id placeholder the processor fills in
    pub fn success_url_with_session(&self) -> String {
        format!(
            "{}{}?session_id={{CHECKOUT_SESSION_ID}}",
            self.base_url, self.success_path
        )
    }

    /// Cancel URL
    pub fn cancel_url(&self) -> String {
        format!("{}{}", self.base_url, self.cancel_path)
    }
}

impl Default for StorefrontUrls {
    fn default() -> Self {
        Self::new("http://localhost:3000")
    }
}
