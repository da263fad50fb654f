//! Client for the shop backend (catalog, feature images, cart).
//!
//! # Architecture
//!
//! - Plain JSON over HTTP via `reqwest`; every response is wrapped in a
//!   `{"success": bool, "data": ..., "message": ...}` envelope
//! - The backend is the source of truth - no local sync
//! - Catalog reads are cached in memory via `moka`; cart calls never are
//!
//! # Example
//!
//! ```rust,ignore
//! use pocketshop_storefront::api::ShopClient;
//!
//! let client = ShopClient::new(&config.shop_api);
//! let images = client.get_feature_images().await?;
//! let added = client.add_to_cart(&user_id, &product_id, 1).await?;
//! ```

mod cache;
mod client;
pub mod types;

pub use client::ShopClient;
pub use types::*;

use thiserror::Error;

/// Errors that can occur when talking to the shop backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Endpoint URL could not be built.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Backend answered with a non-success status code.
    #[error("HTTP {status}: {body}")]
    Status {
        /// Response status code.
        status: u16,
        /// First part of the response body.
        body: String,
    },

    /// Backend answered `success: false`.
    #[error("Rejected: {0}")]
    Rejected(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = ApiError::Status {
            status: 502,
            body: "bad gateway".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 502: bad gateway");

        let err = ApiError::Rejected("Invalid data provided!".to_string());
        assert_eq!(err.to_string(), "Rejected: Invalid data provided!");
    }
}
