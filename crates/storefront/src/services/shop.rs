//! Catalog and cart service traits, backed by the shop backend.

use async_trait::async_trait;
use pocketshop_core::{FilterSelection, ProductId, SortKey, UserId};

use crate::api::{ApiError, Cart, FeatureImage, Product, ShopClient};

/// Read access to the product catalog.
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Products matching a filter selection, in the requested order.
    async fn fetch_filtered_products(
        &self,
        filters: &FilterSelection,
        sort: SortKey,
    ) -> Result<Vec<Product>, ApiError>;

    /// Full details of one product, or `None` if it does not exist.
    async fn fetch_product_details(&self, id: &ProductId) -> Result<Option<Product>, ApiError>;

    /// Hero carousel images in display order.
    async fn fetch_feature_images(&self) -> Result<Vec<FeatureImage>, ApiError>;
}

/// Cart mutations and reads.
#[async_trait]
pub trait CartService: Send + Sync {
    /// Add `quantity` units of a product; returns the backend's success flag.
    async fn add_item(
        &self,
        user_id: &UserId,
        product_id: &ProductId,
        quantity: u32,
    ) -> Result<bool, ApiError>;

    /// Current contents of a user's cart.
    async fn fetch_cart(&self, user_id: &UserId) -> Result<Cart, ApiError>;
}

#[async_trait]
impl CatalogService for ShopClient {
    async fn fetch_filtered_products(
        &self,
        filters: &FilterSelection,
        sort: SortKey,
    ) -> Result<Vec<Product>, ApiError> {
        self.get_filtered_products(filters, sort).await
    }

    async fn fetch_product_details(&self, id: &ProductId) -> Result<Option<Product>, ApiError> {
        self.get_product_details(id).await
    }

    async fn fetch_feature_images(&self) -> Result<Vec<FeatureImage>, ApiError> {
        self.get_feature_images().await
    }
}

#[async_trait]
impl CartService for ShopClient {
    async fn add_item(
        &self,
        user_id: &UserId,
        product_id: &ProductId,
        quantity: u32,
    ) -> Result<bool, ApiError> {
        self.add_to_cart(user_id, product_id, quantity).await
    }

    async fn fetch_cart(&self, user_id: &UserId) -> Result<Cart, ApiError> {
        self.get_cart(user_id).await
    }
}
