//! Shop backend client implementation.
//!
//! Uses `reqwest` for HTTP and caches catalog reads using `moka`.

use std::sync::Arc;

use moka::future::Cache;
use pocketshop_core::{FilterSelection, ProductId, SortKey, UserId};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;

use crate::api::ApiError;
use crate::api::cache::CacheValue;
use crate::api::types::{AddToCartRequest, Cart, Envelope, FeatureImage, Product};
use crate::config::ShopApiConfig;

const PRODUCTS_PATH: &str = "api/shop/products/get";
const FEATURE_IMAGES_PATH: &str = "api/common/feature/get";
const CART_ADD_PATH: &str = "api/shop/cart/add";
const CART_GET_PATH: &str = "api/shop/cart/get";

/// How much of an error body to keep for logs and errors.
const ERROR_BODY_PREVIEW: usize = 200;

// =============================================================================
// ShopClient
// =============================================================================

/// Client for the shop backend.
///
/// Cheap to clone; clones share the HTTP connection pool and the cache.
#[derive(Clone)]
pub struct ShopClient {
    inner: Arc<ShopClientInner>,
}

struct ShopClientInner {
    client: reqwest::Client,
    base_url: Url,
    cache: Cache<String, CacheValue>,
}

impl ShopClient {
    /// Create a new backend client.
    #[must_use]
    pub fn new(config: &ShopApiConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(1000)
            .time_to_live(config.cache_ttl)
            .build();

        Self {
            inner: Arc::new(ShopClientInner {
                client: reqwest::Client::new(),
                base_url: config.base_url.clone(),
                cache,
            }),
        }
    }

    /// Resolve an endpoint path against the backend base URL.
    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.inner.base_url.join(path)?)
    }

    /// URL of the filtered product listing.
    ///
    /// Each section becomes one query parameter with its ids comma-joined,
    /// followed by `sortBy`.
    fn products_url(&self, filters: &FilterSelection, sort: SortKey) -> Result<Url, ApiError> {
        let mut url = self.endpoint(PRODUCTS_PATH)?;
        {
            let mut query = url.query_pairs_mut();
            for (section, ids) in filters.iter() {
                query.append_pair(section.as_str(), &ids.join(","));
            }
            query.append_pair("sortBy", sort.as_str());
        }
        Ok(url)
    }

    /// Decode a response envelope, turning transport failures into errors.
    async fn read_envelope<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<Envelope<T>, ApiError> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let preview: String = body.chars().take(ERROR_BODY_PREVIEW).collect();
            tracing::error!(
                status = %status,
                body = %preview,
                "Shop backend returned non-success status"
            );
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: preview,
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                error = %e,
                body = %body.chars().take(ERROR_BODY_PREVIEW).collect::<String>(),
                "Failed to parse shop backend response"
            );
            ApiError::Parse(e)
        })
    }

    /// Unwrap a successful envelope's payload.
    fn into_data<T>(envelope: Envelope<T>) -> Result<Option<T>, ApiError> {
        if envelope.success {
            Ok(envelope.data)
        } else {
            Err(ApiError::Rejected(
                envelope
                    .message
                    .unwrap_or_else(|| "request was not successful".to_string()),
            ))
        }
    }

    // =========================================================================
    // Catalog Methods
    // =========================================================================

    /// Get the product list for a filter selection and sort order.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    #[instrument(skip(self))]
    pub async fn get_filtered_products(
        &self,
        filters: &FilterSelection,
        sort: SortKey,
    ) -> Result<Vec<Product>, ApiError> {
        let url = self.products_url(filters, sort)?;
        let cache_key = url.to_string();

        if let Some(CacheValue::Products(products)) = self.inner.cache.get(&cache_key).await {
            debug!("Cache hit for product list");
            return Ok(products);
        }

        let response = self.inner.client.get(url).send().await?;
        let envelope = Self::read_envelope::<Vec<Product>>(response).await?;
        let products = Self::into_data(envelope)?.unwrap_or_default();

        self.inner
            .cache
            .insert(cache_key, CacheValue::Products(products.clone()))
            .await;

        Ok(products)
    }

    /// Get a single product's details.
    ///
    /// Returns `Ok(None)` when the backend does not know the product.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn get_product_details(
        &self,
        product_id: &ProductId,
    ) -> Result<Option<Product>, ApiError> {
        let cache_key = format!("product:{product_id}");

        if let Some(CacheValue::ProductDetails(product)) = self.inner.cache.get(&cache_key).await
        {
            debug!("Cache hit for product details");
            return Ok(Some(*product));
        }

        let path = format!(
            "{PRODUCTS_PATH}/{}",
            urlencoding::encode(product_id.as_str())
        );
        let response = self.inner.client.get(self.endpoint(&path)?).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            debug!("Product not found");
            return Ok(None);
        }

        let envelope = Self::read_envelope::<Product>(response).await?;
        let product = Self::into_data(envelope)?;

        if let Some(product) = &product {
            self.inner
                .cache
                .insert(
                    cache_key,
                    CacheValue::ProductDetails(Box::new(product.clone())),
                )
                .await;
        }

        Ok(product)
    }

    /// Get the hero carousel images, in display order.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    #[instrument(skip(self))]
    pub async fn get_feature_images(&self) -> Result<Vec<FeatureImage>, ApiError> {
        let cache_key = FEATURE_IMAGES_PATH.to_string();

        if let Some(CacheValue::FeatureImages(images)) = self.inner.cache.get(&cache_key).await {
            debug!("Cache hit for feature images");
            return Ok(images);
        }

        let response = self
            .inner
            .client
            .get(self.endpoint(FEATURE_IMAGES_PATH)?)
            .send()
            .await?;
        let envelope = Self::read_envelope::<Vec<FeatureImage>>(response).await?;
        let images = Self::into_data(envelope)?.unwrap_or_default();

        self.inner
            .cache
            .insert(cache_key, CacheValue::FeatureImages(images.clone()))
            .await;

        Ok(images)
    }

    // =========================================================================
    // Cart Methods
    // =========================================================================

    /// Add a quantity of a product to a user's cart.
    ///
    /// Returns the backend's success flag; a `success: false` answer is not an
    /// error here.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    #[instrument(skip(self), fields(user_id = %user_id, product_id = %product_id))]
    pub async fn add_to_cart(
        &self,
        user_id: &UserId,
        product_id: &ProductId,
        quantity: u32,
    ) -> Result<bool, ApiError> {
        let body = AddToCartRequest {
            user_id,
            product_id,
            quantity,
        };

        let response = self
            .inner
            .client
            .post(self.endpoint(CART_ADD_PATH)?)
            .json(&body)
            .send()
            .await?;

        let envelope = Self::read_envelope::<serde_json::Value>(response).await?;
        if !envelope.success {
            debug!(message = ?envelope.message, "Backend declined add to cart");
        }
        Ok(envelope.success)
    }

    /// Get a user's cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn get_cart(&self, user_id: &UserId) -> Result<Cart, ApiError> {
        let path = format!("{CART_GET_PATH}/{}", urlencoding::encode(user_id.as_str()));
        let response = self.inner.client.get(self.endpoint(&path)?).send().await?;
        let envelope = Self::read_envelope::<Cart>(response).await?;
        Ok(Self::into_data(envelope)?.unwrap_or_default())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pocketshop_core::Section;

    use super::*;

    fn client() -> ShopClient {
        ShopClient::new(&ShopApiConfig::new("http://localhost:5000").unwrap())
    }

    #[test]
    fn test_products_url_without_filters() {
        let url = client()
            .products_url(&FilterSelection::new(), SortKey::PriceLowToHigh)
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:5000/api/shop/products/get?sortBy=price-lowtohigh"
        );
    }

    #[test]
    fn test_products_url_encodes_filter_values() {
        let url = client()
            .products_url(
                &FilterSelection::single(Section::Brand, "h&m"),
                SortKey::TitleAToZ,
            )
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:5000/api/shop/products/get?brand=h%26m&sortBy=title-atoz"
        );
    }

    #[test]
    fn test_into_data_rejects_unsuccessful() {
        let envelope = Envelope::<Vec<Product>> {
            success: false,
            data: None,
            message: Some("Some error occured".to_string()),
        };
        let err = ShopClient::into_data(envelope).unwrap_err();
        assert!(matches!(err, ApiError::Rejected(msg) if msg == "Some error occured"));
    }
}
