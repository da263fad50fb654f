//! Cache types for catalog responses.

use crate::api::types::{FeatureImage, Product};

/// Cached value types.
///
/// Cart responses are never cached: they change with every mutation.
#[derive(Debug, Clone)]
pub enum CacheValue {
    Products(Vec<Product>),
    ProductDetails(Box<Product>),
    FeatureImages(Vec<FeatureImage>),
}
