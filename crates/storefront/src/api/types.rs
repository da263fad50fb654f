//! Wire types for the shop backend.
//!
//! Field names follow the backend's camelCase JSON; document ids arrive as
//! `_id`. Optional or missing fields fall back to defaults so a sparse record
//! still renders.

use pocketshop_core::{CartId, FeatureImageId, Price, ProductId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: ProductId,
    #[serde(default)]
    pub image: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub brand: String,
    pub price: Decimal,
    /// Zero when the product is not on sale.
    #[serde(default)]
    pub sale_price: Decimal,
    #[serde(default)]
    pub total_stock: u32,
    #[serde(default)]
    pub average_review: Decimal,
}

impl Product {
    /// Regular price.
    #[must_use]
    pub const fn list_price(&self) -> Price {
        Price::usd(self.price)
    }

    /// Sale price, when the product is on sale.
    #[must_use]
    pub fn sale(&self) -> Option<Price> {
        let sale = Price::usd(self.sale_price);
        sale.is_positive().then_some(sale)
    }

    #[must_use]
    pub const fn in_stock(&self) -> bool {
        self.total_stock > 0
    }
}

/// A promotional image in the hero carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureImage {
    #[serde(rename = "_id")]
    pub id: FeatureImageId,
    pub image: String,
}

/// A user's cart as returned by the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    #[serde(rename = "_id", default)]
    pub id: Option<CartId>,
    #[serde(default)]
    pub user_id: Option<UserId>,
    #[serde(default)]
    pub items: Vec<CartItem>,
}

impl Cart {
    /// Total number of units across all lines, saturating at `u32::MAX`.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |count, item| count.saturating_add(item.quantity))
    }
}

/// A single line in a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: ProductId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub sale_price: Option<Decimal>,
    pub quantity: u32,
}

/// Body of `POST api/shop/cart/add`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest<'a> {
    pub user_id: &'a UserId,
    pub product_id: &'a ProductId,
    pub quantity: u32,
}

/// Response envelope shared by every endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_product_deserialize_backend_shape() {
        let json = r#"{
            "_id": "665f1c",
            "image": "https://res.cloudinary.com/demo/iphone.png",
            "title": "iPhone 15",
            "description": "Latest model",
            "category": "phones",
            "brand": "apple",
            "price": 999,
            "salePrice": 899.5,
            "totalStock": 12,
            "averageReview": 4.5,
            "createdAt": "2024-06-01T00:00:00.000Z"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id.as_str(), "665f1c");
        assert_eq!(product.list_price().display(), "$999.00");
        assert_eq!(product.sale().unwrap().display(), "$899.50");
        assert!(product.in_stock());
    }

    #[test]
    fn test_product_without_sale() {
        let json = r#"{"_id":"1","title":"Case","price":19.99,"salePrice":0}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert!(product.sale().is_none());
        assert!(!product.in_stock());
        assert!(product.image.is_none());
    }

    #[test]
    fn test_cart_item_count() {
        let json = r#"{
            "_id": "c1",
            "userId": "u1",
            "items": [
                {"productId": "p1", "quantity": 2},
                {"productId": "p2", "title": "Case", "quantity": 1}
            ]
        }"#;
        let cart: Cart = serde_json::from_str(json).unwrap();
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_cart_item_count_saturates() {
        let json = format!(
            r#"{{"items": [
                {{"productId": "p1", "quantity": {}}},
                {{"productId": "p2", "quantity": 1}}
            ]}}"#,
            u32::MAX
        );
        let cart: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(cart.item_count(), u32::MAX);
    }

    #[test]
    fn test_add_to_cart_request_body() {
        let user_id = UserId::new("u1");
        let product_id = ProductId::new("p1");
        let body = AddToCartRequest {
            user_id: &user_id,
            product_id: &product_id,
            quantity: 1,
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"userId":"u1","productId":"p1","quantity":1}"#
        );
    }

    #[test]
    fn test_envelope_failure_message() {
        let envelope: Envelope<Product> =
            serde_json::from_str(r#"{"success":false,"message":"Product not found!"}"#).unwrap();
        assert!(!envelope.success);
        assert!(envelope.data.is_none());
        assert_eq!(envelope.message.as_deref(), Some("Product not found!"));
    }
}
