//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                            - Home page
//! GET  /health                      - Health check
//! GET  /health/ready                - Readiness check (database)
//!
//! # Home page (HTMX fragments under /shop)
//! GET  /shop/home                   - Home page
//! GET  /shop/carousel               - Carousel fragment (?slide=&go=next|prev|select&to=)
//! POST /shop/browse/{section}/{id}  - Store listing filter, redirect to /shop/listing
//! POST /shop/cart/add               - Guarded add to cart (badge or login prompt)
//! GET  /shop/products/{id}/details  - Product details dialog fragment
//! GET  /shop/dialog/close           - Dismiss dialog (empty fragment)
//! ```

pub mod cart;
pub mod home;
pub mod navigation;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the `/shop` routes router.
pub fn shop_routes() -> Router<AppState> {
    Router::new()
        .route("/home", get(home::home))
        .route("/carousel", get(home::carousel))
        .route("/browse/{section}/{id}", post(navigation::browse))
        .route("/cart/add", post(cart::add))
        .route("/products/{id}/details", get(products::details))
        .route("/dialog/close", get(products::close_dialog))
}

/// Create the page routes router (health checks are added by the binary).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .nest("/shop", shop_routes())
}
