//! Product details dialog handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Response},
};
use pocketshop_core::{DialogEvent, DialogState, ProductId};
use tracing::instrument;

use crate::api::Product;
use crate::home::handlers::request_product_details;
use crate::state::AppState;

/// Product data for the details dialog.
#[derive(Clone)]
pub struct ProductDetailsView {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub category: String,
    pub brand: String,
    pub price: String,
    pub sale_price: Option<String>,
    pub in_stock: bool,
    pub total_stock: u32,
    pub rating: String,
}

impl From<&Product> for ProductDetailsView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            title: product.title.clone(),
            description: product.description.clone(),
            image: product.image.clone(),
            category: product.category.clone(),
            brand: product.brand.clone(),
            price: product.list_price().display(),
            sale_price: product.sale().map(|p| p.display()),
            in_stock: product.in_stock(),
            total_stock: product.total_stock,
            rating: format!("{:.1}", product.average_review.round_dp(1)),
        }
    }
}

/// Details dialog fragment (HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/product_details.html")]
pub struct ProductDetailsTemplate {
    pub product: ProductDetailsView,
    pub dialog: DialogState,
}

/// Fetch a product and open the details dialog.
///
/// An unknown product (or a failed fetch) renders nothing, leaving the dialog
/// closed.
#[instrument(skip(state))]
pub async fn details(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let product_id = ProductId::from(id);

    match request_product_details(state.catalog(), &product_id).await {
        Some(product) => ProductDetailsTemplate {
            product: ProductDetailsView::from(&product),
            dialog: DialogState::Closed.on(DialogEvent::DetailsReceived),
        }
        .into_response(),
        None => Html("").into_response(),
    }
}

/// Dismiss whichever dialog is open by swapping in nothing.
pub async fn close_dialog() -> Html<&'static str> {
    Html("")
}
