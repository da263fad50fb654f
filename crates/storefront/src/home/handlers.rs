//! Home page actions shared by the view model and the HTTP routes.
//!
//! Each function takes only the collaborators it needs, so the same logic
//! runs behind a [`HomeView`](super::HomeView) and behind an HTMX endpoint.

use pocketshop_core::{FilterSelection, ProductId, Section, SortKey};
use tracing::instrument;

use crate::api::{Cart, FeatureImage, Product};
use crate::error::{UserAction, add_breadcrumb};
use crate::services::{
    AuthStore, CartService, CatalogService, FilterStorage, Notifier, Route, StorageError, Toast,
};

/// Units added per click on "Add to cart".
pub const ADD_TO_CART_QUANTITY: u32 = 1;

/// Everything the home page fetches on mount.
#[derive(Debug, Clone, Default)]
pub struct HomeData {
    pub products: Vec<Product>,
    pub feature_images: Vec<FeatureImage>,
}

/// Fetch the featured products (no filters) and hero images concurrently.
///
/// A failed fetch is logged and leaves its list empty; the page still renders.
#[instrument(skip(catalog))]
pub async fn load_home_data(catalog: &dyn CatalogService, sort: SortKey) -> HomeData {
    let no_filters = FilterSelection::new();
    let (products, feature_images) = tokio::join!(
        catalog.fetch_filtered_products(&no_filters, sort),
        catalog.fetch_feature_images(),
    );

    let products = products.unwrap_or_else(|e| {
        tracing::error!("Failed to fetch featured products: {e}");
        Vec::new()
    });
    let feature_images = feature_images.unwrap_or_else(|e| {
        tracing::error!("Failed to fetch feature images: {e}");
        Vec::new()
    });

    HomeData {
        products,
        feature_images,
    }
}

/// Replace the stored filters with `{section: [entry_id]}` and return the
/// listing route.
///
/// The old selection is removed before the new one is written, so the
/// listing page never sees a merge of the two.
///
/// # Errors
///
/// Returns an error if the session store fails.
#[instrument(skip(storage))]
pub async fn select_listing_filter(
    storage: &dyn FilterStorage,
    section: Section,
    entry_id: &str,
) -> Result<Route, StorageError> {
    storage.remove_filters().await?;
    storage
        .store_filters(&FilterSelection::single(section, entry_id))
        .await?;

    add_breadcrumb(UserAction::SelectFilter {
        section,
        id: entry_id,
    });

    Ok(Route::Listing)
}

/// Result of an add-to-cart attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddToCartOutcome {
    /// Nobody is signed in; the login prompt should open.
    LoginRequired,
    /// The item was added. `cart` is the refreshed cart, if it could be read.
    Added { cart: Option<Cart> },
    /// The backend refused or failed. Nothing is shown to the visitor.
    NotAdded,
}

/// Add one unit of a product to the signed-in visitor's cart.
///
/// Without a user, no cart call is made. On success the cart is re-fetched
/// and exactly one "added" toast is raised.
#[instrument(skip(auth, cart, notifier), fields(product_id = %product_id))]
pub async fn add_to_cart(
    auth: &dyn AuthStore,
    cart: &dyn CartService,
    notifier: &dyn Notifier,
    product_id: &ProductId,
) -> AddToCartOutcome {
    let Some(user) = auth.current_user().await else {
        tracing::debug!("Add to cart without a user, prompting for login");
        return AddToCartOutcome::LoginRequired;
    };

    match cart
        .add_item(&user.id, product_id, ADD_TO_CART_QUANTITY)
        .await
    {
        Ok(true) => {}
        Ok(false) => {
            tracing::warn!(user_id = %user.id, "Backend declined add to cart");
            return AddToCartOutcome::NotAdded;
        }
        Err(e) => {
            tracing::warn!(user_id = %user.id, "Add to cart failed: {e}");
            return AddToCartOutcome::NotAdded;
        }
    }

    add_breadcrumb(UserAction::AddToCart { product_id });

    let refreshed = match cart.fetch_cart(&user.id).await {
        Ok(cart) => Some(cart),
        Err(e) => {
            tracing::warn!(user_id = %user.id, "Failed to refresh cart after add: {e}");
            None
        }
    };

    notifier.notify(Toast::added_to_cart());

    AddToCartOutcome::Added { cart: refreshed }
}

/// Fetch a product for the details dialog.
///
/// `None` covers both a missing product and a failed request; in either case
/// the dialog stays closed.
#[instrument(skip(catalog), fields(product_id = %product_id))]
pub async fn request_product_details(
    catalog: &dyn CatalogService,
    product_id: &ProductId,
) -> Option<Product> {
    match catalog.fetch_product_details(product_id).await {
        Ok(product) => product,
        Err(e) => {
            tracing::warn!("Failed to fetch product details: {e}");
            None
        }
    }
}
