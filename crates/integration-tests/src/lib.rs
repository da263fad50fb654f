//! Integration tests for the Pocketshop storefront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p pocketshop-integration-tests
//! ```
//!
//! No database or shop backend is needed: routes run over an in-memory
//! session store with fake catalog and cart services, and the HTTP client is
//! pointed at a throwaway local server.
//!
//! # Test Categories
//!
//! - `home_view` - View model, carousel timer and shared handlers
//! - `home_routes` - HTTP surface via `tower::ServiceExt::oneshot`
//! - `shop_client` - Backend client against a local axum server
//!
//! This library holds the fakes and fixtures those tests share.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use pocketshop_core::{
    AnimationConfig, CartId, FeatureImageId, FilterSelection, ProductId, SortKey, UserId,
};
use pocketshop_storefront::api::{ApiError, Cart, CartItem, FeatureImage, Product};
use pocketshop_storefront::config::{HomeSettings, ShopApiConfig, StorefrontConfig};
use pocketshop_storefront::home::HomeDeps;
use pocketshop_storefront::models::SessionUser;
use pocketshop_storefront::services::{
    AuthStore, CartService, CatalogService, FilterStorage, Navigator, Notifier, Route,
    StorageError, Toast,
};
use pocketshop_storefront::state::AppState;
use rust_decimal::Decimal;
use secrecy::SecretString;
use sqlx::postgres::PgPoolOptions;

// =============================================================================
// Call log
// =============================================================================

/// One observable interaction with a collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    FetchProducts {
        filters: FilterSelection,
        sort: SortKey,
    },
    FetchDetails(ProductId),
    FetchFeatureImages,
    AddItem {
        user_id: UserId,
        product_id: ProductId,
        quantity: u32,
    },
    FetchCart(UserId),
    RemoveFilters,
    StoreFilters(FilterSelection),
    Navigate(Route),
    Notify(Toast),
}

/// Shared, ordered record of collaborator calls.
#[derive(Debug, Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<Call>>>);

impl CallLog {
    pub fn record(&self, call: Call) {
        self.0.lock().unwrap().push(call);
    }

    #[must_use]
    pub fn calls(&self) -> Vec<Call> {
        self.0.lock().unwrap().clone()
    }

    /// Number of recorded calls matching `pred`.
    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.0.lock().unwrap().iter().filter(|c| pred(c)).count()
    }

    #[must_use]
    pub fn cart_calls(&self) -> usize {
        self.count(|c| matches!(c, Call::AddItem { .. } | Call::FetchCart(_)))
    }
}

// =============================================================================
// Fixtures
// =============================================================================

#[must_use]
pub fn product(id: &str, price: i64) -> Product {
    Product {
        id: ProductId::from(id),
        image: Some(format!("https://images.example.com/{id}.jpg")),
        title: format!("Product {id}"),
        description: format!("Description of {id}"),
        category: "phones".to_string(),
        brand: "apple".to_string(),
        price: Decimal::new(price, 0),
        sale_price: Decimal::ZERO,
        total_stock: 10,
        average_review: Decimal::new(45, 1),
    }
}

#[must_use]
pub fn feature_images(count: usize) -> Vec<FeatureImage> {
    (0..count)
        .map(|i| FeatureImage {
            id: FeatureImageId::from(format!("banner-{i}")),
            image: format!("https://images.example.com/banner-{i}.jpg"),
        })
        .collect()
}

#[must_use]
pub fn user() -> SessionUser {
    SessionUser {
        id: UserId::from("user-1"),
        user_name: "ada".to_string(),
        email: "ada@example.com".to_string(),
        role: Some("user".to_string()),
    }
}

#[must_use]
pub fn cart_with(product_id: &str, quantity: u32) -> Cart {
    Cart {
        id: Some(CartId::from("cart-1")),
        user_id: Some(UserId::from("user-1")),
        items: vec![CartItem {
            product_id: ProductId::from(product_id),
            title: Some(format!("Product {product_id}")),
            image: None,
            price: Some(Decimal::new(100, 0)),
            sale_price: None,
            quantity,
        }],
    }
}

// =============================================================================
// Fakes
// =============================================================================

/// Catalog backed by in-memory data.
#[derive(Debug, Clone, Default)]
pub struct FakeCatalog {
    pub products: Vec<Product>,
    pub feature_images: Vec<FeatureImage>,
    pub fail: bool,
    pub log: CallLog,
}

impl FakeCatalog {
    #[must_use]
    pub fn new(products: Vec<Product>, feature_images: Vec<FeatureImage>, log: CallLog) -> Self {
        Self {
            products,
            feature_images,
            fail: false,
            log,
        }
    }

    #[must_use]
    pub fn failing(log: CallLog) -> Self {
        Self {
            fail: true,
            log,
            ..Self::default()
        }
    }

    fn check(&self) -> Result<(), ApiError> {
        if self.fail {
            Err(ApiError::Rejected("catalog unavailable".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl CatalogService for FakeCatalog {
    async fn fetch_filtered_products(
        &self,
        filters: &FilterSelection,
        sort: SortKey,
    ) -> Result<Vec<Product>, ApiError> {
        self.log.record(Call::FetchProducts {
            filters: filters.clone(),
            sort,
        });
        self.check()?;
        Ok(self.products.clone())
    }

    async fn fetch_product_details(&self, id: &ProductId) -> Result<Option<Product>, ApiError> {
        self.log.record(Call::FetchDetails(id.clone()));
        self.check()?;
        Ok(self.products.iter().find(|p| &p.id == id).cloned())
    }

    async fn fetch_feature_images(&self) -> Result<Vec<FeatureImage>, ApiError> {
        self.log.record(Call::FetchFeatureImages);
        self.check()?;
        Ok(self.feature_images.clone())
    }
}

/// What the fake cart answers to `add_item`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AddResponse {
    #[default]
    Success,
    Declined,
    Error,
}

/// Cart service that records calls and keeps quantities per product.
#[derive(Debug, Clone, Default)]
pub struct FakeCart {
    pub add_response: AddResponse,
    pub log: CallLog,
    quantities: Arc<Mutex<HashMap<ProductId, u32>>>,
}

impl FakeCart {
    #[must_use]
    pub fn new(add_response: AddResponse, log: CallLog) -> Self {
        Self {
            add_response,
            log,
            quantities: Arc::default(),
        }
    }
}

#[async_trait]
impl CartService for FakeCart {
    async fn add_item(
        &self,
        user_id: &UserId,
        product_id: &ProductId,
        quantity: u32,
    ) -> Result<bool, ApiError> {
        self.log.record(Call::AddItem {
            user_id: user_id.clone(),
            product_id: product_id.clone(),
            quantity,
        });
        match self.add_response {
            AddResponse::Success => {
                *self
                    .quantities
                    .lock()
                    .unwrap()
                    .entry(product_id.clone())
                    .or_default() += quantity;
                Ok(true)
            }
            AddResponse::Declined => Ok(false),
            AddResponse::Error => Err(ApiError::Status {
                status: 500,
                body: "boom".to_string(),
            }),
        }
    }

    async fn fetch_cart(&self, user_id: &UserId) -> Result<Cart, ApiError> {
        self.log.record(Call::FetchCart(user_id.clone()));
        let mut items: Vec<CartItem> = self
            .quantities
            .lock()
            .unwrap()
            .iter()
            .map(|(id, quantity)| CartItem {
                product_id: id.clone(),
                title: Some(id.to_string()),
                image: None,
                price: Some(Decimal::new(100, 0)),
                sale_price: None,
                quantity: *quantity,
            })
            .collect();
        items.sort_by(|a, b| a.product_id.as_str().cmp(b.product_id.as_str()));
        Ok(Cart {
            id: Some(CartId::from("cart-1")),
            user_id: Some(user_id.clone()),
            items,
        })
    }
}

/// Auth store with a fixed answer.
#[derive(Debug, Clone, Default)]
pub struct FakeAuth(pub Option<SessionUser>);

#[async_trait]
impl AuthStore for FakeAuth {
    async fn current_user(&self) -> Option<SessionUser> {
        self.0.clone()
    }
}

/// Filter storage held in memory.
#[derive(Debug, Clone, Default)]
pub struct FakeFilters {
    pub stored: Arc<Mutex<Option<FilterSelection>>>,
    pub log: CallLog,
}

impl FakeFilters {
    #[must_use]
    pub fn with(selection: FilterSelection, log: CallLog) -> Self {
        Self {
            stored: Arc::new(Mutex::new(Some(selection))),
            log,
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<FilterSelection> {
        self.stored.lock().unwrap().clone()
    }
}

#[async_trait]
impl FilterStorage for FakeFilters {
    async fn remove_filters(&self) -> Result<(), StorageError> {
        self.log.record(Call::RemoveFilters);
        *self.stored.lock().unwrap() = None;
        Ok(())
    }

    async fn store_filters(&self, selection: &FilterSelection) -> Result<(), StorageError> {
        self.log.record(Call::StoreFilters(selection.clone()));
        *self.stored.lock().unwrap() = Some(selection.clone());
        Ok(())
    }

    async fn load_filters(&self) -> Result<Option<FilterSelection>, StorageError> {
        Ok(self.current())
    }
}

/// Navigator and notifier that only record.
#[derive(Debug, Clone, Default)]
pub struct Recorder(pub CallLog);

impl Navigator for Recorder {
    fn navigate(&self, route: Route) {
        self.0.record(Call::Navigate(route));
    }
}

impl Notifier for Recorder {
    fn notify(&self, toast: Toast) {
        self.0.record(Call::Notify(toast));
    }
}

// =============================================================================
// Wiring
// =============================================================================

/// Everything a `HomeView` test needs, sharing one call log.
pub struct Harness {
    pub log: CallLog,
    pub catalog: FakeCatalog,
    pub cart: FakeCart,
    pub filters: FakeFilters,
    pub auth: FakeAuth,
}

impl Harness {
    #[must_use]
    pub fn new(products: Vec<Product>, images: Vec<FeatureImage>) -> Self {
        let log = CallLog::default();
        Self {
            catalog: FakeCatalog::new(products, images, log.clone()),
            cart: FakeCart::new(AddResponse::Success, log.clone()),
            filters: FakeFilters {
                log: log.clone(),
                ..FakeFilters::default()
            },
            auth: FakeAuth::default(),
            log,
        }
    }

    #[must_use]
    pub fn signed_in(mut self) -> Self {
        self.auth = FakeAuth(Some(user()));
        self
    }

    #[must_use]
    pub fn deps(&self) -> HomeDeps {
        let recorder = Arc::new(Recorder(self.log.clone()));
        HomeDeps {
            catalog: Arc::new(self.catalog.clone()),
            cart: Arc::new(self.cart.clone()),
            auth: Arc::new(self.auth.clone()),
            filters: Arc::new(self.filters.clone()),
            navigator: recorder.clone(),
            notifier: recorder,
        }
    }
}

/// Home settings with a given carousel period.
#[must_use]
pub fn settings(interval: Duration) -> HomeSettings {
    HomeSettings {
        carousel_interval: interval,
        featured_sort: SortKey::PriceLowToHigh,
        animation: AnimationConfig::default(),
    }
}

/// Configuration pointing at nothing reachable.
#[must_use]
pub fn test_config() -> StorefrontConfig {
    StorefrontConfig {
        database_url: SecretString::from("postgres://pocketshop@127.0.0.1:1/pocketshop"),
        host: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port: 0,
        base_url: "http://localhost:3000".to_string(),
        shop_api: ShopApiConfig::new("http://127.0.0.1:1/").unwrap(),
        home: HomeSettings::default(),
        sentry_dsn: None,
        sentry_environment: None,
        sentry_sample_rate: 1.0,
        sentry_traces_sample_rate: 0.0,
    }
}

/// Application state over fake services and a lazily connecting pool.
#[must_use]
pub fn test_state(catalog: FakeCatalog, cart: FakeCart) -> AppState {
    let config = test_config();
    let pool = PgPoolOptions::new()
        .acquire_timeout(Duration::from_millis(500))
        .connect_lazy("postgres://pocketshop@127.0.0.1:1/pocketshop")
        .unwrap();
    AppState::with_services(config, pool, Arc::new(catalog), Arc::new(cart))
}
