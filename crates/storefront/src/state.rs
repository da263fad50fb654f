//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::api::ShopClient;
use crate::config::StorefrontConfig;
use crate::services::{CartService, CatalogService};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like database connections and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    pool: PgPool,
    catalog: Arc<dyn CatalogService>,
    cart: Arc<dyn CartService>,
}

impl AppState {
    /// Create a new application state backed by the shop API.
    ///
    /// # Arguments
    ///
    /// * `config` - Storefront configuration
    /// * `pool` - `PostgreSQL` connection pool
    #[must_use]
    pub fn new(config: StorefrontConfig, pool: PgPool) -> Self {
        let client = ShopClient::new(&config.shop_api);
        Self::with_services(config, pool, Arc::new(client.clone()), Arc::new(client))
    }

    /// Create application state with explicit catalog and cart services.
    #[must_use]
    pub fn with_services(
        config: StorefrontConfig,
        pool: PgPool,
        catalog: Arc<dyn CatalogService>,
        cart: Arc<dyn CartService>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                catalog,
                cart,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Product catalog reads.
    #[must_use]
    pub fn catalog(&self) -> &dyn CatalogService {
        self.inner.catalog.as_ref()
    }

    /// Cart mutations.
    #[must_use]
    pub fn cart(&self) -> &dyn CartService {
        self.inner.cart.as_ref()
    }
}
