//! Collaborators of the home page, expressed as injectable traits.
//!
//! Nothing in the view reaches for ambient state: the catalog, the cart, the
//! auth store, filter storage, navigation and notifications are all handed
//! in. Production implementations live next to each trait; tests supply
//! their own.
//!
//! | Trait | Production implementation |
//! |---|---|
//! | [`CatalogService`] | [`ShopClient`](crate::api::ShopClient) |
//! | [`CartService`] | [`ShopClient`](crate::api::ShopClient) |
//! | [`AuthStore`] | [`VisitorSession`] |
//! | [`FilterStorage`] | [`VisitorSession`] |
//! | [`Navigator`] / [`Notifier`] | supplied by the rendering layer |

pub mod session;
pub mod shop;
pub mod ui;

pub use session::VisitorSession;
pub use shop::{CartService, CatalogService};
pub use ui::{Navigator, Notifier, Route, Toast};

use async_trait::async_trait;
use pocketshop_core::FilterSelection;
use thiserror::Error;

use crate::models::SessionUser;

/// Errors raised by transient client storage.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The session layer failed to load or persist a value.
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),
}

/// Read access to the authenticated visitor, owned by the auth layer.
#[async_trait]
pub trait AuthStore: Send + Sync {
    /// The signed-in user, if any.
    async fn current_user(&self) -> Option<SessionUser>;
}

/// Storage for the filter selection read by the listing page.
#[async_trait]
pub trait FilterStorage: Send + Sync {
    /// Forget any stored selection.
    async fn remove_filters(&self) -> Result<(), StorageError>;

    /// Store a selection, replacing whatever was there.
    async fn store_filters(&self, selection: &FilterSelection) -> Result<(), StorageError>;

    /// Read the stored selection.
    async fn load_filters(&self) -> Result<Option<FilterSelection>, StorageError>;
}
