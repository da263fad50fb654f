//! Visitor session as the auth store and filter storage.

use async_trait::async_trait;
use pocketshop_core::FilterSelection;
use tower_sessions::Session;

use crate::models::{SessionUser, session_keys};
use crate::services::{AuthStore, FilterStorage, StorageError};

/// Request-scoped view of the visitor's session.
#[derive(Debug, Clone)]
pub struct VisitorSession(pub Session);

#[async_trait]
impl AuthStore for VisitorSession {
    async fn current_user(&self) -> Option<SessionUser> {
        match self.0.get::<SessionUser>(session_keys::CURRENT_USER).await {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!("Failed to read current user from session: {e}");
                None
            }
        }
    }
}

#[async_trait]
impl FilterStorage for VisitorSession {
    async fn remove_filters(&self) -> Result<(), StorageError> {
        self.0
            .remove::<FilterSelection>(session_keys::FILTERS)
            .await?;
        Ok(())
    }

    async fn store_filters(&self, selection: &FilterSelection) -> Result<(), StorageError> {
        self.0.insert(session_keys::FILTERS, selection).await?;
        Ok(())
    }

    async fn load_filters(&self) -> Result<Option<FilterSelection>, StorageError> {
        Ok(self.0.get(session_keys::FILTERS).await?)
    }
}
