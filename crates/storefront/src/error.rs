//! Request errors and Sentry context for the storefront.
//!
//! Handlers return `Result<T, AppError>`. Backend and session failures are
//! captured to Sentry and answered with a generic message; client mistakes
//! keep theirs.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use pocketshop_core::{ProductId, Section};
use thiserror::Error;

use crate::api::ApiError;
use crate::models::SessionUser;
use crate::services::StorageError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Shop backend operation failed.
    #[error("Shop API error: {0}")]
    Api(#[from] ApiError),

    /// Session storage failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if matches!(self, Self::Storage(_) | Self::Api(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Api(_) => StatusCode::BAD_GATEWAY,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Storage(_) => "Internal server error".to_string(),
            Self::Api(_) => "External service error".to_string(),
            _ => self.to_string(),
        };

        (status, message).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Associate later Sentry events with the signed-in visitor.
pub fn set_sentry_user(user: &SessionUser) {
    sentry::configure_scope(|scope| {
        scope.set_user(Some(sentry::User {
            id: Some(user.id.to_string()),
            username: Some(user.user_name.clone()),
            email: Some(user.email.clone()),
            ..Default::default()
        }));
    });
}

/// Clear the Sentry user context.
pub fn clear_sentry_user() {
    sentry::configure_scope(|scope| {
        scope.set_user(None);
    });
}

/// A home page action worth leaving in the Sentry trail.
#[derive(Debug, Clone, Copy)]
pub enum UserAction<'a> {
    /// A category or brand tile was followed into the listing.
    SelectFilter { section: Section, id: &'a str },
    /// A product went into the cart.
    AddToCart { product_id: &'a ProductId },
}

impl UserAction<'_> {
    const fn category(&self) -> &'static str {
        match self {
            Self::SelectFilter { .. } => "navigation",
            Self::AddToCart { .. } => "cart",
        }
    }

    const fn message(&self) -> &'static str {
        match self {
            Self::SelectFilter { .. } => "Selected listing filter",
            Self::AddToCart { .. } => "Added to cart",
        }
    }

    fn data(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::SelectFilter { section, id } => vec![
                ("section", section.as_str().to_string()),
                ("id", (*id).to_string()),
            ],
            Self::AddToCart { product_id } => vec![("product_id", product_id.to_string())],
        }
    }
}

/// Record a breadcrumb for a user action.
///
/// Breadcrumbs appear in Sentry error reports to show the trail of user actions
/// leading up to an error.
pub fn add_breadcrumb(action: UserAction<'_>) {
    let mut breadcrumb = sentry::Breadcrumb {
        category: Some(action.category().to_string()),
        message: Some(action.message().to_string()),
        level: sentry::Level::Info,
        ..Default::default()
    };

    for (key, value) in action.data() {
        breadcrumb
            .data
            .insert(key.to_string(), serde_json::Value::String(value));
    }

    sentry::add_breadcrumb(breadcrumb);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_client_errors_keep_their_message() {
        let err = AppError::BadRequest("unknown section: color".to_string());
        assert_eq!(err.to_string(), "Bad request: unknown section: color");
        assert_eq!(status_of(err), StatusCode::BAD_REQUEST);

        let err = AppError::NotFound("brand nokia".to_string());
        assert_eq!(status_of(err), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_backend_failures_are_bad_gateway() {
        let err = AppError::Api(ApiError::Rejected("no".to_string()));
        assert_eq!(status_of(err), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_user_action_breadcrumb_data() {
        let action = UserAction::SelectFilter {
            section: Section::Brand,
            id: "h&m",
        };
        assert_eq!(action.category(), "navigation");
        assert_eq!(
            action.data(),
            vec![("section", "brand".to_string()), ("id", "h&m".to_string())]
        );

        let product_id = ProductId::from("p-1");
        let action = UserAction::AddToCart {
            product_id: &product_id,
        };
        assert_eq!(action.category(), "cart");
        assert_eq!(action.data(), vec![("product_id", "p-1".to_string())]);
    }
}
