//! Cart route handlers.
//!
//! Add-to-cart is guarded: anonymous visitors get the login prompt, signed-in
//! visitors get a refreshed cart badge and a toast via `HX-Trigger`.

use std::sync::{Mutex, PoisonError};

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{AppendHeaders, IntoResponse, Response},
};
use pocketshop_core::{DialogEvent, DialogState, ProductId};
use serde::Deserialize;
use serde_json::{Map, Value, json};
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::home::AddToCartOutcome;
use crate::home::handlers;
use crate::services::{Notifier, Toast, VisitorSession};
use crate::state::AppState;

/// Client-side event fired whenever the cart changes.
pub const CART_UPDATED_EVENT: &str = "cart-updated";

/// Client-side event that shows a toast; its detail is `{"title": ...}`.
pub const SHOW_TOAST_EVENT: &str = "showToast";

/// Element the login prompt is swapped into.
pub const MODAL_ROOT: &str = "#modal-root";

/// Cart count badge fragment (HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

/// Login prompt dialog fragment (HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/login_prompt.html")]
pub struct LoginPromptTemplate {
    pub dialog: DialogState,
}

/// Add-to-cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: String,
}

/// Collects toasts raised while handling one request.
#[derive(Debug, Default)]
pub struct HxToasts(Mutex<Vec<Toast>>);

impl HxToasts {
    /// Toasts raised so far, oldest first.
    #[must_use]
    pub fn take(&self) -> Vec<Toast> {
        std::mem::take(&mut *self.0.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl Notifier for HxToasts {
    fn notify(&self, toast: Toast) {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(toast);
    }
}

/// `HX-Trigger` value announcing a cart change and, if one was raised, the
/// latest toast.
#[must_use]
pub fn cart_trigger(toasts: &[Toast]) -> String {
    let mut events = Map::new();
    events.insert(CART_UPDATED_EVENT.to_string(), Value::Null);
    if let Some(toast) = toasts.last() {
        events.insert(
            SHOW_TOAST_EVENT.to_string(),
            json!({ "title": toast.title }),
        );
    }
    Value::Object(events).to_string()
}

/// Add one unit of a product to the cart.
///
/// Responses:
/// - no user: the login prompt, retargeted into the modal root
/// - added: the cart badge, with `cart-updated` and `showToast` triggers
/// - added but the cart could not be re-read: 204 with the triggers only
/// - backend refused: 204, nothing shown
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddToCartForm>,
) -> Result<Response> {
    let product_id = form.product_id.trim();
    if product_id.is_empty() {
        return Err(AppError::BadRequest("product_id is required".to_string()));
    }
    let product_id = ProductId::from(product_id);

    let toasts = HxToasts::default();
    let outcome = handlers::add_to_cart(
        &VisitorSession(session),
        state.cart(),
        &toasts,
        &product_id,
    )
    .await;

    let response = match outcome {
        AddToCartOutcome::LoginRequired => (
            AppendHeaders([("HX-Retarget", MODAL_ROOT), ("HX-Reswap", "innerHTML")]),
            LoginPromptTemplate {
                dialog: DialogState::Closed.on(DialogEvent::LoginRequired),
            },
        )
            .into_response(),
        AddToCartOutcome::Added { cart: Some(cart) } => (
            AppendHeaders([("HX-Trigger", cart_trigger(&toasts.take()))]),
            CartCountTemplate {
                count: cart.item_count(),
            },
        )
            .into_response(),
        AddToCartOutcome::Added { cart: None } => (
            StatusCode::NO_CONTENT,
            AppendHeaders([("HX-Trigger", cart_trigger(&toasts.take()))]),
        )
            .into_response(),
        AddToCartOutcome::NotAdded => StatusCode::NO_CONTENT.into_response(),
    };

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_trigger_with_toast() {
        let trigger = cart_trigger(&[Toast::added_to_cart()]);
        let value: Value = serde_json::from_str(&trigger).unwrap_or_default();
        assert_eq!(value["cart-updated"], Value::Null);
        assert_eq!(value["showToast"]["title"], "Product is added to cart");
    }

    #[test]
    fn test_cart_trigger_without_toast() {
        assert_eq!(cart_trigger(&[]), r#"{"cart-updated":null}"#);
    }

    #[test]
    fn test_hx_toasts_collects_in_order() {
        let toasts = HxToasts::default();
        toasts.notify(Toast::new("one"));
        toasts.notify(Toast::new("two"));
        let taken = toasts.take();
        assert_eq!(taken, vec![Toast::new("one"), Toast::new("two")]);
        assert!(toasts.take().is_empty());
    }
}
