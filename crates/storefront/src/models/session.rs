//! Session-related types.
//!
//! Types stored in the visitor's session. The session doubles as transient
//! client storage: values live until the session expires or is overwritten.

use serde::{Deserialize, Serialize};

use pocketshop_core::UserId;

/// Session-stored user identity.
///
/// Written by the auth layer at sign-in; the storefront only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    /// Backend user id, used for cart calls.
    pub id: UserId,
    pub user_name: String,
    pub email: String,
    #[serde(default)]
    pub role: Option<String>,
}

/// Session keys.
pub mod keys {
    /// Key for storing the current signed-in user.
    pub const CURRENT_USER: &str = "current_user";

    /// Key for the filter selection handed to the listing page.
    pub const FILTERS: &str = "filters";
}
