//! Domain models for storefront.

pub mod session;

pub use session::{SessionUser, keys as session_keys};
