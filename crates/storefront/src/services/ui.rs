//! Navigation and notification surfaces.

/// Pages the home view can transition to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Product listing; reads the stored filter selection.
    Listing,
}

impl Route {
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Listing => "/shop/listing",
        }
    }
}

/// A transient notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
}

impl Toast {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    /// Shown after a product lands in the cart.
    #[must_use]
    pub fn added_to_cart() -> Self {
        Self::new("Product is added to cart")
    }
}

/// Performs page transitions.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// Shows transient notifications.
pub trait Notifier: Send + Sync {
    fn notify(&self, toast: Toast);
}
