//! Stateful home page view model.

use std::sync::Arc;

use pocketshop_core::{Carousel, DialogEvent, DialogState, ProductId, Section};
use tokio::sync::watch;

use crate::api::{Cart, FeatureImage, Product};
use crate::config::HomeSettings;
use crate::services::{
    AuthStore, CartService, CatalogService, FilterStorage, Navigator, Notifier, Route,
    StorageError,
};

use super::handlers::{self, AddToCartOutcome};
use super::timer::{CarouselTimer, SlideState};

/// Collaborators injected into a [`HomeView`].
#[derive(Clone)]
pub struct HomeDeps {
    pub catalog: Arc<dyn CatalogService>,
    pub cart: Arc<dyn CartService>,
    pub auth: Arc<dyn AuthStore>,
    pub filters: Arc<dyn FilterStorage>,
    pub navigator: Arc<dyn Navigator>,
    pub notifier: Arc<dyn Notifier>,
}

/// The home page while it is mounted.
///
/// Owns the carousel auto-advance timer; dropping the view (or calling
/// [`unmount`](Self::unmount)) stops it.
pub struct HomeView {
    deps: HomeDeps,
    settings: HomeSettings,
    products: Vec<Product>,
    feature_images: Vec<FeatureImage>,
    slides: SlideState,
    timer: CarouselTimer,
    product_details: Option<Product>,
    details_dialog: DialogState,
    login_prompt: DialogState,
    cart: Option<Cart>,
}

impl HomeView {
    /// Load the page data and start the carousel timer.
    pub async fn mount(deps: HomeDeps, settings: HomeSettings) -> Self {
        let data = handlers::load_home_data(deps.catalog.as_ref(), settings.featured_sort).await;

        let (slides, _) = watch::channel(Carousel::new(data.feature_images.len()));
        let slides = Arc::new(slides);
        let timer = CarouselTimer::start(Arc::clone(&slides), settings.carousel_interval);

        tracing::debug!(
            products = data.products.len(),
            slides = data.feature_images.len(),
            "Home view mounted"
        );

        Self {
            deps,
            settings,
            products: data.products,
            feature_images: data.feature_images,
            slides,
            timer,
            product_details: None,
            details_dialog: DialogState::Closed,
            login_prompt: DialogState::Closed,
            cart: None,
        }
    }

    // -------------------------------------------------------------------------
    // Carousel
    // -------------------------------------------------------------------------

    /// Snapshot of the slide position.
    #[must_use]
    pub fn carousel(&self) -> Carousel {
        *self.slides.borrow()
    }

    /// Watch slide changes from both the timer and manual navigation.
    #[must_use]
    pub fn subscribe_slides(&self) -> watch::Receiver<Carousel> {
        self.slides.subscribe()
    }

    #[must_use]
    pub fn feature_images(&self) -> &[FeatureImage] {
        &self.feature_images
    }

    /// Image at the current slide, if there are any.
    #[must_use]
    pub fn current_image(&self) -> Option<&FeatureImage> {
        self.feature_images.get(self.carousel().current())
    }

    pub fn next_slide(&self) {
        self.slides.send_modify(Carousel::advance);
    }

    pub fn previous_slide(&self) {
        self.slides.send_modify(Carousel::retreat);
    }

    /// Jump to a slide. Out-of-range indices are ignored.
    pub fn select_slide(&self, index: usize) -> bool {
        self.slides.send_if_modified(|carousel| carousel.select(index))
    }

    /// Replace the hero images. The timer restarts so the new set gets a full
    /// period before its first advance.
    pub fn set_feature_images(&mut self, images: Vec<FeatureImage>) {
        let len = images.len();
        self.feature_images = images;
        self.slides.send_modify(|carousel| carousel.resize(len));
        self.timer
            .restart(Arc::clone(&self.slides), self.settings.carousel_interval);
    }

    /// Re-fetch the hero images. On failure the current set is kept.
    pub async fn refresh_feature_images(&mut self) {
        match self.deps.catalog.fetch_feature_images().await {
            Ok(images) => self.set_feature_images(images),
            Err(e) => tracing::warn!("Failed to refresh feature images: {e}"),
        }
    }

    #[must_use]
    pub fn is_timer_running(&self) -> bool {
        self.timer.is_running()
    }

    // -------------------------------------------------------------------------
    // Navigation
    // -------------------------------------------------------------------------

    /// Open the listing filtered to one category or brand.
    ///
    /// # Errors
    ///
    /// Returns an error if the filter selection cannot be stored. No
    /// navigation happens in that case.
    pub async fn open_section_entry(
        &self,
        section: Section,
        entry_id: &str,
    ) -> Result<(), StorageError> {
        let route =
            handlers::select_listing_filter(self.deps.filters.as_ref(), section, entry_id).await?;
        self.deps.navigator.navigate(route);
        Ok(())
    }

    /// The hero "Shop Now" button: go to the listing with whatever filters
    /// are already stored.
    pub fn shop_now(&self) {
        self.deps.navigator.navigate(Route::Listing);
    }

    // -------------------------------------------------------------------------
    // Products
    // -------------------------------------------------------------------------

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Guarded add-to-cart. Opens the login prompt when nobody is signed in.
    pub async fn add_to_cart(&mut self, product_id: &ProductId) -> AddToCartOutcome {
        let outcome = handlers::add_to_cart(
            self.deps.auth.as_ref(),
            self.deps.cart.as_ref(),
            self.deps.notifier.as_ref(),
            product_id,
        )
        .await;

        match &outcome {
            AddToCartOutcome::LoginRequired => {
                self.login_prompt.apply(DialogEvent::LoginRequired);
            }
            AddToCartOutcome::Added { cart: Some(cart) } => {
                self.cart = Some(cart.clone());
            }
            AddToCartOutcome::Added { cart: None } | AddToCartOutcome::NotAdded => {}
        }

        outcome
    }

    /// Fetch a product and open the details dialog once it arrives.
    pub async fn show_product_details(&mut self, product_id: &ProductId) {
        if let Some(product) =
            handlers::request_product_details(self.deps.catalog.as_ref(), product_id).await
        {
            self.product_details = Some(product);
            self.details_dialog.apply(DialogEvent::DetailsReceived);
        }
    }

    pub fn dismiss_details(&mut self) {
        if self.details_dialog.apply(DialogEvent::Dismissed) {
            self.product_details = None;
        }
    }

    pub fn dismiss_login_prompt(&mut self) {
        self.login_prompt.apply(DialogEvent::Dismissed);
    }

    #[must_use]
    pub const fn details_dialog(&self) -> DialogState {
        self.details_dialog
    }

    #[must_use]
    pub const fn login_prompt(&self) -> DialogState {
        self.login_prompt
    }

    #[must_use]
    pub const fn product_details(&self) -> Option<&Product> {
        self.product_details.as_ref()
    }

    /// Cart as last refreshed after an add.
    #[must_use]
    pub const fn cart(&self) -> Option<&Cart> {
        self.cart.as_ref()
    }

    /// Tear the page down, stopping the carousel timer.
    pub fn unmount(mut self) {
        self.timer.cancel();
        tracing::debug!("Home view unmounted");
    }
}
