//! Home page route handlers.
//!
//! The page renders once; after that the carousel, the cart badge and the
//! dialogs are swapped in as HTMX fragments.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use pocketshop_core::{Carousel, NavEntry, Section};
use serde::Deserialize;
use tracing::instrument;

use crate::api::{FeatureImage, Product};
use crate::filters;
use crate::home::content::{
    BRAND_HEADER, CATEGORY_HEADER, FEATURED_HEADER, FEATURES, Feature, HERO_COPY, HeroCopy,
    SectionHeader,
};
use crate::home::handlers::load_home_data;
use crate::middleware::OptionalUser;
use crate::services::Route;
use crate::state::AppState;

// =============================================================================
// Views
// =============================================================================

/// One hero slide.
#[derive(Clone)]
pub struct SlideView {
    pub url: String,
    pub alt: String,
}

impl SlideView {
    fn new(position: usize, image: &FeatureImage) -> Self {
        Self {
            url: image.image.clone(),
            alt: format!("Slide {}", position + 1),
        }
    }
}

/// Hero carousel as rendered: every slide plus the indices the controls
/// point at.
#[derive(Clone)]
pub struct CarouselView {
    pub slides: Vec<SlideView>,
    pub active: usize,
    pub previous: usize,
    pub next: usize,
}

impl CarouselView {
    #[must_use]
    pub fn new(images: &[FeatureImage], carousel: Carousel) -> Self {
        Self {
            slides: images
                .iter()
                .enumerate()
                .map(|(i, image)| SlideView::new(i, image))
                .collect(),
            active: carousel.current(),
            previous: carousel.previous_index(),
            next: carousel.next_index(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}

/// A category or brand tile. `action` is the form target that stores the
/// filter and redirects to the listing.
#[derive(Clone)]
pub struct NavTileView {
    pub label: &'static str,
    pub icon: &'static str,
    pub action: String,
    pub style: String,
}

impl NavTileView {
    fn new(section: Section, entry: &NavEntry, style: String) -> Self {
        Self {
            label: entry.label,
            icon: entry.icon.name(),
            action: browse_path(section, entry.id),
            style,
        }
    }
}

/// Form target for a category or brand tile.
#[must_use]
pub fn browse_path(section: Section, entry_id: &str) -> String {
    format!(
        "/shop/browse/{}/{}",
        section.as_str(),
        urlencoding::encode(entry_id)
    )
}

/// Product display data for the featured grid.
#[derive(Clone)]
pub struct ProductView {
    pub id: String,
    pub details_url: String,
    pub title: String,
    pub image: Option<String>,
    pub category: String,
    pub brand: String,
    pub price: String,
    pub sale_price: Option<String>,
    pub in_stock: bool,
    pub style: String,
}

impl ProductView {
    fn new(product: &Product, style: String) -> Self {
        Self {
            id: product.id.to_string(),
            details_url: details_path(product.id.as_str()),
            title: product.title.clone(),
            image: product.image.clone(),
            category: product.category.clone(),
            brand: product.brand.clone(),
            price: product.list_price().display(),
            sale_price: product.sale().map(|p| p.display()),
            in_stock: product.in_stock(),
            style,
        }
    }
}

/// Fragment URL of a product's details dialog.
#[must_use]
pub fn details_path(product_id: &str) -> String {
    format!("/shop/products/{}/details", urlencoding::encode(product_id))
}

fn item_style(delay_ms: u128) -> String {
    format!("--item-delay-ms: {delay_ms};")
}

// =============================================================================
// Templates
// =============================================================================

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub user_name: Option<String>,
    pub hero: &'static HeroCopy,
    pub hero_style: String,
    pub carousel: CarouselView,
    pub carousel_interval_secs: u64,
    pub shop_now_url: &'static str,
    pub features: &'static [Feature],
    pub section_style: String,
    pub category_header: &'static SectionHeader,
    pub categories: Vec<NavTileView>,
    pub brand_header: &'static SectionHeader,
    pub brands: Vec<NavTileView>,
    pub featured_header: &'static SectionHeader,
    pub products: Vec<ProductView>,
}

/// Carousel fragment (HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/carousel.html")]
pub struct CarouselTemplate {
    pub carousel: CarouselView,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the home page.
#[instrument(skip(state, user))]
pub async fn home(State(state): State<AppState>, OptionalUser(user): OptionalUser) -> HomeTemplate {
    let settings = state.config().home;
    let animation = settings.animation;
    let data = load_home_data(state.catalog(), settings.featured_sort).await;

    let tiles = |section: Section| -> Vec<NavTileView> {
        section
            .entries()
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                NavTileView::new(section, entry, item_style(animation.item_delay(i).as_millis()))
            })
            .collect()
    };

    let products = data
        .products
        .iter()
        .enumerate()
        .map(|(i, product)| {
            ProductView::new(product, item_style(animation.item_delay(i).as_millis()))
        })
        .collect();

    HomeTemplate {
        user_name: user.map(|u| u.user_name),
        hero: &HERO_COPY,
        hero_style: animation.hero_style(),
        carousel: CarouselView::new(
            &data.feature_images,
            Carousel::new(data.feature_images.len()),
        ),
        carousel_interval_secs: settings.carousel_interval.as_secs(),
        shop_now_url: Route::Listing.path(),
        features: FEATURES,
        section_style: animation.section_style(),
        category_header: &CATEGORY_HEADER,
        categories: tiles(Section::Category),
        brand_header: &BRAND_HEADER,
        brands: tiles(Section::Brand),
        featured_header: &FEATURED_HEADER,
        products,
    }
}

/// Which way a carousel request moves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    #[default]
    Stay,
    Next,
    Prev,
    Select,
}

/// Carousel fragment query. `slide` is the index the client is showing.
#[derive(Debug, Deserialize)]
pub struct CarouselQuery {
    #[serde(default)]
    pub slide: usize,
    #[serde(default)]
    pub go: Step,
    pub to: Option<usize>,
}

/// Apply a carousel request to the client's current position.
#[must_use]
pub fn step_carousel(len: usize, query: &CarouselQuery) -> Carousel {
    let mut carousel = Carousel::at(len, query.slide);
    match (query.go, query.to) {
        (Step::Next, _) => carousel.advance(),
        (Step::Prev, _) => carousel.retreat(),
        (Step::Select, Some(index)) => {
            carousel.select(index);
        }
        (Step::Select, None) | (Step::Stay, _) => {}
    }
    carousel
}

/// Render the carousel after a step.
///
/// Serves both the periodic auto-advance poll and the manual controls.
#[instrument(skip(state))]
pub async fn carousel(
    State(state): State<AppState>,
    Query(query): Query<CarouselQuery>,
) -> impl IntoResponse {
    let images = state.catalog().fetch_feature_images().await.unwrap_or_else(|e| {
        tracing::error!("Failed to fetch feature images: {e}");
        Vec::new()
    });

    let carousel = step_carousel(images.len(), &query);

    CarouselTemplate {
        carousel: CarouselView::new(&images, carousel),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(slide: usize, go: Step, to: Option<usize>) -> CarouselQuery {
        CarouselQuery { slide, go, to }
    }

    #[test]
    fn test_step_carousel_wraps() {
        assert_eq!(step_carousel(3, &query(2, Step::Next, None)).current(), 0);
        assert_eq!(step_carousel(3, &query(0, Step::Prev, None)).current(), 2);
    }

    #[test]
    fn test_step_carousel_select_ignores_out_of_range() {
        assert_eq!(step_carousel(3, &query(1, Step::Select, Some(2))).current(), 2);
        assert_eq!(step_carousel(3, &query(1, Step::Select, Some(7))).current(), 1);
        assert_eq!(step_carousel(3, &query(1, Step::Select, None)).current(), 1);
    }

    #[test]
    fn test_step_carousel_empty() {
        let carousel = step_carousel(0, &query(4, Step::Next, None));
        assert_eq!(carousel.current(), 0);
        assert!(carousel.is_empty());
    }

    #[test]
    fn test_browse_path_encodes_ids() {
        assert_eq!(browse_path(Section::Brand, "h&m"), "/shop/browse/brand/h%26m");
        assert_eq!(
            browse_path(Section::Category, "phones"),
            "/shop/browse/category/phones"
        );
    }
}
