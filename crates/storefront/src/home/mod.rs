//! The storefront home page.
//!
//! - [`handlers`] - Actions shared by the view model and the HTTP routes
//! - [`view`] - [`HomeView`], the page state while mounted
//! - [`timer`] - Carousel auto-advance
//! - [`content`] - Static copy

pub mod content;
pub mod handlers;
pub mod timer;
pub mod view;

pub use handlers::{AddToCartOutcome, HomeData};
pub use timer::{CarouselTimer, SlideState};
pub use view::{HomeDeps, HomeView};
