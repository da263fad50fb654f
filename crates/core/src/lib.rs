//! Pocketshop Core - Shared domain types for the storefront.
//!
//! # Architecture
//!
//! The core crate contains only types and pure state machines - no I/O, no
//! HTTP clients, no timers. Anything that talks to the outside world lives in
//! the `storefront` crate and drives these types.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, prices, and sort keys
//! - [`catalog`] - Static category and brand navigation entries
//! - [`filter`] - Filter selection handed to the listing page
//! - [`carousel`] - Slide index arithmetic for the hero carousel
//! - [`dialog`] - Open/closed state machine for modal dialogs
//! - [`animation`] - Timing configuration passed to the rendering layer

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod animation;
pub mod carousel;
pub mod catalog;
pub mod dialog;
pub mod filter;
pub mod types;

pub use animation::{AnimationConfig, Easing};
pub use carousel::Carousel;
pub use catalog::{BRANDS, CATEGORIES, Icon, NavEntry, Section, SectionParseError};
pub use dialog::{DialogEvent, DialogState};
pub use filter::FilterSelection;
pub use types::*;
