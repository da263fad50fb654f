//! Static copy for the home page.

use pocketshop_core::Icon;

/// Text overlaid on every hero slide.
pub struct HeroCopy {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub button_text: &'static str,
}

pub const HERO_COPY: HeroCopy = HeroCopy {
    title: "Discover Amazing Products",
    subtitle: "Shop the latest trends with our curated collection of premium products",
    button_text: "Shop Now",
};

/// A selling point in the features strip under the hero.
pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: Icon::Star,
        title: "Premium Quality",
        description: "Top-tier products from trusted brands",
    },
    Feature {
        icon: Icon::TrendingUp,
        title: "Latest Trends",
        description: "Stay ahead with our curated selection",
    },
];

/// Badge, heading and blurb above a grid section.
pub struct SectionHeader {
    pub badge: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
}

pub const CATEGORY_HEADER: SectionHeader = SectionHeader {
    badge: "Categories",
    title: "Shop by Category",
    blurb: "Browse our curated collection of products",
};

pub const BRAND_HEADER: SectionHeader = SectionHeader {
    badge: "Brands",
    title: "Shop by Brand",
    blurb: "Explore products from your favorite brands",
};

pub const FEATURED_HEADER: SectionHeader = SectionHeader {
    badge: "Featured",
    title: "Featured Products",
    blurb: "Discover our handpicked selection of premium products",
};
