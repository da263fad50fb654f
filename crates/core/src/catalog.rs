//! Static navigation entries for the "Shop by Category" and "Shop by Brand" grids.
//!
//! These are hard-coded: they are never persisted or mutated at runtime.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which grid an entry belongs to, doubling as the filter key the listing
/// page reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Category,
    Brand,
}

/// Error returned when a section tag is neither `category` nor `brand`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown section: {0}")]
pub struct SectionParseError(pub String);

impl Section {
    /// Filter key used in storage and in catalog queries.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Brand => "brand",
        }
    }

    /// The static entries shown for this section.
    #[must_use]
    pub const fn entries(self) -> &'static [NavEntry] {
        match self {
            Self::Category => CATEGORIES,
            Self::Brand => BRANDS,
        }
    }

    /// Look up an entry of this section by id.
    #[must_use]
    pub fn find(self, id: &str) -> Option<&'static NavEntry> {
        self.entries().iter().find(|entry| entry.id == id)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = SectionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "category" => Ok(Self::Category),
            "brand" => Ok(Self::Brand),
            other => Err(SectionParseError(other.to_string())),
        }
    }
}

/// Icon shown on a navigation tile. Names follow the lucide icon set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Smartphone,
    Laptop,
    TabletSmartphone,
    Watch,
    PcCase,
    Apple,
    WashingMachine,
    ShoppingBasket,
    Airplay,
    Images,
    Heater,
    Star,
    TrendingUp,
}

impl Icon {
    /// Icon name as understood by the front-end icon sprite.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Smartphone => "smartphone",
            Self::Laptop => "laptop",
            Self::TabletSmartphone => "tablet-smartphone",
            Self::Watch => "watch",
            Self::PcCase => "pc-case",
            Self::Apple => "apple",
            Self::WashingMachine => "washing-machine",
            Self::ShoppingBasket => "shopping-basket",
            Self::Airplay => "airplay",
            Self::Images => "images",
            Self::Heater => "heater",
            Self::Star => "star",
            Self::TrendingUp => "trending-up",
        }
    }
}

/// A clickable category or brand tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    /// Identifier written into the filter selection.
    pub id: &'static str,
    /// Human readable label.
    pub label: &'static str,
    pub icon: Icon,
}

impl NavEntry {
    const fn new(id: &'static str, label: &'static str, icon: Icon) -> Self {
        Self { id, label, icon }
    }
}

/// Category tiles, in display order.
pub const CATEGORIES: &[NavEntry] = &[
    NavEntry::new("phones", "Phones", Icon::Smartphone),
    NavEntry::new("mac", "Laptops/Mac", Icon::Laptop),
    NavEntry::new("Ipads", "Ipads/Tablets", Icon::TabletSmartphone),
    NavEntry::new("accessories", "Accessories", Icon::Watch),
    NavEntry::new("Cases", "Cases", Icon::PcCase),
];

/// Brand tiles, in display order.
pub const BRANDS: &[NavEntry] = &[
    NavEntry::new("apple", "Apple", Icon::Apple),
    NavEntry::new("samsung", "Samsung", Icon::WashingMachine),
    NavEntry::new("google", "Google", Icon::ShoppingBasket),
    NavEntry::new("levi", "others", Icon::Airplay),
    NavEntry::new("zara", "Zara", Icon::Images),
    NavEntry::new("h&m", "H&M", Icon::Heater),
];

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_section_parse() {
        assert_eq!("category".parse::<Section>().unwrap(), Section::Category);
        assert_eq!("brand".parse::<Section>().unwrap(), Section::Brand);
        assert!("Category".parse::<Section>().is_err());
    }

    #[test]
    fn test_find_is_case_sensitive() {
        // Ids are passed verbatim to the catalog, which matches them exactly.
        assert!(Section::Category.find("Ipads").is_some());
        assert!(Section::Category.find("ipads").is_none());
    }

    #[test]
    fn test_find_brand_with_ampersand() {
        let entry = Section::Brand.find("h&m").unwrap();
        assert_eq!(entry.label, "H&M");
        assert_eq!(entry.icon.name(), "heater");
    }

    #[test]
    fn test_entry_ids_unique_per_section() {
        for section in [Section::Category, Section::Brand] {
            let mut ids: Vec<_> = section.entries().iter().map(|e| e.id).collect();
            let before = ids.len();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), before, "duplicate id in {section}");
        }
    }

    #[test]
    fn test_section_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&Section::Brand).unwrap(),
            "\"brand\""
        );
    }
}
