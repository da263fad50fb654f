//! Product list ordering understood by the catalog service.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a sort key string is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort key: {0}")]
pub struct SortKeyParseError(pub String);

/// Sort order for product listings.
///
/// The wire values (`price-lowtohigh`, ...) are what the catalog expects in
/// its `sortBy` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortKey {
    #[default]
    #[serde(rename = "price-lowtohigh")]
    PriceLowToHigh,
    #[serde(rename = "price-hightolow")]
    PriceHighToLow,
    #[serde(rename = "title-atoz")]
    TitleAToZ,
    #[serde(rename = "title-ztoa")]
    TitleZToA,
}

impl SortKey {
    /// Wire value for the `sortBy` parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PriceLowToHigh => "price-lowtohigh",
            Self::PriceHighToLow => "price-hightolow",
            Self::TitleAToZ => "title-atoz",
            Self::TitleZToA => "title-ztoa",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = SortKeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "price-lowtohigh" => Ok(Self::PriceLowToHigh),
            "price-hightolow" => Ok(Self::PriceHighToLow),
            "title-atoz" => Ok(Self::TitleAToZ),
            "title-ztoa" => Ok(Self::TitleZToA),
            other => Err(SortKeyParseError(other.to_string())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_price_ascending() {
        assert_eq!(SortKey::default(), SortKey::PriceLowToHigh);
        assert_eq!(SortKey::default().as_str(), "price-lowtohigh");
    }

    #[test]
    fn test_parse_matches_display() {
        for key in [
            SortKey::PriceLowToHigh,
            SortKey::PriceHighToLow,
            SortKey::TitleAToZ,
            SortKey::TitleZToA,
        ] {
            assert_eq!(key.to_string().parse::<SortKey>().unwrap(), key);
        }
    }

    #[test]
    fn test_parse_unknown() {
        let err = "newest".parse::<SortKey>().unwrap_err();
        assert_eq!(err.to_string(), "unknown sort key: newest");
    }
}
