//! Filter selection handed from the home page to the listing page.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::Section;

/// Mapping of section to the selected identifiers.
///
/// Serialises as a plain JSON object, e.g. `{"category":["phones"]}`.
/// The home page only ever writes a single key with a single id; the
/// listing page may hold several.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterSelection(BTreeMap<Section, Vec<String>>);

impl FilterSelection {
    /// An empty selection (no filtering).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A selection of exactly one id under one section.
    #[must_use]
    pub fn single(section: Section, id: impl Into<String>) -> Self {
        let mut map = BTreeMap::new();
        map.insert(section, vec![id.into()]);
        Self(map)
    }

    /// Selected ids for a section, if any.
    #[must_use]
    pub fn get(&self, section: Section) -> Option<&[String]> {
        self.0.get(&section).map(Vec::as_slice)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.values().all(Vec::is_empty)
    }

    /// Iterate non-empty sections in a stable order.
    pub fn iter(&self) -> impl Iterator<Item = (Section, &[String])> {
        self.0
            .iter()
            .filter(|(_, ids)| !ids.is_empty())
            .map(|(section, ids)| (*section, ids.as_slice()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_single_serialises_as_one_key_one_element() {
        let selection = FilterSelection::single(Section::Category, "phones");
        assert_eq!(
            serde_json::to_string(&selection).unwrap(),
            r#"{"category":["phones"]}"#
        );
    }

    #[test]
    fn test_deserialise_listing_shape() {
        let selection: FilterSelection =
            serde_json::from_str(r#"{"brand":["apple","zara"]}"#).unwrap();
        assert_eq!(
            selection.get(Section::Brand).unwrap(),
            ["apple".to_string(), "zara".to_string()]
        );
        assert!(selection.get(Section::Category).is_none());
    }

    #[test]
    fn test_empty_lists_count_as_empty() {
        let selection: FilterSelection = serde_json::from_str(r#"{"brand":[]}"#).unwrap();
        assert!(selection.is_empty());
        assert_eq!(selection.iter().count(), 0);
        assert!(FilterSelection::new().is_empty());
    }
}
