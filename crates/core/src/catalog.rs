//! The read-only data a selection session works over.

use log::info;

use crate::boundary::Fetched;
use crate::error::Result;
use crate::item::ItemSet;
use crate::preview::PreviewIndex;

/// Items plus their previews, built once before the session starts.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: ItemSet,
    previews: PreviewIndex,
}

impl Catalog {
    /// # Errors
    ///
    /// Fails when `descriptions` is not exactly as long as `items`.
    pub fn new(items: ItemSet, descriptions: Vec<String>) -> Result<Self> {
        let previews = PreviewIndex::new(&items, descriptions)?;
        Ok(Self { items, previews })
    }

    /// Builds a catalog from whatever an [`ItemSource`](crate::boundary::ItemSource) produced.
    ///
    /// # Errors
    ///
    /// Fails on duplicate keys or on a preview count that differs from the item count.
    pub fn from_fetched(fetched: Fetched) -> Result<Self> {
        let items = ItemSet::from_pairs(fetched.entries)?;
        let catalog = Self::new(items, fetched.previews)?;
        info!("Loaded {} items", catalog.items.len());
        Ok(catalog)
    }

    #[must_use]
    pub fn items(&self) -> &ItemSet {
        &self.items
    }

    #[must_use]
    pub fn previews(&self) -> &PreviewIndex {
        &self.previews
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_from_fetched() {
        let fetched = Fetched {
            entries: vec![
                ("i-1".to_string(), "web-a".to_string()),
                ("i-2".to_string(), "web-b".to_string()),
            ],
            previews: vec!["one".to_string(), "two".to_string()],
        };

        let catalog = Catalog::from_fetched(fetched).unwrap();
        assert_eq!(catalog.items().len(), 2);
        assert_eq!(catalog.previews().lookup("i-2"), Some("two"));
    }

    #[test]
    fn test_from_fetched_mismatch_fails() {
        let fetched = Fetched {
            entries: vec![("i-1".to_string(), "web-a".to_string())],
            previews: vec![],
        };

        assert!(matches!(
            Catalog::from_fetched(fetched),
            Err(Error::MismatchedPreviews { .. })
        ));
    }
}
