//! Immutable lookup from item key to preview text.

use indexmap::IndexMap;
use log::debug;

use crate::error::{Error, Result};
use crate::item::ItemSet;

/// Key to description mapping built once, positionally, from the item set.
///
/// Empty descriptions are not stored, so they resolve as a miss and the caller's
/// placeholder is shown instead of a blank pane.
#[derive(Debug, Clone, Default)]
pub struct PreviewIndex {
    previews: IndexMap<String, String>,
}

impl PreviewIndex {
    /// Pairs each item with the description at the same position.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MismatchedPreviews`] when the lengths differ. Nothing
    /// is truncated or padded.
    pub fn new(items: &ItemSet, descriptions: Vec<String>) -> Result<Self> {
        if items.len() != descriptions.len() {
            return Err(Error::MismatchedPreviews {
                items: items.len(),
                previews: descriptions.len(),
            });
        }

        let previews: IndexMap<String, String> = items
            .iter()
            .zip(descriptions)
            .filter(|(_, description)| !description.is_empty())
            .map(|(item, description)| (item.key().to_string(), description))
            .collect();

        debug!(
            "Built preview index with {} of {} items described",
            previews.len(),
            items.len()
        );

        Ok(Self { previews })
    }

    /// Returns the description for `key`, or `None` on a miss.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.previews.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.previews.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.previews.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> ItemSet {
        ItemSet::from_pairs([("i-1", "web-a"), ("i-2", "web-b"), ("i-3", "db-1")]).unwrap()
    }

    #[test]
    fn test_lookup_by_position() {
        let index = PreviewIndex::new(
            &items(),
            vec!["Id: i-1".to_string(), "Id: i-2".to_string(), "Id: i-3".to_string()],
        )
        .unwrap();

        assert_eq!(index.lookup("i-1"), Some("Id: i-1"));
        assert_eq!(index.lookup("i-3"), Some("Id: i-3"));
    }

    #[test]
    fn test_lookup_miss_is_none() {
        let index = PreviewIndex::new(
            &items(),
            vec!["a".to_string(), "b".to_string(), "c".to_string()],
        )
        .unwrap();

        assert_eq!(index.lookup("i-404"), None);
    }

    #[test]
    fn test_empty_description_is_a_miss() {
        let index = PreviewIndex::new(
            &items(),
            vec!["a".to_string(), String::new(), "c".to_string()],
        )
        .unwrap();

        assert_eq!(index.lookup("i-2"), None);
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_mismatched_lengths_fail() {
        let result = PreviewIndex::new(&items(), vec!["a".to_string()]);
        assert!(matches!(
            result,
            Err(Error::MismatchedPreviews {
                items: 3,
                previews: 1
            })
        ));
    }

    #[test]
    fn test_too_many_descriptions_fail() {
        let descriptions = vec!["a".to_string(); 4];
        assert!(PreviewIndex::new(&items(), descriptions).is_err());
    }
}
