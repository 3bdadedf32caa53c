//! Selectable items and the ordered set they are loaded into.

use std::collections::HashSet;
use std::fmt::{Display, Formatter};

use crate::error::{Error, Result};

/// A selectable entity. Identity is the key; the label is what the operator sees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    key: String,
    label: String,
}

impl Item {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Display for Item {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.label)
    }
}

/// Items in their original fetch order. Never mutated once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemSet {
    items: Vec<Item>,
}

impl ItemSet {
    /// Builds the set, rejecting duplicate keys.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateKey`] for the first key that appears twice.
    pub fn new(items: Vec<Item>) -> Result<Self> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.key()) {
                return Err(Error::DuplicateKey(item.key().to_string()));
            }
        }

        Ok(Self { items })
    }

    /// Builds the set from `(key, label)` pairs.
    ///
    /// # Errors
    ///
    /// Same as [`ItemSet::new`].
    pub fn from_pairs<I, K, L>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, L)>,
        K: Into<String>,
        L: Into<String>,
    {
        Self::new(
            pairs
                .into_iter()
                .map(|(key, label)| Item::new(key, label))
                .collect(),
        )
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Item> {
        self.items.get(position)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a ItemSet {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
