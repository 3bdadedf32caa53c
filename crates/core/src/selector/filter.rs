//! Filter text and the view of items it selects.

use log::debug;

use super::committer::SelectionCommitter;
use super::navigator::ListNavigator;
use super::types::{Effect, Mode};
use crate::catalog::Catalog;
use crate::item::{Item, ItemSet};

/// Positions into the item set whose labels match the current query, in item set order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilteredView {
    positions: Vec<usize>,
}

impl FilteredView {
    /// Every item, unfiltered.
    #[must_use]
    pub fn full(items: &ItemSet) -> Self {
        Self {
            positions: (0..items.len()).collect(),
        }
    }

    /// Items whose label contains `query`, ignoring case.
    #[must_use]
    pub fn compute(items: &ItemSet, query: &str) -> Self {
        if query.is_empty() {
            return Self::full(items);
        }

        let needle = query.to_lowercase();
        let positions = items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.label().to_lowercase().contains(&needle))
            .map(|(position, _)| position)
            .collect();

        Self { positions }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Item set position of the `index`th visible entry.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<usize> {
        self.positions.get(index).copied()
    }

    #[must_use]
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// Resolves the visible entries against the item set they were computed from.
    pub fn items<'a>(&'a self, items: &'a ItemSet) -> impl Iterator<Item = &'a Item> + 'a {
        self.positions
            .iter()
            .filter_map(move |&position| items.get(position))
    }
}

/// Owns the filter query, the filtered view and the Browsing/Filtering mode.
#[derive(Debug, Clone)]
pub struct FilterController {
    mode: Mode,
    query: String,
    view: FilteredView,
}

impl FilterController {
    pub fn new(items: &ItemSet) -> Self {
        Self {
            mode: Mode::Browsing,
            query: String::new(),
            view: FilteredView::full(items),
        }
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn view(&self) -> &FilteredView {
        &self.view
    }

    /// Moves focus to the filter buffer with an empty query. Only valid while browsing.
    pub fn start_filter(&mut self) -> Vec<Effect> {
        if self.mode != Mode::Browsing {
            return vec![];
        }

        debug!("Filtering started");
        self.mode = Mode::Filtering;
        self.query.clear();
        vec![]
    }

    /// Replaces the query and recomputes the view. The highlight is always dropped.
    pub fn on_text_changed(
        &mut self,
        new_text: &str,
        items: &ItemSet,
        navigator: &mut ListNavigator,
    ) -> Vec<Effect> {
        if self.mode != Mode::Filtering {
            return vec![];
        }

        self.query = new_text.to_string();
        self.view = FilteredView::compute(items, &self.query);
        debug!(
            "Filter `{}` matches {} of {} items",
            self.query,
            self.view.len(),
            items.len()
        );

        vec![navigator.reset()]
    }

    /// Leaves filtering and restores the full list.
    pub fn cancel_filter(&mut self, items: &ItemSet, navigator: &mut ListNavigator) -> Vec<Effect> {
        if self.mode != Mode::Filtering {
            return vec![];
        }

        debug!("Filtering cancelled");
        self.mode = Mode::Browsing;
        self.query.clear();
        self.view = FilteredView::full(items);

        vec![navigator.reset()]
    }

    /// Commits the first surviving item in original order, or cancels filtering
    /// when nothing matches.
    pub fn submit_filter(
        &mut self,
        catalog: &Catalog,
        navigator: &mut ListNavigator,
        committer: &mut SelectionCommitter,
    ) -> Vec<Effect> {
        if self.mode != Mode::Filtering {
            return vec![];
        }

        let top_match = self
            .view
            .get(0)
            .and_then(|position| catalog.items().get(position));

        match top_match {
            Some(item) => committer.commit(item.key()).into_iter().collect(),
            None => self.cancel_filter(catalog.items(), navigator),
        }
    }
}
