//! One selection session: owns every piece of mutable state and applies
//! routed actions to the component that owns the affected state.

use log::debug;

use super::committer::SelectionCommitter;
use super::filter::{FilterController, FilteredView};
use super::navigator::ListNavigator;
use super::router::{route, Action};
use super::types::{Effect, Key, Mode, SelectionResult};
use crate::catalog::Catalog;
use crate::item::Item;

#[derive(Debug)]
pub struct Session {
    catalog: Catalog,
    filter: FilterController,
    navigator: ListNavigator,
    committer: SelectionCommitter,
}

impl Session {
    pub fn new(catalog: Catalog, placeholder: impl Into<String>) -> Self {
        let filter = FilterController::new(catalog.items());
        Self {
            catalog,
            filter,
            navigator: ListNavigator::new(placeholder),
            committer: SelectionCommitter::new(),
        }
    }

    /// Handles one key event to completion and returns the effects to apply.
    pub fn handle_key(&mut self, key: Key) -> Vec<Effect> {
        if self.is_terminated() {
            return vec![];
        }

        match route(self.mode(), key, self.filter.query()) {
            Some(action) => self.apply(action),
            None => vec![],
        }
    }

    pub fn apply(&mut self, action: Action) -> Vec<Effect> {
        debug!("{:?} in {:?}", action, self.mode());

        match action {
            Action::StartFilter => self.filter.start_filter(),
            Action::Cancel => self.committer.cancel().into_iter().collect(),
            Action::CommitCurrent => self
                .navigator
                .commit_current(self.filter.view(), &self.catalog, &mut self.committer)
                .into_iter()
                .collect(),
            Action::Move(direction) => self
                .navigator
                .move_by(direction, self.filter.view(), &self.catalog)
                .into_iter()
                .collect(),
            Action::CancelFilter => self
                .filter
                .cancel_filter(self.catalog.items(), &mut self.navigator),
            Action::SubmitFilter => {
                self.filter
                    .submit_filter(&self.catalog, &mut self.navigator, &mut self.committer)
            }
            Action::TextChanged(text) => {
                self.filter
                    .on_text_changed(&text, self.catalog.items(), &mut self.navigator)
            }
        }
    }

    /// Highlights an entry directly, e.g. from a mouse click. Ignored unless browsing.
    pub fn highlight(&mut self, index: usize) -> Vec<Effect> {
        if self.is_terminated() || self.mode() != Mode::Browsing {
            return vec![];
        }

        vec![self
            .navigator
            .on_highlight_changed(index, self.filter.view(), &self.catalog)]
    }

    /// Commits the first visible item without any interaction; cancels if there is none.
    pub fn commit_first(&mut self) -> Vec<Effect> {
        let first = self
            .filter
            .view()
            .get(0)
            .and_then(|position| self.catalog.items().get(position));

        let effect = match first {
            Some(item) => self.committer.commit(item.key()),
            None => self.committer.cancel(),
        };

        effect.into_iter().collect()
    }

    /// Feeds keys until the session ends or the keys run out.
    pub fn feed<I: IntoIterator<Item = Key>>(&mut self, keys: I) -> Option<&SelectionResult> {
        for key in keys {
            if self.is_terminated() {
                break;
            }
            self.handle_key(key);
        }

        self.result()
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.filter.mode()
    }

    #[must_use]
    pub fn query(&self) -> &str {
        self.filter.query()
    }

    #[must_use]
    pub fn view(&self) -> &FilteredView {
        self.filter.view()
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn visible_items(&self) -> impl Iterator<Item = &Item> {
        self.filter.view().items(self.catalog.items())
    }

    #[must_use]
    pub fn highlighted_index(&self) -> Option<usize> {
        self.navigator.highlight()
    }

    #[must_use]
    pub fn highlighted_item(&self) -> Option<&Item> {
        self.navigator
            .highlight()
            .and_then(|index| self.filter.view().get(index))
            .and_then(|position| self.catalog.items().get(position))
    }

    /// Preview for the highlighted item, `None` when nothing is highlighted.
    #[must_use]
    pub fn current_preview(&self) -> Option<String> {
        self.highlighted_item()
            .map(|item| self.navigator.preview_for(item.key(), &self.catalog))
    }

    #[must_use]
    pub fn is_terminated(&self) -> bool {
        self.committer.is_terminated()
    }

    #[must_use]
    pub fn result(&self) -> Option<&SelectionResult> {
        self.committer.result()
    }

    #[must_use]
    pub fn into_result(self) -> Option<SelectionResult> {
        self.committer.into_result()
    }
}
