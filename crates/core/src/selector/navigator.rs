//! Highlight position within the filtered view and the live preview it drives.

use log::{debug, warn};

use super::committer::SelectionCommitter;
use super::filter::FilteredView;
use super::types::{Direction, Effect};
use crate::catalog::Catalog;

#[derive(Debug, Clone)]
pub struct ListNavigator {
    highlight: Option<usize>,
    placeholder: String,
}

impl ListNavigator {
    /// `placeholder` is shown whenever the highlighted item has no preview.
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            highlight: None,
            placeholder: placeholder.into(),
        }
    }

    /// Index into the filtered view, or `None` when nothing is highlighted.
    #[must_use]
    pub fn highlight(&self) -> Option<usize> {
        self.highlight
    }

    #[must_use]
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Preview text for `key`, falling back to the placeholder on a lookup miss.
    #[must_use]
    pub fn preview_for(&self, key: &str, catalog: &Catalog) -> String {
        catalog
            .previews()
            .lookup(key)
            .unwrap_or(self.placeholder.as_str())
            .to_string()
    }

    /// Highlights `new_index`, clamped to the view, and refreshes the preview.
    ///
    /// An empty view leaves nothing highlighted.
    pub fn on_highlight_changed(
        &mut self,
        new_index: usize,
        view: &FilteredView,
        catalog: &Catalog,
    ) -> Effect {
        if view.is_empty() {
            self.highlight = None;
            return Effect::ClearPreview;
        }

        let last = view.len() - 1;
        let index = if new_index > last {
            warn!("Highlight {new_index} is past the end of the view, clamping to {last}");
            last
        } else {
            new_index
        };

        let Some(item) = view.get(index).and_then(|position| catalog.items().get(position)) else {
            self.highlight = None;
            return Effect::ClearPreview;
        };

        self.highlight = Some(index);
        Effect::ShowPreview(self.preview_for(item.key(), catalog))
    }

    /// Steps the highlight one entry, stopping at either end of the view.
    ///
    /// With nothing highlighted yet, either direction lands on the first entry.
    pub fn move_by(
        &mut self,
        direction: Direction,
        view: &FilteredView,
        catalog: &Catalog,
    ) -> Option<Effect> {
        if view.is_empty() {
            return None;
        }

        let target = match (self.highlight, direction) {
            (None, _) => 0,
            (Some(current), Direction::Up) => current.saturating_sub(1),
            (Some(current), Direction::Down) => (current + 1).min(view.len() - 1),
        };

        if self.highlight == Some(target) {
            return None;
        }

        Some(self.on_highlight_changed(target, view, catalog))
    }

    /// Commits the highlighted item, or rings the bell if nothing is highlighted.
    pub fn commit_current(
        &self,
        view: &FilteredView,
        catalog: &Catalog,
        committer: &mut SelectionCommitter,
    ) -> Option<Effect> {
        let Some(index) = self.highlight else {
            debug!("Enter pressed with nothing highlighted");
            return Some(Effect::Bell);
        };

        let item = view
            .get(index)
            .and_then(|position| catalog.items().get(position))?;

        committer.commit(item.key())
    }

    /// Drops the highlight after the view was recomputed.
    pub fn reset(&mut self) -> Effect {
        self.highlight = None;
        Effect::ClearPreview
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemSet;
    use crate::selector::types::SelectionResult;

    fn catalog() -> Catalog {
        let items =
            ItemSet::from_pairs([("i-1", "web-a"), ("i-2", "web-b"), ("i-3", "db-1")]).unwrap();
        Catalog::new(
            items,
            vec!["Id: i-1".to_string(), String::new(), "Id: i-3".to_string()],
        )
        .unwrap()
    }

    #[test]
    fn test_first_move_highlights_top() {
        let catalog = catalog();
        let view = FilteredView::full(catalog.items());
        let mut navigator = ListNavigator::new("n/a");

        let effect = navigator.move_by(Direction::Up, &view, &catalog);
        assert_eq!(navigator.highlight(), Some(0));
        assert_eq!(effect, Some(Effect::ShowPreview("Id: i-1".to_string())));
    }

    #[test]
    fn test_move_clamps_at_bounds() {
        let catalog = catalog();
        let view = FilteredView::full(catalog.items());
        let mut navigator = ListNavigator::new("n/a");

        navigator.move_by(Direction::Down, &view, &catalog);
        assert_eq!(navigator.move_by(Direction::Up, &view, &catalog), None);
        assert_eq!(navigator.highlight(), Some(0));

        navigator.move_by(Direction::Down, &view, &catalog);
        navigator.move_by(Direction::Down, &view, &catalog);
        assert_eq!(navigator.highlight(), Some(2));
        assert_eq!(navigator.move_by(Direction::Down, &view, &catalog), None);
        assert_eq!(navigator.highlight(), Some(2));
    }

    #[test]
    fn test_move_on_empty_view_is_noop() {
        let catalog = catalog();
        let view = FilteredView::compute(catalog.items(), "nothing");
        let mut navigator = ListNavigator::new("n/a");

        assert_eq!(navigator.move_by(Direction::Down, &view, &catalog), None);
        assert_eq!(navigator.highlight(), None);
    }

    #[test]
    fn test_placeholder_on_missing_preview() {
        let catalog = catalog();
        let view = FilteredView::full(catalog.items());
        let mut navigator = ListNavigator::new("n/a");

        let effect = navigator.on_highlight_changed(1, &view, &catalog);
        assert_eq!(effect, Effect::ShowPreview("n/a".to_string()));
    }

    #[test]
    fn test_highlight_out_of_range_is_clamped() {
        let catalog = catalog();
        let view = FilteredView::full(catalog.items());
        let mut navigator = ListNavigator::new("n/a");

        let effect = navigator.on_highlight_changed(42, &view, &catalog);
        assert_eq!(navigator.highlight(), Some(2));
        assert_eq!(effect, Effect::ShowPreview("Id: i-3".to_string()));
    }

    #[test]
    fn test_highlight_on_empty_view_clears() {
        let catalog = catalog();
        let view = FilteredView::compute(catalog.items(), "zzz");
        let mut navigator = ListNavigator::new("n/a");

        assert_eq!(
            navigator.on_highlight_changed(0, &view, &catalog),
            Effect::ClearPreview
        );
        assert_eq!(navigator.highlight(), None);
    }

    #[test]
    fn test_commit_current_without_highlight_rings_bell() {
        let catalog = catalog();
        let view = FilteredView::full(catalog.items());
        let navigator = ListNavigator::new("n/a");
        let mut committer = SelectionCommitter::new();

        let effect = navigator.commit_current(&view, &catalog, &mut committer);
        assert_eq!(effect, Some(Effect::Bell));
        assert!(!committer.is_terminated());
    }

    #[test]
    fn test_commit_current_commits_highlighted_key() {
        let catalog = catalog();
        let view = FilteredView::compute(catalog.items(), "web");
        let mut navigator = ListNavigator::new("n/a");
        let mut committer = SelectionCommitter::new();

        navigator.on_highlight_changed(1, &view, &catalog);
        navigator.commit_current(&view, &catalog, &mut committer);

        assert_eq!(
            committer.result(),
            Some(&SelectionResult::Selected("i-2".to_string()))
        );
    }
}
