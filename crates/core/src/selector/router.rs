//! Fixed key bindings, keyed by mode.

use super::types::{Direction, Key, Mode};

/// What a key press asks the session to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    StartFilter,
    /// End the session with no selection.
    Cancel,
    CommitCurrent,
    Move(Direction),
    CancelFilter,
    SubmitFilter,
    /// The filter buffer now reads this.
    TextChanged(String),
}

/// Maps a key to an action for the current mode. `None` means the key is ignored.
///
/// `query` is the current filter buffer, needed to compute the edited text.
#[must_use]
pub fn route(mode: Mode, key: Key, query: &str) -> Option<Action> {
    match (mode, key) {
        (_, Key::Interrupt) => Some(Action::Cancel),

        (Mode::Browsing, Key::Char('/')) => Some(Action::StartFilter),
        (Mode::Browsing, Key::Escape) => Some(Action::Cancel),
        (Mode::Browsing, Key::Enter) => Some(Action::CommitCurrent),
        (Mode::Browsing, Key::Up) => Some(Action::Move(Direction::Up)),
        (Mode::Browsing, Key::Down) => Some(Action::Move(Direction::Down)),
        (Mode::Browsing, Key::Char(_) | Key::Backspace) => None,

        (Mode::Filtering, Key::Escape) => Some(Action::CancelFilter),
        (Mode::Filtering, Key::Enter) => Some(Action::SubmitFilter),
        (Mode::Filtering, Key::Up | Key::Down) => None,
        (Mode::Filtering, Key::Char(c)) if c.is_control() => None,
        (Mode::Filtering, Key::Char(c)) => Some(Action::TextChanged(format!("{query}{c}"))),
        (Mode::Filtering, Key::Backspace) => {
            if query.is_empty() {
                return None;
            }
            let mut edited = query.to_string();
            edited.pop();
            Some(Action::TextChanged(edited))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_browsing_bindings() {
        let b = Mode::Browsing;
        assert_eq!(route(b, Key::Char('/'), ""), Some(Action::StartFilter));
        assert_eq!(route(b, Key::Escape, ""), Some(Action::Cancel));
        assert_eq!(route(b, Key::Enter, ""), Some(Action::CommitCurrent));
        assert_eq!(route(b, Key::Up, ""), Some(Action::Move(Direction::Up)));
        assert_eq!(
            route(b, Key::Down, ""),
            Some(Action::Move(Direction::Down))
        );
    }

    #[test]
    fn test_browsing_ignores_text() {
        assert_eq!(route(Mode::Browsing, Key::Char('a'), ""), None);
        assert_eq!(route(Mode::Browsing, Key::Backspace, ""), None);
    }

    #[test]
    fn test_filtering_bindings() {
        let f = Mode::Filtering;
        assert_eq!(route(f, Key::Escape, "we"), Some(Action::CancelFilter));
        assert_eq!(route(f, Key::Enter, "we"), Some(Action::SubmitFilter));
        assert_eq!(route(f, Key::Up, "we"), None);
        assert_eq!(route(f, Key::Down, "we"), None);
    }

    #[test]
    fn test_filtering_slash_is_text() {
        assert_eq!(
            route(Mode::Filtering, Key::Char('/'), "a"),
            Some(Action::TextChanged("a/".to_string()))
        );
    }

    #[test]
    fn test_filtering_appends_and_deletes() {
        assert_eq!(
            route(Mode::Filtering, Key::Char('b'), "we"),
            Some(Action::TextChanged("web".to_string()))
        );
        assert_eq!(
            route(Mode::Filtering, Key::Backspace, "web"),
            Some(Action::TextChanged("we".to_string()))
        );
        assert_eq!(route(Mode::Filtering, Key::Backspace, ""), None);
    }

    #[test]
    fn test_filtering_ignores_control_chars() {
        assert_eq!(route(Mode::Filtering, Key::Char('\u{7}'), "we"), None);
    }

    #[test]
    fn test_interrupt_cancels_in_both_modes() {
        assert_eq!(
            route(Mode::Browsing, Key::Interrupt, ""),
            Some(Action::Cancel)
        );
        assert_eq!(
            route(Mode::Filtering, Key::Interrupt, "x"),
            Some(Action::Cancel)
        );
    }
}
