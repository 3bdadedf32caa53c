//! Type definitions shared by the selector components.

/// Which component currently interprets key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// The list has focus; arrows move the highlight.
    #[default]
    Browsing,
    /// The filter buffer has focus; printable keys edit the query.
    Filtering,
}

/// Direction to move the highlight in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// A discrete key event, already decoded from whatever the host terminal produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Backspace,
    Enter,
    Escape,
    Up,
    Down,
    /// Ctrl-C
    Interrupt,
}

/// The write-once outcome of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionResult {
    Selected(String),
    Cancelled,
}

impl SelectionResult {
    /// The selected key, if anything was selected.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        match self {
            SelectionResult::Selected(key) => Some(key),
            SelectionResult::Cancelled => None,
        }
    }
}

/// Side effects the host applies after an event has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Replace the preview pane contents.
    ShowPreview(String),
    /// Empty the preview pane; nothing is highlighted.
    ClearPreview,
    /// Enter was pressed with nothing highlighted.
    Bell,
    /// The session is over; stop delivering events.
    Terminate(SelectionResult),
}
