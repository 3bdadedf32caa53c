//! Type definitions for the terminal selector: display options, viewport and
//! the layout arithmetic the renderer relies on.

use crossterm::style::Color;
use instance_picker_core::selector::Key;

/// Rows taken by the header and the footer
pub const CHROME_ROWS: u16 = 2;

/// How the selector should look.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectorOptions {
    pub title: String,
    pub preview_title: String,
    pub show_search_hint: bool,
    pub highlight_color: Color,
}

/// An input event the selector cares about, decoded from the terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostInput {
    Key(Key),
    /// Left click at a screen position.
    Click { column: u16, row: u16 },
    Resize { width: u16, height: u16 },
}

/// State for the UI viewport.
///
/// Tracks the visible portion of the list when there are more
/// items than can fit on screen.
#[derive(Clone, PartialEq, Debug)]
pub struct ViewportState {
    pub offset: usize,
    /// Rows available for list entries
    pub height: u16,
    pub width: u16,
}

impl ViewportState {
    /// Viewport for a terminal of the given size.
    #[must_use]
    pub fn for_terminal(width: u16, height: u16) -> Self {
        Self {
            offset: 0,
            height: height.saturating_sub(CHROME_ROWS),
            width,
        }
    }

    /// Scrolls so that `highlight` is visible, without scrolling past the end of the list.
    pub fn follow(&mut self, highlight: Option<usize>, len: usize) {
        let height = self.height as usize;
        if height == 0 || len <= height {
            self.offset = 0;
            return;
        }

        let offset = self.offset.min(len - height);
        self.offset = match highlight {
            Some(index) if index < offset => index,
            Some(index) if index >= offset + height => index + 1 - height,
            _ => offset,
        };
    }

    /// Width of the list column; the rest, minus a separator, is the preview.
    #[must_use]
    pub fn list_width(&self) -> u16 {
        self.width.saturating_mul(3) / 5
    }

    /// First column of the preview pane.
    #[must_use]
    pub fn preview_column(&self) -> u16 {
        self.list_width().saturating_add(2)
    }

    #[must_use]
    pub fn preview_width(&self) -> u16 {
        self.width.saturating_sub(self.preview_column())
    }

    /// Filtered view index under a click, if the click landed on a list entry.
    #[must_use]
    pub fn index_at(&self, column: u16, row: u16) -> Option<usize> {
        if row == 0 || row > self.height || column >= self.list_width() {
            return None;
        }

        Some((row - 1) as usize + self.offset)
    }
}
