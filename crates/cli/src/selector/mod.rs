//! Terminal front end for the selection session.
//!
//! This module draws the session with crossterm and feeds it decoded key
//! and mouse events until the session ends.
//!
//! # User Interface
//!
//! The interface supports:
//! - Arrow keys (or the mouse wheel) to move the highlight, and a click to highlight a row
//! - Enter to select the highlighted instance
//! - `/` to start filtering, Enter while filtering to take the top match
//! - Escape to stop filtering, or to quit while browsing; Ctrl-C quits at any time

// Export public items from submodules
pub mod colors;
pub mod input;
pub mod types;
pub mod ui;

// Re-exports for convenience
pub use input::{confirm, translate_event, translate_key};
pub use types::{HostInput, SelectorOptions, ViewportState};
pub use ui::prompt_for_selection;
