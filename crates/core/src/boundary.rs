//! Producer and consumer interfaces around a selection session.
//!
//! Data fetching happens entirely before the session starts and whatever is
//! done with the outcome happens entirely after it ends. Both sides are
//! reduced to these two traits so the selector never depends on how the
//! items were obtained or what the chosen key is used for.

use crate::error::Result;
use crate::selector::SelectionResult;

/// Raw output of a data fetch: `(key, label)` pairs and the preview for each,
/// in the same order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fetched {
    pub entries: Vec<(String, String)>,
    pub previews: Vec<String>,
}

/// Anything that can produce the items to select from.
pub trait ItemSource {
    /// # Errors
    ///
    /// Returns an error if the items cannot be obtained.
    fn fetch(&self) -> Result<Fetched>;
}

/// Anything that acts on the outcome of a session.
pub trait SelectionSink {
    /// # Errors
    ///
    /// Returns an error if the outcome cannot be handed on.
    fn deliver(&mut self, result: &SelectionResult) -> Result<()>;
}
