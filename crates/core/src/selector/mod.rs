//! The interactive selection state machine.
//!
//! A [`Session`] receives one [`Key`] at a time, routes it through the fixed
//! bindings in [`router`] to the component owning the affected state, and
//! returns the [`Effect`]s the host must apply. Nothing here touches the
//! terminal.
//!
//! - [`filter::FilterController`] owns the query, the filtered view and the mode
//! - [`navigator::ListNavigator`] owns the highlight and resolves previews
//! - [`committer::SelectionCommitter`] records the single outcome

pub mod committer;
pub mod filter;
pub mod navigator;
pub mod router;
pub mod session;
pub mod types;

// Re-exports for convenience
pub use filter::FilteredView;
pub use router::Action;
pub use session::Session;
pub use types::{Direction, Effect, Key, Mode, SelectionResult};
