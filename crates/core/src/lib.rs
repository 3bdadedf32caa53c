//! Instance Picker Core Library
//!
//! This crate provides the core of instance-picker, an interactive terminal
//! selector: given a list of items and a preview for each, the operator
//! narrows the list by typing, browses with a live preview and commits a
//! single selection.
//!
//! # Key Features
//!
//! - **Item Loading**: Read items and their previews from a YAML file
//! - **Filtering**: Case-insensitive substring matching that keeps the original order
//! - **Navigation**: Highlight movement clamped to the filtered view
//! - **Write-once Outcome**: A session ends with exactly one selection or none
//!
//! # Examples
//!
//! Driving a session without a terminal:
//!
//! ```
//! use instance_picker_core::catalog::Catalog;
//! use instance_picker_core::item::ItemSet;
//! use instance_picker_core::selector::{Key, SelectionResult, Session};
//!
//! let items = ItemSet::from_pairs([("i-1", "web-a"), ("i-2", "web-b"), ("i-3", "db-1")])?;
//! let previews = vec!["a".to_string(), "b".to_string(), "c".to_string()];
//! let mut session = Session::new(Catalog::new(items, previews)?, "No details");
//!
//! let keys = [Key::Char('/'), Key::Char('w'), Key::Char('e'), Key::Char('b'), Key::Enter];
//! assert_eq!(
//!     session.feed(keys),
//!     Some(&SelectionResult::Selected("i-1".to_string()))
//! );
//! # Ok::<(), instance_picker_core::error::Error>(())
//! ```

pub mod boundary;
pub mod catalog;
pub mod config;
pub mod error;
pub mod file_handling;
pub mod item;
pub mod preview;
pub mod selector;
