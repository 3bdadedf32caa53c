//! Instance Picker CLI Library
//!
//! This crate provides the command-line interface for instance-picker. It
//! loads the items, runs the interactive selector in the terminal and prints
//! the selected key.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`selector`]: Terminal rendering and event decoding for a selection session
//! - [`output`]: Delivering the outcome on stdout
//!
//! # Examples
//!
//! ```bash
//! # Pick from the default item file
//! ipick
//!
//! # Open a session on whatever was picked
//! aws ssm start-session --target "$(ipick ~/instances.yml)"
//!
//! # Production: confirm first, highlight in red
//! ipick --scary --title "Select an instance in production" prod.yml
//! ```

pub mod cli_args;
pub mod output;
pub mod selector;
