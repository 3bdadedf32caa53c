//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure using the `clap` crate.

use clap::Parser;
use instance_picker_core::config::{DEFAULT_PLACEHOLDER, DEFAULT_PREVIEW_TITLE, DEFAULT_TITLE};

/// Command-line arguments for the `ipick` binary.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use instance_picker_cli::cli_args::Args;
///
/// let args = Args::parse_from(["ipick", "--scary", "instances.yml"]);
/// assert!(args.scary);
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
#[allow(clippy::struct_excessive_bools)] // silence clippy's warning on this struct
pub struct Args {
    /// Path to the YAML file listing the items to select from.
    ///
    /// If not provided, defaults to `~/.instance-picker/items.yml`.
    #[arg(num_args(1))]
    pub items_path: Option<String>,

    /// Title shown in the selector header.
    #[arg(long, short = 't', default_value = DEFAULT_TITLE)]
    pub title: String,

    /// Title shown above the preview pane.
    #[arg(long, default_value = DEFAULT_PREVIEW_TITLE)]
    pub preview_title: String,

    /// Preview text for items that have no details.
    #[arg(long, default_value = DEFAULT_PLACEHOLDER)]
    pub placeholder: String,

    /// Background color of the highlighted row, by name (e.g. `green`, `darkblue`).
    #[arg(long, default_value = "green")]
    pub highlight_color: String,

    /// Treat the environment as dangerous.
    ///
    /// Asks for confirmation before showing the selector and highlights in red.
    #[arg(long, short = 's', action)]
    pub scary: bool,

    /// Select the first item without showing the selector.
    #[arg(long, short = 'n', action)]
    pub no_interactive: bool,

    /// Hide the `/` search hint in the header.
    #[arg(long, action)]
    pub no_search_hint: bool,
}
