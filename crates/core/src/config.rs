//! Default settings and path utilities for instance-picker.
//!
//! This module holds the defaults the CLI falls back to and resolves
//! the item file path, expanding shell variables like `~`.

/// Default path for the item file
const DEFAULT_ITEMS_PATH: &str = "~/.instance-picker/items.yml";

/// Title shown in the selector header when none is given
pub const DEFAULT_TITLE: &str = "Select an instance";

/// Title shown above the preview pane
pub const DEFAULT_PREVIEW_TITLE: &str = "Details";

/// Preview text shown when an item has no description
pub const DEFAULT_PLACEHOLDER: &str = "No details available";

/// Label used for items that carry no name
pub const UNNAMED_LABEL: &str = "NONAME";

/// Resolves the item file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// item path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use instance_picker_core::config::get_items_path;
///
/// // Use default path
/// let default_path = get_items_path(&None);
///
/// // Use custom path
/// let custom_path = get_items_path(&Some("/path/to/items.yml".to_string()));
/// assert_eq!(custom_path, "/path/to/items.yml");
/// ```
pub fn get_items_path(items_path_arg: &Option<String>) -> String {
    let items_path = match items_path_arg {
        Some(items_path) => items_path,
        None => DEFAULT_ITEMS_PATH,
    };

    shellexpand::tilde(items_path).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_items_path_with_custom_path() {
        let custom_path = Some("/custom/path/items.yml".to_string());
        let result = get_items_path(&custom_path);
        assert_eq!(result, "/custom/path/items.yml");
    }

    #[test]
    fn test_get_items_path_with_none() {
        let result = get_items_path(&None);
        // Should expand the tilde in the default path
        assert!(result.ends_with("items.yml"));
        assert!(!result.starts_with('~'));
    }

    #[test]
    fn test_get_items_path_with_tilde() {
        let tilde_path = Some("~/my-items.yml".to_string());
        let result = get_items_path(&tilde_path);
        assert!(!result.starts_with('~'));
        assert!(result.ends_with("my-items.yml"));
    }
}
