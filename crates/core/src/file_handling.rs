//! Loading items from a YAML file.
//!
//! Each entry describes one instance: its key, an optional name used to build
//! the label, and either free preview text or an ordered map of details.

use std::fs::File;

use indexmap::IndexMap;
use itertools::Itertools;
use serde::Deserialize;

use crate::boundary::{Fetched, ItemSource};
use crate::config::UNNAMED_LABEL;
use crate::error::{Error, Result};

#[derive(Deserialize, Debug, Clone)]
pub struct ItemRecord {
    pub key: String,
    pub name: Option<String>,
    pub preview: Option<String>,
    pub details: Option<IndexMap<String, String>>,
}

impl ItemRecord {
    /// Name padded to a column, followed by the key in parentheses.
    #[must_use]
    pub fn label(&self) -> String {
        let name = match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => UNNAMED_LABEL,
        };
        format!("{:<30} ({:<15})", name, self.key)
    }

    /// Free text wins over details; an empty string means no preview.
    #[must_use]
    pub fn preview_text(&self) -> String {
        if let Some(preview) = &self.preview {
            return preview.trim_end().to_string();
        }

        match &self.details {
            Some(details) => details
                .iter()
                .map(|(field, value)| format!("{field}: {value}"))
                .join("\n"),
            None => String::new(),
        }
    }
}

fn get_reader(file_description: &str, path: &str) -> Result<File> {
    File::open(path)
        .map_err(|e| Error::io_error(file_description.to_string(), path.to_string(), e))
}

/// Loads item records from a YAML file.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The YAML is malformed or doesn't match the expected structure
/// - The file holds no items
///
/// # Examples
///
/// ```no_run
/// use instance_picker_core::file_handling::get_item_records;
///
/// let records = get_item_records("/home/me/.instance-picker/items.yml")?;
/// println!("Loaded {} items", records.len());
/// # Ok::<(), instance_picker_core::error::Error>(())
/// ```
pub fn get_item_records(items_path: &str) -> Result<Vec<ItemRecord>> {
    let reader = get_reader("items", items_path)?;

    let records: Vec<ItemRecord> = serde_yaml::from_reader(reader).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "items".to_string(),
            items_path.to_string(),
            e,
        )
    })?;

    if records.is_empty() {
        return Err(Error::empty_item_set(items_path.to_string()));
    }

    Ok(records)
}

/// An [`ItemSource`] backed by a YAML item file.
#[derive(Debug, Clone)]
pub struct YamlItemFile {
    path: String,
}

impl YamlItemFile {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl ItemSource for YamlItemFile {
    fn fetch(&self) -> Result<Fetched> {
        let records = get_item_records(&self.path)?;

        let (entries, previews): (Vec<_>, Vec<_>) = records
            .iter()
            .map(|record| ((record.key.clone(), record.label()), record.preview_text()))
            .unzip();

        Ok(Fetched { entries, previews })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_yaml(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{content}").unwrap();
        temp_file
    }

    fn record(name: Option<&str>) -> ItemRecord {
        ItemRecord {
            key: "i-0abc".to_string(),
            name: name.map(ToString::to_string),
            preview: None,
            details: None,
        }
    }

    #[test]
    fn test_label_with_name() {
        let label = record(Some("web-a")).label();
        assert!(label.starts_with("web-a "));
        assert!(label.ends_with("(i-0abc         )"));
        assert_eq!(label.find('('), Some(31));
    }

    #[test]
    fn test_label_without_name() {
        assert!(record(None).label().starts_with(UNNAMED_LABEL));
        assert!(record(Some("")).label().starts_with(UNNAMED_LABEL));
    }

    #[test]
    fn test_preview_text_from_details() {
        let mut details = IndexMap::new();
        details.insert("Id".to_string(), "i-0abc".to_string());
        details.insert("State".to_string(), "running".to_string());

        let mut item = record(None);
        item.details = Some(details);

        assert_eq!(item.preview_text(), "Id: i-0abc\nState: running");
    }

    #[test]
    fn test_preview_text_prefers_free_text() {
        let mut details = IndexMap::new();
        details.insert("Id".to_string(), "ignored".to_string());

        let mut item = record(None);
        item.preview = Some("Type: t3.micro\n".to_string());
        item.details = Some(details);

        assert_eq!(item.preview_text(), "Type: t3.micro");
    }

    #[test]
    fn test_preview_text_missing() {
        assert_eq!(record(None).preview_text(), "");
    }

    #[test]
    fn test_get_item_records_missing_file() {
        let result = get_item_records("/definitely/not/here/items.yml");
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn test_get_item_records_empty_list() {
        let file = write_yaml("[]\n");
        let path = file.path().to_str().unwrap();
        assert!(matches!(
            get_item_records(path),
            Err(Error::EmptyItemSet { .. })
        ));
    }

    #[test]
    fn test_get_item_records_malformed() {
        let file = write_yaml("- name: no key here\n");
        let path = file.path().to_str().unwrap();
        assert!(matches!(get_item_records(path), Err(Error::Yaml { .. })));
    }

    #[test]
    fn test_fetch_keeps_order_and_pairs_previews() {
        let file = write_yaml(
            r#"
- key: "i-2"
  name: "db-1"
  preview: "second"
- key: "i-1"
  name: "web-a"
  details:
    Id: "i-1"
    State: "stopped"
"#,
        );

        let fetched = YamlItemFile::new(file.path().to_str().unwrap())
            .fetch()
            .unwrap();

        assert_eq!(fetched.entries.len(), 2);
        assert_eq!(fetched.entries[0].0, "i-2");
        assert_eq!(fetched.entries[1].0, "i-1");
        assert_eq!(fetched.previews, vec!["second", "Id: i-1\nState: stopped"]);
    }
}
