use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Got {} items but {} previews. Every item needs exactly one preview.", .items, .previews)]
    MismatchedPreviews { items: usize, previews: usize },

    #[error("Found a non-unique item key: `{}`", .0)]
    DuplicateKey(String),

    #[error("No instances were found in the item YAML. Is `{}` empty?", .path)]
    EmptyItemSet { path: String },

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Terminal error: {}", .0)]
    Terminal(#[from] std::io::Error),

    #[error("Unknown color name: \"{}\"", _0)]
    UnknownColorName(String),
}

impl Error {
    pub fn empty_item_set(path: String) -> Self {
        Self::EmptyItemSet { path }
    }

    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }
}
