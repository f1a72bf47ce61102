//! Error types for ctx-targets

use crate::ContentCategory;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown {category} target: {key}")]
    UnknownTarget {
        category: ContentCategory,
        key: String,
    },

    #[error("Preset '{preset}' for {category} references unknown target '{key}'")]
    InvalidPreset {
        category: ContentCategory,
        preset: String,
        key: String,
    },

    #[error("Invalid content category: {name}")]
    InvalidCategory { name: String },
}
