//! Content items loaded from flat source directories

use crate::Result;
use ctx_fs::{Error as FsError, NormalizedPath};
use std::fs;

/// Source bytes of a [`ContentItem`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemBody {
    Bytes(Vec<u8>),
    /// The file was listed but could not be read
    Unreadable { reason: String },
}

/// One markdown document from a category source directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentItem {
    /// Source filename, e.g. `update-docs.md`
    pub file_name: String,
    /// Filename without the `.md` extension
    pub stem: String,
    /// Full file content, front-matter included
    pub body: ItemBody,
}

impl ContentItem {
    pub fn new(file_name: impl Into<String>, body: impl Into<String>) -> Self {
        Self::from_bytes(file_name, body.into().into_bytes())
    }

    pub fn from_bytes(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self::with_body(file_name.into(), ItemBody::Bytes(bytes))
    }

    pub fn unreadable(file_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::with_body(
            file_name.into(),
            ItemBody::Unreadable {
                reason: reason.into(),
            },
        )
    }

    fn with_body(file_name: String, body: ItemBody) -> Self {
        let stem = file_name
            .strip_suffix(".md")
            .unwrap_or(&file_name)
            .to_string();
        Self {
            file_name,
            stem,
            body,
        }
    }

    /// Raw source bytes.
    pub fn bytes(&self) -> std::result::Result<&[u8], String> {
        match &self.body {
            ItemBody::Bytes(bytes) => Ok(bytes),
            ItemBody::Unreadable { reason } => Err(reason.clone()),
        }
    }

    /// Source content as UTF-8 text.
    pub fn text(&self) -> std::result::Result<&str, String> {
        std::str::from_utf8(self.bytes()?)
            .map_err(|e| format!("{} is not valid UTF-8: {e}", self.file_name))
    }

    /// Load every `.md` file directly inside `dir`, sorted by filename.
    ///
    /// Subdirectories are ignored. A missing directory yields no items. A file
    /// that cannot be read still becomes an item, marked
    /// [`ItemBody::Unreadable`], so it is counted and reported per target.
    ///
    /// # Errors
    ///
    /// Returns an error only if the directory itself cannot be listed.
    pub fn load_dir(dir: &NormalizedPath) -> Result<Vec<ContentItem>> {
        let mut items = Vec::new();
        for path in markdown_files(dir)? {
            let file_name = path.file_name().unwrap_or_default().to_string();
            let native = path.to_native();
            let item = match fs::read(&native) {
                Ok(bytes) => ContentItem::from_bytes(file_name, bytes),
                Err(e) => {
                    let reason = FsError::io(&native, e).to_string();
                    tracing::warn!(path = %path, %reason, "source file unreadable");
                    ContentItem::unreadable(file_name, reason)
                }
            };
            items.push(item);
        }
        Ok(items)
    }

    /// Number of `.md` files directly inside `dir`.
    pub fn count_dir(dir: &NormalizedPath) -> Result<usize> {
        Ok(markdown_files(dir)?.len())
    }
}

fn markdown_files(dir: &NormalizedPath) -> Result<Vec<NormalizedPath>> {
    let native = dir.to_native();
    if !native.is_dir() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(&native).map_err(|e| FsError::io(&native, e))? {
        let entry = entry.map_err(|e| FsError::io(&native, e))?;
        let path = entry.path();
        if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("md") {
            files.push(NormalizedPath::new(path));
        }
    }
    files.sort();
    Ok(files)
}
