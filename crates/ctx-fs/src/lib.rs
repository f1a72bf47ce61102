//! Filesystem primitives for context-sync
//!
//! Provides forward-slash normalized paths, the well-known `.context/` layout,
//! and atomic text I/O used by every writer in the workspace.

pub mod constants;
pub mod error;
pub mod io;
pub mod path;

pub use constants::ContextPath;
pub use error::{Error, Result};
pub use path::NormalizedPath;
