//! Command implementations for ctx-cli

pub mod init;
pub mod status;
pub mod sync;
pub mod targets;

pub use init::run_init;
pub use status::{run_mark_generated, run_status};
pub use sync::run_sync;
pub use targets::run_targets;
