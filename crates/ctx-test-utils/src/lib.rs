//! Shared test utilities for the context-sync workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`repo`]: [`TestRepo`](repo::TestRepo) builder with a `.context/` source tree

pub mod repo;

pub use repo::TestRepo;
