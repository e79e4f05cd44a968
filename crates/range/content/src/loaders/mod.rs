//! Content loaders for reading range data from files.
//!
//! Loaders convert TOML files into the configuration and oracle values
//! hosts hand to the core.

pub mod tunables;

pub use tunables::{RangeTunables, TunablesLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
