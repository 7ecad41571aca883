//! Content loaders for reading progression data from files.
//!
//! Catalogs are RON, the ladder config is TOML. All loaders deserialize
//! straight into `ranked-core` types via their serde derives.

pub mod badges;
pub mod config;
pub mod factory;
pub mod tasks;
pub mod triggers;

pub use badges::BadgeLoader;
pub use config::ConfigLoader;
pub use factory::{Content, ContentFactory};
pub use tasks::TaskLoader;
pub use triggers::TriggerLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
