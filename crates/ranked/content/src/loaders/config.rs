//! Progression ladder loader.

use std::path::Path;

use ranked_core::ProgressionConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for the progression ladder from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load a ladder from a TOML file.
    ///
    /// ```toml
    /// xp_per_grade = 5000
    /// grades_per_rank = 9
    /// rank_count = 5
    /// ```
    ///
    /// Invalid ladders (zero sizes, too many ranks) are rejected here rather
    /// than at first use.
    pub fn load(path: &Path) -> LoadResult<ProgressionConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<ProgressionConfig> {
        toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse progression TOML: {}", e))
    }
}
