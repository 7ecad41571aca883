//! Badge catalog loader.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::badges::{BadgeCatalog, BadgeDefinition};
use crate::loaders::{LoadResult, read_file};

/// Badge catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BadgeFile {
    pub badges: Vec<BadgeDefinition>,
}

/// Loader for badge catalogs from RON files.
pub struct BadgeLoader;

impl BadgeLoader {
    pub fn load(path: &Path) -> LoadResult<BadgeCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<BadgeCatalog> {
        let file: BadgeFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse badge catalog RON: {}", e))?;

        let mut seen = HashSet::new();
        for badge in &file.badges {
            if !seen.insert(badge.id.as_str()) {
                anyhow::bail!("Duplicate badge id: {}", badge.id);
            }
        }

        Ok(BadgeCatalog::new(file.badges))
    }
}
