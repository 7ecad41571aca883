//! Task catalog loader.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};
use crate::tasks::{TaskCatalog, TaskDefinition};

/// Task catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskFile {
    pub tasks: Vec<TaskDefinition>,
}

/// Loader for task catalogs from RON files.
pub struct TaskLoader;

impl TaskLoader {
    pub fn load(path: &Path) -> LoadResult<TaskCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<TaskCatalog> {
        let file: TaskFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse task catalog RON: {}", e))?;

        let mut seen = HashSet::new();
        for task in &file.tasks {
            if !seen.insert(task.id.as_str()) {
                anyhow::bail!("Duplicate task id: {}", task.id);
            }
        }

        Ok(TaskCatalog::new(file.tasks))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::TaskCategory;

    #[test]
    fn parses_and_categorizes() {
        let catalog = TaskLoader::parse(
            r#"(tasks: [
                (id: "daily_win_2", name: "Double", description: "Win 2", xp_reward: 300, icon: "trophy"),
                (id: "weekly_play_5", name: "Regular", description: "Play 5", xp_reward: 400, icon: "swords"),
            ])"#,
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.by_category(TaskCategory::Daily).count(), 1);
        assert_eq!(catalog.reward("weekly_play_5"), 400);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = TaskLoader::parse(
            r#"(tasks: [
                (id: "x", name: "A", description: "", xp_reward: 1, icon: ""),
                (id: "x", name: "B", description: "", xp_reward: 2, icon: ""),
            ])"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Duplicate task id: x"));
    }
}
