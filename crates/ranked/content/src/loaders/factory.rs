//! Content factory for loading every catalog from one data directory.

use std::path::{Path, PathBuf};

use ranked_core::{ProgressionConfig, TriggerCatalog};
use tracing::{debug, info};

use crate::badges::BadgeCatalog;
use crate::loaders::{BadgeLoader, ConfigLoader, LoadResult, TaskLoader, TriggerLoader};
use crate::tasks::TaskCatalog;

/// Everything the engine and front-ends need, loaded together.
#[derive(Clone, Debug)]
pub struct Content {
    pub config: ProgressionConfig,
    pub triggers: TriggerCatalog,
    pub tasks: TaskCatalog,
    pub badges: BadgeCatalog,
}

impl Content {
    /// Built-in content only; no files touched.
    pub fn builtin() -> Self {
        Self {
            config: ProgressionConfig::DEFAULT,
            triggers: TriggerCatalog::builtin().clone(),
            tasks: TaskCatalog::builtin(),
            badges: BadgeCatalog::builtin(),
        }
    }
}

/// Content factory that loads progression content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── progression.toml
/// ├── triggers.ron
/// ├── tasks.ron
/// └── badges.ron
/// ```
///
/// Each file is optional. An absent file yields the built-in content; a
/// present but malformed file is an error.
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const CONFIG_FILE: &'static str = "progression.toml";
    pub const TRIGGERS_FILE: &'static str = "triggers.ron";
    pub const TASKS_FILE: &'static str = "tasks.ron";
    pub const BADGES_FILE: &'static str = "badges.ron";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load the progression ladder from `progression.toml`.
    pub fn load_config(&self) -> LoadResult<ProgressionConfig> {
        self.load_or(Self::CONFIG_FILE, ConfigLoader::load, || {
            ProgressionConfig::DEFAULT
        })
    }

    /// Load the trigger catalog from `triggers.ron`.
    pub fn load_triggers(&self) -> LoadResult<TriggerCatalog> {
        self.load_or(Self::TRIGGERS_FILE, TriggerLoader::load, || {
            TriggerCatalog::builtin().clone()
        })
    }

    /// Load the task catalog from `tasks.ron`.
    pub fn load_tasks(&self) -> LoadResult<TaskCatalog> {
        self.load_or(Self::TASKS_FILE, TaskLoader::load, TaskCatalog::builtin)
    }

    /// Load the badge catalog from `badges.ron`.
    pub fn load_badges(&self) -> LoadResult<BadgeCatalog> {
        self.load_or(Self::BADGES_FILE, BadgeLoader::load, BadgeCatalog::builtin)
    }

    /// Load every catalog.
    pub fn load_all(&self) -> LoadResult<Content> {
        let content = Content {
            config: self.load_config()?,
            triggers: self.load_triggers()?,
            tasks: self.load_tasks()?,
            badges: self.load_badges()?,
        };

        info!(
            data_dir = %self.data_dir.display(),
            triggers = content.triggers.len(),
            tasks = content.tasks.len(),
            badges = content.badges.len(),
            max_xp = content.config.max_xp(),
            "loaded progression content"
        );

        Ok(content)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn load_or<T>(
        &self,
        file: &str,
        load: impl FnOnce(&Path) -> LoadResult<T>,
        fallback: impl FnOnce() -> T,
    ) -> LoadResult<T> {
        let path = self.data_dir.join(file);
        if path.is_file() {
            debug!("loading {}", path.display());
            load(&path)
        } else {
            debug!("{} not found, using built-in content", path.display());
            Ok(fallback())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn missing_directory_yields_builtins() {
        let factory = ContentFactory::new("/definitely/not/a/ranked/data/dir");
        let content = factory.load_all().unwrap();
        assert_eq!(content.config, ProgressionConfig::DEFAULT);
        assert_eq!(&content.triggers, TriggerCatalog::builtin());
        assert_eq!(content.tasks.len(), 15);
        assert_eq!(content.badges.len(), 16);
    }
}
