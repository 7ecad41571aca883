//! Trigger catalog loader.

use std::path::Path;

use ranked_core::{Trigger, TriggerCatalog};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Trigger catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriggerFile {
    pub triggers: Vec<Trigger>,
}

/// Loader for trigger catalogs from RON files.
pub struct TriggerLoader;

impl TriggerLoader {
    /// Load and validate a trigger catalog.
    ///
    /// Entries use the `Trigger` serde shape:
    ///
    /// ```ron
    /// (triggers: [
    ///     (id: "match_win", name: "Victory", effect: Additive(100), activation: instant),
    /// ])
    /// ```
    pub fn load(path: &Path) -> LoadResult<TriggerCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<TriggerCatalog> {
        let file: TriggerFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse trigger catalog RON: {}", e))?;

        TriggerCatalog::from_triggers(file.triggers)
            .map_err(|e| anyhow::anyhow!("Invalid trigger catalog: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use ranked_core::{TriggerActivation, TriggerEffect, TriggerKind};

    use super::*;

    const SAMPLE: &str = r#"(
        triggers: [
            (id: "match_win", name: "Victory", effect: Additive(150), activation: instant),
            (
                id: "win_streak_3",
                name: "Hat Trick",
                effect: Multiplicative(1.5),
                activation: overtime,
                condition: Some((count: Some(3))),
            ),
        ],
    )"#;

    #[test]
    fn parses_entries() {
        let catalog = TriggerLoader::parse(SAMPLE).unwrap();
        assert_eq!(catalog.len(), 2);

        let win = catalog.get("match_win").unwrap();
        assert_eq!(win.effect, TriggerEffect::Additive(150));
        assert_eq!(win.activation, TriggerActivation::Instant);
        assert!(win.condition.is_none());

        let streak = catalog.get("win_streak_3").unwrap();
        assert_eq!(streak.kind(), TriggerKind::Multiplicative);
        assert_eq!(streak.condition.and_then(|c| c.count), Some(3));
        assert_eq!(streak.condition.and_then(|c| c.time_window_days), None);
    }

    #[test]
    fn rejects_duplicates() {
        let dup = r#"(triggers: [
            (id: "a", name: "A", effect: Additive(1), activation: instant),
            (id: "a", name: "B", effect: Additive(2), activation: instant),
        ])"#;
        let err = TriggerLoader::parse(dup).unwrap_err();
        assert!(err.to_string().contains("duplicate trigger id: a"));
    }

    #[test]
    fn rejects_malformed_ron() {
        assert!(TriggerLoader::parse("(triggers: [").is_err());
    }
}
