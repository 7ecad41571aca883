//! Immutable id → trigger lookup table.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::{Trigger, TriggerActivation, TriggerEffect, TriggerKind, TriggerOracle, ids};
use crate::error::CatalogError;

static BUILTIN: LazyLock<TriggerCatalog> = LazyLock::new(|| TriggerCatalog::index(builtin_triggers()));

/// Triggers indexed by id, in definition order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TriggerCatalog {
    triggers: Vec<Trigger>,
    by_id: HashMap<String, usize>,
}

impl TriggerCatalog {
    /// The built-in catalog, built once per process.
    pub fn builtin() -> &'static TriggerCatalog {
        &BUILTIN
    }

    /// Builds a catalog from externally supplied definitions.
    ///
    /// # Errors
    ///
    /// Rejects empty or duplicate ids, and multipliers that are not finite and
    /// strictly positive.
    pub fn from_triggers(triggers: Vec<Trigger>) -> Result<Self, CatalogError> {
        for trigger in &triggers {
            if trigger.id.is_empty() {
                return Err(CatalogError::EmptyId);
            }
            if let TriggerEffect::Multiplicative(factor) = trigger.effect
                && !(factor.is_finite() && factor > 0.0)
            {
                return Err(CatalogError::InvalidMultiplier {
                    id: trigger.id.clone(),
                    factor,
                });
            }
        }

        let catalog = Self::index(triggers);
        if catalog.by_id.len() != catalog.triggers.len() {
            let mut seen = std::collections::HashSet::new();
            let duplicate = catalog
                .triggers
                .iter()
                .find(|t| !seen.insert(t.id.as_str()))
                .map(|t| t.id.clone())
                .unwrap_or_default();
            return Err(CatalogError::DuplicateId(duplicate));
        }

        Ok(catalog)
    }

    fn index(triggers: Vec<Trigger>) -> Self {
        let by_id = triggers
            .iter()
            .enumerate()
            .map(|(i, t)| (t.id.clone(), i))
            .collect();
        Self { triggers, by_id }
    }

    pub fn get(&self, id: &str) -> Option<&Trigger> {
        self.by_id.get(id).map(|&i| &self.triggers[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Trigger> {
        self.triggers.iter()
    }

    pub fn len(&self) -> usize {
        self.triggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }

    pub fn by_kind(&self, kind: TriggerKind) -> impl Iterator<Item = &Trigger> {
        self.iter().filter(move |t| t.kind() == kind)
    }

    pub fn by_activation(&self, activation: TriggerActivation) -> impl Iterator<Item = &Trigger> {
        self.iter().filter(move |t| t.activation == activation)
    }

    pub fn instant_additive(&self) -> impl Iterator<Item = &Trigger> {
        self.by_activation(TriggerActivation::Instant)
            .filter(|t| t.kind() == TriggerKind::Additive)
    }

    pub fn instant_multiplicative(&self) -> impl Iterator<Item = &Trigger> {
        self.by_activation(TriggerActivation::Instant)
            .filter(|t| t.kind() == TriggerKind::Multiplicative)
    }
}

impl TriggerOracle for TriggerCatalog {
    fn trigger(&self, id: &str) -> Option<&Trigger> {
        self.get(id)
    }
}

/// Built-in trigger definitions.
pub fn builtin_triggers() -> Vec<Trigger> {
    use TriggerActivation::{Instant, Overtime};
    use TriggerEffect::{Additive, Multiplicative};

    vec![
        // Match results and flat instant bonuses
        Trigger::new(ids::MATCH_WIN, "Match Win", Additive(100), Instant),
        Trigger::new(ids::MATCH_LOSS, "Match Loss", Additive(25), Instant),
        Trigger::new(ids::MATCH_DRAW, "Match Draw", Additive(50), Instant),
        Trigger::new(ids::FIRST_WIN_OF_DAY, "First Win of Day", Additive(200), Instant),
        // Instant multipliers
        Trigger::new(ids::WIN_STREAK_3, "3 Win Streak Bonus", Multiplicative(1.25), Instant),
        Trigger::new(ids::WIN_STREAK_5, "5 Win Streak Bonus", Multiplicative(1.5), Instant),
        Trigger::new(ids::WIN_STREAK_10, "10 Win Streak Bonus", Multiplicative(2.0), Instant),
        Trigger::new(ids::UNDERDOG_WIN, "Underdog Victory", Multiplicative(1.5), Instant),
        // Login streaks
        Trigger::new(ids::DAILY_LOGIN_3, "3 Day Login Streak", Additive(300), Overtime)
            .with_condition(Some(3), None),
        Trigger::new(ids::DAILY_LOGIN_7, "7 Day Login Streak", Additive(1_000), Overtime)
            .with_condition(Some(7), None),
        Trigger::new(ids::DAILY_LOGIN_14, "14 Day Login Streak", Additive(2_500), Overtime)
            .with_condition(Some(14), None),
        Trigger::new(ids::DAILY_LOGIN_30, "30 Day Login Streak", Additive(5_000), Overtime)
            .with_condition(Some(30), None),
        // Overtime multipliers
        Trigger::new(ids::WEEKEND_BONUS, "Weekend Warrior", Multiplicative(1.5), Overtime)
            .with_condition(None, Some(2)),
        Trigger::new(
            ids::CONSISTENT_PLAYER,
            "Consistent Player",
            Multiplicative(1.2),
            Overtime,
        )
        .with_condition(Some(5), Some(7)),
    ]
}
