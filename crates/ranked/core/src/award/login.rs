//! Login streak bonus.

use super::XpAwardEngine;
use crate::trigger::{TriggerOracle, ids};

/// Login streak tiers, highest first: (threshold, trigger id, default XP).
const LOGIN_TIERS: [(u32, &str, u32); 4] = [
    (30, ids::DAILY_LOGIN_30, 5_000),
    (14, ids::DAILY_LOGIN_14, 2_500),
    (7, ids::DAILY_LOGIN_7, 1_000),
    (3, ids::DAILY_LOGIN_3, 300),
];

impl<O: TriggerOracle + ?Sized> XpAwardEngine<'_, O> {
    /// Flat bonus for the highest login-streak threshold met, or 0 below 3 days.
    /// Tiers do not stack.
    pub fn calculate_login_streak_bonus(&self, consecutive_logins: u32) -> u32 {
        let Some(&(_, id, default)) = LOGIN_TIERS
            .iter()
            .find(|(threshold, _, _)| consecutive_logins >= *threshold)
        else {
            return 0;
        };

        match self.oracle().trigger(id) {
            Some(trigger) => trigger.value().max(0.0) as u32,
            None => {
                tracing::warn!(
                    "Trigger '{}' missing from catalog, using default bonus {}",
                    id,
                    default
                );
                default
            }
        }
    }
}

/// [`XpAwardEngine::calculate_login_streak_bonus`] against the built-in catalog.
pub fn calculate_login_streak_bonus(consecutive_logins: u32) -> u32 {
    XpAwardEngine::builtin().calculate_login_streak_bonus(consecutive_logins)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trigger::TriggerCatalog;

    #[test]
    fn highest_tier_only() {
        assert_eq!(calculate_login_streak_bonus(0), 0);
        assert_eq!(calculate_login_streak_bonus(2), 0);
        assert_eq!(calculate_login_streak_bonus(3), 300);
        assert_eq!(calculate_login_streak_bonus(6), 300);
        assert_eq!(calculate_login_streak_bonus(7), 1_000);
        assert_eq!(calculate_login_streak_bonus(13), 1_000);
        assert_eq!(calculate_login_streak_bonus(14), 2_500);
        assert_eq!(calculate_login_streak_bonus(30), 5_000);
        assert_eq!(calculate_login_streak_bonus(365), 5_000);
    }

    #[test]
    fn defaults_when_catalog_empty() {
        let empty = TriggerCatalog::default();
        let engine = XpAwardEngine::new(&empty);
        assert_eq!(engine.calculate_login_streak_bonus(14), 2_500);
        assert_eq!(engine.calculate_login_streak_bonus(1), 0);
    }
}
