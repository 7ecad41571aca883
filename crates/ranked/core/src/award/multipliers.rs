//! Currently-eligible multipliers, for display.
//!
//! This list is informational only. It is not consumed by
//! [`XpAwardEngine::calculate_match_xp`]; in particular the weekend bonus never
//! enters the award pipeline unless the caller passes it as an extra trigger.

use super::{STREAK_TIERS, XpAwardEngine};
use crate::state::UserTriggerState;
use crate::trigger::{TriggerOracle, ids};

/// A multiplier the user is currently eligible for.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActiveMultiplier {
    pub trigger_id: String,
    pub name: String,
    pub value: f64,
}

impl<O: TriggerOracle + ?Sized> XpAwardEngine<'_, O> {
    /// Streak multiplier (highest threshold met) followed by the weekend
    /// bonus when `is_weekend` is set. Triggers missing from the catalog are
    /// left out.
    pub fn get_active_multipliers(
        &self,
        state: &UserTriggerState,
        is_weekend: bool,
    ) -> Vec<ActiveMultiplier> {
        let streak = STREAK_TIERS
            .iter()
            .find(|(threshold, _)| state.win_streak >= *threshold)
            .map(|&(_, id)| id);
        let weekend = is_weekend.then_some(ids::WEEKEND_BONUS);

        streak
            .into_iter()
            .chain(weekend)
            .filter_map(|id| self.oracle().trigger(id))
            .map(|trigger| ActiveMultiplier {
                trigger_id: trigger.id.clone(),
                name: trigger.name.clone(),
                value: trigger.value(),
            })
            .collect()
    }
}

/// [`XpAwardEngine::get_active_multipliers`] against the built-in catalog.
pub fn get_active_multipliers(state: &UserTriggerState, is_weekend: bool) -> Vec<ActiveMultiplier> {
    XpAwardEngine::builtin().get_active_multipliers(state, is_weekend)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::award::MatchOutcome;

    #[test]
    fn nothing_active_by_default() {
        assert!(get_active_multipliers(&UserTriggerState::default(), false).is_empty());
    }

    #[test]
    fn streak_and_weekend() {
        let active = get_active_multipliers(&UserTriggerState::new(11, 0, false), true);
        let names: Vec<_> = active.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["10 Win Streak Bonus", "Weekend Warrior"]);
        assert_eq!(active[0].value, 2.0);
        assert_eq!(active[1].value, 1.5);
    }

    #[test]
    fn only_one_streak_entry() {
        let active = get_active_multipliers(&UserTriggerState::new(6, 0, false), false);
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].trigger_id, "win_streak_5");
    }

    #[test]
    fn weekend_is_not_applied_to_awards() {
        let state = UserTriggerState::new(0, 0, false);
        assert_eq!(get_active_multipliers(&state, true).len(), 1);

        let calc = crate::award::calculate_match_xp(&state, MatchOutcome::Win, &[] as &[&str]);
        assert_eq!(calc.multiplier, 1.0);
        assert!(!calc.was_applied(ids::WEEKEND_BONUS));
    }
}
