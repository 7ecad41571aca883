//! XP award calculation with trigger stacking.
//!
//! A match award is assembled in a fixed order, because the multiplier only
//! ever scales base XP and the floor is taken before bonuses are added:
//!
//! ```text
//! base      ← outcome trigger (match_win / match_loss / match_draw)
//! ×         ← one win-streak multiplier, highest threshold met (wins only)
//! +         ← first win of the day (wins only)
//! ±         ← caller-supplied extra triggers, each id at most once
//! total     = floor(base × multiplier) + bonus
//! ```
//!
//! The engine is deterministic: weekday and daily-reset checks are supplied by
//! the caller through [`UserTriggerState`] and explicit flags.

pub mod breakdown;
pub mod login;
pub mod multipliers;

pub use breakdown::format_xp;
pub use login::calculate_login_streak_bonus;
pub use multipliers::{ActiveMultiplier, get_active_multipliers};

use crate::config::Xp;
use crate::state::UserTriggerState;
use crate::trigger::{Trigger, TriggerCatalog, TriggerEffect, TriggerOracle, ids};

/// Result of a finished match.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum MatchOutcome {
    Win,
    Loss,
    Draw,
}

impl MatchOutcome {
    /// Catalog id holding this outcome's base XP.
    pub const fn trigger_id(self) -> &'static str {
        match self {
            Self::Win => ids::MATCH_WIN,
            Self::Loss => ids::MATCH_LOSS,
            Self::Draw => ids::MATCH_DRAW,
        }
    }

    /// Base XP used when the catalog has no entry for this outcome.
    pub const fn default_base_xp(self) -> u32 {
        match self {
            Self::Win => 100,
            Self::Loss => 25,
            Self::Draw => 50,
        }
    }
}

/// Win-streak multipliers, highest threshold first. At most one applies.
const STREAK_TIERS: [(u32, &str); 3] = [
    (10, ids::WIN_STREAK_10),
    (5, ids::WIN_STREAK_5),
    (3, ids::WIN_STREAK_3),
];

/// Full breakdown of a match award.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct XpCalculation {
    pub base_xp: u32,
    pub bonus_xp: Xp,
    pub multiplier: f64,
    pub total_xp: Xp,
    /// Every trigger id that contributed, in application order, no duplicates.
    pub applied_trigger_ids: Vec<String>,
}

impl XpCalculation {
    pub fn was_applied(&self, id: &str) -> bool {
        self.applied_trigger_ids.iter().any(|applied| applied == id)
    }
}

/// Running totals while triggers are applied.
struct Accumulator {
    base_xp: u32,
    bonus_xp: Xp,
    multiplier: f64,
    applied: Vec<String>,
}

impl Accumulator {
    fn new(base_xp: u32, base_id: &str) -> Self {
        Self {
            base_xp,
            bonus_xp: 0,
            multiplier: 1.0,
            applied: vec![base_id.to_string()],
        }
    }

    fn is_applied(&self, id: &str) -> bool {
        self.applied.iter().any(|applied| applied == id)
    }

    fn apply(&mut self, trigger: &Trigger) {
        match trigger.effect {
            TriggerEffect::Additive(xp) => self.bonus_xp += xp as Xp,
            TriggerEffect::Multiplicative(factor) => self.multiplier *= factor,
        }
        self.applied.push(trigger.id.clone());
    }

    fn finish(self) -> XpCalculation {
        // Floor the scaled base before the bonus is added.
        let scaled_base = (self.base_xp as f64 * self.multiplier).floor().max(0.0) as Xp;
        XpCalculation {
            base_xp: self.base_xp,
            bonus_xp: self.bonus_xp,
            multiplier: self.multiplier,
            total_xp: scaled_base + self.bonus_xp,
            applied_trigger_ids: self.applied,
        }
    }
}

/// Computes XP awards against a trigger oracle.
pub struct XpAwardEngine<'a, O: TriggerOracle + ?Sized = TriggerCatalog> {
    oracle: &'a O,
}

impl XpAwardEngine<'static, TriggerCatalog> {
    /// Engine backed by the built-in catalog.
    pub fn builtin() -> Self {
        Self::new(TriggerCatalog::builtin())
    }
}

impl<'a, O: TriggerOracle + ?Sized> XpAwardEngine<'a, O> {
    pub fn new(oracle: &'a O) -> Self {
        Self { oracle }
    }

    pub fn oracle(&self) -> &'a O {
        self.oracle
    }

    /// Computes the XP for a finished match.
    ///
    /// `extra_trigger_ids` are applied after the built-in rules; unknown ids
    /// and ids already applied are skipped.
    pub fn calculate_match_xp<S: AsRef<str>>(
        &self,
        state: &UserTriggerState,
        outcome: MatchOutcome,
        extra_trigger_ids: &[S],
    ) -> XpCalculation {
        let base_id = outcome.trigger_id();
        let base_xp = match self.oracle.trigger(base_id) {
            Some(trigger) => trigger.effect.value().max(0.0) as u32,
            None => {
                tracing::warn!(
                    "Trigger '{}' missing from catalog, using default base XP {}",
                    base_id,
                    outcome.default_base_xp()
                );
                outcome.default_base_xp()
            }
        };
        let mut acc = Accumulator::new(base_xp, base_id);

        if outcome == MatchOutcome::Win {
            if let Some(&(_, streak_id)) = STREAK_TIERS
                .iter()
                .find(|(threshold, _)| state.win_streak >= *threshold)
            {
                self.apply_known(&mut acc, streak_id);
            }

            if state.daily_bonus {
                self.apply_known(&mut acc, ids::FIRST_WIN_OF_DAY);
            }
        }

        for id in extra_trigger_ids {
            let id = id.as_ref();
            if acc.is_applied(id) {
                continue;
            }
            match self.oracle.trigger(id) {
                Some(trigger) => acc.apply(trigger),
                None => tracing::debug!("Ignoring unknown extra trigger '{}'", id),
            }
        }

        let calculation = acc.finish();
        tracing::debug!(
            "Match XP ({}): base={} x{} + {} = {} via {:?}",
            outcome,
            calculation.base_xp,
            calculation.multiplier,
            calculation.bonus_xp,
            calculation.total_xp,
            calculation.applied_trigger_ids
        );
        calculation
    }

    /// Applies a rule-selected trigger, skipping it if the catalog lacks it.
    fn apply_known(&self, acc: &mut Accumulator, id: &str) {
        match self.oracle.trigger(id) {
            Some(trigger) => acc.apply(trigger),
            None => tracing::debug!("Trigger '{}' missing from catalog, skipped", id),
        }
    }
}

/// [`XpAwardEngine::calculate_match_xp`] against the built-in catalog.
pub fn calculate_match_xp<S: AsRef<str>>(
    state: &UserTriggerState,
    outcome: MatchOutcome,
    extra_trigger_ids: &[S],
) -> XpCalculation {
    XpAwardEngine::builtin().calculate_match_xp(state, outcome, extra_trigger_ids)
}
