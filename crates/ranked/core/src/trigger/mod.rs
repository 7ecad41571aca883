//! XP triggers: named rules that either add flat XP or scale match XP.
//!
//! Triggers are immutable reference data. The award engine consults them by
//! id through the [`TriggerOracle`] seam, so callers can swap the built-in
//! catalog for one loaded from data files without touching the engine.

pub mod catalog;

pub use catalog::{TriggerCatalog, builtin_triggers};

/// Well-known trigger ids consulted directly by the award engine.
pub mod ids {
    pub const MATCH_WIN: &str = "match_win";
    pub const MATCH_LOSS: &str = "match_loss";
    pub const MATCH_DRAW: &str = "match_draw";
    pub const FIRST_WIN_OF_DAY: &str = "first_win_of_day";

    pub const WIN_STREAK_3: &str = "win_streak_3";
    pub const WIN_STREAK_5: &str = "win_streak_5";
    pub const WIN_STREAK_10: &str = "win_streak_10";
    pub const UNDERDOG_WIN: &str = "underdog_win";

    pub const DAILY_LOGIN_3: &str = "daily_login_3";
    pub const DAILY_LOGIN_7: &str = "daily_login_7";
    pub const DAILY_LOGIN_14: &str = "daily_login_14";
    pub const DAILY_LOGIN_30: &str = "daily_login_30";

    pub const WEEKEND_BONUS: &str = "weekend_bonus";
    pub const CONSISTENT_PLAYER: &str = "consistent_player";
}

/// Lookup of trigger definitions by id.
///
/// Misses are expected (callers pass arbitrary extra ids) and must not be
/// treated as errors.
pub trait TriggerOracle: Send + Sync {
    fn trigger(&self, id: &str) -> Option<&Trigger>;
}

/// How a trigger combines with match XP.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TriggerKind {
    /// Flat XP added to the bonus pool.
    Additive,
    /// Factor applied to base XP.
    Multiplicative,
}

/// When a trigger is evaluated.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TriggerActivation {
    /// Per event.
    Instant,
    /// Against accumulated history (streaks, time windows).
    Overtime,
}

/// Trigger payload. Additive triggers carry whole XP, multiplicative ones a
/// positive factor.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TriggerEffect {
    Additive(u32),
    Multiplicative(f64),
}

impl TriggerEffect {
    pub const fn kind(&self) -> TriggerKind {
        match self {
            Self::Additive(_) => TriggerKind::Additive,
            Self::Multiplicative(_) => TriggerKind::Multiplicative,
        }
    }

    /// Numeric value regardless of kind.
    pub fn value(&self) -> f64 {
        match *self {
            Self::Additive(xp) => xp as f64,
            Self::Multiplicative(factor) => factor,
        }
    }
}

/// History requirement for overtime triggers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TriggerCondition {
    #[cfg_attr(feature = "serde", serde(default))]
    pub count: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub time_window_days: Option<u32>,
}

/// A catalog entry.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trigger {
    pub id: String,
    pub name: String,
    pub effect: TriggerEffect,
    pub activation: TriggerActivation,
    #[cfg_attr(feature = "serde", serde(default))]
    pub condition: Option<TriggerCondition>,
}

impl Trigger {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        effect: TriggerEffect,
        activation: TriggerActivation,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            effect,
            activation,
            condition: None,
        }
    }

    /// Attaches a history requirement (builder pattern).
    #[must_use]
    pub fn with_condition(mut self, count: Option<u32>, time_window_days: Option<u32>) -> Self {
        self.condition = Some(TriggerCondition {
            count,
            time_window_days,
        });
        self
    }

    pub fn kind(&self) -> TriggerKind {
        self.effect.kind()
    }

    pub fn value(&self) -> f64 {
        self.effect.value()
    }
}
