//! Deterministic rank progression and XP award rules.
//!
//! `ranked-core` turns an XP total into a rank/grade/progress state and turns a
//! match or login event into an XP delta with a full trigger breakdown. It has
//! no I/O, no clock and no shared mutable state: callers pass a consistent
//! snapshot of user state and persist the results themselves.
//!
//! The usual flow for one event:
//!
//! 1. [`XpAwardEngine::calculate_match_xp`] computes the delta
//! 2. [`ProgressionConfig::apply_xp_change`] adds it and recomputes [`RankState`]
//! 3. [`UserTriggerState::after_match`] advances streaks and flags
pub mod award;
pub mod config;
pub mod error;
pub mod leaderboard;
pub mod rank;
pub mod state;
pub mod trigger;

pub use award::{
    ActiveMultiplier, MatchOutcome, XpAwardEngine, XpCalculation, calculate_login_streak_bonus,
    calculate_match_xp, format_xp, get_active_multipliers,
};
pub use config::{ProgressionConfig, Xp};
pub use error::{CatalogError, ConfigError, ErrorSeverity, RankError, RankedError};
pub use leaderboard::{LeaderboardEntry, Standing, standings};
pub use rank::{
    GradeAsset, GradeDisplay, PrestigeDecoration, ProfileFrame, ProgressSnapshot, RankDefinition,
    RankId, RankState, RankUpdate, apply_xp_change, compute_rank_state, grade_display, grade_name,
    is_max_rank, prestige_decoration, rank_definition, rank_display_name, xp_required_for,
    xp_to_next_grade, xp_to_next_rank,
};
pub use state::UserTriggerState;
pub use trigger::{
    Trigger, TriggerActivation, TriggerCatalog, TriggerCondition, TriggerEffect, TriggerKind,
    TriggerOracle,
};
