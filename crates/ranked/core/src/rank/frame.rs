//! Rank update flow and the denormalized profile frame.
//!
//! Callers persist a [`ProgressSnapshot`] per user. After an award, they feed
//! the XP delta through [`apply_xp_change`], store the returned snapshot, and
//! re-render trophy visuals only when [`RankUpdate::position_changed`] is set.

use super::{RankId, RankState};
use crate::config::{ProgressionConfig, Xp};

/// Ornament drawn around a trophy frame for prestige levels.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
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
pub enum PrestigeDecoration {
    #[default]
    None,
    Crown,
    Wings,
    Halo,
    Flames,
    Stars,
}

/// Decoration for a prestige level; levels above 5 keep the level-5 decoration.
pub fn prestige_decoration(level: u8) -> PrestigeDecoration {
    match level {
        0 => PrestigeDecoration::None,
        1 => PrestigeDecoration::Crown,
        2 => PrestigeDecoration::Wings,
        3 => PrestigeDecoration::Halo,
        4 => PrestigeDecoration::Flames,
        _ => PrestigeDecoration::Stars,
    }
}

/// Display state for a user's trophy frame, rebuilt only on rank/grade change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProfileFrame {
    pub rank_id: RankId,
    pub grade_index: u8,
    pub prestige_level: u8,
}

impl ProfileFrame {
    pub fn new(state: &RankState, prestige_level: u8) -> Self {
        Self {
            rank_id: state.rank_id,
            grade_index: state.grade_index,
            prestige_level,
        }
    }

    /// Five-stop gradient for the frame's rank.
    pub fn metallic(&self) -> [&'static str; 5] {
        self.rank_id.definition().metallic
    }

    pub fn decoration(&self) -> PrestigeDecoration {
        prestige_decoration(self.prestige_level)
    }
}

/// The rank-related fields a caller persists per user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProgressSnapshot {
    pub xp: Xp,
    pub rank_id: RankId,
    pub grade_index: u8,
    pub prestige: u8,
    pub frame: ProfileFrame,
}

impl ProgressSnapshot {
    /// Builds a consistent snapshot for an XP total (e.g. at account creation).
    pub fn new(config: &ProgressionConfig, xp: Xp, prestige: u8) -> Self {
        let xp = xp.min(config.max_xp());
        let state = config.rank_state(xp);
        Self {
            xp,
            rank_id: state.rank_id,
            grade_index: state.grade_index,
            prestige,
            frame: ProfileFrame::new(&state, prestige),
        }
    }
}

/// Outcome of applying an XP delta to a snapshot.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankUpdate {
    pub previous: ProgressSnapshot,
    pub snapshot: ProgressSnapshot,
    pub state: RankState,
    pub rank_changed: bool,
    pub grade_changed: bool,
}

impl RankUpdate {
    /// True if either rank or grade moved; the frame was rebuilt.
    pub fn position_changed(&self) -> bool {
        self.rank_changed || self.grade_changed
    }

    /// True if the user moved up the ladder.
    pub fn promoted(&self) -> bool {
        (self.snapshot.rank_id, self.snapshot.grade_index)
            > (self.previous.rank_id, self.previous.grade_index)
    }

    /// XP actually added after flooring at 0 and clamping at the cap.
    pub fn xp_gained(&self) -> i64 {
        self.snapshot.xp as i64 - self.previous.xp as i64
    }
}

impl ProgressionConfig {
    /// Adds `delta` to the snapshot's XP (floored at 0, clamped to the cap),
    /// recomputes the rank state, and rebuilds the frame only if rank or grade
    /// changed.
    pub fn apply_xp_change(&self, current: &ProgressSnapshot, delta: i64) -> RankUpdate {
        let xp = if delta >= 0 {
            current.xp.saturating_add(delta.unsigned_abs())
        } else {
            current.xp.saturating_sub(delta.unsigned_abs())
        }
        .min(self.max_xp());

        let state = self.rank_state(xp);
        let rank_changed = current.rank_id != state.rank_id;
        let grade_changed = current.grade_index != state.grade_index;

        let frame = if rank_changed || grade_changed {
            ProfileFrame::new(&state, current.prestige)
        } else {
            current.frame
        };

        RankUpdate {
            previous: *current,
            snapshot: ProgressSnapshot {
                xp,
                rank_id: state.rank_id,
                grade_index: state.grade_index,
                prestige: current.prestige,
                frame,
            },
            state,
            rank_changed,
            grade_changed,
        }
    }
}

/// [`ProgressionConfig::apply_xp_change`] on the default ladder.
pub fn apply_xp_change(current: &ProgressSnapshot, delta: i64) -> RankUpdate {
    ProgressionConfig::DEFAULT.apply_xp_change(current, delta)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(xp: Xp) -> ProgressSnapshot {
        ProgressSnapshot::new(&ProgressionConfig::DEFAULT, xp, 1)
    }

    #[test]
    fn decoration_by_level() {
        assert_eq!(prestige_decoration(0), PrestigeDecoration::None);
        assert_eq!(prestige_decoration(3), PrestigeDecoration::Halo);
        assert_eq!(prestige_decoration(5), PrestigeDecoration::Stars);
        assert_eq!(prestige_decoration(40), PrestigeDecoration::Stars);
    }

    #[test]
    fn frame_kept_when_position_unchanged() {
        let mut current = snapshot(10_000);
        // Stale prestige in the stored frame proves it was not rebuilt.
        current.frame.prestige_level = 0;

        let update = apply_xp_change(&current, 100);
        assert!(!update.position_changed());
        assert_eq!(update.snapshot.xp, 10_100);
        assert_eq!(update.snapshot.frame, current.frame);
    }

    #[test]
    fn frame_rebuilt_on_grade_change() {
        let current = snapshot(9_950);
        let update = apply_xp_change(&current, 100);

        assert!(update.grade_changed);
        assert!(!update.rank_changed);
        assert!(update.promoted());
        assert_eq!(update.snapshot.grade_index, 2);
        assert_eq!(update.snapshot.frame.grade_index, 2);
        assert_eq!(update.snapshot.frame.prestige_level, 1);
    }

    #[test]
    fn rank_up_changes_metallic() {
        let current = snapshot(44_900);
        let update = apply_xp_change(&current, 350);

        assert!(update.rank_changed);
        assert_eq!(update.snapshot.rank_id, RankId::Silver);
        assert_eq!(update.snapshot.frame.metallic()[1], "#C0C0C0");
    }

    #[test]
    fn negative_delta_floors_at_zero() {
        let current = snapshot(300);
        let update = apply_xp_change(&current, -1_000);
        assert_eq!(update.snapshot.xp, 0);
        assert_eq!(update.xp_gained(), -300);
        assert!(!update.promoted());
    }

    #[test]
    fn gain_is_clamped_at_cap() {
        let current = snapshot(ProgressionConfig::MAX_XP - 50);
        let update = apply_xp_change(&current, 1_000);
        assert_eq!(update.snapshot.xp, ProgressionConfig::MAX_XP);
        assert_eq!(update.xp_gained(), 50);
        assert!(update.state.is_max());
    }
}
