//! XP → rank/grade mapping and its inverse.
//!
//! Boundaries are floor-based: XP exactly on a grade or rank boundary belongs
//! to the higher bucket. The single exception is the global cap, which is
//! clamped into the last grade of the last rank instead of rolling over into
//! a rank that does not exist.

use super::{RankId, RankState};
use crate::config::{ProgressionConfig, Xp};

impl ProgressionConfig {
    /// Computes the rank state for an XP total. Never fails; XP above the cap
    /// is clamped.
    pub fn rank_state(&self, xp_total: Xp) -> RankState {
        let capped = xp_total.min(self.max_xp());
        let xp_per_grade = self.xp_per_grade() as Xp;

        let rank_index = (capped / self.xp_per_rank()).min(self.rank_count() as Xp - 1);
        let xp_in_rank = capped - rank_index * self.xp_per_rank();

        let grade_index = (xp_in_rank / xp_per_grade).min(self.last_grade() as Xp);
        // Bounded by xp_per_grade, which is a u32.
        let xp_in_grade = (xp_in_rank - grade_index * xp_per_grade) as u32;

        let rank_id = RankId::from_index(rank_index as usize).unwrap_or(RankId::TOP);
        let grade_index = grade_index as u8;

        let (xp_to_next_grade, progress_percent) = if self.is_max_rank(rank_id, grade_index) {
            (0, 100.0)
        } else {
            (
                self.xp_per_grade() - xp_in_grade,
                xp_in_grade as f64 / self.xp_per_grade() as f64 * 100.0,
            )
        };

        RankState {
            rank_id,
            grade_index,
            xp_in_current_grade: xp_in_grade,
            xp_to_next_grade,
            progress_percent,
        }
    }

    /// True for the last grade of the last rank on this ladder.
    pub fn is_max_rank(&self, rank_id: RankId, grade_index: u8) -> bool {
        rank_id == self.top_rank() && grade_index == self.last_grade()
    }

    /// XP at which `(rank_id, grade_index)` begins. Grades past the end of a
    /// rank are clamped to its last grade, ranks past the end of the ladder to
    /// its top rank.
    pub fn xp_required_for(&self, rank_id: RankId, grade_index: u8) -> Xp {
        let rank_index = rank_id.index().min(self.top_rank().index()) as Xp;
        let grade_index = grade_index.min(self.last_grade()) as Xp;
        rank_index * self.xp_per_rank() + grade_index * self.xp_per_grade() as Xp
    }

    /// XP still needed to enter grade 0 of the next rank, or 0 at the top rank.
    pub fn xp_to_next_rank(&self, current_xp: Xp) -> Xp {
        let state = self.rank_state(current_xp);
        if state.rank_id >= self.top_rank() {
            return 0;
        }
        let next_rank_xp = (state.rank_id.index() as Xp + 1) * self.xp_per_rank();
        next_rank_xp.saturating_sub(current_xp)
    }
}

/// [`ProgressionConfig::rank_state`] on the default ladder.
pub fn compute_rank_state(xp_total: Xp) -> RankState {
    ProgressionConfig::DEFAULT.rank_state(xp_total)
}

/// [`ProgressionConfig::is_max_rank`] on the default ladder.
pub fn is_max_rank(rank_id: RankId, grade_index: u8) -> bool {
    ProgressionConfig::DEFAULT.is_max_rank(rank_id, grade_index)
}

/// [`ProgressionConfig::xp_required_for`] on the default ladder.
pub fn xp_required_for(rank_id: RankId, grade_index: u8) -> Xp {
    ProgressionConfig::DEFAULT.xp_required_for(rank_id, grade_index)
}

/// [`ProgressionConfig::xp_to_next_rank`] on the default ladder.
pub fn xp_to_next_rank(current_xp: Xp) -> Xp {
    ProgressionConfig::DEFAULT.xp_to_next_rank(current_xp)
}

/// XP still needed for the next grade on the default ladder.
pub fn xp_to_next_grade(current_xp: Xp) -> u32 {
    compute_rank_state(current_xp).xp_to_next_grade
}
