//! Rank ladder: tiers, grades, and the XP → rank mapping.
//!
//! ```text
//! [ XP total ]
//!      ↓ clamp to MAX_XP
//! [ RankState ]  rank, grade, progress within grade
//!      ↓ only when rank or grade changed
//! [ ProfileFrame ]  denormalized display state
//! ```
//!
//! The rank state is always recomputed from the XP total, never patched
//! incrementally, so it cannot drift from the stored XP.

pub mod frame;
pub mod grade;
pub mod progression;

pub use frame::{
    PrestigeDecoration, ProfileFrame, ProgressSnapshot, RankUpdate, apply_xp_change,
    prestige_decoration,
};
pub use grade::{GradeAsset, GradeDisplay, grade_display, grade_name, rank_display_name};
pub use progression::{
    compute_rank_state, is_max_rank, xp_required_for, xp_to_next_grade, xp_to_next_rank,
};

use crate::error::RankError;

/// Ordered rank tiers, lowest first.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
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
pub enum RankId {
    #[default]
    Bronze,
    Silver,
    Gold,
    Platinum,
    Diamond,
}

impl RankId {
    /// All ranks in ladder order.
    pub const ALL: [RankId; 5] = [
        RankId::Bronze,
        RankId::Silver,
        RankId::Gold,
        RankId::Platinum,
        RankId::Diamond,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub const TOP: RankId = RankId::Diamond;

    /// 0-based position in the ladder.
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Resolves a persisted rank id.
    ///
    /// Rank ids are a closed set, so a miss here is a configuration bug and is
    /// reported as [`RankError::UnknownRank`] rather than defaulted.
    pub fn parse(id: &str) -> Result<Self, RankError> {
        id.parse()
            .map_err(|_| RankError::UnknownRank(id.to_string()))
    }

    /// The next rank up, if any.
    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// Static display data for this rank.
    pub fn definition(self) -> &'static RankDefinition {
        &RANK_DEFINITIONS[self.index()]
    }
}

/// Display data attached to a rank: name, base color, and the five-stop
/// metallic gradient used for trophy frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RankDefinition {
    pub id: RankId,
    pub name: &'static str,
    pub color: &'static str,
    pub metallic: [&'static str; 5],
}

pub static RANK_DEFINITIONS: [RankDefinition; RankId::COUNT] = [
    RankDefinition {
        id: RankId::Bronze,
        name: "Bronze",
        color: "#CD7F32",
        metallic: ["#8B4513", "#CD7F32", "#DAA520", "#CD7F32", "#8B4513"],
    },
    RankDefinition {
        id: RankId::Silver,
        name: "Silver",
        color: "#C0C0C0",
        metallic: ["#71706E", "#C0C0C0", "#E8E8E8", "#C0C0C0", "#71706E"],
    },
    RankDefinition {
        id: RankId::Gold,
        name: "Gold",
        color: "#FFD700",
        metallic: ["#B8860B", "#FFD700", "#FFFACD", "#FFD700", "#B8860B"],
    },
    RankDefinition {
        id: RankId::Platinum,
        name: "Platinum",
        color: "#E5E4E2",
        metallic: ["#808080", "#E5E4E2", "#FFFFFF", "#E5E4E2", "#808080"],
    },
    RankDefinition {
        id: RankId::Diamond,
        name: "Diamond",
        color: "#B9F2FF",
        metallic: ["#4169E1", "#87CEEB", "#E0FFFF", "#87CEEB", "#4169E1"],
    },
];

/// Looks up rank display data by persisted id string.
pub fn rank_definition(id: &str) -> Result<&'static RankDefinition, RankError> {
    RankId::parse(id).map(RankId::definition)
}

/// Rank, grade and in-grade progress derived from an XP total.
///
/// Never stored; recomputed on every XP change.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankState {
    pub rank_id: RankId,
    /// 0-based grade within the rank.
    pub grade_index: u8,
    pub xp_in_current_grade: u32,
    /// 0 at the top of the ladder.
    pub xp_to_next_grade: u32,
    /// In `[0, 100)`, or exactly 100 at the top of the ladder.
    pub progress_percent: f64,
}

impl RankState {
    /// True if this is the last grade of the last rank.
    pub fn is_max(&self) -> bool {
        self.xp_to_next_grade == 0
    }

    /// `(rank, grade)` pair, ordered the same way XP is.
    pub fn position(&self) -> (RankId, u8) {
        (self.rank_id, self.grade_index)
    }

    /// e.g. `"Gold III"`.
    pub fn display_name(&self) -> String {
        rank_display_name(self.rank_id.definition().name, self.grade_index)
    }
}
