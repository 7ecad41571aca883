use crate::error::ConfigError;
use crate::rank::RankId;

/// Experience points. Never negative, never spent.
pub type Xp = u64;

/// Shape of the rank ladder: how many ranks, how many grades per rank, and how
/// much XP each grade spans.
///
/// Fields are private so every instance satisfies the ladder invariants:
/// `xp_per_grade > 0`, `1 <= grades_per_rank <= 9` and `1 <= rank_count <= RankId::COUNT`.
/// Deserialization goes through the same validation as [`ProgressionConfig::new`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "ProgressionConfigSpec", into = "ProgressionConfigSpec")
)]
pub struct ProgressionConfig {
    xp_per_grade: u32,
    grades_per_rank: u8,
    rank_count: u8,
}

impl ProgressionConfig {
    // ===== default ladder =====
    pub const XP_PER_GRADE: u32 = 5_000;
    pub const GRADES_PER_RANK: u8 = 9;
    pub const XP_PER_RANK: Xp = Self::XP_PER_GRADE as Xp * Self::GRADES_PER_RANK as Xp;
    pub const RANK_COUNT: u8 = RankId::COUNT as u8;
    /// Grade symbols exist for nine grades; longer ranks are rejected.
    pub const MAX_GRADES_PER_RANK: u8 = 9;
    /// Global XP cap (225,000 with the default ladder).
    pub const MAX_XP: Xp = Self::XP_PER_RANK * Self::RANK_COUNT as Xp;

    pub const DEFAULT: Self = Self {
        xp_per_grade: Self::XP_PER_GRADE,
        grades_per_rank: Self::GRADES_PER_RANK,
        rank_count: Self::RANK_COUNT,
    };

    /// Creates a validated ladder.
    pub fn new(xp_per_grade: u32, grades_per_rank: u8, rank_count: u8) -> Result<Self, ConfigError> {
        if xp_per_grade == 0 {
            return Err(ConfigError::ZeroXpPerGrade);
        }
        if grades_per_rank == 0 {
            return Err(ConfigError::ZeroGradesPerRank);
        }
        if grades_per_rank > Self::MAX_GRADES_PER_RANK {
            return Err(ConfigError::GradesPerRankOutOfRange {
                actual: grades_per_rank,
                max: Self::MAX_GRADES_PER_RANK,
            });
        }
        if rank_count == 0 || rank_count as usize > RankId::COUNT {
            return Err(ConfigError::RankCountOutOfRange {
                actual: rank_count,
                max: RankId::COUNT as u8,
            });
        }

        Ok(Self {
            xp_per_grade,
            grades_per_rank,
            rank_count,
        })
    }

    pub const fn xp_per_grade(&self) -> u32 {
        self.xp_per_grade
    }

    pub const fn grades_per_rank(&self) -> u8 {
        self.grades_per_rank
    }

    pub const fn rank_count(&self) -> u8 {
        self.rank_count
    }

    /// `xp_per_grade * grades_per_rank`.
    pub const fn xp_per_rank(&self) -> Xp {
        self.xp_per_grade as Xp * self.grades_per_rank as Xp
    }

    /// `xp_per_rank * rank_count`. XP above this is not representable.
    pub const fn max_xp(&self) -> Xp {
        self.xp_per_rank() * self.rank_count as Xp
    }

    /// Index of the last grade within a rank.
    pub const fn last_grade(&self) -> u8 {
        self.grades_per_rank - 1
    }

    /// The highest rank this ladder reaches.
    pub fn top_rank(&self) -> RankId {
        RankId::from_index(self.rank_count as usize - 1).unwrap_or(RankId::TOP)
    }
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Unvalidated wire form of [`ProgressionConfig`].
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct ProgressionConfigSpec {
    xp_per_grade: u32,
    grades_per_rank: u8,
    #[serde(default = "default_rank_count")]
    rank_count: u8,
}

#[cfg(feature = "serde")]
fn default_rank_count() -> u8 {
    ProgressionConfig::RANK_COUNT
}

#[cfg(feature = "serde")]
impl TryFrom<ProgressionConfigSpec> for ProgressionConfig {
    type Error = ConfigError;

    fn try_from(spec: ProgressionConfigSpec) -> Result<Self, Self::Error> {
        Self::new(spec.xp_per_grade, spec.grades_per_rank, spec.rank_count)
    }
}

#[cfg(feature = "serde")]
impl From<ProgressionConfig> for ProgressionConfigSpec {
    fn from(config: ProgressionConfig) -> Self {
        Self {
            xp_per_grade: config.xp_per_grade,
            grades_per_rank: config.grades_per_rank,
            rank_count: config.rank_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_ladder_constants() {
        let config = ProgressionConfig::default();
        assert_eq!(config.xp_per_rank(), 45_000);
        assert_eq!(config.max_xp(), 225_000);
        assert_eq!(ProgressionConfig::MAX_XP, config.max_xp());
        assert_eq!(
            ProgressionConfig::XP_PER_RANK,
            ProgressionConfig::XP_PER_GRADE as Xp * ProgressionConfig::GRADES_PER_RANK as Xp
        );
        assert_eq!(config.top_rank(), RankId::Diamond);
    }

    #[test]
    fn rejects_degenerate_ladders() {
        assert_eq!(
            ProgressionConfig::new(0, 9, 5),
            Err(ConfigError::ZeroXpPerGrade)
        );
        assert_eq!(
            ProgressionConfig::new(100, 0, 5),
            Err(ConfigError::ZeroGradesPerRank)
        );
        assert_eq!(
            ProgressionConfig::new(100, 12, 5),
            Err(ConfigError::GradesPerRankOutOfRange { actual: 12, max: 9 })
        );
        assert!(ProgressionConfig::new(100, 9, 5).is_ok());
        assert!(matches!(
            ProgressionConfig::new(100, 3, 0),
            Err(ConfigError::RankCountOutOfRange { actual: 0, .. })
        ));
        assert!(matches!(
            ProgressionConfig::new(100, 3, 6),
            Err(ConfigError::RankCountOutOfRange { actual: 6, max: 5 })
        ));
    }

    #[test]
    fn shorter_ladder_tops_out_early() {
        let config = ProgressionConfig::new(100, 3, 2).unwrap();
        assert_eq!(config.max_xp(), 600);
        assert_eq!(config.top_rank(), RankId::Silver);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialization_is_validated() {
        let ok: ProgressionConfig =
            serde_json::from_str(r#"{"xp_per_grade":1000,"grades_per_rank":3}"#).unwrap();
        assert_eq!(ok.rank_count(), 5);

        let bad = serde_json::from_str::<ProgressionConfig>(
            r#"{"xp_per_grade":0,"grades_per_rank":3}"#,
        );
        assert!(bad.is_err());

        let too_many_grades = serde_json::from_str::<ProgressionConfig>(
            r#"{"xp_per_grade":100,"grades_per_rank":12}"#,
        );
        assert!(too_many_grades.is_err());
    }
}
