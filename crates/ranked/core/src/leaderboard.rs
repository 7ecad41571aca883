//! XP-ordered leaderboard standings.

use crate::config::{ProgressionConfig, Xp};
use crate::rank::RankState;

/// A player as the leaderboard sees them.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LeaderboardEntry {
    pub user_id: String,
    pub xp: Xp,
}

impl LeaderboardEntry {
    pub fn new(user_id: impl Into<String>, xp: Xp) -> Self {
        Self {
            user_id: user_id.into(),
            xp,
        }
    }
}

/// One row of the leaderboard.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Standing<'a> {
    /// 1-based.
    pub position: usize,
    pub entry: &'a LeaderboardEntry,
    pub rank: RankState,
}

impl ProgressionConfig {
    /// Orders entries by XP descending, ties broken by user id ascending.
    pub fn standings<'a>(&self, entries: &'a [LeaderboardEntry]) -> Vec<Standing<'a>> {
        let mut sorted: Vec<&LeaderboardEntry> = entries.iter().collect();
        sorted.sort_by(|a, b| b.xp.cmp(&a.xp).then_with(|| a.user_id.cmp(&b.user_id)));

        sorted
            .into_iter()
            .enumerate()
            .map(|(i, entry)| Standing {
                position: i + 1,
                entry,
                rank: self.rank_state(entry.xp),
            })
            .collect()
    }
}

/// [`ProgressionConfig::standings`] on the default ladder.
pub fn standings(entries: &[LeaderboardEntry]) -> Vec<Standing<'_>> {
    ProgressionConfig::DEFAULT.standings(entries)
}
