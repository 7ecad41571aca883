//! Per-user trigger state.
//!
//! The award engine reads a snapshot of this state; it never mutates it. The
//! caller advances the snapshot once per event with [`UserTriggerState::after_match`]
//! or [`UserTriggerState::after_login`] and is responsible for serializing
//! concurrent events for the same user.

use crate::award::MatchOutcome;

/// Fields that gate trigger eligibility, plus display-only counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserTriggerState {
    /// Consecutive wins; reset to 0 by any non-win.
    pub win_streak: u32,
    pub consecutive_logins: u32,
    /// First win of the day is still available. Reset daily by the caller.
    pub daily_bonus: bool,
    /// Display/badge counter, not read by the award engine.
    pub games_played: u32,
    /// Display/badge counter, not read by the award engine.
    pub perfect_games: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl UserTriggerState {
    pub fn new(win_streak: u32, consecutive_logins: u32, daily_bonus: bool) -> Self {
        Self {
            win_streak,
            consecutive_logins,
            daily_bonus,
            ..Self::default()
        }
    }

    /// State after a match with `outcome` has been awarded.
    ///
    /// A win extends the streak and consumes the first-win-of-day bonus; a loss
    /// or draw breaks the streak.
    #[must_use]
    pub fn after_match(&self, outcome: MatchOutcome) -> Self {
        let mut next = *self;
        next.games_played = next.games_played.saturating_add(1);
        match outcome {
            MatchOutcome::Win => {
                next.wins = next.wins.saturating_add(1);
                next.win_streak = next.win_streak.saturating_add(1);
                next.daily_bonus = false;
            }
            MatchOutcome::Loss => {
                next.losses = next.losses.saturating_add(1);
                next.win_streak = 0;
            }
            MatchOutcome::Draw => {
                next.draws = next.draws.saturating_add(1);
                next.win_streak = 0;
            }
        }
        next
    }

    /// Wins as a rounded percentage of decided games. Draws are ignored; 0
    /// when nothing has been decided yet.
    pub fn win_rate(&self) -> u32 {
        let decided = self.wins as u64 + self.losses as u64;
        if decided == 0 {
            return 0;
        }
        (self.wins as f64 / decided as f64 * 100.0).round() as u32
    }

    pub fn total_games(&self) -> u64 {
        self.wins as u64 + self.losses as u64 + self.draws as u64
    }

    /// State after a login. `continued` is true if the previous login was on
    /// the preceding day.
    #[must_use]
    pub fn after_login(&self, continued: bool) -> Self {
        let mut next = *self;
        next.consecutive_logins = if continued {
            next.consecutive_logins.saturating_add(1)
        } else {
            1
        };
        next
    }

    /// Marks the start of a new day: the first-win bonus becomes available.
    #[must_use]
    pub fn with_daily_reset(&self) -> Self {
        Self {
            daily_bonus: true,
            ..*self
        }
    }

    #[must_use]
    pub fn with_perfect_game(&self) -> Self {
        Self {
            perfect_games: self.perfect_games.saturating_add(1),
            ..*self
        }
    }
}
