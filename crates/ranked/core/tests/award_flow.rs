use ranked_core::{
    MatchOutcome, ProgressSnapshot, ProgressionConfig, RankId, UserTriggerState, XpAwardEngine,
    apply_xp_change, xp_to_next_rank,
};

const NO_EXTRAS: [&str; 0] = [];

/// Drives a user through a run of matches the way a game server would:
/// award → apply → advance trigger state, one event at a time.
#[test]
fn streak_run_promotes_across_rank_boundary() {
    let config = ProgressionConfig::default();
    let engine = XpAwardEngine::builtin();

    // 600 XP short of Silver, with the daily bonus still available.
    let mut progress = ProgressSnapshot::new(&config, 44_400, 0);
    let mut triggers = UserTriggerState::new(0, 3, true);
    let mut awards = Vec::new();
    let mut rank_changes = 0;

    for outcome in [
        MatchOutcome::Win,
        MatchOutcome::Win,
        MatchOutcome::Win,
        MatchOutcome::Win,
        MatchOutcome::Loss,
    ] {
        let calc = engine.calculate_match_xp(&triggers, outcome, &NO_EXTRAS);
        let update = config.apply_xp_change(&progress, calc.total_xp as i64);

        if update.rank_changed {
            rank_changes += 1;
        }
        awards.push(calc.total_xp);
        progress = update.snapshot;
        triggers = triggers.after_match(outcome);
    }

    // Streak is read before the match is counted, so the fourth win is the
    // first to see a 3-streak. Only the first win gets the daily bonus.
    assert_eq!(awards, [300, 100, 100, 125, 25]);
    assert_eq!(progress.xp, 44_400 + 650);
    assert_eq!(progress.rank_id, RankId::Silver);
    assert_eq!(progress.frame.rank_id, RankId::Silver);
    assert_eq!(rank_changes, 1);

    assert_eq!(triggers.win_streak, 0);
    assert!(!triggers.daily_bonus);
    assert_eq!(triggers.games_played, 5);
}

#[test]
fn documented_scenarios() {
    let engine = XpAwardEngine::builtin();

    let calc = engine.calculate_match_xp(
        &UserTriggerState::new(5, 0, true),
        MatchOutcome::Win,
        &NO_EXTRAS,
    );
    assert_eq!(calc.total_xp, 350);
    assert_eq!(
        calc.applied_trigger_ids,
        ["match_win", "win_streak_5", "first_win_of_day"]
    );

    let loss = engine.calculate_match_xp(
        &UserTriggerState::new(9, 0, true),
        MatchOutcome::Loss,
        &NO_EXTRAS,
    );
    assert_eq!(loss.total_xp, 25);
    assert_eq!(loss.multiplier, 1.0);

    assert_eq!(xp_to_next_rank(ProgressionConfig::MAX_XP), 0);
    assert_eq!(xp_to_next_rank(0), ProgressionConfig::XP_PER_RANK);
}

#[test]
fn login_bonus_feeds_progress() {
    let engine = XpAwardEngine::builtin();
    let mut triggers = UserTriggerState::default();
    let mut progress = ProgressSnapshot::new(&ProgressionConfig::DEFAULT, 0, 0);

    for _ in 0..7 {
        triggers = triggers.after_login(true);
        let bonus = engine.calculate_login_streak_bonus(triggers.consecutive_logins);
        progress = apply_xp_change(&progress, bonus as i64).snapshot;
    }

    // Days 3-6 pay 300 each, day 7 pays 1,000.
    assert_eq!(triggers.consecutive_logins, 7);
    assert_eq!(progress.xp, 4 * 300 + 1_000);
    assert_eq!(progress.grade_index, 0);
}
