use std::fs;

use ranked_content::{BadgeTier, ContentFactory, TaskCategory};
use ranked_core::{MatchOutcome, RankId, UserTriggerState, XpAwardEngine};

#[test]
fn data_dir_overrides_builtins() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(ContentFactory::CONFIG_FILE),
        "xp_per_grade = 100\ngrades_per_rank = 3\nrank_count = 2\n",
    )
    .unwrap();
    fs::write(
        dir.path().join(ContentFactory::TRIGGERS_FILE),
        r#"(triggers: [
            (id: "match_win", name: "Victory", effect: Additive(40), activation: instant),
            (id: "match_loss", name: "Good Game", effect: Additive(10), activation: instant),
            (id: "first_win_of_day", name: "First Win", effect: Additive(20), activation: instant),
        ])"#,
    )
    .unwrap();

    let content = ContentFactory::new(dir.path()).load_all().unwrap();

    assert_eq!(content.config.max_xp(), 600);
    assert_eq!(content.config.top_rank(), RankId::Silver);
    assert_eq!(content.triggers.len(), 3);
    // tasks.ron and badges.ron are absent.
    assert_eq!(content.tasks.by_category(TaskCategory::Weekly).count(), 3);
    assert_eq!(content.badges.by_tier(BadgeTier::Gold).count(), 4);

    let engine = XpAwardEngine::new(&content.triggers);
    let calc = engine.calculate_match_xp(
        &UserTriggerState::new(4, 0, true),
        MatchOutcome::Win,
        &["win_streak_3"],
    );
    // No streak triggers in this catalog, so only base and first-win apply.
    assert_eq!(calc.total_xp, 60);
    assert_eq!(calc.applied_trigger_ids, ["match_win", "first_win_of_day"]);

    let state = content.config.rank_state(calc.total_xp);
    assert_eq!(state.rank_id, RankId::Bronze);
    assert_eq!(state.xp_to_next_grade, 40);
}

#[test]
fn malformed_file_is_an_error_not_a_fallback() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(ContentFactory::BADGES_FILE), "(badges: [oops").unwrap();

    let factory = ContentFactory::new(dir.path());
    assert!(factory.load_tasks().is_ok());
    let err = factory.load_badges().unwrap_err();
    assert!(err.to_string().contains("badge catalog RON"));
    assert!(factory.load_all().is_err());
}

#[test]
fn invalid_ladder_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(ContentFactory::CONFIG_FILE),
        "xp_per_grade = 5000\ngrades_per_rank = 9\nrank_count = 9\n",
    )
    .unwrap();

    assert!(ContentFactory::new(dir.path()).load_config().is_err());
}
