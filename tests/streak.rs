//! Integration tests for streak behavior through the engine.
//!
//! The pure calculator rules are covered by unit tests in the `streak`
//! module; these tests drive streaks end-to-end:
//! - consecutive-day increments across `on_activity_at` calls
//! - same-day activities leaving the streak unchanged
//! - gap-breaking on the update path
//! - the daily expiry sweep
//! - milestone feed entries

use std::sync::Arc;

use questline::{
    ActivityTrigger, ActivityKind, Config, MemoryStore, ProgressStore, ProgressionEngine,
    StreakTransition, StudyDate, UserCounters, UserId,
};

fn setup() -> (ProgressionEngine, Arc<MemoryStore>, UserId) {
    let store = Arc::new(MemoryStore::new());
    let user_id = UserId::new("learner");
    store
        .save_user(&UserCounters::fresh(user_id.clone(), 500))
        .unwrap();
    let engine = ProgressionEngine::new(Box::new(store.clone()), Config::default()).unwrap();
    (engine, store, user_id)
}

fn day(n: u64) -> StudyDate {
    StudyDate::from_ymd(2025, 6, 1).unwrap().plus_days(n as i64)
}

// ============================================================================
// Update Path
// ============================================================================

#[test]
fn test_first_activity_starts_streak() {
    let (engine, store, user_id) = setup();

    let outcome = engine
        .on_activity_at(&user_id, ActivityTrigger::DocumentUploaded, day(0))
        .unwrap();

    let streak = outcome.streak.unwrap();
    assert_eq!(streak.streak, 1);
    assert_eq!(streak.transition, StreakTransition::Started);

    let user = store.get_user(&user_id).unwrap().unwrap();
    assert_eq!(user.study_streak, 1);
    assert_eq!(user.last_study_date, Some(day(0)));
}

#[test]
fn test_consecutive_days_increment() {
    let (engine, store, user_id) = setup();

    for n in 0..4 {
        engine
            .on_activity_at(&user_id, ActivityTrigger::QuizSubmitted, day(n))
            .unwrap();
    }

    let user = store.get_user(&user_id).unwrap().unwrap();
    assert_eq!(user.study_streak, 4);
    assert_eq!(user.last_study_date, Some(day(3)));
}

#[test]
fn test_same_day_activities_do_not_inflate() {
    let (engine, store, user_id) = setup();

    for _ in 0..5 {
        let outcome = engine
            .on_activity_at(&user_id, ActivityTrigger::DocumentUploaded, day(0))
            .unwrap();
        assert!(outcome.streak.unwrap().streak <= 1);
    }

    let user = store.get_user(&user_id).unwrap().unwrap();
    assert_eq!(user.study_streak, 1);
}

#[test]
fn test_gap_breaks_streak_on_update_path() {
    let (engine, store, user_id) = setup();

    engine
        .on_activity_at(&user_id, ActivityTrigger::DocumentUploaded, day(0))
        .unwrap();
    engine
        .on_activity_at(&user_id, ActivityTrigger::DocumentUploaded, day(1))
        .unwrap();

    // Two-day gap: day 1 -> day 4
    let outcome = engine
        .on_activity_at(&user_id, ActivityTrigger::DocumentUploaded, day(4))
        .unwrap();
    let streak = outcome.streak.unwrap();
    assert_eq!(streak.transition, StreakTransition::Broken);
    assert_eq!(streak.streak, 1);

    let user = store.get_user(&user_id).unwrap().unwrap();
    assert_eq!(user.study_streak, 1);
    assert_eq!(user.last_study_date, Some(day(4)));
}

#[test]
fn test_non_qualifying_trigger_leaves_streak_alone() {
    let (engine, store, user_id) = setup();

    engine
        .on_activity_at(&user_id, ActivityTrigger::DocumentUploaded, day(0))
        .unwrap();

    // Quiz generation is an AI call, not study
    let outcome = engine
        .on_activity_at(&user_id, ActivityTrigger::QuizGenerated, day(1))
        .unwrap();
    assert!(outcome.streak.is_none());

    let user = store.get_user(&user_id).unwrap().unwrap();
    assert_eq!(user.study_streak, 1);
    assert_eq!(user.last_study_date, Some(day(0)));
}

// ============================================================================
// Milestones
// ============================================================================

#[test]
fn test_milestone_feed_entry_every_fifth_day() {
    let (engine, store, user_id) = setup();

    for n in 0..10 {
        engine
            .on_activity_at(&user_id, ActivityTrigger::QuizSubmitted, day(n))
            .unwrap();
    }

    let milestones: Vec<_> = store
        .activities()
        .into_iter()
        .filter(|e| e.kind == ActivityKind::StreakMilestone)
        .collect();
    assert_eq!(milestones.len(), 2);
    assert_eq!(milestones[0].metadata["streak"], 5);
    assert_eq!(milestones[1].metadata["streak"], 10);
}

#[test]
fn test_same_day_repeat_emits_no_duplicate_milestone() {
    let (engine, store, user_id) = setup();

    for n in 0..5 {
        engine
            .on_activity_at(&user_id, ActivityTrigger::QuizSubmitted, day(n))
            .unwrap();
    }
    // Another activity on the milestone day: streak stays 5, no new entry
    engine
        .on_activity_at(&user_id, ActivityTrigger::QuizSubmitted, day(4))
        .unwrap();

    let milestones = store
        .activities()
        .into_iter()
        .filter(|e| e.kind == ActivityKind::StreakMilestone)
        .count();
    assert_eq!(milestones, 1);
}

// ============================================================================
// Expiry Sweep
// ============================================================================

#[test]
fn test_sweep_resets_lapsed_streaks_only() {
    let store = Arc::new(MemoryStore::new());

    let mut lapsed = UserCounters::fresh(UserId::new("lapsed"), 500);
    lapsed.study_streak = 9;
    lapsed.last_study_date = Some(day(0));
    store.save_user(&lapsed).unwrap();

    let mut active = UserCounters::fresh(UserId::new("active"), 500);
    active.study_streak = 3;
    active.last_study_date = Some(day(8));
    store.save_user(&active).unwrap();

    let engine = ProgressionEngine::new(Box::new(store.clone()), Config::default()).unwrap();

    // Day 10: "lapsed" is 10 days stale, "active" 2 days (still in grace)
    let reset = engine.expire_streaks(day(10)).unwrap();
    assert_eq!(reset, 1);

    assert_eq!(
        store
            .get_user(&UserId::new("lapsed"))
            .unwrap()
            .unwrap()
            .study_streak,
        0
    );
    assert_eq!(
        store
            .get_user(&UserId::new("active"))
            .unwrap()
            .unwrap()
            .study_streak,
        3
    );
}

#[test]
fn test_sweep_skips_zero_streaks_and_fresh_users() {
    let store = Arc::new(MemoryStore::new());

    // Never studied: no last date, nothing to expire
    store
        .save_user(&UserCounters::fresh(UserId::new("fresh"), 500))
        .unwrap();

    // Already reset: stale date but zero streak
    let mut zeroed = UserCounters::fresh(UserId::new("zeroed"), 500);
    zeroed.last_study_date = Some(day(0));
    store.save_user(&zeroed).unwrap();

    let engine = ProgressionEngine::new(Box::new(store.clone()), Config::default()).unwrap();
    assert_eq!(engine.expire_streaks(day(30)).unwrap(), 0);
}

#[test]
fn test_sweep_preserves_last_study_date() {
    let store = Arc::new(MemoryStore::new());
    let mut user = UserCounters::fresh(UserId::new("u1"), 500);
    user.study_streak = 4;
    user.last_study_date = Some(day(0));
    store.save_user(&user).unwrap();

    let engine = ProgressionEngine::new(Box::new(store.clone()), Config::default()).unwrap();
    engine.expire_streaks(day(10)).unwrap();

    let after = store.get_user(&UserId::new("u1")).unwrap().unwrap();
    assert_eq!(after.study_streak, 0);
    // The date survives so a comeback is a Broken transition, not Started
    assert_eq!(after.last_study_date, Some(day(0)));
}
