//! Benchmarks for the progression hot paths.
//!
//! Run with: `cargo bench`
//!
//! The interesting numbers are the steady-state `on_activity` pass (one
//! recompute over a materialized tier) and the worst case (a maxed user
//! cascading through all five tiers in one call).

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use questline::{
    ActivityTrigger, Config, LevelCurve, LevelState, MemoryStore, ProgressStore,
    ProgressionEngine, StudyDate, UserCounters, UserId,
};

fn day() -> StudyDate {
    StudyDate::from_ymd(2025, 6, 1).unwrap()
}

fn engine_with_user(user: UserCounters) -> (ProgressionEngine, UserId) {
    let store = Arc::new(MemoryStore::new());
    let user_id = user.user_id.clone();
    store.save_user(&user).unwrap();
    let engine = ProgressionEngine::new(Box::new(store), Config::default()).unwrap();
    (engine, user_id)
}

fn bench_apply_xp(c: &mut Criterion) {
    let curve = LevelCurve::new(500, 1.5);

    c.bench_function("apply_xp_no_level_up", |b| {
        let state = LevelState::fresh(500);
        b.iter(|| curve.apply(black_box(state), black_box(100)))
    });

    c.bench_function("apply_xp_ten_level_cascade", |b| {
        let state = LevelState::fresh(500);
        b.iter(|| curve.apply(black_box(state), black_box(100_000)))
    });
}

fn bench_on_activity(c: &mut Criterion) {
    c.bench_function("on_activity_steady_state", |b| {
        // Tier 1 materialized on the warm-up call; every iteration is a
        // same-day recompute with no unlocks
        let (engine, user_id) = engine_with_user(UserCounters::fresh(UserId::new("bench"), 500));
        engine
            .on_activity_at(&user_id, ActivityTrigger::AchievementCheck, day())
            .unwrap();

        b.iter(|| {
            engine
                .on_activity_at(&user_id, ActivityTrigger::QuizSubmitted, day())
                .unwrap()
        })
    });

    c.bench_function("on_activity_full_cascade", |b| {
        // Worst case: 75 unlocks and 5 materializations in one call
        let mut maxed = UserCounters::fresh(UserId::new("maxed"), 500);
        maxed.total_documents = 10_000;
        maxed.total_quizzes = 10_000;
        maxed.total_flashcards = 10_000;
        maxed.study_streak = 500;
        maxed.level = LevelState {
            current_level: 40,
            total_xp: 1_000_000,
            current_xp: 0,
            next_level_xp: 100_000,
        };

        b.iter_batched(
            || {
                let store = Arc::new(MemoryStore::new());
                store.save_user(&maxed).unwrap();
                let engine =
                    ProgressionEngine::new(Box::new(store), Config::default()).unwrap();
                engine
            },
            |engine| {
                engine
                    .on_activity_at(
                        &UserId::new("maxed"),
                        ActivityTrigger::AchievementCheck,
                        day(),
                    )
                    .unwrap()
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_apply_xp, bench_on_activity);
criterion_main!(benches);
