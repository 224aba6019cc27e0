//! Fuzz the full progression pass over an in-memory store: arbitrary
//! trigger sequences against arbitrary starting counters must never
//! panic, never revert an unlock, and never break the leveling
//! invariant.

#![no_main]

use std::sync::Arc;

use libfuzzer_sys::fuzz_target;
use questline::{
    ActivityTrigger, Config, MemoryStore, ProgressStore, ProgressionEngine, StudyDate,
    UserCounters, UserId,
};

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }

    let store = Arc::new(MemoryStore::new());
    let user_id = UserId::new("fuzz");
    let mut user = UserCounters::fresh(user_id.clone(), 500);
    user.total_documents = u64::from(data[0]);
    user.total_quizzes = u64::from(data[1]);
    user.total_flashcards = u64::from(data[2]) * 16;
    user.study_streak = u32::from(data[3]);
    if store.save_user(&user).is_err() {
        return;
    }

    let Ok(engine) = ProgressionEngine::new(Box::new(store.clone()), Config::default()) else {
        return;
    };

    let base = StudyDate::from_ymd(2025, 1, 1).expect("valid date");
    let mut unlocked_so_far = 0;

    for (step, byte) in data[4..].iter().take(64).enumerate() {
        let trigger = match byte % 5 {
            0 => ActivityTrigger::DocumentUploaded,
            1 => ActivityTrigger::FlashcardsGenerated {
                count: u64::from(byte / 5),
            },
            2 => ActivityTrigger::QuizGenerated,
            3 => ActivityTrigger::QuizSubmitted,
            _ => ActivityTrigger::AchievementCheck,
        };
        let today = base.plus_days((byte % 3) as i64 + step as i64);

        let outcome = engine
            .on_activity_at(&user_id, trigger, today)
            .expect("progression pass failed");

        assert!(outcome.level.current_xp < outcome.level.next_level_xp);

        let unlocked = store
            .achievement_records(&user_id, None)
            .expect("store read failed")
            .iter()
            .filter(|r| r.unlocked)
            .count();
        assert!(unlocked >= unlocked_so_far, "an unlock was reverted");
        unlocked_so_far = unlocked;
    }
});
