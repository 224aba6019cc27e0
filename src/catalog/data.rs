//! The standard 75-achievement ladder.
//!
//! Five tiers of fifteen definitions each. Targets and rewards roughly
//! triple from tier to tier; within a tier every category is represented
//! so each unlock wave mixes collection, streak, and level goals.
//!
//! IDs are stable API: per-user records reference them, so renaming an ID
//! orphans existing records. Add new entries or adjust titles freely;
//! never reuse or rename a shipped ID.

use super::types::{AchievementDef, Category, Tier};

const fn def(
    id: &'static str,
    title: &'static str,
    description: &'static str,
    category: Category,
    tier: Tier,
    target: u64,
    xp_reward: u32,
) -> AchievementDef {
    AchievementDef {
        id,
        title,
        description,
        category,
        tier,
        target,
        xp_reward,
    }
}

const T1: Tier = Tier::ALL[0];
const T2: Tier = Tier::ALL[1];
const T3: Tier = Tier::ALL[2];
const T4: Tier = Tier::ALL[3];
const T5: Tier = Tier::ALL[4];

/// The standard ladder: 75 definitions, 15 per tier.
#[rustfmt::skip]
pub const STANDARD: &[AchievementDef] = &[
    // ------------------------------------------------------------------
    // Tier 1 - Foundations
    // ------------------------------------------------------------------
    def("first-document", "First Pages", "Upload your first document.", Category::Document, T1, 1, 25),
    def("growing-shelf", "Growing Shelf", "Upload 5 documents.", Category::Document, T1, 5, 50),
    def("first-quiz", "Pop Quiz", "Generate your first quiz.", Category::Quiz, T1, 1, 25),
    def("quiz-run", "Quiz Run", "Generate 5 quizzes.", Category::Quiz, T1, 5, 50),
    def("card-starter", "Card Starter", "Generate 10 flashcards.", Category::Flashcard, T1, 10, 25),
    def("card-stack", "Card Stack", "Generate 50 flashcards.", Category::Flashcard, T1, 50, 60),
    def("spark", "Spark", "Study 3 days in a row.", Category::Streak, T1, 3, 30),
    def("full-week", "Full Week", "Study 7 days in a row.", Category::Streak, T1, 7, 70),
    def("warming-up", "Warming Up", "Reach level 2.", Category::Level, T1, 2, 40),
    def("finding-a-rhythm", "Finding a Rhythm", "Reach level 3.", Category::Level, T1, 3, 60),
    def("well-rounded", "Well Rounded", "Accumulate 15 study activities.", Category::Mastery, T1, 15, 50),
    def("back-tomorrow", "Back Tomorrow", "Study 2 days in a row.", Category::Consistency, T1, 2, 25),
    def("daily-habit", "Daily Habit", "Keep a 5-day study streak.", Category::Consistency, T1, 5, 50),
    def("quick-start", "Quick Start", "Accumulate 20 study activities.", Category::Speed, T1, 20, 60),
    def("sharp-eye", "Sharp Eye", "Accumulate 25 study activities.", Category::Accuracy, T1, 25, 80),

    // ------------------------------------------------------------------
    // Tier 2 - Momentum
    // ------------------------------------------------------------------
    def("binder", "Binder", "Upload 10 documents.", Category::Document, T2, 10, 75),
    def("small-archive", "Small Archive", "Upload 20 documents.", Category::Document, T2, 20, 100),
    def("quiz-regular", "Quiz Regular", "Generate 10 quizzes.", Category::Quiz, T2, 10, 75),
    def("stacked-quizzes", "Stacked Quizzes", "Generate 20 quizzes.", Category::Quiz, T2, 20, 100),
    def("card-drawer", "Card Drawer", "Generate 100 flashcards.", Category::Flashcard, T2, 100, 90),
    def("card-box", "Card Box", "Generate 200 flashcards.", Category::Flashcard, T2, 200, 120),
    def("ten-day-run", "Ten-Day Run", "Study 10 days in a row.", Category::Streak, T2, 10, 100),
    def("fortnight", "Fortnight", "Study 14 days in a row.", Category::Streak, T2, 14, 140),
    def("climbing", "Climbing", "Reach level 5.", Category::Level, T2, 5, 100),
    def("on-a-roll", "On a Roll", "Reach level 6.", Category::Level, T2, 6, 120),
    def("all-rounder", "All-Rounder", "Accumulate 60 study activities.", Category::Mastery, T2, 60, 110),
    def("twelve-strong", "Twelve Strong", "Keep a 12-day study streak.", Category::Consistency, T2, 12, 120),
    def("steady-hand", "Steady Hand", "Keep a 16-day study streak.", Category::Consistency, T2, 16, 160),
    def("picking-up-pace", "Picking Up the Pace", "Accumulate 80 study activities.", Category::Speed, T2, 80, 120),
    def("keen-eye", "Keen Eye", "Accumulate 100 study activities.", Category::Accuracy, T2, 100, 150),

    // ------------------------------------------------------------------
    // Tier 3 - Dedication
    // ------------------------------------------------------------------
    def("reading-room", "Reading Room", "Upload 35 documents.", Category::Document, T3, 35, 150),
    def("half-century-shelf", "Half-Century Shelf", "Upload 50 documents.", Category::Document, T3, 50, 200),
    def("quiz-adept", "Quiz Adept", "Generate 35 quizzes.", Category::Quiz, T3, 35, 150),
    def("fifty-quizzes", "Fifty Quizzes", "Generate 50 quizzes.", Category::Quiz, T3, 50, 200),
    def("card-cabinet", "Card Cabinet", "Generate 350 flashcards.", Category::Flashcard, T3, 350, 180),
    def("five-hundred-cards", "Five Hundred Cards", "Generate 500 flashcards.", Category::Flashcard, T3, 500, 220),
    def("three-week-streak", "Three Weeks Strong", "Study 21 days in a row.", Category::Streak, T3, 21, 210),
    def("thirty-day-streak", "Thirty Days", "Study 30 days in a row.", Category::Streak, T3, 30, 300),
    def("seasoned", "Seasoned", "Reach level 8.", Category::Level, T3, 8, 200),
    def("double-digits", "Double Digits", "Reach level 10.", Category::Level, T3, 10, 250),
    def("deep-bench", "Deep Bench", "Accumulate 150 study activities.", Category::Mastery, T3, 150, 220),
    def("clockwork", "Clockwork", "Keep a 25-day study streak.", Category::Consistency, T3, 25, 250),
    def("five-week-habit", "Five-Week Habit", "Keep a 35-day study streak.", Category::Consistency, T3, 35, 300),
    def("cruising-speed", "Cruising Speed", "Accumulate 200 study activities.", Category::Speed, T3, 200, 240),
    def("precision-work", "Precision Work", "Accumulate 250 study activities.", Category::Accuracy, T3, 250, 300),

    // ------------------------------------------------------------------
    // Tier 4 - Expertise
    // ------------------------------------------------------------------
    def("private-library", "Private Library", "Upload 75 documents.", Category::Document, T4, 75, 300),
    def("hundred-documents", "The Hundred", "Upload 100 documents.", Category::Document, T4, 100, 400),
    def("quiz-expert", "Quiz Expert", "Generate 75 quizzes.", Category::Quiz, T4, 75, 300),
    def("hundred-quizzes", "Century of Quizzes", "Generate 100 quizzes.", Category::Quiz, T4, 100, 400),
    def("card-vault", "Card Vault", "Generate 750 flashcards.", Category::Flashcard, T4, 750, 350),
    def("thousand-cards", "A Thousand Cards", "Generate 1000 flashcards.", Category::Flashcard, T4, 1000, 450),
    def("forty-five-days", "Forty-Five Days", "Study 45 days in a row.", Category::Streak, T4, 45, 400),
    def("sixty-day-streak", "Sixty Days", "Study 60 days in a row.", Category::Streak, T4, 60, 500),
    def("accomplished", "Accomplished", "Reach level 13.", Category::Level, T4, 13, 400),
    def("fifteenth-floor", "Fifteenth Floor", "Reach level 15.", Category::Level, T4, 15, 500),
    def("polymath", "Polymath", "Accumulate 400 study activities.", Category::Mastery, T4, 400, 450),
    def("fifty-day-habit", "Fifty-Day Habit", "Keep a 50-day study streak.", Category::Consistency, T4, 50, 450),
    def("seventy-day-habit", "Seventy-Day Habit", "Keep a 70-day study streak.", Category::Consistency, T4, 70, 550),
    def("high-gear", "High Gear", "Accumulate 500 study activities.", Category::Speed, T4, 500, 480),
    def("surgical", "Surgical", "Accumulate 600 study activities.", Category::Accuracy, T4, 600, 600),

    // ------------------------------------------------------------------
    // Tier 5 - Mastery
    // ------------------------------------------------------------------
    def("curator", "Curator", "Upload 150 documents.", Category::Document, T5, 150, 600),
    def("grand-archive", "Grand Archive", "Upload 250 documents.", Category::Document, T5, 250, 800),
    def("quiz-master", "Quiz Master", "Generate 150 quizzes.", Category::Quiz, T5, 150, 600),
    def("quiz-legend", "Quiz Legend", "Generate 250 quizzes.", Category::Quiz, T5, 250, 800),
    def("card-museum", "Card Museum", "Generate 1500 flashcards.", Category::Flashcard, T5, 1500, 700),
    def("card-monument", "Card Monument", "Generate 2500 flashcards.", Category::Flashcard, T5, 2500, 900),
    def("ninety-day-streak", "Ninety Days", "Study 90 days in a row.", Category::Streak, T5, 90, 800),
    def("half-year-streak", "Half a Year", "Study 180 days in a row.", Category::Streak, T5, 180, 1200),
    def("luminary", "Luminary", "Reach level 18.", Category::Level, T5, 18, 800),
    def("summit", "Summit", "Reach level 20.", Category::Level, T5, 20, 1000),
    def("renaissance", "Renaissance", "Accumulate 1000 study activities.", Category::Mastery, T5, 1000, 900),
    def("hundred-day-habit", "Hundred-Day Habit", "Keep a 100-day study streak.", Category::Consistency, T5, 100, 1000),
    def("unbreakable", "Unbreakable", "Keep a 150-day study streak.", Category::Consistency, T5, 150, 1300),
    def("relentless", "Relentless", "Accumulate 1200 study activities.", Category::Speed, T5, 1200, 950),
    def("flawless", "Flawless", "Accumulate 1500 study activities.", Category::Accuracy, T5, 1500, 1500),
];
