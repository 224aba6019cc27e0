//! Data types for per-user activity counters.
//!
//! The engine never owns durable user state; the Account & Content Store
//! collaborator persists [`UserCounters`] and hands a snapshot into each
//! engine call. All counter fields are unsigned, so negative counts are
//! unrepresentable rather than merely rejected.

use serde::{Deserialize, Serialize};

use crate::leveling::LevelState;
use crate::types::{StudyDate, UserId};

/// A user's cumulative activity counters, streak, and level state.
///
/// This is the *counter snapshot* every unlock predicate is evaluated
/// against. The engine mutates a copy and hands it back to the store for
/// persistence; it never caches one across calls.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCounters {
    /// The user these counters belong to.
    pub user_id: UserId,

    /// Total documents the user has uploaded.
    pub total_documents: u64,

    /// Total flashcards generated for the user.
    pub total_flashcards: u64,

    /// Total quizzes generated for the user.
    pub total_quizzes: u64,

    /// Current consecutive-day study streak.
    pub study_streak: u32,

    /// The last calendar day with qualifying activity, if any.
    pub last_study_date: Option<StudyDate>,

    /// XP and level state.
    pub level: LevelState,
}

impl UserCounters {
    /// Counters for a brand-new user: everything zero, level 1, first
    /// threshold at `base_xp`.
    pub fn fresh(user_id: UserId, base_xp: u64) -> Self {
        Self {
            user_id,
            total_documents: 0,
            total_flashcards: 0,
            total_quizzes: 0,
            study_streak: 0,
            last_study_date: None,
            level: LevelState::fresh(base_xp),
        }
    }

    /// Sum of all three activity counters.
    ///
    /// This is the composite metric behind the mastery, speed, and
    /// accuracy achievement categories.
    pub fn activity_total(&self) -> u64 {
        self.total_documents
            .saturating_add(self.total_flashcards)
            .saturating_add(self.total_quizzes)
    }

    /// Adds a counter delta in place (saturating, cannot go negative).
    pub fn apply_delta(&mut self, delta: &CounterDelta) {
        self.total_documents = self.total_documents.saturating_add(delta.documents);
        self.total_flashcards = self.total_flashcards.saturating_add(delta.flashcards);
        self.total_quizzes = self.total_quizzes.saturating_add(delta.quizzes);
    }
}

/// Increments to apply to a user's activity counters.
///
/// Deltas are additive only; nothing in the progression rules ever
/// decreases a counter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterDelta {
    /// Documents uploaded.
    pub documents: u64,

    /// Flashcards generated.
    pub flashcards: u64,

    /// Quizzes generated.
    pub quizzes: u64,
}

impl CounterDelta {
    /// A delta that changes nothing.
    pub const NONE: CounterDelta = CounterDelta {
        documents: 0,
        flashcards: 0,
        quizzes: 0,
    };

    /// A delta of `n` documents.
    pub const fn documents(n: u64) -> Self {
        CounterDelta {
            documents: n,
            flashcards: 0,
            quizzes: 0,
        }
    }

    /// A delta of `n` flashcards.
    pub const fn flashcards(n: u64) -> Self {
        CounterDelta {
            documents: 0,
            flashcards: n,
            quizzes: 0,
        }
    }

    /// A delta of `n` quizzes.
    pub const fn quizzes(n: u64) -> Self {
        CounterDelta {
            documents: 0,
            flashcards: 0,
            quizzes: n,
        }
    }

    /// Returns true if this delta changes nothing.
    pub const fn is_empty(&self) -> bool {
        self.documents == 0 && self.flashcards == 0 && self.quizzes == 0
    }
}
