//! # questline
//!
//! Progression and achievement engine for learning platforms.
//!
//! questline converts raw study activity (documents uploaded, quizzes
//! taken, flashcards generated) into XP, levels, day-based study streaks,
//! and a 75-achievement ladder unlocked in 5 progressive tiers.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use questline::prelude::*;
//!
//! // The host application owns durable state; MemoryStore is the
//! // in-process reference implementation of that contract
//! let store = MemoryStore::new();
//! store.save_user(&UserCounters::fresh(UserId::new("user-1"), 500))?;
//!
//! let engine = ProgressionEngine::new(Box::new(store), Config::default())?;
//!
//! // Report an activity; the engine updates streak, ledger, and level
//! let outcome = engine.on_activity(
//!     &UserId::new("user-1"),
//!     ActivityTrigger::DocumentUploaded,
//! )?;
//!
//! for unlock in &outcome.unlocked {
//!     println!("unlocked {} (+{} XP)", unlock.title, unlock.xp_reward);
//! }
//! ```
//!
//! ## Key Concepts
//!
//! ### Counter snapshot
//!
//! A user's cumulative activity counters ([`UserCounters`]): document,
//! quiz, and flashcard totals, the study streak, and the XP/level triple.
//! Every unlock predicate is evaluated against the current snapshot, not
//! a history.
//!
//! ### Catalog and ledger
//!
//! The [`Catalog`] is the immutable definition table: 75 achievements in
//! 5 tiers of 15, each a tagged condition "metric reached target". The
//! ledger is its per-user projection: one [`AchievementRecord`] per
//! definition, created lazily per tier and only ever moving forward.
//! Tier N+1 records exist only once all 15 tier-N achievements are
//! unlocked.
//!
//! ### Streaks and levels
//!
//! Streaks count consecutive study days at day granularity; a daily
//! expiry sweep resets streaks of users who never came back. XP from
//! unlocks feeds a geometric leveling curve (threshold times 1.5 per
//! level, floored) that can produce several level-ups from one award.
//!
//! ## I/O Boundary
//!
//! The engine performs no I/O and holds no locks. Durable state lives
//! behind the [`ProgressStore`] trait, implemented by the host
//! application's database layer ([`MemoryStore`] ships for tests and
//! light embedders). Callers serialize concurrent calls per user;
//! different users are fully independent.
//!
//! ## Thread Safety
//!
//! [`ProgressionEngine`] is `Send + Sync` and can be shared across
//! threads using `Arc`.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

// ============================================================================
// Module declarations
// ============================================================================

mod config;
mod engine;
mod error;
mod types;

pub mod store;

// Domain modules
pub mod account;
pub mod activity;
pub mod catalog;
pub mod ledger;
pub mod leveling;
pub mod report;
pub mod streak;

// ============================================================================
// Public API re-exports
// ============================================================================

// Main engine interface
pub use engine::{ActivityTrigger, ProgressionEngine, ProgressionOutcome, UnlockedAchievement};

// Configuration
pub use config::Config;

// Error handling
pub use error::{NotFoundError, ProgressionError, Result, StoreError, ValidationError};

// Core types
pub use types::{AchievementId, ActivityId, StudyDate, Timestamp, UserId};

// Domain types
pub use account::{CounterDelta, UserCounters};
pub use activity::{ActivityEntry, ActivityKind};
pub use catalog::{AchievementDef, Catalog, Category, Tier};
pub use ledger::{AchievementRecord, AchievementStatus};
pub use leveling::{LevelCurve, LevelOutcome, LevelState};
pub use streak::{StreakTransition, StreakUpdate};

// Reporting
pub use report::{AchievementFilter, AchievementView, ProgressSummary, TierState, TierStatus};

// Store (for host integrations)
pub use store::{MemoryStore, ProgressStore};

// ============================================================================
// Prelude module for convenient imports
// ============================================================================

/// Convenient imports for common questline usage.
///
/// ```rust
/// use questline::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::engine::{ActivityTrigger, ProgressionEngine, ProgressionOutcome};
    pub use crate::error::{ProgressionError, Result};
    pub use crate::account::UserCounters;
    pub use crate::store::{MemoryStore, ProgressStore};
    pub use crate::types::{StudyDate, UserId};
}
