//! Data types for activity feed entries.
//!
//! A **feed entry** is an append-only record of something the progression
//! engine did on a user's behalf: an achievement unlock, a level-up, a
//! streak milestone. Entries are an observable side effect only; the
//! engine writes them through the store and never reads them back.

use serde::{Deserialize, Serialize};

use crate::types::{ActivityId, Timestamp, UserId};

/// What kind of progression event a feed entry records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    /// An achievement transitioned to unlocked.
    AchievementUnlocked,

    /// An XP award pushed the user past one or more level thresholds.
    LevelUp,

    /// A streak reached a multiple of
    /// [`MILESTONE_INTERVAL`](crate::streak::MILESTONE_INTERVAL) days.
    StreakMilestone,
}

/// An append-only activity feed entry.
///
/// `metadata` is a free-form JSON payload whose shape depends on `kind`;
/// the constructors in [`activity`](crate::activity) document each shape.
/// Consumers that only render `title`/`description` can ignore it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    /// Unique entry identifier (UUID v7, time-ordered).
    pub id: ActivityId,

    /// The user the event happened to.
    pub user_id: UserId,

    /// Event kind.
    pub kind: ActivityKind,

    /// Short human-readable headline ("Achievement unlocked: Full Week").
    pub title: String,

    /// Longer human-readable description.
    pub description: String,

    /// Kind-specific structured payload.
    pub metadata: serde_json::Value,

    /// When the event happened.
    pub timestamp: Timestamp,
}
