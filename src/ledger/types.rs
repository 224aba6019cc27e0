//! Data types for per-user achievement records.
//!
//! An **achievement record** is the mutable, per-user projection of one
//! catalog definition. Records are created lazily when a tier is
//! materialized and only ever move forward: `Locked` to `InProgress` to
//! `Unlocked`, never back.

use serde::{Deserialize, Serialize};

use crate::catalog::Tier;
use crate::types::{AchievementId, Timestamp, UserId};

/// Lifecycle status of a per-user achievement record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AchievementStatus {
    /// No progress yet toward the target.
    Locked,

    /// Some progress, target not reached.
    InProgress,

    /// Target reached. Terminal: a record never leaves this status.
    Unlocked,
}

/// A per-user achievement record, one row per (user, definition) pair.
///
/// The record denormalizes `tier` and `target` from its definition so the
/// reporting surface can render without a catalog join, and so records
/// stay meaningful if a definition is later retired from the catalog.
///
/// # Lifecycle
///
/// Created by tier materialization with `progress` and `unlocked`
/// computed from the counter snapshot at that moment (a user who already
/// qualifies is created unlocked, not in-progress). `unlocked` and
/// `unlocked_at` are set exactly once, on the transition to
/// [`AchievementStatus::Unlocked`], and never revert. Records are only
/// deleted when the whole account is deleted, which is the store's
/// responsibility.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementRecord {
    /// The user this record belongs to.
    pub user_id: UserId,

    /// The catalog definition this record projects.
    pub achievement_id: AchievementId,

    /// The definition's tier, denormalized.
    pub tier: Tier,

    /// True while the record's tier gate is closed. Materialized records
    /// carry `false`; the recompute pass skips any record still flagged.
    pub tier_locked: bool,

    /// Lifecycle status.
    pub status: AchievementStatus,

    /// Progress toward the target, 0..=100. Always 100 once unlocked.
    pub progress: u8,

    /// The definition's target, denormalized.
    pub target: u64,

    /// Whether the achievement has been unlocked.
    pub unlocked: bool,

    /// When the unlock happened, if it has.
    pub unlocked_at: Option<Timestamp>,
}

impl AchievementRecord {
    /// Returns true if this record has reached its terminal status.
    #[inline]
    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> AchievementRecord {
        AchievementRecord {
            user_id: UserId::new("u1"),
            achievement_id: AchievementId::from("first-document"),
            tier: Tier::FIRST,
            tier_locked: false,
            status: AchievementStatus::InProgress,
            progress: 40,
            target: 5,
            unlocked: false,
            unlocked_at: None,
        }
    }

    #[test]
    fn test_status_serializes_kebab_case() {
        let json = serde_json::to_string(&AchievementStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
        let json = serde_json::to_string(&AchievementStatus::Unlocked).unwrap();
        assert_eq!(json, "\"unlocked\"");
    }

    #[test]
    fn test_record_serde_roundtrip() {
        let rec = record();
        let json = serde_json::to_string(&rec).unwrap();
        let restored: AchievementRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(rec, restored);
    }

    #[test]
    fn test_is_unlocked() {
        let mut rec = record();
        assert!(!rec.is_unlocked());
        rec.unlocked = true;
        rec.status = AchievementStatus::Unlocked;
        assert!(rec.is_unlocked());
    }
}
