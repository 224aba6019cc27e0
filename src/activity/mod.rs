//! Activity feed module.
//!
//! The engine emits a feed entry for every observable progression event
//! so the host application can render a timeline ("Unlocked Full Week",
//! "Reached level 4"). Entries are write-only from the engine's point of
//! view and are appended through
//! [`ProgressStore::append_activity`](crate::store::ProgressStore::append_activity)
//! after the corresponding state has been persisted.
//!
//! The constructors here own the entry wording and metadata shapes;
//! nothing else in the crate builds an [`ActivityEntry`] by hand.

pub mod types;

pub use types::{ActivityEntry, ActivityKind};

use serde_json::json;

use crate::catalog::AchievementDef;
use crate::types::{ActivityId, Timestamp, UserId};

/// Entry for an achievement unlock.
///
/// Metadata shape:
/// `{ achievement_id, title, category, tier, xp_reward }`.
pub fn achievement_unlocked(
    user_id: &UserId,
    def: &AchievementDef,
    now: Timestamp,
) -> ActivityEntry {
    ActivityEntry {
        id: ActivityId::new(),
        user_id: user_id.clone(),
        kind: ActivityKind::AchievementUnlocked,
        title: format!("Achievement unlocked: {}", def.title),
        description: def.description.to_string(),
        metadata: json!({
            "achievement_id": def.id,
            "title": def.title,
            "category": def.category,
            "tier": def.tier,
            "xp_reward": def.xp_reward,
        }),
        timestamp: now,
    }
}

/// Entry for one or more level-ups from a single XP award.
///
/// Metadata shape: `{ from_level, to_level, xp_awarded }`.
pub fn level_up(
    user_id: &UserId,
    from_level: u32,
    to_level: u32,
    xp_awarded: u64,
    now: Timestamp,
) -> ActivityEntry {
    ActivityEntry {
        id: ActivityId::new(),
        user_id: user_id.clone(),
        kind: ActivityKind::LevelUp,
        title: format!("Level up! Reached level {}", to_level),
        description: format!("Advanced from level {} to level {}.", from_level, to_level),
        metadata: json!({
            "from_level": from_level,
            "to_level": to_level,
            "xp_awarded": xp_awarded,
        }),
        timestamp: now,
    }
}

/// Entry for a streak milestone (every 5th consecutive day).
///
/// Metadata shape: `{ streak }`.
pub fn streak_milestone(user_id: &UserId, streak: u32, now: Timestamp) -> ActivityEntry {
    ActivityEntry {
        id: ActivityId::new(),
        user_id: user_id.clone(),
        kind: ActivityKind::StreakMilestone,
        title: format!("{}-day study streak!", streak),
        description: format!("Studied {} days in a row.", streak),
        metadata: json!({ "streak": streak }),
        timestamp: now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_unlock_entry_carries_definition_metadata() {
        let catalog = Catalog::standard().unwrap();
        let def = catalog.get("full-week").unwrap();
        let entry = achievement_unlocked(
            &UserId::new("u1"),
            def,
            Timestamp::from_millis(1_700_000_000_000),
        );

        assert_eq!(entry.kind, ActivityKind::AchievementUnlocked);
        assert_eq!(entry.title, "Achievement unlocked: Full Week");
        assert_eq!(entry.metadata["achievement_id"], "full-week");
        assert_eq!(entry.metadata["xp_reward"], 70);
        assert_eq!(entry.metadata["tier"], 1);
    }

    #[test]
    fn test_level_up_entry() {
        let entry = level_up(&UserId::new("u1"), 1, 3, 1300, Timestamp::now());
        assert_eq!(entry.kind, ActivityKind::LevelUp);
        assert_eq!(entry.title, "Level up! Reached level 3");
        assert_eq!(entry.metadata["from_level"], 1);
        assert_eq!(entry.metadata["to_level"], 3);
    }

    #[test]
    fn test_streak_milestone_entry() {
        let entry = streak_milestone(&UserId::new("u1"), 10, Timestamp::now());
        assert_eq!(entry.kind, ActivityKind::StreakMilestone);
        assert_eq!(entry.title, "10-day study streak!");
        assert_eq!(entry.metadata["streak"], 10);
    }
}
