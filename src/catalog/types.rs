//! Type definitions for the achievement catalog.
//!
//! An **achievement definition** is an immutable catalog entry: an ID, a
//! display title/description, a [`Category`], a [`Tier`], a numeric
//! target, and an XP reward. The unlock predicate is not a closure: it is
//! always "the category's metric reached the target", with the metric
//! resolved through the exhaustive dispatch in
//! [`Category::current_value`]. This keeps the catalog serializable,
//! testable, and impossible to extend with an unchecked default branch.

use serde::{Deserialize, Serialize};

use crate::account::UserCounters;
use crate::types::AchievementId;

// ============================================================================
// Category
// ============================================================================

/// What kind of activity an achievement measures.
///
/// Each category maps to exactly one metric over the counter snapshot:
///
/// | Category                    | Metric                                    |
/// |-----------------------------|-------------------------------------------|
/// | `Document`                  | `total_documents`                         |
/// | `Quiz`                      | `total_quizzes`                           |
/// | `Flashcard`                 | `total_flashcards`                        |
/// | `Streak`, `Consistency`     | `study_streak`                            |
/// | `Level`                     | `level.current_level`                     |
/// | `Mastery`, `Speed`, `Accuracy` | `activity_total()` (composite proxy)   |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Documents uploaded.
    Document,
    /// Quizzes generated.
    Quiz,
    /// Flashcards generated.
    Flashcard,
    /// Consecutive study days.
    Streak,
    /// Level reached.
    Level,
    /// Overall activity volume (composite).
    Mastery,
    /// Study-habit regularity, measured through the streak.
    Consistency,
    /// Activity pace (composite).
    Speed,
    /// Quality of work (composite).
    Accuracy,
}

impl Category {
    /// The current value of this category's metric for a user.
    ///
    /// The match is exhaustive on purpose: adding a category without
    /// deciding its metric is a compile error, not a silent zero.
    pub fn current_value(&self, user: &UserCounters) -> u64 {
        match self {
            Category::Document => user.total_documents,
            Category::Quiz => user.total_quizzes,
            Category::Flashcard => user.total_flashcards,
            Category::Streak | Category::Consistency => u64::from(user.study_streak),
            Category::Level => u64::from(user.level.current_level),
            Category::Mastery | Category::Speed | Category::Accuracy => user.activity_total(),
        }
    }
}

// ============================================================================
// Tier
// ============================================================================

/// One of the five ordered achievement tiers.
///
/// Tiers unlock progressively: a user's records for tier N+1 are only
/// materialized once every tier-N achievement is unlocked. Serialized as
/// its numeric value (1..=5); deserializing an out-of-range number fails
/// rather than producing an invalid tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Tier(u8);

impl Tier {
    /// The first tier, materialized unconditionally on first access.
    pub const FIRST: Tier = Tier(1);

    /// The last tier; [`Tier::next`] returns `None` here.
    pub const LAST: Tier = Tier(5);

    /// Number of tiers in the ladder.
    pub const COUNT: usize = 5;

    /// All five tiers, in ascending order.
    pub const ALL: [Tier; 5] = [Tier(1), Tier(2), Tier(3), Tier(4), Tier(5)];

    /// Creates a tier from its numeric value, or `None` if out of range.
    pub const fn new(value: u8) -> Option<Tier> {
        if value >= 1 && value <= 5 {
            Some(Tier(value))
        } else {
            None
        }
    }

    /// The tier's numeric value (1..=5).
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// The following tier, or `None` for [`Tier::LAST`].
    pub const fn next(self) -> Option<Tier> {
        Tier::new(self.0 + 1)
    }

    /// The preceding tier, or `None` for [`Tier::FIRST`].
    pub const fn previous(self) -> Option<Tier> {
        if self.0 > 1 {
            Tier::new(self.0 - 1)
        } else {
            None
        }
    }

    /// Iterates all tiers in ascending order.
    pub fn all() -> impl Iterator<Item = Tier> {
        Self::ALL.into_iter()
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for Tier {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Tier::new(value).ok_or_else(|| format!("tier out of range 1..=5: {}", value))
    }
}

impl From<Tier> for u8 {
    fn from(tier: Tier) -> u8 {
        tier.0
    }
}

// ============================================================================
// AchievementDef
// ============================================================================

/// An immutable achievement definition.
///
/// Definitions live in a static table ([`catalog::data`](crate::catalog))
/// and never change at runtime; per-user state lives entirely in
/// [`AchievementRecord`](crate::ledger::AchievementRecord)s that reference
/// definitions by `id`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct AchievementDef {
    /// Stable, globally unique identifier (e.g. `"first-document"`).
    pub id: &'static str,

    /// Display title.
    pub title: &'static str,

    /// Display description ("Upload 5 documents.").
    pub description: &'static str,

    /// Which metric this achievement measures.
    pub category: Category,

    /// Which tier it belongs to.
    pub tier: Tier,

    /// Metric value required to unlock. Always at least 1.
    pub target: u64,

    /// XP awarded on unlock.
    pub xp_reward: u32,
}

impl AchievementDef {
    /// The definition's ID as an owned [`AchievementId`].
    pub fn achievement_id(&self) -> AchievementId {
        AchievementId::from(self.id)
    }

    /// The current value of this achievement's metric for a user.
    #[inline]
    pub fn current_value(&self, user: &UserCounters) -> u64 {
        self.category.current_value(user)
    }

    /// Whether the user's counters satisfy the unlock predicate.
    #[inline]
    pub fn is_satisfied(&self, user: &UserCounters) -> bool {
        self.current_value(user) >= self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UserId;

    fn user() -> UserCounters {
        let mut u = UserCounters::fresh(UserId::new("u1"), 500);
        u.total_documents = 4;
        u.total_quizzes = 10;
        u.total_flashcards = 36;
        u.study_streak = 7;
        u.level.current_level = 3;
        u
    }

    #[test]
    fn test_category_dispatch() {
        let u = user();
        assert_eq!(Category::Document.current_value(&u), 4);
        assert_eq!(Category::Quiz.current_value(&u), 10);
        assert_eq!(Category::Flashcard.current_value(&u), 36);
        assert_eq!(Category::Streak.current_value(&u), 7);
        assert_eq!(Category::Consistency.current_value(&u), 7);
        assert_eq!(Category::Level.current_value(&u), 3);
        // Composite categories all read the same activity sum
        assert_eq!(Category::Mastery.current_value(&u), 50);
        assert_eq!(Category::Speed.current_value(&u), 50);
        assert_eq!(Category::Accuracy.current_value(&u), 50);
    }

    #[test]
    fn test_tier_bounds() {
        assert_eq!(Tier::new(0), None);
        assert_eq!(Tier::new(6), None);
        assert_eq!(Tier::new(3).unwrap().get(), 3);
        assert_eq!(Tier::FIRST.previous(), None);
        assert_eq!(Tier::LAST.next(), None);
        assert_eq!(Tier::FIRST.next(), Tier::new(2));
    }

    #[test]
    fn test_tier_ordering() {
        let tiers: Vec<Tier> = Tier::all().collect();
        assert_eq!(tiers.len(), Tier::COUNT);
        assert!(tiers.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_tier_serde_rejects_out_of_range() {
        let ok: Tier = serde_json::from_str("3").unwrap();
        assert_eq!(ok.get(), 3);
        assert!(serde_json::from_str::<Tier>("9").is_err());
        assert_eq!(serde_json::to_string(&Tier::LAST).unwrap(), "5");
    }

    #[test]
    fn test_def_satisfaction() {
        let def = AchievementDef {
            id: "doc-test",
            title: "Test",
            description: "Upload 5 documents.",
            category: Category::Document,
            tier: Tier::FIRST,
            target: 5,
            xp_reward: 50,
        };
        let mut u = user();
        assert!(!def.is_satisfied(&u));
        u.total_documents = 5;
        assert!(def.is_satisfied(&u));
    }
}
