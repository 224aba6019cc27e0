//! Reporting surface: read-side projections for the API layer.
//!
//! [`AchievementView`] joins a per-user record with its catalog
//! definition so a profile screen can render title, description, and
//! progress in one row. [`AchievementFilter`] narrows a view list the
//! same composable way across queries; fields set to `None` are not
//! filtered on. [`TierStatus`] and [`ProgressSummary`] back the ladder
//! overview and profile header.
//!
//! All of these are produced by [`ProgressionEngine`](crate::ProgressionEngine)
//! query methods; nothing here mutates state.

use serde::{Deserialize, Serialize};

use crate::catalog::{Category, Tier};
use crate::leveling::LevelState;
use crate::ledger::{AchievementRecord, AchievementStatus};
use crate::types::StudyDate;

/// A per-user achievement record joined with its catalog definition.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AchievementView {
    /// The per-user record (status, progress, unlock stamp).
    pub record: AchievementRecord,

    /// Display title from the definition.
    pub title: String,

    /// Display description from the definition.
    pub description: String,

    /// The definition's category.
    pub category: Category,

    /// XP awarded on unlock.
    pub xp_reward: u32,
}

/// Filter criteria for achievement list queries.
///
/// Used by [`ProgressionEngine::achievements_filtered`](crate::ProgressionEngine::achievements_filtered).
/// Fields set to `None` are not filtered on.
///
/// # Example
///
/// ```rust
/// use questline::{AchievementFilter, Tier};
///
/// // Only unlocked tier-1 achievements
/// let filter = AchievementFilter {
///     tier: Some(Tier::FIRST),
///     unlocked_only: true,
///     ..AchievementFilter::default()
/// };
/// ```
#[derive(Clone, Debug, Default)]
pub struct AchievementFilter {
    /// Only include achievements of this tier.
    pub tier: Option<Tier>,

    /// Only include records in one of these statuses.
    ///
    /// `None` means no status filtering. An empty `Some(vec![])` matches
    /// nothing.
    pub statuses: Option<Vec<AchievementStatus>>,

    /// Only include achievements of one of these categories.
    pub categories: Option<Vec<Category>>,

    /// Shorthand for the unlocked-only list (default: `false`).
    pub unlocked_only: bool,
}

impl AchievementFilter {
    /// A filter matching only unlocked achievements.
    pub fn unlocked() -> Self {
        Self {
            unlocked_only: true,
            ..Self::default()
        }
    }

    /// Returns `true` if the given view passes all filter criteria.
    pub fn matches(&self, view: &AchievementView) -> bool {
        if self.unlocked_only && !view.record.unlocked {
            return false;
        }

        if let Some(tier) = self.tier {
            if view.record.tier != tier {
                return false;
            }
        }

        if let Some(ref statuses) = self.statuses {
            if !statuses.contains(&view.record.status) {
                return false;
            }
        }

        if let Some(ref categories) = self.categories {
            if !categories.contains(&view.category) {
                return false;
            }
        }

        true
    }
}

/// Gating state of one tier for one user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TierState {
    /// No records exist yet; the tier's gate has not opened.
    NotMaterialized,

    /// Records exist and at least one is still locked or in progress.
    InProgress,

    /// All 15 records are unlocked. Terminal.
    Complete,
}

/// Per-tier completion status for the ladder overview.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TierStatus {
    /// Which tier.
    pub tier: Tier,

    /// Gating state.
    pub state: TierState,

    /// How many of the tier's achievements are unlocked.
    pub unlocked: usize,

    /// Tier size (always 15; included so clients need no constant).
    pub total: usize,
}

/// Profile-header summary: level, streak, counters, unlock tally.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProgressSummary {
    /// XP and level state.
    pub level: LevelState,

    /// Current consecutive-day streak.
    pub study_streak: u32,

    /// Last day with qualifying activity.
    pub last_study_date: Option<StudyDate>,

    /// Total documents uploaded.
    pub total_documents: u64,

    /// Total flashcards generated.
    pub total_flashcards: u64,

    /// Total quizzes generated.
    pub total_quizzes: u64,

    /// Achievements unlocked across all materialized tiers.
    pub unlocked_achievements: usize,

    /// Size of the full ladder (75).
    pub total_achievements: usize,
}
