//! Progression engine: the orchestrator tying streaks, the ledger, and
//! the leveling curve together.
//!
//! [`ProgressionEngine`] is the primary interface of the crate. It owns
//! no durable state: every call loads a user snapshot through the
//! [`ProgressStore`], runs the pure progression rules, and hands the
//! mutated snapshot back for persistence.
//!
//! # Quick Start
//!
//! ```rust
//! use questline::{
//!     ActivityTrigger, Config, MemoryStore, ProgressionEngine, UserCounters, UserId,
//! };
//!
//! # fn main() -> questline::Result<()> {
//! let store = MemoryStore::new();
//! let user_id = UserId::new("user-1");
//! let config = Config::default();
//!
//! // The host application owns account creation
//! use questline::store::ProgressStore;
//! store.save_user(&UserCounters::fresh(user_id.clone(), config.base_level_xp))?;
//!
//! let engine = ProgressionEngine::new(Box::new(store), config)?;
//! let outcome = engine.on_activity(&user_id, ActivityTrigger::DocumentUploaded)?;
//!
//! // First upload unlocks the tier-1 "First Pages" achievement
//! assert_eq!(outcome.unlocked[0].achievement_id.as_str(), "first-document");
//! # Ok(())
//! # }
//! ```
//!
//! # Tier state machine
//!
//! Per user, each tier is in one of three states, derived from its
//! records: `NotMaterialized` (gate closed), `InProgress`, or `Complete`
//! (terminal). Tier 1 materializes on first access; tier N+1 only once
//! all 15 tier-N achievements are unlocked. Completion cascades within a
//! single call: a user whose counters already satisfy everything walks
//! the whole ladder at once.
//!
//! # Failure atomicity
//!
//! Persistence order is records, then user, then feed entries. A failure
//! mid-sequence can lose XP or feed entries, never apply XP without its
//! unlock record. The caller retries by replaying the whole
//! [`on_activity`](ProgressionEngine::on_activity) call; already-unlocked
//! records make the replay a no-op.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::account::{self, CounterDelta, UserCounters};
use crate::activity::{self, ActivityEntry};
use crate::catalog::{Catalog, Tier, TIER_SIZE};
use crate::config::Config;
use crate::error::{NotFoundError, Result};
use crate::ledger::{self, AchievementRecord};
use crate::leveling::{LevelCurve, LevelState};
use crate::report::{AchievementFilter, AchievementView, ProgressSummary, TierState, TierStatus};
use crate::store::ProgressStore;
use crate::streak::{self, StreakTransition, StreakUpdate};
use crate::types::{AchievementId, StudyDate, Timestamp, UserId};

// ============================================================================
// Triggers and outcomes
// ============================================================================

/// An external event that drives progression.
///
/// The host application calls
/// [`on_activity`](ProgressionEngine::on_activity) with the matching
/// trigger after the primary action (upload, generation, submission) has
/// succeeded. Each trigger maps to a counter delta and a
/// streak-qualification flag; quiz *generation* counts toward the quiz
/// total but only quiz *submission* counts as study for the streak.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityTrigger {
    /// A document upload completed.
    DocumentUploaded,

    /// A flashcard batch of `count` cards was generated.
    FlashcardsGenerated {
        /// Number of cards in the batch.
        count: u64,
    },

    /// A quiz was generated.
    QuizGenerated,

    /// A quiz was submitted (completed).
    QuizSubmitted,

    /// Explicit "check achievements" request; no counters change.
    AchievementCheck,
}

impl ActivityTrigger {
    /// The counter delta this trigger applies.
    pub fn delta(&self) -> CounterDelta {
        match self {
            ActivityTrigger::DocumentUploaded => CounterDelta::documents(1),
            ActivityTrigger::FlashcardsGenerated { count } => CounterDelta::flashcards(*count),
            ActivityTrigger::QuizGenerated => CounterDelta::quizzes(1),
            ActivityTrigger::QuizSubmitted => CounterDelta::NONE,
            ActivityTrigger::AchievementCheck => CounterDelta::NONE,
        }
    }

    /// Whether this trigger counts as study for the streak.
    pub fn qualifies_for_streak(&self) -> bool {
        matches!(
            self,
            ActivityTrigger::DocumentUploaded
                | ActivityTrigger::FlashcardsGenerated { .. }
                | ActivityTrigger::QuizSubmitted
        )
    }
}

/// One achievement unlocked by a progression pass.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UnlockedAchievement {
    /// The definition that unlocked.
    pub achievement_id: AchievementId,

    /// Display title, for toasts and logs.
    pub title: String,

    /// The definition's tier.
    pub tier: Tier,

    /// XP this unlock awarded.
    pub xp_reward: u32,
}

/// Everything one [`on_activity`](ProgressionEngine::on_activity) call
/// changed, returned for the caller to report.
#[derive(Clone, Debug, Serialize)]
pub struct ProgressionOutcome {
    /// Newly unlocked achievements, in unlock order.
    pub unlocked: Vec<UnlockedAchievement>,

    /// Level state after all XP awards.
    pub level: LevelState,

    /// Level-ups produced by this call.
    pub levels_gained: u32,

    /// Total XP awarded by this call.
    pub xp_awarded: u64,

    /// Streak change, if the trigger was streak-qualifying.
    pub streak: Option<StreakUpdate>,
}

// ============================================================================
// ProgressionEngine
// ============================================================================

/// The progression engine handle.
///
/// Owns the store collaborator, the immutable achievement [`Catalog`],
/// and a validated [`Config`]. `Send + Sync`; share it behind an `Arc`
/// in a server.
pub struct ProgressionEngine {
    store: Box<dyn ProgressStore>,
    catalog: Catalog,
    config: Config,
    curve: LevelCurve,
}

impl std::fmt::Debug for ProgressionEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressionEngine")
            .field("config", &self.config)
            .field("catalog_size", &self.catalog.len())
            .finish_non_exhaustive()
    }
}

/// Working state of one `on_activity` pass; everything here is in-memory
/// until the persistence step at the end.
struct ActivityPass {
    user: UserCounters,
    feed: Vec<ActivityEntry>,
    unlocked: Vec<UnlockedAchievement>,
    xp_awarded: u64,
    levels_gained: u32,
}

impl ProgressionEngine {
    /// Creates an engine with the standard 75-achievement ladder.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid (see
    /// [`Config::validate`]) or the built-in catalog fails validation.
    pub fn new(store: Box<dyn ProgressStore>, config: Config) -> Result<Self> {
        Self::with_catalog(store, config, Catalog::standard()?)
    }

    /// Creates an engine with a custom (already validated) catalog.
    ///
    /// Use this to ship a different ladder; the catalog still has to be
    /// 5 tiers of 15 (see [`Catalog::new`]).
    pub fn with_catalog(
        store: Box<dyn ProgressStore>,
        config: Config,
        catalog: Catalog,
    ) -> Result<Self> {
        config.validate()?;
        let curve = config.curve();

        info!(
            catalog_size = catalog.len(),
            base_level_xp = config.base_level_xp,
            "Progression engine ready"
        );

        Ok(Self {
            store,
            catalog,
            config,
            curve,
        })
    }

    /// Returns a reference to the engine configuration.
    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns a reference to the achievement catalog.
    #[inline]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    // =========================================================================
    // Progression
    // =========================================================================

    /// Records a qualifying activity for a user and runs the full
    /// progression pass, using today's date (UTC) for streak arithmetic.
    ///
    /// See [`on_activity_at`](Self::on_activity_at) for the pass
    /// structure and error behavior.
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub fn on_activity(
        &self,
        user_id: &UserId,
        trigger: ActivityTrigger,
    ) -> Result<ProgressionOutcome> {
        self.on_activity_at(user_id, trigger, StudyDate::today())
    }

    /// Records a qualifying activity with an explicit "today".
    ///
    /// The pass, in order:
    /// 1. load and validate the user's counter snapshot
    /// 2. apply the trigger's counter delta
    /// 3. update the streak if the trigger qualifies as study
    /// 4. walk materialized tiers in ascending order, recomputing the
    ///    ledger; every unlock feeds its XP through the leveling curve
    ///    and emits a feed entry
    /// 5. when a tier completes, materialize the next one from the
    ///    current snapshot (completion cascades)
    /// 6. persist records, then the user, then feed entries
    ///
    /// # Errors
    ///
    /// - [`NotFoundError::User`] if the user does not exist (nothing is
    ///   written)
    /// - [`ValidationError`](crate::ValidationError) if the stored
    ///   snapshot is malformed (nothing is written)
    /// - any store failure, propagated unmodified; replay the whole call
    ///   to retry
    #[instrument(skip(self), fields(user_id = %user_id, today = %today))]
    pub fn on_activity_at(
        &self,
        user_id: &UserId,
        trigger: ActivityTrigger,
        today: StudyDate,
    ) -> Result<ProgressionOutcome> {
        let now = Timestamp::now();

        let mut user = self
            .store
            .get_user(user_id)?
            .ok_or_else(|| NotFoundError::user(user_id))?;
        account::validate_counters(&user)?;

        user.apply_delta(&trigger.delta());

        let mut pass = ActivityPass {
            user,
            feed: Vec::new(),
            unlocked: Vec::new(),
            xp_awarded: 0,
            levels_gained: 0,
        };

        let streak_update = if trigger.qualifies_for_streak() {
            let update = streak::update(pass.user.last_study_date, today, pass.user.study_streak);
            pass.user.study_streak = update.streak;
            pass.user.last_study_date = Some(update.last_study_date);

            let advanced = matches!(
                update.transition,
                StreakTransition::Started | StreakTransition::Incremented
            );
            if advanced && streak::is_milestone(update.streak) {
                pass.feed
                    .push(activity::streak_milestone(user_id, update.streak, now));
            }
            Some(update)
        } else {
            None
        };

        let mut records = self.store.achievement_records(user_id, None)?;
        let mut to_insert: Vec<AchievementRecord> = Vec::new();
        let mut to_save: Vec<AchievementRecord> = Vec::new();

        let mut tier = Tier::FIRST;
        loop {
            if !ledger::is_tier_materialized(&records, tier) {
                // Tier 1 has no gate; later tiers need the previous tier
                // fully unlocked
                let gate_open = tier
                    .previous()
                    .map_or(true, |prev| ledger::is_tier_complete(&records, prev));
                if !gate_open {
                    break;
                }

                let created = ledger::materialize_tier(&self.catalog, &pass.user, tier, now);
                let born_unlocked: Vec<AchievementRecord> =
                    created.iter().filter(|r| r.unlocked).cloned().collect();
                self.award_unlocks(&mut pass, &born_unlocked, now);
                debug!(tier = %tier, created = created.len(), "Tier materialized");

                to_insert.extend(created.iter().cloned());
                records.extend(created);
            } else {
                let result = ledger::recompute(&self.catalog, &pass.user, &mut records, tier, now);
                self.award_unlocks(&mut pass, &result.newly_unlocked, now);
                to_save.extend(result.updated);
            }

            if !ledger::is_tier_complete(&records, tier) {
                break;
            }
            match tier.next() {
                Some(next) => tier = next,
                None => break,
            }
        }

        // Unlock records land before the XP-bearing user write: a failure
        // in between can lose XP, never mint it without its unlock
        if !to_insert.is_empty() {
            self.store.insert_achievement_records(&to_insert)?;
        }
        for record in &to_save {
            self.store.save_achievement_record(record)?;
        }
        self.store.save_user(&pass.user)?;
        for entry in &pass.feed {
            self.store.append_activity(entry)?;
        }

        if !pass.unlocked.is_empty() || pass.levels_gained > 0 {
            info!(
                unlocked = pass.unlocked.len(),
                xp_awarded = pass.xp_awarded,
                levels_gained = pass.levels_gained,
                "Progression pass produced unlocks"
            );
        }

        Ok(ProgressionOutcome {
            unlocked: pass.unlocked,
            level: pass.user.level,
            levels_gained: pass.levels_gained,
            xp_awarded: pass.xp_awarded,
            streak: streak_update,
        })
    }

    /// Feeds a batch of newly unlocked records through the leveling curve
    /// and queues their feed entries.
    fn award_unlocks(&self, pass: &mut ActivityPass, fresh: &[AchievementRecord], now: Timestamp) {
        for record in fresh {
            let Some(def) = self.catalog.get(record.achievement_id.as_str()) else {
                warn!(
                    achievement_id = %record.achievement_id,
                    "Unlocked record references an id missing from the catalog, no XP awarded"
                );
                continue;
            };

            let from_level = pass.user.level.current_level;
            let outcome = self.curve.apply(pass.user.level, u64::from(def.xp_reward));
            pass.user.level = outcome.state;
            pass.xp_awarded += u64::from(def.xp_reward);
            pass.levels_gained += outcome.levels_gained;

            pass.feed
                .push(activity::achievement_unlocked(&pass.user.user_id, def, now));
            if outcome.leveled_up() {
                pass.feed.push(activity::level_up(
                    &pass.user.user_id,
                    from_level,
                    outcome.state.current_level,
                    outcome.xp_awarded,
                    now,
                ));
            }

            pass.unlocked.push(UnlockedAchievement {
                achievement_id: record.achievement_id.clone(),
                title: def.title.to_string(),
                tier: def.tier,
                xp_reward: def.xp_reward,
            });
        }
    }

    // =========================================================================
    // Maintenance
    // =========================================================================

    /// Resets lapsed streaks across all users.
    ///
    /// A streak lapses when the user's last study date is more than
    /// [`Config::streak_expiry_days`] whole days before `today` and the
    /// streak is still positive. Invoked by an external scheduler once
    /// per calendar day; it backstops the update path for users who
    /// never return.
    ///
    /// Returns the number of streaks reset.
    #[instrument(skip(self), fields(today = %today))]
    pub fn expire_streaks(&self, today: StudyDate) -> Result<u32> {
        let mut reset = 0u32;

        for user_id in self.store.list_users()? {
            let Some(mut user) = self.store.get_user(&user_id)? else {
                continue;
            };
            if user.study_streak > 0
                && streak::is_expired(user.last_study_date, today, self.config.streak_expiry_days)
            {
                debug!(
                    user_id = %user_id,
                    streak = user.study_streak,
                    last_study_date = ?user.last_study_date,
                    "Streak expired"
                );
                user.study_streak = 0;
                self.store.save_user(&user)?;
                reset += 1;
            }
        }

        info!(reset, "Streak expiry sweep finished");
        Ok(reset)
    }

    // =========================================================================
    // Reporting surface
    // =========================================================================

    /// The user's full achievement list with progress, in catalog order.
    ///
    /// First access materializes tier 1 (and cascades through any tiers
    /// the user's counters already clear), so this can write through the
    /// store; XP for records born unlocked is awarded exactly as on any
    /// other unlock.
    pub fn achievements(&self, user_id: &UserId) -> Result<Vec<AchievementView>> {
        self.achievements_filtered(user_id, &AchievementFilter::default())
    }

    /// The user's unlocked achievements only, in catalog order.
    pub fn unlocked_achievements(&self, user_id: &UserId) -> Result<Vec<AchievementView>> {
        self.achievements_filtered(user_id, &AchievementFilter::unlocked())
    }

    /// The user's achievement list narrowed by a filter, in catalog order.
    pub fn achievements_filtered(
        &self,
        user_id: &UserId,
        filter: &AchievementFilter,
    ) -> Result<Vec<AchievementView>> {
        let mut records = self.store.achievement_records(user_id, None)?;
        if records.is_empty() {
            // First access: run a no-op progression pass to materialize
            // tier 1 from the current snapshot
            self.on_activity(user_id, ActivityTrigger::AchievementCheck)?;
            records = self.store.achievement_records(user_id, None)?;
        }

        let mut views: Vec<AchievementView> = records
            .into_iter()
            .filter_map(|record| {
                let Some(def) = self.catalog.get(record.achievement_id.as_str()) else {
                    warn!(
                        achievement_id = %record.achievement_id,
                        "Record references an id missing from the catalog, omitted from report"
                    );
                    return None;
                };
                Some(AchievementView {
                    title: def.title.to_string(),
                    description: def.description.to_string(),
                    category: def.category,
                    xp_reward: def.xp_reward,
                    record,
                })
            })
            .filter(|view| filter.matches(view))
            .collect();

        views.sort_by_key(|v| self.catalog.index_of(v.record.achievement_id.as_str()));
        Ok(views)
    }

    /// Per-tier completion status, ascending. Read-only: tiers the user
    /// has never touched report [`TierState::NotMaterialized`].
    pub fn tier_statuses(&self, user_id: &UserId) -> Result<Vec<TierStatus>> {
        if self.store.get_user(user_id)?.is_none() {
            return Err(NotFoundError::user(user_id).into());
        }

        let records = self.store.achievement_records(user_id, None)?;
        Ok(Tier::all()
            .map(|tier| {
                let unlocked = records
                    .iter()
                    .filter(|r| r.tier == tier && r.unlocked)
                    .count();
                let state = if !ledger::is_tier_materialized(&records, tier) {
                    TierState::NotMaterialized
                } else if ledger::is_tier_complete(&records, tier) {
                    TierState::Complete
                } else {
                    TierState::InProgress
                };
                TierStatus {
                    tier,
                    state,
                    unlocked,
                    total: TIER_SIZE,
                }
            })
            .collect())
    }

    /// The user's current level state.
    pub fn level(&self, user_id: &UserId) -> Result<LevelState> {
        let user = self
            .store
            .get_user(user_id)?
            .ok_or_else(|| NotFoundError::user(user_id))?;
        Ok(user.level)
    }

    /// Profile-header summary: level, streak, counters, unlock tally.
    /// Read-only.
    pub fn summary(&self, user_id: &UserId) -> Result<ProgressSummary> {
        let user = self
            .store
            .get_user(user_id)?
            .ok_or_else(|| NotFoundError::user(user_id))?;
        let records = self.store.achievement_records(user_id, None)?;

        Ok(ProgressSummary {
            level: user.level,
            study_streak: user.study_streak,
            last_study_date: user.last_study_date,
            total_documents: user.total_documents,
            total_flashcards: user.total_flashcards,
            total_quizzes: user.total_quizzes,
            unlocked_achievements: records.iter().filter(|r| r.unlocked).count(),
            total_achievements: self.catalog.len(),
        })
    }
}
