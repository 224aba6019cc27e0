//! Achievement ledger: the per-user projection of the catalog.
//!
//! Everything here is a pure function over snapshots: records and
//! counters in, updated records and newly unlocked sets out. The engine
//! owns clock access and persistence; the ledger owns the transition
//! rules:
//!
//! - [`materialize_tier`] creates a tier's records from the current
//!   counter snapshot (a user who already qualifies is created unlocked)
//! - [`recompute`] advances progress and performs unlock transitions
//! - [`is_tier_complete`] decides when the next tier's gate opens
//!
//! Unlocks are monotone: a record that reaches
//! [`AchievementStatus::Unlocked`] is never touched again, which is what
//! makes a replayed pass a no-op and the whole engine idempotent under
//! caller retries.

pub mod types;

pub use types::{AchievementRecord, AchievementStatus};

use tracing::{debug, warn};

use crate::account::UserCounters;
use crate::catalog::{Catalog, Tier, TIER_SIZE};
use crate::types::Timestamp;

/// Progress percentage toward a target: `round(min(100, 100 * value / target))`.
///
/// A zero target would be rejected by catalog validation; it is clamped
/// to 100 here so a malformed record cannot divide by zero.
pub fn progress_percent(value: u64, target: u64) -> u8 {
    if target == 0 || value >= target {
        return 100;
    }
    let pct = (value as f64 * 100.0) / (target as f64);
    pct.round().min(100.0) as u8
}

/// Creates one record per catalog definition of `tier`, initialized from
/// the current counter snapshot.
///
/// A definition the user already satisfies produces a record that is
/// *unlocked from birth* (`unlocked_at = now`), not merely in-progress;
/// the caller treats such records as newly unlocked so their XP flows
/// through the same path as any other unlock.
pub fn materialize_tier(
    catalog: &Catalog,
    user: &UserCounters,
    tier: Tier,
    now: Timestamp,
) -> Vec<AchievementRecord> {
    catalog
        .tier(tier)
        .map(|def| {
            let value = def.current_value(user);
            let satisfied = value >= def.target;
            let progress = progress_percent(value, def.target);
            let status = if satisfied {
                AchievementStatus::Unlocked
            } else if progress > 0 {
                AchievementStatus::InProgress
            } else {
                AchievementStatus::Locked
            };

            AchievementRecord {
                user_id: user.user_id.clone(),
                achievement_id: def.achievement_id(),
                tier,
                tier_locked: false,
                status,
                progress: if satisfied { 100 } else { progress },
                target: def.target,
                unlocked: satisfied,
                unlocked_at: satisfied.then_some(now),
            }
        })
        .collect()
}

/// True iff all [`TIER_SIZE`] records of `tier` exist in `records` and
/// every one of them is unlocked.
///
/// This is the only gate for materializing the next tier; there is no
/// special case for the last tier (it too reports complete only at
/// 15/15).
pub fn is_tier_complete(records: &[AchievementRecord], tier: Tier) -> bool {
    let mut count = 0usize;
    for record in records.iter().filter(|r| r.tier == tier) {
        if !record.unlocked {
            return false;
        }
        count += 1;
    }
    count == TIER_SIZE
}

/// True iff at least one record of `tier` exists in `records`.
///
/// Materialization is atomic per tier (one batch insert), so "any record
/// exists" and "all 15 exist" are equivalent for well-behaved stores.
pub fn is_tier_materialized(records: &[AchievementRecord], tier: Tier) -> bool {
    records.iter().any(|r| r.tier == tier)
}

/// Outcome of a [`recompute`] pass.
#[derive(Clone, Debug, Default)]
pub struct RecomputePass {
    /// Records that changed in any way and need to be saved.
    pub updated: Vec<AchievementRecord>,

    /// The subset of `updated` that transitioned to unlocked in this
    /// pass, in catalog-definition order.
    pub newly_unlocked: Vec<AchievementRecord>,
}

impl RecomputePass {
    /// True if nothing changed in the pass.
    pub fn is_noop(&self) -> bool {
        self.updated.is_empty()
    }
}

/// Re-evaluates one tier's records against the current counter snapshot,
/// mutating `records` in place.
///
/// For every record of `tier` that is neither unlocked nor tier-locked:
/// recompute `progress`; if the target is now reached, transition to
/// [`AchievementStatus::Unlocked`] and stamp `unlocked_at = now`; else
/// promote `Locked` to `InProgress` once progress is above zero.
///
/// Records are processed in catalog-definition order so unlock feed
/// emission is deterministic. Since the predicates are monotone in the
/// counters, ordering never changes *which* records unlock, only the
/// order they are reported in.
///
/// A record referencing an ID missing from the catalog is skipped with a
/// warning and the pass continues; a stale record must never poison the
/// rest of the recompute.
pub fn recompute(
    catalog: &Catalog,
    user: &UserCounters,
    records: &mut [AchievementRecord],
    tier: Tier,
    now: Timestamp,
) -> RecomputePass {
    // Catalog-definition order, not storage order
    let mut order: Vec<usize> = (0..records.len())
        .filter(|&i| records[i].tier == tier)
        .collect();
    order.sort_by_key(|&i| catalog.index_of(records[i].achievement_id.as_str()));

    let mut pass = RecomputePass::default();

    for index in order {
        let record = &mut records[index];
        if record.unlocked || record.tier_locked {
            continue;
        }

        let Some(def) = catalog.get(record.achievement_id.as_str()) else {
            warn!(
                achievement_id = %record.achievement_id,
                user_id = %user.user_id,
                "Achievement record references an id missing from the catalog, skipping"
            );
            continue;
        };

        let value = def.current_value(user);
        let progress = progress_percent(value, def.target);

        if value >= def.target {
            record.status = AchievementStatus::Unlocked;
            record.progress = 100;
            record.unlocked = true;
            record.unlocked_at = Some(now);
            debug!(
                achievement_id = %record.achievement_id,
                user_id = %user.user_id,
                tier = %tier,
                "Achievement unlocked"
            );
            pass.updated.push(record.clone());
            pass.newly_unlocked.push(record.clone());
        } else {
            let mut changed = false;
            if progress != record.progress {
                record.progress = progress;
                changed = true;
            }
            if progress > 0 && record.status == AchievementStatus::Locked {
                record.status = AchievementStatus::InProgress;
                changed = true;
            }
            if changed {
                pass.updated.push(record.clone());
            }
        }
    }

    pass
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AchievementId, UserId};

    fn catalog() -> Catalog {
        Catalog::standard().unwrap()
    }

    fn user() -> UserCounters {
        UserCounters::fresh(UserId::new("u1"), 500)
    }

    fn now() -> Timestamp {
        Timestamp::from_millis(1_700_000_000_000)
    }

    #[test]
    fn test_progress_percent_rounds() {
        assert_eq!(progress_percent(0, 5), 0);
        assert_eq!(progress_percent(1, 5), 20);
        assert_eq!(progress_percent(2, 3), 67);
        assert_eq!(progress_percent(1, 3), 33);
        assert_eq!(progress_percent(5, 5), 100);
        assert_eq!(progress_percent(50, 5), 100);
    }

    #[test]
    fn test_progress_percent_zero_target_clamps() {
        assert_eq!(progress_percent(0, 0), 100);
    }

    #[test]
    fn test_materialize_fresh_user_all_locked_or_in_progress() {
        let records = materialize_tier(&catalog(), &user(), Tier::FIRST, now());
        assert_eq!(records.len(), TIER_SIZE);
        assert!(records.iter().all(|r| !r.unlocked));
        assert!(records.iter().all(|r| !r.tier_locked));
        // A fresh user is level 1, so even level achievements show progress
        let warming_up = records
            .iter()
            .find(|r| r.achievement_id.as_str() == "warming-up")
            .unwrap();
        assert_eq!(warming_up.progress, 50); // level 1 of 2
        assert_eq!(warming_up.status, AchievementStatus::InProgress);
    }

    #[test]
    fn test_materialize_qualified_user_unlocked_from_birth() {
        let mut u = user();
        u.total_quizzes = 100;
        let records = materialize_tier(&catalog(), &u, Tier::FIRST, now());

        let first_quiz = records
            .iter()
            .find(|r| r.achievement_id.as_str() == "first-quiz")
            .unwrap();
        assert!(first_quiz.unlocked);
        assert_eq!(first_quiz.status, AchievementStatus::Unlocked);
        assert_eq!(first_quiz.progress, 100);
        assert_eq!(first_quiz.unlocked_at, Some(now()));
    }

    #[test]
    fn test_tier_complete_requires_all_fifteen() {
        let mut u = user();
        u.total_documents = 10_000;
        u.total_quizzes = 10_000;
        u.total_flashcards = 10_000;
        u.study_streak = 1_000;
        u.level.current_level = 50;

        let mut records = materialize_tier(&catalog(), &u, Tier::FIRST, now());
        assert!(is_tier_complete(&records, Tier::FIRST));

        records[0].unlocked = false;
        assert!(!is_tier_complete(&records, Tier::FIRST));

        // Fourteen records are not a complete tier even if all unlocked
        records[0].unlocked = true;
        let fourteen = &records[..14];
        assert!(!is_tier_complete(fourteen, Tier::FIRST));
    }

    #[test]
    fn test_recompute_unlocks_in_catalog_order() {
        let mut u = user();
        let mut records = materialize_tier(&catalog(), &u, Tier::FIRST, now());
        // Shuffle storage order; recompute must still report catalog order
        records.reverse();

        u.total_documents = 5;
        u.total_quizzes = 1;
        let pass = recompute(&catalog(), &u, &mut records, Tier::FIRST, now());

        let ids: Vec<_> = pass
            .newly_unlocked
            .iter()
            .map(|r| r.achievement_id.as_str().to_string())
            .collect();
        assert_eq!(ids, vec!["first-document", "growing-shelf", "first-quiz"]);
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let mut u = user();
        u.total_documents = 5;
        let mut records = materialize_tier(&catalog(), &u, Tier::FIRST, now());
        // Materialization already consumed the snapshot; a recompute with
        // unchanged counters changes nothing
        let pass = recompute(&catalog(), &u, &mut records, Tier::FIRST, now());
        assert!(pass.is_noop());
        assert!(pass.newly_unlocked.is_empty());
    }

    #[test]
    fn test_recompute_promotes_locked_to_in_progress() {
        let mut u = user();
        let mut records = materialize_tier(&catalog(), &u, Tier::FIRST, now());

        u.total_documents = 2;
        let pass = recompute(&catalog(), &u, &mut records, Tier::FIRST, now());

        let shelf = records
            .iter()
            .find(|r| r.achievement_id.as_str() == "growing-shelf")
            .unwrap();
        assert_eq!(shelf.status, AchievementStatus::InProgress);
        assert_eq!(shelf.progress, 40);
        // first-document unlocked outright
        assert_eq!(pass.newly_unlocked.len(), 1);
    }

    #[test]
    fn test_recompute_never_relocks() {
        let mut u = user();
        u.total_documents = 1;
        let mut records = materialize_tier(&catalog(), &u, Tier::FIRST, now());
        let unlocked_at = records
            .iter()
            .find(|r| r.achievement_id.as_str() == "first-document")
            .unwrap()
            .unlocked_at;

        // Counters cannot go backwards, but even if the snapshot did, an
        // unlocked record is never re-evaluated
        u.total_documents = 0;
        let later = Timestamp::from_millis(now().as_millis() + 60_000);
        let pass = recompute(&catalog(), &u, &mut records, Tier::FIRST, later);
        let first = records
            .iter()
            .find(|r| r.achievement_id.as_str() == "first-document")
            .unwrap();
        assert!(first.unlocked);
        assert_eq!(first.progress, 100);
        assert_eq!(first.unlocked_at, unlocked_at);
        assert!(pass.newly_unlocked.is_empty());
    }

    #[test]
    fn test_recompute_skips_unknown_ids() {
        let mut u = user();
        let mut records = materialize_tier(&catalog(), &u, Tier::FIRST, now());
        records.push(AchievementRecord {
            user_id: u.user_id.clone(),
            achievement_id: AchievementId::from("retired-achievement"),
            tier: Tier::FIRST,
            tier_locked: false,
            status: AchievementStatus::Locked,
            progress: 0,
            target: 5,
            unlocked: false,
            unlocked_at: None,
        });

        u.total_documents = 1;
        let pass = recompute(&catalog(), &u, &mut records, Tier::FIRST, now());
        // The stale record is skipped, the rest of the pass still runs
        assert_eq!(pass.newly_unlocked.len(), 1);
        assert!(!records.last().unwrap().unlocked);
    }

    #[test]
    fn test_recompute_skips_tier_locked_records() {
        let mut u = user();
        let mut records = materialize_tier(&catalog(), &u, Tier::FIRST, now());
        for r in records.iter_mut() {
            r.tier_locked = true;
        }

        u.total_documents = 100;
        let pass = recompute(&catalog(), &u, &mut records, Tier::FIRST, now());
        assert!(pass.is_noop());
    }
}
