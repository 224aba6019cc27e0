//! Store abstractions for the progression engine.
//!
//! The engine performs no I/O of its own: every durable read and write
//! goes through the [`ProgressStore`] trait, which is the contract of the
//! surrounding application's Account & Content Store (a SQL database, a
//! document store, anything that can hold the three collections below).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  ProgressionEngine                          │
//! │                         │                                   │
//! │                         ▼                                   │
//! │              ┌─────────────────────┐                        │
//! │              │   ProgressStore     │  ← Trait               │
//! │              └─────────────────────┘                        │
//! │                    ▲         ▲                              │
//! │                    │         │                              │
//! │        ┌──────────┴──┐   ┌──┴──────────┐                   │
//! │        │ Host app DB │   │ MemoryStore │                   │
//! │        └─────────────┘   └─────────────┘                   │
//! │           (prod)            (tests)                         │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod memory;

pub use memory::MemoryStore;

use crate::account::UserCounters;
use crate::activity::ActivityEntry;
use crate::catalog::Tier;
use crate::error::Result;
use crate::ledger::AchievementRecord;
use crate::types::UserId;

/// Storage contract between the progression engine and the host
/// application.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; the engine itself holds no
/// locks and assumes the store serializes concurrent calls *for the same
/// user* (per-user locking or optimistic retry). Calls for different
/// users are fully independent.
///
/// # Failure semantics
///
/// Methods return [`StoreError`](crate::StoreError)-wrapped failures
/// unmodified; the engine never retries. A caller that sees a store
/// failure from [`ProgressionEngine::on_activity`](crate::ProgressionEngine::on_activity)
/// replays the whole call; the engine's unlock path is idempotent under
/// such replays.
pub trait ProgressStore: Send + Sync {
    /// Fetches a user's counter snapshot.
    ///
    /// Returns `None` if no user with the given ID exists.
    fn get_user(&self, user_id: &UserId) -> Result<Option<UserCounters>>;

    /// Persists a user's counter snapshot, overwriting the previous one.
    fn save_user(&self, user: &UserCounters) -> Result<()>;

    /// Lists all known user IDs.
    ///
    /// Used by the daily streak expiry sweep. Implementations backing
    /// large user bases may serve this from an index; the engine only
    /// ever iterates it once per sweep.
    fn list_users(&self) -> Result<Vec<UserId>>;

    /// Fetches a user's achievement records, optionally restricted to one
    /// tier. Returns an empty vector when nothing is materialized yet.
    fn achievement_records(
        &self,
        user_id: &UserId,
        tier: Option<Tier>,
    ) -> Result<Vec<AchievementRecord>>;

    /// Inserts a batch of freshly materialized achievement records.
    ///
    /// The batch is one tier's worth of records and MUST be applied
    /// atomically: a partially inserted tier would leave the user's
    /// ladder permanently short. Inserting a (user, achievement) pair
    /// that already exists is a [`StoreError::Conflict`](crate::StoreError::Conflict).
    fn insert_achievement_records(&self, records: &[AchievementRecord]) -> Result<()>;

    /// Persists one updated achievement record (progress/status/unlock
    /// changes), overwriting the stored row for its
    /// (user, achievement) pair.
    fn save_achievement_record(&self, record: &AchievementRecord) -> Result<()>;

    /// Appends an activity feed entry.
    ///
    /// Entries are append-only and never read back by the engine.
    fn append_activity(&self, entry: &ActivityEntry) -> Result<()>;
}

// Shared handles delegate, so a host can keep a reference to the store it
// hands the engine (tests do this to seed users and inspect the feed)
impl<S: ProgressStore + ?Sized> ProgressStore for std::sync::Arc<S> {
    fn get_user(&self, user_id: &UserId) -> Result<Option<UserCounters>> {
        (**self).get_user(user_id)
    }

    fn save_user(&self, user: &UserCounters) -> Result<()> {
        (**self).save_user(user)
    }

    fn list_users(&self) -> Result<Vec<UserId>> {
        (**self).list_users()
    }

    fn achievement_records(
        &self,
        user_id: &UserId,
        tier: Option<Tier>,
    ) -> Result<Vec<AchievementRecord>> {
        (**self).achievement_records(user_id, tier)
    }

    fn insert_achievement_records(&self, records: &[AchievementRecord]) -> Result<()> {
        (**self).insert_achievement_records(records)
    }

    fn save_achievement_record(&self, record: &AchievementRecord) -> Result<()> {
        (**self).save_achievement_record(record)
    }

    fn append_activity(&self, entry: &ActivityEntry) -> Result<()> {
        (**self).append_activity(entry)
    }
}
