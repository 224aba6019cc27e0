//! In-memory store implementation.
//!
//! [`MemoryStore`] backs the engine with plain `RwLock`ed maps. It is the
//! reference implementation of the [`ProgressStore`] contract: tests run
//! against it, and embedders that don't need durability (demos, CLIs,
//! sandboxes) can use it directly.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::account::UserCounters;
use crate::activity::ActivityEntry;
use crate::catalog::Tier;
use crate::error::{Result, StoreError};
use crate::ledger::AchievementRecord;
use crate::store::ProgressStore;
use crate::types::UserId;

/// A [`ProgressStore`] over in-process maps.
///
/// All operations are atomic per collection (single lock each), which
/// satisfies the trait's atomic-batch-insert requirement for free.
/// Poisoned locks are recovered rather than propagated: the data is
/// plain-old-data, so a panicking reader cannot have left it torn.
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: RwLock<HashMap<UserId, UserCounters>>,
    records: RwLock<HashMap<UserId, Vec<AchievementRecord>>>,
    activities: RwLock<Vec<ActivityEntry>>,
}

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all feed entries appended so far, oldest first.
    ///
    /// The engine never reads the feed; this accessor exists for tests
    /// and for embedders rendering a timeline straight from memory.
    pub fn activities(&self) -> Vec<ActivityEntry> {
        read(&self.activities).clone()
    }

    /// Number of feed entries appended so far.
    pub fn activity_count(&self) -> usize {
        read(&self.activities).len()
    }
}

impl ProgressStore for MemoryStore {
    fn get_user(&self, user_id: &UserId) -> Result<Option<UserCounters>> {
        Ok(read(&self.users).get(user_id).cloned())
    }

    fn save_user(&self, user: &UserCounters) -> Result<()> {
        write(&self.users).insert(user.user_id.clone(), user.clone());
        Ok(())
    }

    fn list_users(&self) -> Result<Vec<UserId>> {
        Ok(read(&self.users).keys().cloned().collect())
    }

    fn achievement_records(
        &self,
        user_id: &UserId,
        tier: Option<Tier>,
    ) -> Result<Vec<AchievementRecord>> {
        let records = read(&self.records);
        let all = records.get(user_id).map(Vec::as_slice).unwrap_or(&[]);
        Ok(all
            .iter()
            .filter(|r| tier.map_or(true, |t| r.tier == t))
            .cloned()
            .collect())
    }

    fn insert_achievement_records(&self, records: &[AchievementRecord]) -> Result<()> {
        if records.is_empty() {
            return Ok(());
        }

        let mut map = write(&self.records);
        for record in records {
            let existing = map.entry(record.user_id.clone()).or_default();
            if existing
                .iter()
                .any(|r| r.achievement_id == record.achievement_id)
            {
                return Err(StoreError::conflict(format!(
                    "achievement record already exists: {} / {}",
                    record.user_id, record.achievement_id
                ))
                .into());
            }
        }
        for record in records {
            map.entry(record.user_id.clone())
                .or_default()
                .push(record.clone());
        }
        Ok(())
    }

    fn save_achievement_record(&self, record: &AchievementRecord) -> Result<()> {
        let mut map = write(&self.records);
        let rows = map.entry(record.user_id.clone()).or_default();
        match rows
            .iter_mut()
            .find(|r| r.achievement_id == record.achievement_id)
        {
            Some(row) => *row = record.clone(),
            None => rows.push(record.clone()),
        }
        Ok(())
    }

    fn append_activity(&self, entry: &ActivityEntry) -> Result<()> {
        write(&self.activities).push(entry.clone());
        Ok(())
    }
}
