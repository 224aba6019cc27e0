//! Core type definitions for questline identifiers and time values.
//!
//! This module defines the fundamental ID types used throughout the engine,
//! plus the two time representations it needs: millisecond [`Timestamp`]s
//! for unlock stamps and feed entries, and day-granular [`StudyDate`]s for
//! streak arithmetic.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque user identifier.
///
/// The engine doesn't handle authentication - the consumer provides user IDs.
/// This allows integration with any account system (Mongo ObjectIds, OAuth
/// subjects, numeric keys rendered as strings, etc.).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

impl UserId {
    /// Creates a new UserId from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the user ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Achievement definition identifier.
///
/// Catalog definitions carry stable, human-readable IDs (e.g.
/// `"first-document"`). Per-user achievement records reference definitions
/// by this ID, so it must never change once a ladder has shipped.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AchievementId(pub String);

impl AchievementId {
    /// Creates a new AchievementId from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the achievement ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AchievementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AchievementId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Activity feed entry identifier (UUID v7 for time-ordering).
///
/// Feed entries are append-only; time-ordered IDs let the store list them
/// chronologically without a secondary sort key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActivityId(pub Uuid);

impl ActivityId {
    /// Creates a new ActivityId with a UUID v7 (time-ordered).
    #[inline]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Creates a nil (all zeros) ActivityId.
    /// Useful for testing or sentinel values.
    #[inline]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }
}

impl Default for ActivityId {
    /// Returns a nil (all zeros) ActivityId.
    ///
    /// For a new unique ID, use [`ActivityId::new()`].
    fn default() -> Self {
        Self::nil()
    }
}

impl fmt::Display for ActivityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unix timestamp in milliseconds.
///
/// Using i64 allows representing dates far into the future and past.
/// Millisecond precision is sufficient for unlock stamps and feed entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(pub i64);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    ///
    /// If the system clock is before the Unix epoch (should never happen
    /// in practice), returns a timestamp of 0 (epoch) rather than panicking.
    #[inline]
    pub fn now() -> Self {
        use std::time::{SystemTime, UNIX_EPOCH};
        let duration = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        Self(duration.as_millis() as i64)
    }

    /// Creates a timestamp from Unix milliseconds.
    #[inline]
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Returns the timestamp as Unix milliseconds.
    #[inline]
    pub const fn as_millis(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A calendar date at day granularity.
///
/// Streaks compare *days*, never times of day: two activities at 00:01 and
/// 23:59 of the same date are the same study day. `StudyDate` wraps a
/// [`chrono::NaiveDate`] so the time-of-day component is unrepresentable
/// rather than merely ignored.
///
/// Day boundaries are evaluated in UTC; a host that wants per-user local
/// midnight can compute the date itself and call the `*_at` engine entry
/// points with an explicit date.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StudyDate(pub NaiveDate);

impl StudyDate {
    /// Wraps an existing calendar date.
    #[inline]
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Returns today's date (UTC day boundary).
    #[inline]
    pub fn today() -> Self {
        Self(Utc::now().date_naive())
    }

    /// Builds a date from year/month/day, or `None` if out of range.
    ///
    /// Mostly useful in tests and backfill tooling.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Whole days from `self` to `other` (negative if `other` is earlier).
    #[inline]
    pub fn days_until(&self, other: StudyDate) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// The date `days` whole days after this one.
    ///
    /// Saturates at the calendar range limits instead of panicking.
    pub fn plus_days(&self, days: i64) -> Self {
        let delta = chrono::Days::new(days.unsigned_abs());
        let date = if days >= 0 {
            self.0.checked_add_days(delta).unwrap_or(NaiveDate::MAX)
        } else {
            self.0.checked_sub_days(delta).unwrap_or(NaiveDate::MIN)
        };
        Self(date)
    }

    /// Returns the wrapped calendar date.
    #[inline]
    pub const fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for StudyDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<NaiveDate> for StudyDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}
