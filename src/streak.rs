//! Study streak calculator.
//!
//! A **streak** is the count of consecutive calendar days with qualifying
//! study activity. Dates are compared at day granularity ([`StudyDate`]);
//! time of day never matters.
//!
//! Two independent paths can end a streak:
//! - the update path: an activity arriving after a gap of more than one
//!   day restarts the streak at 1 ([`StreakTransition::Broken`]);
//! - the expiry sweep: a daily maintenance pass resets streaks of users
//!   who never came back at all, via the [`is_expired`] predicate and
//!   [`ProgressionEngine::expire_streaks`](crate::ProgressionEngine::expire_streaks).
//!
//! Both functions here are pure; the engine owns clock access and
//! persistence.

use serde::{Deserialize, Serialize};

use crate::types::StudyDate;

/// Every how many consecutive days a streak milestone feed entry is
/// emitted (5, 10, 15, ...).
pub const MILESTONE_INTERVAL: u32 = 5;

/// How a streak changed on a qualifying activity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreakTransition {
    /// First ever qualifying activity; streak starts at 1.
    Started,

    /// Another activity on the same study day; streak unchanged.
    SameDay,

    /// Activity exactly one day after the last; streak grows by 1.
    Incremented,

    /// Gap of more than one day (or a clock anomaly); streak restarts at 1.
    Broken,
}

/// Result of a streak update.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakUpdate {
    /// The streak value after the activity.
    pub streak: u32,

    /// The last-study-date to persist (unchanged for [`StreakTransition::SameDay`]).
    pub last_study_date: StudyDate,

    /// Which rule fired.
    pub transition: StreakTransition,
}

/// Applies one qualifying activity to a streak.
///
/// Rules, in whole days between `last_study_date` and `today`:
/// - no previous date: streak starts at 1 (`Started`)
/// - 0 days: nothing changes (`SameDay`)
/// - 1 day: streak increments (`Incremented`)
/// - anything else, including negative gaps from clock skew: streak
///   restarts at 1 (`Broken`)
pub fn update(
    last_study_date: Option<StudyDate>,
    today: StudyDate,
    current_streak: u32,
) -> StreakUpdate {
    let Some(last) = last_study_date else {
        return StreakUpdate {
            streak: 1,
            last_study_date: today,
            transition: StreakTransition::Started,
        };
    };

    match last.days_until(today) {
        0 => StreakUpdate {
            streak: current_streak,
            last_study_date: last,
            transition: StreakTransition::SameDay,
        },
        1 => StreakUpdate {
            streak: current_streak.saturating_add(1),
            last_study_date: today,
            transition: StreakTransition::Incremented,
        },
        _ => StreakUpdate {
            streak: 1,
            last_study_date: today,
            transition: StreakTransition::Broken,
        },
    }
}

/// Whether a streak has lapsed and should be reset by the maintenance
/// sweep.
///
/// True when the last study date is more than `expiry_days` whole days
/// before `today`. A user with no study date yet has nothing to expire.
///
/// The sweep exists because the update path only runs when a user comes
/// back; without it, a user who never returns keeps a stale positive
/// streak forever.
pub fn is_expired(last_study_date: Option<StudyDate>, today: StudyDate, expiry_days: i64) -> bool {
    match last_study_date {
        Some(last) => last.days_until(today) > expiry_days,
        None => false,
    }
}

/// Whether a streak value sits on a milestone boundary (5, 10, 15, ...).
#[inline]
pub fn is_milestone(streak: u32) -> bool {
    streak > 0 && streak % MILESTONE_INTERVAL == 0
}
