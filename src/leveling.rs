//! Leveling ledger: XP accounting and level-up arithmetic.
//!
//! A user's level state is the triple (current level, XP within the level,
//! XP threshold for the next level) plus a lifetime XP total. Applying an
//! XP delta through a [`LevelCurve`] normalizes the state: as long as the
//! in-level XP reaches the threshold, the user levels up and the threshold
//! grows geometrically (`next = floor(next * growth)`).
//!
//! One large delta can produce several level-ups in a single call; the
//! loop terminates because the threshold is strictly positive and never
//! shrinks, so each iteration removes at least one threshold's worth of
//! the finite XP pool.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A user's level state.
///
/// Invariant (enforced by [`LevelCurve::apply`] and checked by
/// [`LevelState::validate`]): `current_xp < next_level_xp`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelState {
    /// Current level, starting at 1.
    pub current_level: u32,

    /// Lifetime XP earned, never reduced by level-ups.
    pub total_xp: u64,

    /// XP accumulated within the current level.
    pub current_xp: u64,

    /// XP required to reach the next level.
    pub next_level_xp: u64,
}

impl LevelState {
    /// Level state for a brand-new user: level 1, no XP, first threshold
    /// at `base_xp`.
    pub const fn fresh(base_xp: u64) -> Self {
        Self {
            current_level: 1,
            total_xp: 0,
            current_xp: 0,
            next_level_xp: base_xp,
        }
    }

    /// Checks the leveling invariants on a state read back from the store.
    ///
    /// # Errors
    /// Returns `ValidationError::InvalidLevelState` if:
    /// - `current_level` is 0
    /// - `next_level_xp` is 0
    /// - `current_xp >= next_level_xp` (level-up was not normalized)
    /// - `current_xp > total_xp` (in-level XP exceeds lifetime XP)
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.current_level == 0 {
            return Err(ValidationError::invalid_level_state(
                "current_level must be at least 1",
            ));
        }
        if self.next_level_xp == 0 {
            return Err(ValidationError::invalid_level_state(
                "next_level_xp must be at least 1",
            ));
        }
        if self.current_xp >= self.next_level_xp {
            return Err(ValidationError::invalid_level_state(format!(
                "current_xp {} has not been normalized against next_level_xp {}",
                self.current_xp, self.next_level_xp
            )));
        }
        if self.current_xp > self.total_xp {
            return Err(ValidationError::invalid_level_state(format!(
                "current_xp {} exceeds total_xp {}",
                self.current_xp, self.total_xp
            )));
        }
        Ok(())
    }
}

/// The geometric XP curve governing level-ups.
///
/// Constructed from [`Config`](crate::Config) via
/// [`Config::curve()`](crate::Config::curve). The curve itself is plain
/// data; it holds no per-user state.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LevelCurve {
    base_xp: u64,
    growth: f64,
}

impl LevelCurve {
    /// Creates a curve with the given level-2 threshold and growth factor.
    ///
    /// Callers should validate the inputs via
    /// [`Config::validate()`](crate::Config::validate); a growth below 1.0
    /// is clamped to 1.0 here so the apply loop always terminates.
    pub fn new(base_xp: u64, growth: f64) -> Self {
        let growth = if growth.is_finite() && growth >= 1.0 {
            growth
        } else {
            1.0
        };
        Self {
            base_xp: base_xp.max(1),
            growth,
        }
    }

    /// The XP threshold for advancing from level 1 to level 2.
    #[inline]
    pub fn base_xp(&self) -> u64 {
        self.base_xp
    }

    /// Level state for a brand-new user on this curve.
    pub fn fresh_state(&self) -> LevelState {
        LevelState::fresh(self.base_xp)
    }

    /// The threshold that follows `threshold` after a level-up.
    ///
    /// `floor(threshold * growth)`, never below the previous threshold
    /// and never below 1, so the sequence is monotonically non-decreasing
    /// and strictly positive.
    fn next_threshold(&self, threshold: u64) -> u64 {
        let grown = (threshold as f64 * self.growth).floor();
        if grown >= u64::MAX as f64 {
            u64::MAX
        } else {
            (grown as u64).max(threshold).max(1)
        }
    }

    /// Applies an XP delta to a level state, normalizing level-ups.
    ///
    /// Supports multiple level-ups from one large delta in a single call.
    /// A delta of 0 returns the state unchanged.
    ///
    /// ```rust
    /// use questline::{LevelCurve, LevelState};
    ///
    /// let curve = LevelCurve::new(500, 1.5);
    /// let state = LevelState {
    ///     current_level: 1,
    ///     total_xp: 0,
    ///     current_xp: 450,
    ///     next_level_xp: 500,
    /// };
    ///
    /// let outcome = curve.apply(state, 100);
    /// assert_eq!(outcome.state.current_level, 2);
    /// assert_eq!(outcome.state.current_xp, 50);
    /// assert_eq!(outcome.state.next_level_xp, 750);
    /// assert_eq!(outcome.state.total_xp, 100);
    /// assert_eq!(outcome.levels_gained, 1);
    /// ```
    pub fn apply(&self, state: LevelState, delta: u64) -> LevelOutcome {
        let mut next = state;
        next.total_xp = next.total_xp.saturating_add(delta);
        next.current_xp = next.current_xp.saturating_add(delta);

        let mut levels_gained = 0u32;
        while next.current_xp >= next.next_level_xp {
            next.current_xp -= next.next_level_xp;
            next.current_level = next.current_level.saturating_add(1);
            next.next_level_xp = self.next_threshold(next.next_level_xp);
            levels_gained += 1;
        }

        LevelOutcome {
            state: next,
            levels_gained,
            xp_awarded: delta,
        }
    }
}

/// Result of applying an XP delta through a [`LevelCurve`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelOutcome {
    /// The normalized level state after the delta.
    pub state: LevelState,

    /// How many level-ups the delta produced (0 for most awards).
    pub levels_gained: u32,

    /// The delta that was applied, echoed back for feed/reporting callers.
    pub xp_awarded: u64,
}

impl LevelOutcome {
    /// Returns true if the delta produced at least one level-up.
    #[inline]
    pub fn leveled_up(&self) -> bool {
        self.levels_gained > 0
    }
}
