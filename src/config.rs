//! Configuration types for the progression engine.
//!
//! The [`Config`] struct controls the tunable numbers of the progression
//! rules:
//! - Leveling curve (base XP for level 2, geometric growth factor)
//! - Streak expiry threshold for the daily maintenance sweep
//!
//! # Example
//! ```rust
//! use questline::Config;
//!
//! // Use defaults (500 base XP, 1.5 growth, 2-day expiry)
//! let config = Config::default();
//!
//! // Customize for a gentler curve
//! let config = Config {
//!     level_growth: 1.25,
//!     ..Default::default()
//! };
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::leveling::LevelCurve;

/// Progression engine configuration options.
///
/// All fields have sensible defaults. Use struct update syntax to override
/// specific settings:
///
/// ```rust
/// use questline::Config;
///
/// let config = Config {
///     base_level_xp: 1000,
///     ..Default::default()
/// };
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// XP required to advance from level 1 to level 2.
    ///
    /// Every later threshold is derived from this via `level_growth`.
    /// Default: 500
    pub base_level_xp: u64,

    /// Geometric growth factor applied to the XP threshold on each
    /// level-up: `next = floor(next * level_growth)`.
    ///
    /// Must be at least 1.0 so thresholds never shrink. Default: 1.5
    pub level_growth: f64,

    /// Days of inactivity after which the maintenance sweep resets a
    /// streak to zero.
    ///
    /// A streak survives a gap of up to this many whole days; the sweep
    /// resets users whose last study date is *more* than this many days
    /// before "today". Default: 2
    pub streak_expiry_days: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_level_xp: 500,
            level_growth: 1.5,
            streak_expiry_days: 2,
        }
    }
}

impl Config {
    /// Creates a new Config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a Config with a custom leveling curve.
    ///
    /// # Example
    /// ```rust
    /// use questline::Config;
    ///
    /// // Slower early game, same growth
    /// let config = Config::with_curve(1000, 1.5);
    /// ```
    pub fn with_curve(base_level_xp: u64, level_growth: f64) -> Self {
        Self {
            base_level_xp,
            level_growth,
            ..Default::default()
        }
    }

    /// Validates the configuration.
    ///
    /// Called automatically by
    /// [`ProgressionEngine::new()`](crate::ProgressionEngine::new). You can
    /// also call this explicitly to check configuration before constructing
    /// an engine.
    ///
    /// # Errors
    /// Returns `ValidationError` if:
    /// - `base_level_xp` is 0
    /// - `level_growth` is below 1.0 or not finite
    /// - `streak_expiry_days` is below 1
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.base_level_xp == 0 {
            return Err(ValidationError::invalid_field(
                "base_level_xp",
                "must be greater than 0",
            ));
        }

        if !self.level_growth.is_finite() || self.level_growth < 1.0 {
            return Err(ValidationError::invalid_field(
                "level_growth",
                "must be a finite value of at least 1.0",
            ));
        }

        if self.streak_expiry_days < 1 {
            return Err(ValidationError::invalid_field(
                "streak_expiry_days",
                "must be at least 1",
            ));
        }

        Ok(())
    }

    /// Returns the leveling curve described by this configuration.
    pub fn curve(&self) -> LevelCurve {
        LevelCurve::new(self.base_level_xp, self.level_growth)
    }
}
