//! Achievement catalog: the immutable definition table.
//!
//! The **catalog** is the static side of the achievement system: 75
//! definitions in 5 tiers of 15, each with a category, a numeric target,
//! and an XP reward. It is built once (usually via [`Catalog::standard`])
//! and never mutated at runtime, so an engine can share it freely across
//! threads; all per-user state lives in the
//! [`ledger`](crate::ledger) instead.
//!
//! Structural invariants are checked at construction, not at use:
//! [`Catalog::new`] rejects a table with the wrong size, an uneven tier,
//! a duplicate ID, or a zero target.

pub mod data;
pub mod types;

pub use types::{AchievementDef, Category, Tier};

use std::collections::HashMap;

use crate::error::{ProgressionError, Result};

/// Number of definitions in each tier.
pub const TIER_SIZE: usize = 15;

/// Total number of definitions in a full ladder.
pub const LADDER_SIZE: usize = TIER_SIZE * Tier::COUNT;

/// An immutable, validated achievement definition table.
///
/// Lookup is by definition ID; iteration follows the table's definition
/// order, which is also the order unlock feed entries are emitted in.
#[derive(Clone, Debug)]
pub struct Catalog {
    defs: &'static [AchievementDef],
    by_id: HashMap<&'static str, usize>,
}

impl Catalog {
    /// Builds and validates a catalog from a static definition table.
    ///
    /// # Errors
    ///
    /// Returns [`ProgressionError::Catalog`] if the table:
    /// - does not hold exactly [`LADDER_SIZE`] definitions
    /// - does not hold exactly [`TIER_SIZE`] definitions per tier
    /// - contains a duplicate ID
    /// - contains a definition with a zero target
    pub fn new(defs: &'static [AchievementDef]) -> Result<Self> {
        if defs.len() != LADDER_SIZE {
            return Err(ProgressionError::catalog(format!(
                "expected {} definitions, found {}",
                LADDER_SIZE,
                defs.len()
            )));
        }

        let mut by_id = HashMap::with_capacity(defs.len());
        let mut per_tier = [0usize; Tier::COUNT];

        for (index, def) in defs.iter().enumerate() {
            if by_id.insert(def.id, index).is_some() {
                return Err(ProgressionError::catalog(format!(
                    "duplicate achievement id: {}",
                    def.id
                )));
            }
            if def.target == 0 {
                return Err(ProgressionError::catalog(format!(
                    "achievement {} has a zero target",
                    def.id
                )));
            }
            per_tier[usize::from(def.tier.get()) - 1] += 1;
        }

        for tier in Tier::all() {
            let count = per_tier[usize::from(tier.get()) - 1];
            if count != TIER_SIZE {
                return Err(ProgressionError::catalog(format!(
                    "tier {} holds {} definitions, expected {}",
                    tier, count, TIER_SIZE
                )));
            }
        }

        Ok(Self { defs, by_id })
    }

    /// Builds the standard 75-achievement ladder.
    pub fn standard() -> Result<Self> {
        Self::new(data::STANDARD)
    }

    /// Looks up a definition by ID.
    pub fn get(&self, id: &str) -> Option<&AchievementDef> {
        self.by_id.get(id).map(|&index| &self.defs[index])
    }

    /// The position of a definition in the table, used to order ledger
    /// passes deterministically. `None` for unknown IDs.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    /// Iterates all definitions in table order.
    pub fn iter(&self) -> impl Iterator<Item = &AchievementDef> {
        self.defs.iter()
    }

    /// Iterates one tier's definitions in table order.
    pub fn tier(&self, tier: Tier) -> impl Iterator<Item = &AchievementDef> {
        self.defs.iter().filter(move |d| d.tier == tier)
    }

    /// Total number of definitions.
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    /// Always false for a validated catalog; present for API completeness.
    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}
