//! User counter snapshots and state validation.
//!
//! The **counter snapshot** ([`UserCounters`]) is the sole input every
//! unlock predicate sees: cumulative document/flashcard/quiz counts, the
//! study streak, and the XP/level triple. The Account & Content Store
//! collaborator owns the durable copy; the engine validates a snapshot
//! before mutating it and returns the mutated copy for persistence.

pub mod types;

pub use types::{CounterDelta, UserCounters};

use crate::error::ValidationError;

/// Validates a counter snapshot read back from the store.
///
/// Counters themselves are unsigned and need no range check; what can go
/// wrong is the level state (a store migration or manual edit leaving an
/// unnormalized triple). A snapshot that fails here is rejected before
/// any mutation, per the no-silent-corruption rule.
///
/// # Errors
///
/// - empty `user_id`
/// - any [`LevelState::validate`](crate::LevelState::validate) failure
pub fn validate_counters(user: &UserCounters) -> Result<(), ValidationError> {
    if user.user_id.as_str().is_empty() {
        return Err(ValidationError::required_field("user_id"));
    }

    user.level.validate()?;

    Ok(())
}
