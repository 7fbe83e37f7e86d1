//! Roll-up error types.

use flipdash_shared::GroupId;
use thiserror::Error;

/// Roll-up input errors.
#[derive(Debug, Error)]
pub enum RollupError {
    /// The same group appears more than once in one computation input.
    ///
    /// Silently resolving the duplicate would produce a financially
    /// misleading total, so the input is rejected instead.
    #[error("Group {0} appears more than once in the roll-up input")]
    DuplicateGroup(GroupId),
}
