//! Error types for candidate resolution.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors that can occur while resolving available candidates.
///
/// With well-formed input and honest collaborators, a resolution ends in
/// either a non-empty candidate list or one of the three fatal booking
/// kinds: [`RestrictionScheduleNotFound`], [`BookingNotAllowedByRestrictionSchedule`],
/// or [`NoAvailableUsersFound`]. None of them is retryable.
///
/// [`RestrictionScheduleNotFound`]: RosterError::RestrictionScheduleNotFound
/// [`BookingNotAllowedByRestrictionSchedule`]: RosterError::BookingNotAllowedByRestrictionSchedule
/// [`NoAvailableUsersFound`]: RosterError::NoAvailableUsersFound
#[derive(Error, Debug)]
pub enum RosterError {
    /// The configured restriction schedule id did not resolve to a schedule.
    #[error("restriction schedule {0} not found")]
    RestrictionScheduleNotFound(i64),

    /// The restriction schedule has no usable timezone, or the requested
    /// window falls outside every restriction range.
    #[error("booking not allowed by restriction schedule")]
    BookingNotAllowedByRestrictionSchedule,

    /// Every candidate in the pool was excluded by availability or conflict
    /// checks.
    #[error("no available users found")]
    NoAvailableUsersFound,

    /// A timestamp string could not be parsed, or names a wall-clock time
    /// that does not exist in the requested zone (DST gap).
    #[error("malformed timestamp: {0}")]
    MalformedTimestamp(String),

    /// A zone name was not found in the tz database.
    #[error("invalid timezone: {0}")]
    InvalidTimezone(String),

    /// The requested window ends before it starts.
    #[error("window end {end} precedes start {start}")]
    InvalidWindow {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    /// Conflict detection received corrupt busy data. Never escapes
    /// [`resolve_available_candidates`](crate::Engine::resolve_available_candidates):
    /// the evaluator logs it and treats the candidate as available.
    #[error("conflict check failed: {0}")]
    ConflictCheck(String),

    /// A collaborating backend failed or violated its shape contract.
    #[error("backend error: {0}")]
    Backend(String),
}

/// Convenience alias used throughout roster-engine.
pub type Result<T> = std::result::Result<T, RosterError>;
