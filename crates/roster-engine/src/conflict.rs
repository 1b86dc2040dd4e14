//! Busy-interval conflict detection for a proposed slot.
//!
//! Tests a slot `[start, start + minutes)` against a candidate's committed
//! busy intervals. Adjacent blocks (one ending exactly when the other
//! starts) are NOT conflicts -- buffers, when the event wants them, are
//! already folded into the busy intervals upstream.

use chrono::{DateTime, Duration, Utc};

use crate::error::{Result, RosterError};
use crate::types::BusyInterval;

/// Decide whether any busy interval overlaps the proposed slot.
///
/// Two intervals overlap when `busy.start < slot.end && slot.start <
/// busy.end`, which excludes the adjacent case on both sides.
///
/// # Errors
/// Returns [`RosterError::ConflictCheck`] when the inputs cannot be trusted:
/// a negative slot length, or a busy interval whose end precedes its start.
/// Callers deciding eligibility treat that error as "available" rather than
/// excluding the candidate on corrupt data.
pub fn has_conflict(
    busy: &[BusyInterval],
    slot_start: DateTime<Utc>,
    slot_minutes: i64,
) -> Result<bool> {
    if slot_minutes < 0 {
        return Err(RosterError::ConflictCheck(format!(
            "negative slot length: {slot_minutes} minutes"
        )));
    }
    let slot_end = slot_start + Duration::minutes(slot_minutes);

    for interval in busy {
        if interval.end < interval.start {
            return Err(RosterError::ConflictCheck(format!(
                "busy interval ends before it starts: {} > {}",
                interval.start, interval.end
            )));
        }
        if interval.start < slot_end && slot_start < interval.end {
            return Ok(true);
        }
    }

    Ok(false)
}
