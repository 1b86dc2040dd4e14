//! Wall-clock input normalization -- raw timestamp strings to UTC instants.
//!
//! Booking requests carry their slot markers as strings in the booker's
//! zone. The literal-UTC marker `"Etc/GMT"` short-circuits zone handling and
//! reads the marker directly as UTC; any other zone name is resolved through
//! the tz database and the marker is interpreted as wall-clock time in that
//! zone. Markers that carry an explicit offset (RFC 3339) denote an exact
//! instant in either mode.

use chrono::{DateTime, LocalResult, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{Result, RosterError};

/// Zone value that marks the input as already-UTC.
pub const UTC_ZONE_MARKER: &str = "Etc/GMT";

/// Convert a raw timestamp string to a UTC instant.
///
/// # Arguments
/// - `time_input` -- `"2026-03-16T09:00:00"` (wall clock) or RFC 3339 with
///   an offset (`"2026-03-16T09:00:00-04:00"`, `"...Z"`)
/// - `zone` -- IANA zone the wall clock is expressed in, or
///   [`UTC_ZONE_MARKER`]
///
/// # Errors
/// Returns [`RosterError::InvalidTimezone`] if `zone` is not in the tz
/// database, and [`RosterError::MalformedTimestamp`] if `time_input` does
/// not parse or names a wall-clock time skipped by a DST transition.
/// Wall-clock times repeated by a DST transition resolve to the earlier
/// instant.
pub fn to_utc(time_input: &str, zone: &str) -> Result<DateTime<Utc>> {
    if zone == UTC_ZONE_MARKER {
        if let Ok(instant) = DateTime::parse_from_rfc3339(time_input) {
            return Ok(instant.with_timezone(&Utc));
        }
        let naive = parse_naive(time_input)?;
        return Ok(Utc.from_utc_datetime(&naive));
    }

    let tz: Tz = zone
        .parse()
        .map_err(|_| RosterError::InvalidTimezone(zone.to_string()))?;

    // An explicit offset pins the instant; the zone only matters for
    // offset-less wall-clock input.
    if let Ok(instant) = DateTime::parse_from_rfc3339(time_input) {
        return Ok(instant.with_timezone(&Utc));
    }

    let naive = parse_naive(time_input)?;
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(instant) => Ok(instant.with_timezone(&Utc)),
        LocalResult::Ambiguous(earlier, _) => Ok(earlier.with_timezone(&Utc)),
        LocalResult::None => Err(RosterError::MalformedTimestamp(format!(
            "{time_input} does not exist in {zone}"
        ))),
    }
}

/// Whole minutes between two raw markers, diffed before any zone
/// normalization.
///
/// Kept separate from [`to_utc`] on purpose: the requested duration is
/// defined on the raw strings, so a window that straddles a DST transition
/// keeps its face-value length.
pub fn raw_duration_minutes(date_from: &str, date_to: &str) -> Result<i64> {
    let from = parse_raw(date_from)?;
    let to = parse_raw(date_to)?;
    Ok((to - from).num_minutes())
}

/// Read a marker as a naive timestamp, stripping an explicit offset if one
/// is present.
fn parse_raw(input: &str) -> Result<NaiveDateTime> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(input) {
        return Ok(instant.naive_utc());
    }
    parse_naive(input)
}

fn parse_naive(input: &str) -> Result<NaiveDateTime> {
    input
        .parse::<NaiveDateTime>()
        .map_err(|e| RosterError::MalformedTimestamp(format!("{input}: {e}")))
}
