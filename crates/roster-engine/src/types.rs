//! Data model for candidate resolution.
//!
//! Everything here is constructed fresh per invocation from caller input or
//! collaborator responses and discarded at return; the engine never mutates
//! a value it was handed. Identifiers are the plain numeric ids of the
//! backing store.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{Result, RosterError};

/// A block of UTC time bounded by two instants.
///
/// Invariant: `start <= end`. [`TimeWindow::new`] enforces it for windows the
/// engine builds itself; windows arriving from collaborators are assumed
/// well-formed, like the disjointness of a candidate's date ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    /// Build a window, rejecting inverted bounds.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self> {
        if end < start {
            return Err(RosterError::InvalidWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// Whole minutes between start and end.
    pub fn minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

/// One contiguous block in which a candidate (or a restriction schedule) is
/// available.
pub type DateRange = TimeWindow;

/// A pre-committed block of time that conflicts with new bookings. Lead and
/// trail buffers are already applied by the upstream source.
pub type BusyInterval = TimeWindow;

/// An assignee from the event's pool.
///
/// `is_fixed` distinguishes fixed participants (always included downstream)
/// from round-robin-eligible ones; the engine carries the flag opaquely and
/// only filters, never reorders. Name and email are PII and never reach a
/// log sink — see [`crate::redact`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
    pub is_fixed: bool,
}

/// Optional per-interval booking caps, keyed the way scheduling backends
/// store them (`PER_DAY`, `PER_WEEK`, ...). The engine forwards these to the
/// limit-usage source and never interprets them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct IntervalLimits {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_day: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_week: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_month: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_year: Option<u32>,
}

/// Read-only configuration of the event being booked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventConfiguration {
    pub id: i64,
    /// Buffer minutes required before the slot. Forwarded to the
    /// availability source, which folds buffers into the busy intervals it
    /// returns.
    pub buffer_before: u32,
    /// Buffer minutes required after the slot.
    pub buffer_after: u32,
    pub booking_limits: Option<IntervalLimits>,
    pub duration_limits: Option<IntervalLimits>,
    /// When set, the [`restriction`](crate::restriction) gate runs against
    /// this schedule before candidates are evaluated.
    pub restriction_schedule_id: Option<i64>,
    /// Resolve the restriction schedule in the booker's timezone instead of
    /// the schedule's own.
    pub use_booker_timezone: bool,
    pub candidates: Vec<Candidate>,
}

impl EventConfiguration {
    /// True when either limit table is configured, i.e. when limit usage
    /// must be fetched.
    pub fn has_interval_limits(&self) -> bool {
        self.booking_limits.is_some() || self.duration_limits.is_some()
    }
}

/// One resolved availability row of a restriction schedule: a weekly pattern
/// (`days` + times) or a single-date override (`date` set). The engine never
/// interprets rules itself; the [`DateRangeBuilder`](crate::ports::DateRangeBuilder)
/// port turns them into concrete UTC ranges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityRule {
    pub days: Vec<Weekday>,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub date: Option<NaiveDate>,
}

/// A temporary timezone override tied to date bounds, applied to the
/// schedule owner while traveling. `end_date: None` means open-ended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelSchedule {
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub time_zone: String,
}

/// The owner fields the restriction gate needs: which schedule is the
/// owner's default, and any travel overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleOwner {
    pub default_schedule_id: Option<i64>,
    pub travel_schedules: Vec<TravelSchedule>,
}

/// An organization-level availability envelope that independently gates
/// bookability regardless of individual candidate availability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestrictionSchedule {
    pub id: i64,
    /// IANA zone name. May be absent; resolution then requires
    /// `use_booker_timezone`.
    pub time_zone: Option<String>,
    pub owner_id: i64,
    pub availability: Vec<AvailabilityRule>,
    pub owner: ScheduleOwner,
}

/// The booking being moved, during a reschedule.
///
/// Its span — not the requested window's — is the duration conflict checks
/// run with, so a reschedule preserves the booked slot length even when the
/// new window markers differ. Its uid is forwarded to collaborators so the
/// old booking does not conflict with itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OriginalBooking {
    pub uid: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl OriginalBooking {
    /// Whole minutes of the original span.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

/// The caller's desired slot, as raw wall-clock markers plus the zone they
/// are expressed in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotRequest {
    /// Wall-clock start, e.g. `"2026-03-16T09:00:00"` or RFC 3339.
    pub date_from: String,
    /// Wall-clock end, same formats.
    pub date_to: String,
    /// IANA zone name the markers are expressed in, or the literal-UTC
    /// marker [`UTC_ZONE_MARKER`](crate::normalize::UTC_ZONE_MARKER).
    pub time_zone: String,
    pub original_booking: Option<OriginalBooking>,
}

/// One booking already counted against an interval limit, tagged with the
/// user it belongs to. Fetched once for the whole pool and forwarded to the
/// availability source untouched; the engine never reads the contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimitUsage {
    pub user_id: i64,
    pub interval: BusyInterval,
}

/// What the availability source resolved for one candidate: the date ranges
/// the candidate is bookable in (out-of-office already excluded) and the
/// buffer-padded busy intervals committed against them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateAvailability {
    pub date_ranges: Vec<DateRange>,
    pub busy: Vec<BusyInterval>,
}
