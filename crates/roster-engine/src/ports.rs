//! Collaborator ports consumed by the resolution engine.
//!
//! The engine owns the decision logic only; busy intervals, availability
//! windows, restriction schedules, and rule-to-range expansion all live
//! behind the traits here. Implementations must be `Send + Sync` so one
//! engine value can serve concurrent resolutions behind an `Arc`.

use async_trait::async_trait;
use chrono_tz::Tz;
use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::types::{
    AvailabilityRule, Candidate, CandidateAvailability, DateRange, EventConfiguration,
    IntervalLimits, LimitUsage, RestrictionSchedule, TimeWindow, TravelSchedule,
};

/// Filters for one limit-usage fetch, covering the whole candidate pool.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LimitUsageQuery {
    pub user_ids: Vec<i64>,
    pub event_id: i64,
    /// The normalized requested window.
    pub window: TimeWindow,
    /// Booking to leave out of the usage counts during a reschedule.
    pub reschedule_uid: Option<String>,
    pub booking_limits: Option<IntervalLimits>,
    pub duration_limits: Option<IntervalLimits>,
}

/// Source of bookings already counted against the event's interval limits.
#[async_trait]
pub trait LimitUsageSource: Send + Sync {
    /// Fetch limit-relevant bookings for every user in the query.
    ///
    /// Pure query: no side effects expected. Only invoked when the event
    /// configures booking or duration limits.
    async fn fetch_limit_usage(&self, query: &LimitUsageQuery) -> Result<Vec<LimitUsage>>;
}

/// Per-fetch parameters for the availability source.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AvailabilityQuery {
    /// The normalized requested window.
    pub window: TimeWindow,
    /// Zone the booker expressed the request in.
    pub time_zone: String,
    /// Slot length override carried during a reschedule (the original
    /// booking's span, in minutes). Absent for a fresh booking.
    pub duration_minutes: Option<i64>,
    /// Buffer minutes the source must pad busy intervals with.
    pub buffer_before: u32,
    pub buffer_after: u32,
    /// Permission to answer from the external cache instead of live
    /// calendars.
    pub serve_cached: bool,
}

/// Pass-through data the availability source seeds its own computation
/// with. The engine forwards it untouched.
#[derive(Debug, Clone, Copy)]
pub struct AvailabilitySeed<'a> {
    pub event: &'a EventConfiguration,
    pub reschedule_uid: Option<&'a str>,
    /// Limit usage fetched up front for the whole pool (empty when no
    /// limits are configured).
    pub limit_usage: &'a [LimitUsage],
}

/// Source of per-candidate date ranges and busy intervals.
#[async_trait]
pub trait AvailabilitySource: Send + Sync {
    /// Resolve availability for every candidate.
    ///
    /// Contract: the result has exactly one entry per candidate, in the
    /// same order as `candidates`. The engine rejects any other shape.
    async fn fetch_availability(
        &self,
        candidates: &[Candidate],
        query: &AvailabilityQuery,
        seed: AvailabilitySeed<'_>,
    ) -> Result<Vec<CandidateAvailability>>;
}

/// Store holding restriction schedules and their owners.
#[async_trait]
pub trait RestrictionScheduleStore: Send + Sync {
    /// Load a restriction schedule by id, with its owner's default-schedule
    /// pointer and travel schedules attached. `Ok(None)` when the id does
    /// not resolve.
    async fn load_restriction_schedule(
        &self,
        schedule_id: i64,
    ) -> Result<Option<RestrictionSchedule>>;
}

/// Expands availability rules into concrete UTC date ranges.
///
/// Treated as a pure function of its inputs: rules, the effective zone, the
/// requested window bounds, and whichever travel overrides apply. Rule
/// semantics (weekly patterns, date overrides, DST handling) live entirely
/// behind this port.
pub trait DateRangeBuilder: Send + Sync {
    fn build_date_ranges(
        &self,
        rules: &[AvailabilityRule],
        time_zone: Tz,
        window: TimeWindow,
        travel_schedules: &[TravelSchedule],
    ) -> Vec<DateRange>;
}

/// Destination for the engine's structured log lines.
///
/// Fire-and-forget: a sink never affects control flow, except that error
/// logging always happens before a failure propagates. Contexts handed to a
/// sink are already PII-free.
pub trait LogSink: Send + Sync {
    fn debug(&self, message: &str, context: &Value);
    fn error(&self, message: &str, context: &Value);
}

/// [`LogSink`] backed by the `tracing` macros.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn debug(&self, message: &str, context: &Value) {
        tracing::debug!(context = %context, "{message}");
    }

    fn error(&self, message: &str, context: &Value) {
        tracing::error!(context = %context, "{message}");
    }
}
