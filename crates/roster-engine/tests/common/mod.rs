//! In-memory port doubles and fixture helpers shared by the integration
//! tests. Each double records what it was asked so tests can assert on the
//! queries the engine builds, not just on the final verdict.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde_json::Value;

use roster_engine::ports::{
    AvailabilityQuery, AvailabilitySeed, AvailabilitySource, DateRangeBuilder, LimitUsageQuery,
    LimitUsageSource, LogSink, RestrictionScheduleStore,
};
use roster_engine::types::{
    Candidate, CandidateAvailability, DateRange, EventConfiguration, LimitUsage, OriginalBooking,
    RestrictionSchedule, ScheduleOwner, SlotRequest, TimeWindow, TravelSchedule,
};
use roster_engine::{Engine, Result};

// ---------------------------------------------------------------------------
// Fixture helpers
// ---------------------------------------------------------------------------

pub fn utc(day: u32, hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, day, hour, min, 0).unwrap()
}

pub fn window(day: u32, from: (u32, u32), to: (u32, u32)) -> TimeWindow {
    TimeWindow {
        start: utc(day, from.0, from.1),
        end: utc(day, to.0, to.1),
    }
}

pub fn candidate(id: i64) -> Candidate {
    Candidate {
        id,
        name: Some(format!("Candidate {id}")),
        email: Some(format!("candidate{id}@example.com")),
        is_fixed: false,
    }
}

pub fn event(candidates: Vec<Candidate>) -> EventConfiguration {
    EventConfiguration {
        id: 7,
        buffer_before: 0,
        buffer_after: 0,
        booking_limits: None,
        duration_limits: None,
        restriction_schedule_id: None,
        use_booker_timezone: false,
        candidates,
    }
}

/// A request for 2026-03-16 09:00–09:30 UTC, no reschedule.
pub fn request() -> SlotRequest {
    SlotRequest {
        date_from: "2026-03-16T09:00:00".into(),
        date_to: "2026-03-16T09:30:00".into(),
        time_zone: "Etc/GMT".into(),
        original_booking: None,
    }
}

pub fn reschedule(uid: &str, minutes: i64) -> OriginalBooking {
    OriginalBooking {
        uid: uid.into(),
        start: utc(1, 10, 0),
        end: utc(1, 10, 0) + chrono::Duration::minutes(minutes),
    }
}

/// Availability that covers the whole of 2026-03-16, no busy intervals.
pub fn open_day() -> CandidateAvailability {
    CandidateAvailability {
        date_ranges: vec![window(16, (0, 0), (23, 59))],
        busy: vec![],
    }
}

pub fn schedule_owner(default_schedule_id: Option<i64>) -> ScheduleOwner {
    ScheduleOwner {
        default_schedule_id,
        travel_schedules: vec![],
    }
}

pub fn travel(zone: &str) -> TravelSchedule {
    TravelSchedule {
        start_date: utc(1, 0, 0),
        end_date: None,
        time_zone: zone.into(),
    }
}

// ---------------------------------------------------------------------------
// Log sink double
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct LogLine {
    pub level: &'static str,
    pub message: String,
    pub context: Value,
}

#[derive(Debug, Default)]
pub struct RecordingSink {
    pub lines: Mutex<Vec<LogLine>>,
}

impl RecordingSink {
    fn push(&self, level: &'static str, message: &str, context: &Value) {
        self.lines.lock().unwrap().push(LogLine {
            level,
            message: message.into(),
            context: context.clone(),
        });
    }

    pub fn errors(&self) -> Vec<LogLine> {
        self.lines
            .lock()
            .unwrap()
            .iter()
            .filter(|line| line.level == "error")
            .cloned()
            .collect()
    }
}

impl LogSink for RecordingSink {
    fn debug(&self, message: &str, context: &Value) {
        self.push("debug", message, context);
    }

    fn error(&self, message: &str, context: &Value) {
        self.push("error", message, context);
    }
}

// ---------------------------------------------------------------------------
// Port doubles
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct StubLimits {
    pub usage: Vec<LimitUsage>,
    pub queries: Mutex<Vec<LimitUsageQuery>>,
}

#[async_trait]
impl LimitUsageSource for StubLimits {
    async fn fetch_limit_usage(&self, query: &LimitUsageQuery) -> Result<Vec<LimitUsage>> {
        self.queries.lock().unwrap().push(query.clone());
        Ok(self.usage.clone())
    }
}

#[derive(Default)]
pub struct StubAvailability {
    pub entries: Vec<CandidateAvailability>,
    pub queries: Mutex<Vec<AvailabilityQuery>>,
    pub seeded_usage: Mutex<Vec<Vec<LimitUsage>>>,
}

#[async_trait]
impl AvailabilitySource for StubAvailability {
    async fn fetch_availability(
        &self,
        _candidates: &[Candidate],
        query: &AvailabilityQuery,
        seed: AvailabilitySeed<'_>,
    ) -> Result<Vec<CandidateAvailability>> {
        self.queries.lock().unwrap().push(query.clone());
        self.seeded_usage
            .lock()
            .unwrap()
            .push(seed.limit_usage.to_vec());
        Ok(self.entries.clone())
    }
}

#[derive(Default)]
pub struct StubScheduleStore {
    pub schedule: Option<RestrictionSchedule>,
}

#[async_trait]
impl RestrictionScheduleStore for StubScheduleStore {
    async fn load_restriction_schedule(
        &self,
        _schedule_id: i64,
    ) -> Result<Option<RestrictionSchedule>> {
        Ok(self.schedule.clone())
    }
}

/// Records every build call (the zone and travel schedules it received) and
/// answers with the same fixed set of ranges.
#[derive(Default)]
pub struct StubRangeBuilder {
    pub ranges: Vec<DateRange>,
    pub calls: Mutex<Vec<(Tz, Vec<TravelSchedule>)>>,
}

impl DateRangeBuilder for StubRangeBuilder {
    fn build_date_ranges(
        &self,
        _rules: &[roster_engine::types::AvailabilityRule],
        time_zone: Tz,
        _window: TimeWindow,
        travel_schedules: &[TravelSchedule],
    ) -> Vec<DateRange> {
        self.calls
            .lock()
            .unwrap()
            .push((time_zone, travel_schedules.to_vec()));
        self.ranges.clone()
    }
}

// ---------------------------------------------------------------------------
// Engine assembly
// ---------------------------------------------------------------------------

pub struct Harness {
    pub limits: Arc<StubLimits>,
    pub availability: Arc<StubAvailability>,
    pub store: Arc<StubScheduleStore>,
    pub builder: Arc<StubRangeBuilder>,
    pub engine: Engine,
}

/// Wire an engine whose availability source answers with `entries`.
pub fn harness(entries: Vec<CandidateAvailability>) -> Harness {
    harness_with(entries, StubLimits::default(), StubScheduleStore::default())
}

pub fn harness_with(
    entries: Vec<CandidateAvailability>,
    limits: StubLimits,
    store: StubScheduleStore,
) -> Harness {
    let limits = Arc::new(limits);
    let availability = Arc::new(StubAvailability {
        entries,
        ..Default::default()
    });
    let store = Arc::new(store);
    let builder = Arc::new(StubRangeBuilder::default());
    let engine = Engine::new(
        limits.clone(),
        availability.clone(),
        store.clone(),
        builder.clone(),
    );
    Harness {
        limits,
        availability,
        store,
        builder,
        engine,
    }
}
