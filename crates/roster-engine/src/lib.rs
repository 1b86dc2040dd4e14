//! # roster-engine
//!
//! Timezone-exact assignee resolution for scheduled bookings.
//!
//! Given an event's candidate pool and a requested time window, the engine
//! decides which candidates can actually take the slot by combining four
//! independent constraint sources: personal availability ranges,
//! busy-interval conflicts, aggregate booking/duration limits, and an
//! optional organization-wide restriction schedule. The result is either a
//! non-empty ordered subset of the pool or exactly one failure kind; no
//! partial results.
//!
//! Storage, calendar fetching, recurrence-rule expansion, and caching live
//! behind the traits in [`ports`]; this crate owns the decision logic only.
//!
//! ## Modules
//!
//! - [`engine`] — the resolution orchestrator, one operation
//! - [`eligibility`] — per-candidate verdicts over a fetched pool
//! - [`restriction`] — the organization-level restriction-schedule gate
//! - [`containment`] — window-in-ranges existential test
//! - [`conflict`] — busy-interval overlap detection
//! - [`normalize`] — wall-clock request markers → UTC instants
//! - [`ports`] — collaborator traits and their query/seed records
//! - [`redact`] — PII-free log contexts
//! - [`types`] — data model
//! - [`error`] — error kinds

pub mod conflict;
pub mod containment;
pub mod eligibility;
pub mod engine;
pub mod error;
pub mod normalize;
pub mod ports;
pub mod redact;
pub mod restriction;
pub mod types;

pub use containment::contains_window;
pub use engine::Engine;
pub use error::{Result, RosterError};
pub use ports::{
    AvailabilityQuery, AvailabilitySeed, AvailabilitySource, DateRangeBuilder, LimitUsageQuery,
    LimitUsageSource, LogSink, RestrictionScheduleStore, TracingSink,
};
pub use types::{
    BusyInterval, Candidate, CandidateAvailability, DateRange, EventConfiguration, IntervalLimits,
    LimitUsage, OriginalBooking, RestrictionSchedule, SlotRequest, TimeWindow, TravelSchedule,
};
