//! Resolution orchestrator.
//!
//! One engine value wires the four collaborator ports together and exposes
//! the single operation of this crate: resolve, for a requested slot, the
//! ordered non-empty subset of the event's candidate pool that can actually
//! take it. The pipeline is normalize → fetch limit usage (when limits are
//! configured) → fetch availability → restriction gate (when configured) →
//! evaluate, with every failure surfacing as one [`RosterError`] kind.

use std::sync::Arc;

use crate::eligibility;
use crate::error::{Result, RosterError};
use crate::normalize;
use crate::ports::{
    AvailabilityQuery, AvailabilitySeed, AvailabilitySource, DateRangeBuilder, LimitUsageQuery,
    LimitUsageSource, LogSink, RestrictionScheduleStore,
};
use crate::redact;
use crate::restriction;
use crate::types::{Candidate, EventConfiguration, LimitUsage, SlotRequest, TimeWindow};

/// The resolution engine. Cheap to clone; ports live behind `Arc` so one
/// engine can serve concurrent resolutions.
#[derive(Clone)]
pub struct Engine {
    limits: Arc<dyn LimitUsageSource>,
    availability: Arc<dyn AvailabilitySource>,
    schedules: Arc<dyn RestrictionScheduleStore>,
    ranges: Arc<dyn DateRangeBuilder>,
}

impl Engine {
    pub fn new(
        limits: Arc<dyn LimitUsageSource>,
        availability: Arc<dyn AvailabilitySource>,
        schedules: Arc<dyn RestrictionScheduleStore>,
        ranges: Arc<dyn DateRangeBuilder>,
    ) -> Self {
        Self {
            limits,
            availability,
            schedules,
            ranges,
        }
    }

    /// Resolve the candidates able to take the requested slot.
    ///
    /// On success the returned list is never empty and preserves the pool's
    /// configuration order. `serve_cached` is forwarded to the availability
    /// source untouched; the engine has no cache of its own.
    ///
    /// The conflict check runs over the *effective* duration: the original
    /// booking's span during a reschedule, the requested window's raw span
    /// otherwise. Window containment, on the other hand, always tests the
    /// raw requested window; the two deliberately diverge on reschedule.
    ///
    /// # Errors
    /// - [`RosterError::NoAvailableUsersFound`] when every candidate is
    ///   excluded;
    /// - [`RosterError::RestrictionScheduleNotFound`] and
    ///   [`RosterError::BookingNotAllowedByRestrictionSchedule`] from the
    ///   restriction gate;
    /// - [`RosterError::MalformedTimestamp`], [`RosterError::InvalidTimezone`]
    ///   and [`RosterError::InvalidWindow`] for bad request input;
    /// - [`RosterError::Backend`] when a port fails or the availability
    ///   source violates its one-entry-per-candidate shape contract.
    pub async fn resolve_available_candidates(
        &self,
        event: &EventConfiguration,
        request: &SlotRequest,
        log: &dyn LogSink,
        serve_cached: bool,
    ) -> Result<Vec<Candidate>> {
        let start_utc = normalize::to_utc(&request.date_from, &request.time_zone)?;
        let end_utc = normalize::to_utc(&request.date_to, &request.time_zone)?;
        let window = TimeWindow::new(start_utc, end_utc)?;

        let raw_minutes = normalize::raw_duration_minutes(&request.date_from, &request.date_to)?;
        let effective_minutes = request
            .original_booking
            .as_ref()
            .map(|booking| booking.duration_minutes())
            .unwrap_or(raw_minutes);
        let reschedule_uid = request
            .original_booking
            .as_ref()
            .map(|booking| booking.uid.as_str());

        let context = redact::request_context(event, request, window);
        log.debug("resolving available candidates", &context);

        let limit_usage = self
            .fetch_limit_usage(event, window, reschedule_uid)
            .await?;

        let query = AvailabilityQuery {
            window,
            time_zone: request.time_zone.clone(),
            duration_minutes: request
                .original_booking
                .as_ref()
                .map(|booking| booking.duration_minutes()),
            buffer_before: event.buffer_before,
            buffer_after: event.buffer_after,
            serve_cached,
        };
        let seed = AvailabilitySeed {
            event,
            reschedule_uid,
            limit_usage: &limit_usage,
        };
        let availability = self
            .availability
            .fetch_availability(&event.candidates, &query, seed)
            .await?;
        if availability.len() != event.candidates.len() {
            return Err(RosterError::Backend(format!(
                "availability source returned {} entries for {} candidates",
                availability.len(),
                event.candidates.len()
            )));
        }

        if let Some(schedule_id) = event.restriction_schedule_id {
            restriction::enforce(
                self.schedules.as_ref(),
                self.ranges.as_ref(),
                schedule_id,
                event.use_booker_timezone,
                &request.time_zone,
                window,
                log,
                &context,
            )
            .await?;
        }

        eligibility::evaluate(
            &event.candidates,
            &availability,
            window,
            effective_minutes,
            log,
            &context,
        )
    }

    /// Fetch bookings counted against the event's interval limits, or skip
    /// the fetch entirely when no limit is configured. The skip is a
    /// performance short-circuit only; an empty result means the same thing
    /// either way.
    async fn fetch_limit_usage(
        &self,
        event: &EventConfiguration,
        window: TimeWindow,
        reschedule_uid: Option<&str>,
    ) -> Result<Vec<LimitUsage>> {
        if !event.has_interval_limits() {
            return Ok(Vec::new());
        }
        let query = LimitUsageQuery {
            user_ids: event.candidates.iter().map(|c| c.id).collect(),
            event_id: event.id,
            window,
            reschedule_uid: reschedule_uid.map(str::to_string),
            booking_limits: event.booking_limits.clone(),
            duration_limits: event.duration_limits.clone(),
        };
        self.limits.fetch_limit_usage(&query).await
    }
}
