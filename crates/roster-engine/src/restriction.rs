//! Restriction-schedule gate.
//!
//! An event may pin bookings to an organization-level availability envelope
//! independent of any candidate's own calendar. This module loads that
//! schedule, resolves the zone its rules are read in (honoring the owner's
//! travel overrides when they apply), builds its concrete date ranges, and
//! requires the requested window to sit inside one of them.

use chrono_tz::Tz;
use serde_json::Value;

use crate::containment;
use crate::error::{Result, RosterError};
use crate::ports::{DateRangeBuilder, LogSink, RestrictionScheduleStore};
use crate::redact;
use crate::types::{TimeWindow, TravelSchedule};

/// Enforce the restriction schedule against the requested UTC window.
///
/// Hard failure points, in order:
/// 1. the schedule id does not resolve
///    ([`RosterError::RestrictionScheduleNotFound`]);
/// 2. `use_booker_timezone` is false and the schedule has no zone of its own
///    ([`RosterError::BookingNotAllowedByRestrictionSchedule`]) -- an
///    ambiguous fallback is disallowed, and this fires before any range is
///    built;
/// 3. the window is not contained in any built range
///    ([`RosterError::BookingNotAllowedByRestrictionSchedule`]).
///
/// Travel overrides participate in range building only when this schedule is
/// the owner's default AND the schedule's own zone governs
/// (`use_booker_timezone` false); otherwise they are ignored entirely.
///
/// Any error inside the gate -- including store failures -- is logged exactly
/// once with the redacted context, then returned unchanged.
#[allow(clippy::too_many_arguments)]
pub async fn enforce(
    store: &dyn RestrictionScheduleStore,
    builder: &dyn DateRangeBuilder,
    schedule_id: i64,
    use_booker_timezone: bool,
    booker_time_zone: &str,
    window: TimeWindow,
    log: &dyn LogSink,
    context: &Value,
) -> Result<()> {
    let outcome = check(
        store,
        builder,
        schedule_id,
        use_booker_timezone,
        booker_time_zone,
        window,
    )
    .await;

    if let Err(error) = &outcome {
        log.error(
            "restriction schedule check failed",
            &redact::with_error(context, error),
        );
    }
    outcome
}

async fn check(
    store: &dyn RestrictionScheduleStore,
    builder: &dyn DateRangeBuilder,
    schedule_id: i64,
    use_booker_timezone: bool,
    booker_time_zone: &str,
    window: TimeWindow,
) -> Result<()> {
    let schedule = store
        .load_restriction_schedule(schedule_id)
        .await?
        .ok_or(RosterError::RestrictionScheduleNotFound(schedule_id))?;

    let zone_name = if use_booker_timezone {
        booker_time_zone
    } else {
        schedule
            .time_zone
            .as_deref()
            .ok_or(RosterError::BookingNotAllowedByRestrictionSchedule)?
    };
    let zone: Tz = zone_name
        .parse()
        .map_err(|_| RosterError::InvalidTimezone(zone_name.to_string()))?;

    let is_default_schedule = schedule.owner.default_schedule_id == Some(schedule.id);
    let travel_schedules: &[TravelSchedule] = if is_default_schedule && !use_booker_timezone {
        &schedule.owner.travel_schedules
    } else {
        &[]
    };

    let ranges = builder.build_date_ranges(&schedule.availability, zone, window, travel_schedules);
    if !containment::contains_window(&ranges, window) {
        return Err(RosterError::BookingNotAllowedByRestrictionSchedule);
    }
    Ok(())
}
