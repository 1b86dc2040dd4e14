//! PII-free log contexts.
//!
//! Log sinks may be wired to anything, so candidate names and emails never
//! reach them: contexts carry ids, flags, and window bounds only. One
//! context is built per resolution and reused by every log line about it.

use serde_json::{json, Value};

use crate::error::RosterError;
use crate::types::{Candidate, EventConfiguration, OriginalBooking, SlotRequest, TimeWindow};

/// The shared context for one resolution: event id, normalized window,
/// booker zone, candidate summaries, and the original booking's span during
/// a reschedule.
pub fn request_context(
    event: &EventConfiguration,
    request: &SlotRequest,
    window: TimeWindow,
) -> Value {
    let candidates: Vec<Value> = event.candidates.iter().map(candidate_summary).collect();
    json!({
        "eventId": event.id,
        "windowStartUtc": window.start,
        "windowEndUtc": window.end,
        "timeZone": request.time_zone,
        "candidates": candidates,
        "originalBooking": request.original_booking.as_ref().map(booking_summary),
    })
}

/// A context with the error's display text attached, for the log line that
/// precedes a failure's propagation.
pub(crate) fn with_error(context: &Value, error: &RosterError) -> Value {
    match context {
        Value::Object(fields) => {
            let mut fields = fields.clone();
            fields.insert("error".into(), Value::String(error.to_string()));
            Value::Object(fields)
        }
        other => json!({ "context": other, "error": error.to_string() }),
    }
}

fn candidate_summary(candidate: &Candidate) -> Value {
    json!({ "id": candidate.id, "isFixed": candidate.is_fixed })
}

fn booking_summary(booking: &OriginalBooking) -> Value {
    json!({ "uid": booking.uid, "startTime": booking.start, "endTime": booking.end })
}
