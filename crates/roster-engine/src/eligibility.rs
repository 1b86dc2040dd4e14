//! Per-candidate eligibility evaluation.
//!
//! Walks the pool in configuration order and decides, for each candidate,
//! whether the requested window is something they can actually take: their
//! date ranges must cover the window, and none of their busy intervals may
//! overlap the effective slot. The output preserves the pool's relative
//! order; the engine never reorders candidates, only filters them.

use serde_json::{json, Value};

use crate::conflict;
use crate::containment;
use crate::error::{Result, RosterError};
use crate::ports::LogSink;
use crate::redact;
use crate::types::{Candidate, CandidateAvailability, TimeWindow};

/// Evaluate every candidate against the requested window and accumulate the
/// eligible ones.
///
/// Per candidate, in order:
/// 1. empty date ranges → excluded (no availability in the window at all);
/// 2. window not contained in any range → excluded;
/// 3. a busy interval overlaps `[window.start, window.start +
///    effective_minutes)` → excluded, otherwise included.
///
/// When the conflict check itself fails, the candidate is included anyway
/// and the error is logged. A transient evaluation failure must not remove
/// an otherwise-plausible candidate from consideration; that asymmetry is
/// deliberate, availability over correctness.
///
/// # Errors
/// Returns [`RosterError::NoAvailableUsersFound`] when nobody survives,
/// including for an empty pool. Never returns an empty list.
pub fn evaluate(
    candidates: &[Candidate],
    availability: &[CandidateAvailability],
    window: TimeWindow,
    effective_minutes: i64,
    log: &dyn LogSink,
    context: &Value,
) -> Result<Vec<Candidate>> {
    let mut included = Vec::new();

    for (candidate, fetched) in candidates.iter().zip(availability) {
        log.debug(
            "evaluating candidate availability",
            &json!({
                "candidateId": candidate.id,
                "dateRanges": fetched.date_ranges,
                "busy": fetched.busy,
            }),
        );

        if fetched.date_ranges.is_empty() {
            log.error("candidate has no availability in window", context);
            continue;
        }
        if !containment::contains_window(&fetched.date_ranges, window) {
            log.error("candidate ranges do not cover the window", context);
            continue;
        }

        match conflict::has_conflict(&fetched.busy, window.start, effective_minutes) {
            Ok(true) => {}
            Ok(false) => included.push(candidate.clone()),
            Err(error) => {
                // Fail open: a broken conflict check keeps the candidate in.
                log.error(
                    "conflict check failed, treating candidate as available",
                    &json!({
                        "candidateId": candidate.id,
                        "error": error.to_string(),
                    }),
                );
                included.push(candidate.clone());
            }
        }
    }

    if included.is_empty() {
        let error = RosterError::NoAvailableUsersFound;
        log.error(
            "all candidates excluded",
            &redact::with_error(context, &error),
        );
        return Err(error);
    }
    Ok(included)
}
