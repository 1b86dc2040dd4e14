//! Window containment -- is a requested window fully inside some date range?

use crate::types::{DateRange, TimeWindow};

/// True iff at least one range fully contains `window`, boundary-inclusive
/// on both ends: a window that starts exactly at a range's start or ends
/// exactly at its end still counts as contained.
///
/// This is an existential test over the ranges, so evaluation order cannot
/// change the result; the scan stops at the first containing range. Empty
/// `ranges` always yields false.
pub fn contains_window(ranges: &[DateRange], window: TimeWindow) -> bool {
    ranges
        .iter()
        .any(|range| window.start >= range.start && window.end <= range.end)
}
