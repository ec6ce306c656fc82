//! The meeting-time query entry point.
//!
//! Orchestrates the per-group availability maps: mandatory-only feasibility,
//! optional-only feasibility, their intersection, and the optimization
//! fallback when no window suits every optional attendee.

use crate::bitmap::MinuteMap;
use crate::event::{Event, MeetingRequest};
use crate::optimize::maximize_optional_attendance;
use crate::range::TimeRange;

/// Find every window of the day in which the requested meeting can be held.
///
/// Mandatory attendees are honored strictly: no returned window overlaps an
/// event that a mandatory attendee is attending. Optional attendees are
/// satisfied best-effort:
///
/// 1. If windows exist that suit every mandatory and every optional attendee,
///    exactly those windows are returned.
/// 2. If only optional attendees were requested and they share no window, the
///    result is empty; there is no mandatory baseline to fall back to.
/// 3. Otherwise a fallback search returns the windows where the greatest
///    number of optional attendees can attend. When not even one optional
///    attendee ever fits, the mandatory-only windows are returned unchanged.
///
/// The result is sorted by start time, pairwise disjoint, and every window is
/// at least `request.duration_minutes` long. A duration longer than the day
/// yields an empty result. Empty attendee sets impose no constraints, so with
/// no events (or no relevant events) the whole day comes back as one window.
pub fn find_meeting_times(events: &[Event], request: &MeetingRequest) -> Vec<TimeRange> {
    let duration = request.duration_minutes;

    let mandatory_free = MinuteMap::free_for(events, &request.mandatory).free_runs(duration);
    let optional_free = MinuteMap::free_for(events, &request.optional).free_runs(duration);

    let both = intersect_ranges(&mandatory_free, &optional_free, duration);
    if !both.is_empty() {
        return both;
    }

    if request.mandatory.is_empty() {
        return Vec::new();
    }

    maximize_optional_attendance(&mandatory_free, events, duration, &request.optional)
}

/// Maximal runs of at least `min_duration` minutes free in both range sets.
///
/// Goes through a minute map rather than pairwise range intersection so that
/// adjacent and overlapping sub-ranges from either side merge into maximal
/// combined runs.
fn intersect_ranges(a: &[TimeRange], b: &[TimeRange], min_duration: u32) -> Vec<TimeRange> {
    let mut combined = MinuteMap::from_free_ranges(a);
    combined.intersect(&MinuteMap::from_free_ranges(b));
    combined.free_runs(min_duration)
}
