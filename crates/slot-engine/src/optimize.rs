//! Fallback search that maximizes optional attendance.
//!
//! Invoked only when no window suits every optional attendee at once. For
//! each mandatory-feasible range the search finds the sub-windows where the
//! fewest optional attendees have conflicts, then keeps the windows of every
//! range tied at the best attendance count found anywhere in the day.

use std::collections::HashSet;

use crate::event::Event;
use crate::range::TimeRange;

/// Windows inside `mandatory_free` where the greatest number of optional
/// attendees can attend, always honoring all mandatory attendees.
///
/// Each mandatory-feasible range contributes an attendance score (how many
/// optional attendees can simultaneously attend some sub-window of at least
/// `duration` minutes) and its maximal sub-windows at that score. Ranges tied
/// at the global maximum all keep their windows; a strictly larger score
/// replaces everything kept so far. When the global maximum is zero, no
/// optional attendee ever fits and `mandatory_free` stands as-is.
///
/// Emitted windows may be proper sub-intervals of the mandatory-feasible
/// ranges: the fallback trades range completeness for optional attendance.
pub fn maximize_optional_attendance(
    mandatory_free: &[TimeRange],
    events: &[Event],
    duration: u32,
    optional: &HashSet<String>,
) -> Vec<TimeRange> {
    let mut best_score = 0;
    let mut best: Vec<TimeRange> = Vec::new();

    for &range in mandatory_free {
        // Only events with at least one optional attendee can change the
        // attendance count inside this range.
        let overlapping: Vec<&Event> = events
            .iter()
            .filter(|e| {
                e.when.overlaps(range) && e.attendees.iter().any(|a| optional.contains(a))
            })
            .collect();

        let (score, windows) = range_max_attendance(range, &overlapping, optional, duration);
        if score > best_score {
            best_score = score;
            best = windows;
        } else if score == best_score {
            best.extend(windows);
        }
    }

    if best_score == 0 {
        return mandatory_free.to_vec();
    }
    best
}

/// Best attendance achievable inside one range, with the maximal sub-windows
/// achieving it.
///
/// Tries conflict budgets in increasing order: a window that conflicts with
/// `allowed` optional attendees still admits the remaining
/// `optional.len() - allowed`, so the first budget that yields any window is
/// the optimum for this range. A range where no budget below `optional.len()`
/// fits a full-duration window scores zero.
fn range_max_attendance(
    range: TimeRange,
    overlapping: &[&Event],
    optional: &HashSet<String>,
    duration: u32,
) -> (usize, Vec<TimeRange>) {
    let timeline = BusyTimeline::build(range, overlapping, optional);

    for allowed in 0..optional.len() {
        let mut scan = WindowScan::new(&timeline, allowed, duration);
        let mut found = Vec::new();
        while let Some(window) = scan.next_window() {
            found.push(window);
        }
        if !found.is_empty() {
            return (optional.len() - allowed, found);
        }
    }

    (0, Vec::new())
}

/// Per-minute sets of busy optional attendees within one candidate range.
struct BusyTimeline<'a> {
    range: TimeRange,
    busy: Vec<HashSet<&'a str>>,
}

impl<'a> BusyTimeline<'a> {
    /// Index the optional attendees of `overlapping` minute by minute,
    /// clipped to `range`.
    fn build(range: TimeRange, overlapping: &[&'a Event], optional: &HashSet<String>) -> Self {
        let mut busy = vec![HashSet::new(); range.duration() as usize];
        for event in overlapping {
            let clipped_start = event.when.start().max(range.start());
            let clipped_end = event.when.end().min(range.end());
            for attendee in &event.attendees {
                if !optional.contains(attendee) {
                    continue;
                }
                for minute in clipped_start..clipped_end {
                    busy[(minute - range.start()) as usize].insert(attendee.as_str());
                }
            }
        }
        BusyTimeline { range, busy }
    }

    fn busy_at(&self, minute: u32) -> &HashSet<&'a str> {
        &self.busy[(minute - self.range.start()) as usize]
    }
}

/// One pass over a range at a fixed conflict budget.
///
/// The scan cursor is explicit state: after a window is emitted the cursor
/// resumes at the window's end, so the same scan never re-emits overlapping
/// sub-windows.
struct WindowScan<'t, 'a> {
    timeline: &'t BusyTimeline<'a>,
    allowed: usize,
    duration: u32,
    cursor: u32,
}

impl<'t, 'a> WindowScan<'t, 'a> {
    fn new(timeline: &'t BusyTimeline<'a>, allowed: usize, duration: u32) -> Self {
        WindowScan {
            cursor: timeline.range.start(),
            timeline,
            allowed,
            duration,
        }
    }

    /// Next maximal window whose busy-attendee union stays within the budget.
    ///
    /// A candidate start is viable when the union over the minimum-duration
    /// window is small enough; the end is then stretched minute by minute
    /// until stretching would break the budget.
    fn next_window(&mut self) -> Option<TimeRange> {
        let range_end = self.timeline.range.end();

        while self.cursor.saturating_add(self.duration) <= range_end {
            let start = self.cursor;
            let mut unavailable: HashSet<&str> = HashSet::new();
            for minute in start..start + self.duration {
                unavailable.extend(self.timeline.busy_at(minute));
            }
            if unavailable.len() > self.allowed {
                self.cursor += 1;
                continue;
            }

            let mut end = start + self.duration;
            while end < range_end && fits_budget(self.timeline.busy_at(end), &mut unavailable, self.allowed)
            {
                end += 1;
            }

            // Always move forward, even if a zero-duration request produced
            // an empty window.
            self.cursor = end.max(start + 1);
            if end > start {
                return Some(TimeRange::unchecked(start, end));
            }
        }

        None
    }
}

/// Add `attendees` to `unavailable` and report whether the union stays within
/// `allowed`. A partial insertion on overflow is irrelevant: the caller
/// finalizes the window immediately.
fn fits_budget<'a>(
    attendees: &HashSet<&'a str>,
    unavailable: &mut HashSet<&'a str>,
    allowed: usize,
) -> bool {
    for &attendee in attendees {
        unavailable.insert(attendee);
        if unavailable.len() > allowed {
            return false;
        }
    }
    true
}
