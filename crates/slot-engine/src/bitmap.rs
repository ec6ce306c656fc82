//! Per-minute free/busy maps for a single day.
//!
//! The working representation behind every query: a fixed 1440-slot boolean
//! map where index `i` covers the minute `[i, i+1)` and `true` means free.
//! Maps are built fresh per sub-computation and discarded after run
//! extraction; nothing here is shared or persisted.

use std::collections::HashSet;

use crate::event::Event;
use crate::range::{TimeRange, MINUTES_PER_DAY};

const DAY_LEN: usize = MINUTES_PER_DAY as usize;

/// A per-minute availability map covering one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinuteMap {
    free: [bool; DAY_LEN],
}

impl MinuteMap {
    fn filled(free: bool) -> Self {
        MinuteMap {
            free: [free; DAY_LEN],
        }
    }

    /// Map of the minutes when none of `attendees` is busy.
    ///
    /// An event blocks its minutes iff its attendee set intersects
    /// `attendees`; marking is idempotent, so overlapping or duplicate events
    /// compound correctly. An empty filter yields an all-free map regardless
    /// of events.
    pub fn free_for(events: &[Event], attendees: &HashSet<String>) -> Self {
        let mut map = Self::filled(true);
        for event in events {
            if event.attendees.iter().any(|a| attendees.contains(a)) {
                map.mark_busy(event.when);
            }
        }
        map
    }

    /// Map that is free exactly on the minutes covered by `ranges`.
    pub fn from_free_ranges(ranges: &[TimeRange]) -> Self {
        let mut map = Self::filled(false);
        for range in ranges {
            for minute in range.start()..range.end() {
                map.free[minute as usize] = true;
            }
        }
        map
    }

    fn mark_busy(&mut self, range: TimeRange) {
        for minute in range.start()..range.end() {
            self.free[minute as usize] = false;
        }
    }

    /// Keep only the minutes free in both maps.
    pub fn intersect(&mut self, other: &MinuteMap) {
        for (slot, &free) in self.free.iter_mut().zip(other.free.iter()) {
            *slot = *slot && free;
        }
    }

    /// Maximal free runs of at least `min_duration` minutes, sorted by start.
    ///
    /// A single left-to-right scan; the end of the day acts as an implicit
    /// busy sentinel so a run touching minute 1439 is still flushed.
    /// Zero-length runs are never emitted, so `min_duration == 0` simply
    /// returns every maximal free run.
    pub fn free_runs(&self, min_duration: u32) -> Vec<TimeRange> {
        let mut runs = Vec::new();
        let mut run_start = 0u32;
        let mut run_len = 0u32;

        for minute in 0..MINUTES_PER_DAY {
            if self.free[minute as usize] {
                run_len += 1;
            } else {
                if run_len > 0 && run_len >= min_duration {
                    runs.push(TimeRange::unchecked(run_start, run_start + run_len));
                }
                run_start = minute + 1;
                run_len = 0;
            }
        }
        if run_len > 0 && run_len >= min_duration {
            runs.push(TimeRange::unchecked(run_start, run_start + run_len));
        }

        runs
    }
}
