//! Half-open minute ranges within a single day.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};

/// Number of minutes in the scheduling day. Valid minute offsets are
/// `0..MINUTES_PER_DAY`.
pub const MINUTES_PER_DAY: u32 = 1440;

/// A half-open `[start, end)` interval of minute offsets within the day.
///
/// Construction validates `start <= end <= MINUTES_PER_DAY`, so a `TimeRange`
/// in hand is always well-formed; out-of-day values are rejected, never
/// clamped. Ordering is by start, then by end.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct TimeRange {
    start: u32,
    end: u32,
}

impl TimeRange {
    /// The full scheduling day, `[0, 1440)`.
    pub const WHOLE_DAY: TimeRange = TimeRange {
        start: 0,
        end: MINUTES_PER_DAY,
    };

    /// Create a range from an inclusive start and an exclusive end.
    ///
    /// # Errors
    /// Returns [`SlotError::InvertedRange`] when `start > end` and
    /// [`SlotError::RangeOutOfDay`] when `end > MINUTES_PER_DAY`.
    pub fn from_start_end(start: u32, end: u32) -> Result<Self> {
        if start > end {
            return Err(SlotError::InvertedRange { start, end });
        }
        if end > MINUTES_PER_DAY {
            return Err(SlotError::RangeOutOfDay { end });
        }
        Ok(TimeRange { start, end })
    }

    /// Create a range from a start and a duration in minutes.
    ///
    /// Equivalent to [`from_start_end`](Self::from_start_end) with
    /// `end = start + duration`, including its validation.
    pub fn from_start_duration(start: u32, duration: u32) -> Result<Self> {
        Self::from_start_end(start, start.saturating_add(duration))
    }

    /// Internal constructor for ranges already known to be in-bounds.
    pub(crate) fn unchecked(start: u32, end: u32) -> Self {
        debug_assert!(start <= end && end <= MINUTES_PER_DAY);
        TimeRange { start, end }
    }

    /// Inclusive start minute.
    pub fn start(&self) -> u32 {
        self.start
    }

    /// Exclusive end minute.
    pub fn end(&self) -> u32 {
        self.end
    }

    /// Length of the range in minutes.
    pub fn duration(&self) -> u32 {
        self.end - self.start
    }

    /// Whether the two ranges share at least one minute.
    ///
    /// Half-open semantics: ranges that merely touch (one ends exactly where
    /// the other starts) do NOT overlap.
    pub fn overlaps(&self, other: TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Whether `minute` falls inside the range (`start <= minute < end`).
    pub fn contains_minute(&self, minute: u32) -> bool {
        self.start <= minute && minute < self.end
    }

    /// Whether `other` lies entirely inside this range.
    pub fn contains(&self, other: TimeRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}
