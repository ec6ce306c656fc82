//! # slot-engine
//!
//! Single-day meeting-slot computation for shared calendars.
//!
//! Given the day's events and a meeting request (a required duration plus
//! mandatory and optional attendees), the engine returns every window in
//! which the meeting can be held. Mandatory attendees are honored strictly;
//! when no window also suits every optional attendee, a fallback search finds
//! the windows where the greatest number of optional attendees can attend.
//!
//! The whole model is minute offsets within a fixed 1440-minute day. Wall
//! clocks, timezones, recurrence, and filtering events to the relevant day
//! are the caller's concern.
//!
//! ## Quick start
//!
//! ```rust
//! use slot_engine::{find_meeting_times, Event, MeetingRequest, TimeRange};
//!
//! let events = vec![Event::new(
//!     "standup",
//!     TimeRange::from_start_end(600, 660).unwrap(),
//!     &["ana"],
//! )];
//! let request = MeetingRequest::new("sync", 30, &["ana"], &[]);
//!
//! let slots = find_meeting_times(&events, &request);
//! assert_eq!(
//!     slots,
//!     vec![
//!         TimeRange::from_start_end(0, 600).unwrap(),
//!         TimeRange::from_start_end(660, 1440).unwrap(),
//!     ]
//! );
//! ```
//!
//! ## Modules
//!
//! - [`range`] — half-open minute ranges within the day
//! - [`event`] — calendar events and meeting requests
//! - [`bitmap`] — per-minute free/busy maps and run extraction
//! - [`query`] — the query entry point
//! - [`optimize`] — optional-attendance fallback search
//! - [`error`] — error types

pub mod bitmap;
pub mod error;
pub mod event;
pub mod optimize;
pub mod query;
pub mod range;

pub use bitmap::MinuteMap;
pub use error::{Result, SlotError};
pub use event::{Event, MeetingRequest};
pub use query::find_meeting_times;
pub use range::{TimeRange, MINUTES_PER_DAY};
