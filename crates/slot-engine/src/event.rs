//! Calendar events and meeting requests.
//!
//! Both types are plain data supplied by the caller per query. Attendee
//! identifiers are opaque strings compared by identity; the engine performs
//! no normalization.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::range::TimeRange;

/// A scheduled occurrence on the shared calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Display name, informational only.
    pub name: String,
    /// When the event takes place.
    pub when: TimeRange,
    /// Identifiers of everyone attending the event.
    pub attendees: HashSet<String>,
}

impl Event {
    /// Convenience constructor; duplicate attendee ids collapse into the set.
    pub fn new(name: &str, when: TimeRange, attendees: &[&str]) -> Self {
        Event {
            name: name.to_string(),
            when,
            attendees: attendees.iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// A request to schedule a meeting of a given length.
///
/// Mandatory attendees must all be free for a window to qualify; optional
/// attendees are accommodated best-effort. The algorithm does not require the
/// two sets to be disjoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingRequest {
    /// Display name, informational only.
    pub name: String,
    /// Required meeting length in minutes.
    pub duration_minutes: u32,
    /// Attendees whose presence is required.
    pub mandatory: HashSet<String>,
    /// Attendees whose presence is desired but not required.
    pub optional: HashSet<String>,
}

impl MeetingRequest {
    /// Convenience constructor; duplicate attendee ids collapse into the sets.
    pub fn new(name: &str, duration_minutes: u32, mandatory: &[&str], optional: &[&str]) -> Self {
        MeetingRequest {
            name: name.to_string(),
            duration_minutes,
            mandatory: mandatory.iter().map(|a| a.to_string()).collect(),
            optional: optional.iter().map(|a| a.to_string()).collect(),
        }
    }
}
