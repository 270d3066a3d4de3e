//! Calendar entries and day snapshots as delivered by a day event feed.
//!
//! The wire shape is camelCase JSON:
//!
//! ```json
//! { "interval": { "id": "a", "start": "2014-07-23T04:00:00", "end": "2014-07-23T06:00:00" },
//!   "meta": { "calendarId": "local-first", "title": "Standup", "location": "Mars", "alarmCount": 1 } }
//! ```
//!
//! Times are wall-clock (`NaiveDateTime`) and already clipped to a single day;
//! splitting entries that cross midnight is the feed's job.

use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// The half-open `[start, end)` span of an entry within one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusyInterval {
    pub id: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl BusyInterval {
    /// Length of the interval in milliseconds. Negative for inverted input.
    pub fn duration_millis(&self) -> i64 {
        (self.end - self.start).num_milliseconds()
    }

    /// Whole minutes covered by the interval.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Strict overlap: touching intervals (`a.end == b.start`) do not overlap.
    pub fn overlaps(&self, other: &BusyInterval) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Descriptive metadata attached to an entry. Every field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventMeta {
    pub calendar_id: Option<String>,
    pub title: Option<String>,
    pub location: Option<String>,
    pub alarm_count: u32,
}

/// A busy interval paired with its metadata. Identity is `interval.id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEntry {
    pub interval: BusyInterval,
    #[serde(default)]
    pub meta: EventMeta,
}

impl CalendarEntry {
    pub fn id(&self) -> &str {
        &self.interval.id
    }
}

/// Stable identifier of a calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayId(pub NaiveDate);

impl DayId {
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for DayId {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for DayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "d-{}-{}-{}", self.0.year(), self.0.month(), self.0.day())
    }
}

/// The complete set of entries for one day, in feed order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DaySnapshot {
    /// Number of entries the feed counted for the day. Informational only.
    pub timed_count: usize,
    pub timed: Vec<CalendarEntry>,
    pub allday: Vec<CalendarEntry>,
}

impl DaySnapshot {
    pub fn new(timed: Vec<CalendarEntry>, allday: Vec<CalendarEntry>) -> Self {
        Self {
            timed_count: timed.len(),
            timed,
            allday,
        }
    }
}
