//! Shared fixtures for integration tests.

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use day_timeline::{BusyInterval, CalendarEntry, EventMeta};

pub fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2014, 7, 23).unwrap()
}

/// Parse "H:MM" on the fixture day.
pub fn at(time: &str) -> NaiveDateTime {
    let (h, m) = time.split_once(':').unwrap();
    day()
        .and_hms_opt(h.parse().unwrap(), m.parse().unwrap(), 0)
        .unwrap()
}

/// A timed entry with id `"<title>-<start>-<end>"` on the "local-first" calendar.
pub fn record(title: &str, start: &str, end: &str, alarms: u32) -> CalendarEntry {
    CalendarEntry {
        interval: BusyInterval {
            id: format!("{}-{}-{}", title, start, end),
            start: at(start),
            end: at(end),
        },
        meta: EventMeta {
            calendar_id: Some("local-first".to_string()),
            title: Some(title.to_string()),
            location: Some("Mars".to_string()),
            alarm_count: alarms,
        },
    }
}

/// An all-day entry spanning midnight to midnight.
pub fn allday_record(title: &str, alarms: u32) -> CalendarEntry {
    let mut entry = record(title, "0:00", "0:00", alarms);
    entry.interval.end = entry.interval.end + chrono::Duration::days(1);
    entry
}

pub fn approx(actual: Option<f64>, expected: f64) -> bool {
    actual.is_some_and(|v| (v - expected).abs() < 1e-9)
}
