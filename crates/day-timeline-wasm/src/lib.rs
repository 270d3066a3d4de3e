//! WASM bindings for day-timeline.
//!
//! Exposes the day layout engine and the duration classifier to JavaScript via
//! `wasm-bindgen`. All complex types cross the boundary as JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p day-timeline-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir packages/day-timeline-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/day_timeline_wasm.wasm
//! ```

use chrono::{DateTime, NaiveDateTime};
use day_timeline::{BusyInterval, CalendarEntry, DaySnapshot, EventMeta, LayoutConfig, LayoutEngine};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

/// Interval as sent from JavaScript, with ISO 8601 strings for times.
#[derive(Deserialize)]
struct IntervalInput {
    id: String,
    start: String,
    end: String,
}

#[derive(Deserialize)]
struct EntryInput {
    interval: IntervalInput,
    #[serde(default)]
    meta: EventMeta,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct SnapshotInput {
    timed_count: Option<usize>,
    timed: Vec<EntryInput>,
    allday: Vec<EntryInput>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse an ISO 8601 datetime string into wall-clock time.
///
/// Accepts RFC 3339 with an offset (the local part is kept, the offset dropped)
/// and naive local time such as "2014-07-23T04:00:00", with optional
/// fractional seconds.
fn parse_datetime(s: &str) -> Result<NaiveDateTime, JsValue> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.naive_local());
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .map_err(|e| JsValue::from_str(&format!("Invalid datetime '{}': {}", s, e)))
}

fn to_entries(inputs: Vec<EntryInput>) -> Result<Vec<CalendarEntry>, JsValue> {
    inputs
        .into_iter()
        .map(|input| {
            Ok(CalendarEntry {
                interval: BusyInterval {
                    start: parse_datetime(&input.interval.start)?,
                    end: parse_datetime(&input.interval.end)?,
                    id: input.interval.id,
                },
                meta: input.meta,
            })
        })
        .collect()
}

fn parse_snapshot_json(json: &str) -> Result<DaySnapshot, JsValue> {
    let input: SnapshotInput = serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid snapshot JSON: {}", e)))?;

    let timed = to_entries(input.timed)?;
    let allday = to_entries(input.allday)?;
    Ok(DaySnapshot {
        timed_count: input.timed_count.unwrap_or(timed.len()),
        timed,
        allday,
    })
}

/// Parse an optional JSON config; absent or empty means defaults.
fn parse_config_json(json: Option<String>) -> Result<LayoutConfig, JsValue> {
    match json.as_deref().map(str::trim) {
        None | Some("") => Ok(LayoutConfig::default()),
        Some(json) => serde_json::from_str(json)
            .map_err(|e| JsValue::from_str(&format!("Invalid config JSON: {}", e))),
    }
}

fn engine(config_json: Option<String>) -> Result<LayoutEngine, JsValue> {
    let config = parse_config_json(config_json)?;
    LayoutEngine::new(config).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Lay out one day.
///
/// `snapshot_json` is `{timedCount?, timed: [...], allday: [...]}` where each
/// entry is `{interval: {id, start, end}, meta: {calendarId, title, location,
/// alarmCount}}`. `config_json` optionally overrides `hour_height`, `gap_px`
/// and `thresholds`.
///
/// Returns `{timed, allday, rejected}`: descriptor arrays in snapshot order and
/// the messages of entries that were skipped.
#[wasm_bindgen(js_name = "layoutDay")]
pub fn layout_day(snapshot_json: &str, config_json: Option<String>) -> Result<String, JsValue> {
    let engine = engine(config_json)?;
    let snapshot = parse_snapshot_json(snapshot_json)?;
    let layout = engine.layout(&snapshot);
    to_json(&layout)
}

/// CSS classes for a duration in minutes, e.g. `["is-partial", "is-partial-tiny"]`.
#[wasm_bindgen(js_name = "classifyDuration")]
pub fn classify_duration(minutes: i64, config_json: Option<String>) -> Result<String, JsValue> {
    let engine = engine(config_json)?;
    let class = day_timeline::classify_duration(minutes, &engine.config().thresholds);
    to_json(&class.class_names())
}

/// The default configuration as JSON.
#[wasm_bindgen(js_name = "defaultConfig")]
pub fn default_config() -> Result<String, JsValue> {
    to_json(&LayoutConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SNAPSHOT: &str = r#"{
        "timed": [
            {"interval": {"id": "a", "start": "2014-07-23T04:00:00", "end": "2014-07-23T06:00:00"},
             "meta": {"calendarId": "local-first", "title": "Dolor Amet", "alarmCount": 1}},
            {"interval": {"id": "b", "start": "2014-07-23T05:00:00+02:00", "end": "2014-07-23T06:00:00+02:00"},
             "meta": {"calendarId": "local-first", "title": "Lorem Ipsum"}}
        ],
        "allday": []
    }"#;

    #[test]
    fn snapshot_accepts_naive_and_offset_times() {
        let snapshot = parse_snapshot_json(SNAPSHOT).unwrap();
        assert_eq!(snapshot.timed_count, 2);
        assert_eq!(
            snapshot.timed[1].interval.start.format("%H:%M").to_string(),
            "05:00"
        );
    }

    #[test]
    fn naive_times_may_carry_fractional_seconds() {
        let start = parse_datetime("2014-07-23T04:00:00.5").unwrap();
        assert_eq!(start.format("%H:%M:%S%.3f").to_string(), "04:00:00.500");
        assert_eq!(
            parse_datetime("2014-07-23T04:00:00").unwrap().format("%H:%M:%S").to_string(),
            "04:00:00"
        );
    }

    #[test]
    fn rejected_entries_are_reported_as_messages() {
        let snapshot = r#"{"timed": [{"interval": {"id": "x", "start": "2014-07-23T05:00:00", "end": "2014-07-23T04:00:00"}}]}"#;
        let value: serde_json::Value = serde_json::from_str(&layout_day(snapshot, None).unwrap()).unwrap();

        assert!(value["timed"].as_array().unwrap().is_empty());
        let rejected = value["rejected"][0].as_str().unwrap();
        assert!(rejected.starts_with("Invalid interval for entry 'x'"));
    }

    #[test]
    fn layout_day_serializes_descriptors() {
        let json = layout_day(SNAPSHOT, None).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["timed"][0]["leftPercent"], 50.0);
        assert_eq!(value["timed"][1]["leftPercent"], 0.0);
        assert_eq!(value["timed"][0]["topPx"], 200.0);
        assert!(value["rejected"].as_array().unwrap().is_empty());
    }

    #[test]
    fn config_override_changes_scale() {
        let json = layout_day(SNAPSHOT, Some(r#"{"hour_height": 100}"#.to_string())).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["timed"][0]["topPx"], 400.0);
    }

    #[test]
    fn classify_duration_returns_class_names() {
        assert_eq!(
            classify_duration(25, None).unwrap(),
            r#"["is-partial","is-partial-tiny"]"#
        );
        assert_eq!(classify_duration(120, None).unwrap(), "[]");
    }
}
