//! Render descriptors: the final per-entry output handed to a template layer.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::classify::DurationClass;
use crate::entry::CalendarEntry;
use crate::geometry::VerticalGeometry;
use crate::packer::ColumnPlacement;

pub const HREF_PREFIX: &str = "/event/show/";

pub const BORDER_COLOR_CLASS: &str = "calendar-border-color";
pub const BG_COLOR_CLASS: &str = "calendar-bg-color";
pub const ALARMS_CLASS: &str = "has-alarms";
pub const OVERLAPS_CLASS: &str = "has-overlaps";
pub const ALLDAY_CLASS: &str = "is-allday";

/// Insertion-ordered set of CSS class names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassList(Vec<String>);

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a class unless it is already present.
    pub fn insert(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !self.0.contains(&class) {
            self.0.push(class);
        }
    }

    pub fn contains(&self, class: &str) -> bool {
        self.0.iter().any(|c| c == class)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}

/// Positioning and styling for one entry.
///
/// Geometry fields are `None` for all-day entries; `left_percent` and
/// `width_percent` are also `None` for timed entries that overlap nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderDescriptor {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_px: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_px: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left_percent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width_percent: Option<f64>,
    pub classes: ClassList,
    pub title: String,
    pub location: String,
    pub href: String,
    pub is_all_day: bool,
    pub has_alarms: bool,
}

/// Link to an entry's detail page, keyed by its interval id.
pub fn build_href(id: &str) -> String {
    format!("{}{}", HREF_PREFIX, id)
}

/// Recover the interval id from an href produced by [`build_href`].
pub fn parse_href(href: &str) -> Option<&str> {
    href.strip_prefix(HREF_PREFIX).filter(|id| !id.is_empty())
}

/// Classes every descriptor carries, timed or all-day.
fn base_classes(entry: &CalendarEntry) -> ClassList {
    let mut classes = ClassList::new();
    if let Some(calendar_id) = entry.meta.calendar_id.as_deref() {
        classes.insert(format!("calendar-id-{}", calendar_id));
    }
    classes.insert(BORDER_COLOR_CLASS);
    classes.insert(BG_COLOR_CLASS);
    if entry.meta.alarm_count > 0 {
        classes.insert(ALARMS_CLASS);
    }
    classes
}

fn descriptor(entry: &CalendarEntry, classes: ClassList, is_all_day: bool) -> RenderDescriptor {
    RenderDescriptor {
        id: entry.interval.id.clone(),
        top_px: None,
        height_px: None,
        left_percent: None,
        width_percent: None,
        classes,
        title: entry.meta.title.clone().unwrap_or_default(),
        location: entry.meta.location.clone().unwrap_or_default(),
        href: build_href(&entry.interval.id),
        is_all_day,
        has_alarms: entry.meta.alarm_count > 0,
    }
}

/// Merge geometry, column placement and duration class into a descriptor.
pub fn assemble_timed(
    entry: &CalendarEntry,
    geometry: VerticalGeometry,
    placement: Option<ColumnPlacement>,
    duration: DurationClass,
) -> RenderDescriptor {
    let mut classes = base_classes(entry);
    if placement.is_some() {
        classes.insert(OVERLAPS_CLASS);
    }
    for class in duration.class_names() {
        classes.insert(class);
    }

    let mut out = descriptor(entry, classes, false);
    out.top_px = Some(geometry.top_px);
    out.height_px = Some(geometry.height_px);
    if let Some(placement) = placement {
        out.left_percent = Some(placement.left_percent());
        out.width_percent = Some(placement.width_percent());
    }
    out
}

/// All-day entries: no geometry, no duration or overlap classes.
pub fn assemble_allday(entry: &CalendarEntry) -> RenderDescriptor {
    let mut classes = base_classes(entry);
    classes.insert(ALLDAY_CLASS);
    descriptor(entry, classes, true)
}
