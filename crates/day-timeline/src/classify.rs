//! Duration classification into "partial" style tiers.

use serde::{Deserialize, Serialize};

use crate::config::DurationThresholds;

pub const PARTIAL_CLASS: &str = "is-partial";

/// Sub-hour bucket of a partial-hour entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartialBucket {
    Micro,
    Tiny,
    Small,
}

impl PartialBucket {
    pub fn class_name(self) -> &'static str {
        match self {
            PartialBucket::Micro => "is-partial-micro",
            PartialBucket::Tiny => "is-partial-tiny",
            PartialBucket::Small => "is-partial-small",
        }
    }
}

/// How an entry's duration is styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "bucket")]
pub enum DurationClass {
    /// Exact non-zero multiple of an hour.
    WholeHours,
    /// Anything else; the bucket is absent from `small` minutes upwards.
    Partial(Option<PartialBucket>),
}

impl DurationClass {
    /// CSS classes in render order: base class first, then bucket.
    pub fn class_names(&self) -> Vec<&'static str> {
        match self {
            DurationClass::WholeHours => Vec::new(),
            DurationClass::Partial(None) => vec![PARTIAL_CLASS],
            DurationClass::Partial(Some(bucket)) => vec![PARTIAL_CLASS, bucket.class_name()],
        }
    }
}

/// Bucket a duration in minutes. Bucket ranges are half-open, so each
/// threshold value belongs to the upper bucket.
pub fn classify_duration(minutes: i64, thresholds: &DurationThresholds) -> DurationClass {
    if minutes != 0 && minutes % 60 == 0 {
        return DurationClass::WholeHours;
    }

    let bucket = if minutes < thresholds.micro {
        Some(PartialBucket::Micro)
    } else if minutes < thresholds.tiny {
        Some(PartialBucket::Tiny)
    } else if minutes < thresholds.small {
        Some(PartialBucket::Small)
    } else {
        None
    };

    DurationClass::Partial(bucket)
}
