//! Prayer-anchored day segments.
//!
//! The day is divided into six fixed segments anchored to prayer times.
//! `Segment::at_hour` is total over 0..=23: half-open hour ranges with
//! no gaps and no overlaps, the night segment covering the wrap-around
//! back to before Fajr. Callers that display the active segment should
//! re-resolve at least once per minute.
//!
//! Task records deliberately carry a [`SegmentLabel`] rather than a bare
//! [`Segment`]: the stored field is an open string, so labels outside the
//! fixed six survive load/save untouched.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local, Timelike};
use serde::{Deserialize, Serialize};

/// One of the six fixed subdivisions of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Segment {
    #[serde(rename = "After Fajr")]
    Fajr,
    #[serde(rename = "Before Dhuhr")]
    PreDhuhr,
    #[serde(rename = "After Dhuhr")]
    PostDhuhr,
    #[serde(rename = "After Asr")]
    Asr,
    #[serde(rename = "After Maghrib")]
    Maghrib,
    #[serde(rename = "After Isha")]
    Isha,
}

/// The fixed segment cycle, in day order.
pub const SEGMENTS: [Segment; 6] = [
    Segment::Fajr,
    Segment::PreDhuhr,
    Segment::PostDhuhr,
    Segment::Asr,
    Segment::Maghrib,
    Segment::Isha,
];

impl Segment {
    /// Resolve the segment active at a wall-clock hour (0..=23).
    ///
    /// Hours >= 24 clamp into the night segment rather than panic.
    pub fn at_hour(hour: u32) -> Segment {
        match hour {
            4..=10 => Segment::Fajr,
            11..=12 => Segment::PreDhuhr,
            13..=15 => Segment::PostDhuhr,
            16..=17 => Segment::Asr,
            18..=19 => Segment::Maghrib,
            _ => Segment::Isha,
        }
    }

    /// Segment active at the given local time.
    pub fn current(now: DateTime<Local>) -> Segment {
        Segment::at_hour(now.hour())
    }

    /// Display label, matching the stored string form.
    pub fn label(&self) -> &'static str {
        match self {
            Segment::Fajr => "After Fajr",
            Segment::PreDhuhr => "Before Dhuhr",
            Segment::PostDhuhr => "After Dhuhr",
            Segment::Asr => "After Asr",
            Segment::Maghrib => "After Maghrib",
            Segment::Isha => "After Isha",
        }
    }

    /// Position in the fixed day cycle.
    pub fn index(&self) -> usize {
        SEGMENTS.iter().position(|s| s == self).unwrap_or(0)
    }

    /// Next segment, cycling back to Fajr after Isha.
    pub fn next(&self) -> Segment {
        SEGMENTS[(self.index() + 1) % SEGMENTS.len()]
    }

    /// Previous segment, cycling back to Isha before Fajr.
    pub fn prev(&self) -> Segment {
        SEGMENTS[(self.index() + SEGMENTS.len() - 1) % SEGMENTS.len()]
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Segment {
    type Err = String;

    /// Accepts the full stored label or a short keyword (e.g. "fajr").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "after fajr" | "fajr" => Ok(Segment::Fajr),
            "before dhuhr" | "pre-dhuhr" => Ok(Segment::PreDhuhr),
            "after dhuhr" | "post-dhuhr" | "dhuhr" => Ok(Segment::PostDhuhr),
            "after asr" | "asr" => Ok(Segment::Asr),
            "after maghrib" | "maghrib" => Ok(Segment::Maghrib),
            "after isha" | "isha" => Ok(Segment::Isha),
            other => Err(format!("unknown segment: {other}")),
        }
    }
}

/// Time-segment label on a task.
///
/// Stored as a bare string. Labels matching one of the six fixed
/// segments parse to `Known`; anything else is preserved verbatim as
/// `Custom`. This keeps the stored field an open string on purpose --
/// collapsing it to the closed enum would drop user-entered labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SegmentLabel {
    Known(Segment),
    Custom(String),
}

impl SegmentLabel {
    pub fn as_str(&self) -> &str {
        match self {
            SegmentLabel::Known(segment) => segment.label(),
            SegmentLabel::Custom(label) => label,
        }
    }

    /// The fixed segment this label maps to, if any.
    pub fn segment(&self) -> Option<Segment> {
        match self {
            SegmentLabel::Known(segment) => Some(*segment),
            SegmentLabel::Custom(_) => None,
        }
    }
}

impl From<Segment> for SegmentLabel {
    fn from(segment: Segment) -> Self {
        SegmentLabel::Known(segment)
    }
}

impl From<String> for SegmentLabel {
    fn from(raw: String) -> Self {
        // Only the exact stored label maps to a known segment; keyword
        // shorthands are a CLI input affordance, not a storage format.
        match SEGMENTS.iter().find(|s| s.label() == raw) {
            Some(segment) => SegmentLabel::Known(*segment),
            None => SegmentLabel::Custom(raw),
        }
    }
}

impl From<SegmentLabel> for String {
    fn from(label: SegmentLabel) -> Self {
        label.as_str().to_string()
    }
}

impl fmt::Display for SegmentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SegmentLabel {
    type Err = std::convert::Infallible;

    /// Keyword shorthands resolve to known segments; everything else
    /// becomes a custom label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match Segment::from_str(s) {
            Ok(segment) => SegmentLabel::Known(segment),
            Err(_) => SegmentLabel::Custom(s.to_string()),
        })
    }
}
