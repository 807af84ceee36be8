//! Task entity and its closed classification enums.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::segment::SegmentLabel;

/// Task priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Urgent,
    Normal,
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Normal
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::Urgent => f.write_str("Urgent"),
            Priority::Normal => f.write_str("Normal"),
        }
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "urgent" => Ok(Priority::Urgent),
            "normal" => Ok(Priority::Normal),
            other => Err(format!("unknown priority: {other}")),
        }
    }
}

/// Task category. Closed set; `Open` is the catch-all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Work,
    Learning,
    Spiritual,
    Health,
    Open,
}

/// All categories, in display order.
pub const CATEGORIES: [Category; 5] = [
    Category::Work,
    Category::Learning,
    Category::Spiritual,
    Category::Health,
    Category::Open,
];

impl Default for Category {
    fn default() -> Self {
        Category::Open
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Work => "Work",
            Category::Learning => "Learning",
            Category::Spiritual => "Spiritual",
            Category::Health => "Health",
            Category::Open => "Open",
        };
        f.write_str(name)
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "work" => Ok(Category::Work),
            "learning" => Ok(Category::Learning),
            "spiritual" => Ok(Category::Spiritual),
            "health" => Ok(Category::Health),
            "open" => Ok(Category::Open),
            other => {
                let expected = CATEGORIES.map(|c| c.to_string()).join(", ");
                Err(format!("unknown category: {other} (expected one of: {expected})"))
            }
        }
    }
}

/// A single dated task.
///
/// `date` is always a valid ISO calendar date (enforced by the
/// `NaiveDate` type). A completed task keeps its date forever; only
/// incomplete tasks are migrated by rollover.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier, assigned at creation and immutable.
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub category: Category,
    /// Open string label; see [`SegmentLabel`].
    #[serde(rename = "timeBlock")]
    pub segment: SegmentLabel,
    pub date: NaiveDate,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}
