//! Learning-plan and devotional content entities.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One step of the sequential learning plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningItem {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Position in a sequenced plan, if the plan is sequenced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_number: Option<u32>,
    #[serde(default)]
    pub completed: bool,
    /// Assigned calendar date, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

/// A devotional saying: original text, translation, attribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Saying {
    pub id: String,
    #[serde(default)]
    pub arabic: String,
    #[serde(default)]
    pub english: String,
    #[serde(default)]
    pub source: String,
}

impl Saying {
    /// Fixed fallback shown when the collection is empty.
    pub fn fallback() -> Self {
        Saying {
            id: "default".to_string(),
            arabic: "إِنَّمَا الأَعْمَالُ بِالنِّيَّاتِ".to_string(),
            english: "Actions are judged by intentions.".to_string(),
            source: "Bukhari & Muslim".to_string(),
        }
    }
}

/// A repeatable recitation entry with an optional target count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Counter {
    pub id: String,
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    /// Free-form time label (e.g. "Morning"), not tied to the segment enum.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}
