//! The aggregate persisted document and its settings.

use std::collections::BTreeMap;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use super::content::{Counter, LearningItem, Saying};
use super::task::Task;
use crate::segment::SegmentLabel;

/// UI language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "ar")]
    Arabic,
}

impl Default for Language {
    fn default() -> Self {
        Language::English
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "ar" | "arabic" => Ok(Language::Arabic),
            other => Err(format!("unknown language: {other}")),
        }
    }
}

/// UI theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Light
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme: {other}")),
        }
    }
}

/// Document settings. `last_active_date` exists solely for the
/// rollover guard; nothing else reads it.
///
/// A stored settings object missing `lastActiveDate` defaults to the
/// epoch, which is always in the past, so rollover runs on the next
/// load instead of the whole document being discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub last_active_date: NaiveDate,
}

impl Settings {
    pub fn for_date(today: NaiveDate) -> Self {
        Settings {
            language: Language::default(),
            theme: Theme::default(),
            last_active_date: today,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings::for_date(Local::now().date_naive())
    }
}

/// The sole unit of persistence: every collection plus settings.
///
/// Mutations never edit a document in place; the command layer always
/// produces a full new snapshot so holders of the previous one keep a
/// consistent view.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Document {
    pub tasks: Vec<Task>,
    pub learning_plan: Vec<LearningItem>,
    pub sayings: Vec<Saying>,
    pub counters: Vec<Counter>,
    /// Free text keyed by `"{date}_{segment label}"`; at most one note
    /// per date+segment pair.
    pub notes: BTreeMap<String, String>,
    pub settings: Settings,
}

impl Document {
    /// Fresh document with empty collections, stamped with `today`.
    pub fn new(today: NaiveDate) -> Self {
        Document {
            settings: Settings::for_date(today),
            ..Document::default()
        }
    }

    /// Composite notes key.
    ///
    /// Date and label are joined with a bare underscore; a custom label
    /// containing '_' can collide with another date+label pair.
    pub fn note_key(date: NaiveDate, segment: &SegmentLabel) -> String {
        format!("{date}_{segment}")
    }

    /// Tasks dated `date`, in insertion order.
    pub fn tasks_on(&self, date: NaiveDate) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(move |t| t.date == date)
    }

    /// Incomplete tasks dated `date` (the assistant's context window).
    pub fn pending_on(&self, date: NaiveDate) -> Vec<&Task> {
        self.tasks_on(date).filter(|t| !t.completed).collect()
    }
}
