//! Bulk content import.
//!
//! Replaces one whole collection from an externally supplied JSON
//! array. Parsing is strict at the edge (malformed JSON or a non-array
//! top level rejects the payload without touching state) but item
//! conversion is deliberately permissive: missing ids are synthesized,
//! missing text fields default to empty, learning imports always start
//! incomplete. Malformed entities can therefore enter a collection;
//! that mirrors the observed upstream behavior and is the documented
//! policy here.

use std::str::FromStr;

use chrono::NaiveDate;
use serde_json::Value;
use uuid::Uuid;

use crate::error::ImportError;
use crate::model::{Counter, Document, LearningItem, Saying};

/// Target collection of a bulk import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Learning,
    Saying,
    Counter,
}

impl FromStr for ContentKind {
    type Err = ImportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "learning" => Ok(ContentKind::Learning),
            "saying" | "sayings" => Ok(ContentKind::Saying),
            "counter" | "counters" => Ok(ContentKind::Counter),
            other => Err(ImportError::UnknownKind(other.to_string())),
        }
    }
}

/// Parse a raw payload into items. Rejects before any state changes.
pub fn parse_payload(raw: &str) -> Result<Vec<Value>, ImportError> {
    let value: Value = serde_json::from_str(raw)?;
    match value {
        Value::Array(items) => Ok(items),
        _ => Err(ImportError::NotAnArray),
    }
}

/// Wholesale replacement of one collection. Every item missing an id
/// receives a freshly generated one.
pub fn upload_content(document: &Document, kind: ContentKind, items: Vec<Value>) -> Document {
    let mut next = document.clone();
    match kind {
        ContentKind::Learning => {
            next.learning_plan = items.into_iter().map(learning_from_value).collect();
        }
        ContentKind::Saying => {
            next.sayings = items.into_iter().map(saying_from_value).collect();
        }
        ContentKind::Counter => {
            next.counters = items.into_iter().map(counter_from_value).collect();
        }
    }
    next
}

fn id_of(value: &Value) -> String {
    match value.get("id").and_then(Value::as_str) {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => Uuid::new_v4().to_string(),
    }
}

fn text_of(value: &Value, field: &str) -> String {
    value
        .get(field)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn opt_text_of(value: &Value, field: &str) -> Option<String> {
    value
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn learning_from_value(value: Value) -> LearningItem {
    LearningItem {
        id: id_of(&value),
        title: text_of(&value, "title"),
        description: opt_text_of(&value, "description"),
        day_number: value
            .get("dayNumber")
            .and_then(Value::as_u64)
            .and_then(|n| u32::try_from(n).ok()),
        // Imports always restart the plan.
        completed: false,
        date: value
            .get("date")
            .and_then(Value::as_str)
            .and_then(|s| NaiveDate::from_str(s).ok()),
    }
}

fn saying_from_value(value: Value) -> Saying {
    Saying {
        id: id_of(&value),
        arabic: text_of(&value, "arabic"),
        english: text_of(&value, "english"),
        source: text_of(&value, "source"),
    }
}

fn counter_from_value(value: Value) -> Counter {
    Counter {
        id: id_of(&value),
        text: text_of(&value, "text"),
        count: value
            .get("count")
            .and_then(Value::as_u64)
            .and_then(|n| u32::try_from(n).ok()),
        time: opt_text_of(&value, "time"),
    }
}
