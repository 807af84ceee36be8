//! Command layer: pure reducer-style mutations.
//!
//! Every operation is `(document, args) -> new document` and never
//! edits its input. Holders of the previous snapshot keep a consistent
//! view; persistence of the new snapshot is the caller's concern (see
//! [`crate::app::App`]).
//!
//! Adds assign a fresh id and return the created entity alongside the
//! new document. Deletes are idempotent: a missing id is a no-op, not
//! an error. No operation here can fail once the caller has met the
//! add-operations' non-empty-title precondition.

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::model::{
    Category, Counter, Document, Language, LearningItem, Priority, Saying, Task, Theme,
};
use crate::segment::SegmentLabel;

fn fresh_id() -> String {
    Uuid::new_v4().to_string()
}

/// Arguments for creating a task.
#[derive(Debug, Clone)]
pub struct NewTask {
    pub title: String,
    pub priority: Priority,
    pub category: Category,
    pub segment: SegmentLabel,
    pub date: NaiveDate,
}

pub fn add_task(document: &Document, new: NewTask) -> (Document, Task) {
    let task = Task {
        id: fresh_id(),
        title: new.title,
        completed: false,
        priority: new.priority,
        category: new.category,
        segment: new.segment,
        date: new.date,
        created_at: Utc::now(),
    };
    let mut next = document.clone();
    next.tasks.push(task.clone());
    (next, task)
}

/// Replace the full record matching `task.id`. Unknown ids leave the
/// document unchanged.
pub fn update_task(document: &Document, task: Task) -> Document {
    let mut next = document.clone();
    if let Some(existing) = next.tasks.iter_mut().find(|t| t.id == task.id) {
        *existing = task;
    }
    next
}

pub fn delete_task(document: &Document, id: &str) -> Document {
    let mut next = document.clone();
    next.tasks.retain(|t| t.id != id);
    next
}

/// Flip the completion flag; every other field is untouched.
pub fn toggle_task(document: &Document, id: &str) -> Document {
    let mut next = document.clone();
    if let Some(task) = next.tasks.iter_mut().find(|t| t.id == id) {
        task.completed = !task.completed;
    }
    next
}

/// Arguments for creating a learning item.
#[derive(Debug, Clone, Default)]
pub struct NewLearningItem {
    pub title: String,
    pub description: Option<String>,
    pub day_number: Option<u32>,
    pub date: Option<NaiveDate>,
}

pub fn add_learning_item(document: &Document, new: NewLearningItem) -> (Document, LearningItem) {
    let item = LearningItem {
        id: fresh_id(),
        title: new.title,
        description: new.description,
        day_number: new.day_number,
        completed: false,
        date: new.date,
    };
    let mut next = document.clone();
    next.learning_plan.push(item.clone());
    (next, item)
}

pub fn delete_learning_item(document: &Document, id: &str) -> Document {
    let mut next = document.clone();
    next.learning_plan.retain(|l| l.id != id);
    next
}

pub fn toggle_learning_item(document: &Document, id: &str) -> Document {
    let mut next = document.clone();
    if let Some(item) = next.learning_plan.iter_mut().find(|l| l.id == id) {
        item.completed = !item.completed;
    }
    next
}

/// Arguments for creating a saying.
#[derive(Debug, Clone, Default)]
pub struct NewSaying {
    pub arabic: String,
    pub english: String,
    pub source: String,
}

pub fn add_saying(document: &Document, new: NewSaying) -> (Document, Saying) {
    let saying = Saying {
        id: fresh_id(),
        arabic: new.arabic,
        english: new.english,
        source: new.source,
    };
    let mut next = document.clone();
    next.sayings.push(saying.clone());
    (next, saying)
}

pub fn delete_saying(document: &Document, id: &str) -> Document {
    let mut next = document.clone();
    next.sayings.retain(|s| s.id != id);
    next
}

/// Arguments for creating a counter.
#[derive(Debug, Clone, Default)]
pub struct NewCounter {
    pub text: String,
    pub count: Option<u32>,
    pub time: Option<String>,
}

pub fn add_counter(document: &Document, new: NewCounter) -> (Document, Counter) {
    let counter = Counter {
        id: fresh_id(),
        text: new.text,
        count: new.count,
        time: new.time,
    };
    let mut next = document.clone();
    next.counters.push(counter.clone());
    (next, counter)
}

pub fn delete_counter(document: &Document, id: &str) -> Document {
    let mut next = document.clone();
    next.counters.retain(|c| c.id != id);
    next
}

/// Upsert the note for `date` + `segment`. The empty string is a valid
/// stored value, distinct from absence.
pub fn update_note(
    document: &Document,
    date: NaiveDate,
    segment: &SegmentLabel,
    text: &str,
) -> Document {
    let mut next = document.clone();
    next.notes
        .insert(Document::note_key(date, segment), text.to_string());
    next
}

pub fn set_language(document: &Document, language: Language) -> Document {
    let mut next = document.clone();
    next.settings.language = language;
    next
}

pub fn set_theme(document: &Document, theme: Theme) -> Document {
    let mut next = document.clone();
    next.settings.theme = theme;
    next
}
