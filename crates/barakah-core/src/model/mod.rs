//! Persisted document model.
//!
//! Everything the application stores lives in one [`Document`]: four
//! entity collections, a free-form notes map, and settings. The JSON
//! field names below are the on-disk schema; reads tolerate missing
//! optional fields, writes always emit the full current schema.

mod content;
mod document;
mod task;

pub use content::{Counter, LearningItem, Saying};
pub use document::{Document, Language, Settings, Theme};
pub use task::{Category, Priority, Task, CATEGORIES};
