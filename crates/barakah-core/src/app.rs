//! Application state: one owned document snapshot behind typed
//! mutation methods.
//!
//! `App::load` performs the full startup sequence -- read the stored
//! document, apply rollover, persist the migrated snapshot -- before
//! anything else can observe the state. Each mutation routes through
//! the pure command layer and then persists the new snapshot
//! best-effort: a failed write drops that snapshot silently.

use chrono::{Local, NaiveDate};
use serde_json::Value;

use crate::commands::{self, NewCounter, NewLearningItem, NewSaying, NewTask};
use crate::error::StoreError;
use crate::import::{self, ContentKind};
use crate::model::{Counter, Document, Language, LearningItem, Saying, Task, Theme};
use crate::rollover::roll_over;
use crate::segment::SegmentLabel;
use crate::store::DocumentStore;

pub struct App {
    store: DocumentStore,
    document: Document,
    today: NaiveDate,
    /// Tasks migrated by rollover during this load.
    rolled_over: usize,
}

impl App {
    /// Open the default store for the current calendar day.
    pub fn load() -> Result<Self, StoreError> {
        Ok(Self::load_at(DocumentStore::open()?, Local::now().date_naive()))
    }

    /// Load from an explicit store, treating `today` as the current day.
    pub fn load_at(store: DocumentStore, today: NaiveDate) -> Self {
        let outcome = roll_over(store.load(today), today);
        if outcome.changed {
            // Best-effort: a failed write is dropped.
            let _ = store.save(&outcome.document);
        }
        App {
            store,
            document: outcome.document,
            today,
            rolled_over: outcome.moved,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn rolled_over(&self) -> usize {
        self.rolled_over
    }

    fn commit(&mut self, document: Document) {
        self.document = document;
        let _ = self.store.save(&self.document);
    }

    // ── Tasks ────────────────────────────────────────────────────────

    pub fn add_task(&mut self, new: NewTask) -> Task {
        let (document, task) = commands::add_task(&self.document, new);
        self.commit(document);
        task
    }

    pub fn update_task(&mut self, task: Task) {
        self.commit(commands::update_task(&self.document, task));
    }

    pub fn delete_task(&mut self, id: &str) {
        self.commit(commands::delete_task(&self.document, id));
    }

    pub fn toggle_task(&mut self, id: &str) {
        self.commit(commands::toggle_task(&self.document, id));
    }

    // ── Learning plan ────────────────────────────────────────────────

    pub fn add_learning_item(&mut self, new: NewLearningItem) -> LearningItem {
        let (document, item) = commands::add_learning_item(&self.document, new);
        self.commit(document);
        item
    }

    pub fn delete_learning_item(&mut self, id: &str) {
        self.commit(commands::delete_learning_item(&self.document, id));
    }

    pub fn toggle_learning_item(&mut self, id: &str) {
        self.commit(commands::toggle_learning_item(&self.document, id));
    }

    // ── Devotional content ───────────────────────────────────────────

    pub fn add_saying(&mut self, new: NewSaying) -> Saying {
        let (document, saying) = commands::add_saying(&self.document, new);
        self.commit(document);
        saying
    }

    pub fn delete_saying(&mut self, id: &str) {
        self.commit(commands::delete_saying(&self.document, id));
    }

    pub fn add_counter(&mut self, new: NewCounter) -> Counter {
        let (document, counter) = commands::add_counter(&self.document, new);
        self.commit(document);
        counter
    }

    pub fn delete_counter(&mut self, id: &str) {
        self.commit(commands::delete_counter(&self.document, id));
    }

    // ── Notes and settings ───────────────────────────────────────────

    /// Upsert today's note for a segment.
    pub fn update_note(&mut self, segment: &SegmentLabel, text: &str) {
        self.commit(commands::update_note(
            &self.document,
            self.today,
            segment,
            text,
        ));
    }

    pub fn set_language(&mut self, language: Language) {
        self.commit(commands::set_language(&self.document, language));
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.commit(commands::set_theme(&self.document, theme));
    }

    // ── Bulk import ──────────────────────────────────────────────────

    /// Replace one collection from already-parsed items.
    pub fn upload_content(&mut self, kind: ContentKind, items: Vec<Value>) {
        self.commit(import::upload_content(&self.document, kind, items));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Priority};
    use crate::segment::Segment;
    use crate::store::DOCUMENT_FILE;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn temp_app(dir: &tempfile::TempDir, today: &str) -> App {
        App::load_at(
            DocumentStore::at(dir.path().join(DOCUMENT_FILE)),
            date(today),
        )
    }

    #[test]
    fn mutations_persist_across_loads() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut app = temp_app(&dir, "2024-01-01");
            app.add_task(NewTask {
                title: "Read".to_string(),
                priority: Priority::Normal,
                category: Category::Learning,
                segment: Segment::Fajr.into(),
                date: date("2024-01-01"),
            });
        }
        let app = temp_app(&dir, "2024-01-01");
        assert_eq!(app.document().tasks.len(), 1);
        assert_eq!(app.rolled_over(), 0);
    }

    #[test]
    fn load_applies_rollover_and_persists_it() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut app = temp_app(&dir, "2024-01-01");
            app.add_task(NewTask {
                title: "Unfinished".to_string(),
                priority: Priority::Normal,
                category: Category::Open,
                segment: Segment::Asr.into(),
                date: date("2024-01-01"),
            });
        }
        // Next day: the incomplete task follows.
        let app = temp_app(&dir, "2024-01-02");
        assert_eq!(app.rolled_over(), 1);
        assert_eq!(app.document().tasks[0].date, date("2024-01-02"));

        // The migrated document was written back: a reload on the same
        // day sees nothing to move.
        let again = temp_app(&dir, "2024-01-02");
        assert_eq!(again.rolled_over(), 0);
        assert_eq!(again.document(), app.document());
    }

    #[test]
    fn note_is_keyed_to_today() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = temp_app(&dir, "2024-01-05");
        let label: SegmentLabel = Segment::Maghrib.into();
        app.update_note(&label, "grateful");
        assert_eq!(
            app.document()
                .notes
                .get("2024-01-05_After Maghrib")
                .map(String::as_str),
            Some("grateful")
        );
    }
}
