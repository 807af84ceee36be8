//! Day-boundary migration of unfinished tasks.
//!
//! Runs exactly once, at load time, before any other component observes
//! the document. The date-equality guard makes a second run in the same
//! day a no-op.

use chrono::NaiveDate;

use crate::model::Document;

/// Result of applying rollover to a loaded document.
#[derive(Debug, Clone)]
pub struct RolloverOutcome {
    pub document: Document,
    /// Number of incomplete past tasks re-dated to today.
    pub moved: usize,
    /// Whether the document changed at all (date stamp included).
    pub changed: bool,
}

/// Migrate incomplete past-dated tasks onto `today` and stamp the new
/// date. Completed past tasks are historical records and keep their
/// original date.
pub fn roll_over(document: Document, today: NaiveDate) -> RolloverOutcome {
    if document.settings.last_active_date == today {
        return RolloverOutcome {
            document,
            moved: 0,
            changed: false,
        };
    }

    let mut moved = 0;
    let tasks = document
        .tasks
        .iter()
        .cloned()
        .map(|mut task| {
            if task.date < today && !task.completed {
                task.date = today;
                moved += 1;
            }
            task
        })
        .collect();

    let mut settings = document.settings.clone();
    settings.last_active_date = today;

    RolloverOutcome {
        document: Document {
            tasks,
            settings,
            ..document
        },
        moved,
        changed: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Task;
    use crate::segment::Segment;
    use chrono::Utc;
    use proptest::prelude::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn task(id: &str, day: &str, completed: bool) -> Task {
        Task {
            id: id.to_string(),
            title: format!("Task {id}"),
            completed,
            priority: Default::default(),
            category: Default::default(),
            segment: Segment::Fajr.into(),
            date: date(day),
            created_at: Utc::now(),
        }
    }

    fn doc_with(tasks: Vec<Task>, last_active: &str) -> Document {
        let mut doc = Document::new(date(last_active));
        doc.tasks = tasks;
        doc
    }

    #[test]
    fn same_day_is_untouched() {
        let doc = doc_with(vec![task("a", "2024-01-01", false)], "2024-01-02");
        let before = doc.clone();
        let out = roll_over(doc, date("2024-01-02"));
        assert!(!out.changed);
        assert_eq!(out.moved, 0);
        assert_eq!(out.document, before);
    }

    #[test]
    fn incomplete_past_task_moves_to_today() {
        // Worked scenario: one task from 2024-01-01, clock reads 2024-01-02.
        let doc = doc_with(vec![task("a", "2024-01-01", false)], "2024-01-01");
        let out = roll_over(doc, date("2024-01-02"));
        assert_eq!(out.moved, 1);
        assert_eq!(out.document.tasks[0].date, date("2024-01-02"));
        assert_eq!(
            out.document.settings.last_active_date,
            date("2024-01-02")
        );
    }

    #[test]
    fn completed_past_task_keeps_its_date() {
        let doc = doc_with(
            vec![task("a", "2024-01-01", true), task("b", "2024-01-01", false)],
            "2024-01-01",
        );
        let out = roll_over(doc, date("2024-01-03"));
        assert_eq!(out.document.tasks[0].date, date("2024-01-01"));
        assert_eq!(out.document.tasks[1].date, date("2024-01-03"));
        assert_eq!(out.moved, 1);
    }

    #[test]
    fn rollover_is_idempotent() {
        let doc = doc_with(
            vec![task("a", "2023-12-30", false), task("b", "2024-01-01", true)],
            "2024-01-01",
        );
        let once = roll_over(doc, date("2024-01-02"));
        let twice = roll_over(once.document.clone(), date("2024-01-02"));
        assert!(!twice.changed);
        assert_eq!(twice.document, once.document);
    }

    #[test]
    fn future_dated_tasks_are_left_alone() {
        let doc = doc_with(vec![task("a", "2024-02-01", false)], "2024-01-01");
        let out = roll_over(doc, date("2024-01-02"));
        assert_eq!(out.moved, 0);
        assert_eq!(out.document.tasks[0].date, date("2024-02-01"));
    }

    proptest! {
        #[test]
        fn applying_twice_equals_applying_once(
            days in proptest::collection::vec((0u32..60, any::<bool>()), 0..20)
        ) {
            let base = date("2024-01-01");
            let today = date("2024-02-15");
            let tasks: Vec<Task> = days
                .iter()
                .enumerate()
                .map(|(i, (offset, completed))| {
                    let mut t = task(&format!("t{i}"), "2024-01-01", *completed);
                    t.date = base + chrono::Duration::days(*offset as i64);
                    t
                })
                .collect();
            let doc = doc_with(tasks, "2024-01-01");

            let once = roll_over(doc, today);
            let twice = roll_over(once.document.clone(), today);
            prop_assert_eq!(&twice.document, &once.document);

            // No incomplete task remains in the past.
            for t in &once.document.tasks {
                prop_assert!(t.completed || t.date >= today);
            }
        }
    }
}
