//! Task management commands for CLI.

use barakah_core::commands::NewTask;
use barakah_core::{App, Category, Priority, Segment, SegmentLabel};
use chrono::NaiveDate;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum TaskAction {
    /// Add a new task
    Add {
        /// Task title
        title: String,
        /// Priority: urgent or normal (default: normal)
        #[arg(long, default_value = "normal")]
        priority: Priority,
        /// Category: work, learning, spiritual, health, or open (default: open)
        #[arg(long, default_value = "open")]
        category: Category,
        /// Time segment label (default: the currently active segment)
        #[arg(long)]
        segment: Option<SegmentLabel>,
        /// Calendar date YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// List tasks
    List {
        /// Filter by date (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// List every task regardless of date
        #[arg(long)]
        all: bool,
        /// Filter by segment label
        #[arg(long)]
        segment: Option<SegmentLabel>,
        /// Filter by category
        #[arg(long)]
        category: Option<Category>,
    },
    /// Update a task
    Update {
        /// Task ID
        id: String,
        /// New title
        #[arg(long)]
        title: Option<String>,
        /// New priority
        #[arg(long)]
        priority: Option<Priority>,
        /// New category
        #[arg(long)]
        category: Option<Category>,
        /// New segment label
        #[arg(long)]
        segment: Option<SegmentLabel>,
        /// New date YYYY-MM-DD
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Flip a task's completion flag
    Toggle {
        /// Task ID
        id: String,
    },
    /// Delete a task
    Delete {
        /// Task ID
        id: String,
    },
}

pub fn run(action: TaskAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::load()?;

    match action {
        TaskAction::Add {
            title,
            priority,
            category,
            segment,
            date,
        } => {
            if title.trim().is_empty() {
                return Err("task title must not be empty".into());
            }
            let task = app.add_task(NewTask {
                title,
                priority,
                category,
                segment: segment
                    .unwrap_or_else(|| Segment::current(chrono::Local::now()).into()),
                date: date.unwrap_or_else(|| app.today()),
            });
            println!("Task added: {}", task.id);
            println!("{}", serde_json::to_string_pretty(&task)?);
        }
        TaskAction::List {
            date,
            all,
            segment,
            category,
        } => {
            let day = date.unwrap_or_else(|| app.today());
            let filtered: Vec<_> = app
                .document()
                .tasks
                .iter()
                .filter(|t| all || t.date == day)
                .filter(|t| segment.as_ref().map_or(true, |s| &t.segment == s))
                .filter(|t| category.map_or(true, |c| t.category == c))
                .collect();
            println!("{}", serde_json::to_string_pretty(&filtered)?);
        }
        TaskAction::Update {
            id,
            title,
            priority,
            category,
            segment,
            date,
        } => {
            let mut task = app
                .document()
                .tasks
                .iter()
                .find(|t| t.id == id)
                .cloned()
                .ok_or(format!("Task not found: {id}"))?;

            if let Some(t) = title {
                task.title = t;
            }
            if let Some(p) = priority {
                task.priority = p;
            }
            if let Some(c) = category {
                task.category = c;
            }
            if let Some(s) = segment {
                task.segment = s;
            }
            if let Some(d) = date {
                task.date = d;
            }

            app.update_task(task.clone());
            println!("{}", serde_json::to_string_pretty(&task)?);
        }
        TaskAction::Toggle { id } => {
            app.toggle_task(&id);
            match app.document().tasks.iter().find(|t| t.id == id) {
                Some(task) => println!("{}", serde_json::to_string_pretty(task)?),
                None => println!("Task not found: {id}"),
            }
        }
        TaskAction::Delete { id } => {
            app.delete_task(&id);
            println!("Task deleted: {id}");
        }
    }

    Ok(())
}
