//! Learning plan commands for CLI.

use barakah_core::commands::NewLearningItem;
use barakah_core::App;
use chrono::NaiveDate;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum LearningAction {
    /// Add a learning item
    Add {
        /// Item title
        title: String,
        /// Longer description
        #[arg(long)]
        description: Option<String>,
        /// Position in a sequenced plan
        #[arg(long)]
        day_number: Option<u32>,
        /// Assigned date YYYY-MM-DD
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// List the learning plan in insertion order
    List {
        /// Only show incomplete items
        #[arg(long)]
        pending: bool,
    },
    /// Flip an item's completion flag
    Toggle {
        /// Item ID
        id: String,
    },
    /// Delete an item
    Delete {
        /// Item ID
        id: String,
    },
}

pub fn run(action: LearningAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::load()?;

    match action {
        LearningAction::Add {
            title,
            description,
            day_number,
            date,
        } => {
            if title.trim().is_empty() {
                return Err("learning item title must not be empty".into());
            }
            let item = app.add_learning_item(NewLearningItem {
                title,
                description,
                day_number,
                date,
            });
            println!("Learning item added: {}", item.id);
            println!("{}", serde_json::to_string_pretty(&item)?);
        }
        LearningAction::List { pending } => {
            let items: Vec<_> = app
                .document()
                .learning_plan
                .iter()
                .filter(|l| !pending || !l.completed)
                .collect();
            println!("{}", serde_json::to_string_pretty(&items)?);
        }
        LearningAction::Toggle { id } => {
            app.toggle_learning_item(&id);
            match app.document().learning_plan.iter().find(|l| l.id == id) {
                Some(item) => println!("{}", serde_json::to_string_pretty(item)?),
                None => println!("Learning item not found: {id}"),
            }
        }
        LearningAction::Delete { id } => {
            app.delete_learning_item(&id);
            println!("Learning item deleted: {id}");
        }
    }

    Ok(())
}
