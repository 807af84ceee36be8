//! Devotional content commands: sayings and recitation counters.

use barakah_core::commands::{NewCounter, NewSaying};
use barakah_core::{daily_saying, App};
use clap::Subcommand;

#[derive(Subcommand)]
pub enum SayingAction {
    /// Add a saying
    Add {
        /// Translated text
        english: String,
        /// Original-language text
        #[arg(long, default_value = "")]
        arabic: String,
        /// Source attribution
        #[arg(long, default_value = "")]
        source: String,
    },
    /// List the collection
    List,
    /// Show today's saying from the rotation
    Daily,
    /// Delete a saying
    Delete {
        /// Saying ID
        id: String,
    },
}

#[derive(Subcommand)]
pub enum CounterAction {
    /// Add a recitation counter
    Add {
        /// Recitation text
        text: String,
        /// Target count
        #[arg(long)]
        count: Option<u32>,
        /// Free-form time label
        #[arg(long)]
        time: Option<String>,
    },
    /// List the collection
    List,
    /// Delete a counter
    Delete {
        /// Counter ID
        id: String,
    },
}

pub fn run_saying(action: SayingAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::load()?;

    match action {
        SayingAction::Add {
            english,
            arabic,
            source,
        } => {
            if english.trim().is_empty() {
                return Err("saying text must not be empty".into());
            }
            let saying = app.add_saying(NewSaying {
                arabic,
                english,
                source,
            });
            println!("Saying added: {}", saying.id);
        }
        SayingAction::List => {
            println!(
                "{}",
                serde_json::to_string_pretty(&app.document().sayings)?
            );
        }
        SayingAction::Daily => {
            let saying = daily_saying(&app.document().sayings, app.today());
            println!("{}", serde_json::to_string_pretty(&saying)?);
        }
        SayingAction::Delete { id } => {
            app.delete_saying(&id);
            println!("Saying deleted: {id}");
        }
    }

    Ok(())
}

pub fn run_counter(action: CounterAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::load()?;

    match action {
        CounterAction::Add { text, count, time } => {
            if text.trim().is_empty() {
                return Err("counter text must not be empty".into());
            }
            let counter = app.add_counter(NewCounter { text, count, time });
            println!("Counter added: {}", counter.id);
        }
        CounterAction::List => {
            println!(
                "{}",
                serde_json::to_string_pretty(&app.document().counters)?
            );
        }
        CounterAction::Delete { id } => {
            app.delete_counter(&id);
            println!("Counter deleted: {id}");
        }
    }

    Ok(())
}
