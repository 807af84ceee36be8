//! Daily dashboard: active segment, daily saying, today's tasks.

use barakah_core::{daily_saying, App, Document, Segment, SEGMENTS};
use chrono::Local;
use clap::Args;

#[derive(Args)]
pub struct TodayArgs {
    /// Emit the dashboard as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: TodayArgs) -> Result<(), Box<dyn std::error::Error>> {
    let app = App::load()?;
    let document = app.document();
    let today = app.today();
    let active = Segment::current(Local::now());
    let saying = daily_saying(&document.sayings, today);

    if args.json {
        let tasks: Vec<_> = document.tasks_on(today).collect();
        let payload = serde_json::json!({
            "date": today,
            "activeSegment": active,
            "rolledOver": app.rolled_over(),
            "saying": saying,
            "tasks": tasks,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!("{today} -- {active}");
    if app.rolled_over() > 0 {
        println!("Unfinished tasks moved to today: {}", app.rolled_over());
    }

    println!();
    println!("Daily wisdom: {}", saying.english);
    if !saying.arabic.is_empty() {
        println!("  {}", saying.arabic);
    }
    if !saying.source.is_empty() {
        println!("  -- {}", saying.source);
    }

    for segment in SEGMENTS {
        let tasks: Vec<_> = document
            .tasks_on(today)
            .filter(|t| t.segment.segment() == Some(segment))
            .collect();
        if tasks.is_empty() {
            continue;
        }
        let marker = if segment == active { ">" } else { " " };
        println!();
        println!("{marker} {segment}");
        for task in tasks {
            let done = if task.completed { "x" } else { " " };
            println!("  [{done}] {} ({}, {})", task.title, task.category, task.priority);
        }
    }

    // Custom-labelled tasks don't belong to any fixed segment.
    let custom: Vec<_> = document
        .tasks_on(today)
        .filter(|t| t.segment.segment().is_none())
        .collect();
    if !custom.is_empty() {
        println!();
        println!("  Other");
        for task in custom {
            let done = if task.completed { "x" } else { " " };
            println!("  [{done}] {} ({})", task.title, task.segment);
        }
    }

    let note_key = Document::note_key(today, &active.into());
    if let Some(note) = document.notes.get(&note_key) {
        println!();
        println!("Note ({active}): {note}");
    }

    Ok(())
}
