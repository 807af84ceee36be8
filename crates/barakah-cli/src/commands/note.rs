//! Per-segment reflection notes.

use barakah_core::{App, Document, Segment, SegmentLabel};
use chrono::{Local, NaiveDate};
use clap::Subcommand;

#[derive(Subcommand)]
pub enum NoteAction {
    /// Set today's note for a segment (empty text is a valid note)
    Set {
        /// Note text
        text: String,
        /// Segment label (default: the currently active segment)
        #[arg(long)]
        segment: Option<SegmentLabel>,
    },
    /// Show a note
    Show {
        /// Segment label (default: the currently active segment)
        #[arg(long)]
        segment: Option<SegmentLabel>,
        /// Date YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// List all notes for a date
    List {
        /// Date YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

fn active_segment() -> SegmentLabel {
    Segment::current(Local::now()).into()
}

pub fn run(action: NoteAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::load()?;

    match action {
        NoteAction::Set { text, segment } => {
            let label = segment.unwrap_or_else(active_segment);
            app.update_note(&label, &text);
            println!("Note saved for {} / {label}", app.today());
        }
        NoteAction::Show { segment, date } => {
            let label = segment.unwrap_or_else(active_segment);
            let day = date.unwrap_or_else(|| app.today());
            let key = Document::note_key(day, &label);
            match app.document().notes.get(&key) {
                Some(text) => println!("{text}"),
                None => println!("No note for {day} / {label}"),
            }
        }
        NoteAction::List { date } => {
            let day = date.unwrap_or_else(|| app.today());
            let prefix = format!("{day}_");
            for (key, text) in &app.document().notes {
                if let Some(label) = key.strip_prefix(&prefix) {
                    println!("{label}: {text}");
                }
            }
        }
    }

    Ok(())
}
