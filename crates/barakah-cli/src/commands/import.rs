//! Bulk JSON content import.

use std::path::PathBuf;

use barakah_core::import::parse_payload;
use barakah_core::{App, ContentKind};
use clap::Args;

#[derive(Args)]
pub struct ImportArgs {
    /// Target collection: learning, saying, or counter
    pub kind: ContentKindArg,
    /// Path to a JSON array file
    pub file: PathBuf,
}

/// Thin FromStr wrapper so clap can parse the kind directly.
#[derive(Clone, Copy)]
pub struct ContentKindArg(pub ContentKind);

impl std::str::FromStr for ContentKindArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<ContentKind>()
            .map(ContentKindArg)
            .map_err(|e| e.to_string())
    }
}

pub fn run(args: ImportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let raw = std::fs::read_to_string(&args.file)?;
    // Parse first: a rejected payload must not touch state.
    let items = parse_payload(&raw)?;
    let count = items.len();

    let mut app = App::load()?;
    app.upload_content(args.kind.0, items);

    let name = match args.kind.0 {
        ContentKind::Learning => "learning plan",
        ContentKind::Saying => "sayings",
        ContentKind::Counter => "counters",
    };
    println!("Imported {count} items into {name}");
    Ok(())
}
