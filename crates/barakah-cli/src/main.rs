use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "barakah", version, about = "Barakah daily planner CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Task management
    Task {
        #[command(subcommand)]
        action: commands::task::TaskAction,
    },
    /// Learning plan management
    Learning {
        #[command(subcommand)]
        action: commands::learning::LearningAction,
    },
    /// Devotional sayings
    Saying {
        #[command(subcommand)]
        action: commands::content::SayingAction,
    },
    /// Recitation counters
    Counter {
        #[command(subcommand)]
        action: commands::content::CounterAction,
    },
    /// Per-segment reflection notes
    Note {
        #[command(subcommand)]
        action: commands::note::NoteAction,
    },
    /// Daily dashboard
    Today(commands::today::TodayArgs),
    /// Bulk JSON content import
    Import(commands::import::ImportArgs),
    /// Settings and assistant configuration
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Ask the assistant
    Ask(commands::ask::AskArgs),
    /// Run a focus countdown
    Focus(commands::focus::FocusArgs),
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Task { action } => commands::task::run(action),
        Commands::Learning { action } => commands::learning::run(action),
        Commands::Saying { action } => commands::content::run_saying(action),
        Commands::Counter { action } => commands::content::run_counter(action),
        Commands::Note { action } => commands::note::run(action),
        Commands::Today(args) => commands::today::run(args),
        Commands::Import(args) => commands::import::run(args),
        Commands::Config { action } => commands::config::run(action),
        Commands::Ask(args) => commands::ask::run(args),
        Commands::Focus(args) => commands::focus::run(args),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
