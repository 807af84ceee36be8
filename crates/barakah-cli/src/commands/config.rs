//! Settings and assistant configuration.
//!
//! Language and theme live in the persisted document; the assistant
//! endpoint/key/model live in the TOML config file.

use barakah_core::{App, Config, Language, Theme};
use clap::Subcommand;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show document settings and assistant configuration
    Show,
    /// Set the UI language: en or ar
    Language {
        language: Language,
    },
    /// Set the theme: light or dark
    Theme {
        theme: Theme,
    },
    /// Configure the assistant endpoint
    Assistant {
        /// Chat-completions endpoint URL
        #[arg(long)]
        endpoint: Option<String>,
        /// API key
        #[arg(long)]
        api_key: Option<String>,
        /// Model name
        #[arg(long)]
        model: Option<String>,
    },
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let app = App::load()?;
            let config = Config::load()?;
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "settings": app.document().settings,
                    "assistant": {
                        "endpoint": config.assistant.endpoint,
                        "model": config.assistant.model,
                        "apiKeySet": !config.assistant.api_key.is_empty(),
                    }
                }))?
            );
        }
        ConfigAction::Language { language } => {
            let mut app = App::load()?;
            app.set_language(language);
            println!("Language updated");
        }
        ConfigAction::Theme { theme } => {
            let mut app = App::load()?;
            app.set_theme(theme);
            println!("Theme updated");
        }
        ConfigAction::Assistant {
            endpoint,
            api_key,
            model,
        } => {
            let mut config = Config::load()?;
            if let Some(endpoint) = endpoint {
                config.assistant.endpoint = endpoint;
            }
            if let Some(api_key) = api_key {
                config.assistant.api_key = api_key;
            }
            if let Some(model) = model {
                config.assistant.model = model;
            }
            config.save()?;
            println!("Assistant configuration saved");
        }
    }

    Ok(())
}
