//! One-shot assistant chat.
//!
//! Sends the message with today's context, prints the reply, and
//! applies any add-task instruction through the normal command path.

use barakah_core::commands::NewTask;
use barakah_core::{App, AssistantClient, Config, Segment};
use chrono::Local;
use clap::Args;

#[derive(Args)]
pub struct AskArgs {
    /// Message for the assistant
    #[arg(required = true)]
    pub message: Vec<String>,
}

pub fn run(args: AskArgs) -> Result<(), Box<dyn std::error::Error>> {
    let message = args.message.join(" ");
    let mut app = App::load()?;
    let config = Config::load()?;
    let client = AssistantClient::new(config.assistant);

    let segment = Segment::current(Local::now());
    let today = app.today();

    let runtime = tokio::runtime::Runtime::new()?;
    let reply = runtime.block_on(async {
        let pending = app.document().pending_on(today);
        client.chat(segment, today, &pending, &message).await
    });

    // One instruction, one task.
    for draft in &reply.drafts {
        app.add_task(NewTask {
            title: draft.title.clone(),
            priority: draft.priority,
            category: draft.category,
            segment: draft.segment.clone(),
            date: today,
        });
    }

    println!("{}", reply.text);
    Ok(())
}
