//! Focus countdown loop.
//!
//! Owns the one-second tick for the duration of the command; the loop
//! (and with it the timer) ends when the countdown completes or the
//! process is interrupted, so nothing outlives its owner.

use std::io::Write;
use std::time::Duration;

use barakah_core::{FocusEvent, FocusTimer, Segment, DEFAULT_FOCUS_MINUTES};
use chrono::Local;
use clap::Args;

#[derive(Args)]
pub struct FocusArgs {
    /// Session length in minutes
    #[arg(long, default_value_t = DEFAULT_FOCUS_MINUTES)]
    pub minutes: u32,
}

pub fn run(args: FocusArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut timer = FocusTimer::new(args.minutes);
    timer.start();

    println!(
        "Focus: {} minutes ({})",
        args.minutes,
        Segment::current(Local::now())
    );

    loop {
        std::thread::sleep(Duration::from_secs(1));
        let event = timer.tick();

        let remaining = timer.remaining_secs();
        print!("\r{:02}:{:02} ", remaining / 60, remaining % 60);
        std::io::stdout().flush()?;

        if let Some(FocusEvent::Completed { .. }) = event {
            println!();
            println!("Focus complete. Take a short break.");
            break;
        }
    }

    Ok(())
}
