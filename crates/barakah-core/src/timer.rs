//! Focus countdown timer.
//!
//! Wall-clock based state machine with no internal thread: the owner
//! calls `tick()` periodically (once per second is enough) and tears
//! the loop down when its view goes away, so no timer can outlive its
//! owner. Elapsed time is computed from epoch-millisecond deltas, so a
//! missed tick does not lose time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default focus length in minutes.
pub const DEFAULT_FOCUS_MINUTES: u32 = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FocusState {
    Idle,
    Running,
    Paused,
    Completed,
}

/// Emitted by `tick()` when the countdown reaches zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FocusEvent {
    Completed { at: DateTime<Utc> },
}

/// Countdown engine for a single focus session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FocusTimer {
    duration_ms: u64,
    remaining_ms: u64,
    state: FocusState,
    /// Epoch ms of the last resume/tick; None unless running.
    #[serde(default)]
    last_tick_epoch_ms: Option<u64>,
}

impl FocusTimer {
    pub fn new(minutes: u32) -> Self {
        let duration_ms = u64::from(minutes) * 60 * 1000;
        FocusTimer {
            duration_ms,
            remaining_ms: duration_ms,
            state: FocusState::Idle,
            last_tick_epoch_ms: None,
        }
    }

    pub fn state(&self) -> FocusState {
        self.state
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_ms.div_ceil(1000)
    }

    /// 0.0 .. 1.0 progress through the session.
    pub fn progress(&self) -> f64 {
        if self.duration_ms == 0 {
            return 0.0;
        }
        1.0 - (self.remaining_ms as f64 / self.duration_ms as f64)
    }

    pub fn start(&mut self) {
        if matches!(self.state, FocusState::Idle | FocusState::Paused) {
            self.state = FocusState::Running;
            self.last_tick_epoch_ms = Some(now_ms());
        }
    }

    pub fn pause(&mut self) {
        if self.state == FocusState::Running {
            self.apply_elapsed(now_ms());
            self.state = FocusState::Paused;
            self.last_tick_epoch_ms = None;
        }
    }

    pub fn resume(&mut self) {
        self.start();
    }

    /// Back to a full, idle countdown.
    pub fn reset(&mut self) {
        self.remaining_ms = self.duration_ms;
        self.state = FocusState::Idle;
        self.last_tick_epoch_ms = None;
    }

    /// Advance by wall-clock time. Returns the completion event exactly
    /// once, on the tick that hits zero.
    pub fn tick(&mut self) -> Option<FocusEvent> {
        self.tick_at(now_ms())
    }

    fn tick_at(&mut self, now: u64) -> Option<FocusEvent> {
        if self.state != FocusState::Running {
            return None;
        }
        self.apply_elapsed(now);
        if self.remaining_ms == 0 {
            self.state = FocusState::Completed;
            self.last_tick_epoch_ms = None;
            return Some(FocusEvent::Completed { at: Utc::now() });
        }
        None
    }

    fn apply_elapsed(&mut self, now: u64) {
        if let Some(last) = self.last_tick_epoch_ms {
            let elapsed = now.saturating_sub(last);
            self.remaining_ms = self.remaining_ms.saturating_sub(elapsed);
            self.last_tick_epoch_ms = Some(now);
        }
    }
}

impl Default for FocusTimer {
    fn default() -> Self {
        FocusTimer::new(DEFAULT_FOCUS_MINUTES)
    }
}

fn now_ms() -> u64 {
    Utc::now().timestamp_millis().max(0) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle_with_full_duration() {
        let timer = FocusTimer::new(25);
        assert_eq!(timer.state(), FocusState::Idle);
        assert_eq!(timer.remaining_secs(), 25 * 60);
    }

    #[test]
    fn tick_decrements_by_wall_clock_delta() {
        let mut timer = FocusTimer::new(1);
        timer.start();
        let base = timer.last_tick_epoch_ms.unwrap();
        assert_eq!(timer.tick_at(base + 10_000), None);
        assert_eq!(timer.remaining_secs(), 50);
    }

    #[test]
    fn completion_fires_exactly_once() {
        let mut timer = FocusTimer::new(1);
        timer.start();
        let base = timer.last_tick_epoch_ms.unwrap();
        let event = timer.tick_at(base + 61_000);
        assert!(matches!(event, Some(FocusEvent::Completed { .. })));
        assert_eq!(timer.state(), FocusState::Completed);
        assert_eq!(timer.tick_at(base + 62_000), None);
    }

    #[test]
    fn pause_freezes_the_countdown() {
        let mut timer = FocusTimer::new(1);
        timer.start();
        let base = timer.last_tick_epoch_ms.unwrap();
        timer.tick_at(base + 5_000);
        timer.pause();
        assert_eq!(timer.state(), FocusState::Paused);
        let frozen = timer.remaining_secs();
        // Ticks while paused change nothing.
        assert_eq!(timer.tick_at(base + 60_000), None);
        assert_eq!(timer.remaining_secs(), frozen);
    }

    #[test]
    fn reset_returns_to_full_idle() {
        let mut timer = FocusTimer::new(2);
        timer.start();
        let base = timer.last_tick_epoch_ms.unwrap();
        timer.tick_at(base + 30_000);
        timer.reset();
        assert_eq!(timer.state(), FocusState::Idle);
        assert_eq!(timer.remaining_secs(), 120);
    }
}
