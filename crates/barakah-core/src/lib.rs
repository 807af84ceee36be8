//! # Barakah Core Library
//!
//! Core business logic for Barakah, a prayer-time-anchored daily
//! planner. All state lives in a single persisted JSON document; the
//! CLI binary is a thin layer over this library.
//!
//! ## Architecture
//!
//! - **Document**: the aggregate persisted state -- tasks, learning
//!   plan, devotional content, notes, settings -- replaced wholesale on
//!   every mutation
//! - **Rollover**: once-per-day migration of incomplete past tasks onto
//!   the current date, applied at load before anything else runs
//! - **Segments**: six fixed prayer-anchored subdivisions of the day
//! - **Commands**: pure reducer-style mutations over the document
//! - **Assistant**: one tool-bound chat call for natural-language task
//!   entry
//!
//! ## Key Components
//!
//! - [`App`]: owned document snapshot with persistence after each mutation
//! - [`DocumentStore`]: JSON file persistence with silent corruption fallback
//! - [`Segment`]: total wall-clock-hour to segment resolution
//! - [`FocusTimer`]: caller-ticked focus countdown

pub mod app;
pub mod assistant;
pub mod commands;
pub mod config;
pub mod error;
pub mod import;
pub mod model;
pub mod rollover;
pub mod rotation;
pub mod segment;
pub mod store;
pub mod timer;

pub use app::App;
pub use assistant::{AssistantClient, AssistantReply, TaskDraft};
pub use config::{AssistantConfig, Config};
pub use error::{AssistantError, ConfigError, CoreError, ImportError, StoreError};
pub use import::ContentKind;
pub use model::{
    Category, Counter, Document, Language, LearningItem, Priority, Saying, Settings, Task, Theme,
};
pub use rollover::{roll_over, RolloverOutcome};
pub use rotation::{daily_index, daily_saying};
pub use segment::{Segment, SegmentLabel, SEGMENTS};
pub use store::DocumentStore;
pub use timer::{FocusEvent, FocusState, FocusTimer, DEFAULT_FOCUS_MINUTES};
