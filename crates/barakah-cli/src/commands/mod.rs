pub mod ask;
pub mod config;
pub mod content;
pub mod focus;
pub mod import;
pub mod learning;
pub mod note;
pub mod task;
pub mod today;
