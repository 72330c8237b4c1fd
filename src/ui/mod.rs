//! User interface module - terminal output for the command line.

pub mod formatter;

pub use formatter::{display_error, display_merge_message, display_rules, display_status};
