//! Command implementations for the clipfill CLI.
//!
//! Each subcommand is implemented in its own module for better organization.

pub mod clipboard_test;
pub mod completions;
pub mod config;
pub mod lorem;

pub use clipboard_test::run_clipboard_test;
pub use completions::generate_completions;
pub use config::run_config;
pub use lorem::run_lorem;
