//! CLI interface for soundseek
//!
//! Provides the `find`, `encode` and `settings` commands.

pub mod args;
pub mod commands;
pub mod paths;

pub use args::{Cli, Commands, OutputFormat};
pub use paths::{config_dir, PersistentConfig};
