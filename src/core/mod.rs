//! Core application functionality
//!
//! This module contains the core application logic, including:
//! - Settings, config file and CLI handling
//! - The glyph editing state and its actions
//! - Error helpers
//! - Process startup and the runner

pub mod cli;
pub mod config_file;
pub mod errors;
pub mod platform;
pub mod runner;
pub mod settings;
pub mod state;

// Re-export commonly used items
pub use cli::CliArgs;
pub use runner::run_app;
pub use settings::EditorSettings;
pub use state::{Action, AppState};
