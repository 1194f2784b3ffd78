//! Command line interface for the glyphgrid editor
//!
//! Handles parsing command line arguments and provides
//! validation for user inputs.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::geometry::Quantizer;

/// Glyphgrid CLI arguments
///
/// Examples:
///   glyphgrid                           # Edit with a 5x5 grid
///   glyphgrid --grid-size 9             # Finer snapping grid
///   glyphgrid --log-filter debug        # Verbose logs
///   glyphgrid --memory-clipboard        # Don't touch the system clipboard
#[derive(Parser, Debug, Clone, Default)]
#[clap(
    name = "glyphgrid",
    version,
    about = "A terminal editor for stroke-based glyphs",
    long_about = "Glyphgrid lets you draw a stroke outline for every character of a fixed alphabet by placing points on a snapping grid. Glyph sets are saved and loaded through the clipboard as JSON and can be exported as C++ source."
)]
pub struct CliArgs {
    /// Number of snap positions along each axis of the editor
    #[clap(
        long = "grid-size",
        short = 'g',
        help = "Snap positions per axis (at least 2)",
        long_help = "Number of evenly spaced snap positions along each axis of the editing surface, including both edges. Overrides the grid_size setting in settings.json. Defaults to 5."
    )]
    pub grid_size: Option<usize>,

    /// Tracing filter directive, e.g. "info" or "glyphgrid=debug"
    #[clap(
        long = "log-filter",
        help = "Log filter (tracing EnvFilter syntax)",
        long_help = "Log filter in tracing EnvFilter syntax, such as 'info' or 'glyphgrid=debug'. RUST_LOG takes precedence when set."
    )]
    pub log_filter: Option<String>,

    /// Keep the clipboard inside this process
    #[clap(
        long = "memory-clipboard",
        help = "Use an in-process clipboard instead of the system one",
        long_help = "Use an in-process clipboard instead of the system clipboard. Useful on headless machines or over SSH where no clipboard is available; exports can still be read in the Logs tab."
    )]
    pub memory_clipboard: bool,

    /// Initialize user configuration directory with settings
    ///
    /// This creates the ~/.config/glyphgrid directory with:
    /// - settings.json: default grid size and log filter
    /// - logs/: where the session log files go
    #[clap(
        long = "new-config",
        help = "Initialize user config directory with default settings",
        long_help = "Initialize the ~/.config/glyphgrid directory with a settings.json file and a logs directory, then exit."
    )]
    pub new_config: bool,
}

impl CliArgs {
    /// Validate the CLI arguments after parsing
    pub fn validate(&self) -> Result<(), String> {
        if let Some(grid_size) = self.grid_size {
            if Quantizer::new(grid_size).is_none() {
                return Err(format!(
                    "Invalid grid size: {grid_size}\nThe grid needs at least {} positions per axis.",
                    Quantizer::MIN_GRID_SIZE
                ));
            }
        }

        if let Some(filter) = &self.log_filter {
            if let Err(e) = EnvFilter::try_new(filter) {
                return Err(format!("Invalid log filter '{filter}': {e}"));
            }
        }

        Ok(())
    }
}
