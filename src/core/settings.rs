//! Resolved editor settings
//!
//! Combines CLI arguments, the user config file and built-in defaults.

use anyhow::bail;
use tracing::debug;

use crate::core::cli::CliArgs;
use crate::core::config_file::ConfigFile;
use crate::core::errors::GlyphResult;
use crate::geometry::Quantizer;

pub const DEFAULT_GRID_SIZE: usize = 5;
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Where clipboard reads and writes go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClipboardKind {
    #[default]
    System,
    Memory,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditorSettings {
    pub quantizer: Quantizer,
    pub log_filter: String,
    pub clipboard: ClipboardKind,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            quantizer: Quantizer::new(DEFAULT_GRID_SIZE).unwrap_or(Quantizer::MIN),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            clipboard: ClipboardKind::System,
        }
    }
}

impl EditorSettings {
    /// Resolve settings.
    ///
    /// Priority order:
    /// 1. CLI arguments
    /// 2. Config file (~/.config/glyphgrid/settings.json)
    /// 3. Built-in defaults
    pub fn resolve(cli: &CliArgs, config: Option<&ConfigFile>) -> GlyphResult<Self> {
        let grid_size = match (cli.grid_size, config.and_then(|c| c.grid_size)) {
            (Some(size), _) => {
                debug!("Using grid size from CLI: {}", size);
                size
            }
            (None, Some(size)) => {
                debug!("Using grid size from config file: {}", size);
                size
            }
            (None, None) => DEFAULT_GRID_SIZE,
        };
        let Some(quantizer) = Quantizer::new(grid_size) else {
            bail!(
                "Invalid grid size {grid_size}: at least {} positions per axis are needed",
                Quantizer::MIN_GRID_SIZE
            );
        };

        let log_filter = cli
            .log_filter
            .clone()
            .or_else(|| config.and_then(|c| c.log_filter.clone()))
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let clipboard = if cli.memory_clipboard {
            ClipboardKind::Memory
        } else {
            ClipboardKind::System
        };

        Ok(Self {
            quantizer,
            log_filter,
            clipboard,
        })
    }
}
