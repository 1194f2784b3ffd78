//! Application runner logic
//!
//! Turns parsed CLI arguments into a running editor session.

use anyhow::{anyhow, Context};

use crate::core::cli::CliArgs;
use crate::core::config_file::ConfigFile;
use crate::core::errors::GlyphResult;
use crate::core::settings::EditorSettings;

/// Create and run the application with the given CLI arguments.
/// Handles special CLI flags and delegates to the terminal editor.
pub fn run_app(cli_args: CliArgs) -> GlyphResult<()> {
    cli_args.validate().map_err(|e| anyhow!(e))?;

    // Handle --new-config flag specially
    if cli_args.new_config {
        return ConfigFile::initialize_config_directory()
            .context("Failed to initialize config directory");
    }

    let config = ConfigFile::load();
    // Logging is not installed yet, so load warnings are repeated later
    let config_ignored = config.is_none() && ConfigFile::config_path().exists();
    let settings = EditorSettings::resolve(&cli_args, config.as_ref())?;

    #[cfg(feature = "tui")]
    {
        run_editor(settings, config_ignored)
    }
    #[cfg(not(feature = "tui"))]
    {
        let _ = (settings, config_ignored);
        Err(anyhow!(
            "TUI feature not compiled. Rebuild with --features tui to use the editor."
        ))
    }
}

#[cfg(feature = "tui")]
fn run_editor(settings: EditorSettings, config_ignored: bool) -> GlyphResult<()> {
    use tokio::sync::mpsc;
    use tracing::{info, warn};

    use crate::io::ClipboardHandle;
    use crate::logging;

    let (log_tx, log_rx) = mpsc::unbounded_channel();
    let _log_guard = logging::init(&settings.log_filter, Some(log_tx))?;
    if config_ignored {
        warn!(
            "Ignoring unreadable settings file {:?}, using defaults",
            ConfigFile::config_path()
        );
    }

    info!(
        "Starting glyphgrid with a {}x{} grid",
        settings.quantizer.grid_size(),
        settings.quantizer.grid_size()
    );

    let (clipboard, clipboard_worker) = ClipboardHandle::for_kind(settings.clipboard)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    let result = runtime.block_on(crate::tui::run_tui(settings, clipboard, log_rx));

    // Dropping the runtime drops every clipboard handle, which lets the
    // worker finish and release the system clipboard.
    drop(runtime);
    clipboard_worker.join();
    info!("Glyphgrid session ended");

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_arguments_stop_before_startup() {
        let args = CliArgs {
            grid_size: Some(1),
            ..CliArgs::default()
        };
        let error = run_app(args).unwrap_err();
        assert!(error.to_string().contains("Invalid grid size: 1"));
    }
}
