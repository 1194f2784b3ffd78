//! Process-level setup and error reporting.

/// Install a panic hook that gives the terminal back before the default
/// hook prints, so the panic message is readable.
pub fn init_panic_handling() {
    #[cfg(feature = "tui")]
    {
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            crate::tui::restore_terminal();
            default_hook(info);
        }));
    }
}

/// Print a startup or runtime error and exit with code 1.
pub fn handle_error(error: anyhow::Error) {
    eprintln!();
    eprintln!("Error running glyphgrid:");
    eprintln!("{error:#}");
    eprintln!();
    eprintln!("Try running with --help for usage information.");
    std::process::exit(1);
}

/// Parse the command line arguments.
pub fn get_cli_args() -> crate::core::cli::CliArgs {
    use clap::Parser;
    crate::core::cli::CliArgs::parse()
}
