//! A terminal editor for stroke-based glyphs, snapped to a grid and
//! shared through the clipboard.

use glyphgrid::core;

fn main() {
    core::platform::init_panic_handling();
    let cli_args = core::platform::get_cli_args();
    match core::run_app(cli_args) {
        Ok(()) => {}
        Err(error) => core::platform::handle_error(error),
    }
}
