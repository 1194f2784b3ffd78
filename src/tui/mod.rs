pub mod app;
pub mod communication;
pub mod events;
pub mod keymap;
pub mod tabs;
pub mod ui;

use crate::core::settings::EditorSettings;
use crate::io::ClipboardHandle;
use anyhow::Result;
use communication::AppMessage;
use tokio::sync::mpsc;

/// Take over the terminal and run the editor until the user quits.
///
/// `log_rx` carries formatted log lines for the Logs tab.
pub async fn run_tui(
    settings: EditorSettings,
    clipboard: ClipboardHandle,
    mut log_rx: mpsc::UnboundedReceiver<String>,
) -> Result<()> {
    use crossterm::{
        event::EnableMouseCapture,
        execute,
        terminal::{enable_raw_mode, EnterAlternateScreen},
    };
    use ratatui::{backend::CrosstermBackend, Terminal};
    use std::io;

    let (app_tx, mut app_rx) = mpsc::unbounded_channel();

    // Log lines join the same queue as clipboard results
    let log_tx = app_tx.clone();
    tokio::spawn(async move {
        while let Some(line) = log_rx.recv().await {
            if log_tx.send(AppMessage::LogLine(line)).is_err() {
                break;
            }
        }
    });

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = app::App::new(settings.quantizer, clipboard, app_tx);
    let result = app.run(&mut terminal, &mut app_rx).await;

    restore_terminal();
    terminal.show_cursor()?;

    result
}

/// Leave raw mode and the alternate screen. Safe to call more than once.
pub fn restore_terminal() {
    use crossterm::{
        event::DisableMouseCapture,
        execute,
        terminal::{disable_raw_mode, LeaveAlternateScreen},
    };

    let _ = disable_raw_mode();
    let _ = execute!(std::io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
}
