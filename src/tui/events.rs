use crossterm::event::{self, Event, KeyEventKind, MouseEvent};
use std::time::Duration;
use tokio::sync::mpsc;

pub enum InputEvent {
    Key(crossterm::event::KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
}

/// Poll the terminal and forward input until the receiver goes away.
pub async fn handle_events(tx: mpsc::UnboundedSender<InputEvent>) -> anyhow::Result<()> {
    loop {
        if event::poll(Duration::from_millis(16))? {
            let input = match event::read()? {
                // Commands fire once per key stroke; repeats and releases are ignored
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    Some(InputEvent::Key(key_event))
                }
                Event::Mouse(mouse_event) => Some(InputEvent::Mouse(mouse_event)),
                Event::Resize(cols, rows) => Some(InputEvent::Resize(cols, rows)),
                _ => None,
            };
            if let Some(input) = input {
                if tx.send(input).is_err() {
                    break;
                }
            }
        }
        tokio::time::sleep(Duration::from_millis(16)).await;
    }
    Ok(())
}
