use crate::core::state::{Action, AppState};
use crate::data::{json, source_export, GlyphImport};
use crate::geometry::Quantizer;
use crate::io::ClipboardHandle;
use crate::tui::{
    communication::{AppMessage, ClipboardOperation, ExportFormat},
    events::{handle_events, InputEvent},
    hit_test::LayoutMap,
    keymap::{self, Command},
    tabs::{editor::EditorState, logs, Tab, TabState, TabType},
    ui,
};
use anyhow::{anyhow, Result};
use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{backend::Backend, Terminal};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{info, warn};

const READY_STATUS: &str =
    "Click the grid to add points · v paste · c copy JSON · e copy C++ · Tab for help";

pub struct App {
    pub state: AppState,
    pub quantizer: Quantizer,
    pub tabs: Vec<Tab>,
    pub current_tab: usize,
    pub logs: Vec<String>,
    /// Outcome of the last clipboard command.
    pub status: String,
    /// Areas drawn in the last frame, for mouse hit testing.
    pub layout: LayoutMap,
    pub should_quit: bool,
    clipboard: ClipboardHandle,
    app_tx: mpsc::UnboundedSender<AppMessage>,
}

impl App {
    pub fn new(
        quantizer: Quantizer,
        clipboard: ClipboardHandle,
        app_tx: mpsc::UnboundedSender<AppMessage>,
    ) -> Self {
        let tabs = vec![
            Tab::new(TabType::Editor),
            Tab::new(TabType::Logs),
            Tab::new(TabType::Help),
        ];

        Self {
            state: AppState::new(),
            quantizer,
            tabs,
            current_tab: 0,
            logs: Vec::new(),
            status: READY_STATUS.to_string(),
            layout: LayoutMap::default(),
            should_quit: false,
            clipboard,
            app_tx,
        }
    }

    pub async fn run<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        app_rx: &mut mpsc::UnboundedReceiver<AppMessage>,
    ) -> Result<()> {
        let (input_tx, input_rx) = mpsc::unbounded_channel();

        // Spawn event handler
        let input_task = tokio::spawn(handle_events(input_tx));

        self.run_with_input(terminal, input_rx, input_task, app_rx).await
    }

    /// Event loop over an input stream fed by `input_task`.
    ///
    /// Ends with an error when the input stream closes before the user quits,
    /// since no key could reach the editor after that.
    pub async fn run_with_input<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        mut input_rx: mpsc::UnboundedReceiver<InputEvent>,
        mut input_task: JoinHandle<Result<()>>,
        app_rx: &mut mpsc::UnboundedReceiver<AppMessage>,
    ) -> Result<()> {
        info!(
            "Editing {} glyphs on a {}x{} grid",
            self.state.glyphs().len(),
            self.quantizer.grid_size(),
            self.quantizer.grid_size()
        );

        loop {
            terminal.draw(|f| ui::draw(f, self))?;

            tokio::select! {
                input_event = input_rx.recv() => match input_event {
                    Some(input_event) => self.handle_input(input_event),
                    None => return Err(input_stopped(&mut input_task).await),
                },
                Some(app_message) = app_rx.recv() => {
                    self.handle_app_message(app_message);
                }
            }

            if self.should_quit {
                break;
            }
        }

        input_task.abort();
        Ok(())
    }

    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::Key(key) => self.handle_key_event(key),
            InputEvent::Mouse(mouse) => self.handle_mouse_event(mouse),
            // Terminal will redraw at the new size on the next frame
            InputEvent::Resize(_, _) => {}
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if let Some(command) = keymap::global_command(&key) {
            self.execute(command);
            return;
        }

        let logs_len = self.logs.len();
        let current_tab_idx = self.current_tab;
        match self.tabs[current_tab_idx].tab_type {
            TabType::Editor => {
                if let Some(command) = keymap::editor_command(&key) {
                    self.execute(command);
                }
            }
            TabType::Logs => {
                if let TabState::Logs(state) = &mut self.tabs[current_tab_idx].state {
                    logs::handle_key_event(state, key, logs_len);
                }
            }
            TabType::Help => {}
        }
    }

    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if let Some(command) = self
            .layout
            .command_at(mouse.column, mouse.row, &self.quantizer)
        {
            self.execute(command);
        }
    }

    pub fn execute(&mut self, command: Command) {
        match command {
            Command::Quit => self.should_quit = true,
            Command::NextTab => self.next_tab(),
            Command::PreviousTab => self.previous_tab(),
            Command::Edit(action) => {
                self.state.apply(action);
            }
            Command::MoveCursor { dx, dy } => {
                let grid_size = self.quantizer.grid_size();
                if let Some(editor) = self.editor_state_mut() {
                    editor.move_cursor(dx, dy, grid_size);
                }
            }
            Command::PlaceCursorPoint => {
                let quantizer = self.quantizer;
                if let Some(point) = self.editor_state_mut().map(|e| e.cursor_point(&quantizer)) {
                    self.state.apply(Action::AppendPoint(point));
                }
            }
            Command::Import => self.spawn_import(),
            Command::ExportJson => match json::to_json(self.state.glyphs()) {
                Ok(text) => {
                    info!("{}", text);
                    self.spawn_export(ExportFormat::Json, text);
                }
                Err(e) => warn!("JSON export failed: {:#}", e),
            },
            Command::ExportSource => {
                let text = source_export::to_cpp_source(self.state.glyphs());
                self.spawn_export(ExportFormat::Source, text);
            }
        }
    }

    pub fn handle_app_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::Imported(import) => self.apply_import(import),
            AppMessage::Exported { format, bytes } => {
                info!("Copied glyph set as {} ({} bytes)", format.label(), bytes);
                self.status = format!("Copied glyph set as {} ({} bytes)", format.label(), bytes);
            }
            AppMessage::ClipboardFailed { operation, error } => {
                warn!("{} failed: {}", operation, error);
                self.status = format!("{operation} failed: {error}");
            }
            AppMessage::LogLine(line) => logs::push_line(&mut self.logs, line),
        }
    }

    fn apply_import(&mut self, import: GlyphImport) {
        let count = import.entries.len();
        let skipped = import.skipped.len();
        self.state.apply(Action::Import(import));

        info!("Imported {} glyphs from clipboard", count);
        self.status = if skipped > 0 {
            format!("Imported {count} glyphs, skipped {skipped} unknown keys")
        } else {
            format!("Imported {count} glyphs")
        };
    }

    fn spawn_import(&self) {
        let clipboard = self.clipboard.clone();
        let tx = self.app_tx.clone();
        tokio::spawn(async move {
            let result = match clipboard.read_text().await {
                Ok(text) => json::parse_import(&text),
                Err(e) => Err(e),
            };
            let message = match result {
                Ok(import) => AppMessage::Imported(import),
                Err(e) => AppMessage::ClipboardFailed {
                    operation: ClipboardOperation::Import,
                    error: format!("{e:#}"),
                },
            };
            let _ = tx.send(message);
        });
    }

    fn spawn_export(&self, format: ExportFormat, text: String) {
        let clipboard = self.clipboard.clone();
        let tx = self.app_tx.clone();
        tokio::spawn(async move {
            let bytes = text.len();
            let message = match clipboard.write_text(text).await {
                Ok(()) => AppMessage::Exported { format, bytes },
                Err(e) => AppMessage::ClipboardFailed {
                    operation: ClipboardOperation::Export(format),
                    error: format!("{e:#}"),
                },
            };
            let _ = tx.send(message);
        });
    }

    fn editor_state_mut(&mut self) -> Option<&mut EditorState> {
        self.tabs.iter_mut().find_map(|tab| match &mut tab.state {
            TabState::Editor(state) => Some(state),
            _ => None,
        })
    }

    pub fn next_tab(&mut self) {
        self.current_tab = (self.current_tab + 1) % self.tabs.len();
    }

    pub fn previous_tab(&mut self) {
        if self.current_tab > 0 {
            self.current_tab -= 1;
        } else {
            self.current_tab = self.tabs.len() - 1;
        }
    }

    pub fn get_current_tab(&self) -> &Tab {
        &self.tabs[self.current_tab]
    }
}

/// Why the input task stopped sending.
async fn input_stopped(input_task: &mut JoinHandle<Result<()>>) -> anyhow::Error {
    match input_task.await {
        Ok(Ok(())) => anyhow!("Terminal input stopped"),
        Ok(Err(e)) => e.context("Terminal input failed"),
        Err(e) => anyhow!("Terminal input task failed: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::settings::ClipboardKind;
    use crate::data::Point;
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::{backend::TestBackend, layout::Rect};

    fn app() -> (App, mpsc::UnboundedReceiver<AppMessage>) {
        let (clipboard, _worker) = ClipboardHandle::for_kind(ClipboardKind::Memory).unwrap();
        let (tx, rx) = mpsc::unbounded_channel();
        (App::new(Quantizer::new(5).unwrap(), clipboard, tx), rx)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn click(app: &mut App, column: u16, row: u16) {
        app.handle_mouse_event(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        });
    }

    #[tokio::test]
    async fn test_keyboard_drawing_and_undo() {
        let (mut app, _rx) = app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(
            app.state.active_path(),
            [Point::new(0.0, 0.0), Point::new(0.5, 0.25)]
        );

        press(&mut app, KeyCode::Char('z'));
        assert_eq!(app.state.active_path(), [Point::new(0.0, 0.0)]);
        press(&mut app, KeyCode::Char('x'));
        assert!(app.state.active_path().is_empty());
    }

    #[tokio::test]
    async fn test_mouse_draws_and_selects() {
        let (mut app, _rx) = app();
        app.layout = LayoutMap {
            editor: Some(Rect::new(0, 0, 40, 20)),
            thumbnails: vec![('k', Rect::new(50, 0, 8, 4))],
        };

        click(&mut app, 52, 1);
        assert_eq!(app.state.active(), 'k');

        click(&mut app, 0, 0);
        click(&mut app, 39, 19);
        assert_eq!(
            app.state.glyphs().path('k'),
            Some([Point::new(0.0, 1.0), Point::new(1.0, 0.0)].as_slice())
        );

        // Right clicks are ignored
        app.handle_mouse_event(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            column: 10,
            row: 10,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(app.state.glyphs().total_points(), 2);
    }

    #[tokio::test]
    async fn test_copy_then_paste_restores_glyphs() {
        let (mut app, mut rx) = app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);
        let drawn = app.state.glyphs().clone();

        press(&mut app, KeyCode::Char('c'));
        let message = rx.recv().await.unwrap();
        assert!(matches!(
            message,
            AppMessage::Exported {
                format: ExportFormat::Json,
                ..
            }
        ));
        app.handle_app_message(message);

        press(&mut app, KeyCode::Char('x'));
        assert!(app.state.active_path().is_empty());

        press(&mut app, KeyCode::Char('v'));
        let message = rx.recv().await.unwrap();
        assert!(matches!(message, AppMessage::Imported(_)));
        app.handle_app_message(message);
        assert_eq!(app.state.glyphs(), &drawn);
        assert_eq!(app.status, format!("Imported {} glyphs", drawn.len()));
    }

    #[tokio::test]
    async fn test_failed_paste_leaves_state_unchanged() {
        let (mut app, mut rx) = app();
        press(&mut app, KeyCode::Enter);
        let before = app.state.clone();

        // Nothing has been copied yet
        press(&mut app, KeyCode::Char('v'));
        let message = rx.recv().await.unwrap();
        assert!(matches!(
            message,
            AppMessage::ClipboardFailed {
                operation: ClipboardOperation::Import,
                ..
            }
        ));
        app.handle_app_message(message);
        assert_eq!(app.state, before);
        assert!(app.status.starts_with("Import failed"));

        // Copied text that is not a glyph set
        press(&mut app, KeyCode::Char('e'));
        let message = rx.recv().await.unwrap();
        app.handle_app_message(message);
        press(&mut app, KeyCode::Char('v'));
        let message = rx.recv().await.unwrap();
        assert!(matches!(message, AppMessage::ClipboardFailed { .. }));
        app.handle_app_message(message);
        assert_eq!(app.state, before);
    }

    #[tokio::test]
    async fn test_edit_keys_only_work_on_editor_tab() {
        let (mut app, _rx) = app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.get_current_tab().tab_type, TabType::Logs);
        press(&mut app, KeyCode::Enter);
        assert!(app.state.active_path().is_empty());

        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.get_current_tab().tab_type, TabType::Help);

        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn test_glyph_navigation_keys() {
        let (mut app, _rx) = app();
        press(&mut app, KeyCode::Char(']'));
        assert_eq!(app.state.active(), 'B');
        press(&mut app, KeyCode::PageUp);
        press(&mut app, KeyCode::PageUp);
        assert_eq!(app.state.active(), '*');
    }

    #[tokio::test]
    async fn test_input_failure_ends_the_loop_with_its_error() {
        let (mut app, mut rx) = app();
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let (input_tx, input_rx) = mpsc::unbounded_channel();
        let input_task = tokio::spawn(async move {
            drop(input_tx);
            Err(anyhow!("terminal read failed"))
        });

        let error = app
            .run_with_input(&mut terminal, input_rx, input_task, &mut rx)
            .await
            .unwrap_err();
        assert!(format!("{error:#}").contains("terminal read failed"));
    }

    #[tokio::test]
    async fn test_quit_key_ends_the_loop() {
        let (mut app, mut rx) = app();
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let (input_tx, input_rx) = mpsc::unbounded_channel();
        input_tx
            .send(InputEvent::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)))
            .unwrap();
        let input_task = tokio::spawn(async move {
            // Keeps the stream open like a live terminal
            let _input_tx = input_tx;
            std::future::pending::<Result<()>>().await
        });

        app.run_with_input(&mut terminal, input_rx, input_task, &mut rx)
            .await
            .unwrap();
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn test_draw_records_layout() {
        let (mut app, _rx) = app();
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| ui::draw(f, &mut app)).unwrap();

        let editor = app.layout.editor.expect("editor area recorded");
        assert!(editor.width > 0 && editor.height > 0);
        assert!(!app.layout.thumbnails.is_empty());
        assert_eq!(app.layout.thumbnails[0].0, 'A');

        // Selecting the last glyph scrolls it into view
        press(&mut app, KeyCode::PageUp);
        terminal.draw(|f| ui::draw(f, &mut app)).unwrap();
        assert!(app.layout.thumbnails.iter().any(|(c, _)| *c == '*'));

        press(&mut app, KeyCode::Tab);
        terminal.draw(|f| ui::draw(f, &mut app)).unwrap();
        assert_eq!(app.layout, LayoutMap::default());
    }
}
