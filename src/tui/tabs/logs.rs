use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Lines kept in the Logs tab
pub const MAX_LOG_LINES: usize = 1000;

#[derive(Debug, Clone)]
pub struct LogsState {
    pub scroll_offset: usize,
    pub auto_scroll: bool,
    /// Rows shown by the last draw, used for paging.
    pub visible_lines: usize,
}

impl Default for LogsState {
    fn default() -> Self {
        Self::new()
    }
}

impl LogsState {
    pub fn new() -> Self {
        Self {
            scroll_offset: 0,
            auto_scroll: true,
            visible_lines: 20,
        }
    }

    pub fn scroll_up(&mut self) {
        if self.scroll_offset > 0 {
            self.scroll_offset -= 1;
            self.auto_scroll = false;
        }
    }

    pub fn scroll_down(&mut self, max_lines: usize) {
        if self.scroll_offset + self.visible_lines < max_lines {
            self.scroll_offset += 1;
        } else {
            self.auto_scroll = true;
        }
    }

    pub fn update_auto_scroll(&mut self, max_lines: usize) {
        if self.auto_scroll {
            self.scroll_offset = max_lines.saturating_sub(self.visible_lines);
        }
    }
}

/// Append a line, dropping the oldest beyond [`MAX_LOG_LINES`].
pub fn push_line(logs: &mut Vec<String>, line: String) {
    logs.push(line);
    if logs.len() > MAX_LOG_LINES {
        logs.drain(0..logs.len() - MAX_LOG_LINES);
    }
}

/// Handle key events for the Logs tab
pub fn handle_key_event(state: &mut LogsState, key: KeyEvent, logs_len: usize) {
    match key.code {
        KeyCode::Up => {
            state.scroll_up();
        }
        KeyCode::Down => {
            state.scroll_down(logs_len);
        }
        KeyCode::Home => {
            state.scroll_offset = 0;
            state.auto_scroll = false;
        }
        KeyCode::End => {
            state.auto_scroll = true;
        }
        _ => {}
    }
}

/// Draw the Logs tab UI
pub fn draw(f: &mut Frame, state: &mut LogsState, logs: &[String], area: Rect) {
    state.visible_lines = usize::from(area.height.saturating_sub(2)).max(1);
    state.update_auto_scroll(logs.len());

    let lines: Vec<Line> = logs
        .iter()
        .skip(state.scroll_offset)
        .take(state.visible_lines)
        .map(|line| Line::from(line.as_str()))
        .collect();

    let title = if state.auto_scroll {
        format!("Logs ({})", logs.len())
    } else {
        format!("Logs ({}) · scrolled, End to follow", logs.len())
    };
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(title, Style::default().fg(Color::Green))),
    );

    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_push_line_keeps_latest() {
        let mut logs = Vec::new();
        for i in 0..MAX_LOG_LINES + 5 {
            push_line(&mut logs, format!("line {i}"));
        }
        assert_eq!(logs.len(), MAX_LOG_LINES);
        assert_eq!(logs[0], "line 5");
    }

    #[test]
    fn test_scrolling_leaves_and_resumes_follow_mode() {
        let mut state = LogsState::new();
        state.visible_lines = 10;
        state.update_auto_scroll(30);
        assert_eq!(state.scroll_offset, 20);

        handle_key_event(&mut state, KeyEvent::new(KeyCode::Up, KeyModifiers::NONE), 30);
        assert_eq!(state.scroll_offset, 19);
        assert!(!state.auto_scroll);

        state.update_auto_scroll(40);
        assert_eq!(state.scroll_offset, 19);

        handle_key_event(&mut state, KeyEvent::new(KeyCode::End, KeyModifiers::NONE), 40);
        state.update_auto_scroll(40);
        assert_eq!(state.scroll_offset, 30);
    }
}
