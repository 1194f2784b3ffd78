//! Editor tab: the grid canvas for the active glyph and thumbnails of all
//! glyphs.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::Span,
    widgets::{
        canvas::{Canvas, Context, Line as CanvasLine, Points},
        Block, Borders,
    },
    Frame,
};

use crate::core::state::AppState;
use crate::data::Point;
use crate::geometry::{segment_count, segments, Quantizer};
use crate::tui::hit_test::LayoutMap;

pub const THUMBNAIL_WIDTH: u16 = 8;
pub const THUMBNAIL_HEIGHT: u16 = 4;

#[derive(Debug, Clone, Default)]
pub struct EditorState {
    /// Grid cursor column, counted from the left edge.
    pub cursor_col: usize,
    /// Grid cursor row, counted from the bottom edge.
    pub cursor_row: usize,
    /// First visible thumbnail row.
    pub thumbnail_scroll: usize,
}

impl EditorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the cursor by whole grid steps, staying on the grid.
    pub fn move_cursor(&mut self, dx: i32, dy: i32, grid_size: usize) {
        let last = grid_size.saturating_sub(1) as i64;
        let step =
            |value: usize, delta: i32| (value as i64 + i64::from(delta)).clamp(0, last) as usize;
        self.cursor_col = step(self.cursor_col, dx);
        self.cursor_row = step(self.cursor_row, dy);
    }

    pub fn cursor_point(&self, quantizer: &Quantizer) -> Point {
        quantizer.grid_point(self.cursor_col, self.cursor_row)
    }

    /// Scroll the thumbnail grid so that `active_row` is visible.
    pub fn update_thumbnail_scroll(&mut self, active_row: usize, visible_rows: usize) {
        if active_row < self.thumbnail_scroll {
            self.thumbnail_scroll = active_row;
        } else if active_row >= self.thumbnail_scroll + visible_rows {
            self.thumbnail_scroll = active_row + 1 - visible_rows;
        }
    }
}

/// Draw the Editor tab UI
pub fn draw(
    f: &mut Frame,
    state: &mut EditorState,
    app_state: &AppState,
    quantizer: Quantizer,
    layout: &mut LayoutMap,
    area: Rect,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)].as_ref())
        .split(area);

    draw_editor(f, state, app_state, quantizer, layout, chunks[0]);
    draw_thumbnails(f, state, app_state, layout, chunks[1]);
}

fn draw_editor(
    f: &mut Frame,
    state: &EditorState,
    app_state: &AppState,
    quantizer: Quantizer,
    layout: &mut LayoutMap,
    area: Rect,
) {
    let path = app_state.active_path();
    let grid = quantizer.grid_size();
    let title = format!(
        " '{}' · {} points · {} segments · {}x{} grid ",
        app_state.active(),
        path.len(),
        segment_count(path),
        grid,
        grid
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(title, Style::default().fg(Color::Green)));
    layout.editor = Some(block.inner(area));

    let cursor = state.cursor_point(&quantizer);
    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds([0.0, 1.0])
        .y_bounds([0.0, 1.0])
        .paint(|ctx| {
            for v in quantizer.grid_values() {
                ctx.draw(&CanvasLine {
                    x1: v,
                    y1: 0.0,
                    x2: v,
                    y2: 1.0,
                    color: Color::DarkGray,
                });
                ctx.draw(&CanvasLine {
                    x1: 0.0,
                    y1: v,
                    x2: 1.0,
                    y2: v,
                    color: Color::DarkGray,
                });
            }
            ctx.layer();

            paint_segments(ctx, path, Color::White);
            ctx.layer();

            ctx.draw(&Points {
                coords: &[(cursor.x, cursor.y)],
                color: Color::Yellow,
            });
            for (i, point) in path.iter().enumerate() {
                ctx.print(
                    point.x,
                    point.y,
                    Span::styled(i.to_string(), Style::default().fg(Color::Cyan)),
                );
            }
        });

    f.render_widget(canvas, area);
}

fn draw_thumbnails(
    f: &mut Frame,
    state: &mut EditorState,
    app_state: &AppState,
    layout: &mut LayoutMap,
    area: Rect,
) {
    let glyphs = app_state.glyphs();
    let block = Block::default().borders(Borders::ALL).title(Span::styled(
        format!(" Glyphs · {} points ", glyphs.total_points()),
        Style::default().fg(Color::Green),
    ));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.width < THUMBNAIL_WIDTH || inner.height < THUMBNAIL_HEIGHT {
        return;
    }

    let columns = usize::from(inner.width / THUMBNAIL_WIDTH);
    let visible_rows = usize::from(inner.height / THUMBNAIL_HEIGHT);
    state.update_thumbnail_scroll(app_state.active_index() / columns, visible_rows);

    let first = state.thumbnail_scroll * columns;
    for (slot, (c, path)) in glyphs
        .iter()
        .skip(first)
        .take(visible_rows * columns)
        .enumerate()
    {
        let rect = Rect::new(
            inner.x + (slot % columns) as u16 * THUMBNAIL_WIDTH,
            inner.y + (slot / columns) as u16 * THUMBNAIL_HEIGHT,
            THUMBNAIL_WIDTH,
            THUMBNAIL_HEIGHT,
        );
        draw_thumbnail(f, c, path, c == app_state.active(), rect);
        layout.thumbnails.push((c, rect));
    }
}

fn draw_thumbnail(f: &mut Frame, c: char, path: &[Point], active: bool, area: Rect) {
    let border_style = if active {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(format!("{c} {}", path.len()), border_style));

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds([0.0, 1.0])
        .y_bounds([0.0, 1.0])
        .paint(|ctx| paint_segments(ctx, path, Color::White));

    f.render_widget(canvas, area);
}

fn paint_segments(ctx: &mut Context, path: &[Point], color: Color) {
    for (a, b) in segments(path) {
        ctx.draw(&CanvasLine {
            x1: a.x,
            y1: a.y,
            x2: b.x,
            y2: b.y,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::Action;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_cursor_stays_on_grid() {
        let mut state = EditorState::new();
        state.move_cursor(-1, -1, 5);
        assert_eq!((state.cursor_col, state.cursor_row), (0, 0));

        for _ in 0..10 {
            state.move_cursor(1, 1, 5);
        }
        assert_eq!((state.cursor_col, state.cursor_row), (4, 4));

        state.move_cursor(-2, 0, 5);
        let q = Quantizer::new(5).unwrap();
        assert_eq!(state.cursor_point(&q), Point::new(0.5, 1.0));
    }

    #[test]
    fn test_thumbnail_scroll_follows_active_row() {
        let mut state = EditorState::new();
        state.update_thumbnail_scroll(2, 4);
        assert_eq!(state.thumbnail_scroll, 0);

        state.update_thumbnail_scroll(7, 4);
        assert_eq!(state.thumbnail_scroll, 4);

        state.update_thumbnail_scroll(5, 4);
        assert_eq!(state.thumbnail_scroll, 4);

        state.update_thumbnail_scroll(1, 4);
        assert_eq!(state.thumbnail_scroll, 1);
    }

    #[test]
    fn test_title_counts_points_and_segments() {
        let mut app_state = AppState::new();
        for point in [
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
        ] {
            app_state.apply(Action::AppendPoint(point));
        }
        let quantizer = Quantizer::new(5).unwrap();
        let mut state = EditorState::new();
        let mut layout = LayoutMap::default();

        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal
            .draw(|f| {
                let area = f.size();
                draw(f, &mut state, &app_state, quantizer, &mut layout, area)
            })
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("3 points · 1 segments · 5x5 grid"));
    }
}
