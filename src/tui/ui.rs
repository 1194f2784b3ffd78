use crate::tui::tabs::TabState;
use crate::tui::{app::App, tabs};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

pub fn draw(f: &mut Frame, app: &mut App) {
    // Hit areas only exist for what this frame actually draws
    app.layout.clear();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ]
            .as_ref(),
        )
        .split(f.size());

    // Draw tab bar
    draw_tabs(f, app, chunks[0]);

    // Draw current tab content
    draw_tab_content(f, app, chunks[1]);

    draw_status(f, app, chunks[2]);
}

fn draw_tabs(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = app
        .tabs
        .iter()
        .enumerate()
        .map(|(i, tab)| {
            let title = format!("{}.{}", i + 1, tab.tab_type.title());
            Line::from(title)
        })
        .collect();

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title("Glyphgrid"))
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .select(app.current_tab)
        .divider("│");

    f.render_widget(tabs, area);
}

fn draw_tab_content(f: &mut Frame, app: &mut App, area: Rect) {
    let current_tab_idx = app.current_tab;

    match &mut app.tabs[current_tab_idx].state {
        TabState::Editor(state) => {
            tabs::editor::draw(f, state, &app.state, app.quantizer, &mut app.layout, area);
        }
        TabState::Logs(state) => {
            tabs::logs::draw(f, state, &app.logs, area);
        }
        TabState::Help => {
            tabs::help::draw(f, area);
        }
    }
}

fn draw_status(f: &mut Frame, app: &App, area: Rect) {
    let status = Line::from(vec![
        Span::styled(
            format!(" {} ", app.state.active()),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(app.status.as_str(), Style::default().fg(Color::Gray)),
    ]);

    f.render_widget(Paragraph::new(status), area);
}
