use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the Help tab UI
pub fn draw(f: &mut Frame, area: Rect) {
    let help_text = vec![
        Line::from(vec![Span::styled(
            "Global Controls:",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from("  Ctrl+Q / Esc   - Quit (unexported glyphs are lost)"),
        Line::from("  Tab            - Next tab"),
        Line::from("  Shift+Tab      - Previous tab"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Editor Tab:",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from("  Click grid     - Add a snapped point to the active glyph"),
        Line::from("  Click glyph    - Make that glyph active"),
        Line::from("  Arrow keys     - Move the grid cursor"),
        Line::from("  Enter / Space  - Add the point under the grid cursor"),
        Line::from("  [ / ]          - Previous / next glyph (also Page Up/Down)"),
        Line::from("  z              - Remove the last point"),
        Line::from("  x              - Clear the active glyph"),
        Line::from("  c              - Copy all glyphs as JSON (also written to the log)"),
        Line::from("  v              - Paste JSON glyphs from the clipboard"),
        Line::from("  e              - Copy all glyphs as C++ source"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Logs Tab:",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from("  Up / Down      - Scroll"),
        Line::from("  Home / End     - Jump to top / follow new lines"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Strokes:",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from("  Points are joined in pairs: 0-1, 2-3, ... An odd last point stays loose."),
    ];

    let paragraph = Paragraph::new(help_text)
        .block(Block::default().borders(Borders::ALL).title("Help"))
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}
