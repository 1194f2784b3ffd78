//! Key bindings
//!
//! Letters other than the five clipboard/edit commands are left unbound so
//! that a stray key press never edits a glyph by accident.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::state::Action;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Quit,
    NextTab,
    PreviousTab,
    /// Read the clipboard and merge it into the glyph set.
    Import,
    /// Copy the glyph set as JSON (also logged).
    ExportJson,
    /// Copy the glyph set as C++ source.
    ExportSource,
    /// A glyph set transition.
    Edit(Action),
    /// Move the keyboard grid cursor by whole grid steps.
    MoveCursor { dx: i32, dy: i32 },
    /// Append the point under the grid cursor.
    PlaceCursorPoint,
}

/// Bindings active on every tab.
pub fn global_command(key: &KeyEvent) -> Option<Command> {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q') | KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(Command::Quit),
        (KeyCode::Esc, _) => Some(Command::Quit),
        (KeyCode::Tab, _) => Some(Command::NextTab),
        (KeyCode::BackTab, _) => Some(Command::PreviousTab),
        _ => None,
    }
}

/// Bindings of the editor tab.
pub fn editor_command(key: &KeyEvent) -> Option<Command> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }

    let command = match key.code {
        KeyCode::Char('v') => Command::Import,
        KeyCode::Char('c') => Command::ExportJson,
        KeyCode::Char('x') => Command::Edit(Action::ClearPath),
        KeyCode::Char('z') => Command::Edit(Action::RemoveLastPoint),
        KeyCode::Char('e') => Command::ExportSource,
        KeyCode::Left => Command::MoveCursor { dx: -1, dy: 0 },
        KeyCode::Right => Command::MoveCursor { dx: 1, dy: 0 },
        KeyCode::Up => Command::MoveCursor { dx: 0, dy: 1 },
        KeyCode::Down => Command::MoveCursor { dx: 0, dy: -1 },
        KeyCode::Enter | KeyCode::Char(' ') => Command::PlaceCursorPoint,
        KeyCode::PageDown | KeyCode::Char(']') => Command::Edit(Action::SelectNext),
        KeyCode::PageUp | KeyCode::Char('[') => Command::Edit(Action::SelectPrevious),
        _ => return None,
    };
    Some(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_clipboard_and_edit_letters() {
        assert_eq!(editor_command(&key(KeyCode::Char('v'))), Some(Command::Import));
        assert_eq!(editor_command(&key(KeyCode::Char('c'))), Some(Command::ExportJson));
        assert_eq!(
            editor_command(&key(KeyCode::Char('x'))),
            Some(Command::Edit(Action::ClearPath))
        );
        assert_eq!(
            editor_command(&key(KeyCode::Char('z'))),
            Some(Command::Edit(Action::RemoveLastPoint))
        );
        assert_eq!(editor_command(&key(KeyCode::Char('e'))), Some(Command::ExportSource));
    }

    #[test]
    fn test_other_letters_and_uppercase_are_unbound() {
        for c in ['a', 'q', 'V', 'C', 'X', 'Z', 'E', '1'] {
            assert_eq!(editor_command(&key(KeyCode::Char(c))), None, "{c:?}");
        }
    }

    #[test]
    fn test_modified_letters_are_not_editor_commands() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(editor_command(&ctrl_c), None);
        assert_eq!(global_command(&ctrl_c), Some(Command::Quit));

        let alt_x = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT);
        assert_eq!(editor_command(&alt_x), None);
    }

    #[test]
    fn test_cursor_moves_up_in_value_space() {
        assert_eq!(
            editor_command(&key(KeyCode::Up)),
            Some(Command::MoveCursor { dx: 0, dy: 1 })
        );
        assert_eq!(editor_command(&key(KeyCode::Enter)), Some(Command::PlaceCursorPoint));
    }

    #[test]
    fn test_global_bindings() {
        assert_eq!(global_command(&key(KeyCode::Tab)), Some(Command::NextTab));
        assert_eq!(global_command(&key(KeyCode::BackTab)), Some(Command::PreviousTab));
        assert_eq!(global_command(&key(KeyCode::Esc)), Some(Command::Quit));
        assert_eq!(global_command(&key(KeyCode::Char('v'))), None);
    }
}
