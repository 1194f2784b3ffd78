//! Core application state
//!
//! The editing session is a single [`AppState`] value owned by the event
//! loop. Every change goes through [`AppState::apply`] with an [`Action`];
//! paths are replaced wholesale, never patched in place.

use tracing::debug;

use crate::data::alphabet;
use crate::data::glyph_set::{self, GlyphImport, GlyphSet, Path, Point};

/// A state transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Append a point to the active glyph's path.
    AppendPoint(Point),
    /// Drop the active path's final point.
    RemoveLastPoint,
    /// Empty the active path.
    ClearPath,
    /// Make another alphabet character active.
    SelectGlyph(char),
    /// Activate the next character, wrapping at the end of the alphabet.
    SelectNext,
    /// Activate the previous character, wrapping at the start.
    SelectPrevious,
    /// Merge paths read back from the clipboard.
    Import(GlyphImport),
}

/// The glyph set being edited plus the active character.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    glyphs: GlyphSet,
    active: char,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Empty glyph set with the first alphabet character active.
    pub fn new() -> Self {
        Self {
            glyphs: GlyphSet::new(),
            active: alphabet::first(),
        }
    }

    pub fn glyphs(&self) -> &GlyphSet {
        &self.glyphs
    }

    pub fn active(&self) -> char {
        self.active
    }

    pub fn active_index(&self) -> usize {
        alphabet::index_of(self.active).unwrap_or(0)
    }

    pub fn active_path(&self) -> &[Point] {
        self.glyphs.path(self.active).unwrap_or_default()
    }

    /// Apply `action`. Returns whether anything changed.
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::AppendPoint(point) => {
                debug!("Append ({}, {}) to '{}'", point.x, point.y, self.active);
                self.replace_active(|path| glyph_set::appended(path, point))
            }
            Action::RemoveLastPoint => {
                if self.active_path().is_empty() {
                    return false;
                }
                self.replace_active(glyph_set::without_last)
            }
            Action::ClearPath => {
                if self.active_path().is_empty() {
                    return false;
                }
                self.replace_active(glyph_set::cleared)
            }
            Action::SelectGlyph(c) => {
                if !alphabet::contains(c) {
                    debug!("Ignoring selection of {:?}: not in the alphabet", c);
                    return false;
                }
                let changed = self.active != c;
                self.active = c;
                changed
            }
            Action::SelectNext => {
                let next = (self.active_index() + 1) % alphabet::ALPHABET_LEN;
                self.select_index(next)
            }
            Action::SelectPrevious => {
                let previous = (self.active_index() + alphabet::ALPHABET_LEN - 1)
                    % alphabet::ALPHABET_LEN;
                self.select_index(previous)
            }
            Action::Import(import) => {
                let replaced = self.glyphs.merge(import);
                debug!("Imported {} glyph paths", replaced);
                replaced > 0
            }
        }
    }

    fn select_index(&mut self, index: usize) -> bool {
        match alphabet::char_at(index) {
            Some(c) => self.apply(Action::SelectGlyph(c)),
            None => false,
        }
    }

    fn replace_active(&mut self, f: impl FnOnce(&[Point]) -> Path) -> bool {
        self.glyphs.update_path(self.active, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn test_draw_and_undo_scenario() {
        let mut state = AppState::new();
        state.apply(Action::SelectGlyph('A'));
        for point in [p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0)] {
            assert!(state.apply(Action::AppendPoint(point)));
        }
        assert_eq!(state.active_path(), [p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0)]);

        let pairs: Vec<_> = crate::geometry::segments(state.active_path()).collect();
        assert_eq!(pairs, vec![(p(0.0, 0.0), p(1.0, 0.0))]);

        assert!(state.apply(Action::RemoveLastPoint));
        assert_eq!(state.active_path(), [p(0.0, 0.0), p(1.0, 0.0)]);
    }

    #[test]
    fn test_edits_only_touch_active_glyph() {
        let mut state = AppState::new();
        state.apply(Action::SelectGlyph('b'));
        state.apply(Action::AppendPoint(p(0.5, 0.5)));
        state.apply(Action::SelectGlyph('c'));
        state.apply(Action::AppendPoint(p(0.25, 0.25)));
        state.apply(Action::ClearPath);

        assert_eq!(state.glyphs().path('b'), Some([p(0.5, 0.5)].as_slice()));
        assert_eq!(state.glyphs().path('c'), Some([].as_slice()));
        assert_eq!(state.glyphs().total_points(), 1);
    }

    #[test]
    fn test_remove_and_clear_on_empty_path_change_nothing() {
        let mut state = AppState::new();
        let before = state.clone();
        assert!(!state.apply(Action::RemoveLastPoint));
        assert!(!state.apply(Action::ClearPath));
        assert_eq!(state, before);
    }

    #[test]
    fn test_select_does_not_touch_paths() {
        let mut state = AppState::new();
        state.apply(Action::AppendPoint(p(1.0, 1.0)));
        let glyphs = state.glyphs().clone();

        assert!(state.apply(Action::SelectGlyph('?')));
        assert_eq!(state.active(), '?');
        assert!(!state.apply(Action::SelectGlyph('?')));
        assert!(!state.apply(Action::SelectGlyph('#')));
        assert_eq!(state.active(), '?');
        assert_eq!(state.glyphs(), &glyphs);
    }

    #[test]
    fn test_select_next_and_previous_wrap() {
        let mut state = AppState::new();
        state.apply(Action::SelectPrevious);
        assert_eq!(state.active(), '*');
        state.apply(Action::SelectNext);
        assert_eq!(state.active(), 'A');
        state.apply(Action::SelectNext);
        assert_eq!(state.active(), 'B');
    }

    #[test]
    fn test_import_merges_and_keeps_key_set() {
        let mut state = AppState::new();
        state.apply(Action::SelectGlyph('B'));
        state.apply(Action::AppendPoint(p(0.5, 0.0)));

        let import = crate::data::json::parse_import(
            r#"{"A": [{"x": 0, "y": 0}], "not a glyph": [{"x": 1, "y": 1}]}"#,
        )
        .unwrap();
        assert!(state.apply(Action::Import(import)));

        assert_eq!(state.glyphs().path('A'), Some([p(0.0, 0.0)].as_slice()));
        assert_eq!(state.glyphs().path('B'), Some([p(0.5, 0.0)].as_slice()));
        assert!(state.glyphs().keys().eq(alphabet::chars()));
        assert_eq!(state.active(), 'B');
    }

    #[test]
    fn test_key_set_survives_any_sequence() {
        let mut state = AppState::new();
        let actions = [
            Action::AppendPoint(p(2.0, -1.0)),
            Action::SelectNext,
            Action::AppendPoint(p(0.0, 0.0)),
            Action::RemoveLastPoint,
            Action::RemoveLastPoint,
            Action::SelectGlyph('é'),
            Action::ClearPath,
            Action::Import(GlyphImport::default()),
            Action::SelectPrevious,
            Action::ClearPath,
        ];
        for action in actions {
            state.apply(action);
            assert!(state.glyphs().keys().eq(alphabet::chars()));
        }
    }
}
