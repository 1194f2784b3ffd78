//! Application state management.
//!
//! The glyph set and the active character live in one explicit value that
//! the presentation layer owns and updates through transitions.

pub mod app_state;

pub use app_state::*;
