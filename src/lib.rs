//! Glyphgrid
pub mod core;
pub mod data;
pub mod geometry;
pub mod io;
pub mod logging;
#[cfg(feature = "tui")]
pub mod tui;
