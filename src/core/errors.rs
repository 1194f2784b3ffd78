//! Error handling helpers
//!
//! Everything fallible returns `anyhow::Result`; these helpers attach the
//! operation that failed so log lines and the status bar read well.

use anyhow::Context;
use std::path::Path;

pub type GlyphResult<T> = anyhow::Result<T>;

/// Attach a clipboard operation name to an error.
pub trait ClipboardContext<T> {
    fn with_clipboard_context(self, operation: &str) -> GlyphResult<T>;
}

impl<T, E> ClipboardContext<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_clipboard_context(self, operation: &str) -> GlyphResult<T> {
        self.with_context(|| format!("Clipboard {operation} failed"))
    }
}

/// Attach a file operation and path to an error.
pub trait FileContext<T> {
    fn with_file_context(self, operation: &str, path: &Path) -> GlyphResult<T>;
}

impl<T, E> FileContext<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_file_context(self, operation: &str, path: &Path) -> GlyphResult<T> {
        self.with_context(|| format!("Failed to {operation} {}", path.display()))
    }
}
