use crate::data::GlyphImport;

/// The two text forms a glyph set can be copied as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Source,
}

impl ExportFormat {
    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Json => "JSON",
            ExportFormat::Source => "C++ source",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardOperation {
    Import,
    Export(ExportFormat),
}

impl std::fmt::Display for ClipboardOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClipboardOperation::Import => write!(f, "Import"),
            ClipboardOperation::Export(format) => write!(f, "{} export", format.label()),
        }
    }
}

/// Messages delivered to the event loop from background tasks.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Clipboard text was read and parsed.
    Imported(GlyphImport),
    /// Text was written to the clipboard.
    Exported { format: ExportFormat, bytes: usize },
    /// A clipboard call failed; state stays as it was.
    ClipboardFailed {
        operation: ClipboardOperation,
        error: String,
    },
    /// One formatted line from the log subscriber.
    LogLine(String),
}
