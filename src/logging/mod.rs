//! Application logging functionality
//!
//! The terminal belongs to the editor while it runs, so log output goes to a
//! daily file under ~/.config/glyphgrid/logs/ and, when a sender is given, to
//! the in-app Logs tab.

use std::fmt;
use std::fs;
use std::path::PathBuf;

use anyhow::Context as _;
use tokio::sync::mpsc;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::core::config_file::ConfigFile;
use crate::core::errors::{FileContext, GlyphResult};

const LOG_FILE_PREFIX: &str = "glyphgrid.log";

/// Get the path to the logs directory
pub fn logs_dir() -> PathBuf {
    ConfigFile::config_dir().join("logs")
}

/// Keeps the file writer flushing until dropped at exit.
pub struct LogGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `default_filter`. The file layer is skipped, with a
/// note on stderr, when the logs directory cannot be created.
pub fn init(
    default_filter: &str,
    ui_tx: Option<mpsc::UnboundedSender<String>>,
) -> GlyphResult<LogGuard> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .context("Invalid log filter")?;

    let (file_layer, file_guard) = match file_writer() {
        Ok((writer, guard)) => {
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false);
            (Some(layer), Some(guard))
        }
        Err(e) => {
            eprintln!("Logging to file disabled: {e:#}");
            (None, None)
        }
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(ui_tx.map(ChannelLayer::new))
        .try_init()
        .context("Failed to install log subscriber")?;

    Ok(LogGuard {
        _file_guard: file_guard,
    })
}

fn file_writer() -> GlyphResult<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)> {
    let dir = logs_dir();
    fs::create_dir_all(&dir).with_file_context("create", &dir)?;
    let appender = tracing_appender::rolling::daily(&dir, LOG_FILE_PREFIX);
    Ok(tracing_appender::non_blocking(appender))
}

/// Forwards each event as one formatted line to a channel.
pub struct ChannelLayer {
    tx: mpsc::UnboundedSender<String>,
}

impl ChannelLayer {
    pub fn new(tx: mpsc::UnboundedSender<String>) -> Self {
        Self { tx }
    }
}

impl<S: Subscriber> Layer<S> for ChannelLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        let line = format!(
            "{} {:>5} {}",
            chrono::Local::now().format("%H:%M:%S"),
            event.metadata().level(),
            visitor.finish()
        );
        // Receiver gone means the UI has shut down
        let _ = self.tx.send(line);
    }
}

#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: Vec<String>,
}

impl MessageVisitor {
    fn finish(self) -> String {
        if self.fields.is_empty() {
            self.message
        } else {
            format!("{} {}", self.message, self.fields.join(" "))
        }
    }
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields.push(format!("{}={}", field.name(), value));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            self.fields.push(format!("{}={:?}", field.name(), value));
        }
    }
}
