//! Clipboard access
//!
//! System clipboard handles are tied to the thread that created them, so a
//! dedicated worker thread owns the backend and serves read/write requests
//! sent from async code. Every call returns a `Result`; callers skip their
//! state update on failure.

use anyhow::anyhow;
use std::thread::JoinHandle;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};

use crate::core::errors::{ClipboardContext, GlyphResult};
use crate::core::settings::ClipboardKind;

/// Something that can hold one text value.
pub trait ClipboardBackend {
    fn get_text(&mut self) -> GlyphResult<String>;
    fn set_text(&mut self, text: &str) -> GlyphResult<()>;
}

/// The operating system clipboard.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> GlyphResult<Self> {
        let inner = arboard::Clipboard::new().with_clipboard_context("open")?;
        Ok(Self { inner })
    }
}

impl ClipboardBackend for SystemClipboard {
    fn get_text(&mut self) -> GlyphResult<String> {
        self.inner.get_text().with_clipboard_context("read")
    }

    fn set_text(&mut self, text: &str) -> GlyphResult<()> {
        self.inner.set_text(text).with_clipboard_context("write")
    }
}

/// An in-process clipboard.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    text: Option<String>,
}

impl MemoryClipboard {
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

impl ClipboardBackend for MemoryClipboard {
    fn get_text(&mut self) -> GlyphResult<String> {
        self.text
            .clone()
            .ok_or_else(|| anyhow!("Clipboard read failed: clipboard is empty"))
    }

    fn set_text(&mut self, text: &str) -> GlyphResult<()> {
        self.text = Some(text.to_string());
        Ok(())
    }
}

enum ClipboardRequest {
    Read(oneshot::Sender<GlyphResult<String>>),
    Write(String, oneshot::Sender<GlyphResult<()>>),
}

/// Cheap, cloneable handle to the clipboard worker.
#[derive(Clone)]
pub struct ClipboardHandle {
    tx: mpsc::UnboundedSender<ClipboardRequest>,
}

/// The worker thread. It exits once every [`ClipboardHandle`] is dropped.
pub struct ClipboardWorker {
    thread: JoinHandle<()>,
}

impl ClipboardWorker {
    /// Wait for the worker to exit so the backend is dropped cleanly; on X11
    /// that is when copied text is handed to the clipboard manager.
    pub fn join(self) {
        if self.thread.join().is_err() {
            warn!("Clipboard worker panicked");
        }
    }
}

impl ClipboardHandle {
    /// Start a worker thread that builds its backend with `make_backend`.
    ///
    /// A backend that fails to open does not stop the worker; every request
    /// then fails with the backend's error message.
    pub fn spawn<B, F>(make_backend: F) -> GlyphResult<(Self, ClipboardWorker)>
    where
        B: ClipboardBackend + 'static,
        F: FnOnce() -> GlyphResult<B> + Send + 'static,
    {
        let (tx, rx) = mpsc::unbounded_channel();
        let thread = std::thread::Builder::new()
            .name("clipboard".to_string())
            .spawn(move || serve(make_backend, rx))
            .with_clipboard_context("worker start")?;
        Ok((Self { tx }, ClipboardWorker { thread }))
    }

    /// Worker for the configured clipboard kind.
    pub fn for_kind(kind: ClipboardKind) -> GlyphResult<(Self, ClipboardWorker)> {
        match kind {
            ClipboardKind::System => Self::spawn(SystemClipboard::new),
            ClipboardKind::Memory => Self::spawn(|| Ok(MemoryClipboard::default())),
        }
    }

    pub async fn read_text(&self) -> GlyphResult<String> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(ClipboardRequest::Read(reply_tx))?;
        reply_rx
            .await
            .map_err(|_| anyhow!("Clipboard worker stopped"))?
    }

    pub async fn write_text(&self, text: String) -> GlyphResult<()> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(ClipboardRequest::Write(text, reply_tx))?;
        reply_rx
            .await
            .map_err(|_| anyhow!("Clipboard worker stopped"))?
    }

    fn send(&self, request: ClipboardRequest) -> GlyphResult<()> {
        self.tx
            .send(request)
            .map_err(|_| anyhow!("Clipboard worker stopped"))
    }
}

fn serve<B, F>(make_backend: F, mut rx: mpsc::UnboundedReceiver<ClipboardRequest>)
where
    B: ClipboardBackend,
    F: FnOnce() -> GlyphResult<B>,
{
    let mut backend = match make_backend() {
        Ok(backend) => {
            debug!("Clipboard worker ready");
            Ok(backend)
        }
        Err(e) => {
            warn!("Clipboard unavailable: {:#}", e);
            Err(format!("{e:#}"))
        }
    };

    // Runs until every handle is dropped
    while let Some(request) = rx.blocking_recv() {
        match (request, &mut backend) {
            (ClipboardRequest::Read(reply), Ok(backend)) => {
                let _ = reply.send(backend.get_text());
            }
            (ClipboardRequest::Write(text, reply), Ok(backend)) => {
                let _ = reply.send(backend.set_text(&text));
            }
            (ClipboardRequest::Read(reply), Err(message)) => {
                let _ = reply.send(Err(anyhow!("{message}")));
            }
            (ClipboardRequest::Write(_, reply), Err(message)) => {
                let _ = reply.send(Err(anyhow!("{message}")));
            }
        }
    }
    debug!("Clipboard worker stopped");
}
