pub mod clipboard;

pub use clipboard::{
    ClipboardBackend, ClipboardHandle, ClipboardWorker, MemoryClipboard, SystemClipboard,
};
