//! In-process clipboard access through `arboard`.
//!
//! # Platform Support
//!
//! - **Windows**: Win32 Clipboard API
//! - **macOS**: `NSPasteboard`
//! - **Linux X11**: X11 selections via x11rb
//! - **Linux Wayland**: wlr data-control protocol
//!
//! On X11 the contents are served by this process. Once it exits they are
//! only kept if a clipboard manager has taken them over.

use arboard::Clipboard;

use crate::error::ClipboardError;
use crate::provider::ClipboardProvider;

/// Clipboard provider backed by `arboard`.
pub struct NativeClipboard {
    inner: Clipboard,
}

impl NativeClipboard {
    /// Opens the system clipboard.
    pub fn new() -> Result<Self, ClipboardError> {
        let inner = Clipboard::new().map_err(|e| ClipboardError::BackendUnavailable {
            backend: "native".to_owned(),
            reason: e.to_string(),
        })?;
        Ok(Self { inner })
    }
}

impl ClipboardProvider for NativeClipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.inner
            .set_text(text)
            .map_err(|e| ClipboardError::AccessError(e.to_string()))
    }

    fn paste(&mut self) -> Result<String, ClipboardError> {
        match self.inner.get_text() {
            Ok(text) => Ok(text),
            // An empty clipboard reads as empty text, matching the helper programs.
            Err(arboard::Error::ContentNotAvailable) => Ok(String::new()),
            Err(e) => Err(ClipboardError::AccessError(e.to_string())),
        }
    }
}
