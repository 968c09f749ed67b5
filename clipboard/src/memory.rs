//! In-process clipboard for tests.
//!
//! Records every call so tests can observe exactly what a caller did. No
//! backend selects it; it is only reachable by constructing it directly.

use crate::backend::ClipboardBackend;
use crate::error::ClipboardError;
use crate::provider::{ClipboardProvider, ClipboardService};

/// One call made against a [`MemoryClipboard`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardOp {
    /// `set_clipboard` with the given backend.
    Select(ClipboardBackend),
    /// `copy` with the given text.
    Copy(String),
    /// `paste`.
    Paste,
}

/// Clipboard that lives in memory and records every operation.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
    backend: Option<ClipboardBackend>,
    failure: Option<String>,
    ops: Vec<ClipboardOp>,
}

impl MemoryClipboard {
    /// Creates an empty clipboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a clipboard that already holds `text`.
    pub fn with_contents<S: Into<String>>(text: S) -> Self {
        Self {
            contents: Some(text.into()),
            ..Self::default()
        }
    }

    /// Creates a clipboard whose every operation fails with `reason`.
    pub fn failing<S: Into<String>>(reason: S) -> Self {
        Self {
            failure: Some(reason.into()),
            ..Self::default()
        }
    }

    /// Current contents, `None` if nothing was ever copied.
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }

    /// Last selected backend.
    pub fn backend(&self) -> Option<ClipboardBackend> {
        self.backend
    }

    /// Every operation in call order, failed ones included.
    pub fn ops(&self) -> &[ClipboardOp] {
        &self.ops
    }

    fn check(&self) -> Result<(), ClipboardError> {
        match &self.failure {
            Some(reason) => Err(ClipboardError::AccessError(reason.clone())),
            None => Ok(()),
        }
    }
}

impl ClipboardProvider for MemoryClipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.ops.push(ClipboardOp::Copy(text.to_owned()));
        self.check()?;
        self.contents = Some(text.to_owned());
        Ok(())
    }

    fn paste(&mut self) -> Result<String, ClipboardError> {
        self.ops.push(ClipboardOp::Paste);
        self.check()?;
        Ok(self.contents.clone().unwrap_or_default())
    }
}

impl ClipboardService for MemoryClipboard {
    fn set_clipboard(&mut self, backend: ClipboardBackend) -> Result<(), ClipboardError> {
        self.ops.push(ClipboardOp::Select(backend));
        self.check()?;
        self.backend = Some(backend);
        Ok(())
    }

    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        ClipboardProvider::copy(self, text)
    }

    fn paste(&mut self) -> Result<String, ClipboardError> {
        ClipboardProvider::paste(self)
    }
}
