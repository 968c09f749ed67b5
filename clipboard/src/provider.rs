//! Provider and service traits, plus the production [`SystemClipboard`].
//!
//! # Architecture
//!
//! - [`ClipboardProvider`]: one concrete mechanism (arboard, xclip, ...)
//! - [`ClipboardService`]: what callers use; selects a backend and forwards
//!   copy/paste to the provider behind it
//! - [`SystemClipboard`]: production service that builds providers on demand

use crate::backend::ClipboardBackend;
use crate::command::CommandClipboard;
use crate::error::ClipboardError;
use crate::native::NativeClipboard;

/// A single clipboard mechanism.
pub trait ClipboardProvider {
    /// Overwrites the clipboard with `text`.
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError>;

    /// Returns the current clipboard text.
    fn paste(&mut self) -> Result<String, ClipboardError>;
}

/// Clipboard access with an explicitly selectable backend.
///
/// This trait abstracts clipboard operations to allow:
/// - Production use via [`SystemClipboard`]
/// - Test mocking via [`crate::MemoryClipboard`] or custom implementations
pub trait ClipboardService {
    /// Selects the mechanism used by subsequent `copy`/`paste` calls.
    fn set_clipboard(&mut self, backend: ClipboardBackend) -> Result<(), ClipboardError>;

    /// Overwrites the clipboard with `text`.
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError>;

    /// Returns the current clipboard text.
    fn paste(&mut self) -> Result<String, ClipboardError>;
}

/// Builds the provider for `backend`.
pub fn provider_for(backend: ClipboardBackend) -> Result<Box<dyn ClipboardProvider>, ClipboardError> {
    match backend {
        ClipboardBackend::Native => Ok(Box::new(NativeClipboard::new()?)),
        other => CommandClipboard::for_backend(other)
            .map(|clipboard| Box::new(clipboard) as Box<dyn ClipboardProvider>)
            .ok_or_else(|| ClipboardError::UnknownBackend(other.to_string())),
    }
}

/// System clipboard service.
///
/// Until [`ClipboardService::set_clipboard`] is called, the
/// [platform default](ClipboardBackend::platform_default) backend is used.
/// The provider is created lazily on first use.
pub struct SystemClipboard {
    backend: ClipboardBackend,
    provider: Option<Box<dyn ClipboardProvider>>,
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClipboard {
    /// Creates a service using the platform default backend.
    pub fn new() -> Self {
        Self {
            backend: ClipboardBackend::platform_default(),
            provider: None,
        }
    }

    /// Currently selected backend.
    pub fn backend(&self) -> ClipboardBackend {
        self.backend
    }

    fn provider(&mut self) -> Result<&mut dyn ClipboardProvider, ClipboardError> {
        let provider = match self.provider.take() {
            Some(provider) => provider,
            None => provider_for(self.backend)?,
        };
        Ok(self.provider.insert(provider).as_mut())
    }
}

impl ClipboardService for SystemClipboard {
    fn set_clipboard(&mut self, backend: ClipboardBackend) -> Result<(), ClipboardError> {
        log::debug!(target: "clipfill_clipboard", "select_backend backend={backend}");
        self.provider = Some(provider_for(backend)?);
        self.backend = backend;
        Ok(())
    }

    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        log::trace!(
            target: "clipfill_clipboard",
            "copy backend={} chars={}",
            self.backend,
            text.chars().count()
        );
        self.provider()?.copy(text)
    }

    fn paste(&mut self) -> Result<String, ClipboardError> {
        log::trace!(target: "clipfill_clipboard", "paste backend={}", self.backend);
        self.provider()?.paste()
    }
}
