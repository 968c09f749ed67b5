/// Error types for clipboard operations.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    /// The requested backend name is not one we know how to drive.
    #[error("Unknown clipboard backend: {0}")]
    UnknownBackend(String),
    /// The backend exists but cannot be used on this system.
    #[error("Clipboard backend {backend} is unavailable: {reason}")]
    BackendUnavailable {
        /// Name of the backend.
        backend: String,
        /// Why it could not be used.
        reason: String,
    },
    /// Failed to access the clipboard.
    #[error("Clipboard access error: {0}")]
    AccessError(String),
    /// A helper program exited unsuccessfully.
    #[error("{program} failed ({status}){}", format_stderr(.stderr))]
    CommandFailed {
        /// Program that was run.
        program: String,
        /// Exit status as reported by the OS.
        status: String,
        /// Captured standard error, trimmed.
        stderr: String,
    },
    /// Clipboard contents were not valid UTF-8 text.
    #[error("Clipboard content is not valid UTF-8: {0}")]
    InvalidUtf8(String),
}

fn format_stderr(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {stderr}")
    }
}
