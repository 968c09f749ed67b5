//! Selectable system clipboard access for clipfill.
//!
//! The flows never talk to a clipboard directly. They go through
//! [`ClipboardService`], which mirrors the small API desktop automation
//! scripts are used to: pick a backend, `copy`, `paste`.
//!
//! # Modules
//!
//! - [`backend`]: the mechanisms that can fulfil copy/paste
//! - [`provider`]: the provider/service traits and [`SystemClipboard`]
//! - [`native`]: in-process access through `arboard`
//! - [`command`]: helper programs such as `xclip` or `wl-copy`
//! - [`memory`]: an in-process clipboard for tests and headless runs
//!
//! # Design Philosophy
//!
//! Clipboard access is trait-based for testability:
//! - Production implementations work with the real system clipboard
//! - [`MemoryClipboard`] records every operation so callers can be tested
//!   without side effects

pub mod backend;
pub mod command;
pub mod error;
pub mod memory;
pub mod native;
pub mod provider;

// Re-export commonly used types for convenience
pub use backend::ClipboardBackend;
pub use command::{CommandClipboard, HelperCommand};
pub use error::ClipboardError;
pub use memory::{ClipboardOp, MemoryClipboard};
pub use native::NativeClipboard;
pub use provider::{ClipboardProvider, ClipboardService, SystemClipboard};
