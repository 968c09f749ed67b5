//! Clipboard backends.
//!
//! A backend is the mechanism that actually moves text in and out of the
//! system clipboard. Names follow the ones used by common clipboard
//! wrappers, so configuration written for those keeps working.

use std::fmt;
use std::str::FromStr;

use crate::error::ClipboardError;

/// Mechanism used to fulfil copy/paste.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClipboardBackend {
    /// In-process access through `arboard` (X11, Wayland, macOS, Windows).
    Native,
    /// The `xclip` helper, CLIPBOARD selection.
    Xclip,
    /// The `xsel` helper, CLIPBOARD selection.
    Xsel,
    /// `wl-copy` / `wl-paste` from wl-clipboard.
    WlClipboard,
    /// `pbcopy` / `pbpaste` on macOS.
    Pbcopy,
}

impl ClipboardBackend {
    /// Every backend, in the order they are listed to users.
    pub const ALL: [Self; 5] = [
        Self::Native,
        Self::Xclip,
        Self::Xsel,
        Self::WlClipboard,
        Self::Pbcopy,
    ];

    /// Backend used when nothing has been selected.
    pub fn platform_default() -> Self {
        if cfg!(target_os = "linux") {
            // arboard loses X11 contents when the process exits unless a
            // clipboard manager takes ownership; xclip keeps serving them.
            Self::Xclip
        } else {
            Self::Native
        }
    }

    /// Name accepted by [`FromStr`] and shown in messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::Native => "native",
            Self::Xclip => "xclip",
            Self::Xsel => "xsel",
            Self::WlClipboard => "wl-clipboard",
            Self::Pbcopy => "pbcopy",
        }
    }
}

impl fmt::Display for ClipboardBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ClipboardBackend {
    type Err = ClipboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "native" | "arboard" => Ok(Self::Native),
            "xclip" => Ok(Self::Xclip),
            "xsel" => Ok(Self::Xsel),
            "wl-clipboard" | "wl-copy" | "wayland" => Ok(Self::WlClipboard),
            "pbcopy" | "macos" => Ok(Self::Pbcopy),
            _ => Err(ClipboardError::UnknownBackend(s.to_owned())),
        }
    }
}
