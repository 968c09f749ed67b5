//! Clipboard access through helper programs.
//!
//! Copy writes the text to the helper's stdin; paste reads its stdout.
//! `xclip` and `wl-copy` fork a background process that keeps serving the
//! selection, so copy must not capture their stdout or stderr: the forked
//! child inherits the pipes and `wait_with_output` would never return.

use std::io::{self, Write as _};
use std::process::{Command, Stdio};

use crate::backend::ClipboardBackend;
use crate::error::ClipboardError;
use crate::provider::ClipboardProvider;

/// A program and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelperCommand {
    /// Executable name or path.
    pub program: String,
    /// Arguments passed verbatim.
    pub args: Vec<String>,
}

impl HelperCommand {
    /// Creates a helper command.
    pub fn new(program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|&arg| arg.to_owned()).collect(),
        }
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd
    }
}

/// Clipboard provider that shells out to a copy and a paste helper.
#[derive(Debug, Clone)]
pub struct CommandClipboard {
    name: String,
    copy: HelperCommand,
    paste: HelperCommand,
}

impl CommandClipboard {
    /// Returns the helpers for `backend`, or `None` for in-process backends.
    pub fn for_backend(backend: ClipboardBackend) -> Option<Self> {
        let (copy, paste) = match backend {
            ClipboardBackend::Native => return None,
            ClipboardBackend::Xclip => (
                HelperCommand::new("xclip", &["-selection", "clipboard"]),
                HelperCommand::new("xclip", &["-selection", "clipboard", "-o"]),
            ),
            ClipboardBackend::Xsel => (
                HelperCommand::new("xsel", &["--clipboard", "--input"]),
                HelperCommand::new("xsel", &["--clipboard", "--output"]),
            ),
            ClipboardBackend::WlClipboard => (
                HelperCommand::new("wl-copy", &[]),
                HelperCommand::new("wl-paste", &["--no-newline"]),
            ),
            ClipboardBackend::Pbcopy => (
                HelperCommand::new("pbcopy", &[]),
                HelperCommand::new("pbpaste", &[]),
            ),
        };
        Some(Self::with_commands(backend.name(), copy, paste))
    }

    /// Creates a provider from arbitrary helpers.
    pub fn with_commands(name: impl Into<String>, copy: HelperCommand, paste: HelperCommand) -> Self {
        Self {
            name: name.into(),
            copy,
            paste,
        }
    }

    fn spawn_error(&self, helper: &HelperCommand, err: &io::Error) -> ClipboardError {
        if err.kind() == io::ErrorKind::NotFound {
            ClipboardError::BackendUnavailable {
                backend: self.name.clone(),
                reason: format!("{} not found in PATH", helper.program),
            }
        } else {
            ClipboardError::AccessError(format!("failed to run {}: {err}", helper.program))
        }
    }
}

impl ClipboardProvider for CommandClipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut child = self
            .copy
            .command()
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| self.spawn_error(&self.copy, &e))?;

        // The stdin handle is dropped at the end of the match, closing the
        // pipe so the helper sees EOF. The child is reaped even if the write
        // failed, and its exit status explains a broken pipe better than
        // the pipe error does.
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Ok(()),
        };

        let status = child.wait().map_err(|e| {
            ClipboardError::AccessError(format!("failed to wait for {}: {e}", self.copy.program))
        })?;

        if !status.success() {
            return Err(ClipboardError::CommandFailed {
                program: self.copy.program.clone(),
                status: status.to_string(),
                stderr: String::new(),
            });
        }

        written.map_err(|e| {
            ClipboardError::AccessError(format!("failed to write to {}: {e}", self.copy.program))
        })
    }

    fn paste(&mut self) -> Result<String, ClipboardError> {
        let output = self
            .paste
            .command()
            .stdin(Stdio::null())
            .output()
            .map_err(|e| self.spawn_error(&self.paste, &e))?;

        if !output.status.success() {
            return Err(ClipboardError::CommandFailed {
                program: self.paste.program.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
            });
        }

        String::from_utf8(output.stdout).map_err(|e| ClipboardError::InvalidUtf8(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_has_no_helpers() {
        assert!(CommandClipboard::for_backend(ClipboardBackend::Native).is_none());
    }

    #[test]
    fn test_xclip_targets_clipboard_selection() {
        let clipboard = CommandClipboard::for_backend(ClipboardBackend::Xclip)
            .expect("xclip has helpers");
        assert_eq!(clipboard.copy.program, "xclip");
        assert_eq!(clipboard.copy.args, ["-selection", "clipboard"]);
        assert_eq!(clipboard.paste.args, ["-selection", "clipboard", "-o"]);
    }

    #[test]
    fn test_wl_paste_strips_trailing_newline() {
        let clipboard = CommandClipboard::for_backend(ClipboardBackend::WlClipboard)
            .expect("wl-clipboard has helpers");
        assert_eq!(clipboard.paste.program, "wl-paste");
        assert_eq!(clipboard.paste.args, ["--no-newline"]);
    }

    #[test]
    fn test_missing_helper_is_unavailable() {
        let mut clipboard = CommandClipboard::with_commands(
            "missing",
            HelperCommand::new("clipfill-no-such-helper", &[]),
            HelperCommand::new("clipfill-no-such-helper", &[]),
        );
        let err = clipboard.copy("text").expect_err("helper does not exist");
        assert!(
            matches!(err, ClipboardError::BackendUnavailable { ref backend, .. } if backend == "missing"),
            "unexpected error: {err}"
        );
        let err = clipboard.paste().expect_err("helper does not exist");
        assert!(
            matches!(err, ClipboardError::BackendUnavailable { .. }),
            "unexpected error: {err}"
        );
    }
}
