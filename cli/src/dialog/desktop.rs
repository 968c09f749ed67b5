//! Desktop dialogs through zenity or kdialog.
//!
//! Both helpers exit with `0` when the user confirms and `1` when the
//! dialog is cancelled or closed; the exit code is passed through as the
//! dialog status. Entered text comes back on stdout.

use std::io;
use std::process::{Command, Stdio};

use clipfill_flows::{Dialog, DialogError, DialogResponse};
use tracing::debug;

/// Dialog helper program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DesktopTool {
    /// GTK dialogs.
    Zenity,
    /// KDE dialogs.
    Kdialog,
}

impl DesktopTool {
    fn program(self) -> &'static str {
        match self {
            Self::Zenity => "zenity",
            Self::Kdialog => "kdialog",
        }
    }

    fn input_args(self, title: &str, prompt: &str) -> Vec<String> {
        match self {
            Self::Zenity => vec![
                "--entry".to_owned(),
                "--title".to_owned(),
                title.to_owned(),
                "--text".to_owned(),
                prompt.to_owned(),
            ],
            Self::Kdialog => vec![
                "--title".to_owned(),
                title.to_owned(),
                "--inputbox".to_owned(),
                prompt.to_owned(),
            ],
        }
    }

    fn info_args(self, title: &str, message: &str) -> Vec<String> {
        match self {
            Self::Zenity => vec![
                "--info".to_owned(),
                "--no-markup".to_owned(),
                "--title".to_owned(),
                title.to_owned(),
                "--text".to_owned(),
                message.to_owned(),
            ],
            Self::Kdialog => vec![
                "--title".to_owned(),
                title.to_owned(),
                "--msgbox".to_owned(),
                plain_to_rich_text(message),
            ],
        }
    }
}

/// kdialog has no switch to disable rich text, so the message is escaped
/// and forced into rich-text mode to render verbatim.
fn plain_to_rich_text(message: &str) -> String {
    let mut rich = String::with_capacity(message.len() + 9);
    rich.push_str("<qt>");
    for c in message.chars() {
        match c {
            '&' => rich.push_str("&amp;"),
            '<' => rich.push_str("&lt;"),
            '>' => rich.push_str("&gt;"),
            '"' => rich.push_str("&quot;"),
            '\n' => rich.push_str("<br>"),
            _ => rich.push(c),
        }
    }
    rich.push_str("</qt>");
    rich
}

/// Modal desktop dialogs shown by a helper program.
pub struct DesktopDialog {
    tool: DesktopTool,
}

impl DesktopDialog {
    /// Create a dialog backed by `tool`.
    pub fn new(tool: DesktopTool) -> Self {
        Self { tool }
    }

    fn command(&self, args: &[String]) -> Command {
        let mut cmd = Command::new(self.tool.program());
        cmd.args(args).stdin(Stdio::null()).stderr(Stdio::null());
        cmd
    }

    fn spawn_error(&self, err: io::Error) -> DialogError {
        if err.kind() == io::ErrorKind::NotFound {
            DialogError::Unavailable(format!("{} not found in PATH", self.tool.program()))
        } else {
            DialogError::Io(err)
        }
    }
}

impl Dialog for DesktopDialog {
    fn input_dialog(&mut self, title: &str, prompt: &str) -> Result<DialogResponse, DialogError> {
        let output = self
            .command(&self.tool.input_args(title, prompt))
            .output()
            .map_err(|e| self.spawn_error(e))?;

        // Killed by a signal: treat like a closed window.
        let status = output.status.code().unwrap_or(DialogResponse::CANCELLED);
        let value = String::from_utf8_lossy(&output.stdout)
            .trim_end_matches(['\r', '\n'])
            .to_owned();
        debug!(tool = self.tool.program(), status, "input dialog closed");

        Ok(DialogResponse { status, value })
    }

    fn info_dialog(&mut self, title: &str, message: &str) -> Result<(), DialogError> {
        let status = self
            .command(&self.tool.info_args(title, message))
            .stdout(Stdio::null())
            .status()
            .map_err(|e| self.spawn_error(e))?;
        debug!(tool = self.tool.program(), status = ?status.code(), "info dialog closed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zenity_entry_args() {
        let args = DesktopTool::Zenity.input_args("Generate Lorem Ipsum", "Count:");
        assert_eq!(
            args,
            ["--entry", "--title", "Generate Lorem Ipsum", "--text", "Count:"]
        );
    }

    #[test]
    fn test_kdialog_msgbox_args() {
        let args = DesktopTool::Kdialog.info_args("Error", "Bad input");
        assert_eq!(args, ["--title", "Error", "--msgbox", "<qt>Bad input</qt>"]);
    }

    #[test]
    fn test_zenity_info_disables_markup() {
        let args = DesktopTool::Zenity.info_args("Clipboard Test", "Copied text: a & <b>");
        assert_eq!(
            args,
            [
                "--info",
                "--no-markup",
                "--title",
                "Clipboard Test",
                "--text",
                "Copied text: a & <b>"
            ]
        );
    }

    #[test]
    fn test_kdialog_msgbox_escapes_markup() {
        let args = DesktopTool::Kdialog.info_args("Clipboard Test", "a & <b>\n\"c\"");
        assert_eq!(args[3], "<qt>a &amp; &lt;b&gt;<br>&quot;c&quot;</qt>");
    }

    #[test]
    fn test_missing_tool_is_unavailable() {
        let dialog = DesktopDialog::new(DesktopTool::Zenity);
        let err = dialog.spawn_error(io::Error::from(io::ErrorKind::NotFound));
        assert!(
            matches!(err, DialogError::Unavailable(ref msg) if msg.contains("zenity")),
            "unexpected error: {err}"
        );
    }
}
