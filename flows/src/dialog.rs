//! Blocking modal dialogs.
//!
//! The status/value pair follows what desktop dialog helpers return:
//! status `0` means the user confirmed, anything else means the dialog was
//! cancelled or dismissed.

use std::collections::VecDeque;
use std::io;

/// Answer to an input dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogResponse {
    /// `0` when the user confirmed.
    pub status: i32,
    /// Text entered by the user.
    pub value: String,
}

impl DialogResponse {
    /// Status reported when the user confirmed.
    pub const OK: i32 = 0;
    /// Status reported when the user cancelled.
    pub const CANCELLED: i32 = 1;

    /// A confirmed response carrying `value`.
    pub fn ok<S: Into<String>>(value: S) -> Self {
        Self {
            status: Self::OK,
            value: value.into(),
        }
    }

    /// A cancelled response with no value.
    pub fn cancelled() -> Self {
        Self {
            status: Self::CANCELLED,
            value: String::new(),
        }
    }

    /// Whether the user confirmed the dialog.
    pub fn is_affirmative(&self) -> bool {
        self.status == Self::OK
    }
}

/// Error types for dialog operations.
#[derive(Debug, thiserror::Error)]
pub enum DialogError {
    /// No way to show the dialog (no terminal, helper missing, ...).
    #[error("Dialog unavailable: {0}")]
    Unavailable(String),
    /// I/O failure while talking to the dialog.
    #[error("Dialog I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Blocking modal dialogs supplied by whatever launched the flow.
pub trait Dialog {
    /// Asks the user for a line of text.
    fn input_dialog(&mut self, title: &str, prompt: &str) -> Result<DialogResponse, DialogError>;

    /// Shows an informational message and waits for it to be dismissed.
    fn info_dialog(&mut self, title: &str, message: &str) -> Result<(), DialogError>;
}

/// A dialog that was shown by a [`ScriptedDialog`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShownDialog {
    /// An input dialog.
    Input {
        /// Dialog title.
        title: String,
        /// Prompt text.
        prompt: String,
    },
    /// An informational dialog.
    Info {
        /// Dialog title.
        title: String,
        /// Message text.
        message: String,
    },
}

/// Dialog that replays prepared answers and records what was shown.
///
/// Provides predetermined responses without requiring a user.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDialog {
    responses: VecDeque<DialogResponse>,
    shown: Vec<ShownDialog>,
}

impl ScriptedDialog {
    /// Creates a dialog that answers input dialogs with `responses`, in order.
    pub fn new<I: IntoIterator<Item = DialogResponse>>(responses: I) -> Self {
        Self {
            responses: responses.into_iter().collect(),
            shown: Vec::new(),
        }
    }

    /// Every dialog shown so far.
    pub fn shown(&self) -> &[ShownDialog] {
        &self.shown
    }

    /// Informational dialogs shown so far, as `(title, message)`.
    pub fn infos(&self) -> Vec<(&str, &str)> {
        self.shown
            .iter()
            .filter_map(|dialog| match dialog {
                ShownDialog::Info { title, message } => Some((title.as_str(), message.as_str())),
                ShownDialog::Input { .. } => None,
            })
            .collect()
    }
}

impl Dialog for ScriptedDialog {
    fn input_dialog(&mut self, title: &str, prompt: &str) -> Result<DialogResponse, DialogError> {
        self.shown.push(ShownDialog::Input {
            title: title.to_owned(),
            prompt: prompt.to_owned(),
        });
        self.responses
            .pop_front()
            .ok_or_else(|| DialogError::Unavailable("no scripted response left".to_owned()))
    }

    fn info_dialog(&mut self, title: &str, message: &str) -> Result<(), DialogError> {
        self.shown.push(ShownDialog::Info {
            title: title.to_owned(),
            message: message.to_owned(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_status() {
        assert!(DialogResponse::ok("42").is_affirmative());
        assert!(!DialogResponse::cancelled().is_affirmative());
        let dismissed = DialogResponse {
            status: 252,
            value: "42".to_owned(),
        };
        assert!(!dismissed.is_affirmative(), "only status 0 is affirmative");
    }

    #[test]
    fn test_scripted_dialog_replays_in_order() {
        let mut dialog = ScriptedDialog::new([DialogResponse::ok("1"), DialogResponse::cancelled()]);

        let first = dialog.input_dialog("T", "P").expect("first response");
        let second = dialog.input_dialog("T", "P").expect("second response");
        assert_eq!(first, DialogResponse::ok("1"));
        assert_eq!(second, DialogResponse::cancelled());

        let err = dialog.input_dialog("T", "P").expect_err("script is exhausted");
        assert!(matches!(err, DialogError::Unavailable(_)), "unexpected error: {err}");
        assert_eq!(dialog.shown().len(), 3);
    }

    #[test]
    fn test_scripted_dialog_records_infos() {
        let mut dialog = ScriptedDialog::default();
        dialog.info_dialog("Title", "Message").expect("info never fails");

        assert_eq!(dialog.infos(), [("Title", "Message")]);
    }
}
