//! Terminal dialogs.

use clipfill_flows::{Dialog, DialogError, DialogResponse};
use inquire::{InquireError, Text};

use crate::output::Output;

/// Shows dialogs on the controlling terminal.
///
/// Esc and Ctrl+C on the input prompt count as cancelling the dialog.
pub struct TerminalDialog {
    out: Output,
}

impl Default for TerminalDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalDialog {
    /// Create a terminal dialog writing to stdout.
    pub fn new() -> Self {
        Self { out: Output::new() }
    }
}

impl Dialog for TerminalDialog {
    fn input_dialog(&mut self, title: &str, prompt: &str) -> Result<DialogResponse, DialogError> {
        self.out.header(title);

        match Text::new(prompt)
            .with_help_message("Enter to confirm, Esc to cancel")
            .prompt_skippable()
        {
            Ok(Some(value)) => Ok(DialogResponse::ok(value)),
            Ok(None) | Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                Ok(DialogResponse::cancelled())
            }
            Err(InquireError::IO(e)) => Err(DialogError::Io(e)),
            Err(e) => Err(DialogError::Unavailable(e.to_string())),
        }
    }

    fn info_dialog(&mut self, title: &str, message: &str) -> Result<(), DialogError> {
        self.out.header(title);
        self.out.print(message);
        Ok(())
    }
}
