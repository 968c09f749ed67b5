use crate::dialog::DialogError;

/// Failures a flow cannot report to the user itself.
///
/// Invalid input and clipboard failures are shown in a dialog and end up
/// in the flow's outcome. Only a broken dialog service is left, since
/// there is nowhere else to show it.
#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    /// The dialog could not be shown or answered.
    #[error("Dialog error: {0}")]
    Dialog(#[from] DialogError),
}
