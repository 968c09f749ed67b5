//! Text generator flow: ask for a length, copy that much lorem ipsum.

use crate::FlowContext;
use crate::error::FlowError;
use crate::lorem::{ParagraphSource, generate_placeholder};

const INPUT_TITLE: &str = "Generate Lorem Ipsum";
const INPUT_PROMPT: &str = "Enter the number of characters:";
const INVALID_TITLE: &str = "Invalid Input";
const INVALID_MESSAGE: &str = "Please enter a valid number.";
const ERROR_TITLE: &str = "Error";

/// How a text generator run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratorOutcome {
    /// Text of this many characters is on the clipboard.
    Copied {
        /// Length of the copied text, in characters.
        characters: usize,
    },
    /// The dialog was cancelled or left empty; nothing happened.
    Cancelled,
    /// The input was not an integer; the clipboard was not touched.
    InvalidInput {
        /// What the user typed.
        input: String,
    },
    /// Selecting the backend or copying failed.
    ClipboardFailed {
        /// Description of the clipboard error.
        reason: String,
    },
}

/// Parses a character count the way a user would type it.
///
/// Surrounding whitespace and a leading sign are accepted. Anything that
/// does not fit an `i64` is rejected.
pub fn parse_characters(input: &str) -> Option<i64> {
    input.trim().parse().ok()
}

/// Runs the text generator flow.
///
/// Errors only when the dialog service itself fails. Invalid input and
/// clipboard failures are shown to the user and reported in the outcome.
pub fn run_text_generator(
    ctx: &mut FlowContext<'_>,
    source: &mut dyn ParagraphSource,
) -> Result<GeneratorOutcome, FlowError> {
    let response = ctx.dialog.input_dialog(INPUT_TITLE, INPUT_PROMPT)?;
    if !response.is_affirmative() || response.value.is_empty() {
        log::debug!("input dialog dismissed status={}", response.status);
        return Ok(GeneratorOutcome::Cancelled);
    }

    let Some(characters) = parse_characters(&response.value) else {
        log::debug!("invalid character count input={:?}", response.value);
        ctx.dialog.info_dialog(INVALID_TITLE, INVALID_MESSAGE)?;
        return Ok(GeneratorOutcome::InvalidInput {
            input: response.value,
        });
    };

    let text = generate_placeholder(characters, source);
    let length = text.chars().count();
    log::debug!("generated placeholder requested={characters} length={length}");

    let copied = ctx
        .clipboard
        .set_clipboard(ctx.backend)
        .and_then(|()| ctx.clipboard.copy(&text));

    match copied {
        Ok(()) => {
            log::info!("copied {length} characters of placeholder text backend={}", ctx.backend);
            Ok(GeneratorOutcome::Copied { characters: length })
        }
        Err(e) => {
            log::warn!("failed to copy placeholder text: {e}");
            ctx.dialog
                .info_dialog(ERROR_TITLE, &format!("Clipboard error: {e}"))?;
            Ok(GeneratorOutcome::ClipboardFailed {
                reason: e.to_string(),
            })
        }
    }
}
