//! Clipboard round-trip test flow: copy a fixed string, read it back.

use clipfill_clipboard::{ClipboardBackend, ClipboardError, ClipboardService};

use crate::FlowContext;
use crate::error::FlowError;

/// Text written when the caller does not supply one.
pub const DEFAULT_ROUND_TRIP_TEXT: &str = "Texto de prueba desde pyperclip dentro de AutoKey";

const RESULT_TITLE: &str = "Clipboard Test";
const ERROR_TITLE: &str = "Error";

/// How a round-trip run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundTripOutcome {
    /// Text was written and read back; `read_back` was shown to the user.
    Completed {
        /// What was copied.
        written: String,
        /// What the clipboard returned.
        read_back: String,
    },
    /// The clipboard failed; the error was shown to the user.
    Failed {
        /// Description of the clipboard error.
        reason: String,
    },
}

impl RoundTripOutcome {
    /// Whether the clipboard returned exactly what was written.
    pub fn matches(&self) -> bool {
        match self {
            Self::Completed { written, read_back } => written == read_back,
            Self::Failed { .. } => false,
        }
    }
}

fn write_and_read(
    clipboard: &mut dyn ClipboardService,
    backend: ClipboardBackend,
    text: &str,
) -> Result<String, ClipboardError> {
    clipboard.set_clipboard(backend)?;
    clipboard.copy(text)?;
    clipboard.paste()
}

/// Runs the round-trip test flow with `text`.
///
/// Errors only when the dialog service itself fails.
pub fn run_round_trip(ctx: &mut FlowContext<'_>, text: &str) -> Result<RoundTripOutcome, FlowError> {
    match write_and_read(ctx.clipboard, ctx.backend, text) {
        Ok(read_back) => {
            if read_back == text {
                log::info!("clipboard round trip succeeded backend={}", ctx.backend);
            } else {
                log::warn!(
                    "clipboard returned different text backend={} written={text:?} read_back={read_back:?}",
                    ctx.backend
                );
            }
            ctx.dialog
                .info_dialog(RESULT_TITLE, &format!("Copied text: {read_back}"))?;
            Ok(RoundTripOutcome::Completed {
                written: text.to_owned(),
                read_back,
            })
        }
        Err(e) => {
            log::warn!("clipboard round trip failed backend={}: {e}", ctx.backend);
            ctx.dialog
                .info_dialog(ERROR_TITLE, &format!("Clipboard test failed: {e}"))?;
            Ok(RoundTripOutcome::Failed {
                reason: e.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches() {
        let same = RoundTripOutcome::Completed {
            written: "a".to_owned(),
            read_back: "a".to_owned(),
        };
        let different = RoundTripOutcome::Completed {
            written: "a".to_owned(),
            read_back: "b".to_owned(),
        };
        let failed = RoundTripOutcome::Failed {
            reason: "boom".to_owned(),
        };
        assert!(same.matches());
        assert!(!different.matches());
        assert!(!failed.matches());
    }

    #[test]
    fn test_default_text_is_the_autokey_literal() {
        assert_eq!(
            DEFAULT_ROUND_TRIP_TEXT,
            "Texto de prueba desde pyperclip dentro de AutoKey"
        );
    }
}
