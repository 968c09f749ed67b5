//! Clipboard round-trip test command.

use anyhow::{Context as _, Result};
use clipfill_clipboard::SystemClipboard;
use clipfill_flows::{FlowContext, RoundTripOutcome, run_round_trip};
use tracing::instrument;

use crate::dialog::build_dialog;
use crate::output::Output;
use crate::settings::Settings;

/// Exit status for a finished round-trip run: `0` only when the clipboard
/// returned exactly what was written.
pub fn exit_status(outcome: &RoundTripOutcome) -> u8 {
    u8::from(!outcome.matches())
}

#[instrument(skip_all, name = "clipboard_test", fields(backend = %settings.backend, dialog = settings.dialog.name()))]
pub fn run_clipboard_test(settings: &Settings, text: Option<&str>) -> Result<u8> {
    let out = Output::new();
    let text = text.unwrap_or(&settings.round_trip_text);

    let mut dialog = build_dialog(settings.dialog);
    let mut clipboard = SystemClipboard::new();

    let outcome = {
        let mut ctx = FlowContext::new(dialog.as_mut(), &mut clipboard, settings.backend);
        run_round_trip(&mut ctx, text).context("Clipboard test could not run")?
    };

    match &outcome {
        RoundTripOutcome::Completed { read_back, .. } if !outcome.matches() => {
            out.warning(format!("Clipboard returned different text: {read_back:?}"));
        }
        RoundTripOutcome::Completed { .. } => {}
        RoundTripOutcome::Failed { reason } => out.error(format!("Clipboard test failed: {reason}")),
    }

    Ok(exit_status(&outcome))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_status() {
        let ok = RoundTripOutcome::Completed {
            written: "x".to_owned(),
            read_back: "x".to_owned(),
        };
        let mismatch = RoundTripOutcome::Completed {
            written: "x".to_owned(),
            read_back: "y".to_owned(),
        };
        let failed = RoundTripOutcome::Failed {
            reason: "no display".to_owned(),
        };
        assert_eq!(exit_status(&ok), 0);
        assert_eq!(exit_status(&mismatch), 1);
        assert_eq!(exit_status(&failed), 1);
    }
}
