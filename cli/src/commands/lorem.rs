//! Text generator command.

use anyhow::{Context as _, Result};
use clipfill_clipboard::SystemClipboard;
use clipfill_flows::{FlowContext, GeneratorOutcome, LoremIpsum, run_text_generator};
use tracing::{info, instrument};

use crate::dialog::build_dialog;
use crate::output::Output;
use crate::settings::Settings;

/// Exit status for a finished text generator run.
///
/// Cancelling and mistyping are ordinary user actions; only a clipboard
/// failure makes the run unsuccessful.
pub fn exit_status(outcome: &GeneratorOutcome) -> u8 {
    match outcome {
        GeneratorOutcome::Copied { .. }
        | GeneratorOutcome::Cancelled
        | GeneratorOutcome::InvalidInput { .. } => 0,
        GeneratorOutcome::ClipboardFailed { .. } => 1,
    }
}

#[instrument(skip_all, name = "lorem", fields(backend = %settings.backend, dialog = settings.dialog.name(), seed = ?seed))]
pub fn run_lorem(settings: &Settings, seed: Option<u64>) -> Result<u8> {
    let out = Output::new();

    let mut dialog = build_dialog(settings.dialog);
    let mut clipboard = SystemClipboard::new();
    let mut lorem = match seed {
        Some(seed) => LoremIpsum::seeded(seed),
        None => LoremIpsum::new(),
    };

    let outcome = {
        let mut ctx = FlowContext::new(dialog.as_mut(), &mut clipboard, settings.backend);
        run_text_generator(&mut ctx, &mut lorem).context("Text generator could not run")?
    };

    match &outcome {
        GeneratorOutcome::Copied { characters } => {
            out.success(format!(
                "Copied {characters} characters to the clipboard ({})",
                settings.backend
            ));
        }
        GeneratorOutcome::Cancelled => info!("Text generator cancelled"),
        GeneratorOutcome::InvalidInput { input } => info!(input = %input, "Invalid character count"),
        GeneratorOutcome::ClipboardFailed { reason } => out.error(format!("Clipboard error: {reason}")),
    }

    Ok(exit_status(&outcome))
}
