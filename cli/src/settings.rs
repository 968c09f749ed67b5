//! Settings resolved from flags, environment and the config file.

use anyhow::{Context as _, Result};
use clipfill_clipboard::ClipboardBackend;
use clipfill_flows::DEFAULT_ROUND_TRIP_TEXT;

use crate::cli::GlobalArgs;
use crate::config::Config;
use crate::dialog::DialogKind;

/// Everything a flow needs to know about how to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Backend selected before touching the clipboard.
    pub backend: ClipboardBackend,
    /// How dialogs are shown.
    pub dialog: DialogKind,
    /// Text used by the round-trip test.
    pub round_trip_text: String,
}

impl Settings {
    /// Resolve settings. Flags (and their environment variables) win over
    /// the config file, which wins over built-in defaults.
    pub fn resolve(args: &GlobalArgs, config: &Config) -> Result<Self> {
        let backend = match args.backend.as_deref().or(config.clipboard.backend.as_deref()) {
            Some(name) => name
                .parse::<ClipboardBackend>()
                .with_context(|| format!("Invalid clipboard backend: {name}"))?,
            None => ClipboardBackend::platform_default(),
        };

        let dialog = args.dialog.or(config.dialog.kind).unwrap_or_default();

        let round_trip_text = config
            .round_trip
            .text
            .clone()
            .unwrap_or_else(|| DEFAULT_ROUND_TRIP_TEXT.to_owned());

        Ok(Self {
            backend,
            dialog,
            round_trip_text,
        })
    }
}
