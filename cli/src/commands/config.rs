//! Configuration inspection command.

use anyhow::Result;
use clipfill_clipboard::ClipboardBackend;
use clipfill_flows::DEFAULT_ROUND_TRIP_TEXT;
use tracing::instrument;

use crate::cli::GlobalArgs;
use crate::config::Config;
use crate::dialog::DialogKind;
use crate::output::Output;
use crate::settings::Settings;

/// Configuration written by `clipfill config --init`: every default spelled out.
pub fn starter_config() -> Config {
    let mut config = Config::default();
    config.clipboard.backend = Some(ClipboardBackend::platform_default().name().to_owned());
    config.dialog.kind = Some(DialogKind::Auto);
    config.round_trip.text = Some(DEFAULT_ROUND_TRIP_TEXT.to_owned());
    config
}

#[instrument(skip_all, name = "config", fields(init = init))]
pub fn run_config(args: &GlobalArgs, init: bool) -> Result<u8> {
    let out = Output::new();
    let path = Config::resolve_path(args.config.as_deref())?;

    if init {
        if path.exists() {
            out.info(format!("Config file already exists: {}", path.display()));
        } else {
            starter_config().save_to(&path)?;
            out.success(format!("Config file written: {}", path.display()));
        }
    }

    let config = Config::load_from(&path)?;
    let settings = Settings::resolve(args, &config)?;

    out.header("clipfill configuration");
    out.labeled(
        "File",
        format!(
            "{}{}",
            path.display(),
            if path.exists() { "" } else { " (not found)" }
        ),
    );
    out.labeled("Backend", settings.backend);
    out.labeled("Dialog", settings.dialog.name());
    out.labeled("Round-trip text", &settings.round_trip_text);

    Ok(0)
}
