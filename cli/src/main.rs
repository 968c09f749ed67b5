//! `clipfill`: placeholder text and clipboard checks for desktop automation.
//!
//! Meant to be bound to a hotkey or launcher entry. `clipfill lorem` asks
//! for a character count and copies that much lorem ipsum;
//! `clipfill clipboard-test` copies a fixed text, reads it back and shows
//! the result.

mod cli;
mod commands;
mod config;
mod dialog;
mod output;
mod settings;
mod timing;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser as _;

use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::output::Output;
use crate::settings::Settings;

/// Exit status for configuration errors and dialogs that could not be shown.
const EXIT_SETUP_ERROR: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    timing::init_tracing(cli.global.verbose, cli.global.timing);

    match run(cli) {
        Ok(status) => ExitCode::from(status),
        Err(e) => {
            Output::stderr().error(format!("{e:#}"));
            ExitCode::from(EXIT_SETUP_ERROR)
        }
    }
}

fn run(cli: Cli) -> Result<u8> {
    match cli.command {
        Commands::Completions { shell } => {
            commands::generate_completions(shell)?;
            Ok(0)
        }
        Commands::Config { init } => commands::run_config(&cli.global, init),
        Commands::Lorem { seed } => {
            let settings = load_settings(&cli)?;
            commands::run_lorem(&settings, seed)
        }
        Commands::ClipboardTest { ref text } => {
            let settings = load_settings(&cli)?;
            commands::run_clipboard_test(&settings, text.as_deref())
        }
    }
}

fn load_settings(cli: &Cli) -> Result<Settings> {
    let path = Config::resolve_path(cli.global.config.as_deref())?;
    let config = Config::load_from(&path)?;
    Settings::resolve(&cli.global, &config)
}
