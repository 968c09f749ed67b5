use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::dialog::DialogKind;

#[derive(Parser)]
#[command(name = "clipfill")]
#[command(about = "Placeholder text and clipboard checks for desktop automation", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Options shared by every subcommand.
#[derive(Args, Debug, Default)]
pub struct GlobalArgs {
    /// Clipboard backend: native, xclip, xsel, wl-clipboard, pbcopy
    #[arg(long, short = 'b', global = true, env = "CLIPFILL_BACKEND")]
    pub backend: Option<String>,

    /// How dialogs are shown
    #[arg(long, short = 'd', global = true, value_enum, env = "CLIPFILL_DIALOG")]
    pub dialog: Option<DialogKind>,

    /// Configuration file (defaults to the per-user config directory)
    #[arg(long, short = 'c', global = true, env = "CLIPFILL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Show timing/latency information
    #[arg(long, global = true)]
    pub timing: bool,

    /// Enable verbose debug output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Ask for a character count and copy that much lorem ipsum
    Lorem {
        /// Seed the generator for reproducible text
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Copy a fixed text, read it back and show the result
    ClipboardTest {
        /// Text to copy instead of the configured one
        #[arg(long, short = 't')]
        text: Option<String>,
    },
    /// Show the configuration file location and resolved settings
    Config {
        /// Write a default configuration file if none exists
        #[arg(long)]
        init: bool,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
