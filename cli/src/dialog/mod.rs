//! Concrete dialogs for the flows.
//!
//! - [`TerminalDialog`]: prompts on the controlling terminal (inquire)
//! - [`DesktopDialog`]: modal windows through zenity or kdialog, for runs
//!   started from a hotkey or launcher without a terminal

mod desktop;
mod terminal;

use std::io::IsTerminal as _;

use clap::ValueEnum;
use clipfill_flows::Dialog;
use serde::{Deserialize, Serialize};

pub use desktop::{DesktopDialog, DesktopTool};
pub use terminal::TerminalDialog;

/// How dialogs are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialogKind {
    /// Terminal when stdin is a terminal, zenity otherwise
    #[default]
    Auto,
    /// Prompts on the terminal
    Terminal,
    /// GTK dialogs through zenity
    Zenity,
    /// KDE dialogs through kdialog
    Kdialog,
}

impl DialogKind {
    /// Replaces [`DialogKind::Auto`] with a concrete kind.
    pub fn resolve(self, stdin_is_terminal: bool) -> Self {
        match self {
            Self::Auto if stdin_is_terminal => Self::Terminal,
            Self::Auto => Self::Zenity,
            other => other,
        }
    }

    /// Name as written in configuration files.
    pub fn name(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Terminal => "terminal",
            Self::Zenity => "zenity",
            Self::Kdialog => "kdialog",
        }
    }
}

/// Builds the dialog for `kind`.
pub fn build_dialog(kind: DialogKind) -> Box<dyn Dialog> {
    match kind.resolve(std::io::stdin().is_terminal()) {
        DialogKind::Zenity => Box::new(DesktopDialog::new(DesktopTool::Zenity)),
        DialogKind::Kdialog => Box::new(DesktopDialog::new(DesktopTool::Kdialog)),
        DialogKind::Terminal | DialogKind::Auto => Box::new(TerminalDialog::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_resolves_by_terminal() {
        assert_eq!(DialogKind::Auto.resolve(true), DialogKind::Terminal);
        assert_eq!(DialogKind::Auto.resolve(false), DialogKind::Zenity);
    }

    #[test]
    fn test_explicit_kind_is_kept() {
        assert_eq!(DialogKind::Kdialog.resolve(true), DialogKind::Kdialog);
        assert_eq!(DialogKind::Terminal.resolve(false), DialogKind::Terminal);
    }
}
