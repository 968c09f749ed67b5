//! The two clipfill flows and the pieces they are built from.
//!
//! - [`text_generator`]: ask for a character count, generate that much
//!   placeholder text, copy it
//! - [`round_trip`]: copy a fixed string, read it back, report it
//!
//! Both flows receive their collaborators through a [`FlowContext`]
//! instead of reaching for globals, so they run the same way against a
//! real desktop and against the in-memory doubles used in tests.

pub mod dialog;
pub mod error;
pub mod lorem;
pub mod round_trip;
pub mod text_generator;

use clipfill_clipboard::{ClipboardBackend, ClipboardService};

pub use dialog::{Dialog, DialogError, DialogResponse, ScriptedDialog, ShownDialog};
pub use error::FlowError;
pub use lorem::{LoremIpsum, ParagraphSource, generate_placeholder};
pub use round_trip::{DEFAULT_ROUND_TRIP_TEXT, RoundTripOutcome, run_round_trip};
pub use text_generator::{GeneratorOutcome, parse_characters, run_text_generator};

/// Collaborators shared by both flows.
pub struct FlowContext<'a> {
    /// Where prompts and results are shown.
    pub dialog: &'a mut dyn Dialog,
    /// Clipboard the flow writes to.
    pub clipboard: &'a mut dyn ClipboardService,
    /// Backend selected right before the clipboard is touched.
    pub backend: ClipboardBackend,
}

impl<'a> FlowContext<'a> {
    /// Bundles the collaborators for one flow run.
    pub fn new(
        dialog: &'a mut dyn Dialog,
        clipboard: &'a mut dyn ClipboardService,
        backend: ClipboardBackend,
    ) -> Self {
        Self {
            dialog,
            clipboard,
            backend,
        }
    }
}
