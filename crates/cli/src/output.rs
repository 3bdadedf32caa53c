//! Handing the outcome of a session to whatever runs next.

use std::io::{stdout, Stdout, Write};

use instance_picker_core::boundary::SelectionSink;
use instance_picker_core::error::Result;
use instance_picker_core::selector::SelectionResult;
use log::info;

/// Message shown when the session ended without a selection
pub const NO_SELECTION_MESSAGE: &str = "No instance selected";

/// Writes the selected key on its own line, so it can be captured with `$(ipick)`.
///
/// Nothing is written when the session was cancelled.
pub struct KeyPrinter<W: Write> {
    out: W,
}

impl KeyPrinter<Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(stdout())
    }
}

impl<W: Write> KeyPrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SelectionSink for KeyPrinter<W> {
    fn deliver(&mut self, result: &SelectionResult) -> Result<()> {
        match result {
            SelectionResult::Selected(key) => {
                info!("Selected `{key}`");
                writeln!(self.out, "{key}")?;
                self.out.flush()?;
            }
            SelectionResult::Cancelled => {
                eprintln!("{NO_SELECTION_MESSAGE}");
            }
        }

        Ok(())
    }
}
