use std::io::Write;
use std::sync::{Mutex, PoisonError};

use avocado_core::FormObserver;
use tracing::warn;

use crate::presentation::BUSY_LABEL;

/// Prints submission feedback to a terminal stream.
///
/// Alerts go out as a single line prefixed with `!`; the busy label is
/// printed when a submission starts. Results are left to the caller, which
/// renders the full result panel.
pub struct TerminalObserver<W> {
    out: Mutex<W>,
}

impl<W: Write + Send> TerminalObserver<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn emit(
        &self,
        line: &str,
    ) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = writeln!(out, "{line}").and_then(|_| out.flush()) {
            warn!(error = %e, "failed to write to terminal");
        }
    }
}

impl<W: Write + Send> FormObserver for TerminalObserver<W> {
    fn loading_changed(
        &self,
        loading: bool,
    ) {
        if loading {
            self.emit(BUSY_LABEL);
        }
    }

    fn alert(
        &self,
        message: &str,
    ) {
        self.emit(&format!("! {message}"));
    }
}
