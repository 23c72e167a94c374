//! Injected host capabilities the batch opener drives.
//!
//! The core never talks to a browser directly; the CLI supplies these.

use super::report::BatchReport;

/// Tab creation failed for one URL. Recorded in the batch report, never
/// propagated out of the batch loop.
#[derive(Debug, thiserror::Error)]
pub enum TabCreateError {
    /// The browser launcher could not be spawned at all.
    #[error("failed to launch browser: {0}")]
    Launch(#[from] std::io::Error),
    /// The launcher ran but reported failure.
    #[error("browser {0}")]
    Exit(std::process::ExitStatus),
    /// Any other host-specific failure.
    #[error("{0}")]
    Other(String),
}

/// Opens one URL as a new tab, blocking until the outcome is known. The
/// opener relies on this: the next tab is not attempted until the previous
/// attempt resolved, which keeps the resulting tab order deterministic.
pub trait TabCreator {
    fn create_tab(&mut self, url: &str) -> Result<(), TabCreateError>;
}

/// Yes/no prompt, consulted only before a large batch.
pub trait ConfirmPrompt {
    fn confirm(&mut self, message: &str) -> bool;
}

/// Receives per-item progress and the final report. Presentation is entirely
/// the implementor's concern.
pub trait ProgressSink {
    fn on_progress(&mut self, completed: usize, total: usize, message: &str);
    fn on_done(&mut self, report: &BatchReport);
}
