//! Sequential batch tab opening with per-item failure isolation.

mod capability;
mod report;

pub use capability::{ConfirmPrompt, ProgressSink, TabCreateError, TabCreator};
pub use report::{BatchReport, BatchStatus, TabOutcome};

/// Batches larger than this go through the confirmation prompt first.
pub const LARGE_BATCH_THRESHOLD: usize = 100;

/// Opens every URL as a new tab, strictly in input order, one at a time.
///
/// An empty list resolves to `CancelledEmptyInput` without touching any
/// capability. A list larger than [`LARGE_BATCH_THRESHOLD`] goes through
/// `confirm` first; a decline resolves to `Aborted` with zero tabs opened.
/// Otherwise every URL is attempted: a failed attempt is recorded at its
/// position and the batch moves on, so one bad URL never sinks the rest.
/// The sink hears `(completed, total)` after every attempt and the final
/// report once, whichever terminal state is reached.
pub fn open_batch(
    urls: &[String],
    tabs: &mut dyn TabCreator,
    confirm: &mut dyn ConfirmPrompt,
    progress: &mut dyn ProgressSink,
) -> BatchReport {
    if urls.is_empty() {
        let report = BatchReport::terminal(BatchStatus::CancelledEmptyInput);
        progress.on_done(&report);
        return report;
    }

    if urls.len() > LARGE_BATCH_THRESHOLD {
        let message = format!(
            "You're about to open {} tabs. This might slow down your browser. Continue?",
            urls.len()
        );
        if !confirm.confirm(&message) {
            tracing::info!(total = urls.len(), "large batch declined by user");
            let report = BatchReport::terminal(BatchStatus::Aborted);
            progress.on_done(&report);
            return report;
        }
    }

    let total = urls.len();
    tracing::info!(total, "opening tab batch");

    let mut outcomes = Vec::with_capacity(total);
    for (index, url) in urls.iter().enumerate() {
        match tabs.create_tab(url) {
            Ok(()) => outcomes.push(TabOutcome::Opened),
            Err(err) => {
                tracing::warn!(url = %url, error = %err, "tab creation failed, continuing");
                outcomes.push(TabOutcome::Failed(err.to_string()));
            }
        }
        let completed = index + 1;
        progress.on_progress(completed, total, &format!("opened tab {completed} of {total}"));
    }

    let report = BatchReport {
        status: BatchStatus::Completed,
        outcomes,
    };
    tracing::info!(
        opened = report.opened_count(),
        failed = report.failed_count(),
        "tab batch finished"
    );
    progress.on_done(&report);
    report
}
