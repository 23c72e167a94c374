//! Per-tab outcomes and the aggregated batch report.

/// Outcome of one tab-creation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabOutcome {
    Opened,
    /// Creation failed; the batch keeps going. The reason is display text
    /// from the tab-creation capability.
    Failed(String),
}

/// Terminal state of one batch invocation. Exactly one is reached per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchStatus {
    /// Every URL was attempted (some attempts may still have failed).
    Completed,
    /// The user declined the large-batch confirmation; nothing was opened.
    Aborted,
    /// The URL list was empty; nothing was attempted.
    CancelledEmptyInput,
}

/// Final report for one batch: terminal status plus the per-URL outcomes in
/// input order. Empty outcome list for `Aborted` and `CancelledEmptyInput`.
#[derive(Debug, Clone)]
pub struct BatchReport {
    pub status: BatchStatus,
    pub outcomes: Vec<TabOutcome>,
}

impl BatchReport {
    pub(crate) fn terminal(status: BatchStatus) -> Self {
        Self {
            status,
            outcomes: Vec::new(),
        }
    }

    pub fn opened_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, TabOutcome::Opened))
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.len() - self.opened_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_split_outcomes() {
        let report = BatchReport {
            status: BatchStatus::Completed,
            outcomes: vec![
                TabOutcome::Opened,
                TabOutcome::Failed("browser exited with 1".to_string()),
                TabOutcome::Opened,
            ],
        };
        assert_eq!(report.opened_count(), 2);
        assert_eq!(report.failed_count(), 1);
    }

    #[test]
    fn terminal_reports_are_empty() {
        let report = BatchReport::terminal(BatchStatus::Aborted);
        assert_eq!(report.status, BatchStatus::Aborted);
        assert_eq!(report.opened_count(), 0);
        assert_eq!(report.failed_count(), 0);
    }
}
