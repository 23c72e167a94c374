//! Terminal progress readout for a running batch.

use mto_core::opener::{BatchReport, BatchStatus, ProgressSink};
use std::io::{self, Write};

/// Prints a carriage-return progress line per tab and a final summary.
pub struct TerminalProgress;

impl ProgressSink for TerminalProgress {
    fn on_progress(&mut self, completed: usize, total: usize, message: &str) {
        let pct = (completed as f64 / total as f64) * 100.0;
        print!("\r  {message} ({pct:.0}%)  ");
        let _ = io::stdout().flush();
    }

    fn on_done(&mut self, report: &BatchReport) {
        if !report.outcomes.is_empty() {
            println!();
        }
        match report.status {
            BatchStatus::Completed => {
                if report.failed_count() == 0 {
                    println!("Successfully opened {} tabs.", report.opened_count());
                } else {
                    println!(
                        "Opened {} tabs, {} failed.",
                        report.opened_count(),
                        report.failed_count()
                    );
                }
            }
            BatchStatus::Aborted => println!("Cancelled, no tabs opened."),
            BatchStatus::CancelledEmptyInput => {
                println!("Nothing to open: no matching lines in the input.")
            }
        }
    }
}
