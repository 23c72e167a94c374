//! Confirmation prompts for large batches.

use mto_core::opener::ConfirmPrompt;
use std::fs;
use std::io::{self, BufRead, BufReader};

/// Interactive y/N prompt. Reads from the controlling terminal when there is
/// one, so piping input text on stdin does not swallow the answer; anything
/// but an explicit yes declines.
pub struct TerminalConfirm;

impl ConfirmPrompt for TerminalConfirm {
    fn confirm(&mut self, message: &str) -> bool {
        eprint!("{message} [y/N] ");
        let mut answer = String::new();
        let read = match fs::File::open("/dev/tty") {
            Ok(tty) => BufReader::new(tty).read_line(&mut answer),
            Err(_) => io::stdin().lock().read_line(&mut answer),
        };
        read.is_ok() && matches!(answer.trim(), "y" | "Y" | "yes")
    }
}

/// Substituted for the interactive prompt by `--yes`.
pub struct AssumeYes;

impl ConfirmPrompt for AssumeYes {
    fn confirm(&mut self, _message: &str) -> bool {
        true
    }
}
