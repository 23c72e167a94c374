//! Tab creation by handing URLs to the system browser launcher.

use mto_core::opener::{TabCreateError, TabCreator};
use std::env;
use std::process::Command;

/// Opens tabs by spawning `$BROWSER` (or `xdg-open`) once per URL and
/// waiting for it to exit, so each attempt's outcome is known before the
/// next tab is requested.
pub struct BrowserTabs {
    launcher: String,
}

impl BrowserTabs {
    pub fn from_env() -> Self {
        let launcher = env::var("BROWSER").unwrap_or_else(|_| "xdg-open".to_string());
        tracing::debug!(%launcher, "using browser launcher");
        Self { launcher }
    }
}

impl TabCreator for BrowserTabs {
    fn create_tab(&mut self, url: &str) -> Result<(), TabCreateError> {
        let status = Command::new(&self.launcher).arg(url).status()?;
        if status.success() {
            Ok(())
        } else {
            Err(TabCreateError::Exit(status))
        }
    }
}
