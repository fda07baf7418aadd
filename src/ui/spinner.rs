use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::output;

/// A terminal spinner shown while a translation or detection call is in
/// flight.
///
/// Honors quiet mode: under `--quiet` no spinner is created, matching the
/// suppression of `status!` output. Clears itself when dropped, so an
/// early `?` return never leaves a stray spinner line behind.
pub struct Spinner {
    progress_bar: Option<ProgressBar>,
}

impl Spinner {
    /// Creates and starts a new spinner with the given message.
    pub fn new(message: &str) -> Self {
        Self::with_enabled(message, !output::is_quiet())
    }

    #[allow(clippy::unwrap_used)]
    fn with_enabled(message: &str, enabled: bool) -> Self {
        if !enabled {
            return Self { progress_bar: None };
        }

        let progress_bar = ProgressBar::new_spinner();
        // unwrap is safe: template string is a compile-time constant
        progress_bar.set_style(
            ProgressStyle::default_spinner()
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
                .template("{spinner} {msg}")
                .unwrap(),
        );
        progress_bar.set_message(message.to_string());
        progress_bar.enable_steady_tick(Duration::from_millis(80));

        Self {
            progress_bar: Some(progress_bar),
        }
    }

    /// Stops the spinner and clears it from the terminal.
    pub fn stop(&self) {
        if let Some(progress_bar) = &self.progress_bar {
            progress_bar.finish_and_clear();
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_spinner_creates_no_bar() {
        let spinner = Spinner::with_enabled("Translating...", false);
        assert!(spinner.progress_bar.is_none());
        // stop() on a suppressed spinner is a no-op
        spinner.stop();
    }

    #[test]
    fn test_enabled_spinner_creates_bar() {
        let spinner = Spinner::with_enabled("Translating...", true);
        assert!(spinner.progress_bar.is_some());
        spinner.stop();
    }
}
