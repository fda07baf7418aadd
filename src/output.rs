//! Global output configuration and utilities.
//!
//! Centralized control over CLI output behavior:
//!
//! - The translation payload (or the rendered table) goes to stdout, so it
//!   can be piped
//! - Status messages, file statistics, and warnings go to stderr
//! - Quiet mode suppresses non-essential output
//! - Colors can be disabled via the `NO_COLOR` environment variable

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Where a command sends its result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Print the result to stdout.
    #[default]
    Screen,
    /// Write the result to a derived file next to the input.
    File,
}

impl std::fmt::Display for OutputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Screen => write!(f, "screen"),
            Self::File => write!(f, "file"),
        }
    }
}

/// Global output configuration.
static OUTPUT_CONFIG: OnceLock<OutputConfig> = OnceLock::new();

/// Output configuration settings.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Suppress non-essential output.
    pub quiet: bool,
    /// Disable colored output.
    pub no_color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            quiet: false,
            // https://no-color.org/
            no_color: std::env::var("NO_COLOR").is_ok(),
        }
    }
}

/// Initialize the global output configuration.
///
/// Called once at startup with the CLI flags; subsequent calls are ignored.
pub fn init(config: OutputConfig) {
    let _ = OUTPUT_CONFIG.set(config);
}

/// Get the current output configuration.
pub fn config() -> &'static OutputConfig {
    OUTPUT_CONFIG.get_or_init(OutputConfig::default)
}

/// Check if quiet mode is enabled.
pub fn is_quiet() -> bool {
    config().quiet
}

/// Check if colors are disabled.
pub fn is_no_color() -> bool {
    config().no_color
}

/// Print a status message to stderr (respects quiet mode).
///
/// Use this for file statistics, detection reports, and progress notes.
#[macro_export]
macro_rules! status {
    ($($arg:tt)*) => {
        if !$crate::output::is_quiet() {
            eprintln!($($arg)*);
        }
    };
}

/// Print a warning to stderr (always shown, even in quiet mode).
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {{
        eprintln!($($arg)*);
    }};
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_output_config_default_not_quiet() {
        let config = OutputConfig::default();
        assert!(!config.quiet);
    }

    #[test]
    fn test_output_mode_serde_names() {
        let parsed: OutputMode = serde_json::from_str("\"file\"").unwrap();
        assert_eq!(parsed, OutputMode::File);
        assert_eq!(
            serde_json::to_string(&OutputMode::Screen).unwrap(),
            "\"screen\""
        );
    }
}
